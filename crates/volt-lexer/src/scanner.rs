use crate::token::{is_blank, Span, Token, TokenKind};
use crate::LexerError;

/// Scanner mode determines how the next characters are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerMode {
    /// Literal template text up to the next delimiter.
    Raw,
    /// Inside `{% ... %}`.
    Statement,
    /// Inside `{{ ... }}`.
    Expression,
}

/// Operators recognised inside code delimiters, longest spelling first.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("===", TokenKind::Identical),
    ("!==", TokenKind::NotIdentical),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<>", TokenKind::NotEquals),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("**", TokenKind::Pow),
    ("//", TokenKind::IntDiv),
    ("..", TokenKind::Range),
    ("=", TokenKind::Assign),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("!", TokenKind::Not),
    ("|", TokenKind::Pipe),
    ("~", TokenKind::Concat),
    (".", TokenKind::Dot),
    ("*", TokenKind::Times),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Mod),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    ("?", TokenKind::Question),
    ("(", TokenKind::ParenOpen),
    (")", TokenKind::ParenClose),
    ("[", TokenKind::SBracketOpen),
    ("]", TokenKind::SBracketClose),
];

/// Longest source excerpt quoted in an unknown-character error.
const ERROR_EXCERPT: usize = 16;

/// Volt source scanner.
///
/// A single-pass pull iterator over the template. Raw text is accumulated
/// until a delimiter opener, then the scanner switches into statement or
/// expression mode until the matching closer brings it back.
///
/// - `Vec<char>` source for index-based navigation
/// - Line counter bumped on every consumed `\n`, in every mode
/// - At most one token queued (the delimiter that ended a raw fragment)
/// - Nothing more is produced after the first error
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    mode: ScannerMode,
    trim_leading: bool,
    pending: Option<Token>,
    failed: bool,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            mode: ScannerMode::Raw,
            trim_leading: false,
            pending: None,
            failed: false,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    ///
    /// Whitespace inside delimiters is kept as [`TokenKind::Ignore`] tokens.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        Scanner::new(source).collect()
    }

    /// Current line, after the last consumed character.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn mode(&self) -> ScannerMode {
        self.mode
    }

    // =========================================================================
    // Raw text
    // =========================================================================

    /// Scan raw text up to the next delimiter and queue that delimiter.
    fn scan_raw(&mut self) -> Result<Option<Token>, LexerError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_col = self.column;
        let mut text = String::new();

        while !self.is_at_end() {
            match (self.peek(), self.peek_next()) {
                ('{', '%') | ('{', '{') => break,
                ('{', '#') => self.skip_comment()?,
                (c, _) => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        let end_pos = self.pos;
        let end_line = self.line;

        if std::mem::take(&mut self.trim_leading) {
            text = text.trim_start_matches(is_blank).to_string();
        }

        if !self.is_at_end() {
            let (delimiter, trim_trailing) = self.scan_open_delimiter();
            if trim_trailing {
                let kept = text.trim_end_matches(is_blank).len();
                text.truncate(kept);
            }
            self.pending = Some(delimiter);
        }

        if text.is_empty() {
            return Ok(self.pending.take());
        }

        let span = Span::new(start_pos, end_pos, start_line, end_line, start_col);
        Ok(Some(Token::new(TokenKind::RawFragment, text, span)))
    }

    /// Skip a `{# ... #}` comment.
    fn skip_comment(&mut self) -> Result<(), LexerError> {
        let start_line = self.line;
        let start_col = self.column;
        self.advance(); // consume `{`
        self.advance(); // consume `#`

        while !self.is_at_end() {
            if self.peek() == '#' && self.peek_next() == '}' {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexerError {
            message: "Unterminated comment near EOF".into(),
            line: start_line,
            column: start_col,
        })
    }

    /// Scan `{%` or `{{` with an optional `-` trim marker.
    fn scan_open_delimiter(&mut self) -> (Token, bool) {
        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;

        self.advance(); // consume `{`
        let (kind, mode) = if self.peek() == '%' {
            (TokenKind::OpenDelimiter, ScannerMode::Statement)
        } else {
            (TokenKind::OpenEDelimiter, ScannerMode::Expression)
        };
        self.advance();

        let trim = self.peek() == '-';
        if trim {
            self.advance();
        }

        let token = self.make_token(kind, start_pos, line, column);
        self.switch_mode(mode);
        (token, trim)
    }

    // =========================================================================
    // Template code
    // =========================================================================

    /// Scan the next token inside `{% %}` or `{{ }}`.
    fn scan_code(&mut self) -> Result<Option<Token>, LexerError> {
        if self.is_at_end() {
            return Ok(None);
        }

        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;

        if is_blank(self.peek()) {
            while !self.is_at_end() && is_blank(self.peek()) {
                self.advance();
            }
            return Ok(Some(self.make_token(TokenKind::Ignore, start_pos, line, column)));
        }

        if let Some(token) = self.scan_close_delimiter() {
            return Ok(Some(token));
        }

        let token = match self.peek() {
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(),
            c if c.is_ascii_digit() => self.scan_number()?,
            '"' | '\'' => self.scan_string()?,
            _ => self.scan_operator()?,
        };
        Ok(Some(token))
    }

    /// Scan the closer matching the current mode, if one starts here.
    fn scan_close_delimiter(&mut self) -> Option<Token> {
        let (closer, kind) = match self.mode {
            ScannerMode::Statement => ('%', TokenKind::CloseDelimiter),
            ScannerMode::Expression => ('}', TokenKind::CloseEDelimiter),
            ScannerMode::Raw => return None,
        };

        let trim = self.peek() == '-';
        let offset = usize::from(trim);
        if self.peek_at(offset) != closer || self.peek_at(offset + 1) != '}' {
            return None;
        }

        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;
        for _ in 0..offset + 2 {
            self.advance();
        }

        self.trim_leading = trim;
        let token = self.make_token(kind, start_pos, line, column);
        self.switch_mode(ScannerMode::Raw);
        Some(token)
    }

    /// Scan an identifier or keyword.
    fn scan_word(&mut self) -> Token {
        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;

        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            self.advance();
        }

        let word: String = self.chars[start_pos..self.pos].iter().collect();
        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
        let span = Span::new(start_pos, self.pos, line, self.line, column);
        Token::new(kind, word, span)
    }

    /// Scan a number literal: integer, or double when a fraction or exponent follows.
    fn scan_number(&mut self) -> Result<Token, LexerError> {
        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;
        let mut is_double = false;

        self.skip_digits();

        // `1..3` is a range, not a fraction
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            is_double = true;
            self.advance();
            self.skip_digits();
        }

        if matches!(self.peek(), 'e' | 'E') {
            let sign = usize::from(matches!(self.peek_next(), '+' | '-'));
            if self.peek_at(1 + sign).is_ascii_digit() {
                is_double = true;
                for _ in 0..1 + sign {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let text: String = self.chars[start_pos..self.pos].iter().collect();
        let valid = if is_double {
            text.parse::<f64>().is_ok()
        } else {
            text.parse::<i64>().is_ok()
        };
        if !valid {
            return Err(LexerError {
                message: format!("Invalid number: '{text}'"),
                line,
                column,
            });
        }

        let kind = if is_double {
            TokenKind::Double
        } else {
            TokenKind::Integer
        };
        let span = Span::new(start_pos, self.pos, line, self.line, column);
        Ok(Token::new(kind, text, span))
    }

    /// Scan a quoted string literal. The token text is the decoded content.
    fn scan_string(&mut self) -> Result<Token, LexerError> {
        let quote = self.peek();
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;
        self.advance(); // consume opening quote

        let mut value = String::new();

        while !self.is_at_end() && self.peek() != quote {
            if self.peek() == '\\' {
                self.advance(); // consume backslash
                if self.is_at_end() {
                    break;
                }
                match self.peek() {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    '\'' => value.push('\''),
                    c => {
                        value.push('\\');
                        value.push(c);
                    }
                }
                self.advance();
            } else {
                value.push(self.peek());
                self.advance();
            }
        }

        if self.is_at_end() {
            return Err(LexerError {
                message: "Unterminated string literal near EOF".into(),
                line: start_line,
                column: start_col,
            });
        }

        self.advance(); // consume closing quote

        let span = Span::new(start_pos, self.pos, start_line, self.line, start_col);
        Ok(Token::new(TokenKind::String, value, span))
    }

    /// Scan an operator or punctuation mark, longest match first.
    fn scan_operator(&mut self) -> Result<Token, LexerError> {
        let start_pos = self.pos;
        let line = self.line;
        let column = self.column;

        let Some(&(spelling, kind)) = OPERATORS.iter().find(|(op, _)| self.starts_with(op)) else {
            return Err(self.error(format!("Parsing error before '{}'", self.excerpt())));
        };

        for _ in 0..spelling.len() {
            self.advance();
        }
        Ok(self.make_token(kind, start_pos, line, column))
    }

    // --- Helpers ---

    fn switch_mode(&mut self, mode: ScannerMode) {
        tracing::trace!(from = ?self.mode, to = ?mode, line = self.line, "scanner mode switch");
        self.mode = mode;
    }

    fn make_token(&self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token {
        let text: String = self.chars[start..self.pos].iter().collect();
        Token::new(kind, text, Span::new(start, self.pos, line, self.line, column))
    }

    fn starts_with(&self, spelling: &str) -> bool {
        spelling
            .chars()
            .enumerate()
            .all(|(offset, c)| self.peek_at(offset) == c)
    }

    fn excerpt(&self) -> String {
        let rest = &self.chars[self.pos..];
        if rest.len() > ERROR_EXCERPT {
            let head: String = rest[..ERROR_EXCERPT].iter().collect();
            format!("{head}...")
        } else {
            rest.iter().collect()
        }
    }

    fn skip_digits(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    fn peek(&self) -> char {
        self.peek_at(0)
    }

    fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    fn peek_at(&self, offset: usize) -> char {
        self.chars.get(self.pos + offset).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.failed {
            return None;
        }

        let scanned = match self.mode {
            ScannerMode::Raw => self.scan_raw(),
            ScannerMode::Statement | ScannerMode::Expression => self.scan_code(),
        };

        match scanned {
            Ok(token) => token.map(Ok),
            Err(error) => {
                self.failed = true;
                self.pending = None;
                Some(Err(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: tokenize and return token kinds, dropping whitespace.
    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Ignore)
            .map(|t| t.kind)
            .collect()
    }

    /// Helper: tokenize, drop whitespace, and panic on error.
    fn tokens(source: &str) -> Vec<Token> {
        Scanner::tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Ignore)
            .collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokens(source).into_iter().map(|t| t.text).collect()
    }

    // =========================================================================
    // Raw text
    // =========================================================================

    #[test]
    fn test_empty_source() {
        assert!(Scanner::tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_plain_text_is_one_fragment() {
        let toks = tokens("Hello,\nworld");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::RawFragment);
        assert_eq!(toks[0].text, "Hello,\nworld");
        assert_eq!(toks[0].span.line, 1);
        assert_eq!(toks[0].span.end_line, 2);
    }

    #[test]
    fn test_fragment_between_delimiters() {
        assert_eq!(
            kinds("a{{ b }}c"),
            vec![
                TokenKind::RawFragment,
                TokenKind::OpenEDelimiter,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
                TokenKind::RawFragment,
            ]
        );
    }

    #[test]
    fn test_zero_length_fragment_suppressed() {
        assert_eq!(
            kinds("{{ a }}{{ b }}"),
            vec![
                TokenKind::OpenEDelimiter,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
                TokenKind::OpenEDelimiter,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
            ]
        );
    }

    #[test]
    fn test_single_brace_is_raw_text() {
        assert_eq!(texts("a { b } c"), vec!["a { b } c"]);
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comment_is_skipped() {
        assert_eq!(texts("a{# note #}b"), vec!["ab"]);
    }

    #[test]
    fn test_comment_counts_lines() {
        let toks = tokens("{# one\ntwo #}{{ x }}");
        assert_eq!(toks[0].kind, TokenKind::OpenEDelimiter);
        assert_eq!(toks[0].span.line, 2);
    }

    #[test]
    fn test_comment_unterminated() {
        let err = Scanner::tokenize("a {# never closed").unwrap_err();
        assert!(err.message.contains("Unterminated comment"));
        assert_eq!(err.column, 3);
    }

    // =========================================================================
    // Delimiters and modes
    // =========================================================================

    #[test]
    fn test_statement_delimiters() {
        assert_eq!(
            kinds("{% if x %}"),
            vec![
                TokenKind::OpenDelimiter,
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::CloseDelimiter,
            ]
        );
    }

    #[test]
    fn test_modes_switch_at_delimiters() {
        let mut scanner = Scanner::new("{{ a }}");
        assert_eq!(scanner.mode(), ScannerMode::Raw);
        scanner.next();
        assert_eq!(scanner.mode(), ScannerMode::Expression);
        let rest: Vec<_> = scanner.by_ref().collect();
        assert_eq!(rest.len(), 4);
        assert_eq!(scanner.mode(), ScannerMode::Raw);
    }

    #[test]
    fn test_whitespace_is_ignore_token() {
        let toks = Scanner::tokenize("{{  a }}").unwrap();
        assert_eq!(toks[1].kind, TokenKind::Ignore);
        assert_eq!(toks[1].text, "  ");
    }

    #[test]
    fn test_closer_of_other_mode_is_not_a_closer() {
        let err = Scanner::tokenize("{% a }}").unwrap_err();
        assert!(err.message.starts_with("Parsing error before '}}'"));
    }

    #[test]
    fn test_trim_markers_strip_surrounding_blanks() {
        assert_eq!(
            texts("a  \n{%- set x = 1 -%}\n  b"),
            vec!["a", "{%-", "set", "x", "=", "1", "-%}", "b"]
        );
    }

    #[test]
    fn test_trim_only_affects_marked_side() {
        assert_eq!(texts("a  {{- x }}  b"), vec!["a", "{{-", "x", "}}", "  b"]);
    }

    #[test]
    fn test_trimmed_newlines_still_counted() {
        let toks = tokens("{{ a -}}\n\n{{ b }}");
        let b = toks.iter().find(|t| t.text == "b").unwrap();
        assert_eq!(b.span.line, 3);
    }

    #[test]
    fn test_unclosed_code_ends_stream() {
        assert_eq!(kinds("{{ a"), vec![TokenKind::OpenEDelimiter, TokenKind::Identifier]);
    }

    // =========================================================================
    // Words
    // =========================================================================

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("{% for k, v in items if v is not defined %}"),
            vec![
                TokenKind::OpenDelimiter,
                TokenKind::For,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::In,
                TokenKind::Identifier,
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Is,
                TokenKind::Not,
                TokenKind::Defined,
                TokenKind::CloseDelimiter,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let toks = tokens("{{ index }}");
        assert_eq!(toks[1].kind, TokenKind::Identifier);
        assert_eq!(toks[1].text, "index");
    }

    #[test]
    fn test_literal_keywords() {
        assert_eq!(
            kinds("{{ null true false }}")[1..4].to_vec(),
            vec![TokenKind::Null, TokenKind::True, TokenKind::False]
        );
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_integer_and_double() {
        let toks = tokens("{{ 42 3.14 2e3 }}");
        assert_eq!(toks[1].kind, TokenKind::Integer);
        assert_eq!(toks[1].text, "42");
        assert_eq!(toks[2].kind, TokenKind::Double);
        assert_eq!(toks[2].text, "3.14");
        assert_eq!(toks[3].kind, TokenKind::Double);
        assert_eq!(toks[3].text, "2e3");
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            kinds("{{ 1..10 }}")[1..4].to_vec(),
            vec![TokenKind::Integer, TokenKind::Range, TokenKind::Integer]
        );
    }

    #[test]
    fn test_integer_overflow() {
        let err = Scanner::tokenize("{{ 99999999999999999999 }}").unwrap_err();
        assert!(err.message.contains("Invalid number"));
    }

    // =========================================================================
    // Strings
    // =========================================================================

    #[test]
    fn test_double_quoted_string() {
        let toks = tokens("{{ \"hello\" }}");
        assert_eq!(toks[1].kind, TokenKind::String);
        assert_eq!(toks[1].text, "hello");
    }

    #[test]
    fn test_single_quoted_string() {
        assert_eq!(tokens("{{ 'it' }}")[1].text, "it");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(tokens(r#"{{ "a\"b\n\d" }}"#)[1].text, "a\"b\n\\d");
    }

    #[test]
    fn test_string_unterminated() {
        let err = Scanner::tokenize("{{ \"abc }}").unwrap_err();
        assert!(err.message.contains("Unterminated string"));
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_string_newline_counts_lines() {
        let toks = tokens("{{ 'a\nb' }}");
        assert_eq!(toks[1].span.line, 1);
        assert_eq!(toks[1].span.end_line, 2);
        assert_eq!(toks[2].span.line, 2);
    }

    // =========================================================================
    // Operators
    // =========================================================================

    #[test]
    fn test_greedy_operators() {
        assert_eq!(
            kinds("{{ a === b == c = d ** e * f // g / h !== i != j <> k }}")[1..].to_vec(),
            vec![
                TokenKind::Identifier,
                TokenKind::Identical,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Pow,
                TokenKind::Identifier,
                TokenKind::Times,
                TokenKind::Identifier,
                TokenKind::IntDiv,
                TokenKind::Identifier,
                TokenKind::Divide,
                TokenKind::Identifier,
                TokenKind::NotIdentical,
                TokenKind::Identifier,
                TokenKind::NotEquals,
                TokenKind::Identifier,
                TokenKind::NotEquals,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{{ f(a[0], b.c) ~ d | e ? g : h }}")[1..].to_vec(),
            vec![
                TokenKind::Identifier,
                TokenKind::ParenOpen,
                TokenKind::Identifier,
                TokenKind::SBracketOpen,
                TokenKind::Integer,
                TokenKind::SBracketClose,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::ParenClose,
                TokenKind::Concat,
                TokenKind::Identifier,
                TokenKind::Pipe,
                TokenKind::Identifier,
                TokenKind::Question,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
            ]
        );
    }

    #[test]
    fn test_minus_before_closer() {
        assert_eq!(
            kinds("{{ a - b }}")[1..].to_vec(),
            vec![
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::CloseEDelimiter,
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let err = Scanner::tokenize("line\n{{ a @ b }}").unwrap_err();
        assert_eq!(err.message, "Parsing error before '@ b }}'");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_unknown_character_excerpt_is_truncated() {
        let err = Scanner::tokenize("{{ $abcdefghijklmnopqrstuvwxyz }}").unwrap_err();
        assert_eq!(err.message, "Parsing error before '$abcdefghijklmno...'");
    }

    #[test]
    fn test_no_tokens_after_error() {
        let mut scanner = Scanner::new("{{ @ }} tail");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }

    // =========================================================================
    // Lines
    // =========================================================================

    #[test]
    fn test_token_lines() {
        let toks = tokens("a\n{% if\nx %}\n");
        let x = toks.iter().find(|t| t.text == "x").unwrap();
        assert_eq!(x.span.line, 3);
        assert_eq!(x.span.column, 1);
        let last = toks.last().unwrap();
        assert_eq!(last.kind, TokenKind::RawFragment);
        assert_eq!(last.span.line, 3);
        assert_eq!(last.span.end_line, 4);
    }
}
