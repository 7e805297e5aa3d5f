/// A position in source text, tracking line and column for error reporting.
///
/// `start`/`end` are char offsets. `line` is where the token starts and
/// `end_line` is the scanner's line once the token has been consumed, which
/// differs for raw fragments and strings spanning newlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub end_line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, end_line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            end_line,
            column,
        }
    }
}

/// Token classification for Volt source.
///
/// Values are carried in [`Token::text`], so the kind is a plain `Copy` tag
/// that doubles as the numeric token code used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Delimiters and raw text
    RawFragment,
    OpenDelimiter,
    CloseDelimiter,
    OpenEDelimiter,
    CloseEDelimiter,

    // Punctuation
    Comma,
    Question,
    Colon,
    Range,
    Dot,
    Assign,
    SBracketOpen,
    SBracketClose,
    ParenOpen,
    ParenClose,

    // Operators
    Pipe,
    Or,
    And,
    Not,
    Equals,
    NotEquals,
    Identical,
    NotIdentical,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Concat,
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Pow,
    IntDiv,

    // Literals
    Integer,
    Double,
    String,
    Identifier,
    Null,
    True,
    False,

    // Keywords
    In,
    Is,
    Defined,
    If,
    Else,
    ElseIf,
    ElseFor,
    EndIf,
    For,
    EndFor,
    Set,
    Macro,
    EndMacro,
    Block,
    EndBlock,
    Cache,
    EndCache,
    Extends,
    Include,
    With,
    Do,
    Autoescape,
    EndAutoescape,
    Break,
    Continue,

    // Whitespace runs inside code delimiters; never reaches the parser.
    Ignore,
}

impl TokenKind {
    /// Every kind, indexed by its numeric code.
    pub const ALL: [TokenKind; 67] = [
        TokenKind::RawFragment,
        TokenKind::OpenDelimiter,
        TokenKind::CloseDelimiter,
        TokenKind::OpenEDelimiter,
        TokenKind::CloseEDelimiter,
        TokenKind::Comma,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Range,
        TokenKind::Dot,
        TokenKind::Assign,
        TokenKind::SBracketOpen,
        TokenKind::SBracketClose,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Pipe,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::Not,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Identical,
        TokenKind::NotIdentical,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::Concat,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::Mod,
        TokenKind::Pow,
        TokenKind::IntDiv,
        TokenKind::Integer,
        TokenKind::Double,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Null,
        TokenKind::True,
        TokenKind::False,
        TokenKind::In,
        TokenKind::Is,
        TokenKind::Defined,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::ElseIf,
        TokenKind::ElseFor,
        TokenKind::EndIf,
        TokenKind::For,
        TokenKind::EndFor,
        TokenKind::Set,
        TokenKind::Macro,
        TokenKind::EndMacro,
        TokenKind::Block,
        TokenKind::EndBlock,
        TokenKind::Cache,
        TokenKind::EndCache,
        TokenKind::Extends,
        TokenKind::Include,
        TokenKind::With,
        TokenKind::Do,
        TokenKind::Autoescape,
        TokenKind::EndAutoescape,
        TokenKind::Break,
        TokenKind::Continue,
    ];

    /// Numeric token code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its numeric code.
    ///
    /// `Ignore` has no public code: it never reaches the parser.
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Human-readable label used in syntax error messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::RawFragment => "RAW_FRAGMENT",
            TokenKind::OpenDelimiter => "{%",
            TokenKind::CloseDelimiter => "%}",
            TokenKind::OpenEDelimiter => "{{",
            TokenKind::CloseEDelimiter => "}}",
            TokenKind::Comma => "COMMA",
            TokenKind::Question => "QUESTION MARK",
            TokenKind::Colon => "COLON",
            TokenKind::Range => "RANGE",
            TokenKind::Dot => "DOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::SBracketOpen => "[",
            TokenKind::SBracketClose => "]",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Pipe => "|",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Not => "NOT",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT EQUALS",
            TokenKind::Identical => "IDENTICAL",
            TokenKind::NotIdentical => "NOT IDENTICAL",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Concat => "~",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Divide => "/",
            TokenKind::Mod => "%",
            TokenKind::Pow => "**",
            TokenKind::IntDiv => "//",
            TokenKind::Integer => "INTEGER",
            TokenKind::Double => "DOUBLE",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Null => "NULL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::In => "IN",
            TokenKind::Is => "IS",
            TokenKind::Defined => "DEFINED",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::ElseIf => "ELSEIF",
            TokenKind::ElseFor => "ELSEFOR",
            TokenKind::EndIf => "ENDIF",
            TokenKind::For => "FOR",
            TokenKind::EndFor => "ENDFOR",
            TokenKind::Set => "SET",
            TokenKind::Macro => "MACRO",
            TokenKind::EndMacro => "ENDMACRO",
            TokenKind::Block => "BLOCK",
            TokenKind::EndBlock => "ENDBLOCK",
            TokenKind::Cache => "CACHE",
            TokenKind::EndCache => "ENDCACHE",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Include => "INCLUDE",
            TokenKind::With => "WITH",
            TokenKind::Do => "DO",
            TokenKind::Autoescape => "AUTOESCAPE",
            TokenKind::EndAutoescape => "ENDAUTOESCAPE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Ignore => "WHITESPACE",
        }
    }

    /// Whether the token's text is meaningful to the parser.
    ///
    /// Everything else is a pure marker whose text is dropped on shift.
    pub fn carries_value(self) -> bool {
        matches!(
            self,
            TokenKind::RawFragment
                | TokenKind::Integer
                | TokenKind::Double
                | TokenKind::String
                | TokenKind::Identifier
        )
    }

    /// Resolve a word scanned inside code delimiters.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "elseif" => TokenKind::ElseIf,
            "elsefor" => TokenKind::ElseFor,
            "endif" => TokenKind::EndIf,
            "for" => TokenKind::For,
            "endfor" => TokenKind::EndFor,
            "in" => TokenKind::In,
            "set" => TokenKind::Set,
            "block" => TokenKind::Block,
            "endblock" => TokenKind::EndBlock,
            "cache" => TokenKind::Cache,
            "endcache" => TokenKind::EndCache,
            "extends" => TokenKind::Extends,
            "include" => TokenKind::Include,
            "with" => TokenKind::With,
            "do" => TokenKind::Do,
            "autoescape" => TokenKind::Autoescape,
            "endautoescape" => TokenKind::EndAutoescape,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "macro" => TokenKind::Macro,
            "endmacro" => TokenKind::EndMacro,
            "is" => TokenKind::Is,
            "defined" => TokenKind::Defined,
            "not" => TokenKind::Not,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "null" => TokenKind::Null,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Label for a raw token code, `"UNKNOWN"` when the code names no kind.
pub fn token_name(code: u8) -> &'static str {
    TokenKind::from_code(code).map_or("UNKNOWN", TokenKind::name)
}

/// Characters the scanner and the structural guard treat as blank.
pub fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b')
}

/// A token produced by the Volt scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// True when the token is a raw fragment made only of blank characters.
    pub fn is_blank_fragment(&self) -> bool {
        self.kind == TokenKind::RawFragment && self.text.chars().all(is_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (index, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.code()), index, "{kind:?}");
            assert_eq!(TokenKind::from_code(kind.code()), Some(*kind));
        }
    }

    #[test]
    fn test_ignore_sits_after_all_codes() {
        assert_eq!(usize::from(TokenKind::Ignore.code()), TokenKind::ALL.len());
        assert_eq!(TokenKind::from_code(TokenKind::Ignore.code()), None);
    }

    #[test]
    fn test_every_kind_has_a_distinct_label() {
        let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_token_name_lookup() {
        assert_eq!(token_name(TokenKind::Integer.code()), "INTEGER");
        assert_eq!(token_name(TokenKind::Plus.code()), "+");
        assert_eq!(token_name(TokenKind::Colon.code()), "COLON");
        assert_eq!(token_name(250), "UNKNOWN");
    }

    #[test]
    fn test_keywords_are_lowercase_only() {
        assert_eq!(TokenKind::keyword("endautoescape"), Some(TokenKind::EndAutoescape));
        assert_eq!(TokenKind::keyword("IF"), None);
        assert_eq!(TokenKind::keyword("items"), None);
    }

    #[test]
    fn test_blank_fragment() {
        let span = Span::new(0, 3, 1, 2, 1);
        assert!(Token::new(TokenKind::RawFragment, " \n\t", span).is_blank_fragment());
        assert!(!Token::new(TokenKind::RawFragment, " x ", span).is_blank_fragment());
        assert!(!Token::new(TokenKind::Identifier, " ", span).is_blank_fragment());
    }
}
