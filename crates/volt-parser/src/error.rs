//! Diagnostics for a failed parse.
//!
//! Exactly one [`ParseError`] is produced per failed parse: the first
//! failure of any kind stops scanning and parsing.

use volt_lexer::{LexerError, TokenKind};

/// Which stage rejected the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token: unterminated string, unknown character.
    Lex,
    /// Token sequence the grammar does not accept.
    Syntax,
    /// Grammatically valid, but breaks the inheritance or nesting rules.
    Structural,
    /// Nesting deeper than the parser stack allows.
    Overflow,
    /// Source is not text.
    Input,
    /// The value stack did not match the reduced rule.
    Internal,
}

/// Parser error with the template path and line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} in {path} on line {line}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub path: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, path: &str, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            path: path.to_string(),
            line,
        }
    }

    pub(crate) fn lex(error: LexerError, path: &str) -> Self {
        Self::new(ErrorKind::Lex, error.message, path, error.line)
    }

    /// The parser met `token` where the grammar allows none of it.
    pub(crate) fn unexpected_token(token: TokenKind, path: &str, line: usize) -> Self {
        let message = format!("Syntax error, unexpected token {}", token.name());
        Self::new(ErrorKind::Syntax, message, path, line)
    }

    pub(crate) fn unexpected_eof(path: &str, line: usize) -> Self {
        Self::new(ErrorKind::Syntax, "Syntax error, unexpected EOF", path, line)
    }

    pub(crate) fn overflow(depth: usize, path: &str, line: usize) -> Self {
        let message = format!("Stack overflow: template nesting exceeds parser depth of {depth}");
        Self::new(ErrorKind::Overflow, message, path, line)
    }
}

/// Template-specific rules the grammar alone cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructuralViolation {
    #[error("Extends statement must be placed at the first line in the template")]
    ExtendsNotFirst,
    #[error("Child templates only may contain blocks")]
    ChildOutsideBlock,
    #[error("Embedding blocks into other blocks is not supported")]
    NestedBlock,
    #[error("Unexpected ELSEIF")]
    ElseIfOutsideIf,
}

impl StructuralViolation {
    pub(crate) fn at(self, path: &str, line: usize) -> ParseError {
        ParseError::new(ErrorKind::Structural, self.to_string(), path, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names_path_and_line() {
        let err = ParseError::unexpected_token(TokenKind::CloseDelimiter, "index.volt", 3);
        assert_eq!(
            err.to_string(),
            "Syntax error, unexpected token %} in index.volt on line 3"
        );
    }

    #[test]
    fn test_eof_message() {
        let err = ParseError::unexpected_eof("a.volt", 1);
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "Syntax error, unexpected EOF");
    }

    #[test]
    fn test_lex_error_keeps_scanner_message() {
        let lexed = LexerError {
            message: "Unterminated string literal near EOF".into(),
            line: 4,
            column: 2,
        };
        let err = ParseError::lex(lexed, "x.volt");
        assert_eq!(err.kind, ErrorKind::Lex);
        assert_eq!(err.line, 4);
        assert_eq!(
            err.to_string(),
            "Unterminated string literal near EOF in x.volt on line 4"
        );
    }

    #[test]
    fn test_structural_messages() {
        let err = StructuralViolation::NestedBlock.at("page.volt", 7);
        assert_eq!(err.kind, ErrorKind::Structural);
        assert_eq!(
            err.to_string(),
            "Embedding blocks into other blocks is not supported in page.volt on line 7"
        );
        assert_eq!(
            StructuralViolation::ElseIfOutsideIf.at("page.volt", 2).to_string(),
            "Unexpected ELSEIF in page.volt on line 2"
        );
    }
}
