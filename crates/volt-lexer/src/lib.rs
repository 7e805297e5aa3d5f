//! Volt Lexer
//!
//! Tokenizes Volt template source into a stream of tokens.
//! The scanner flips between raw text and template code at the
//! `{% %}` / `{{ }}` delimiters, skips `{# #}` comments, and honours
//! `-` whitespace-control markers on delimiters.
//!
//! # Example
//!
//! ```
//! use volt_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("Hi {{ name }}").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::RawFragment);
//! assert_eq!(tokens[1].kind, TokenKind::OpenEDelimiter);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::{Scanner, ScannerMode};
pub use token::{is_blank, token_name, Span, Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
