//! Volt Parser
//!
//! Turns Volt template source into a typed syntax tree. Tokens from
//! `volt-lexer` pass through a structural guard (template inheritance and
//! block nesting rules) into a table-driven LALR(1) engine whose reductions
//! build the tree.
//!
//! # Example
//!
//! ```
//! use volt_parser::ast::{ExprKind, StatementKind};
//!
//! let template = volt_parser::parse("{{ 1 + 2 }}", "index.volt").unwrap();
//! assert!(matches!(
//!     &template.statements[0].kind,
//!     StatementKind::Echo(expr) if matches!(expr.kind, ExprKind::Binary { .. })
//! ));
//! ```

mod actions;
pub mod ast;
mod engine;
pub mod error;
pub mod grammar;
mod guard;
pub mod limits;
pub mod parser;

pub use ast::{Expression, Statement, Template};
pub use error::{ErrorKind, ParseError};
pub use limits::ParseLimits;
pub use parser::Parser;

/// Parse template source with the default limits.
pub fn parse(source: &str, path: &str) -> Result<Template, ParseError> {
    Parser::new().parse(source, path)
}

/// Parse template source given as bytes with the default limits.
pub fn parse_bytes(source: &[u8], path: &str) -> Result<Template, ParseError> {
    Parser::new().parse_bytes(source, path)
}
