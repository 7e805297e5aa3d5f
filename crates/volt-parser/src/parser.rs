//! Template parser for Volt.
//!
//! Pulls tokens from the `volt-lexer` scanner, runs each through the
//! structural guard and feeds the survivors to the LALR(1) engine.
//! The first failure of any stage ends the parse.

use std::sync::Arc;

use crate::actions::Value;
use crate::ast::Template;
use crate::engine::{Engine, Rejection};
use crate::error::{ErrorKind, ParseError};
use crate::grammar::Terminal;
use crate::guard::{Admission, StructuralGuard};
use crate::limits::ParseLimits;
use volt_lexer::{Scanner, Token, TokenKind};

/// Volt template parser.
///
/// Holds only configuration; every call to [`Parser::parse`] builds its own
/// scanner, guard and stack, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    limits: ParseLimits,
}

impl Parser {
    /// Create a parser with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom limits.
    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    /// Parse template source. `path` labels nodes and diagnostics.
    pub fn parse(&self, source: &str, path: &str) -> Result<Template, ParseError> {
        if source.is_empty() {
            return Ok(Template::default());
        }

        tracing::debug!(path, bytes = source.len(), "parsing template");
        let result = self.run(source, path);
        if let Err(error) = &result {
            tracing::debug!(path, kind = ?error.kind, line = error.line, "{}", error.message);
        }
        result
    }

    /// Parse template source given as bytes, which must be UTF-8.
    pub fn parse_bytes(&self, source: &[u8], path: &str) -> Result<Template, ParseError> {
        let source = std::str::from_utf8(source).map_err(|_| {
            ParseError::new(
                ErrorKind::Input,
                "View code must be a valid UTF-8 string",
                path,
                0,
            )
        })?;
        self.parse(source, path)
    }

    fn run(&self, source: &str, path: &str) -> Result<Template, ParseError> {
        let mut scanner = Scanner::new(source);
        let mut guard = StructuralGuard::new();
        let mut engine = Engine::new(Arc::from(path), &self.limits);

        for token in scanner.by_ref() {
            let token = token.map_err(|e| ParseError::lex(e, path))?;
            let line = token.span.line;

            let kind = match guard.admit(&token).map_err(|v| v.at(path, line))? {
                Admission::Feed(kind) => kind,
                Admission::Skip => continue,
            };
            let Some(terminal) = Terminal::from_token(kind) else {
                continue;
            };

            let Token { text, span, .. } = token;
            let value = if kind.carries_value() {
                Value::Text(text)
            } else {
                Value::Marker
            };
            engine
                .push(terminal, value, span.end_line)
                .map_err(|rejection| self.reject(rejection, Some(kind), path, line))?;
        }

        let line = scanner.line();
        let statements = engine
            .finish()
            .map_err(|rejection| self.reject(rejection, None, path, line))?;
        Ok(Template { statements })
    }

    /// Turn an engine rejection into the diagnostic for `token` (`None` at end of input).
    fn reject(
        &self,
        rejection: Rejection,
        token: Option<TokenKind>,
        path: &str,
        line: usize,
    ) -> ParseError {
        match (rejection, token) {
            (Rejection::Syntax, Some(kind)) => ParseError::unexpected_token(kind, path, line),
            (Rejection::Syntax, None) => ParseError::unexpected_eof(path, line),
            (Rejection::Overflow, _) => {
                ParseError::overflow(self.limits.max_stack_depth, path, line)
            }
            (Rejection::Corrupt(message), _) => {
                ParseError::new(ErrorKind::Internal, message, path, line)
            }
        }
    }
}
