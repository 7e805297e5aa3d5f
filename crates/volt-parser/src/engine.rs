//! Table-driven LALR(1) automaton.
//!
//! Terminals are pushed one at a time. Each push performs every reduction
//! the lookahead triggers and then shifts it. The stack is bounded; its
//! entries own the partially built nodes, so abandoning a parse drops them.

use std::sync::Arc;

use crate::actions::{self, Value};
use crate::ast::{Location, Statement};
use crate::grammar::{self, Action, Symbol, Terminal, RULES};
use crate::limits::ParseLimits;

#[derive(Debug)]
struct StackEntry {
    state: u16,
    symbol: Symbol,
    value: Value,
}

/// Why the automaton stopped.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// No action for the lookahead in the current state.
    Syntax,
    /// A shift would exceed the stack bound.
    Overflow,
    /// The stack did not hold what a reduction expected.
    Corrupt(String),
}

#[derive(Debug)]
pub(crate) struct Engine {
    stack: Vec<StackEntry>,
    file: Arc<str>,
    max_depth: usize,
    /// End line of the most recently shifted token; reductions stamp it on nodes.
    last_line: usize,
}

impl Engine {
    pub(crate) fn new(file: Arc<str>, limits: &ParseLimits) -> Self {
        let mut stack = Vec::with_capacity(limits.max_stack_depth.min(64));
        stack.push(StackEntry {
            state: 0,
            symbol: Symbol::T(Terminal::End),
            value: Value::Marker,
        });
        Self {
            stack,
            file,
            max_depth: limits.max_stack_depth,
            last_line: 1,
        }
    }

    /// Offer a terminal with its value. `end_line` is the line its text ends on.
    pub(crate) fn push(
        &mut self,
        terminal: Terminal,
        value: Value,
        end_line: usize,
    ) -> Result<(), Rejection> {
        loop {
            match grammar::action(self.state(), terminal) {
                Some(Action::Shift(next)) => {
                    tracing::trace!(state = next, token = terminal.name(), "shift");
                    self.shift(next, Symbol::T(terminal), value)?;
                    self.last_line = end_line;
                    return Ok(());
                }
                Some(Action::Reduce(rule)) => self.reduce(rule)?,
                Some(Action::Accept) | None => return Err(Rejection::Syntax),
            }
        }
    }

    /// Signal end of input and collect the accepted statement list.
    pub(crate) fn finish(mut self) -> Result<Vec<Statement>, Rejection> {
        loop {
            match grammar::action(self.state(), Terminal::End) {
                Some(Action::Reduce(rule)) => self.reduce(rule)?,
                Some(Action::Accept) => break,
                Some(Action::Shift(_)) | None => return Err(Rejection::Syntax),
            }
        }
        match self.stack.pop() {
            Some(StackEntry {
                value: Value::Statements(statements),
                ..
            }) => Ok(statements),
            _ => Err(Rejection::Corrupt(
                "accepted without a statement list".to_string(),
            )),
        }
    }

    fn state(&self) -> u16 {
        self.stack.last().map_or(0, |entry| entry.state)
    }

    fn shift(&mut self, state: u16, symbol: Symbol, value: Value) -> Result<(), Rejection> {
        if self.stack.len() >= self.max_depth {
            return Err(Rejection::Overflow);
        }
        self.stack.push(StackEntry {
            state,
            symbol,
            value,
        });
        Ok(())
    }

    fn reduce(&mut self, index: u16) -> Result<(), Rejection> {
        let rule = RULES
            .get(usize::from(index))
            .ok_or_else(|| Rejection::Corrupt(format!("no rule {index}")))?;
        let arity = rule.rhs.len();
        if arity >= self.stack.len() {
            return Err(Rejection::Corrupt(format!(
                "stack too shallow to reduce {rule}"
            )));
        }

        let popped = self.stack.split_off(self.stack.len() - arity);
        debug_assert!(popped
            .iter()
            .zip(rule.rhs)
            .all(|(entry, symbol)| entry.symbol == *symbol));
        let values = popped.into_iter().map(|entry| entry.value).collect();

        let location = Location {
            file: Arc::clone(&self.file),
            line: self.last_line,
        };
        let value = actions::build(index, values, &location)
            .map_err(|expected| Rejection::Corrupt(format!("{rule}: expected {expected}")))?;

        let next = grammar::goto(self.state(), rule.lhs)
            .ok_or_else(|| Rejection::Corrupt(format!("no goto after {rule}")))?;
        tracing::trace!(state = next, rule = %rule, "reduce");
        self.shift(next, Symbol::N(rule.lhs), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, StatementKind};
    use pretty_assertions::assert_eq;

    fn engine(depth: usize) -> Engine {
        Engine::new(
            Arc::from("t.volt"),
            &ParseLimits::new().with_max_stack_depth(depth),
        )
    }

    fn marker(engine: &mut Engine, terminal: Terminal) -> Result<(), Rejection> {
        engine.push(terminal, Value::Marker, 1)
    }

    fn text(engine: &mut Engine, terminal: Terminal, s: &str) -> Result<(), Rejection> {
        engine.push(terminal, Value::Text(s.to_string()), 1)
    }

    #[test]
    fn test_echo_accepted() {
        let mut e = engine(100);
        marker(&mut e, Terminal::OpenEDelimiter).unwrap();
        text(&mut e, Terminal::Identifier, "name").unwrap();
        marker(&mut e, Terminal::CloseEDelimiter).unwrap();
        let statements = e.finish().unwrap();
        assert_eq!(statements.len(), 1);
        match &statements[0].kind {
            StatementKind::Echo(expr) => {
                assert_eq!(expr.kind, ExprKind::Identifier("name".into()))
            }
            other => panic!("Expected Echo, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_terminal_rejected() {
        let mut e = engine(100);
        marker(&mut e, Terminal::OpenDelimiter).unwrap();
        assert_eq!(marker(&mut e, Terminal::CloseEDelimiter), Err(Rejection::Syntax));
    }

    #[test]
    fn test_incomplete_input_rejected_at_end() {
        let mut e = engine(100);
        marker(&mut e, Terminal::OpenEDelimiter).unwrap();
        assert_eq!(e.finish().unwrap_err(), Rejection::Syntax);
    }

    #[test]
    fn test_empty_input_rejected_at_end() {
        assert_eq!(engine(100).finish().unwrap_err(), Rejection::Syntax);
    }

    #[test]
    fn test_depth_bounded() {
        let mut e = engine(8);
        marker(&mut e, Terminal::OpenEDelimiter).unwrap();
        let mut result = Ok(());
        for _ in 0..20 {
            result = marker(&mut e, Terminal::ParenOpen);
            if result.is_err() {
                break;
            }
        }
        assert_eq!(result, Err(Rejection::Overflow));
        assert_eq!(e.stack.len(), 8);
    }

    #[test]
    fn test_reduction_stamps_last_shifted_line() {
        let mut e = engine(100);
        e.push(Terminal::OpenEDelimiter, Value::Marker, 1).unwrap();
        e.push(Terminal::Identifier, Value::Text("a".into()), 3).unwrap();
        e.push(Terminal::CloseEDelimiter, Value::Marker, 4).unwrap();
        let statements = e.finish().unwrap();
        match &statements[0].kind {
            StatementKind::Echo(expr) => assert_eq!(expr.location.line, 3),
            other => panic!("Expected Echo, got {other:?}"),
        }
        assert_eq!(statements[0].location.line, 4);
    }
}
