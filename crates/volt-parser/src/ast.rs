//! Abstract Syntax Tree for Volt templates.
//!
//! Statement nodes form the template body; expression nodes hang off them.
//! Every node carries the [`Location`] the parser was at when it finished
//! recognising the construct. Nodes own their children outright, so
//! dropping a [`Template`] frees the whole tree.

use serde::Serialize;
use std::sync::Arc;

/// Where a node was recognised: the template's logical path and a line.
///
/// The path is shared by every node of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: Arc<str>,
    pub line: usize,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// A parsed template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Template {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatementKind {
    /// Literal text between delimiters.
    RawFragment(String),

    /// `{% if cond %}...{% else %}...{% endif %}`
    ///
    /// `elseif` branches stay in `then` as [`StatementKind::ElseIf`] markers.
    If {
        condition: Expression,
        then: Vec<Statement>,
        otherwise: Option<Vec<Statement>>,
    },

    /// `{% elseif cond %}` inside an if body.
    ElseIf { condition: Expression },

    /// `{% elsefor %}`, or an `{% else %}` directly inside a for body.
    ElseFor,

    /// `{% for [key,] variable in iterable [if condition] %}`
    For {
        variable: String,
        key: Option<String>,
        iterable: Expression,
        condition: Option<Expression>,
        body: Vec<Statement>,
    },

    /// `{% set name = value %}`
    Set { name: String, value: Expression },

    /// `{{ value }}`
    Echo(Expression),

    /// `{% block name %}...{% endblock %}`; `None` for an empty block.
    Block {
        name: String,
        body: Option<Vec<Statement>>,
    },

    /// `{% cache key [ttl] %}...{% endcache %}`
    Cache {
        key: Expression,
        ttl: Option<Expression>,
        body: Vec<Statement>,
    },

    /// `{% extends "path" %}`
    Extends(String),

    /// `{% include path [with params] %}`
    Include {
        path: Expression,
        with: Option<Expression>,
    },

    /// `{% do expr %}`
    Do(Expression),

    /// `{% autoescape true|false %}...{% endautoescape %}`
    Autoescape { enabled: bool, body: Vec<Statement> },

    Break,
    Continue,

    /// `{% macro name(params) %}...{% endmacro %}`
    Macro {
        name: String,
        parameters: Vec<MacroParameter>,
        body: Vec<Statement>,
    },

    /// `{% %}`
    Empty,
}

/// A macro parameter with an optional literal default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroParameter {
    pub name: String,
    pub default: Option<Expression>,
    pub location: Location,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    pub kind: ExprKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind {
    // Literals
    Integer(i64),
    Double(f64),
    String(String),
    Boolean(bool),
    Null,

    /// Variable reference: `user`
    Identifier(String),

    /// Binary operation: `a + b`, `user.name`, `x in list`
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Unary operation: `-x`, `not x`, `x is defined`
    Unary { op: UnaryOp, operand: Box<Expression> },

    /// Parenthesised expression: `(a + b)`
    Enclosed(Box<Expression>),

    /// Ternary: `cond ? a : b`
    Ternary {
        condition: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },

    /// Array literal: `[1, 'k': 2]`
    Array(Vec<NamedItem>),

    /// Index access: `items[0]`
    ArrayAccess {
        base: Box<Expression>,
        index: Box<Expression>,
    },

    /// Slice: `items[1:]`, `items[:n]`, `items[a:b]`
    Slice {
        base: Box<Expression>,
        start: Option<Box<Expression>>,
        end: Option<Box<Expression>>,
    },

    /// Function call: `upper(name)`, `loop.cycle('a', 'b')`
    Call {
        callee: Box<Expression>,
        arguments: Vec<NamedItem>,
    },
}

/// An array item or call argument; `name` is set for `'key': value` items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedItem {
    pub name: Option<String>,
    pub value: Expression,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Pow,
    Div,
    IntDiv,
    Mod,
    And,
    Or,
    Concat,
    Pipe,
    Range,
    Equals,
    NotEquals,
    Identical,
    NotIdentical,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Dot,
    In,
    NotIn,
    Is,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Minus,
    Plus,
    Not,
    /// `x is defined`
    Defined,
    /// `x is not defined`
    NotDefined,
}

impl Template {
    /// Total number of statement and expression nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.statements.iter().map(Statement::node_count).sum()
    }
}

impl Statement {
    pub fn node_count(&self) -> usize {
        let children = match &self.kind {
            StatementKind::RawFragment(_)
            | StatementKind::ElseFor
            | StatementKind::Extends(_)
            | StatementKind::Break
            | StatementKind::Continue
            | StatementKind::Empty => 0,
            StatementKind::If {
                condition,
                then,
                otherwise,
            } => {
                condition.node_count()
                    + count_all(then)
                    + otherwise.as_deref().map_or(0, count_all)
            }
            StatementKind::ElseIf { condition } => condition.node_count(),
            StatementKind::For {
                iterable,
                condition,
                body,
                ..
            } => {
                iterable.node_count()
                    + condition.as_ref().map_or(0, Expression::node_count)
                    + count_all(body)
            }
            StatementKind::Set { value, .. } => value.node_count(),
            StatementKind::Echo(value) | StatementKind::Do(value) => value.node_count(),
            StatementKind::Block { body, .. } => body.as_deref().map_or(0, count_all),
            StatementKind::Cache { key, ttl, body } => {
                key.node_count() + ttl.as_ref().map_or(0, Expression::node_count) + count_all(body)
            }
            StatementKind::Include { path, with } => {
                path.node_count() + with.as_ref().map_or(0, Expression::node_count)
            }
            StatementKind::Autoescape { body, .. } => count_all(body),
            StatementKind::Macro {
                parameters, body, ..
            } => {
                parameters
                    .iter()
                    .filter_map(|p| p.default.as_ref())
                    .map(Expression::node_count)
                    .sum::<usize>()
                    + count_all(body)
            }
        };
        1 + children
    }
}

fn count_all(statements: &[Statement]) -> usize {
    statements.iter().map(Statement::node_count).sum()
}

impl Expression {
    pub fn node_count(&self) -> usize {
        let children = match &self.kind {
            ExprKind::Integer(_)
            | ExprKind::Double(_)
            | ExprKind::String(_)
            | ExprKind::Boolean(_)
            | ExprKind::Null
            | ExprKind::Identifier(_) => 0,
            ExprKind::Binary { left, right, .. } => left.node_count() + right.node_count(),
            ExprKind::Unary { operand, .. } => operand.node_count(),
            ExprKind::Enclosed(inner) => inner.node_count(),
            ExprKind::Ternary {
                condition,
                consequent,
                alternate,
            } => condition.node_count() + consequent.node_count() + alternate.node_count(),
            ExprKind::Array(items) => items.iter().map(|i| i.value.node_count()).sum(),
            ExprKind::ArrayAccess { base, index } => base.node_count() + index.node_count(),
            ExprKind::Slice { base, start, end } => {
                base.node_count()
                    + start.as_ref().map_or(0, |e| e.node_count())
                    + end.as_ref().map_or(0, |e| e.node_count())
            }
            ExprKind::Call { callee, arguments } => {
                callee.node_count() + arguments.iter().map(|a| a.value.node_count()).sum::<usize>()
            }
        };
        1 + children
    }
}
