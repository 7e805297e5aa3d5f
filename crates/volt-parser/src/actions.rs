//! Syntax tree builders, one per grammar rule.
//!
//! A reduction hands over the values of the rule's right-hand side in
//! order. Builders move what they need out of them; marker values of
//! delimiters and keywords are simply dropped.

use crate::ast::{
    BinaryOp, ExprKind, Expression, Location, MacroParameter, NamedItem, Statement, StatementKind,
    UnaryOp,
};

/// A value on the parse stack.
#[derive(Debug)]
pub(crate) enum Value {
    /// A shifted token whose text the grammar never uses.
    Marker,
    /// A shifted literal, identifier or raw fragment.
    Text(String),
    Statement(Statement),
    Statements(Vec<Statement>),
    Expr(Expression),
    Item(NamedItem),
    Items(Vec<NamedItem>),
    Parameter(MacroParameter),
    Parameters(Vec<MacroParameter>),
}

/// Right-hand side values of the rule being reduced.
struct Rhs(Vec<Value>);

/// What a builder expected but did not find on the stack.
pub(crate) type Mismatch = &'static str;

impl Rhs {
    fn take(&mut self, index: usize) -> Option<Value> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, Value::Marker))
    }

    fn text(&mut self, index: usize) -> Result<String, Mismatch> {
        match self.take(index) {
            Some(Value::Text(text)) => Ok(text),
            _ => Err("token text"),
        }
    }

    fn expr(&mut self, index: usize) -> Result<Expression, Mismatch> {
        match self.take(index) {
            Some(Value::Expr(expr)) => Ok(expr),
            _ => Err("expression"),
        }
    }

    fn boxed(&mut self, index: usize) -> Result<Box<Expression>, Mismatch> {
        self.expr(index).map(Box::new)
    }

    fn statement(&mut self, index: usize) -> Result<Statement, Mismatch> {
        match self.take(index) {
            Some(Value::Statement(statement)) => Ok(statement),
            _ => Err("statement"),
        }
    }

    fn statements(&mut self, index: usize) -> Result<Vec<Statement>, Mismatch> {
        match self.take(index) {
            Some(Value::Statements(list)) => Ok(list),
            _ => Err("statement list"),
        }
    }

    fn item(&mut self, index: usize) -> Result<NamedItem, Mismatch> {
        match self.take(index) {
            Some(Value::Item(item)) => Ok(item),
            _ => Err("item"),
        }
    }

    fn items(&mut self, index: usize) -> Result<Vec<NamedItem>, Mismatch> {
        match self.take(index) {
            Some(Value::Items(items)) => Ok(items),
            _ => Err("item list"),
        }
    }

    fn parameter(&mut self, index: usize) -> Result<MacroParameter, Mismatch> {
        match self.take(index) {
            Some(Value::Parameter(parameter)) => Ok(parameter),
            _ => Err("macro parameter"),
        }
    }

    fn parameters(&mut self, index: usize) -> Result<Vec<MacroParameter>, Mismatch> {
        match self.take(index) {
            Some(Value::Parameters(parameters)) => Ok(parameters),
            _ => Err("macro parameter list"),
        }
    }

    /// Identity rules re-tag the child value without rebuilding it.
    fn pass(&mut self) -> Result<Value, Mismatch> {
        self.take(0).ok_or("value")
    }
}

/// Operator of the `expr OP expr` rules.
fn binary_op(rule: u16) -> Option<BinaryOp> {
    let op = match rule {
        59 => BinaryOp::Sub,
        60 => BinaryOp::Add,
        61 => BinaryOp::Mul,
        62 => BinaryOp::Pow,
        63 => BinaryOp::Div,
        64 => BinaryOp::IntDiv,
        65 => BinaryOp::Mod,
        66 => BinaryOp::And,
        67 => BinaryOp::Or,
        68 => BinaryOp::Concat,
        69 => BinaryOp::Pipe,
        70 => BinaryOp::Range,
        71 => BinaryOp::Equals,
        74 => BinaryOp::Is,
        75 => BinaryOp::NotEquals,
        76 => BinaryOp::Identical,
        77 => BinaryOp::NotIdentical,
        78 => BinaryOp::Less,
        79 => BinaryOp::Greater,
        80 => BinaryOp::GreaterEqual,
        81 => BinaryOp::LessEqual,
        82 => BinaryOp::Dot,
        83 => BinaryOp::In,
        _ => return None,
    };
    Some(op)
}

/// Build the value for `rule` from its right-hand side values.
pub(crate) fn build(rule: u16, values: Vec<Value>, location: &Location) -> Result<Value, Mismatch> {
    let mut rhs = Rhs(values);
    let stmt = |kind: StatementKind| {
        Value::Statement(Statement {
            kind,
            location: location.clone(),
        })
    };
    let expr = |kind: ExprKind| Expression {
        kind,
        location: location.clone(),
    };
    let item = |name: Option<String>, value: Expression| NamedItem {
        name,
        value,
        location: location.clone(),
    };

    if let Some(op) = binary_op(rule) {
        let left = rhs.boxed(0)?;
        let right = rhs.boxed(2)?;
        return Ok(Value::Expr(expr(ExprKind::Binary { op, left, right })));
    }

    let value = match rule {
        // program, volt_language, statement alternatives, expr ::= function_call
        0 | 1 | 4..=20 | 100 => rhs.pass()?,

        2 => {
            let mut list = rhs.statements(0)?;
            list.push(rhs.statement(1)?);
            Value::Statements(list)
        }
        3 => Value::Statements(vec![rhs.statement(0)?]),

        21 => stmt(StatementKind::If {
            condition: rhs.expr(2)?,
            then: rhs.statements(4)?,
            otherwise: None,
        }),
        22 => stmt(StatementKind::If {
            condition: rhs.expr(2)?,
            then: rhs.statements(4)?,
            otherwise: Some(rhs.statements(8)?),
        }),
        23 => stmt(StatementKind::ElseIf {
            condition: rhs.expr(2)?,
        }),
        24 => stmt(StatementKind::ElseFor),

        25 => stmt(StatementKind::For {
            variable: rhs.text(2)?,
            key: None,
            iterable: rhs.expr(4)?,
            condition: None,
            body: rhs.statements(6)?,
        }),
        26 => stmt(StatementKind::For {
            variable: rhs.text(2)?,
            key: None,
            iterable: rhs.expr(4)?,
            condition: Some(rhs.expr(6)?),
            body: rhs.statements(8)?,
        }),
        27 => stmt(StatementKind::For {
            key: Some(rhs.text(2)?),
            variable: rhs.text(4)?,
            iterable: rhs.expr(6)?,
            condition: None,
            body: rhs.statements(8)?,
        }),
        28 => stmt(StatementKind::For {
            key: Some(rhs.text(2)?),
            variable: rhs.text(4)?,
            iterable: rhs.expr(6)?,
            condition: Some(rhs.expr(8)?),
            body: rhs.statements(10)?,
        }),

        29 => stmt(StatementKind::Set {
            name: rhs.text(2)?,
            value: rhs.expr(4)?,
        }),

        30 => stmt(StatementKind::Macro {
            name: rhs.text(2)?,
            parameters: Vec::new(),
            body: rhs.statements(6)?,
        }),
        31 => stmt(StatementKind::Macro {
            name: rhs.text(2)?,
            parameters: rhs.parameters(4)?,
            body: rhs.statements(7)?,
        }),
        32 => {
            let mut parameters = rhs.parameters(0)?;
            parameters.push(rhs.parameter(2)?);
            Value::Parameters(parameters)
        }
        33 => Value::Parameters(vec![rhs.parameter(0)?]),
        34 => Value::Parameter(MacroParameter {
            name: rhs.text(0)?,
            default: None,
            location: location.clone(),
        }),
        35 => Value::Parameter(MacroParameter {
            name: rhs.text(0)?,
            default: Some(rhs.expr(2)?),
            location: location.clone(),
        }),

        // Literals: macro parameter defaults, slice offsets, plain expressions
        36 | 94 | 108 => Value::Expr(expr(integer(rhs.text(0)?)?)),
        37 | 109 => Value::Expr(expr(ExprKind::String(rhs.text(0)?))),
        38 | 110 => Value::Expr(expr(double(rhs.text(0)?)?)),
        39 | 111 => Value::Expr(expr(ExprKind::Null)),
        40 | 112 => Value::Expr(expr(ExprKind::Boolean(false))),
        41 | 113 => Value::Expr(expr(ExprKind::Boolean(true))),
        95 | 107 => Value::Expr(expr(ExprKind::Identifier(rhs.text(0)?))),

        42 => stmt(StatementKind::Empty),
        43 => stmt(StatementKind::Echo(rhs.expr(1)?)),

        44 => stmt(StatementKind::Block {
            name: rhs.text(2)?,
            body: Some(rhs.statements(4)?),
        }),
        45 => stmt(StatementKind::Block {
            name: rhs.text(2)?,
            body: None,
        }),

        46 => stmt(StatementKind::Cache {
            key: rhs.expr(2)?,
            ttl: None,
            body: rhs.statements(4)?,
        }),
        47 => stmt(StatementKind::Cache {
            key: rhs.expr(2)?,
            ttl: Some(expr(integer(rhs.text(3)?)?)),
            body: rhs.statements(5)?,
        }),

        48 => stmt(StatementKind::Extends(rhs.text(2)?)),
        49 => stmt(StatementKind::Include {
            path: rhs.expr(2)?,
            with: None,
        }),
        50 => stmt(StatementKind::Include {
            path: rhs.expr(2)?,
            with: Some(rhs.expr(4)?),
        }),
        51 => stmt(StatementKind::Do(rhs.expr(2)?)),

        52 | 53 => stmt(StatementKind::Autoescape {
            enabled: rule == 53,
            body: rhs.statements(4)?,
        }),

        54 => stmt(StatementKind::Break),
        55 => stmt(StatementKind::Continue),
        56 => stmt(StatementKind::RawFragment(rhs.text(0)?)),

        57 => Value::Expr(expr(unary(UnaryOp::Minus, rhs.boxed(1)?))),
        58 => Value::Expr(expr(unary(UnaryOp::Plus, rhs.boxed(1)?))),
        72 => Value::Expr(expr(unary(UnaryOp::NotDefined, rhs.boxed(0)?))),
        73 => Value::Expr(expr(unary(UnaryOp::Defined, rhs.boxed(0)?))),
        84 => Value::Expr(expr(ExprKind::Binary {
            op: BinaryOp::NotIn,
            left: rhs.boxed(0)?,
            right: rhs.boxed(3)?,
        })),
        85 => Value::Expr(expr(unary(UnaryOp::Not, rhs.boxed(1)?))),

        86 => Value::Expr(expr(ExprKind::Enclosed(rhs.boxed(1)?))),
        87 => Value::Expr(expr(ExprKind::Array(Vec::new()))),
        88 => Value::Expr(expr(ExprKind::Array(rhs.items(1)?))),
        89 => Value::Expr(expr(ExprKind::ArrayAccess {
            base: rhs.boxed(0)?,
            index: rhs.boxed(2)?,
        })),
        90 => Value::Expr(expr(ExprKind::Ternary {
            condition: rhs.boxed(0)?,
            consequent: rhs.boxed(2)?,
            alternate: rhs.boxed(4)?,
        })),

        91 => Value::Expr(expr(ExprKind::Slice {
            base: rhs.boxed(0)?,
            start: None,
            end: Some(rhs.boxed(3)?),
        })),
        92 => Value::Expr(expr(ExprKind::Slice {
            base: rhs.boxed(0)?,
            start: Some(rhs.boxed(2)?),
            end: None,
        })),
        93 => Value::Expr(expr(ExprKind::Slice {
            base: rhs.boxed(0)?,
            start: Some(rhs.boxed(2)?),
            end: Some(rhs.boxed(4)?),
        })),

        96 | 103 => {
            let mut items = rhs.items(0)?;
            items.push(rhs.item(2)?);
            Value::Items(items)
        }
        97 | 104 => Value::Items(vec![rhs.item(0)?]),
        98 | 106 => Value::Item(item(Some(rhs.text(0)?), rhs.expr(2)?)),
        99 | 105 => Value::Item(item(None, rhs.expr(0)?)),

        101 => Value::Expr(expr(ExprKind::Call {
            callee: rhs.boxed(0)?,
            arguments: rhs.items(2)?,
        })),
        102 => Value::Expr(expr(ExprKind::Call {
            callee: rhs.boxed(0)?,
            arguments: Vec::new(),
        })),

        _ => return Err("known rule"),
    };
    Ok(value)
}

fn unary(op: UnaryOp, operand: Box<Expression>) -> ExprKind {
    ExprKind::Unary { op, operand }
}

fn integer(text: String) -> Result<ExprKind, Mismatch> {
    text.parse().map(ExprKind::Integer).map_err(|_| "integer literal")
}

fn double(text: String) -> Result<ExprKind, Mismatch> {
    text.parse().map(ExprKind::Double).map_err(|_| "double literal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{NonTerminal, Symbol, Terminal, RULES};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn here() -> Location {
        Location {
            file: Arc::from("t.volt"),
            line: 7,
        }
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn ident(name: &str) -> Value {
        Value::Expr(Expression {
            kind: ExprKind::Identifier(name.to_string()),
            location: here(),
        })
    }

    fn expect_expr(value: Value) -> Expression {
        match value {
            Value::Expr(e) => e,
            other => panic!("Expected expression, got {other:?}"),
        }
    }

    fn expect_statement(value: Value) -> Statement {
        match value {
            Value::Statement(s) => s,
            other => panic!("Expected statement, got {other:?}"),
        }
    }

    /// Placeholder values shaped like each rule's right-hand side.
    fn sample_rhs(rule: u16) -> Vec<Value> {
        RULES[usize::from(rule)]
            .rhs
            .iter()
            .map(|symbol| match symbol {
                Symbol::T(Terminal::Integer) => text("1"),
                Symbol::T(Terminal::Double) => text("1.5"),
                Symbol::T(Terminal::String | Terminal::Identifier | Terminal::RawFragment) => {
                    text("x")
                }
                Symbol::T(_) => Value::Marker,
                Symbol::N(NonTerminal::StatementList) => Value::Statements(Vec::new()),
                Symbol::N(NonTerminal::MacroParameters) => Value::Parameters(Vec::new()),
                Symbol::N(NonTerminal::MacroParameter) => Value::Parameter(MacroParameter {
                    name: "p".into(),
                    default: None,
                    location: here(),
                }),
                Symbol::N(NonTerminal::ArrayList | NonTerminal::ArgumentList) => {
                    Value::Items(Vec::new())
                }
                Symbol::N(NonTerminal::ArrayItem | NonTerminal::ArgumentItem) => {
                    Value::Item(NamedItem {
                        name: None,
                        value: expect_expr(ident("v")),
                        location: here(),
                    })
                }
                Symbol::N(
                    NonTerminal::Expr
                    | NonTerminal::FunctionCall
                    | NonTerminal::MacroParameterDefault
                    | NonTerminal::SliceOffset,
                ) => ident("e"),
                Symbol::N(NonTerminal::Program | NonTerminal::VoltLanguage) => {
                    Value::Statements(Vec::new())
                }
                Symbol::N(_) => Value::Statement(Statement {
                    kind: StatementKind::Empty,
                    location: here(),
                }),
            })
            .collect()
    }

    // =========================================================================
    // Coverage
    // =========================================================================

    #[test]
    fn test_every_rule_has_a_builder() {
        for rule in 0..RULES.len() as u16 {
            let built = build(rule, sample_rhs(rule), &here());
            assert!(built.is_ok(), "rule {rule}: {}", RULES[usize::from(rule)]);
        }
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert_eq!(build(500, Vec::new(), &here()).unwrap_err(), "known rule");
    }

    #[test]
    fn test_stack_mismatch_reported() {
        let err = build(43, vec![Value::Marker, Value::Marker, Value::Marker], &here());
        assert_eq!(err.unwrap_err(), "expression");
    }

    // =========================================================================
    // Builders
    // =========================================================================

    #[test]
    fn test_binary_builder() {
        let built = build(61, vec![ident("a"), Value::Marker, ident("b")], &here()).unwrap();
        match expect_expr(built).kind {
            ExprKind::Binary { op, left, right } => {
                assert_eq!(op, BinaryOp::Mul);
                assert_eq!(left.kind, ExprKind::Identifier("a".into()));
                assert_eq!(right.kind, ExprKind::Identifier("b".into()));
            }
            other => panic!("Expected Binary, got {other:?}"),
        }
    }

    #[test]
    fn test_intdiv_is_not_mod() {
        let built = build(64, vec![ident("a"), Value::Marker, ident("b")], &here()).unwrap();
        assert!(matches!(
            expect_expr(built).kind,
            ExprKind::Binary {
                op: BinaryOp::IntDiv,
                ..
            }
        ));
    }

    #[test]
    fn test_statement_list_appends_in_order() {
        let first = Statement {
            kind: StatementKind::RawFragment("a".into()),
            location: here(),
        };
        let second = Statement {
            kind: StatementKind::RawFragment("b".into()),
            location: here(),
        };
        let seeded = build(3, vec![Value::Statement(first)], &here()).unwrap();
        let grown = build(2, vec![seeded, Value::Statement(second)], &here()).unwrap();
        match grown {
            Value::Statements(list) => {
                let texts: Vec<_> = list
                    .iter()
                    .map(|s| match &s.kind {
                        StatementKind::RawFragment(t) => t.as_str(),
                        _ => "?",
                    })
                    .collect();
                assert_eq!(texts, vec!["a", "b"]);
            }
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_for_with_key_and_condition() {
        let built = build(28, sample_rhs(28), &here()).unwrap();
        match expect_statement(built).kind {
            StatementKind::For { key, variable, condition, .. } => {
                assert_eq!(key.as_deref(), Some("x"));
                assert_eq!(variable, "x");
                assert!(condition.is_some());
            }
            other => panic!("Expected For, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_ttl_is_integer() {
        let built = build(47, sample_rhs(47), &here()).unwrap();
        match expect_statement(built).kind {
            StatementKind::Cache { ttl: Some(ttl), .. } => {
                assert_eq!(ttl.kind, ExprKind::Integer(1));
            }
            other => panic!("Expected Cache with ttl, got {other:?}"),
        }
    }

    #[test]
    fn test_builders_stamp_location() {
        let built = build(107, vec![text("user")], &here()).unwrap();
        let expr = expect_expr(built);
        assert_eq!(expr.location, here());
    }

    #[test]
    fn test_passthrough_keeps_value() {
        let built = build(100, vec![ident("f")], &here()).unwrap();
        assert_eq!(expect_expr(built).kind, ExprKind::Identifier("f".into()));
    }
}
