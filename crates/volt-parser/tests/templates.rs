//! End-to-end parsing of whole templates.

use pretty_assertions::assert_eq;
use volt_parser::ast::{BinaryOp, ExprKind, StatementKind};
use volt_parser::{parse, ErrorKind, Parser, ParseLimits};

// =========================================================================
// Trees
// =========================================================================

#[test]
fn test_empty_template() {
    let template = parse("", "x.volt").unwrap();
    assert!(template.statements.is_empty());
}

#[test]
fn test_echo_of_sum() {
    let template = parse("{{ 1 + 2 }}", "x.volt").unwrap();
    assert_eq!(template.statements.len(), 1);
    match &template.statements[0].kind {
        StatementKind::Echo(expr) => match &expr.kind {
            ExprKind::Binary { op, left, right } => {
                assert_eq!(*op, BinaryOp::Add);
                assert_eq!(left.kind, ExprKind::Integer(1));
                assert_eq!(right.kind, ExprKind::Integer(2));
            }
            other => panic!("Expected Binary, got {other:?}"),
        },
        other => panic!("Expected Echo, got {other:?}"),
    }
}

#[test]
fn test_for_key_value_loop() {
    let template = parse("{% for k, v in items %}body{% endfor %}", "x.volt").unwrap();
    match &template.statements[0].kind {
        StatementKind::For {
            variable,
            key,
            iterable,
            condition,
            body,
        } => {
            assert_eq!(key.as_deref(), Some("k"));
            assert_eq!(variable, "v");
            assert_eq!(iterable.kind, ExprKind::Identifier("items".into()));
            assert!(condition.is_none());
            assert_eq!(body.len(), 1);
            assert_eq!(body[0].kind, StatementKind::RawFragment("body".into()));
        }
        other => panic!("Expected For, got {other:?}"),
    }
}

#[test]
fn test_child_template() {
    let template = parse(
        "{% extends \"layout.volt\" %}{% block content %}hi{% endblock %}",
        "child.volt",
    )
    .unwrap();
    let kinds: Vec<_> = template
        .statements
        .iter()
        .map(|s| match &s.kind {
            StatementKind::Extends(_) => "extends",
            StatementKind::Block { .. } => "block",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["extends", "block"]);
}

#[test]
fn test_child_template_with_blank_lines() {
    let source = "\n{% extends 'layout.volt' %}\n\n{%- block a -%}\n  A\n{%- endblock %}\n\n\
                  {% block b %}B{% endblock %}\n";
    let template = parse(source, "child.volt").unwrap();
    let blocks = template
        .statements
        .iter()
        .filter(|s| matches!(s.kind, StatementKind::Block { .. }))
        .count();
    assert_eq!(blocks, 2);
}

#[test]
fn test_else_and_elsefor_disambiguation() {
    let template = parse(
        "{% for i in items %}{% if i %}x{% else %}y{% endif %}{% else %}z{% endfor %}",
        "x.volt",
    )
    .unwrap();
    match &template.statements[0].kind {
        StatementKind::For { body, .. } => {
            assert!(matches!(
                &body[0].kind,
                StatementKind::If { otherwise: Some(o), .. }
                    if o[0].kind == StatementKind::RawFragment("y".into())
            ));
            assert_eq!(body[1].kind, StatementKind::ElseFor);
        }
        other => panic!("Expected For, got {other:?}"),
    }
}

#[test]
fn test_filtered_for_with_else() {
    let template = parse("{% for i in items if i %}x{% else %}none{% endfor %}", "x.volt").unwrap();
    match &template.statements[0].kind {
        StatementKind::For {
            condition, body, ..
        } => {
            assert_eq!(
                condition.as_ref().map(|c| &c.kind),
                Some(&ExprKind::Identifier("i".into()))
            );
            assert_eq!(body.len(), 3);
            assert_eq!(body[1].kind, StatementKind::ElseFor);
            assert_eq!(body[2].kind, StatementKind::RawFragment("none".into()));
        }
        other => panic!("Expected For, got {other:?}"),
    }
}

#[test]
fn test_block_after_filtered_for() {
    let template = parse(
        "{% for i in items if i %}x{% endfor %}{% block a %}b{% endblock %}",
        "x.volt",
    )
    .unwrap();
    assert!(matches!(template.statements[0].kind, StatementKind::For { .. }));
    assert!(matches!(template.statements[1].kind, StatementKind::Block { .. }));
}

#[test]
fn test_page_with_everything() {
    let source = r#"{# product page #}
{% set title = product.name ~ " | " ~ site %}
<h1>{{ title | e }}</h1>
{% if product.stock > 0 and not product.hidden %}
  <ul>
  {% for i, image in product.images if image.visible %}
    <li>{{ loop.index }}: {{ image.url ?: "none" }}</li>
  {% elsefor %}
    <li>no images</li>
  {% endfor %}
  </ul>
{% elseif product.preorder %}
  {{ partial("preorder", ["id": product.id]) }}
{% else %}
  sold out
{% endif %}
{% cache "footer" 3600 %}{% include "footer.volt" with ["year": 2024] %}{% endcache %}
{% macro price(amount, currency = "EUR") %}{{ amount // 100 }}.{{ amount % 100 }} {{ currency }}{% endmacro %}
{{ price(product.price) }}
"#;
    // `?:` is not part of the grammar
    let err = parse(source, "product.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.line, 7);

    let fixed = source.replace("image.url ?: \"none\"", "image.url ? image.url : \"none\"");
    let template = parse(&fixed, "product.volt").unwrap();
    let kinds: Vec<_> = template
        .statements
        .iter()
        .filter(|s| !matches!(s.kind, StatementKind::RawFragment(_)))
        .map(|s| match &s.kind {
            StatementKind::Set { .. } => "set",
            StatementKind::Echo(_) => "echo",
            StatementKind::If { .. } => "if",
            StatementKind::Cache { .. } => "cache",
            StatementKind::Macro { .. } => "macro",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["set", "echo", "if", "cache", "macro", "echo"]);
    assert!(template.node_count() > 40);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn test_text_before_extends() {
    let err = parse("x{% extends \"layout.volt\" %}", "child.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Structural);
    assert_eq!(
        err.to_string(),
        "Extends statement must be placed at the first line in the template in child.volt on line 1"
    );
}

#[test]
fn test_nested_blocks() {
    let err = parse(
        "{% block a %}{% block b %}{% endblock %}{% endblock %}",
        "x.volt",
    )
    .unwrap_err();
    assert_eq!(err.message, "Embedding blocks into other blocks is not supported");
}

#[test]
fn test_unterminated_string() {
    let err = parse("{{ \"abc }}", "x.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lex);
    assert!(err.message.contains("near EOF"), "{}", err.message);
}

#[test]
fn test_unknown_character() {
    let err = parse("{{ a $ b }}", "x.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lex);
    assert_eq!(err.message, "Parsing error before '$ b }}'");
}

#[test]
fn test_unclosed_expression_at_eof() {
    let err = parse("line\n{{ a", "x.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.to_string(), "Syntax error, unexpected EOF in x.volt on line 2");
}

#[test]
fn test_deep_nesting_overflows() {
    let source = format!("{{% if {}x{} %}}{{% endif %}}", "[".repeat(150), "]".repeat(150));
    let err = parse(&source, "deep.volt").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Overflow);

    let parser = Parser::with_limits(ParseLimits::new().with_max_stack_depth(400));
    assert!(parser.parse(&source, "deep.volt").is_ok());
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn test_tree_serializes_to_json() {
    let template = parse("{{ 1 + 2 }}", "x.volt").unwrap();
    let json = serde_json::to_value(&template).unwrap();
    let echo = &json["statements"][0];
    assert_eq!(echo["location"]["file"], "x.volt");
    assert_eq!(echo["location"]["line"], 1);
    let binary = &echo["kind"]["Echo"]["kind"]["Binary"];
    assert_eq!(binary["op"], "Add");
    assert_eq!(binary["left"]["kind"]["Integer"], 1);
    assert_eq!(binary["right"]["kind"]["Integer"], 2);
}

// =========================================================================
// Threads
// =========================================================================

#[test]
fn test_parser_shared_across_threads() {
    let parser = Parser::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let parser = &parser;
                scope.spawn(move || {
                    let source = format!("{{{{ {n} * {n} }}}}");
                    parser.parse(&source, "t.volt").map(|t| t.statements.len())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
    });
}
