//! Renders an [`Automaton`] as the compressed tables in `grammar/table.rs`.

use std::fmt::{Display, Write};

use volt_parser::grammar::RULE_COUNT;

use crate::lalr::Automaton;

const PER_LINE: usize = 16;

pub fn render(automaton: &Automaton) -> String {
    let (action_rows, action_symbols, action_values) =
        flatten(&automaton.actions, |action| action.encode());
    let (goto_rows, goto_symbols, goto_states) = flatten(&automaton.gotos, |state| *state);

    let mut out = String::new();
    out.push_str("// @generated by `cargo xtask grammar generate`. Do not edit by hand.\n");
    out.push_str("//\n");
    out.push_str("// LALR(1) automaton for the Volt template grammar.\n");
    let _ = writeln!(
        out,
        "// {} states, {} rules, {} action entries, {} goto entries.",
        automaton.state_count(),
        RULE_COUNT,
        action_symbols.len(),
        goto_symbols.len()
    );
    out.push('\n');
    let _ = writeln!(out, "pub const STATE_COUNT: usize = {};", automaton.state_count());

    array(&mut out, "ACTION_ROWS", "u16", &action_rows);
    array(&mut out, "ACTION_SYMBOLS", "u8", &action_symbols);
    array(&mut out, "ACTION_VALUES", "u16", &action_values);
    array(&mut out, "GOTO_ROWS", "u16", &goto_rows);
    array(&mut out, "GOTO_SYMBOLS", "u8", &goto_symbols);
    array(&mut out, "GOTO_STATES", "u16", &goto_states);
    out
}

/// Row offsets plus the concatenated, symbol-sorted entries of every row.
fn flatten<V>(
    rows: &[std::collections::BTreeMap<u8, V>],
    value: impl Fn(&V) -> u16,
) -> (Vec<u16>, Vec<u8>, Vec<u16>) {
    let mut offsets = vec![0u16];
    let mut symbols = Vec::new();
    let mut values = Vec::new();
    for row in rows {
        for (symbol, entry) in row {
            symbols.push(*symbol);
            values.push(value(entry));
        }
        offsets.push(symbols.len() as u16);
    }
    (offsets, symbols, values)
}

fn array<T: Display>(out: &mut String, name: &str, ty: &str, values: &[T]) {
    let _ = writeln!(out, "\npub static {name}: [{ty}; {}] = [", values.len());
    for chunk in values.chunks(PER_LINE) {
        let line: Vec<String> = chunk.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "    {},", line.join(", "));
    }
    out.push_str("];\n");
}
