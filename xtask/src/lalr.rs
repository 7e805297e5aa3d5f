//! LALR(1) construction for the Volt grammar.
//!
//! Builds the LR(0) collection, computes lookaheads by spontaneous
//! generation and propagation, then fills the action table, settling
//! shift/reduce conflicts with yacc-style precedence.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use volt_parser::grammar::{
    terminal_precedence, Action, Assoc, NonTerminal, Symbol, Terminal, RULES, RULE_COUNT,
};

/// Symbol ids: terminals first, then nonterminals.
const TERMINALS: usize = Terminal::COUNT;

/// Index of the `$start ::= program` production appended after the grammar's own.
const AUGMENTED: usize = RULE_COUNT;

/// Lookahead set over terminal codes, one bit per terminal.
type TermSet = u128;

/// Marks lookaheads to be propagated rather than generated spontaneously.
const PROPAGATE: TermSet = 1 << 127;

/// `(production, dot position)`
type Item = (usize, usize);

fn symbol_id(symbol: &Symbol) -> usize {
    match symbol {
        Symbol::T(t) => usize::from(t.code()),
        Symbol::N(n) => TERMINALS + usize::from(n.code()),
    }
}

fn terminal_bit(code: usize) -> TermSet {
    1 << code
}

struct Production {
    lhs: Option<NonTerminal>,
    rhs: Vec<usize>,
    precedence: Option<(usize, Assoc)>,
}

/// A conflict precedence could not settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub state: usize,
    pub terminal: Terminal,
    pub existing: Action,
    pub incoming: Action,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state {} on {}: {:?} vs {:?}",
            self.state,
            self.terminal.name(),
            self.existing,
            self.incoming
        )
    }
}

/// The finished automaton, rows keyed by symbol code.
#[derive(Debug)]
pub struct Automaton {
    pub actions: Vec<BTreeMap<u8, Action>>,
    pub gotos: Vec<BTreeMap<u8, u16>>,
    pub conflicts: Vec<Conflict>,
}

impl Automaton {
    pub fn state_count(&self) -> usize {
        self.actions.len()
    }
}

/// Build the LALR(1) automaton for [`RULES`].
pub fn build() -> Result<Automaton> {
    let grammar = Grammar::new();
    let (kernels, transitions) = grammar.lr0_collection();
    let lookaheads = grammar.lookaheads(&kernels, &transitions)?;
    grammar.tabulate(&kernels, &transitions, &lookaheads)
}

struct Grammar {
    productions: Vec<Production>,
    /// Productions of each nonterminal.
    by_lhs: Vec<Vec<usize>>,
    nullable: Vec<bool>,
    first: Vec<TermSet>,
}

type Transitions = BTreeMap<(usize, usize), usize>;

impl Grammar {
    fn new() -> Self {
        let mut productions: Vec<Production> = RULES
            .iter()
            .map(|rule| Production {
                lhs: Some(rule.lhs),
                rhs: rule.rhs.iter().map(symbol_id).collect(),
                precedence: rule.resolved_precedence(),
            })
            .collect();
        productions.push(Production {
            lhs: None,
            rhs: vec![symbol_id(&Symbol::N(NonTerminal::Program))],
            precedence: None,
        });

        let mut by_lhs = vec![Vec::new(); NonTerminal::COUNT];
        for (index, production) in productions.iter().enumerate() {
            if let Some(lhs) = production.lhs {
                by_lhs[usize::from(lhs.code())].push(index);
            }
        }

        let mut grammar = Self {
            productions,
            by_lhs,
            nullable: vec![false; TERMINALS + NonTerminal::COUNT],
            first: vec![0; NonTerminal::COUNT],
        };
        grammar.compute_first_sets();
        grammar
    }

    fn compute_first_sets(&mut self) {
        let mut changed = true;
        while changed {
            changed = false;
            for production in &self.productions[..AUGMENTED] {
                let Some(lhs) = production.lhs else { continue };
                let lhs_id = TERMINALS + usize::from(lhs.code());
                let lhs_index = usize::from(lhs.code());

                if !self.nullable[lhs_id] && production.rhs.iter().all(|&s| self.nullable[s]) {
                    self.nullable[lhs_id] = true;
                    changed = true;
                }
                for &symbol in &production.rhs {
                    let first = self.first_of(symbol);
                    if first & !self.first[lhs_index] != 0 {
                        self.first[lhs_index] |= first;
                        changed = true;
                    }
                    if !self.nullable[symbol] {
                        break;
                    }
                }
            }
        }
    }

    fn first_of(&self, symbol: usize) -> TermSet {
        if symbol < TERMINALS {
            terminal_bit(symbol)
        } else {
            self.first[symbol - TERMINALS]
        }
    }

    /// FIRST of a symbol sequence, and whether the whole sequence is nullable.
    fn first_of_sequence(&self, symbols: &[usize]) -> (TermSet, bool) {
        let mut out = 0;
        for &symbol in symbols {
            out |= self.first_of(symbol);
            if !self.nullable[symbol] {
                return (out, false);
            }
        }
        (out, true)
    }

    fn next_symbol(&self, (production, dot): Item) -> Option<usize> {
        self.productions[production].rhs.get(dot).copied()
    }

    fn closure0(&self, kernel: &[Item]) -> Vec<Item> {
        let mut items = kernel.to_vec();
        let mut seen: HashSet<Item> = kernel.iter().copied().collect();
        let mut i = 0;
        while i < items.len() {
            if let Some(symbol) = self.next_symbol(items[i]) {
                if symbol >= TERMINALS {
                    for &production in &self.by_lhs[symbol - TERMINALS] {
                        if seen.insert((production, 0)) {
                            items.push((production, 0));
                        }
                    }
                }
            }
            i += 1;
        }
        items
    }

    /// LR(1) closure of items carrying lookahead sets, in discovery order.
    fn closure1(&self, kernel: &[(Item, TermSet)]) -> Vec<(Item, TermSet)> {
        let mut items = kernel.to_vec();
        let mut index: HashMap<Item, usize> =
            items.iter().enumerate().map(|(i, (item, _))| (*item, i)).collect();
        let mut work: Vec<usize> = (0..items.len()).collect();

        while let Some(i) = work.pop() {
            let ((production, dot), lookahead) = items[i];
            let rhs = &self.productions[production].rhs;
            let Some(&symbol) = rhs.get(dot) else { continue };
            if symbol < TERMINALS {
                continue;
            }

            let (first, nullable) = self.first_of_sequence(&rhs[dot + 1..]);
            let inherited = if nullable { first | lookahead } else { first };
            for &next in &self.by_lhs[symbol - TERMINALS] {
                let j = *index.entry((next, 0)).or_insert_with(|| {
                    items.push(((next, 0), 0));
                    items.len() - 1
                });
                if inherited & !items[j].1 != 0 {
                    items[j].1 |= inherited;
                    work.push(j);
                }
            }
        }
        items
    }

    /// Canonical LR(0) collection. States are numbered breadth-first,
    /// successors in symbol order.
    fn lr0_collection(&self) -> (Vec<Vec<Item>>, Transitions) {
        let start = vec![(AUGMENTED, 0)];
        let mut kernels = vec![start.clone()];
        let mut index = HashMap::from([(start, 0)]);
        let mut transitions = Transitions::new();

        let mut state = 0;
        while state < kernels.len() {
            let mut successors: BTreeMap<usize, Vec<Item>> = BTreeMap::new();
            for (production, dot) in self.closure0(&kernels[state]) {
                if let Some(symbol) = self.next_symbol((production, dot)) {
                    successors.entry(symbol).or_default().push((production, dot + 1));
                }
            }
            for (symbol, mut kernel) in successors {
                kernel.sort_unstable();
                kernel.dedup();
                let target = match index.get(&kernel) {
                    Some(&target) => target,
                    None => {
                        let target = kernels.len();
                        index.insert(kernel.clone(), target);
                        kernels.push(kernel);
                        target
                    }
                };
                transitions.insert((state, symbol), target);
            }
            state += 1;
        }
        (kernels, transitions)
    }

    /// Lookahead set of every kernel item, aligned with `kernels`.
    fn lookaheads(
        &self,
        kernels: &[Vec<Item>],
        transitions: &Transitions,
    ) -> Result<Vec<Vec<TermSet>>> {
        let mut lookaheads: Vec<Vec<TermSet>> =
            kernels.iter().map(|kernel| vec![0; kernel.len()]).collect();
        lookaheads[0][0] = terminal_bit(usize::from(Terminal::End.code()));

        let mut links = Vec::new();
        for (state, kernel) in kernels.iter().enumerate() {
            for (position, &item) in kernel.iter().enumerate() {
                for ((production, dot), set) in self.closure1(&[(item, PROPAGATE)]) {
                    let Some(symbol) = self.next_symbol((production, dot)) else {
                        continue;
                    };
                    let target = successor(transitions, state, symbol)?;
                    let slot = kernels[target]
                        .binary_search(&(production, dot + 1))
                        .ok()
                        .with_context(|| format!("item missing from kernel of state {target}"))?;
                    if set & PROPAGATE != 0 {
                        links.push(((state, position), (target, slot)));
                    }
                    lookaheads[target][slot] |= set & !PROPAGATE;
                }
            }
        }

        let mut changed = true;
        while changed {
            changed = false;
            for &((state, position), (target, slot)) in &links {
                let added = lookaheads[state][position] & !lookaheads[target][slot];
                if added != 0 {
                    lookaheads[target][slot] |= added;
                    changed = true;
                }
            }
        }
        Ok(lookaheads)
    }

    fn tabulate(
        &self,
        kernels: &[Vec<Item>],
        transitions: &Transitions,
        lookaheads: &[Vec<TermSet>],
    ) -> Result<Automaton> {
        let mut actions = Vec::with_capacity(kernels.len());
        let mut conflicts = Vec::new();

        for (state, kernel) in kernels.iter().enumerate() {
            let seeded: Vec<(Item, TermSet)> = kernel
                .iter()
                .copied()
                .zip(lookaheads[state].iter().copied())
                .collect();

            let mut row = BTreeMap::new();
            for ((production, dot), set) in self.closure1(&seeded) {
                match self.next_symbol((production, dot)) {
                    Some(symbol) if symbol < TERMINALS => {
                        let target = successor(transitions, state, symbol)?;
                        let shift = Action::Shift(state_id(target)?);
                        self.put(&mut row, &mut conflicts, state, symbol, shift);
                    }
                    Some(_) => {}
                    None => {
                        let complete = if production == AUGMENTED {
                            Action::Accept
                        } else {
                            Action::Reduce(u16::try_from(production)?)
                        };
                        for terminal in (0..TERMINALS).filter(|&t| set & terminal_bit(t) != 0) {
                            self.put(&mut row, &mut conflicts, state, terminal, complete);
                        }
                    }
                }
            }
            actions.push(row);
        }

        let mut gotos = vec![BTreeMap::new(); kernels.len()];
        for (&(state, symbol), &target) in transitions {
            if symbol >= TERMINALS {
                gotos[state].insert(u8::try_from(symbol - TERMINALS)?, state_id(target)?);
            }
        }

        Ok(Automaton {
            actions,
            gotos,
            conflicts,
        })
    }

    /// Enter an action, settling a clash with the existing one.
    fn put(
        &self,
        row: &mut BTreeMap<u8, Action>,
        conflicts: &mut Vec<Conflict>,
        state: usize,
        symbol: usize,
        incoming: Action,
    ) {
        let terminal = Terminal::ALL[symbol];
        let code = terminal.code();
        let Some(&existing) = row.get(&code) else {
            row.insert(code, incoming);
            return;
        };
        if existing == incoming {
            return;
        }

        let (shift, reduce, rule) = match (existing, incoming) {
            (Action::Shift(_), Action::Reduce(rule)) => (existing, incoming, rule),
            (Action::Reduce(rule), Action::Shift(_)) => (incoming, existing, rule),
            _ => {
                conflicts.push(Conflict {
                    state,
                    terminal,
                    existing,
                    incoming,
                });
                return;
            }
        };

        let rule_precedence = self.productions[usize::from(rule)].precedence;
        let resolved = match (rule_precedence, terminal_precedence(terminal)) {
            (Some((rule_level, _)), Some((level, assoc))) => {
                if rule_level > level {
                    reduce
                } else if rule_level < level {
                    shift
                } else {
                    match assoc {
                        Assoc::Left => reduce,
                        Assoc::Right => shift,
                    }
                }
            }
            _ => {
                conflicts.push(Conflict {
                    state,
                    terminal,
                    existing,
                    incoming,
                });
                shift
            }
        };
        row.insert(code, resolved);
    }
}

fn successor(transitions: &Transitions, state: usize, symbol: usize) -> Result<usize> {
    transitions
        .get(&(state, symbol))
        .copied()
        .with_context(|| format!("state {state} has no transition on symbol {symbol}"))
}

fn state_id(state: usize) -> Result<u16> {
    u16::try_from(state).context("more states than the table encoding allows")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grammar_has_no_unresolved_conflicts() {
        let automaton = build().unwrap();
        assert_eq!(automaton.conflicts, Vec::new());
    }

    #[test]
    fn test_state_count() {
        let automaton = build().unwrap();
        assert_eq!(automaton.state_count(), 274);
        assert_eq!(automaton.gotos.len(), 274);
    }

    #[test]
    fn test_nothing_is_nullable() {
        let grammar = Grammar::new();
        assert!(grammar.nullable.iter().all(|n| !n));
    }

    #[test]
    fn test_first_of_expr() {
        let grammar = Grammar::new();
        let first = grammar.first[usize::from(NonTerminal::Expr.code())];
        for terminal in [
            Terminal::Identifier,
            Terminal::Integer,
            Terminal::Minus,
            Terminal::Not,
            Terminal::ParenOpen,
            Terminal::SBracketOpen,
        ] {
            assert!(first & terminal_bit(usize::from(terminal.code())) != 0, "{terminal:?}");
        }
        assert_eq!(first & terminal_bit(usize::from(Terminal::Comma.code())), 0);
    }

    #[test]
    fn test_start_state_actions() {
        let automaton = build().unwrap();
        let start = &automaton.actions[0];
        assert!(matches!(
            start.get(&Terminal::OpenDelimiter.code()),
            Some(Action::Shift(_))
        ));
        assert!(!start.contains_key(&Terminal::End.code()));
    }

    #[test]
    fn test_precedence_settles_arithmetic() {
        let automaton = build().unwrap();
        // After `expr + expr`, a `*` shifts and a `+` reduces.
        let plus_rule = RULES
            .iter()
            .position(|rule| rule.to_string() == "expr ::= expr PLUS expr")
            .unwrap() as u16;
        let state = automaton
            .actions
            .iter()
            .position(|row| {
                row.get(&Terminal::Plus.code()) == Some(&Action::Reduce(plus_rule))
            })
            .unwrap();
        let row = &automaton.actions[state];
        assert!(matches!(row.get(&Terminal::Times.code()), Some(Action::Shift(_))));
        assert_eq!(
            row.get(&Terminal::Minus.code()),
            Some(&Action::Reduce(plus_rule))
        );
    }
}
