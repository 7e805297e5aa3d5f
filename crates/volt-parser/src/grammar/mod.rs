//! The Volt grammar and its LALR(1) parse table.
//!
//! [`RULES`] and [`PRECEDENCE`] are the single source of truth: the
//! `xtask` generator reads them to build [`table`], and the parser's
//! builders are indexed by the same rule numbers.

#[rustfmt::skip]
pub mod table;

use volt_lexer::TokenKind;

/// Terminal symbols, numbered by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Terminal {
    End,
    OpenDelimiter,
    CloseDelimiter,
    OpenEDelimiter,
    CloseEDelimiter,
    RawFragment,
    Comma,
    In,
    Question,
    Colon,
    Range,
    Pipe,
    Or,
    And,
    Is,
    Equals,
    NotEquals,
    Identical,
    NotIdentical,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Concat,
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Pow,
    IntDiv,
    Not,
    SBracketOpen,
    SBracketClose,
    ParenOpen,
    ParenClose,
    Dot,
    Integer,
    Double,
    String,
    Identifier,
    Null,
    True,
    False,
    Defined,
    Assign,
    If,
    Else,
    ElseIf,
    ElseFor,
    EndIf,
    For,
    EndFor,
    Set,
    Macro,
    EndMacro,
    Block,
    EndBlock,
    Cache,
    EndCache,
    Extends,
    Include,
    With,
    Do,
    Autoescape,
    EndAutoescape,
    Break,
    Continue,
}

impl Terminal {
    pub const COUNT: usize = 68;

    pub const ALL: [Terminal; Terminal::COUNT] = [
        Terminal::End,
        Terminal::OpenDelimiter,
        Terminal::CloseDelimiter,
        Terminal::OpenEDelimiter,
        Terminal::CloseEDelimiter,
        Terminal::RawFragment,
        Terminal::Comma,
        Terminal::In,
        Terminal::Question,
        Terminal::Colon,
        Terminal::Range,
        Terminal::Pipe,
        Terminal::Or,
        Terminal::And,
        Terminal::Is,
        Terminal::Equals,
        Terminal::NotEquals,
        Terminal::Identical,
        Terminal::NotIdentical,
        Terminal::Less,
        Terminal::Greater,
        Terminal::LessEqual,
        Terminal::GreaterEqual,
        Terminal::Concat,
        Terminal::Plus,
        Terminal::Minus,
        Terminal::Times,
        Terminal::Divide,
        Terminal::Mod,
        Terminal::Pow,
        Terminal::IntDiv,
        Terminal::Not,
        Terminal::SBracketOpen,
        Terminal::SBracketClose,
        Terminal::ParenOpen,
        Terminal::ParenClose,
        Terminal::Dot,
        Terminal::Integer,
        Terminal::Double,
        Terminal::String,
        Terminal::Identifier,
        Terminal::Null,
        Terminal::True,
        Terminal::False,
        Terminal::Defined,
        Terminal::Assign,
        Terminal::If,
        Terminal::Else,
        Terminal::ElseIf,
        Terminal::ElseFor,
        Terminal::EndIf,
        Terminal::For,
        Terminal::EndFor,
        Terminal::Set,
        Terminal::Macro,
        Terminal::EndMacro,
        Terminal::Block,
        Terminal::EndBlock,
        Terminal::Cache,
        Terminal::EndCache,
        Terminal::Extends,
        Terminal::Include,
        Terminal::With,
        Terminal::Do,
        Terminal::Autoescape,
        Terminal::EndAutoescape,
        Terminal::Break,
        Terminal::Continue,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The parser-side symbol for a scanned token kind.
    ///
    /// `Ignore` has no terminal; end of input is [`Terminal::End`].
    pub fn from_token(kind: TokenKind) -> Option<Terminal> {
        let terminal = match kind {
            TokenKind::RawFragment => Terminal::RawFragment,
            TokenKind::OpenDelimiter => Terminal::OpenDelimiter,
            TokenKind::CloseDelimiter => Terminal::CloseDelimiter,
            TokenKind::OpenEDelimiter => Terminal::OpenEDelimiter,
            TokenKind::CloseEDelimiter => Terminal::CloseEDelimiter,
            TokenKind::Comma => Terminal::Comma,
            TokenKind::Question => Terminal::Question,
            TokenKind::Colon => Terminal::Colon,
            TokenKind::Range => Terminal::Range,
            TokenKind::Dot => Terminal::Dot,
            TokenKind::Assign => Terminal::Assign,
            TokenKind::SBracketOpen => Terminal::SBracketOpen,
            TokenKind::SBracketClose => Terminal::SBracketClose,
            TokenKind::ParenOpen => Terminal::ParenOpen,
            TokenKind::ParenClose => Terminal::ParenClose,
            TokenKind::Pipe => Terminal::Pipe,
            TokenKind::Or => Terminal::Or,
            TokenKind::And => Terminal::And,
            TokenKind::Not => Terminal::Not,
            TokenKind::Equals => Terminal::Equals,
            TokenKind::NotEquals => Terminal::NotEquals,
            TokenKind::Identical => Terminal::Identical,
            TokenKind::NotIdentical => Terminal::NotIdentical,
            TokenKind::Less => Terminal::Less,
            TokenKind::Greater => Terminal::Greater,
            TokenKind::LessEqual => Terminal::LessEqual,
            TokenKind::GreaterEqual => Terminal::GreaterEqual,
            TokenKind::Concat => Terminal::Concat,
            TokenKind::Plus => Terminal::Plus,
            TokenKind::Minus => Terminal::Minus,
            TokenKind::Times => Terminal::Times,
            TokenKind::Divide => Terminal::Divide,
            TokenKind::Mod => Terminal::Mod,
            TokenKind::Pow => Terminal::Pow,
            TokenKind::IntDiv => Terminal::IntDiv,
            TokenKind::Integer => Terminal::Integer,
            TokenKind::Double => Terminal::Double,
            TokenKind::String => Terminal::String,
            TokenKind::Identifier => Terminal::Identifier,
            TokenKind::Null => Terminal::Null,
            TokenKind::True => Terminal::True,
            TokenKind::False => Terminal::False,
            TokenKind::In => Terminal::In,
            TokenKind::Is => Terminal::Is,
            TokenKind::Defined => Terminal::Defined,
            TokenKind::If => Terminal::If,
            TokenKind::Else => Terminal::Else,
            TokenKind::ElseIf => Terminal::ElseIf,
            TokenKind::ElseFor => Terminal::ElseFor,
            TokenKind::EndIf => Terminal::EndIf,
            TokenKind::For => Terminal::For,
            TokenKind::EndFor => Terminal::EndFor,
            TokenKind::Set => Terminal::Set,
            TokenKind::Macro => Terminal::Macro,
            TokenKind::EndMacro => Terminal::EndMacro,
            TokenKind::Block => Terminal::Block,
            TokenKind::EndBlock => Terminal::EndBlock,
            TokenKind::Cache => Terminal::Cache,
            TokenKind::EndCache => Terminal::EndCache,
            TokenKind::Extends => Terminal::Extends,
            TokenKind::Include => Terminal::Include,
            TokenKind::With => Terminal::With,
            TokenKind::Do => Terminal::Do,
            TokenKind::Autoescape => Terminal::Autoescape,
            TokenKind::EndAutoescape => Terminal::EndAutoescape,
            TokenKind::Break => Terminal::Break,
            TokenKind::Continue => Terminal::Continue,
            TokenKind::Ignore => return None,
        };
        Some(terminal)
    }

    /// Grammar spelling, used when printing rules.
    pub fn name(self) -> &'static str {
        match self {
            Terminal::End => "$",
            Terminal::OpenDelimiter => "OPEN_DELIMITER",
            Terminal::CloseDelimiter => "CLOSE_DELIMITER",
            Terminal::OpenEDelimiter => "OPEN_EDELIMITER",
            Terminal::CloseEDelimiter => "CLOSE_EDELIMITER",
            Terminal::RawFragment => "RAW_FRAGMENT",
            Terminal::Comma => "COMMA",
            Terminal::In => "IN",
            Terminal::Question => "QUESTION",
            Terminal::Colon => "COLON",
            Terminal::Range => "RANGE",
            Terminal::Pipe => "PIPE",
            Terminal::Or => "OR",
            Terminal::And => "AND",
            Terminal::Is => "IS",
            Terminal::Equals => "EQUALS",
            Terminal::NotEquals => "NOTEQUALS",
            Terminal::Identical => "IDENTICAL",
            Terminal::NotIdentical => "NOTIDENTICAL",
            Terminal::Less => "LESS",
            Terminal::Greater => "GREATER",
            Terminal::LessEqual => "LESSEQUAL",
            Terminal::GreaterEqual => "GREATEREQUAL",
            Terminal::Concat => "CONCAT",
            Terminal::Plus => "PLUS",
            Terminal::Minus => "MINUS",
            Terminal::Times => "TIMES",
            Terminal::Divide => "DIVIDE",
            Terminal::Mod => "MOD",
            Terminal::Pow => "POW",
            Terminal::IntDiv => "INTDIV",
            Terminal::Not => "NOT",
            Terminal::SBracketOpen => "SBRACKET_OPEN",
            Terminal::SBracketClose => "SBRACKET_CLOSE",
            Terminal::ParenOpen => "PARENTHESES_OPEN",
            Terminal::ParenClose => "PARENTHESES_CLOSE",
            Terminal::Dot => "DOT",
            Terminal::Integer => "INTEGER",
            Terminal::Double => "DOUBLE",
            Terminal::String => "STRING",
            Terminal::Identifier => "IDENTIFIER",
            Terminal::Null => "NULL",
            Terminal::True => "TRUE",
            Terminal::False => "FALSE",
            Terminal::Defined => "DEFINED",
            Terminal::Assign => "ASSIGN",
            Terminal::If => "IF",
            Terminal::Else => "ELSE",
            Terminal::ElseIf => "ELSEIF",
            Terminal::ElseFor => "ELSEFOR",
            Terminal::EndIf => "ENDIF",
            Terminal::For => "FOR",
            Terminal::EndFor => "ENDFOR",
            Terminal::Set => "SET",
            Terminal::Macro => "MACRO",
            Terminal::EndMacro => "ENDMACRO",
            Terminal::Block => "BLOCK",
            Terminal::EndBlock => "ENDBLOCK",
            Terminal::Cache => "CACHE",
            Terminal::EndCache => "ENDCACHE",
            Terminal::Extends => "EXTENDS",
            Terminal::Include => "INCLUDE",
            Terminal::With => "WITH",
            Terminal::Do => "DO",
            Terminal::Autoescape => "AUTOESCAPE",
            Terminal::EndAutoescape => "ENDAUTOESCAPE",
            Terminal::Break => "BREAK",
            Terminal::Continue => "CONTINUE",
        }
    }
}

/// Nonterminal symbols, numbered by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NonTerminal {
    Program,
    VoltLanguage,
    StatementList,
    Statement,
    RawFragment,
    IfStatement,
    ElseIfStatement,
    ElseForStatement,
    ForStatement,
    SetStatement,
    EchoStatement,
    BlockStatement,
    CacheStatement,
    ExtendsStatement,
    IncludeStatement,
    DoStatement,
    AutoescapeStatement,
    BreakStatement,
    ContinueStatement,
    MacroStatement,
    EmptyStatement,
    Expr,
    MacroParameters,
    MacroParameter,
    MacroParameterDefault,
    ArrayList,
    SliceOffset,
    ArrayItem,
    FunctionCall,
    ArgumentList,
    ArgumentItem,
}

impl NonTerminal {
    pub const COUNT: usize = 31;

    pub const ALL: [NonTerminal; NonTerminal::COUNT] = [
        NonTerminal::Program,
        NonTerminal::VoltLanguage,
        NonTerminal::StatementList,
        NonTerminal::Statement,
        NonTerminal::RawFragment,
        NonTerminal::IfStatement,
        NonTerminal::ElseIfStatement,
        NonTerminal::ElseForStatement,
        NonTerminal::ForStatement,
        NonTerminal::SetStatement,
        NonTerminal::EchoStatement,
        NonTerminal::BlockStatement,
        NonTerminal::CacheStatement,
        NonTerminal::ExtendsStatement,
        NonTerminal::IncludeStatement,
        NonTerminal::DoStatement,
        NonTerminal::AutoescapeStatement,
        NonTerminal::BreakStatement,
        NonTerminal::ContinueStatement,
        NonTerminal::MacroStatement,
        NonTerminal::EmptyStatement,
        NonTerminal::Expr,
        NonTerminal::MacroParameters,
        NonTerminal::MacroParameter,
        NonTerminal::MacroParameterDefault,
        NonTerminal::ArrayList,
        NonTerminal::SliceOffset,
        NonTerminal::ArrayItem,
        NonTerminal::FunctionCall,
        NonTerminal::ArgumentList,
        NonTerminal::ArgumentItem,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Program => "program",
            NonTerminal::VoltLanguage => "volt_language",
            NonTerminal::StatementList => "statement_list",
            NonTerminal::Statement => "statement",
            NonTerminal::RawFragment => "raw_fragment",
            NonTerminal::IfStatement => "if_statement",
            NonTerminal::ElseIfStatement => "elseif_statement",
            NonTerminal::ElseForStatement => "elsefor_statement",
            NonTerminal::ForStatement => "for_statement",
            NonTerminal::SetStatement => "set_statement",
            NonTerminal::EchoStatement => "echo_statement",
            NonTerminal::BlockStatement => "block_statement",
            NonTerminal::CacheStatement => "cache_statement",
            NonTerminal::ExtendsStatement => "extends_statement",
            NonTerminal::IncludeStatement => "include_statement",
            NonTerminal::DoStatement => "do_statement",
            NonTerminal::AutoescapeStatement => "autoescape_statement",
            NonTerminal::BreakStatement => "break_statement",
            NonTerminal::ContinueStatement => "continue_statement",
            NonTerminal::MacroStatement => "macro_statement",
            NonTerminal::EmptyStatement => "empty_statement",
            NonTerminal::Expr => "expr",
            NonTerminal::MacroParameters => "macro_parameters",
            NonTerminal::MacroParameter => "macro_parameter",
            NonTerminal::MacroParameterDefault => "macro_parameter_default",
            NonTerminal::ArrayList => "array_list",
            NonTerminal::SliceOffset => "slice_offset",
            NonTerminal::ArrayItem => "array_item",
            NonTerminal::FunctionCall => "function_call",
            NonTerminal::ArgumentList => "argument_list",
            NonTerminal::ArgumentItem => "argument_item",
        }
    }
}

/// A grammar symbol on a rule's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    T(Terminal),
    N(NonTerminal),
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::T(t) => f.write_str(t.name()),
            Symbol::N(n) => f.write_str(n.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// One precedence level; a higher index binds tighter.
#[derive(Debug)]
pub struct PrecedenceLevel {
    pub assoc: Assoc,
    pub terminals: &'static [Terminal],
}

/// Level of the prefix operators; no terminal carries it.
pub const UNARY: usize = 9;

/// Operator precedence, loosest first.
pub static PRECEDENCE: [PrecedenceLevel; 11] = [
    PrecedenceLevel {
        assoc: Assoc::Right,
        terminals: &[Terminal::Question, Terminal::Colon],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::Range],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::Pipe],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::Or],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::And],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[
            Terminal::Is,
            Terminal::Equals,
            Terminal::NotEquals,
            Terminal::Identical,
            Terminal::NotIdentical,
            Terminal::Less,
            Terminal::Greater,
            Terminal::LessEqual,
            Terminal::GreaterEqual,
            Terminal::In,
            Terminal::Not,
        ],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::Concat],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::Plus, Terminal::Minus],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[
            Terminal::Times,
            Terminal::Divide,
            Terminal::Mod,
            Terminal::Pow,
            Terminal::IntDiv,
        ],
    },
    PrecedenceLevel {
        assoc: Assoc::Right,
        terminals: &[],
    },
    PrecedenceLevel {
        assoc: Assoc::Left,
        terminals: &[Terminal::SBracketOpen, Terminal::ParenOpen, Terminal::Dot],
    },
];

/// Precedence level and associativity of a terminal, if it has one.
pub fn terminal_precedence(terminal: Terminal) -> Option<(usize, Assoc)> {
    PRECEDENCE
        .iter()
        .position(|level| level.terminals.contains(&terminal))
        .map(|index| (index, PRECEDENCE[index].assoc))
}

/// A production `lhs ::= rhs`.
#[derive(Debug)]
pub struct Rule {
    pub lhs: NonTerminal,
    pub rhs: &'static [Symbol],
    /// Explicit precedence level (`%prec`), overriding the rightmost terminal's.
    pub precedence: Option<usize>,
}

impl Rule {
    const fn new(lhs: NonTerminal, rhs: &'static [Symbol]) -> Self {
        Self {
            lhs,
            rhs,
            precedence: None,
        }
    }

    const fn prefix(lhs: NonTerminal, rhs: &'static [Symbol]) -> Self {
        Self {
            lhs,
            rhs,
            precedence: Some(UNARY),
        }
    }

    /// Precedence used to settle shift/reduce conflicts on this rule.
    pub fn resolved_precedence(&self) -> Option<(usize, Assoc)> {
        if let Some(level) = self.precedence {
            return PRECEDENCE.get(level).map(|l| (level, l.assoc));
        }
        self.rhs.iter().rev().find_map(|symbol| match symbol {
            Symbol::T(t) => terminal_precedence(*t),
            Symbol::N(_) => None,
        })
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ::=", self.lhs.name())?;
        for symbol in self.rhs {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}

use NonTerminal as Nt;
use Symbol::{N, T};
use Terminal as Tk;

const OD: Symbol = T(Tk::OpenDelimiter);
const CD: Symbol = T(Tk::CloseDelimiter);
const EXPR: Symbol = N(Nt::Expr);
const BODY: Symbol = N(Nt::StatementList);

pub const RULE_COUNT: usize = 114;

/// Every production, indexed by rule number.
pub static RULES: [Rule; RULE_COUNT] = [
    // 0..=3
    Rule::new(Nt::Program, &[N(Nt::VoltLanguage)]),
    Rule::new(Nt::VoltLanguage, &[BODY]),
    Rule::new(Nt::StatementList, &[BODY, N(Nt::Statement)]),
    Rule::new(Nt::StatementList, &[N(Nt::Statement)]),
    // 4..=20
    Rule::new(Nt::Statement, &[N(Nt::RawFragment)]),
    Rule::new(Nt::Statement, &[N(Nt::IfStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::ElseIfStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::ElseForStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::ForStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::SetStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::EchoStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::BlockStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::CacheStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::ExtendsStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::IncludeStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::DoStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::AutoescapeStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::BreakStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::ContinueStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::MacroStatement)]),
    Rule::new(Nt::Statement, &[N(Nt::EmptyStatement)]),
    // 21..=22
    Rule::new(
        Nt::IfStatement,
        &[OD, T(Tk::If), EXPR, CD, BODY, OD, T(Tk::EndIf), CD],
    ),
    Rule::new(
        Nt::IfStatement,
        &[
            OD,
            T(Tk::If),
            EXPR,
            CD,
            BODY,
            OD,
            T(Tk::Else),
            CD,
            BODY,
            OD,
            T(Tk::EndIf),
            CD,
        ],
    ),
    // 23..=24
    Rule::new(Nt::ElseIfStatement, &[OD, T(Tk::ElseIf), EXPR, CD]),
    Rule::new(Nt::ElseForStatement, &[OD, T(Tk::ElseFor), CD]),
    // 25..=28
    Rule::new(
        Nt::ForStatement,
        &[
            OD,
            T(Tk::For),
            T(Tk::Identifier),
            T(Tk::In),
            EXPR,
            CD,
            BODY,
            OD,
            T(Tk::EndFor),
            CD,
        ],
    ),
    Rule::new(
        Nt::ForStatement,
        &[
            OD,
            T(Tk::For),
            T(Tk::Identifier),
            T(Tk::In),
            EXPR,
            T(Tk::If),
            EXPR,
            CD,
            BODY,
            OD,
            T(Tk::EndFor),
            CD,
        ],
    ),
    Rule::new(
        Nt::ForStatement,
        &[
            OD,
            T(Tk::For),
            T(Tk::Identifier),
            T(Tk::Comma),
            T(Tk::Identifier),
            T(Tk::In),
            EXPR,
            CD,
            BODY,
            OD,
            T(Tk::EndFor),
            CD,
        ],
    ),
    Rule::new(
        Nt::ForStatement,
        &[
            OD,
            T(Tk::For),
            T(Tk::Identifier),
            T(Tk::Comma),
            T(Tk::Identifier),
            T(Tk::In),
            EXPR,
            T(Tk::If),
            EXPR,
            CD,
            BODY,
            OD,
            T(Tk::EndFor),
            CD,
        ],
    ),
    // 29
    Rule::new(
        Nt::SetStatement,
        &[OD, T(Tk::Set), T(Tk::Identifier), T(Tk::Assign), EXPR, CD],
    ),
    // 30..=31
    Rule::new(
        Nt::MacroStatement,
        &[
            OD,
            T(Tk::Macro),
            T(Tk::Identifier),
            T(Tk::ParenOpen),
            T(Tk::ParenClose),
            CD,
            BODY,
            OD,
            T(Tk::EndMacro),
            CD,
        ],
    ),
    Rule::new(
        Nt::MacroStatement,
        &[
            OD,
            T(Tk::Macro),
            T(Tk::Identifier),
            T(Tk::ParenOpen),
            N(Nt::MacroParameters),
            T(Tk::ParenClose),
            CD,
            BODY,
            OD,
            T(Tk::EndMacro),
            CD,
        ],
    ),
    // 32..=35
    Rule::new(
        Nt::MacroParameters,
        &[N(Nt::MacroParameters), T(Tk::Comma), N(Nt::MacroParameter)],
    ),
    Rule::new(Nt::MacroParameters, &[N(Nt::MacroParameter)]),
    Rule::new(Nt::MacroParameter, &[T(Tk::Identifier)]),
    Rule::new(
        Nt::MacroParameter,
        &[T(Tk::Identifier), T(Tk::Assign), N(Nt::MacroParameterDefault)],
    ),
    // 36..=41
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::Integer)]),
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::String)]),
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::Double)]),
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::Null)]),
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::False)]),
    Rule::new(Nt::MacroParameterDefault, &[T(Tk::True)]),
    // 42..=43
    Rule::new(Nt::EmptyStatement, &[OD, CD]),
    Rule::new(
        Nt::EchoStatement,
        &[T(Tk::OpenEDelimiter), EXPR, T(Tk::CloseEDelimiter)],
    ),
    // 44..=45
    Rule::new(
        Nt::BlockStatement,
        &[
            OD,
            T(Tk::Block),
            T(Tk::Identifier),
            CD,
            BODY,
            OD,
            T(Tk::EndBlock),
            CD,
        ],
    ),
    Rule::new(
        Nt::BlockStatement,
        &[
            OD,
            T(Tk::Block),
            T(Tk::Identifier),
            CD,
            OD,
            T(Tk::EndBlock),
            CD,
        ],
    ),
    // 46..=47
    Rule::new(
        Nt::CacheStatement,
        &[OD, T(Tk::Cache), EXPR, CD, BODY, OD, T(Tk::EndCache), CD],
    ),
    Rule::new(
        Nt::CacheStatement,
        &[
            OD,
            T(Tk::Cache),
            EXPR,
            T(Tk::Integer),
            CD,
            BODY,
            OD,
            T(Tk::EndCache),
            CD,
        ],
    ),
    // 48..=51
    Rule::new(Nt::ExtendsStatement, &[OD, T(Tk::Extends), T(Tk::String), CD]),
    Rule::new(Nt::IncludeStatement, &[OD, T(Tk::Include), EXPR, CD]),
    Rule::new(
        Nt::IncludeStatement,
        &[OD, T(Tk::Include), EXPR, T(Tk::With), EXPR, CD],
    ),
    Rule::new(Nt::DoStatement, &[OD, T(Tk::Do), EXPR, CD]),
    // 52..=53
    Rule::new(
        Nt::AutoescapeStatement,
        &[
            OD,
            T(Tk::Autoescape),
            T(Tk::False),
            CD,
            BODY,
            OD,
            T(Tk::EndAutoescape),
            CD,
        ],
    ),
    Rule::new(
        Nt::AutoescapeStatement,
        &[
            OD,
            T(Tk::Autoescape),
            T(Tk::True),
            CD,
            BODY,
            OD,
            T(Tk::EndAutoescape),
            CD,
        ],
    ),
    // 54..=56
    Rule::new(Nt::BreakStatement, &[OD, T(Tk::Break), CD]),
    Rule::new(Nt::ContinueStatement, &[OD, T(Tk::Continue), CD]),
    Rule::new(Nt::RawFragment, &[T(Tk::RawFragment)]),
    // 57..=58
    Rule::prefix(Nt::Expr, &[T(Tk::Minus), EXPR]),
    Rule::prefix(Nt::Expr, &[T(Tk::Plus), EXPR]),
    // 59..=71
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Minus), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Plus), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Times), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Pow), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Divide), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::IntDiv), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Mod), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::And), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Or), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Concat), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Pipe), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Range), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Equals), EXPR]),
    // 72..=73
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Is), T(Tk::Not), T(Tk::Defined)]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Is), T(Tk::Defined)]),
    // 74..=83
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Is), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::NotEquals), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Identical), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::NotIdentical), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Less), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Greater), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::GreaterEqual), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::LessEqual), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Dot), EXPR]),
    Rule::new(Nt::Expr, &[EXPR, T(Tk::In), EXPR]),
    // 84..=85
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Not), T(Tk::In), EXPR]),
    Rule::prefix(Nt::Expr, &[T(Tk::Not), EXPR]),
    // 86..=89
    Rule::new(Nt::Expr, &[T(Tk::ParenOpen), EXPR, T(Tk::ParenClose)]),
    Rule::new(Nt::Expr, &[T(Tk::SBracketOpen), T(Tk::SBracketClose)]),
    Rule::new(
        Nt::Expr,
        &[T(Tk::SBracketOpen), N(Nt::ArrayList), T(Tk::SBracketClose)],
    ),
    Rule::new(
        Nt::Expr,
        &[EXPR, T(Tk::SBracketOpen), EXPR, T(Tk::SBracketClose)],
    ),
    // 90
    Rule::new(Nt::Expr, &[EXPR, T(Tk::Question), EXPR, T(Tk::Colon), EXPR]),
    // 91..=93
    Rule::new(
        Nt::Expr,
        &[
            EXPR,
            T(Tk::SBracketOpen),
            T(Tk::Colon),
            N(Nt::SliceOffset),
            T(Tk::SBracketClose),
        ],
    ),
    Rule::new(
        Nt::Expr,
        &[
            EXPR,
            T(Tk::SBracketOpen),
            N(Nt::SliceOffset),
            T(Tk::Colon),
            T(Tk::SBracketClose),
        ],
    ),
    Rule::new(
        Nt::Expr,
        &[
            EXPR,
            T(Tk::SBracketOpen),
            N(Nt::SliceOffset),
            T(Tk::Colon),
            N(Nt::SliceOffset),
            T(Tk::SBracketClose),
        ],
    ),
    // 94..=95
    Rule::new(Nt::SliceOffset, &[T(Tk::Integer)]),
    Rule::new(Nt::SliceOffset, &[T(Tk::Identifier)]),
    // 96..=99
    Rule::new(
        Nt::ArrayList,
        &[N(Nt::ArrayList), T(Tk::Comma), N(Nt::ArrayItem)],
    ),
    Rule::new(Nt::ArrayList, &[N(Nt::ArrayItem)]),
    Rule::new(Nt::ArrayItem, &[T(Tk::String), T(Tk::Colon), EXPR]),
    Rule::new(Nt::ArrayItem, &[EXPR]),
    // 100..=102
    Rule::new(Nt::Expr, &[N(Nt::FunctionCall)]),
    Rule::new(
        Nt::FunctionCall,
        &[
            EXPR,
            T(Tk::ParenOpen),
            N(Nt::ArgumentList),
            T(Tk::ParenClose),
        ],
    ),
    Rule::new(
        Nt::FunctionCall,
        &[EXPR, T(Tk::ParenOpen), T(Tk::ParenClose)],
    ),
    // 103..=106
    Rule::new(
        Nt::ArgumentList,
        &[N(Nt::ArgumentList), T(Tk::Comma), N(Nt::ArgumentItem)],
    ),
    Rule::new(Nt::ArgumentList, &[N(Nt::ArgumentItem)]),
    Rule::new(Nt::ArgumentItem, &[EXPR]),
    Rule::new(Nt::ArgumentItem, &[T(Tk::String), T(Tk::Colon), EXPR]),
    // 107..=113
    Rule::new(Nt::Expr, &[T(Tk::Identifier)]),
    Rule::new(Nt::Expr, &[T(Tk::Integer)]),
    Rule::new(Nt::Expr, &[T(Tk::String)]),
    Rule::new(Nt::Expr, &[T(Tk::Double)]),
    Rule::new(Nt::Expr, &[T(Tk::Null)]),
    Rule::new(Nt::Expr, &[T(Tk::False)]),
    Rule::new(Nt::Expr, &[T(Tk::True)]),
];

/// A decoded parse table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(u16),
    Reduce(u16),
    Accept,
}

const REDUCE_FLAG: u16 = 0x8000;
const ACCEPT: u16 = 0xFFFF;

impl Action {
    /// Packed `u16` form stored in [`table::ACTION_VALUES`].
    pub fn encode(self) -> u16 {
        match self {
            Action::Shift(state) => state,
            Action::Reduce(rule) => REDUCE_FLAG | rule,
            Action::Accept => ACCEPT,
        }
    }

    pub fn decode(value: u16) -> Action {
        if value == ACCEPT {
            Action::Accept
        } else if value & REDUCE_FLAG != 0 {
            Action::Reduce(value & !REDUCE_FLAG)
        } else {
            Action::Shift(value)
        }
    }
}

/// Table action for `terminal` in `state`; `None` is a syntax error.
pub fn action(state: u16, terminal: Terminal) -> Option<Action> {
    let row = usize::from(state);
    let start = usize::from(*table::ACTION_ROWS.get(row)?);
    let end = usize::from(*table::ACTION_ROWS.get(row + 1)?);
    let symbols = table::ACTION_SYMBOLS.get(start..end)?;
    let index = symbols.binary_search(&terminal.code()).ok()?;
    table::ACTION_VALUES.get(start + index).map(|v| Action::decode(*v))
}

/// State reached from `state` after reducing to `symbol`.
pub fn goto(state: u16, symbol: NonTerminal) -> Option<u16> {
    let row = usize::from(state);
    let start = usize::from(*table::GOTO_ROWS.get(row)?);
    let end = usize::from(*table::GOTO_ROWS.get(row + 1)?);
    let symbols = table::GOTO_SYMBOLS.get(start..end)?;
    let index = symbols.binary_search(&symbol.code()).ok()?;
    table::GOTO_STATES.get(start + index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn all_actions() -> impl Iterator<Item = (u16, Terminal, Action)> {
        (0..table::STATE_COUNT as u16).flat_map(|state| {
            Terminal::ALL
                .iter()
                .filter_map(move |t| action(state, *t).map(|a| (state, *t, a)))
        })
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    #[test]
    fn test_terminal_codes_follow_declaration_order() {
        for (index, terminal) in Terminal::ALL.iter().enumerate() {
            assert_eq!(usize::from(terminal.code()), index);
        }
        for (index, symbol) in NonTerminal::ALL.iter().enumerate() {
            assert_eq!(usize::from(symbol.code()), index);
        }
    }

    #[test]
    fn test_every_token_kind_maps_to_a_terminal() {
        for kind in TokenKind::ALL {
            let terminal = Terminal::from_token(kind).unwrap();
            assert_ne!(terminal, Terminal::End);
        }
        assert_eq!(Terminal::from_token(TokenKind::Ignore), None);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(RULES[60].to_string(), "expr ::= expr PLUS expr");
        assert_eq!(
            RULES[24].to_string(),
            "elsefor_statement ::= OPEN_DELIMITER ELSEFOR CLOSE_DELIMITER"
        );
    }

    // =========================================================================
    // Precedence
    // =========================================================================

    #[test]
    fn test_rule_precedence_from_rightmost_terminal() {
        assert_eq!(
            RULES[61].resolved_precedence(),
            terminal_precedence(Terminal::Times)
        );
        assert_eq!(RULES[84].resolved_precedence(), terminal_precedence(Terminal::In));
        assert_eq!(RULES[107].resolved_precedence(), None);
    }

    #[test]
    fn test_prefix_rules_use_unary_level() {
        for index in [57, 58, 85] {
            assert_eq!(RULES[index].resolved_precedence(), Some((UNARY, Assoc::Right)));
        }
    }

    #[test]
    fn test_multiplicative_binds_tighter_than_additive() {
        let (times, _) = terminal_precedence(Terminal::Times).unwrap();
        let (plus, _) = terminal_precedence(Terminal::Plus).unwrap();
        let (pipe, _) = terminal_precedence(Terminal::Pipe).unwrap();
        let (question, assoc) = terminal_precedence(Terminal::Question).unwrap();
        assert!(times > plus);
        assert!(plus > pipe);
        assert!(pipe > question);
        assert_eq!(assoc, Assoc::Right);
    }

    // =========================================================================
    // Table
    // =========================================================================

    #[test]
    fn test_table_dimensions() {
        assert_eq!(table::ACTION_ROWS.len(), table::STATE_COUNT + 1);
        assert_eq!(table::GOTO_ROWS.len(), table::STATE_COUNT + 1);
        assert_eq!(table::ACTION_SYMBOLS.len(), table::ACTION_VALUES.len());
        assert_eq!(table::GOTO_SYMBOLS.len(), table::GOTO_STATES.len());
    }

    #[test]
    fn test_rows_sorted_for_binary_search() {
        for state in 0..table::STATE_COUNT {
            let actions = &table::ACTION_SYMBOLS
                [usize::from(table::ACTION_ROWS[state])..usize::from(table::ACTION_ROWS[state + 1])];
            assert!(actions.windows(2).all(|w| w[0] < w[1]), "state {state}");
            let gotos = &table::GOTO_SYMBOLS
                [usize::from(table::GOTO_ROWS[state])..usize::from(table::GOTO_ROWS[state + 1])];
            assert!(gotos.windows(2).all(|w| w[0] < w[1]), "state {state}");
        }
    }

    #[test]
    fn test_every_state_has_an_action() {
        for state in 0..table::STATE_COUNT {
            assert!(table::ACTION_ROWS[state] < table::ACTION_ROWS[state + 1]);
        }
    }

    #[test]
    fn test_every_rule_is_reduced_somewhere() {
        let mut reduced = [false; RULE_COUNT];
        for (_, _, a) in all_actions() {
            if let Action::Reduce(rule) = a {
                reduced[usize::from(rule)] = true;
            }
        }
        let missing: Vec<usize> = (0..RULE_COUNT).filter(|r| !reduced[*r]).collect();
        assert_eq!(missing, Vec::<usize>::new());
    }

    #[test]
    fn test_single_accept_on_end() {
        let accepts: Vec<_> = all_actions().filter(|(_, _, a)| *a == Action::Accept).collect();
        assert_eq!(accepts.len(), 1);
        assert_eq!(accepts[0].1, Terminal::End);
    }

    #[test]
    fn test_end_is_never_shifted() {
        assert!(all_actions().all(|(_, t, a)| !(t == Terminal::End && matches!(a, Action::Shift(_)))));
    }

    #[test]
    fn test_shift_and_goto_targets_are_states() {
        for (_, _, a) in all_actions() {
            if let Action::Shift(target) = a {
                assert!(usize::from(target) < table::STATE_COUNT);
                assert_ne!(target, 0);
            }
        }
        assert!(table::GOTO_STATES.iter().all(|s| usize::from(*s) < table::STATE_COUNT));
    }

    #[test]
    fn test_reduce_targets_reachable_by_goto() {
        for rule in &RULES {
            assert!(
                table::GOTO_SYMBOLS.contains(&rule.lhs.code()),
                "{rule}"
            );
        }
    }

    proptest! {
        #[test]
        fn test_lookup_never_panics(state in 0u16..400, code in 0usize..Terminal::COUNT) {
            let _ = action(state, Terminal::ALL[code]);
            let _ = goto(state, NonTerminal::ALL[code % NonTerminal::COUNT]);
        }
    }
}
