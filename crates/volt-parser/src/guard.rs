//! Structural rules checked on the token stream before it reaches the parser.
//!
//! The grammar accepts `extends` anywhere, nested blocks, and free content
//! in child templates. These rules reject such templates as tokens arrive,
//! and resolve `else` inside a bare `for` body to `elsefor`.

use crate::error::StructuralViolation;
use volt_lexer::{Token, TokenKind};

/// What to do with a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// Feed the token to the parser as this kind.
    Feed(TokenKind),
    /// Drop the token silently.
    Skip,
}

/// Nesting counters for one parse.
#[derive(Debug, Default)]
pub(crate) struct StructuralGuard {
    block_level: usize,
    if_level: usize,
    for_level: usize,
    /// `if_level` saved by each open `for`.
    saved_if_levels: Vec<usize>,
    /// Between `for` and the `%}` closing its header; an `if` here is the loop filter.
    in_for_header: bool,
    extends_mode: bool,
    statement_position: usize,
}

impl StructuralGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check a token against the structural rules.
    pub(crate) fn admit(&mut self, token: &Token) -> Result<Admission, StructuralViolation> {
        let kind = match token.kind {
            TokenKind::Ignore => return Ok(Admission::Skip),

            TokenKind::RawFragment => {
                if token.text.is_empty() {
                    return Ok(Admission::Skip);
                }
                let blank = token.is_blank_fragment();
                if self.in_child_outside_block() {
                    if blank {
                        return Ok(Admission::Skip);
                    }
                    return Err(StructuralViolation::ChildOutsideBlock);
                }
                if !blank {
                    self.statement_position += 1;
                }
                TokenKind::RawFragment
            }

            TokenKind::OpenDelimiter => {
                self.statement_position += 1;
                TokenKind::OpenDelimiter
            }

            TokenKind::OpenEDelimiter => {
                self.check_child()?;
                self.statement_position += 1;
                TokenKind::OpenEDelimiter
            }

            TokenKind::If if self.in_for_header => TokenKind::If,

            TokenKind::If => {
                self.check_child()?;
                self.if_level += 1;
                self.block_level += 1;
                TokenKind::If
            }

            TokenKind::ElseIf => {
                if self.if_level == 0 {
                    return Err(StructuralViolation::ElseIfOutsideIf);
                }
                TokenKind::ElseIf
            }

            TokenKind::Else => {
                if self.if_level == 0 && self.for_level > 0 {
                    TokenKind::ElseFor
                } else {
                    TokenKind::Else
                }
            }

            TokenKind::EndIf => {
                self.block_level = self.block_level.saturating_sub(1);
                self.if_level = self.if_level.saturating_sub(1);
                TokenKind::EndIf
            }

            TokenKind::For => {
                self.check_child()?;
                self.saved_if_levels.push(self.if_level);
                self.if_level = 0;
                self.for_level += 1;
                self.block_level += 1;
                self.in_for_header = true;
                TokenKind::For
            }

            TokenKind::CloseDelimiter => {
                self.in_for_header = false;
                TokenKind::CloseDelimiter
            }

            TokenKind::EndFor => {
                self.block_level = self.block_level.saturating_sub(1);
                self.for_level = self.for_level.saturating_sub(1);
                self.if_level = self.saved_if_levels.pop().unwrap_or(0);
                TokenKind::EndFor
            }

            TokenKind::Block => {
                if self.block_level > 0 {
                    return Err(StructuralViolation::NestedBlock);
                }
                self.block_level += 1;
                TokenKind::Block
            }

            TokenKind::EndBlock => {
                self.block_level = self.block_level.saturating_sub(1);
                TokenKind::EndBlock
            }

            TokenKind::Extends => {
                if self.statement_position != 1 {
                    return Err(StructuralViolation::ExtendsNotFirst);
                }
                self.extends_mode = true;
                TokenKind::Extends
            }

            kind @ (TokenKind::Set
            | TokenKind::Macro
            | TokenKind::Cache
            | TokenKind::Include
            | TokenKind::Do
            | TokenKind::Autoescape
            | TokenKind::Break
            | TokenKind::Continue) => {
                self.check_child()?;
                kind
            }

            kind => kind,
        };
        Ok(Admission::Feed(kind))
    }

    fn in_child_outside_block(&self) -> bool {
        self.extends_mode && self.block_level == 0
    }

    fn check_child(&self) -> Result<(), StructuralViolation> {
        if self.in_child_outside_block() {
            return Err(StructuralViolation::ChildOutsideBlock);
        }
        Ok(())
    }
}
