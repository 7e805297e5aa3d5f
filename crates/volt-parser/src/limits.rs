//! Parser resource limits.
//!
//! The parse stack is bounded so pathological nesting fails with a
//! reported error instead of growing without limit.

use serde::Deserialize;

/// Default maximum parse stack depth, counting the initial entry.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 100;

/// Parser limits. Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseLimits {
    /// Maximum number of entries on the parse stack.
    pub max_stack_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl ParseLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_depth() {
        assert_eq!(ParseLimits::new().max_stack_depth, 100);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let limits: ParseLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, ParseLimits::default());

        let limits: ParseLimits = serde_json::from_str(r#"{"max_stack_depth": 400}"#).unwrap();
        assert_eq!(limits.max_stack_depth, 400);
    }

    #[test]
    fn test_builder() {
        assert_eq!(ParseLimits::new().with_max_stack_depth(8).max_stack_depth, 8);
    }
}
