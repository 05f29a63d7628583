use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are rule-validation failures. They are fatal: an invalid
/// rule list must be rejected before the traversal starts, because an empty
/// match substring would otherwise match at every position and corrupt every
/// file name in the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A rule list with zero rules is meaningless; fail fast instead of
    /// silently walking the tree for nothing.
    #[error("rule list is empty")]
    EmptyRuleSet,

    /// Rule `index` (zero-based, declaration order) has an empty match
    /// substring.
    #[error("rule #{index} has an empty match substring")]
    EmptyFind { index: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyRuleSet => vec![
                "Supply at least one rule with --match/--replace".into(),
                "Or add default rules to your configuration file".into(),
            ],
            Self::EmptyFind { index } => vec![
                format!("Rule #{} matches the empty string", index),
                "An empty --match would match at every position in every file name".into(),
                "Give every --match flag a non-empty substring".into(),
            ],
        }
    }
}
