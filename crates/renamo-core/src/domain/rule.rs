//! Substitution rules.
//!
//! A [`Rule`] is an ordered pair of literal substrings; a [`RuleSet`] is a
//! validated, non-empty, ordered list of rules. Rules are literal (no regex
//! or glob semantics) and each rule replaces *every* non-overlapping
//! occurrence of its match substring, like `str::replace`.
//!
//! Rule order matters: a later rule operates on the output of an earlier
//! rule's substitution, so chained rules compound (a `.gd -> .br` rule run
//! after `GD -> BR` sees the already-partially-rewritten name).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// One literal substring substitution, applied to file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Substring to search for. Must be non-empty.
    pub find: String,
    /// Replacement text. May be empty (deletes the matched substring).
    pub replace: String,
}

impl Rule {
    /// Create a rule. Validation happens when the rule joins a [`RuleSet`].
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Replace all non-overlapping occurrences of `find` in `name`.
    pub fn apply(&self, name: &str) -> String {
        name.replace(&self.find, &self.replace)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.find, self.replace)
    }
}

/// A validated, ordered list of rules.
///
/// Construction is the single validation point: once a `RuleSet` exists it
/// is guaranteed non-empty with no empty match substrings, so the rename
/// service never re-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting empty lists and empty match substrings.
    pub fn new(rules: Vec<Rule>) -> Result<Self, DomainError> {
        if rules.is_empty() {
            return Err(DomainError::EmptyRuleSet);
        }
        if let Some(index) = rules.iter().position(|r| r.find.is_empty()) {
            return Err(DomainError::EmptyFind { index });
        }
        Ok(Self { rules })
    }

    /// Apply every rule in declaration order and return the rewritten name.
    ///
    /// The result equals the input when no rule matched.
    pub fn rewrite(&self, name: &str) -> String {
        self.rules
            .iter()
            .fold(name.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules. Always at least one.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> RuleSet {
        RuleSet::new(pairs.iter().map(|(f, r)| Rule::new(*f, *r)).collect()).unwrap()
    }

    // ── Rule ──────────────────────────────────────────────────────────────

    #[test]
    fn apply_replaces_all_occurrences() {
        let rule = Rule::new("GD0", "BR0");
        assert_eq!(rule.apply("GD0_GD0Scene.tres"), "BR0_BR0Scene.tres");
    }

    #[test]
    fn apply_without_match_is_identity() {
        let rule = Rule::new("GD0", "BR0");
        assert_eq!(rule.apply("player.gd"), "player.gd");
    }

    #[test]
    fn empty_replacement_deletes_match() {
        let rule = Rule::new("-old", "");
        assert_eq!(rule.apply("scene-old.tres"), "scene.tres");
    }

    #[test]
    fn non_overlapping_semantics() {
        // "aaa" contains two non-overlapping "aa" only if restarted after each
        // match; str::replace consumes matched text, so "aaa" -> "b" + "a".
        let rule = Rule::new("aa", "b");
        assert_eq!(rule.apply("aaa"), "ba");
    }

    #[test]
    fn rule_display() {
        assert_eq!(Rule::new("GD0", "BR0").to_string(), "GD0 -> BR0");
    }

    // ── RuleSet validation ────────────────────────────────────────────────

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(RuleSet::new(vec![]), Err(DomainError::EmptyRuleSet));
    }

    #[test]
    fn empty_find_is_rejected_with_index() {
        let rules = vec![Rule::new("GD0", "BR0"), Rule::new("", "x")];
        assert_eq!(RuleSet::new(rules), Err(DomainError::EmptyFind { index: 1 }));
    }

    #[test]
    fn single_rule_is_valid() {
        assert_eq!(set(&[("GD0", "BR0")]).len(), 1);
    }

    // ── RuleSet rewriting ─────────────────────────────────────────────────

    #[test]
    fn rewrite_applies_rules_in_order() {
        // The second rule operates on the first rule's output.
        let rules = set(&[("GDScript", "BRScript"), (".gd", ".br")]);
        assert_eq!(rules.rewrite("GDScriptNode.gd"), "BRScriptNode.br");
    }

    #[test]
    fn rewrite_order_compounds() {
        // Reversing the order changes the result: "ab"->"b" first leaves no
        // "a" for the second rule to see.
        let forward = set(&[("ab", "b"), ("b", "c")]);
        let reverse = set(&[("b", "c"), ("ab", "b")]);
        assert_eq!(forward.rewrite("ab"), "c");
        assert_eq!(reverse.rewrite("ab"), "ac");
    }

    #[test]
    fn rewrite_without_match_returns_input() {
        let rules = set(&[("GD0", "BR0")]);
        assert_eq!(rules.rewrite("player.gd"), "player.gd");
    }

    #[test]
    fn rewrite_can_empty_a_name() {
        let rules = set(&[("tmp", "")]);
        assert_eq!(rules.rewrite("tmptmp"), "");
    }

    #[test]
    fn rewrite_handles_unicode_names() {
        let rules = set(&[("GD0", "BR0")]);
        assert_eq!(rules.rewrite("GD0_sc\u{e9}ne.tres"), "BR0_sc\u{e9}ne.tres");
    }
}
