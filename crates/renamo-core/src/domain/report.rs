//! Rename pass reports.
//!
//! A [`RenameReport`] is the full record of one traversal: every rename
//! performed, every file skipped and why, and how many files were examined.
//! Records exist for reporting and testability; nothing is persisted across
//! runs.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One completed rename (or, in dry-run mode, a rename that would happen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// Original file name.
    pub from: String,
    /// New file name.
    pub to: String,
}

/// Why a matching file was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The target name is already occupied by a sibling entry (file or
    /// directory, both are treated as collisions).
    Collision { target: String },
    /// The rules reduced the name to an empty string. Counted with
    /// collisions in summaries.
    EmptyTarget,
    /// The filesystem rejected the rename.
    PermissionDenied,
    /// Any other per-file filesystem failure.
    Io { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision { target } => write!(f, "target name '{target}' already exists"),
            Self::EmptyTarget => write!(f, "rules reduce the name to an empty string"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Io { message } => write!(f, "{message}"),
        }
    }
}

/// One file that matched a rule but was not renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipRecord {
    pub dir: PathBuf,
    pub name: String,
    pub reason: SkipReason,
}

/// Everything one rename pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    /// Renames performed, in traversal order.
    pub renamed: Vec<RenameRecord>,
    /// Files skipped, in traversal order.
    pub skipped: Vec<SkipRecord>,
    /// Regular files examined. Every reachable file produces exactly one
    /// rename-or-skip-or-keep decision, so for a tree with `k` files this
    /// is `k`.
    pub visited: usize,
}

impl RenameReport {
    pub fn renamed_count(&self) -> usize {
        self.renamed.len()
    }

    /// Skips caused by name collisions, including empty-target names.
    pub fn collision_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| {
                matches!(
                    s.reason,
                    SkipReason::Collision { .. } | SkipReason::EmptyTarget
                )
            })
            .count()
    }

    pub fn permission_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::PermissionDenied))
            .count()
    }

    pub fn io_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Io { .. }))
            .count()
    }

    /// `true` when at least one file had to be skipped. The CLI maps this to
    /// a dedicated exit code so calling scripts can detect partial failure.
    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(reason: SkipReason) -> SkipRecord {
        SkipRecord {
            dir: PathBuf::from("/tree"),
            name: "GD0File.cfg".into(),
            reason,
        }
    }

    #[test]
    fn empty_report_has_no_failures() {
        let report = RenameReport::default();
        assert_eq!(report.renamed_count(), 0);
        assert_eq!(report.visited, 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn counts_split_by_reason() {
        let report = RenameReport {
            renamed: vec![],
            skipped: vec![
                skip(SkipReason::Collision {
                    target: "BR0File.cfg".into(),
                }),
                skip(SkipReason::EmptyTarget),
                skip(SkipReason::PermissionDenied),
                skip(SkipReason::Io {
                    message: "device busy".into(),
                }),
            ],
            visited: 4,
        };
        assert_eq!(report.collision_count(), 2); // collision + empty target
        assert_eq!(report.permission_count(), 1);
        assert_eq!(report.io_count(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn skip_reason_display_is_human_readable() {
        let reason = SkipReason::Collision {
            target: "BR0Scene.tres".into(),
        };
        assert!(reason.to_string().contains("BR0Scene.tres"));
        assert_eq!(SkipReason::PermissionDenied.to_string(), "permission denied");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = RenameReport {
            renamed: vec![RenameRecord {
                dir: PathBuf::from("/tree"),
                from: "GD0Scene.tres".into(),
                to: "BR0Scene.tres".into(),
            }],
            skipped: vec![],
            visited: 1,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["renamed"][0]["from"], "GD0Scene.tres");
        assert_eq!(json["visited"], 1);
    }
}
