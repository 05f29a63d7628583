//! Rename Service - main application orchestrator.
//!
//! This service coordinates the rename pass:
//! 1. Validate the root directory
//! 2. Walk the tree depth-first through the `Filesystem` port
//! 3. Rewrite each file name with the rule list and rename on change
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).
//!
//! ## Policy
//!
//! - Directory names are never rewritten; only file names are substituted.
//!   This matches the tool's migration heritage and is a deliberate choice,
//!   not an oversight.
//! - Per-file failures (collision, permission, I/O) are converted to skips
//!   and never abort the traversal; one bad file must not block the rest of
//!   the tree.
//! - Each rename is its own atomic unit. There is no cross-file rollback:
//!   interrupting the process leaves already-renamed files renamed.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem, Notifier},
    },
    domain::{RenameRecord, RenameReport, RuleSet, SkipReason, SkipRecord},
    error::{RenamoError, RenamoResult},
};

/// Main rename service.
///
/// Owns the driven ports and walks one directory tree per call.
pub struct RenameService {
    filesystem: Box<dyn Filesystem>,
    notifier: Box<dyn Notifier>,
}

impl RenameService {
    /// Create a new rename service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            filesystem,
            notifier,
        }
    }

    /// Apply `rules` to every file name under `root`, renaming in place.
    ///
    /// This is the main use case. Returns the full [`RenameReport`]; the
    /// notifier port receives each record as it happens. With `dry_run` the
    /// report is computed identically but nothing on disk changes.
    ///
    /// Fails with `InvalidRoot` before any mutation when `root` is missing
    /// or not a directory.
    #[instrument(skip_all, fields(root = %root.display(), rules = rules.len(), dry_run))]
    pub fn rename_tree(
        &self,
        root: &Path,
        rules: &RuleSet,
        dry_run: bool,
    ) -> RenamoResult<RenameReport> {
        if !self.filesystem.is_dir(root) {
            let reason = if self.filesystem.exists(root) {
                "not a directory"
            } else {
                "no such directory"
            };
            return Err(ApplicationError::InvalidRoot {
                path: root.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        info!("Rename pass started");

        let mut report = RenameReport::default();
        self.walk_dir(root, rules, dry_run, &mut report)?;

        info!(
            visited = report.visited,
            renamed = report.renamed_count(),
            skipped = report.skipped.len(),
            "Rename pass complete"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Process one directory level, then recurse into subdirectories.
    ///
    /// The entry list is snapshotted before any rename so mutation never
    /// perturbs the iteration. Returns `Err` only when this directory itself
    /// cannot be listed; an unlistable *subdirectory* becomes a skip record
    /// and the walk continues.
    fn walk_dir(
        &self,
        dir: &Path,
        rules: &RuleSet,
        dry_run: bool,
        report: &mut RenameReport,
    ) -> RenamoResult<()> {
        let entries = self.filesystem.list_dir(dir)?;
        debug!(dir = %dir.display(), entries = entries.len(), "Visiting directory");

        let mut subdirs: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry.kind {
                EntryKind::File => self.process_file(dir, &entry.name, rules, dry_run, report),
                // Traversed, never renamed.
                EntryKind::Directory => subdirs.push(dir.join(&entry.name)),
                EntryKind::Other => {
                    debug!(dir = %dir.display(), name = %entry.name, "Skipping non-regular entry");
                }
            }
        }

        for sub in subdirs {
            if let Err(e) = self.walk_dir(&sub, rules, dry_run, report) {
                warn!(dir = %sub.display(), error = %e, "Subdirectory unreadable, skipping");
                let record = SkipRecord {
                    dir: dir.to_path_buf(),
                    name: sub
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    reason: SkipReason::Io {
                        message: e.to_string(),
                    },
                };
                self.notifier.skipped(&record);
                report.skipped.push(record);
            }
        }

        Ok(())
    }

    /// Decide and execute the rename for a single regular file.
    fn process_file(
        &self,
        dir: &Path,
        name: &str,
        rules: &RuleSet,
        dry_run: bool,
        report: &mut RenameReport,
    ) {
        report.visited += 1;

        let target = rules.rewrite(name);
        if target == name {
            return;
        }

        if target.is_empty() {
            self.skip(dir, name, SkipReason::EmptyTarget, report);
            return;
        }

        // A sibling occupying the target name, file or directory, keeps
        // this file at its original name.
        let to = dir.join(&target);
        if self.filesystem.exists(&to) {
            self.skip(dir, name, SkipReason::Collision { target }, report);
            return;
        }

        if !dry_run {
            match self.filesystem.rename(&dir.join(name), &to) {
                Ok(()) => {}
                Err(RenamoError::Application(ApplicationError::PermissionDenied { .. })) => {
                    self.skip(dir, name, SkipReason::PermissionDenied, report);
                    return;
                }
                Err(e) => {
                    self.skip(
                        dir,
                        name,
                        SkipReason::Io {
                            message: e.to_string(),
                        },
                        report,
                    );
                    return;
                }
            }
        }

        let record = RenameRecord {
            dir: dir.to_path_buf(),
            from: name.to_string(),
            to: target,
        };
        debug!(dir = %dir.display(), from = %record.from, to = %record.to, "Renamed");
        self.notifier.renamed(&record);
        report.renamed.push(record);
    }

    fn skip(&self, dir: &Path, name: &str, reason: SkipReason, report: &mut RenameReport) {
        warn!(dir = %dir.display(), name, reason = %reason, "File skipped");
        let record = SkipRecord {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            reason,
        };
        self.notifier.skipped(&record);
        report.skipped.push(record);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
