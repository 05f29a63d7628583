//! Domain layer for Renamo.
//!
//! Pure business logic with no I/O: the substitution rules that rewrite file
//! names, and the report structures describing what a rename pass did. All
//! filesystem interaction happens behind the ports in
//! [`crate::application::ports`].

pub mod error;
pub mod report;
pub mod rule;

pub use error::DomainError;
pub use report::{RenameRecord, RenameReport, SkipReason, SkipRecord};
pub use rule::{Rule, RuleSet};
