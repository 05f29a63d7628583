//! Renamo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Renamo
//! recursive file renamer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           renamo-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (RenameService)              │
//! │      Orchestrates the Rename Pass       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Notifier)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    renamo-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │     (Rule, RuleSet, RenameReport)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use renamo_core::{
//!     application::RenameService,
//!     domain::{Rule, RuleSet},
//! };
//!
//! // 1. Build the validated rule list
//! let rules = RuleSet::new(vec![Rule::new("GD0", "BR0")])?;
//!
//! // 2. Use the application service (with injected adapters)
//! let service = RenameService::new(filesystem, notifier);
//! let report = service.rename_tree("./project".as_ref(), &rules, false)?;
//! println!("{} files renamed", report.renamed_count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RenameService,
        ports::{EntryKind, Filesystem, Notifier, NullNotifier, TreeEntry},
    };
    pub use crate::domain::{RenameRecord, RenameReport, Rule, RuleSet, SkipReason, SkipRecord};
    pub use crate::error::{RenamoError, RenamoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
