//! Application layer for Renamo.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`RenameService`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rewriting rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service
pub use services::RenameService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Notifier};

pub use error::ApplicationError;
