//! Application services.
//!
//! One service: [`RenameService`], the orchestrator of a rename pass.

pub mod rename_service;

pub use rename_service::RenameService;
