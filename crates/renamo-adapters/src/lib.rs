//! Infrastructure adapters for Renamo.
//!
//! This crate implements the ports defined in
//! `renamo-core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
