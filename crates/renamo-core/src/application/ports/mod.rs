//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `renamo-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory listing and renames
//!   - `Notifier`: streaming per-file feedback
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer)

pub mod output;

pub use output::{EntryKind, Filesystem, Notifier, NullNotifier, TreeEntry};
