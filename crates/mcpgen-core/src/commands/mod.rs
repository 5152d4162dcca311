//! High-level commands shared by frontends.

pub mod list;
pub mod sync;

pub use list::{ListCommand, ServerListing};
pub use sync::{SyncCommand, SyncReport, TargetOutcome, WriteMode};
