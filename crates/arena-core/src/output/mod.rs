//! Output
//!
//! Snapshot generation for renderers and state files.

pub mod snapshot;

pub use snapshot::{build_snapshot, ordered_snakes, write_snapshot};
