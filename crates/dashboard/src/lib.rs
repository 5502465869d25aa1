//! `tradebook-dashboard` — dashboard figures from a snapshot of backend collections.

pub mod error;
pub mod report;
pub mod snapshot;
pub mod window;

pub use error::SnapshotError;
pub use report::{Dashboard, StatusCounts};
pub use snapshot::Snapshot;
pub use window::parse_window;
