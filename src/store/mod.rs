//! Store module
//!
//! Read-side contract with the profile/measurement store.

pub mod snapshot;

pub use snapshot::{DashboardSnapshot, JsonFileSource, SnapshotSource, StoreError, StoreResult};
