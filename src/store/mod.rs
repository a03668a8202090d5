//! Object store for the tracking backend.
//!
//! This module handles:
//! - The [`ObjectStore`] trait handlers are written against
//! - In-memory production store
//! - Mock store with failure injection for testing
//! - Demo data seeding

pub mod memory;
pub mod mock;
pub mod seed;

use crate::error::StoreError;
use crate::item::{NewScheduleEntry, NewWorkItem, ScheduleEntry, WorkItem};

pub use memory::MemoryStore;
pub use mock::{MockStore, MockStoreConfig};
pub use seed::seed_demo_data;

/// Collection of tracked work items and schedule entries.
///
/// Handlers receive an explicit `Arc<dyn ObjectStore>` rather than reaching
/// for process-wide state, so tests can substitute a failing store.
pub trait ObjectStore: Send + Sync {
    /// Validate and store a new work item, returning the full record.
    fn insert(&self, new: NewWorkItem) -> Result<WorkItem, StoreError>;

    /// Every work item, newest first (`created_at` descending, id descending
    /// as tiebreak for same-instant inserts).
    fn list_all(&self) -> Result<Vec<WorkItem>, StoreError>;

    /// Look up a single work item by id.
    fn get(&self, id: u64) -> Result<WorkItem, StoreError>;

    /// Number of stored work items.
    fn count(&self) -> Result<usize, StoreError>;

    /// Validate and store a new schedule entry.
    fn insert_schedule(&self, new: NewScheduleEntry) -> Result<ScheduleEntry, StoreError>;

    /// Every schedule entry, in insertion order.
    fn list_schedule(&self) -> Result<Vec<ScheduleEntry>, StoreError>;
}
