//! Mock object store for unit testing.
//!
//! Wraps a [`MemoryStore`] and can be switched to fail reads or writes, so
//! tests can exercise the degraded health and stats fallback paths without a
//! real unreachable backend.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StoreError;
use crate::item::{NewScheduleEntry, NewWorkItem, ScheduleEntry, WorkItem};

use super::{MemoryStore, ObjectStore};

/// Configuration for mock store behavior.
#[derive(Debug, Clone, Default)]
pub struct MockStoreConfig {
    /// Whether reads fail with [`StoreError::Unavailable`].
    pub fail_reads: bool,
    /// Whether writes fail with [`StoreError::Unavailable`].
    pub fail_writes: bool,
}

/// Object store whose failures are scripted by the test.
#[derive(Debug, Default)]
pub struct MockStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockStore {
    /// Create a healthy mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store with the given failure switches.
    pub fn with_config(config: MockStoreConfig) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(config.fail_reads),
            fail_writes: AtomicBool::new(config.fail_writes),
        }
    }

    /// Toggle read failures.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Toggle write failures.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("mock read failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("mock write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ObjectStore for MockStore {
    fn insert(&self, new: NewWorkItem) -> Result<WorkItem, StoreError> {
        self.check_write()?;
        self.inner.insert(new)
    }

    fn list_all(&self) -> Result<Vec<WorkItem>, StoreError> {
        self.check_read()?;
        self.inner.list_all()
    }

    fn get(&self, id: u64) -> Result<WorkItem, StoreError> {
        self.check_read()?;
        self.inner.get(id)
    }

    fn count(&self) -> Result<usize, StoreError> {
        self.check_read()?;
        self.inner.count()
    }

    fn insert_schedule(&self, new: NewScheduleEntry) -> Result<ScheduleEntry, StoreError> {
        self.check_write()?;
        self.inner.insert_schedule(new)
    }

    fn list_schedule(&self) -> Result<Vec<ScheduleEntry>, StoreError> {
        self.check_read()?;
        self.inner.list_schedule()
    }
}
