//! In-memory object store.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::item::{NewScheduleEntry, NewWorkItem, ScheduleEntry, WorkItem};

use super::ObjectStore;

/// Object store backed by concurrent in-process maps.
///
/// Ids are assigned from monotonically increasing counters starting at 1, so
/// same-instant inserts still have a total order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<u64, WorkItem>,
    schedule: DashMap<u64, ScheduleEntry>,
    next_item_id: AtomicU64,
    next_schedule_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectStore for MemoryStore {
    fn insert(&self, new: NewWorkItem) -> Result<WorkItem, StoreError> {
        new.validate()?;

        let id = self.next_item_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = new.into_item(id, OffsetDateTime::now_utc());
        self.items.insert(id, item.clone());
        Ok(item)
    }

    fn list_all(&self) -> Result<Vec<WorkItem>, StoreError> {
        let mut items: Vec<WorkItem> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    fn get(&self, id: u64) -> Result<WorkItem, StoreError> {
        self.items
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or(StoreError::NotFound { id })
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.items.len())
    }

    fn insert_schedule(&self, new: NewScheduleEntry) -> Result<ScheduleEntry, StoreError> {
        new.validate()?;

        let id = self.next_schedule_id.fetch_add(1, Ordering::SeqCst) + 1;
        let entry = new.into_entry(id);
        self.schedule.insert(id, entry.clone());
        Ok(entry)
    }

    fn list_schedule(&self) -> Result<Vec<ScheduleEntry>, StoreError> {
        let mut entries: Vec<ScheduleEntry> =
            self.schedule.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStatus;
    use time::macros::date;

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert(NewWorkItem::named("Depot inspection")).unwrap();
        let b = store.insert(NewWorkItem::named("Tank cleaning")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn insert_rejects_empty_name_and_leaves_store_unchanged() {
        let store = MemoryStore::new();
        let err = store.insert(NewWorkItem::named("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "name", .. }));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn get_returns_exactly_what_was_inserted() {
        let store = MemoryStore::new();
        let new = NewWorkItem {
            customer: Some("Apex Energy".to_string()),
            location: Some("Crestwood".to_string()),
            status: Some(ItemStatus::InProgress),
            budget: Some(2_500_000),
            progress: Some(60),
            description: Some("Storage tank cleaning".to_string()),
            ..NewWorkItem::named("Tank T-5000 cleaning")
        };

        let inserted = store.insert(new).unwrap();
        let fetched = store.get(inserted.id).unwrap();

        assert_eq!(fetched, inserted);
        assert_eq!(fetched.name, "Tank T-5000 cleaning");
        assert_eq!(fetched.budget, Some(2_500_000));
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.get(99).unwrap_err(), StoreError::NotFound { id: 99 });
    }

    #[test]
    fn list_all_returns_newest_first() {
        let store = MemoryStore::new();
        for name in ["first", "second", "third"] {
            store.insert(NewWorkItem::named(name)).unwrap();
        }

        let items = store.list_all().unwrap();
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(items[0].name, "third");
    }

    #[test]
    fn round_trip_keeps_ids_unique() {
        let store = MemoryStore::new();
        for i in 0..25 {
            store.insert(NewWorkItem::named(format!("item {i}"))).unwrap();
        }

        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 25);

        let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn schedule_entries_list_in_insertion_order() {
        let store = MemoryStore::new();
        for task in ["alpha", "beta"] {
            store
                .insert_schedule(NewScheduleEntry {
                    task: task.to_string(),
                    start_date: date!(2026 - 02 - 20),
                    end_date: date!(2026 - 02 - 25),
                    progress: 0,
                    color: None,
                    item_id: None,
                })
                .unwrap();
        }

        let entries = store.list_schedule().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task, "alpha");
        assert_eq!(entries[1].task, "beta");
    }
}
