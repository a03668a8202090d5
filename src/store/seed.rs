//! Demo data bootstrap.
//!
//! A one-time fixture step for demo and local development: populates an empty
//! store with a handful of realistic work items and matching schedule
//! entries. A non-empty store is never touched.

use time::macros::date;
use tracing::info;

use crate::error::StoreError;
use crate::item::{ItemStatus, NewScheduleEntry, NewWorkItem};

use super::ObjectStore;

/// Seed demo work items and schedule entries if the store is empty.
///
/// Returns the number of work items inserted (0 when the store already has
/// data).
pub fn seed_demo_data(store: &dyn ObjectStore) -> Result<usize, StoreError> {
    if store.count()? > 0 {
        return Ok(0);
    }

    let items = demo_items();
    let inserted = items.len();
    for item in items {
        store.insert(item)?;
    }

    for entry in demo_schedule() {
        store.insert_schedule(entry)?;
    }

    info!("seeded {} demo work items", inserted);
    Ok(inserted)
}

fn demo_items() -> Vec<NewWorkItem> {
    vec![
        NewWorkItem {
            customer: Some("Northgas Logistics".to_string()),
            location: Some("Easton terminal".to_string()),
            status: Some(ItemStatus::InProgress),
            budget: Some(2_500_000),
            progress: Some(60),
            description: Some("Cleanout of a 5000 m3 diesel storage tank".to_string()),
            ..NewWorkItem::named("Storage tank T-5000 cleaning")
        },
        NewWorkItem {
            customer: Some("Apex Energy".to_string()),
            location: Some("Crestwood".to_string()),
            status: Some(ItemStatus::Planning),
            budget: Some(500_000),
            progress: Some(20),
            description: Some("Small station tank inspection and flush".to_string()),
            ..NewWorkItem::named("Fuel station tank G-100 inspection")
        },
        NewWorkItem {
            customer: Some("Harbor Terminal Co".to_string()),
            location: Some("Port Amble".to_string()),
            status: Some(ItemStatus::Completed),
            budget: Some(15_000_000),
            progress: Some(100),
            description: Some("Full rehabilitation of the 50 000 m3 terminal tank".to_string()),
            ..NewWorkItem::named("Terminal tank 50 000 m3 rehabilitation")
        },
        NewWorkItem {
            customer: Some("Westquay Terminal".to_string()),
            location: Some("West Quay".to_string()),
            status: Some(ItemStatus::InProgress),
            budget: Some(8_000_000),
            progress: Some(40),
            description: Some("Cleaning of light-product relay tanks".to_string()),
            ..NewWorkItem::named("Relay tanks 20 000 m3 cleaning")
        },
        NewWorkItem {
            customer: Some("Kestrel Mining".to_string()),
            location: Some("Redford yard".to_string()),
            status: Some(ItemStatus::Planning),
            budget: Some(4_500_000),
            progress: Some(10),
            description: Some("Fuel depot storage tanks cleanout".to_string()),
            ..NewWorkItem::named("Depot tanks 10 000 m3 cleanout")
        },
    ]
}

fn demo_schedule() -> Vec<NewScheduleEntry> {
    vec![
        NewScheduleEntry {
            task: "Storage tank T-5000 cleaning".to_string(),
            start_date: date!(2026 - 02 - 20),
            end_date: date!(2026 - 02 - 25),
            progress: 60,
            color: Some("#3498db".to_string()),
            item_id: Some(1),
        },
        NewScheduleEntry {
            task: "Fuel station tank G-100 inspection".to_string(),
            start_date: date!(2026 - 02 - 22),
            end_date: date!(2026 - 02 - 28),
            progress: 20,
            color: Some("#2ecc71".to_string()),
            item_id: Some(2),
        },
        NewScheduleEntry {
            task: "Terminal tank 50 000 m3 rehabilitation".to_string(),
            start_date: date!(2026 - 02 - 15),
            end_date: date!(2026 - 02 - 20),
            progress: 100,
            color: Some("#e74c3c".to_string()),
            item_id: Some(3),
        },
        NewScheduleEntry {
            task: "Relay tanks 20 000 m3 cleaning".to_string(),
            start_date: date!(2026 - 02 - 21),
            end_date: date!(2026 - 03 - 05),
            progress: 40,
            color: Some("#9b59b6".to_string()),
            item_id: Some(4),
        },
        NewScheduleEntry {
            task: "Depot tanks 10 000 m3 cleanout".to_string(),
            start_date: date!(2026 - 02 - 25),
            end_date: date!(2026 - 03 - 10),
            progress: 10,
            color: Some("#f39c12".to_string()),
            item_id: Some(5),
        },
    ]
}
