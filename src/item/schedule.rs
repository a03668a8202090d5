//! Schedule entries backing the timeline view.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::StoreError;

time::serde::format_description!(day, Date, "[year]-[month]-[day]");

/// Default bar color for timeline entries.
pub const DEFAULT_COLOR: &str = "#3498db";

/// One bar on the timeline, optionally linked to a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique id, assigned at creation.
    pub id: u64,
    /// Task label shown on the bar.
    pub task: String,
    /// First day of the bar.
    #[serde(with = "day")]
    pub start_date: Date,
    /// Last day of the bar.
    #[serde(with = "day")]
    pub end_date: Date,
    /// Completion percentage in [0, 100].
    pub progress: u8,
    /// Hex color for the bar.
    pub color: String,
    /// Work item this bar belongs to, if any.
    pub item_id: Option<u64>,
}

/// Payload for creating a schedule entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewScheduleEntry {
    /// Task label, required and non-empty.
    pub task: String,
    /// First day of the bar.
    #[serde(with = "day")]
    pub start_date: Date,
    /// Last day of the bar.
    #[serde(with = "day")]
    pub end_date: Date,
    /// Completion percentage, defaults to 0.
    #[serde(default)]
    pub progress: u8,
    /// Hex color, defaults to [`DEFAULT_COLOR`].
    pub color: Option<String>,
    /// Work item this bar belongs to, if any.
    pub item_id: Option<u64>,
}

impl NewScheduleEntry {
    /// Check the payload against the insert rules.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.task.trim().is_empty() {
            return Err(StoreError::validation("task", "must not be empty"));
        }
        if self.progress > 100 {
            return Err(StoreError::validation(
                "progress",
                format!("must be in 0..=100, got {}", self.progress),
            ));
        }
        if self.start_date > self.end_date {
            return Err(StoreError::validation(
                "end_date",
                "must not be before start_date",
            ));
        }
        Ok(())
    }

    /// Build the stored record from a validated payload.
    pub fn into_entry(self, id: u64) -> ScheduleEntry {
        ScheduleEntry {
            id,
            task: self.task,
            start_date: self.start_date,
            end_date: self.end_date,
            progress: self.progress,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            item_id: self.item_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn entry(task: &str) -> NewScheduleEntry {
        NewScheduleEntry {
            task: task.to_string(),
            start_date: date!(2026 - 02 - 20),
            end_date: date!(2026 - 02 - 25),
            progress: 60,
            color: None,
            item_id: Some(1),
        }
    }

    #[test]
    fn entry_gets_default_color() {
        let stored = entry("Tank T-5000 cleaning").into_entry(7);
        assert_eq!(stored.color, DEFAULT_COLOR);
        assert_eq!(stored.id, 7);
    }

    #[test]
    fn dates_serialize_as_plain_days() {
        let stored = entry("Tank T-5000 cleaning").into_entry(1);
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["start_date"], "2026-02-20");
        assert_eq!(json["end_date"], "2026-02-25");
    }

    #[test]
    fn validate_rejects_reversed_dates() {
        let mut payload = entry("Tank T-5000 cleaning");
        payload.end_date = date!(2026 - 02 - 10);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_task() {
        assert!(entry("  ").validate().is_err());
        assert!(entry("Tank T-5000 cleaning").validate().is_ok());
    }
}
