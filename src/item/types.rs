//! Work item types for the tracking backend.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use crate::error::StoreError;

/// Lifecycle status of a tracked work item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemStatus {
    /// Work not started yet.
    #[default]
    Planning,
    /// Work underway.
    InProgress,
    /// Work finished.
    Completed,
}

/// A tracked work item ("object" in the wire format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique id, assigned at creation, immutable.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Site or city the work happens at.
    pub location: Option<String>,
    /// Customer the work is done for.
    pub customer: Option<String>,
    /// Lifecycle status.
    pub status: ItemStatus,
    /// Budget in whole currency units.
    pub budget: Option<u64>,
    /// Completion percentage in [0, 100].
    pub progress: Option<u8>,
    /// Scheduled start.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    /// Scheduled end.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    /// Free-text description.
    pub description: Option<String>,
    /// Set once at creation.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Refreshed on every mutation.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Payload for creating a work item. Everything except `name` is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWorkItem {
    /// Display name, required and non-empty.
    pub name: Option<String>,
    /// Site or city the work happens at.
    pub location: Option<String>,
    /// Customer the work is done for.
    pub customer: Option<String>,
    /// Lifecycle status, defaults to planning.
    pub status: Option<ItemStatus>,
    /// Budget in whole currency units.
    pub budget: Option<u64>,
    /// Completion percentage in [0, 100].
    pub progress: Option<u8>,
    /// Scheduled start.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    /// Scheduled end.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    /// Free-text description.
    pub description: Option<String>,
}

impl NewWorkItem {
    /// Payload with just a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Check the payload against the insert rules.
    pub fn validate(&self) -> Result<(), StoreError> {
        match &self.name {
            None => return Err(StoreError::validation("name", "is required")),
            Some(name) if name.trim().is_empty() => {
                return Err(StoreError::validation("name", "must not be empty"));
            }
            Some(_) => {}
        }

        if let Some(progress) = self.progress {
            if progress > 100 {
                return Err(StoreError::validation(
                    "progress",
                    format!("must be in 0..=100, got {progress}"),
                ));
            }
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(StoreError::validation(
                    "end_date",
                    "must not be before start_date",
                ));
            }
        }

        Ok(())
    }

    /// Build the stored record from a validated payload.
    pub fn into_item(self, id: u64, now: OffsetDateTime) -> WorkItem {
        WorkItem {
            id,
            name: self.name.unwrap_or_default(),
            location: self.location,
            customer: self.customer,
            status: self.status.unwrap_or_default(),
            budget: self.budget,
            progress: self.progress,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}
