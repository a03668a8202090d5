//! Work item module for the tracking backend.
//!
//! This module handles:
//! - Work item types and status values
//! - Create payloads and their validation
//! - Schedule entries for the timeline view

pub mod schedule;
pub mod types;

pub use schedule::{NewScheduleEntry, ScheduleEntry};
pub use types::{ItemStatus, NewWorkItem, WorkItem};
