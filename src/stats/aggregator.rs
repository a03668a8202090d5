//! Summary counters and budget totals derived from a work item snapshot.

use serde::Serialize;

use crate::item::{ItemStatus, WorkItem};

/// Derived summary over the full work item collection.
///
/// `completed + in_progress + planning` always equals `total`: status is a
/// closed enum, so no item can fall outside the three buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of work items in the snapshot.
    #[serde(rename = "total_objects")]
    pub total: u64,
    /// Items with status `completed`.
    pub completed: u64,
    /// Items with status `in_progress`.
    pub in_progress: u64,
    /// Items with status `planning`.
    pub planning: u64,
    /// Sum of budgets; items without a budget contribute 0.
    pub total_budget: u64,
    /// `total_budget / total`, rounded half-up; 0 for an empty snapshot.
    pub average_budget: u64,
    /// `completed / total * 100`, rounded half-up to one decimal; 0.0 for an
    /// empty snapshot.
    pub completion_rate: f64,
}

/// Compute the summary for a snapshot. Pure, never fails.
pub fn aggregate(items: &[WorkItem]) -> StatsSummary {
    let total = items.len() as u64;

    let mut completed = 0u64;
    let mut in_progress = 0u64;
    let mut planning = 0u64;
    let mut total_budget = 0u64;

    for item in items {
        match item.status {
            ItemStatus::Completed => completed += 1,
            ItemStatus::InProgress => in_progress += 1,
            ItemStatus::Planning => planning += 1,
        }
        total_budget += item.budget.unwrap_or(0);
    }

    let average_budget = if total > 0 {
        div_round_half_up(total_budget, total)
    } else {
        0
    };

    let completion_rate = if total > 0 {
        round_to_tenth(completed as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    StatsSummary {
        total,
        completed,
        in_progress,
        planning,
        total_budget,
        average_budget,
        completion_rate,
    }
}

/// Integer division rounding half-up.
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (numerator + denominator / 2) / denominator
}

/// Round half-up to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
