use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::core::completion::is_completed;
use crate::core::roster::ActiveWorkerIndex;
use crate::core::types::{RankedEntry, Shift};

/// Completed-shift count per eligible worker id. Keys are always a
/// subset of the active worker index the counts were built against.
pub type CompletionCounts = HashMap<i64, u64>;

/// Folds the shift list into per-worker completed counts. Shifts that
/// are not completed, unassigned, or assigned to a worker outside
/// `eligible` are skipped; the result does not depend on iteration
/// order.
pub fn count_completed(
    shifts: &[Shift],
    eligible: &ActiveWorkerIndex,
    now: DateTime<Utc>,
) -> CompletionCounts {
    let mut counts = CompletionCounts::new();
    for shift in shifts {
        if !is_completed(shift, now) {
            continue;
        }
        let Some(worker_id) = shift.worker_id else {
            continue;
        };
        if !eligible.contains_key(&worker_id) {
            continue;
        }
        *counts.entry(worker_id).or_insert(0) += 1;
    }
    counts
}

/// Orders the counts into the final ranking: count descending, ties
/// broken by ascending name, truncated to `limit` entries.
///
/// Every counts key must resolve in `names`; `count_completed` only
/// ever emits keys drawn from the same index.
pub fn rank(counts: &CompletionCounts, names: &ActiveWorkerIndex, limit: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = counts
        .iter()
        .filter_map(|(worker_id, &shifts)| {
            names.get(worker_id).map(|name| RankedEntry {
                name: name.clone(),
                shifts,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.shifts.cmp(&a.shifts).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}
