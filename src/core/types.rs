use serde_derive::{Deserialize, Serialize};

/// Worker record as served by the workers endpoint. Status is an
/// integer enumeration; 0 means active and is the only status eligible
/// for the ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub status: i64,
}

pub const STATUS_ACTIVE: i64 = 0;

/// Shift record as served by the shifts endpoint. `worker_id` is null
/// for unassigned shifts; a non-null `cancelled_at` marks the shift
/// cancelled. Timestamps stay as ISO-8601 strings until classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: i64,
    pub workplace_id: i64,
    pub worker_id: Option<i64>,
    pub start_at: String,
    pub end_at: String,
    pub cancelled_at: Option<String>,
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub shifts: u64,
}
