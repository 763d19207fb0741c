use chrono::{DateTime, Utc};

use crate::core::types::Shift;

/// Decides whether a shift counts toward its worker's productivity at
/// the given reference instant.
///
/// A shift is completed when it is assigned, not cancelled, and its
/// scheduled end has already occurred (end <= now, inclusive). An
/// `end_at` that does not parse as RFC 3339 makes the shift not
/// completed; classification never fails.
pub fn is_completed(shift: &Shift, now: DateTime<Utc>) -> bool {
    if shift.worker_id.is_none() {
        return false;
    }
    if shift.cancelled_at.is_some() {
        return false;
    }

    match DateTime::parse_from_rfc3339(&shift.end_at) {
        Ok(end) => end.with_timezone(&Utc) <= now,
        Err(_) => false,
    }
}
