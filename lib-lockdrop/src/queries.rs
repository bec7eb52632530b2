//! Read-only derived queries over a record snapshot.
//!
//! These consume the same snapshot the allocation pass does but report
//! unweighted figures: the raw locked balance (for reporting, distinct
//! from effective value) and the time left until the lockdrop ends.

use lib_types::{Balance, LockRecord, Timestamp};

/// Sum of raw (unweighted) locked values across all records.
///
/// Distinct from the weighted total the allocation uses. Malformed terms
/// are irrelevant here; value is value regardless of class.
pub fn total_locked_balance(records: &[LockRecord]) -> Balance {
    records
        .iter()
        .fold(Balance::zero(), |acc, record| {
            acc.saturating_add(record.value)
        })
}

/// Seconds remaining until the lockdrop ends, clamped to zero once past.
///
/// Both timestamps are externally supplied; the engine holds no clock.
pub const fn time_remaining(lock_end: Timestamp, now: Timestamp) -> u64 {
    lock_end.saturating_sub(now)
}
