//! Effective-value aggregation and proportional distribution.
//!
//! This is a **pure function module**: no state, no ledger access, no
//! transfers.
//! - Input: a snapshot of lock records plus the total issuance pool
//! - Output: [`AllocationResult`] (accounting breakdown)
//! - Side effects: none
//!
//! The logic is:
//! 1. Fold the records into per-participant effective values (single pass,
//!    supplied order, zero-value records skipped, malformed terms fatal)
//! 2. Split the issuance pool proportionally using integer floor division
//! 3. Surface the floor-division remainder explicitly; disposition of the
//!    remainder is the caller's policy decision, never the engine's
//! 4. Validate conservation: sum(allocations) + remainder == issuance
//!
//! # Integer math
//!
//! The share numerator `effective * issuance` can exceed 256 bits for
//! ledger-scale inputs, so it is computed with `full_mul` into a `U512`
//! before the division. No intermediate result is ever truncated.

use std::collections::BTreeMap;
use std::fmt;

use primitive_types::U512;
use serde::{Deserialize, Serialize};

use lib_types::{Address, Balance, LockRecord, LockTerm};

use crate::errors::{LockdropError, LockdropResult};
use crate::weights::effective_value;

// =============================================================================
// AGGREGATION
// =============================================================================

/// Per-participant running totals produced by the aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTotals {
    /// Sum of raw locked values across this participant's records
    pub locked: Balance,
    /// Sum of effective values, in weight-scaled units
    pub effective: Balance,
    /// True if any of this participant's records signaled validator intent
    pub validator_intent: bool,
}

/// Output of the aggregation pass over a record snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveTotals {
    /// Per-participant totals, in deterministic address order
    pub participants: BTreeMap<Address, ParticipantTotals>,
    /// Grand total effective value, in weight-scaled units
    pub total_effective: Balance,
    /// Grand total raw locked value
    pub total_locked: Balance,
}

/// Fold a record snapshot into per-participant effective values.
///
/// Single pass in supplied order. Records with `value == 0` contribute
/// nothing and are skipped. A record whose term does not decode aborts
/// the whole computation with [`LockdropError::InvalidLockClass`] and no
/// partial result.
pub fn aggregate_effective_locks(records: &[LockRecord]) -> LockdropResult<EffectiveTotals> {
    let mut totals = EffectiveTotals::default();

    for record in records {
        // Term validity is checked before the zero-value skip: a malformed
        // record is a data-integrity error even when it carries no value.
        let term: LockTerm = record.term()?;

        if record.value.is_zero() {
            continue;
        }

        let effective = effective_value(record.value, term)?;

        let entry = totals.participants.entry(record.owner).or_default();
        entry.locked = entry
            .locked
            .checked_add(record.value)
            .ok_or(LockdropError::Overflow)?;
        entry.effective = entry
            .effective
            .checked_add(effective)
            .ok_or(LockdropError::Overflow)?;
        entry.validator_intent |= record.validator_intent;

        totals.total_locked = totals
            .total_locked
            .checked_add(record.value)
            .ok_or(LockdropError::Overflow)?;
        totals.total_effective = totals
            .total_effective
            .checked_add(effective)
            .ok_or(LockdropError::Overflow)?;
    }

    Ok(totals)
}

// =============================================================================
// ALLOCATION RESULT
// =============================================================================

/// One participant's final share of the issuance pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    /// Sum of raw locked values
    pub locked: Balance,
    /// Sum of effective values, in weight-scaled units
    pub effective: Balance,
    /// Allocated amount: floor(effective * issuance / total_effective)
    pub allocated: Balance,
    /// True if any of this participant's records signaled validator intent
    pub validator_intent: bool,
}

/// Deterministic allocation of the issuance pool across all participants.
///
/// # Invariants
///
/// - sum(allocated) + unallocated_remainder == total_issuance, exactly
/// - every allocated amount and the remainder are non-negative
///   (structural: `Balance` is unsigned)
/// - the remainder is surfaced, never silently dropped or granted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    participants: BTreeMap<Address, ParticipantShare>,
    total_effective: Balance,
    total_locked: Balance,
    total_issuance: Balance,
    unallocated_remainder: Balance,
}

impl AllocationResult {
    /// Build a result from computed shares. Validates conservation.
    fn new(
        participants: BTreeMap<Address, ParticipantShare>,
        total_effective: Balance,
        total_locked: Balance,
        total_issuance: Balance,
        unallocated_remainder: Balance,
    ) -> LockdropResult<Self> {
        let mut allocated = Balance::zero();
        for share in participants.values() {
            allocated = allocated
                .checked_add(share.allocated)
                .ok_or(LockdropError::Overflow)?;
        }
        let accounted = allocated
            .checked_add(unallocated_remainder)
            .ok_or(LockdropError::Overflow)?;
        if accounted != total_issuance {
            return Err(LockdropError::ConservationViolated {
                allocated: accounted,
                issuance: total_issuance,
            });
        }

        Ok(AllocationResult {
            participants,
            total_effective,
            total_locked,
            total_issuance,
            unallocated_remainder,
        })
    }

    /// Per-participant shares, in deterministic address order
    pub fn participants(&self) -> &BTreeMap<Address, ParticipantShare> {
        &self.participants
    }

    /// Share for a specific participant, if they locked anything
    pub fn share(&self, owner: &Address) -> Option<&ParticipantShare> {
        self.participants.get(owner)
    }

    /// Allocated amount for a participant (zero if they locked nothing)
    pub fn allocated(&self, owner: &Address) -> Balance {
        self.participants
            .get(owner)
            .map(|share| share.allocated)
            .unwrap_or_default()
    }

    /// Sum of all allocated amounts
    pub fn total_allocated(&self) -> Balance {
        // Cannot overflow: validated against total_issuance at construction
        self.participants
            .values()
            .fold(Balance::zero(), |acc, share| {
                acc.saturating_add(share.allocated)
            })
    }

    /// Grand total effective value, in weight-scaled units
    pub fn total_effective(&self) -> Balance {
        self.total_effective
    }

    /// Grand total raw locked value
    pub fn total_locked(&self) -> Balance {
        self.total_locked
    }

    /// The issuance pool this result distributes (input, echoed)
    pub fn total_issuance(&self) -> Balance {
        self.total_issuance
    }

    /// Floor-division remainder left unallocated.
    ///
    /// Disposition (burn, redistribute, keep with the treasury) is the
    /// caller's policy decision.
    pub fn unallocated_remainder(&self) -> Balance {
        self.unallocated_remainder
    }

    /// True if no participant held a valid non-zero lock
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocationResult {{participants: {}, total_locked: {}, total_effective: {}, \
             issuance: {}, remainder: {}}}",
            self.participants.len(),
            self.total_locked,
            self.total_effective,
            self.total_issuance,
            self.unallocated_remainder
        )
    }
}

// =============================================================================
// DISTRIBUTION (PURE FUNCTION)
// =============================================================================

/// Compute every participant's proportional share of the issuance pool.
///
/// # Algorithm
///
/// ```text
/// for each participant p:
///     allocation(p) = floor(effective(p) * total_issuance / total_effective)
/// unallocated_remainder = total_issuance - sum(allocation(p))
/// ```
///
/// All arithmetic is exact integer math; the numerator is widened to 512
/// bits so no magnitude is lost.
///
/// # Errors
///
/// - [`LockdropError::InvalidIssuance`] if `total_issuance` is zero
///   (`Balance` is unsigned, so negative issuance is unrepresentable)
/// - [`LockdropError::InvalidLockClass`] if any record carries an
///   unrecognized term; no partial result is produced
///
/// # Edge cases
///
/// `total_effective == 0` (nobody locked anything) is a normal outcome,
/// not an error: the result has an empty participant map and the whole
/// issuance as its remainder.
pub fn compute_allocations(
    records: &[LockRecord],
    total_issuance: Balance,
) -> LockdropResult<AllocationResult> {
    if total_issuance.is_zero() {
        return Err(LockdropError::InvalidIssuance);
    }

    let totals = aggregate_effective_locks(records)?;

    if totals.total_effective.is_zero() {
        return AllocationResult::new(
            BTreeMap::new(),
            totals.total_effective,
            totals.total_locked,
            total_issuance,
            total_issuance,
        );
    }

    let mut shares: BTreeMap<Address, ParticipantShare> = BTreeMap::new();
    let mut allocated_sum = Balance::zero();

    for (owner, participant) in totals.participants {
        let allocated =
            proportional_share(participant.effective, total_issuance, totals.total_effective)?;
        allocated_sum = allocated_sum
            .checked_add(allocated)
            .ok_or(LockdropError::Overflow)?;
        shares.insert(
            owner,
            ParticipantShare {
                locked: participant.locked,
                effective: participant.effective,
                allocated,
                validator_intent: participant.validator_intent,
            },
        );
    }

    let unallocated_remainder =
        total_issuance
            .checked_sub(allocated_sum)
            .ok_or(LockdropError::ConservationViolated {
                allocated: allocated_sum,
                issuance: total_issuance,
            })?;

    AllocationResult::new(
        shares,
        totals.total_effective,
        totals.total_locked,
        total_issuance,
        unallocated_remainder,
    )
}

/// `floor(effective * issuance / total_effective)` with a 512-bit numerator.
///
/// The weight scale shared by `effective` and `total_effective` cancels
/// here, so the rational multipliers are applied without precision loss.
fn proportional_share(
    effective: Balance,
    issuance: Balance,
    total_effective: Balance,
) -> LockdropResult<Balance> {
    // total_effective != 0 is guaranteed by the caller
    let numerator: U512 = effective.full_mul(issuance);
    let share: U512 = numerator / U512::from(total_effective);
    // share <= issuance because effective <= total_effective
    Balance::try_from(share).map_err(|_| LockdropError::Overflow)
}

// =============================================================================
// TESTS
// =============================================================================
