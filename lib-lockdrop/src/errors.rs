//! Allocation Engine Errors

use lib_types::{Balance, UnknownLockTerm};
use thiserror::Error;

/// Error during allocation computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LockdropError {
    /// A ledger record carried a lock term that is not 3, 6 or 12 months.
    /// Fatal to the whole computation: applying a default weight would
    /// corrupt every downstream allocation.
    #[error("invalid lock class: {months} months (valid terms: 3, 6, 12)")]
    InvalidLockClass { months: u32 },

    /// Total issuance must be a positive amount
    #[error("invalid issuance: total issuance must be positive")]
    InvalidIssuance,

    /// Arithmetic overflow
    #[error("arithmetic overflow during allocation")]
    Overflow,

    /// Allocated more than the issuance pool (internal invariant guard)
    #[error("conservation invariant violated: allocated {allocated} exceeds issuance {issuance}")]
    ConservationViolated { allocated: Balance, issuance: Balance },
}

impl From<UnknownLockTerm> for LockdropError {
    fn from(err: UnknownLockTerm) -> Self {
        LockdropError::InvalidLockClass { months: err.months }
    }
}

/// Result type for allocation operations
pub type LockdropResult<T> = Result<T, LockdropError>;
