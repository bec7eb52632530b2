//! Lock event types.
//!
//! A [`LockRecord`] is a read-only snapshot of one on-chain lock event,
//! exactly as the ledger reports it. The term is kept as the raw month
//! count from the contract call so that a malformed record is
//! representable: decoding it into a [`LockTerm`] is the engine's job,
//! and an unrecognized term must be rejected, never defaulted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitives::{Address, Balance};

// ============================================================================
// LOCK TERM
// ============================================================================

/// Duration class of a lock, as accepted by the lockdrop contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockTerm {
    /// Three month lock
    ThreeMonths = 3,
    /// Six month lock
    SixMonths = 6,
    /// Twelve month lock
    TwelveMonths = 12,
}

impl LockTerm {
    /// All valid terms in ascending duration order
    pub const ALL: &'static [LockTerm] = &[
        LockTerm::ThreeMonths,
        LockTerm::SixMonths,
        LockTerm::TwelveMonths,
    ];

    /// Decode a raw on-chain month count into a term.
    ///
    /// Only 3, 6 and 12 are valid; anything else is a data-integrity
    /// error in the ledger snapshot and must abort the computation that
    /// consumes it.
    pub const fn from_months(months: u32) -> Result<Self, UnknownLockTerm> {
        match months {
            3 => Ok(LockTerm::ThreeMonths),
            6 => Ok(LockTerm::SixMonths),
            12 => Ok(LockTerm::TwelveMonths),
            _ => Err(UnknownLockTerm { months }),
        }
    }

    /// Duration of this term in months
    pub const fn months(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for LockTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

/// Error returned when a raw month count does not name a valid lock term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLockTerm {
    /// The month count found in the ledger record
    pub months: u32,
}

impl fmt::Display for UnknownLockTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown lock term: {} months (valid terms: 3, 6, 12)",
            self.months
        )
    }
}

impl std::error::Error for UnknownLockTerm {}

// ============================================================================
// LOCK RECORD
// ============================================================================

/// One on-chain lock event, as read from ledger state.
///
/// Records are snapshots: they are fetched once per invocation and never
/// mutated. `term_months` is deliberately raw (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Amount of base currency units locked
    pub value: Balance,
    /// Lock duration in months, raw from the contract call
    pub term_months: u32,
    /// Depositor's ledger account
    pub owner: Address,
    /// Depositor signaled intent to run a validator (informational only;
    /// does not affect weighting)
    pub validator_intent: bool,
}

impl LockRecord {
    /// Create a record from raw ledger fields
    pub fn new(value: Balance, term_months: u32, owner: Address, validator_intent: bool) -> Self {
        Self {
            value,
            term_months,
            owner,
            validator_intent,
        }
    }

    /// Decode this record's raw term
    pub const fn term(&self) -> Result<LockTerm, UnknownLockTerm> {
        LockTerm::from_months(self.term_months)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_months_valid() {
        assert_eq!(LockTerm::from_months(3), Ok(LockTerm::ThreeMonths));
        assert_eq!(LockTerm::from_months(6), Ok(LockTerm::SixMonths));
        assert_eq!(LockTerm::from_months(12), Ok(LockTerm::TwelveMonths));
    }

    #[test]
    fn test_from_months_invalid() {
        for months in [0, 1, 2, 4, 5, 7, 9, 11, 13, 24, u32::MAX] {
            let err = LockTerm::from_months(months).unwrap_err();
            assert_eq!(err.months, months);
        }
    }

    #[test]
    fn test_months_roundtrip() {
        for term in LockTerm::ALL {
            assert_eq!(LockTerm::from_months(term.months()), Ok(*term));
        }
    }

    #[test]
    fn test_term_ordering_by_months() {
        assert!(LockTerm::ThreeMonths.months() < LockTerm::SixMonths.months());
        assert!(LockTerm::SixMonths.months() < LockTerm::TwelveMonths.months());
    }

    #[test]
    fn test_record_term_decoding() {
        let good = LockRecord::new(Balance::from(10u64), 6, Address::zero(), false);
        assert_eq!(good.term(), Ok(LockTerm::SixMonths));

        let bad = LockRecord::new(Balance::from(10u64), 7, Address::zero(), false);
        assert!(bad.term().is_err());
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let record = LockRecord::new(
            Balance::exp10(20),
            12,
            Address::new([7u8; 20]),
            true,
        );
        let serialized = serde_json::to_string(&record).unwrap();
        let deserialized: LockRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(record, deserialized);
    }
}
