//! Lock-term weight multipliers.
//!
//! Longer locks earn proportionally more of the issuance pool. The
//! multiplier table is a fixed design parameter, defined once as named
//! constants so audits can verify fairness, and applied with exact
//! integer arithmetic.
//!
//! # Scaled units
//!
//! Multipliers are rationals with a common `WEIGHT_SCALE_BPS` denominator
//! (10000 = 1.0x). Effective values are kept in scaled units - the raw
//! value times the weight in basis points - rather than divided back down
//! per lock. Every effective value shares the same denominator, so it
//! cancels in the proportional division and no precision is lost to an
//! early floor.

use lib_types::{Balance, LockTerm};

use crate::errors::{LockdropError, LockdropResult};

/// Weight denominator (basis points, 10000 = 1.0x)
pub const WEIGHT_SCALE_BPS: u32 = 10_000;

/// Three month lock weight: 0.24x
pub const THREE_MONTH_WEIGHT_BPS: u32 = 2_400;

/// Six month lock weight: 0.45x
pub const SIX_MONTH_WEIGHT_BPS: u32 = 4_500;

/// Twelve month lock weight: 1.00x
pub const TWELVE_MONTH_WEIGHT_BPS: u32 = 10_000;

/// Weight multiplier for a lock term, in basis points.
///
/// Pure and total over the three valid terms; unrecognized terms are
/// rejected upstream when the raw month count is decoded, so no default
/// arm exists here.
pub const fn weight_bps(term: LockTerm) -> u32 {
    match term {
        LockTerm::ThreeMonths => THREE_MONTH_WEIGHT_BPS,   // 0.24x
        LockTerm::SixMonths => SIX_MONTH_WEIGHT_BPS,       // 0.45x
        LockTerm::TwelveMonths => TWELVE_MONTH_WEIGHT_BPS, // 1.00x
    }
}

/// Effective (weighted) value of a lock, in weight-scaled units.
///
/// `value * weight_bps(term)`, exact. Stays scaled by
/// [`WEIGHT_SCALE_BPS`]; see the module docs for why the scale is not
/// divided out here.
pub fn effective_value(value: Balance, term: LockTerm) -> LockdropResult<Balance> {
    value
        .checked_mul(Balance::from(weight_bps(term)))
        .ok_or(LockdropError::Overflow)
}
