//! Lockdrop Allocation Engine
//!
//! Pure, deterministic computation of proportional issuance allocations
//! from a set of time-locked deposits.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - No side effects, no global state, no I/O
//! 2. **Deterministic** - Same inputs produce identical outputs across all platforms
//! 3. **No floats** - All arithmetic is integer (U256/U512)
//! 4. **Fail-fast** - A malformed record aborts the whole computation;
//!    partial aggregation would silently misrepresent totals
//!
//! # Components
//!
//! - [`weights`]: canonical lock-term weight multiplier table
//! - [`allocation`]: effective-value aggregation and proportional distribution
//! - [`queries`]: raw locked balance and time-remaining helpers
//! - [`source`]: the seam to the external ledger-query collaborator
//!
//! # Usage
//!
//! ```
//! use lib_lockdrop::{compute_allocations, Balance};
//! use lib_types::{Address, LockRecord};
//!
//! let records = vec![
//!     LockRecord::new(Balance::from(100u64), 12, Address::new([1u8; 20]), true),
//!     LockRecord::new(Balance::from(100u64), 3, Address::new([2u8; 20]), false),
//! ];
//! let result = compute_allocations(&records, Balance::from(1_000_000u64)).unwrap();
//! assert_eq!(result.total_allocated() + result.unallocated_remainder(), result.total_issuance());
//! ```

pub mod allocation;
pub mod errors;
pub mod queries;
pub mod source;
pub mod weights;

pub use allocation::{
    aggregate_effective_locks, compute_allocations, AllocationResult, EffectiveTotals,
    ParticipantShare, ParticipantTotals,
};
pub use errors::{LockdropError, LockdropResult};
pub use queries::{time_remaining, total_locked_balance};
pub use source::{allocations_from_source, InMemorySource, LockRecordSource};
pub use weights::{effective_value, weight_bps, WEIGHT_SCALE_BPS};

// Re-export the primitive types callers need alongside the engine
pub use lib_types::{Address, Balance, LockRecord, LockTerm, Timestamp};
