//! Lockdrop primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Allocation math lives in `lib-lockdrop`; this crate only defines the
//! data it operates on.

pub mod lock;
pub mod primitives;

pub use lock::{LockRecord, LockTerm, UnknownLockTerm};
pub use primitives::{Address, Balance, Timestamp};
