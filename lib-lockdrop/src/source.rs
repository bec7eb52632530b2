//! Seam to the external lock-record collaborator.
//!
//! The engine never talks to a ledger itself. Whatever fetches records
//! (an RPC client, a batch export, a fixture) implements
//! [`LockRecordSource`] and hands the engine a fully materialized,
//! stably ordered snapshot. Pagination, retries and timeouts all live on
//! the implementor's side of this trait.

use anyhow::{Context, Result};

use lib_types::{Balance, LockRecord};

use crate::allocation::{compute_allocations, AllocationResult};

/// A supplier of lock-record snapshots.
///
/// Implementations must deliver records in a stable order; the engine
/// processes them as supplied.
pub trait LockRecordSource {
    /// Fetch the current snapshot of lock records
    fn lock_records(&self) -> Result<Vec<LockRecord>>;
}

/// Fetch a snapshot from a source and compute the full allocation table.
pub fn allocations_from_source<S>(source: &S, total_issuance: Balance) -> Result<AllocationResult>
where
    S: LockRecordSource + ?Sized,
{
    let records = source
        .lock_records()
        .context("failed to fetch lock records")?;
    compute_allocations(&records, total_issuance).context("allocation computation failed")
}

/// A source backed by an already materialized record list.
///
/// Used by tests and batch jobs that load snapshots from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<LockRecord>,
}

impl InMemorySource {
    /// Wrap an existing record list
    pub fn new(records: Vec<LockRecord>) -> Self {
        Self { records }
    }
}

impl LockRecordSource for InMemorySource {
    fn lock_records(&self) -> Result<Vec<LockRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::Address;

    #[test]
    fn test_allocations_from_in_memory_source() {
        let source = InMemorySource::new(vec![LockRecord::new(
            Balance::from(100u64),
            12,
            Address::new([1u8; 20]),
            false,
        )]);
        let result = allocations_from_source(&source, Balance::from(1_000u64)).unwrap();
        assert_eq!(
            result.allocated(&Address::new([1u8; 20])),
            Balance::from(1_000u64)
        );
    }

    #[test]
    fn test_engine_errors_propagate_through_seam() {
        let source = InMemorySource::new(vec![LockRecord::new(
            Balance::from(100u64),
            8,
            Address::zero(),
            false,
        )]);
        let err = allocations_from_source(&source, Balance::from(1_000u64)).unwrap_err();
        assert!(err.to_string().contains("allocation computation failed"));
    }

    #[test]
    fn test_source_failures_surface_with_context() {
        struct FailingSource;
        impl LockRecordSource for FailingSource {
            fn lock_records(&self) -> Result<Vec<LockRecord>> {
                anyhow::bail!("connection refused")
            }
        }

        let err = allocations_from_source(&FailingSource, Balance::from(1u64)).unwrap_err();
        assert!(err.to_string().contains("failed to fetch lock records"));
    }
}
