//! Growth policy: when to rehash, how large to grow, and the migration.

use crate::bucket_array::BucketArray;
use crate::entry::{Entry, Handle};
use crate::error::{Result, TableError};
use core::ops::ControlFlow;
use log::warn;
use slotmap::{DefaultKey, SlotMap};

/// Smallest bucket count a table ever has; smaller hints are raised.
pub const MIN_CAPACITY: usize = 3;

/// Growth triggers once `occupied * 100 / capacity` reaches this value.
pub const MAX_LOAD_PERCENT: usize = 75;

/// Capacities up to this value are nudged past small-prime multiples.
pub const SIEVE_LIMIT: usize = 100;

/// Capacity to grow to from `capacity`: `2 * capacity + 1`, advanced past
/// multiples of 2, 3, 5 and 7 while `capacity <= SIEVE_LIMIT`. This is a
/// cheap sieve, not a primality test. `None` if the arithmetic overflows.
pub fn next_capacity(capacity: usize) -> Option<usize> {
    let mut target = capacity.checked_mul(2)?.checked_add(1)?;
    if capacity <= SIEVE_LIMIT {
        while [2, 3, 5, 7].iter().any(|p| target % p == 0) {
            target += 1;
        }
    }
    Some(target)
}

#[inline]
pub(crate) fn needs_growth(buckets: &BucketArray) -> bool {
    buckets.load_percent() >= MAX_LOAD_PERCENT
}

/// Build a larger array holding every handle of `current`.
///
/// Handles are placed in traversal order and the fresh array is checked
/// against the load threshold after every placement, growing again if
/// needed. The result is returned only if exactly `expected` handles were
/// placed; otherwise `current` is left as the authoritative layout.
pub(crate) fn grow<V>(
    current: &BucketArray,
    entries: &SlotMap<DefaultKey, Entry<V>>,
    expected: usize,
) -> Result<BucketArray> {
    let target = next_capacity(current.capacity()).ok_or(TableError::AllocationFailure)?;
    let mut fresh = BucketArray::with_capacity(target)?;
    let mut placed = 0usize;
    let mut failure = None;

    current.visit(|h: Handle| {
        let Some(entry) = entries.get(h.raw_handle()) else {
            failure = Some(TableError::NotFound);
            return ControlFlow::Break(());
        };
        if let Err(e) = fresh.place(h, entry.hash) {
            failure = Some(e);
            return ControlFlow::Break(());
        }
        placed += 1;
        if needs_growth(&fresh) {
            match grow(&fresh, entries, placed) {
                Ok(bigger) => fresh = bigger,
                Err(e) => warn!(
                    "nested rehash from {} buckets failed: {}",
                    fresh.capacity(),
                    e
                ),
            }
        }
        ControlFlow::Continue(())
    });

    if let Some(e) = failure {
        return Err(e);
    }
    if placed != expected {
        return Err(TableError::AllocationFailure);
    }
    Ok(fresh)
}
