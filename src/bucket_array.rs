//! BucketArray: the fixed-length slot array behind a table.
//!
//! A slot is `None` until the first entry hashes to it; from then on it
//! holds a (possibly empty) `Bucket` for the life of the array. `occupied`
//! counts slots that have been allocated, so it never decreases when a
//! bucket drains through removals.

use crate::bucket::Bucket;
use crate::entry::Handle;
use crate::error::Result;
use core::ops::ControlFlow;

#[derive(Debug, Default)]
pub(crate) struct BucketArray {
    slots: Vec<Option<Bucket>>,
    occupied: usize,
}

impl BucketArray {
    /// Allocate `capacity` empty slots. Reservation is fallible so an
    /// unobtainable capacity surfaces as `AllocationFailure`.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, occupied: 0 })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// `occupied * 100 / capacity`, truncated.
    pub(crate) fn load_percent(&self) -> usize {
        self.occupied
            .saturating_mul(100)
            .checked_div(self.capacity())
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn index_for(&self, hash: usize) -> usize {
        hash % self.capacity()
    }

    pub(crate) fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn bucket_mut(&mut self, index: usize) -> Option<&mut Bucket> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub(crate) fn slots(&self) -> &[Option<Bucket>] {
        &self.slots
    }

    /// Append `h` to the bucket its hash selects, allocating the bucket on
    /// first use.
    pub(crate) fn place(&mut self, h: Handle, hash: usize) -> Result<()> {
        let index = self.index_for(hash);
        let occupied = &mut self.occupied;
        let bucket = self.slots[index].get_or_insert_with(|| {
            *occupied += 1;
            Bucket::new()
        });
        bucket.push_back(h)
    }

    /// Visit every handle in slot order, then bucket order. Stops after the
    /// first `Break`; returns how many handles were visited, including the
    /// one that stopped the walk.
    pub(crate) fn visit<F>(&self, mut f: F) -> usize
    where
        F: FnMut(Handle) -> ControlFlow<()>,
    {
        let mut visited = 0;
        for bucket in self.slots.iter().flatten() {
            for &h in bucket.iter() {
                visited += 1;
                if f(h).is_break() {
                    return visited;
                }
            }
        }
        visited
    }

    /// Consume the array, yielding every handle in traversal order.
    pub(crate) fn into_handles(self) -> impl Iterator<Item = Handle> {
        self.slots
            .into_iter()
            .flatten()
            .flat_map(Bucket::into_items)
    }
}
