//! ChainedTable: string-keyed map over separately chained buckets.

use crate::builder::TableBuilder;
use crate::bucket_array::BucketArray;
use crate::entry::{Entry, Handle};
use crate::error::{Result, TableError};
use crate::hasher::{KeyHasher, PositionWeighted};
use crate::rehash::{grow, needs_growth, MIN_CAPACITY};
use log::{debug, trace, warn};
use slotmap::{DefaultKey, SlotMap};

/// Cleanup run on every value the table lets go of: on removal, when a
/// later insert replaces it, and when the table is dropped.
pub type ValueDestructor<V> = Box<dyn FnMut(V)>;

pub struct ChainedTable<V, S = PositionWeighted> {
    pub(crate) hasher: S,
    pub(crate) buckets: BucketArray,
    pub(crate) entries: SlotMap<DefaultKey, Entry<V>>, // arena; buckets hold handles into it
    pub(crate) destructor: Option<ValueDestructor<V>>,
}

impl<V> ChainedTable<V> {
    /// Table without a destructor; released values are simply dropped.
    /// Fails on a zero `capacity_hint`; hints below 3 are raised to 3.
    pub fn new(capacity_hint: usize) -> Result<Self> {
        TableBuilder::new().capacity(capacity_hint).build()
    }

    /// Table that hands every released value to `destructor`.
    pub fn with_destructor<F>(destructor: F, capacity_hint: usize) -> Result<Self>
    where
        F: FnMut(V) + 'static,
    {
        TableBuilder::new()
            .capacity(capacity_hint)
            .destructor(destructor)
            .build()
    }

    pub fn builder() -> TableBuilder<V> {
        TableBuilder::new()
    }
}

impl<V, S> ChainedTable<V, S> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    /// Buckets that have held an entry since the last rehash. Draining a
    /// bucket through `remove` does not lower this count.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.occupied()
    }

    /// `occupied_buckets() * 100 / capacity()`.
    pub fn load_percent(&self) -> usize {
        self.buckets.load_percent()
    }

    fn dispose(&mut self, value: V) {
        if let Some(d) = self.destructor.as_mut() {
            d(value);
        }
    }
}

impl<V, S> ChainedTable<V, S>
where
    S: KeyHasher,
{
    pub(crate) fn from_parts(
        hasher: S,
        capacity_hint: usize,
        destructor: Option<ValueDestructor<V>>,
    ) -> Result<Self> {
        if capacity_hint == 0 {
            return Err(TableError::InvalidArgument("capacity hint must be non-zero"));
        }
        let capacity = capacity_hint.max(MIN_CAPACITY);
        Ok(Self {
            hasher,
            buckets: BucketArray::with_capacity(capacity)?,
            entries: SlotMap::with_key(),
            destructor,
        })
    }

    fn find(&self, key: &str, hash: usize) -> Option<Handle> {
        let bucket = self.buckets.bucket(self.buckets.index_for(hash))?;
        let pos = bucket.position(|h| {
            self.entries
                .get(h.raw_handle())
                .is_some_and(|e| &*e.key == key)
        })?;
        bucket.get(pos)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let h = self.find(key, self.hasher.hash_key(key))?;
        self.entries.get(h.raw_handle()).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let h = self.find(key, self.hasher.hash_key(key))?;
        self.entries.get_mut(h.raw_handle()).map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key, self.hasher.hash_key(key)).is_some()
    }

    /// Insert or replace.
    ///
    /// A new key is appended to its bucket and may trigger a rehash; a
    /// failed rehash is logged and the table stays at its old capacity. An
    /// existing key keeps its position and its stored key; only the value
    /// is swapped and the old one goes to the destructor.
    pub fn insert(&mut self, key: &str, value: V) -> Result<()> {
        let hash = self.hasher.hash_key(key);

        if let Some(entry) = self
            .find(key, hash)
            .and_then(|h| self.entries.get_mut(h.raw_handle()))
        {
            let old = core::mem::replace(&mut entry.value, value);
            trace!("replaced value for key {:?}", key);
            self.dispose(old);
            return Ok(());
        }

        let k = self.entries.insert(Entry::new(key, value, hash));
        if let Err(e) = self.buckets.place(Handle::new(k), hash) {
            if let Some(entry) = self.entries.remove(k) {
                self.dispose(entry.value);
            }
            return Err(e);
        }

        if needs_growth(&self.buckets) {
            if let Err(e) = self.rehash() {
                warn!(
                    "rehash of {} entries at capacity {} failed: {}",
                    self.len(),
                    self.capacity(),
                    e
                );
            }
        }
        Ok(())
    }

    /// Remove `key`, handing its value to the destructor.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let index = self.buckets.index_for(self.hasher.hash_key(key));
        let bucket = self
            .buckets
            .bucket_mut(index)
            .filter(|b| !b.is_empty())
            .ok_or(TableError::NotFound)?;
        let entries = &self.entries;
        let pos = bucket
            .position(|h| {
                entries
                    .get(h.raw_handle())
                    .is_some_and(|e| &*e.key == key)
            })
            .ok_or(TableError::NotFound)?;
        let h = bucket.remove_at(pos).ok_or(TableError::NotFound)?;
        let entry = self
            .entries
            .remove(h.raw_handle())
            .ok_or(TableError::NotFound)?;
        self.dispose(entry.value);
        Ok(())
    }

    /// Swap in a larger bucket array holding every entry. The live array is
    /// only replaced once the migration has placed all entries; entries stay
    /// in the arena throughout, so the discarded array owns no values.
    fn rehash(&mut self) -> Result<()> {
        let from = self.capacity();
        debug!("rehashing {} entries from {} buckets", self.len(), from);
        let grown = grow(&self.buckets, &self.entries, self.entries.len())?;
        debug!("rehash complete: {} -> {} buckets", from, grown.capacity());
        self.buckets = grown;
        Ok(())
    }
}

impl<V, S> Drop for ChainedTable<V, S> {
    fn drop(&mut self) {
        let buckets = core::mem::take(&mut self.buckets);
        for h in buckets.into_handles() {
            if let Some(entry) = self.entries.remove(h.raw_handle()) {
                self.dispose(entry.value);
            }
        }
    }
}

impl<V: core::fmt::Debug, S> core::fmt::Debug for ChainedTable<V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
