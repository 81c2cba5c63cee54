//! Traversal: `for_each_key` (table drives, caller may stop early) and
//! `Cursor` (caller pulls). Both visit buckets in array order and each
//! bucket front to back, so they observe the same key order.

use crate::entry::Handle;
use crate::hasher::PositionWeighted;
use crate::table::ChainedTable;
use core::iter::FusedIterator;
use core::ops::ControlFlow;

impl<V, S> ChainedTable<V, S> {
    /// Call `f` with each key until it returns `Break`.
    ///
    /// Returns the number of calls made, including the one that broke; a
    /// walk that is never stopped returns `len()`. The callback receives
    /// the table itself and may perform lookups on it.
    pub fn for_each_key<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&Self, &str) -> ControlFlow<()>,
    {
        self.buckets.visit(|h| match self.entries.get(h.raw_handle()) {
            Some(e) => f(self, &*e.key),
            None => ControlFlow::Continue(()),
        })
    }

    /// Pull-style cursor over the keys.
    pub fn keys(&self) -> Cursor<'_, V, S> {
        Cursor::new(self)
    }

    /// Key/value pairs in cursor order.
    pub fn iter(&self) -> Iter<'_, V, S> {
        Iter {
            cursor: Cursor::new(self),
        }
    }
}

/// Resumable position in a table: the next bucket to open and the
/// remainder of the bucket being read. Borrowing the table keeps it
/// unmodified for the cursor's lifetime.
pub struct Cursor<'a, V, S = PositionWeighted> {
    table: &'a ChainedTable<V, S>,
    next_bucket: usize,
    current: core::slice::Iter<'a, Handle>,
}

impl<'a, V, S> Cursor<'a, V, S> {
    fn new(table: &'a ChainedTable<V, S>) -> Self {
        let empty: &'a [Handle] = &[];
        Self {
            table,
            next_bucket: 0,
            current: empty.iter(),
        }
    }

    // Skip forward past exhausted and empty buckets. False once the array
    // is used up.
    fn settle(&mut self) -> bool {
        let table: &'a ChainedTable<V, S> = self.table;
        while self.current.as_slice().is_empty() {
            let Some(slot) = table.buckets.slots().get(self.next_bucket) else {
                return false;
            };
            self.next_bucket += 1;
            if let Some(bucket) = slot {
                self.current = bucket.iter();
            }
        }
        true
    }

    /// Whether `next_key` will yield a key. Does not consume one.
    pub fn has_next(&mut self) -> bool {
        self.settle()
    }

    /// Next key, or `None` once every bucket has been read.
    pub fn next_key(&mut self) -> Option<&'a str> {
        self.next_entry().map(|(k, _)| k)
    }

    fn next_entry(&mut self) -> Option<(&'a str, &'a V)> {
        let table: &'a ChainedTable<V, S> = self.table;
        while self.settle() {
            let h = self.current.next()?;
            if let Some(e) = table.entries.get(h.raw_handle()) {
                return Some((&*e.key, &e.value));
            }
        }
        None
    }
}

impl<'a, V, S> Iterator for Cursor<'a, V, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_key()
    }
}

impl<V, S> FusedIterator for Cursor<'_, V, S> {}

pub struct Iter<'a, V, S = PositionWeighted> {
    cursor: Cursor<'a, V, S>,
}

impl<'a, V, S> Iterator for Iter<'a, V, S> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_entry()
    }
}

impl<V, S> FusedIterator for Iter<'_, V, S> {}

impl<'a, V, S> IntoIterator for &'a ChainedTable<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
