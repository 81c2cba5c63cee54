//! Entries and the arena handles buckets use to refer to them.

use slotmap::DefaultKey;

/// Stable reference to an entry slot in the table's arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }
}

/// One key/value pair. The key is the table's own copy; the raw hash is
/// computed once at insertion and reused by every rehash.
#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: Box<str>,
    pub(crate) value: V,
    pub(crate) hash: usize,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: &str, value: V, hash: usize) -> Self {
        Self {
            key: Box::from(key),
            value,
            hash,
        }
    }
}
