//! TableBuilder: configuration for a `ChainedTable`.
//!
//! ```
//! use chained_hashtable::ChainedTable;
//!
//! let mut t = ChainedTable::<String>::builder()
//!     .capacity(16)
//!     .destructor(|v: String| drop(v))
//!     .build()
//!     .unwrap();
//! t.insert("AC123BD", "Auto de Mariano".to_string()).unwrap();
//! assert_eq!(t.capacity(), 16);
//! ```

use crate::error::Result;
use crate::hasher::{KeyHasher, PositionWeighted};
use crate::rehash::MIN_CAPACITY;
use crate::table::{ChainedTable, ValueDestructor};

pub struct TableBuilder<V, S = PositionWeighted> {
    capacity: usize,
    destructor: Option<ValueDestructor<V>>,
    hasher: S,
}

impl<V> TableBuilder<V> {
    /// Defaults: minimum capacity, no destructor, `PositionWeighted` hashing.
    pub fn new() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            destructor: None,
            hasher: PositionWeighted,
        }
    }
}

impl<V> Default for TableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> TableBuilder<V, S>
where
    S: KeyHasher,
{
    /// Initial bucket count. Zero is rejected by `build`; values below the
    /// minimum are raised.
    pub fn capacity(mut self, capacity_hint: usize) -> Self {
        self.capacity = capacity_hint;
        self
    }

    pub fn destructor<F>(mut self, destructor: F) -> Self
    where
        F: FnMut(V) + 'static,
    {
        self.destructor = Some(Box::new(destructor));
        self
    }

    pub fn hasher<T: KeyHasher>(self, hasher: T) -> TableBuilder<V, T> {
        TableBuilder {
            capacity: self.capacity,
            destructor: self.destructor,
            hasher,
        }
    }

    pub fn build(self) -> Result<ChainedTable<V, S>> {
        ChainedTable::from_parts(self.hasher, self.capacity, self.destructor)
    }
}

impl<V, S: core::fmt::Debug> core::fmt::Debug for TableBuilder<V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableBuilder")
            .field("capacity", &self.capacity)
            .field("destructor", &self.destructor.is_some())
            .field("hasher", &self.hasher)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    #[derive(Debug, Clone, Copy)]
    struct Constant;
    impl KeyHasher for Constant {
        fn hash_key(&self, _key: &str) -> usize {
            0
        }
    }

    #[test]
    fn defaults_to_minimum_capacity() {
        let t: ChainedTable<u8> = TableBuilder::new().build().unwrap();
        assert_eq!(t.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn zero_capacity_fails_to_build() {
        let r: Result<ChainedTable<u8>> = TableBuilder::new().capacity(0).build();
        assert!(matches!(r, Err(TableError::InvalidArgument(_))));
    }

    #[test]
    fn custom_hasher_is_used_for_placement() {
        let mut t = TableBuilder::<u8>::new()
            .capacity(7)
            .hasher(Constant)
            .build()
            .unwrap();
        for k in ["a", "b", "c", "d"] {
            t.insert(k, 0).unwrap();
        }
        assert_eq!(t.occupied_buckets(), 1);
        assert_eq!(t.capacity(), 7);
    }

    #[test]
    fn debug_reports_configuration() {
        let b = TableBuilder::<u8>::new().capacity(9);
        let s = format!("{:?}", b);
        assert!(s.contains("capacity: 9"));
        assert!(s.contains("destructor: false"));
    }
}
