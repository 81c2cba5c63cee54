//! chained-hashtable: a single-threaded, string-keyed hash table with
//! separate chaining, load-driven rehashing, and both push-style and
//! pull-style traversal.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a bucketed table whose placement, growth, and iteration order
//!   are fully determined by a simple position-weighted key checksum, with
//!   value cleanup delegated to a caller-supplied destructor.
//! - Layers:
//!   - `Bucket`: ordered sequence of entry handles for one slot; O(1)
//!     append, linear search and removal.
//!   - `BucketArray`: fixed-length slot array plus the occupied-slot
//!     counter that drives the load factor.
//!   - `ChainedTable<V, S>`: public API. Owns an entry arena
//!     (`slotmap::SlotMap`) holding each key copy and value; buckets refer
//!     to entries by handle.
//!
//! Constraints
//! - Single-threaded; the destructor is a boxed `FnMut`, so the table is
//!   neither `Send` nor `Sync`.
//! - Keys are text compared byte for byte; at most one live entry per key.
//! - Capacity is at least 3; growth is triggered after an append pushes
//!   `occupied * 100 / capacity` to 75 or more.
//!
//! Ownership
//! - The table owns every key copy for as long as the entry lives.
//! - Values are owned while stored. A value leaves the table exactly once:
//!   on `remove`, when a later `insert` of the same key replaces it, or
//!   when the table is dropped. Each time it is handed to the destructor
//!   if one was configured, otherwise it is dropped.
//!
//! Rehashing
//! - A fresh `BucketArray` is filled by walking the live one in traversal
//!   order and re-placing each handle by its cached raw hash modulo the
//!   new capacity. The fresh array replaces the live one only if every
//!   entry was placed. Entries never leave the arena during a rehash, so
//!   the discarded array owns nothing that needs cleanup.
//! - A failed rehash is logged and the insert that triggered it still
//!   succeeds.
//!
//! Occupied-slot accounting
//! - A slot counts as occupied from the first time an entry lands in it
//!   until the next rehash, even if removals drain it. Insert/remove cycles
//!   across many slots therefore raise the load factor and can force growth
//!   while `len()` stays small.
//!
//! Traversal
//! - `for_each_key` walks slots in array order and each bucket front to
//!   back, and can be stopped by the callback returning `Break`.
//! - `Cursor` yields the same order lazily, skipping empty slots. It
//!   borrows the table, so the table cannot be modified while it is live.

mod bucket;
mod bucket_array;
mod builder;
mod entry;
mod error;
mod hasher;
mod iter;
mod rehash;
mod table;
mod table_proptest;

// Public surface
pub use builder::TableBuilder;
pub use error::{Result, TableError};
pub use hasher::{KeyHasher, PositionWeighted};
pub use iter::{Cursor, Iter};
pub use rehash::{next_capacity, MAX_LOAD_PERCENT, MIN_CAPACITY, SIEVE_LIMIT};
pub use table::{ChainedTable, ValueDestructor};
