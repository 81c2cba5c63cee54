//! Bucket: ordered sequence of entry handles for one hash slot.
//!
//! Appends are O(1) amortized; search and removal are linear. The bucket
//! does not enforce key uniqueness, the table checks before appending.

use crate::entry::Handle;
use crate::error::Result;

#[derive(Debug, Default)]
pub(crate) struct Bucket {
    items: Vec<Handle>,
}

impl Bucket {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append at the back, reporting allocation failure instead of aborting.
    pub(crate) fn push_back(&mut self, h: Handle) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(h);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove the item at `index`, shifting later items forward.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Handle> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<Handle> {
        self.items.get(index).copied()
    }

    /// Index of the first item satisfying `pred`.
    pub(crate) fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(Handle) -> bool,
    {
        self.items.iter().position(|&h| pred(h))
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Handle> {
        self.items.iter()
    }

    pub(crate) fn into_items(self) -> Vec<Handle> {
        self.items
    }
}
