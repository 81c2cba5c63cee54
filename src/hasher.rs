//! Key hashing: the seam through which a table turns keys into raw hashes.

/// Maps a key to a raw hash. The table reduces it modulo its current
/// capacity, so the value must be deterministic for a given key.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> usize;
}

/// Position-weighted byte checksum: `sum(byte * (i + 1))` over the key's
/// UTF-8 bytes, with `i` the 0-based offset.
///
/// Not collision resistant; anagram-like keys whose weighted sums match
/// land in the same bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionWeighted;

impl KeyHasher for PositionWeighted {
    #[inline]
    fn hash_key(&self, key: &str) -> usize {
        key.bytes().enumerate().fold(0usize, |acc, (i, b)| {
            acc.wrapping_add((b as usize).wrapping_mul(i + 1))
        })
    }
}

impl<H: KeyHasher + ?Sized> KeyHasher for &H {
    #[inline]
    fn hash_key(&self, key: &str) -> usize {
        (**self).hash_key(key)
    }
}
