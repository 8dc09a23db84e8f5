//! Shuffling and partitioning helpers.
//!
//! Every randomized step takes `&mut impl Rng` so callers control the
//! source: seeded for reproducible decks and tests, entropy in production.

use rand::Rng;

/// Return a shuffled copy of `items` using a Fisher-Yates pass.
///
/// The input is left untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Split `items` into consecutive chunks of at most `size` elements.
///
/// The final chunk holds the remainder. Order is preserved, so shuffle
/// first when groupings should vary.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunk size must be positive");
    items.chunks(size).map(|chunk| chunk.to_vec()).collect()
}
