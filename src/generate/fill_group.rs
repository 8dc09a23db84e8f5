//! Fill-group card generation.

use rand::Rng;

use crate::random::{chunked, shuffled};
use crate::types::{Direction, FillGroupCard, FillItem, TestCard, Word};

/// Most slots one fill card may hold.
pub const MAX_ITEMS: usize = 10;

/// Batch `words` into fill cards of at most [`MAX_ITEMS`] slots each, all
/// sharing `direction`.
///
/// Chunking keeps the caller's word order; the shared option pool inside
/// each card is shuffled independently.
pub fn generate<R: Rng>(words: &[Word], direction: Direction, rng: &mut R) -> Vec<TestCard> {
    chunked(words, MAX_ITEMS)
        .into_iter()
        .map(|chunk| {
            let items: Vec<FillItem> = chunk
                .iter()
                .map(|w| FillItem {
                    word_id: w.id.clone(),
                    korean: w.korean.clone(),
                    meaning: w.meaning.clone(),
                })
                .collect();
            let indices: Vec<usize> = (0..items.len()).collect();
            let option_order = shuffled(&indices, rng);

            TestCard::FillGroup(FillGroupCard {
                id: super::card_id("fg", rng),
                direction,
                items,
                option_order,
            })
        })
        .collect()
}
