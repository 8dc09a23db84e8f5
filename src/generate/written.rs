//! Written-answer card generation.

use rand::Rng;

use crate::types::{Direction, TestCard, Word, WrittenCard};

/// Generate a free-text card for `word`. Always succeeds.
pub fn generate<R: Rng>(word: &Word, direction: Direction, rng: &mut R) -> TestCard {
    TestCard::Written(WrittenCard {
        id: super::card_id("wr", rng),
        direction,
        word_id: word.id.clone(),
        prompt: word.prompt_side(direction).to_string(),
        expected: word.answer_side(direction).to_string(),
    })
}
