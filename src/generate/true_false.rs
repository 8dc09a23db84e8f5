//! True/false card generation.

use rand::Rng;

use crate::types::{Direction, TestCard, TrueFalseCard, Word};

/// Generate a true/false card for `word`.
///
/// With even odds the statement is the word's own translation or one drawn
/// from another word in `pool`. Never fails: a pool with no other word
/// falls back to the own translation.
pub fn generate<R: Rng>(
    word: &Word,
    pool: &[Word],
    direction: Direction,
    rng: &mut R,
) -> TestCard {
    let own = word.answer_side(direction);

    let statement = if rng.gen_bool(0.5) {
        own.to_string()
    } else {
        pick_distractor(word, pool, direction, rng).unwrap_or_else(|| own.to_string())
    };

    // Recomputed from the final strings, not from which branch was taken:
    // a distractor sharing the translation is a true statement.
    let expected = statement == own;

    TestCard::TrueFalse(TrueFalseCard {
        id: super::card_id("tf", rng),
        direction,
        word_id: word.id.clone(),
        prompt: word.prompt_side(direction).to_string(),
        statement,
        expected,
    })
}

fn pick_distractor<R: Rng>(
    word: &Word,
    pool: &[Word],
    direction: Direction,
    rng: &mut R,
) -> Option<String> {
    let candidates: Vec<&Word> = pool.iter().filter(|w| w.id != word.id).collect();
    if candidates.is_empty() {
        return None;
    }
    let pick = candidates[rng.gen_range(0..candidates.len())];
    Some(pick.answer_side(direction).to_string())
}
