//! Multiple-choice card generation.

use rand::Rng;

use crate::random::shuffled;
use crate::types::{Direction, MultipleChoiceCard, TestCard, Word};

/// Distractors per card; options are always this plus the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Generate a four-option card for `word`, or `None` when `pool` has fewer
/// than [`DISTRACTOR_COUNT`] other words to draw from.
///
/// Distractors are distinct words, but their texts may collide with the
/// correct option when translations repeat; `correct_index` is authoritative.
pub fn generate<R: Rng>(
    word: &Word,
    pool: &[Word],
    direction: Direction,
    rng: &mut R,
) -> Option<TestCard> {
    let candidates: Vec<Word> = pool.iter().filter(|w| w.id != word.id).cloned().collect();
    if candidates.len() < DISTRACTOR_COUNT {
        return None;
    }

    let mut options: Vec<String> = shuffled(&candidates, rng)
        .iter()
        .take(DISTRACTOR_COUNT)
        .map(|w| w.answer_side(direction).to_string())
        .collect();

    // Inserting at a uniform position keeps the layout unbiased and makes
    // the index exact even when a distractor text equals the answer.
    let correct_index = rng.gen_range(0..=options.len());
    options.insert(correct_index, word.answer_side(direction).to_string());

    Some(TestCard::MultipleChoice(MultipleChoiceCard {
        id: super::card_id("mc", rng),
        direction,
        word_id: word.id.clone(),
        prompt: word.prompt_side(direction).to_string(),
        options,
        correct_index,
    }))
}
