//! Deck building.
//!
//! Turns a word scope and a [`TestConfig`] into a shuffled deck of cards.
//! Generation degrades softly: ineligible types and failed cards shrink the
//! deck instead of erroring, so a deck may come out shorter than the
//! configured question count.

use rand::Rng;

use crate::generate::{fill_group, multiple_choice, true_false, written};
use crate::random::shuffled;
use crate::types::{Direction, QuestionType, TestCard, TestConfig, Word};

/// Scope size below which multiple choice cannot field enough distractors.
pub const MIN_WORDS_FOR_MULTIPLE_CHOICE: usize = multiple_choice::DISTRACTOR_COUNT + 1;

/// The enabled types that can actually generate against `word_count` words,
/// deduplicated in first-seen order.
pub fn eligible_types(config: &TestConfig, word_count: usize) -> Vec<QuestionType> {
    let mut out: Vec<QuestionType> = Vec::new();
    for &question_type in &config.enabled_types {
        if out.contains(&question_type) {
            continue;
        }
        if question_type == QuestionType::MultipleChoice
            && word_count < MIN_WORDS_FOR_MULTIPLE_CHOICE
        {
            continue;
        }
        out.push(question_type);
    }
    out
}

/// Build a deck for `words` under `config`.
///
/// Draws up to `question_count` distinct words, assigns each a uniform
/// eligible type and a direction from the policy, and generates cards.
/// Words routed to fill groups are batched per direction into shared cards.
/// The finished deck is shuffled so fill cards do not cluster at the end.
pub fn build_deck<R: Rng>(words: &[Word], config: &TestConfig, rng: &mut R) -> Vec<TestCard> {
    let eligible = eligible_types(config, words.len());
    if eligible.is_empty() {
        tracing::debug!(word_count = words.len(), "no eligible question types");
        return Vec::new();
    }

    let pool = shuffled(words, rng);
    let selected = &pool[..config.question_count.min(pool.len())];

    let mut cards: Vec<TestCard> = Vec::with_capacity(selected.len());
    let mut fill_buckets: [Vec<Word>; 2] = [Vec::new(), Vec::new()];

    for word in selected {
        let question_type = eligible[rng.gen_range(0..eligible.len())];
        let direction = config.direction.resolve(rng);

        match question_type {
            QuestionType::TrueFalse => {
                cards.push(true_false::generate(word, words, direction, rng));
            }
            QuestionType::MultipleChoice => {
                // Distractors draw from the whole scope, not the selection.
                match multiple_choice::generate(word, words, direction, rng) {
                    Some(card) => cards.push(card),
                    None => {
                        tracing::debug!(word_id = %word.id, "not enough distractors, card skipped");
                    }
                }
            }
            QuestionType::Written => {
                cards.push(written::generate(word, direction, rng));
            }
            QuestionType::FillGroup => {
                fill_buckets[bucket_index(direction)].push(word.clone());
            }
        }
    }

    for (direction, bucket) in [
        (Direction::KoreanToMeaning, &fill_buckets[0]),
        (Direction::MeaningToKorean, &fill_buckets[1]),
    ] {
        cards.extend(fill_group::generate(bucket, direction, rng));
    }

    shuffled(&cards, rng)
}

fn bucket_index(direction: Direction) -> usize {
    match direction {
        Direction::KoreanToMeaning => 0,
        Direction::MeaningToKorean => 1,
    }
}
