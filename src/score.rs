//! Card completeness and grading.

use serde::{Deserialize, Serialize};

use crate::matching::answers_match;
use crate::types::{Answer, TestCard};

/// Per-card tally of graded word pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardScore {
    pub total: usize,
    pub correct: usize,
}

/// Whether `answer` fully answers `card`.
///
/// Missing answers and variant mismatches are incomplete; written text and
/// every fill slot must be non-blank.
pub fn is_complete(card: &TestCard, answer: Option<&Answer>) -> bool {
    match (card, answer) {
        (TestCard::TrueFalse(_), Some(Answer::TrueFalse { .. })) => true,
        (TestCard::MultipleChoice(_), Some(Answer::MultipleChoice { .. })) => true,
        (TestCard::Written(_), Some(Answer::Written { text })) => !text.trim().is_empty(),
        (TestCard::FillGroup(card), Some(Answer::FillGroup { slots, .. })) => {
            slots.len() == card.items.len() && slots.iter().all(|slot| !slot.trim().is_empty())
        }
        _ => false,
    }
}

/// Grade `card` against `answer`, one `(word_id, correct)` entry per pair.
///
/// A missing or mismatched answer grades every pair wrong. Fill slots grade
/// against the direction recorded on the answer, which may differ from the
/// card's generated direction when the user flipped it.
pub fn word_results<'a>(card: &'a TestCard, answer: Option<&Answer>) -> Vec<(&'a str, bool)> {
    match card {
        TestCard::TrueFalse(card) => {
            let correct =
                matches!(answer, Some(Answer::TrueFalse { value }) if *value == card.expected);
            vec![(card.word_id.as_str(), correct)]
        }
        TestCard::MultipleChoice(card) => {
            let correct = matches!(
                answer,
                Some(Answer::MultipleChoice { selected }) if *selected == card.correct_index
            );
            vec![(card.word_id.as_str(), correct)]
        }
        TestCard::Written(card) => {
            let correct =
                matches!(answer, Some(Answer::Written { text }) if answers_match(text, &card.expected));
            vec![(card.word_id.as_str(), correct)]
        }
        TestCard::FillGroup(card) => match answer {
            Some(Answer::FillGroup { slots, direction }) => card
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let correct = slots
                        .get(i)
                        .is_some_and(|slot| answers_match(slot, item.expected(*direction)));
                    (item.word_id.as_str(), correct)
                })
                .collect(),
            _ => card
                .items
                .iter()
                .map(|item| (item.word_id.as_str(), false))
                .collect(),
        },
    }
}

/// Tally [`word_results`] into a [`CardScore`].
pub fn score(card: &TestCard, answer: Option<&Answer>) -> CardScore {
    let results = word_results(card, answer);
    CardScore {
        total: results.len(),
        correct: results.iter().filter(|(_, correct)| *correct).count(),
    }
}
