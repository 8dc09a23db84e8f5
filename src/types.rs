//! Core types for the vocabulary test engine.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A word in the test scope.
///
/// `meaning` is the native-language text, already resolved from the word's
/// localized meanings (see [`crate::word`]). Ids are unique within a scope
/// and stable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub korean: String,
    pub meaning: String,
}

impl Word {
    /// The side shown as the prompt under `direction`.
    pub fn prompt_side(&self, direction: Direction) -> &str {
        match direction {
            Direction::KoreanToMeaning => &self.korean,
            Direction::MeaningToKorean => &self.meaning,
        }
    }

    /// The side expected as the answer under `direction`.
    pub fn answer_side(&self, direction: Direction) -> &str {
        match direction {
            Direction::KoreanToMeaning => &self.meaning,
            Direction::MeaningToKorean => &self.korean,
        }
    }
}

/// Which side of a word pair is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    KoreanToMeaning,
    MeaningToKorean,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::KoreanToMeaning => Self::MeaningToKorean,
            Self::MeaningToKorean => Self::KoreanToMeaning,
        }
    }
}

/// How the deck builder assigns a direction to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionPolicy {
    KoreanToMeaning,
    MeaningToKorean,
    /// Pick a direction per word with a fair coin.
    Both,
}

impl Default for DirectionPolicy {
    fn default() -> Self {
        Self::KoreanToMeaning
    }
}

impl DirectionPolicy {
    /// Resolve the direction for one word.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Direction {
        match self {
            Self::KoreanToMeaning => Direction::KoreanToMeaning,
            Self::MeaningToKorean => Direction::MeaningToKorean,
            Self::Both => {
                if rng.gen_bool(0.5) {
                    Direction::KoreanToMeaning
                } else {
                    Direction::MeaningToKorean
                }
            }
        }
    }
}

/// Question type options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    TrueFalse,
    MultipleChoice,
    Written,
    FillGroup,
}

impl QuestionType {
    /// All question types in canonical order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::TrueFalse,
        QuestionType::MultipleChoice,
        QuestionType::Written,
        QuestionType::FillGroup,
    ];

    /// Get the question type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrueFalse => "true_false",
            Self::MultipleChoice => "multiple_choice",
            Self::Written => "written",
            Self::FillGroup => "fill_group",
        }
    }
}

/// Test generation settings chosen on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    pub enabled_types: Vec<QuestionType>,
    pub question_count: usize,
    pub direction: DirectionPolicy,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enabled_types: QuestionType::ALL.to_vec(),
            question_count: 10,
            direction: DirectionPolicy::default(),
        }
    }
}

impl TestConfig {
    /// Check that a test can start against a scope of `word_count` words.
    ///
    /// The settings screen calls this to disable the start action;
    /// [`crate::session::TestSession::start`] checks the same conditions.
    pub fn validate(&self, word_count: usize) -> Result<(), crate::error::StartError> {
        if self.enabled_types.is_empty() {
            return Err(crate::error::StartError::NoTypesEnabled);
        }
        if word_count == 0 {
            return Err(crate::error::StartError::NoWords);
        }
        Ok(())
    }
}

/// A true/false judgment card: is `statement` the translation of `prompt`?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseCard {
    pub id: String,
    pub direction: Direction,
    pub word_id: String,
    pub prompt: String,
    pub statement: String,
    /// Always actual string equality between `statement` and the word's own
    /// translation, never the sampling intent: a distractor that happens to
    /// share the translation makes this `true`.
    pub expected: bool,
}

/// A four-option multiple-choice card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceCard {
    pub id: String,
    pub direction: Direction,
    pub word_id: String,
    pub prompt: String,
    /// Options in the answer language of `direction`. Texts may repeat when
    /// a distractor shares the translation; grading goes by index.
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// A free-text card graded through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenCard {
    pub id: String,
    pub direction: Direction,
    pub word_id: String,
    pub prompt: String,
    pub expected: String,
}

/// One slot of a fill card.
///
/// Both sides are kept so the expected answer can be derived under either
/// direction at grade time (the user may toggle the card's direction before
/// filling any slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillItem {
    pub word_id: String,
    pub korean: String,
    pub meaning: String,
}

impl FillItem {
    /// The text shown beside this slot under `direction`.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::KoreanToMeaning => &self.korean,
            Direction::MeaningToKorean => &self.meaning,
        }
    }

    /// The text expected in this slot under `direction`.
    pub fn expected(&self, direction: Direction) -> &str {
        match direction {
            Direction::KoreanToMeaning => &self.meaning,
            Direction::MeaningToKorean => &self.korean,
        }
    }
}

/// A card batching up to ten fill-the-answer slots that share a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillGroupCard {
    pub id: String,
    /// Direction the card was generated with. The UI may flip it before any
    /// slot is filled; grading follows the direction recorded on the answer.
    pub direction: Direction,
    pub items: Vec<FillItem>,
    /// Shared option pool as a permutation of item indices. Keeping indices
    /// rather than texts lets the pool keep its order when the direction is
    /// flipped, and survives duplicate meaning texts.
    pub option_order: Vec<usize>,
}

impl FillGroupCard {
    /// The shared option pool under `direction`, in its fixed shuffled order.
    pub fn options(&self, direction: Direction) -> Vec<&str> {
        self.option_order
            .iter()
            .filter_map(|&i| self.items.get(i))
            .map(|item| item.expected(direction))
            .collect()
    }
}

/// A generated question card.
///
/// Closed sum dispatched by the `type` field; every consumer branches
/// exhaustively on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestCard {
    TrueFalse(TrueFalseCard),
    MultipleChoice(MultipleChoiceCard),
    Written(WrittenCard),
    FillGroup(FillGroupCard),
}

impl TestCard {
    /// Stable card id, unique within the deck.
    pub fn id(&self) -> &str {
        match self {
            Self::TrueFalse(c) => &c.id,
            Self::MultipleChoice(c) => &c.id,
            Self::Written(c) => &c.id,
            Self::FillGroup(c) => &c.id,
        }
    }

    /// Direction the card was generated with.
    pub fn direction(&self) -> Direction {
        match self {
            Self::TrueFalse(c) => c.direction,
            Self::MultipleChoice(c) => c.direction,
            Self::Written(c) => c.direction,
            Self::FillGroup(c) => c.direction,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::TrueFalse(_) => QuestionType::TrueFalse,
            Self::MultipleChoice(_) => QuestionType::MultipleChoice,
            Self::Written(_) => QuestionType::Written,
            Self::FillGroup(_) => QuestionType::FillGroup,
        }
    }

    /// Ids of the originating word pair(s), for the scheduler callback.
    pub fn word_ids(&self) -> Vec<&str> {
        match self {
            Self::TrueFalse(c) => vec![c.word_id.as_str()],
            Self::MultipleChoice(c) => vec![c.word_id.as_str()],
            Self::Written(c) => vec![c.word_id.as_str()],
            Self::FillGroup(c) => c.items.iter().map(|i| i.word_id.as_str()).collect(),
        }
    }
}

/// A user's answer to one card, mirroring [`TestCard`]'s variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Answer {
    TrueFalse {
        value: bool,
    },
    MultipleChoice {
        selected: usize,
    },
    Written {
        text: String,
    },
    FillGroup {
        /// One entry per card item, in item order.
        slots: Vec<String>,
        /// Direction in effect when the user committed. Recorded on the
        /// answer because it may differ from the card's initial direction.
        direction: Direction,
    },
}
