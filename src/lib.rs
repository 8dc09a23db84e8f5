//! Core vocabulary test engine shared by the learning applications.
//!
//! Provides:
//! - Scope resolution from localized vocabulary entries
//! - Deck building with four question types (true/false, multiple choice,
//!   written, fill group)
//! - Answer completeness checks and grading
//! - The settings/running/result session state machine with a review
//!   callback for spaced-repetition schedulers

pub mod deck;
pub mod error;
pub mod generate;
pub mod matching;
pub mod random;
pub mod score;
pub mod session;
pub mod types;
pub mod word;

pub use deck::{build_deck, eligible_types, MIN_WORDS_FOR_MULTIPLE_CHOICE};
pub use error::StartError;
pub use matching::{answers_match, normalize};
pub use random::{chunked, shuffled};
pub use score::{is_complete, score, word_results, CardScore};
pub use session::{
    NoReviews, ReviewFn, ReviewSink, Stage, SubmitOutcome, TestSession, TestSummary,
};
pub use types::{
    Answer, Direction, DirectionPolicy, FillGroupCard, FillItem, MultipleChoiceCard, QuestionType,
    TestCard, TestConfig, TrueFalseCard, Word, WrittenCard,
};
pub use word::{words_in_scope, VocabEntry, FALLBACK_LANG};
