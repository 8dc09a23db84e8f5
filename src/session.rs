//! Test session lifecycle.
//!
//! A [`TestSession`] walks Settings → Running → Result. Starting is the only
//! fallible step; answering, navigation, and submission degrade softly so a
//! UI can wire them straight to events. The session owns no clock and no
//! randomness: callers pass `now` and an [`rand::Rng`] explicitly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::deck::build_deck;
use crate::error::StartError;
use crate::score::{self, CardScore};
use crate::types::{Answer, TestCard, TestConfig, Word};

/// Session lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Settings,
    Running,
    Result,
}

/// Totals for a finished test.
///
/// Counts are per word pair, so a fill card contributes one per slot and
/// the totals line up with the review events emitted on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    pub total_questions: usize,
    pub correct_questions: usize,
    pub seconds: i64,
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every card was complete; the session moved to [`Stage::Result`].
    Finished(TestSummary),
    /// At least one card is unanswered; the session stays Running.
    Incomplete { first_incomplete: usize },
    /// Submission was not meaningful here (wrong stage or empty deck).
    Ignored,
}

/// Receiver for per-word review outcomes emitted once on a finishing submit.
///
/// This is the scheduler boundary: the engine reports each word's
/// correctness and never looks back, so spaced-repetition bookkeeping stays
/// with the caller.
pub trait ReviewSink {
    fn review(&mut self, word_id: &str, correct: bool);
}

/// Discards every review, for callers with no scheduler attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReviews;

impl ReviewSink for NoReviews {
    fn review(&mut self, _word_id: &str, _correct: bool) {}
}

/// Collects reviews in emission order.
impl ReviewSink for Vec<(String, bool)> {
    fn review(&mut self, word_id: &str, correct: bool) {
        self.push((word_id.to_string(), correct));
    }
}

/// Adapts a closure to a [`ReviewSink`].
pub struct ReviewFn<F>(pub F);

impl<F: FnMut(&str, bool)> ReviewSink for ReviewFn<F> {
    fn review(&mut self, word_id: &str, correct: bool) {
        (self.0)(word_id, correct)
    }
}

/// One vocabulary test from settings to result screen.
#[derive(Debug, Clone)]
pub struct TestSession {
    stage: Stage,
    cards: Vec<TestCard>,
    answers: HashMap<String, Answer>,
    active_index: usize,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    submit_attempted: bool,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    pub fn new() -> Self {
        Self {
            stage: Stage::Settings,
            cards: Vec::new(),
            answers: HashMap::new(),
            active_index: 0,
            started_at: None,
            finished_at: None,
            submit_attempted: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The deck in presentation order. Empty outside Running and Result.
    pub fn cards(&self) -> &[TestCard] {
        &self.cards
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether a submit has been refused since the last start, so the UI
    /// can highlight incomplete cards.
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn answer_for(&self, card_id: &str) -> Option<&Answer> {
        self.answers.get(card_id)
    }

    /// Start a test over `words` with `config`.
    ///
    /// Only valid from Settings. Builds the deck, clears any previous
    /// answers, and records `now` as the start time. The deck may come out
    /// shorter than `config.question_count`, or even empty when no enabled
    /// type can generate; an empty deck still enters Running, it just has
    /// nothing to submit.
    pub fn start<R: Rng>(
        &mut self,
        words: &[Word],
        config: &TestConfig,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<(), StartError> {
        if self.stage != Stage::Settings {
            return Err(StartError::AlreadyStarted);
        }
        config.validate(words.len())?;

        self.cards = build_deck(words, config, rng);
        self.answers.clear();
        self.active_index = 0;
        self.started_at = Some(now);
        self.finished_at = None;
        self.submit_attempted = false;
        self.stage = Stage::Running;
        Ok(())
    }

    /// Record or replace the answer for `card_id`.
    ///
    /// Outside Running, or for a card id not in the deck, the call is
    /// dropped. Answering never advances the active card.
    pub fn answer(&mut self, card_id: &str, answer: Answer) {
        if self.stage != Stage::Running {
            return;
        }
        if !self.cards.iter().any(|card| card.id() == card_id) {
            return;
        }
        self.answers.insert(card_id.to_string(), answer);
    }

    /// Jump to a card, clamped to the deck bounds.
    pub fn set_active_card(&mut self, index: usize) {
        self.active_index = index.min(self.cards.len().saturating_sub(1));
    }

    /// Move to the next card, staying on the last one at the end.
    pub fn advance_active(&mut self) {
        self.set_active_card(self.active_index + 1);
    }

    pub fn is_card_complete(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| score::is_complete(card, self.answers.get(card.id())))
    }

    /// Index of the first card still missing a full answer.
    pub fn first_incomplete(&self) -> Option<usize> {
        (0..self.cards.len()).find(|&i| !self.is_card_complete(i))
    }

    /// Per-card score breakdown in deck order, for the review screen.
    pub fn card_scores(&self) -> Vec<CardScore> {
        self.cards
            .iter()
            .map(|card| score::score(card, self.answers.get(card.id())))
            .collect()
    }

    /// Submit the test.
    ///
    /// If any card is incomplete the submission is refused with the first
    /// incomplete index and the session stays Running. Otherwise every card
    /// is graded, each underlying word's outcome is emitted to `sink`
    /// exactly once, and the session moves to Result. Submits outside
    /// Running, or on an empty deck, are ignored without touching state.
    pub fn submit<S: ReviewSink + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        sink: &mut S,
    ) -> SubmitOutcome {
        if self.stage != Stage::Running || self.cards.is_empty() {
            tracing::debug!(stage = ?self.stage, cards = self.cards.len(), "submit ignored");
            return SubmitOutcome::Ignored;
        }
        self.submit_attempted = true;

        if let Some(first_incomplete) = self.first_incomplete() {
            return SubmitOutcome::Incomplete { first_incomplete };
        }

        let mut total = 0;
        let mut correct = 0;
        for card in &self.cards {
            for (word_id, word_correct) in score::word_results(card, self.answers.get(card.id())) {
                total += 1;
                if word_correct {
                    correct += 1;
                }
                sink.review(word_id, word_correct);
            }
        }

        self.finished_at = Some(now);
        self.stage = Stage::Result;

        SubmitOutcome::Finished(TestSummary {
            total_questions: total,
            correct_questions: correct,
            seconds: self.elapsed_seconds(now),
        })
    }

    /// Back to the settings screen. Only valid from Result; the finished
    /// test's cards and answers are discarded and no reviews are re-emitted.
    pub fn restart(&mut self) {
        if self.stage != Stage::Result {
            return;
        }
        *self = Self::new();
    }

    /// Totals for the finished test, once the session reached Result.
    pub fn summary(&self) -> Option<TestSummary> {
        if self.stage != Stage::Result {
            return None;
        }
        let finished = self.finished_at?;
        let scores = self.card_scores();
        Some(TestSummary {
            total_questions: scores.iter().map(|s| s.total).sum(),
            correct_questions: scores.iter().map(|s| s.correct).sum(),
            seconds: self.elapsed_seconds(finished),
        })
    }

    fn elapsed_seconds(&self, until: DateTime<Utc>) -> i64 {
        self.started_at
            .map(|started| until.signed_duration_since(started).num_seconds().max(0))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DirectionPolicy, QuestionType};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| Word {
                id: format!("w{i}"),
                korean: format!("단어{i}"),
                meaning: format!("word {i}"),
            })
            .collect()
    }

    fn config(types: &[QuestionType]) -> TestConfig {
        TestConfig {
            enabled_types: types.to_vec(),
            question_count: 10,
            direction: DirectionPolicy::KoreanToMeaning,
        }
    }

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, second).unwrap()
    }

    fn started(n_words: usize, types: &[QuestionType]) -> TestSession {
        let mut session = TestSession::new();
        let mut rng = StdRng::seed_from_u64(1);
        session
            .start(&words(n_words), &config(types), &mut rng, at(9, 0, 0))
            .unwrap();
        session
    }

    #[test]
    fn start_builds_a_deck_and_enters_running() {
        let session = started(6, &[QuestionType::Written]);
        assert_eq!(session.stage(), Stage::Running);
        assert_eq!(session.cards().len(), 6);
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.started_at(), Some(at(9, 0, 0)));
        assert!(!session.submit_attempted());
    }

    #[test]
    fn start_is_rejected_while_running() {
        let mut session = started(6, &[QuestionType::Written]);
        let mut rng = StdRng::seed_from_u64(2);
        let err = session.start(&words(6), &config(&[QuestionType::Written]), &mut rng, at(9, 1, 0));
        assert_eq!(err, Err(StartError::AlreadyStarted));
    }

    #[test]
    fn start_validates_the_config() {
        let mut session = TestSession::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            session.start(&[], &config(&[QuestionType::Written]), &mut rng, at(9, 0, 0)),
            Err(StartError::NoWords)
        );
        assert_eq!(
            session.start(&words(4), &config(&[]), &mut rng, at(9, 0, 0)),
            Err(StartError::NoTypesEnabled)
        );
        assert_eq!(session.stage(), Stage::Settings);
    }

    #[test]
    fn answers_are_upserted_by_card_id() {
        let mut session = started(4, &[QuestionType::Written]);
        let card_id = session.cards()[0].id().to_string();

        session.answer(&card_id, Answer::Written { text: "first".to_string() });
        session.answer(&card_id, Answer::Written { text: "second".to_string() });

        assert_eq!(
            session.answer_for(&card_id),
            Some(&Answer::Written { text: "second".to_string() })
        );
    }

    #[test]
    fn unknown_card_ids_are_dropped() {
        let mut session = started(4, &[QuestionType::Written]);
        session.answer("wr-FFFFFFFF", Answer::Written { text: "x".to_string() });
        assert!(session.answer_for("wr-FFFFFFFF").is_none());
    }

    #[test]
    fn answers_outside_running_are_dropped() {
        let mut session = TestSession::new();
        session.answer("wr-00000000", Answer::Written { text: "x".to_string() });
        assert!(session.answer_for("wr-00000000").is_none());
    }

    #[test]
    fn navigation_clamps_to_the_deck() {
        let mut session = started(3, &[QuestionType::Written]);
        session.set_active_card(99);
        assert_eq!(session.active_index(), 2);
        session.advance_active();
        assert_eq!(session.active_index(), 2);
        session.set_active_card(1);
        assert_eq!(session.active_index(), 1);
    }

    #[test]
    fn submit_outside_running_is_ignored() {
        let mut session = TestSession::new();
        let mut sink = NoReviews;
        assert_eq!(session.submit(at(9, 0, 0), &mut sink), SubmitOutcome::Ignored);
        assert_eq!(session.stage(), Stage::Settings);
    }

    #[test]
    fn empty_deck_enters_running_but_never_finishes() {
        // Three words cannot field multiple-choice distractors, so the only
        // enabled type generates nothing.
        let mut session = TestSession::new();
        let mut rng = StdRng::seed_from_u64(4);
        session
            .start(&words(3), &config(&[QuestionType::MultipleChoice]), &mut rng, at(9, 0, 0))
            .unwrap();

        assert_eq!(session.stage(), Stage::Running);
        assert!(session.cards().is_empty());

        let mut sink: Vec<(String, bool)> = Vec::new();
        assert_eq!(session.submit(at(9, 5, 0), &mut sink), SubmitOutcome::Ignored);
        assert_eq!(session.stage(), Stage::Running);
        assert!(sink.is_empty());
        assert!(!session.submit_attempted());
    }

    #[test]
    fn refused_submit_marks_the_attempt() {
        let mut session = started(3, &[QuestionType::Written]);
        let mut sink = NoReviews;

        let outcome = session.submit(at(9, 5, 0), &mut sink);
        assert_eq!(outcome, SubmitOutcome::Incomplete { first_incomplete: 0 });
        assert_eq!(session.stage(), Stage::Running);
        assert!(session.submit_attempted());
        assert!(session.finished_at().is_none());
    }

    #[test]
    fn restart_only_leaves_the_result_stage() {
        let mut session = started(3, &[QuestionType::Written]);
        session.restart();
        assert_eq!(session.stage(), Stage::Running);
        assert_eq!(session.cards().len(), 3);
    }

    #[test]
    fn summary_is_absent_until_finished() {
        let session = started(3, &[QuestionType::Written]);
        assert!(session.summary().is_none());
    }

    #[test]
    fn closure_sinks_receive_reviews() {
        let mut session = started(2, &[QuestionType::Written]);
        for card in session.cards().to_vec() {
            let TestCard::Written(c) = card else {
                panic!("expected a written card");
            };
            session.answer(&c.id, Answer::Written { text: c.expected.clone() });
        }

        let mut count = 0;
        let outcome = session.submit(at(9, 2, 0), &mut ReviewFn(|_: &str, correct: bool| {
            assert!(correct);
            count += 1;
        }));

        match outcome {
            SubmitOutcome::Finished(summary) => {
                assert_eq!(summary.total_questions, 2);
                assert_eq!(summary.correct_questions, 2);
            }
            other => panic!("expected a finished submit, got {other:?}"),
        }
        assert_eq!(count, 2);
    }
}
