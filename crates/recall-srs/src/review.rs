use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    models::{CardLearningState, CardState, Rating},
    scheduler::Scheduler,
};

/// Outcome of a single review, keeping the previous interval and easiness
/// next to the new values so callers can write history without re-deriving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Rating that was applied
    pub rating: Rating,
    /// The "now" the review was computed against
    pub reviewed_at: DateTime<Utc>,
    /// State before the review
    pub previous_state: CardState,
    /// State after the review
    pub state: CardState,
    /// Next due date
    pub due_date: DateTime<Utc>,
    /// Interval in days before the review
    pub previous_interval: u32,
    /// Interval in days after the review
    pub interval: u32,
    /// Easiness factor before the review
    pub previous_easiness_factor: f64,
    /// Easiness factor after the review
    pub easiness_factor: f64,
    /// Repetitions after the review
    pub repetitions: u32,
    /// Lapses before the review
    pub previous_lapses: u32,
    /// Lapses after the review
    pub lapses: u32,
    /// Last-reviewed timestamp after the review; unchanged for suspended cards
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl ReviewResult {
    pub(crate) fn new(
        rating: Rating,
        previous: &CardLearningState,
        next: &CardLearningState,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            rating,
            reviewed_at,
            previous_state: previous.state,
            state: next.state,
            due_date: next.due_date,
            previous_interval: previous.interval,
            interval: next.interval,
            previous_easiness_factor: previous.easiness_factor,
            easiness_factor: next.easiness_factor,
            repetitions: next.repetitions,
            previous_lapses: previous.lapses,
            lapses: next.lapses,
            last_reviewed: next.last_reviewed,
        }
    }

    /// The review charged a lapse: a graduated card was forgotten, either in
    /// review or again while relearning.
    pub const fn is_lapse(&self) -> bool {
        self.lapses > self.previous_lapses
    }

    /// The review moved the card into `Review` from `New` or `Learning`.
    pub fn graduated(&self) -> bool {
        self.state == CardState::Review
            && matches!(self.previous_state, CardState::New | CardState::Learning)
    }

    /// The learning state to persist.
    pub fn into_state(self) -> CardLearningState {
        CardLearningState {
            state: self.state,
            due_date: self.due_date,
            interval: self.interval,
            repetitions: self.repetitions,
            easiness_factor: self.easiness_factor,
            lapses: self.lapses,
            last_reviewed: self.last_reviewed,
        }
    }
}

/// A learning state bound to the card and user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProgress {
    /// Card being studied
    pub card_id: Uuid,
    /// User studying it
    pub user_id: Uuid,
    /// Scheduling fields, serialized inline with the ids
    #[serde(flatten)]
    pub learning: CardLearningState,
}

impl CardProgress {
    /// Progress for a card the user has never seen, due at `now`.
    pub const fn new(card_id: Uuid, user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            card_id,
            user_id,
            learning: CardLearningState::new(now),
        }
    }

    /// Rate the card, returning the updated progress and the history row to
    /// record alongside it.
    pub fn review(
        &self,
        scheduler: &Scheduler,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> (Self, ReviewLogEntry) {
        let result = scheduler.review_at(rating, &self.learning, now);
        let entry = ReviewLogEntry::new(self.card_id, self.user_id, &result);

        let progress = Self {
            card_id: self.card_id,
            user_id: self.user_id,
            learning: result.into_state(),
        };
        (progress, entry)
    }
}

/// One row of review history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogEntry {
    /// Reviewed card
    pub card_id: Uuid,
    /// Reviewing user
    pub user_id: Uuid,
    /// Rating given
    pub rating: Rating,
    /// When the rating was given
    pub reviewed_at: DateTime<Utc>,
    /// State before the review
    pub previous_state: CardState,
    /// State after the review
    pub state: CardState,
    /// Interval in days before the review
    pub previous_interval: u32,
    /// Interval in days after the review
    pub interval: u32,
    /// Easiness factor before the review
    pub previous_easiness_factor: f64,
    /// Easiness factor after the review
    pub easiness_factor: f64,
    /// Whether the review charged a lapse
    pub lapsed: bool,
}

impl ReviewLogEntry {
    /// History row for `result`, bound to its card and user.
    pub fn new(card_id: Uuid, user_id: Uuid, result: &ReviewResult) -> Self {
        Self {
            card_id,
            user_id,
            rating: result.rating,
            reviewed_at: result.reviewed_at,
            previous_state: result.previous_state,
            state: result.state,
            previous_interval: result.previous_interval,
            interval: result.interval,
            previous_easiness_factor: result.previous_easiness_factor,
            easiness_factor: result.easiness_factor,
            lapsed: result.is_lapse(),
        }
    }
}
