//! SRS (Spaced Repetition System) scheduling engine for Recall
//!
//! This crate implements a SuperMemo-2 derived scheduler: given a card's
//! current learning state and a recall rating, it computes the next state,
//! easiness factor, interval, due date and lapse count.
//!
//! The engine is pure. It never touches storage and only reads the clock in
//! the convenience functions that have no `now` parameter; every such
//! function has an `_at` variant taking an explicit timestamp, and for fixed
//! inputs the output is always identical.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use recall_srs::{CardState, Rating, calculate_next_review_at, schedule_new_card_at};
//!
//! let now = Utc::now();
//! let card = schedule_new_card_at(now);
//! let card = calculate_next_review_at(Rating::Good, &card, now);
//!
//! assert_eq!(card.state, CardState::Review);
//! assert_eq!(card.repetitions, 1);
//! assert_eq!(card.interval, 1);
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod review;
pub mod scheduler;
mod validation;

pub use algorithm::{INITIAL_EASINESS_FACTOR, MIN_EASINESS_FACTOR};
pub use config::SchedulerConfig;
pub use error::{ConfigError, InvariantViolation, ParseRatingError};
pub use models::{CardLearningState, CardState, Rating};
pub use query::{
    days_until_due, days_until_due_at, format_delay, get_card_state_description,
    get_card_state_description_at, is_card_due, is_card_due_at,
};
pub use review::{CardProgress, ReviewLogEntry, ReviewResult};
pub use scheduler::{Scheduler, suspend, unsuspend_at};

static DEFAULT_SCHEDULER: LazyLock<Scheduler> = LazyLock::new(Scheduler::default);

/// Learning state for a card that has just become visible to a user.
pub fn schedule_new_card() -> CardLearningState {
    schedule_new_card_at(Utc::now())
}

/// [`schedule_new_card`] with an explicit creation time.
pub fn schedule_new_card_at(now: DateTime<Utc>) -> CardLearningState {
    DEFAULT_SCHEDULER.schedule_new_card(now)
}

/// Initial progress record for a `(card, user)` pair.
pub fn create_initial_card_state(card_id: Uuid, user_id: Uuid) -> CardProgress {
    CardProgress::new(card_id, user_id, Utc::now())
}

/// Apply `rating` to `state` with the default learning steps.
pub fn calculate_next_review(rating: Rating, state: &CardLearningState) -> CardLearningState {
    calculate_next_review_at(rating, state, Utc::now())
}

/// [`calculate_next_review`] with an explicit review time.
pub fn calculate_next_review_at(
    rating: Rating,
    state: &CardLearningState,
    now: DateTime<Utc>,
) -> CardLearningState {
    DEFAULT_SCHEDULER.calculate_next_review_at(rating, state, now)
}

/// Same computation as [`calculate_next_review`], keeping previous and new
/// interval and easiness side by side for review history.
pub fn calculate_next_review_result(rating: Rating, state: &CardLearningState) -> ReviewResult {
    calculate_next_review_result_at(rating, state, Utc::now())
}

/// [`calculate_next_review_result`] with an explicit review time.
pub fn calculate_next_review_result_at(
    rating: Rating,
    state: &CardLearningState,
    now: DateTime<Utc>,
) -> ReviewResult {
    DEFAULT_SCHEDULER.review_at(rating, state, now)
}

/// Return a suspended card to study as `New`, due now.
pub fn unsuspend(state: &CardLearningState) -> CardLearningState {
    unsuspend_at(state, Utc::now())
}
