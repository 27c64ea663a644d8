//! Card state machine.
//!
//! Every `(CardState, Rating)` pair is handled by one arm of
//! [`Scheduler::transition`]:
//!
//! | state       | `Again`                        | `Hard`              | `Good`                         | `Easy`        |
//! |-------------|--------------------------------|---------------------|--------------------------------|---------------|
//! | `New`       | learning, step 0               | graduate            | graduate                       | graduate      |
//! | `Learning`  | step 0, lapse if lapsed before | repeat current step | next step, graduate after last | graduate      |
//! | `Review`    | lapse, learning, step 0        | grow interval       | grow interval                  | grow interval |
//! | `Suspended` | unchanged                      | unchanged           | unchanged                      | unchanged     |

use chrono::{DateTime, Duration, Utc};

use crate::{
    algorithm::{next_easiness_factor, next_interval},
    config::SchedulerConfig,
    error::ConfigError,
    models::{CardLearningState, CardState, Rating},
    review::ReviewResult,
    validation::clamp_invariants,
};

/// SM-2 scheduler with a fixed set of learning steps.
///
/// Holds no mutable state; one instance can serve any number of cards.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Never empty.
    learning_steps: Vec<Duration>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            learning_steps: SchedulerConfig::default().learning_steps(),
        }
    }
}

impl Scheduler {
    /// Build a scheduler from a validated configuration.
    pub fn new(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            learning_steps: config.learning_steps(),
        })
    }

    /// Build a scheduler from `SRS_`-prefixed environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&SchedulerConfig::from_env()?)
    }

    /// Delay for learning step `index`; indexes past the end reuse the last step.
    pub fn learning_step(&self, index: u32) -> Duration {
        let last = self.learning_steps.len() - 1;
        let index = usize::try_from(index).map_or(last, |index| index.min(last));
        self.learning_steps[index]
    }

    /// Consecutive `Good` ratings needed to leave `Learning`.
    fn graduating_repetitions(&self) -> u32 {
        u32::try_from(self.learning_steps.len()).unwrap_or(u32::MAX)
    }

    /// Learning state for a card that has just become visible to a user.
    pub const fn schedule_new_card(&self, now: DateTime<Utc>) -> CardLearningState {
        CardLearningState::new(now)
    }

    /// Apply `rating` to `state` at `now` and return the next state.
    pub fn calculate_next_review_at(
        &self,
        rating: Rating,
        state: &CardLearningState,
        now: DateTime<Utc>,
    ) -> CardLearningState {
        self.review_at(rating, state, now).into_state()
    }

    /// Apply `rating` to `state` at `now`, keeping the before and after values.
    pub fn review_at(
        &self,
        rating: Rating,
        state: &CardLearningState,
        now: DateTime<Utc>,
    ) -> ReviewResult {
        let current = clamp_invariants(state);
        let next = self.transition(rating, &current, now);

        tracing::debug!(
            from = %current.state,
            to = %next.state,
            rating = %rating,
            interval = next.interval,
            repetitions = next.repetitions,
            lapses = next.lapses,
            "Card rescheduled"
        );

        ReviewResult::new(rating, state, &next, now)
    }

    /// How long until the card would be due again under each rating.
    pub fn preview_at(
        &self,
        state: &CardLearningState,
        now: DateTime<Utc>,
    ) -> [(Rating, Duration); 4] {
        let current = clamp_invariants(state);
        Rating::ALL.map(|rating| {
            let next = self.transition(rating, &current, now);
            (rating, next.due_date - now)
        })
    }

    fn transition(
        &self,
        rating: Rating,
        state: &CardLearningState,
        now: DateTime<Utc>,
    ) -> CardLearningState {
        let mut next = state.clone();

        match (state.state, rating) {
            (CardState::Suspended, _) => {
                tracing::warn!("Ignoring {rating} rating for a suspended card");
                return next;
            }

            (CardState::New, Rating::Again) => {
                self.restart_learning(&mut next, now);
            }

            // Only a card that lapsed out of review can be learning with lapses on record.
            (CardState::Learning, Rating::Again) => {
                if state.lapses > 0 {
                    Self::charge_lapse(&mut next, state);
                }
                self.restart_learning(&mut next, now);
            }

            (CardState::New, Rating::Hard | Rating::Good | Rating::Easy)
            | (CardState::Learning, Rating::Easy) => {
                Self::graduate(&mut next, rating, now);
            }

            (CardState::Learning, Rating::Hard) => {
                next.due_date = now + self.learning_step(state.repetitions);
            }

            (CardState::Learning, Rating::Good) => {
                let repetitions = state.repetitions.saturating_add(1);
                if repetitions >= self.graduating_repetitions() {
                    Self::graduate(&mut next, rating, now);
                } else {
                    next.repetitions = repetitions;
                    next.due_date = now + self.learning_step(repetitions);
                }
            }

            (CardState::Review, Rating::Again) => {
                Self::charge_lapse(&mut next, state);
                self.restart_learning(&mut next, now);
            }

            (CardState::Review, Rating::Hard | Rating::Good | Rating::Easy) => {
                next.repetitions = state.repetitions.saturating_add(1);
                next.easiness_factor = next_easiness_factor(state.easiness_factor, rating);
                next.interval = next_interval(next.repetitions, state.interval, next.easiness_factor);
                next.due_date = now + Duration::days(i64::from(next.interval));
            }
        }

        next.last_reviewed = Some(now);
        next
    }

    fn charge_lapse(next: &mut CardLearningState, state: &CardLearningState) {
        next.lapses = state.lapses.saturating_add(1);
        next.easiness_factor = next_easiness_factor(state.easiness_factor, Rating::Again);
    }

    fn restart_learning(&self, next: &mut CardLearningState, now: DateTime<Utc>) {
        next.state = CardState::Learning;
        next.repetitions = 0;
        next.interval = 0;
        next.due_date = now + self.learning_step(0);
    }

    fn graduate(next: &mut CardLearningState, rating: Rating, now: DateTime<Utc>) {
        next.state = CardState::Review;
        next.repetitions = 1;
        next.easiness_factor = next_easiness_factor(next.easiness_factor, rating);
        next.interval = next_interval(next.repetitions, next.interval, next.easiness_factor);
        next.due_date = now + Duration::days(i64::from(next.interval));
    }
}

/// Take a card out of study. Only the state changes.
pub fn suspend(state: &CardLearningState) -> CardLearningState {
    CardLearningState {
        state: CardState::Suspended,
        ..state.clone()
    }
}

/// Return a suspended card to study as `New`, due at `now`.
///
/// Interval, repetitions, easiness and lapses are kept as stored, but the
/// card re-enters through the new-card path. Cards that are not suspended
/// come back unchanged.
pub fn unsuspend_at(state: &CardLearningState, now: DateTime<Utc>) -> CardLearningState {
    if state.state != CardState::Suspended {
        return state.clone();
    }

    CardLearningState {
        state: CardState::New,
        due_date: now,
        ..state.clone()
    }
}
