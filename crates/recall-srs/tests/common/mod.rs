use chrono::{DateTime, TimeZone, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use recall_srs::{CardLearningState, CardState, Rating, Scheduler};

/// Fixed reference time so expected due dates are exact.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

/// A graduated card with the given schedule.
pub fn review_state(
    now: DateTime<Utc>,
    interval: u32,
    repetitions: u32,
    easiness_factor: f64,
) -> CardLearningState {
    CardLearningState {
        state: CardState::Review,
        due_date: now,
        interval,
        repetitions,
        easiness_factor,
        lapses: 0,
        last_reviewed: Some(now - chrono::Duration::days(i64::from(interval))),
    }
}

/// A study session that answers each card the moment it becomes due.
pub struct Session {
    pub scheduler: Scheduler,
    pub now: DateTime<Utc>,
    pub state: CardLearningState,
}

impl Session {
    pub fn new(state: CardLearningState, now: DateTime<Utc>) -> Self {
        Self {
            scheduler: Scheduler::default(),
            now,
            state,
        }
    }

    /// Rate the card at its due date (or now, if already overdue) and
    /// return the previous state.
    pub fn answer(&mut self, rating: Rating) -> CardLearningState {
        self.now = self.now.max(self.state.due_date);
        let next = self
            .scheduler
            .calculate_next_review_at(rating, &self.state, self.now);
        std::mem::replace(&mut self.state, next)
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_rating(rng: &mut StdRng) -> Rating {
    Rating::ALL[rng.gen_range(0..Rating::ALL.len())]
}
