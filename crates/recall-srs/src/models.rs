use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    algorithm::{INITIAL_EASINESS_FACTOR, MIN_EASINESS_FACTOR},
    error::{InvariantViolation, ParseRatingError},
};

/// Where a card sits in its learning lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardState {
    /// Never rated.
    New,
    /// Drilling short learning steps, either on first exposure or after a lapse.
    Learning,
    /// Graduated; scheduled in whole days by the SM-2 interval formula.
    Review,
    /// Excluded from study until unsuspended.
    Suspended,
}

impl CardState {
    /// Upper-case name as stored and serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Learning => "LEARNING",
            Self::Review => "REVIEW",
            Self::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How well the user recalled a card. Ordered `Again < Hard < Good < Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    /// Forgotten.
    Again,
    /// Recalled with serious difficulty.
    Hard,
    /// Recalled after some hesitation.
    Good,
    /// Recalled instantly.
    Easy,
}

impl Rating {
    /// Every rating, in ascending order.
    pub const ALL: [Self; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// SM-2 quality score for this rating.
    pub const fn quality(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    /// Upper-case name as stored and serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Again => "AGAIN",
            Self::Hard => "HARD",
            Self::Good => "GOOD",
            Self::Easy => "EASY",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ParseRatingError;

    /// Accepts the rating names in any case, or the answer-button numbers `1`-`4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" | "1" => Ok(Self::Again),
            "hard" | "2" => Ok(Self::Hard),
            "good" | "3" => Ok(Self::Good),
            "easy" | "4" => Ok(Self::Easy),
            _ => Err(ParseRatingError(s.to_string())),
        }
    }
}

/// One user's learning progress on one card.
///
/// Only ever produced by [`Scheduler`](crate::Scheduler) operations; callers
/// persist it and hand it back unchanged on the next review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLearningState {
    /// Lifecycle state
    pub state: CardState,
    /// When the card should next be presented
    pub due_date: DateTime<Utc>,
    /// Whole days between reviews; zero outside `Review`
    pub interval: u32,
    /// Consecutive successful ratings since the last graduation or step reset
    pub repetitions: u32,
    /// Interval growth multiplier, never below [`MIN_EASINESS_FACTOR`]
    pub easiness_factor: f64,
    /// Number of times the card was forgotten after graduating
    pub lapses: u32,
    /// When the card was last rated, `None` until its first review
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl CardLearningState {
    /// A never-seen card, due at `now`.
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: CardState::New,
            due_date: now,
            interval: 0,
            repetitions: 0,
            easiness_factor: INITIAL_EASINESS_FACTOR,
            lapses: 0,
            last_reviewed: None,
        }
    }

    /// Check the invariants every scheduler-produced state upholds.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use recall_srs::{CardLearningState, InvariantViolation};
    ///
    /// let mut state = CardLearningState::new(Utc::now());
    /// assert!(state.validate().is_ok());
    ///
    /// state.easiness_factor = 1.1;
    /// assert_eq!(state.validate(), Err(InvariantViolation::EasinessBelowFloor(1.1)));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if !self.easiness_factor.is_finite() {
            return Err(InvariantViolation::EasinessNotFinite);
        }
        if self.easiness_factor < MIN_EASINESS_FACTOR {
            return Err(InvariantViolation::EasinessBelowFloor(self.easiness_factor));
        }
        if self.state == CardState::Review && self.interval == 0 {
            return Err(InvariantViolation::ReviewWithoutInterval);
        }
        Ok(())
    }
}
