use thiserror::Error;

/// A [`CardLearningState`](crate::CardLearningState) that no sequence of
/// scheduler calls could have produced. Indicates a caller bug or a corrupted
/// persisted record.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvariantViolation {
    #[error("easiness factor {0} is below the minimum of {min}", min = crate::MIN_EASINESS_FACTOR)]
    EasinessBelowFloor(f64),
    #[error("easiness factor is not a finite number")]
    EasinessNotFinite,
    #[error("review card has a zero-day interval")]
    ReviewWithoutInterval,
}

/// Invalid scheduler configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one learning step is required")]
    NoLearningSteps,
    #[error("learning step {index} must be longer than zero minutes")]
    ZeroLearningStep { index: usize },
    #[error("learning step {index} ({minutes} minutes) must be shorter than one day")]
    LearningStepTooLong { index: usize, minutes: u32 },
    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),
}

/// Returned when text does not name a [`Rating`](crate::Rating).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rating '{0}': expected again, hard, good, easy or 1-4")]
pub struct ParseRatingError(pub String);
