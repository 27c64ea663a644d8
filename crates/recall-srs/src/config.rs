use chrono::Duration;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default learning steps, in minutes: one minute after a miss, ten after the
/// first success.
pub const DEFAULT_LEARNING_STEPS_MINUTES: [u32; 2] = [1, 10];

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Tunable scheduler parameters.
///
/// The number of learning steps is also the number of consecutive `Good`
/// ratings a learning card needs before it graduates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SchedulerConfig {
    /// Short re-presentation delays used while a card is learning
    #[serde(default = "default_learning_steps")]
    pub learning_steps_minutes: Vec<u32>,
}

fn default_learning_steps() -> Vec<u32> {
    DEFAULT_LEARNING_STEPS_MINUTES.to_vec()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            learning_steps_minutes: default_learning_steps(),
        }
    }
}

impl SchedulerConfig {
    /// Load from `SRS_`-prefixed environment variables, e.g.
    /// `SRS_LEARNING_STEPS_MINUTES=1,10`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::prefixed("SRS_").from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Every step must be a sub-day, non-zero delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.learning_steps_minutes.is_empty() {
            return Err(ConfigError::NoLearningSteps);
        }
        for (index, &minutes) in self.learning_steps_minutes.iter().enumerate() {
            if minutes == 0 {
                return Err(ConfigError::ZeroLearningStep { index });
            }
            if minutes >= MINUTES_PER_DAY {
                return Err(ConfigError::LearningStepTooLong { index, minutes });
            }
        }
        Ok(())
    }

    pub(crate) fn learning_steps(&self) -> Vec<Duration> {
        self.learning_steps_minutes
            .iter()
            .map(|&minutes| Duration::minutes(i64::from(minutes)))
            .collect()
    }
}
