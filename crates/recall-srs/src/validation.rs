use crate::{
    algorithm::{FIRST_INTERVAL_DAYS, INITIAL_EASINESS_FACTOR, MIN_EASINESS_FACTOR},
    error::InvariantViolation,
    models::CardLearningState,
};

/// Repair a state that breaks the scheduler's invariants, logging what was
/// wrong. A valid state comes back untouched.
pub(crate) fn clamp_invariants(state: &CardLearningState) -> CardLearningState {
    let mut repaired = state.clone();

    while let Err(violation) = repaired.validate() {
        tracing::warn!(
            state = %repaired.state,
            easiness_factor = repaired.easiness_factor,
            interval = repaired.interval,
            "Clamping invalid card learning state: {violation}"
        );

        match violation {
            InvariantViolation::EasinessNotFinite => {
                repaired.easiness_factor = INITIAL_EASINESS_FACTOR;
            }
            InvariantViolation::EasinessBelowFloor(_) => {
                repaired.easiness_factor = MIN_EASINESS_FACTOR;
            }
            InvariantViolation::ReviewWithoutInterval => {
                repaired.interval = FIRST_INTERVAL_DAYS;
            }
        }
    }

    repaired
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::CardState;

    #[test]
    fn test_valid_state_is_untouched() {
        let state = CardLearningState::new(Utc::now());
        assert_eq!(clamp_invariants(&state), state);
    }

    #[test]
    fn test_clamps_every_violation() {
        let mut state = CardLearningState::new(Utc::now());
        state.state = CardState::Review;
        state.interval = 0;
        state.easiness_factor = 0.9;

        let repaired = clamp_invariants(&state);
        assert_eq!(repaired.easiness_factor, MIN_EASINESS_FACTOR);
        assert_eq!(repaired.interval, FIRST_INTERVAL_DAYS);
        assert!(repaired.validate().is_ok());

        state.easiness_factor = f64::INFINITY;
        assert_eq!(
            clamp_invariants(&state).easiness_factor,
            INITIAL_EASINESS_FACTOR
        );
    }
}
