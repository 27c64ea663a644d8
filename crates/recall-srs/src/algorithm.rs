//! SM-2 easiness and interval arithmetic.
//!
//! Everything here is plain `f64`/`u32` math with no fused operations, so a
//! given input always produces the same bits.

use crate::models::Rating;

/// Easiness factor given to every new card.
pub const INITIAL_EASINESS_FACTOR: f64 = 2.5;

/// Hard floor for the easiness factor.
pub const MIN_EASINESS_FACTOR: f64 = 1.3;

/// Interval after the first successful review, in days.
pub const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second successful review, in days.
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Apply the SM-2 easiness update for `rating`.
///
/// `EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))`, floored at
/// [`MIN_EASINESS_FACTOR`]. No upper clamp.
#[allow(clippy::suboptimal_flops)] // mul_add would change the rounding
pub fn next_easiness_factor(easiness_factor: f64, rating: Rating) -> f64 {
    let miss = 5.0 - f64::from(rating.quality());
    let updated = easiness_factor + (0.1 - miss * (0.08 + miss * 0.02));
    updated.max(MIN_EASINESS_FACTOR)
}

/// Interval in days for a review-state card that has just reached
/// `repetitions` consecutive successes.
///
/// The first two repetitions use the fixed bootstrap intervals; afterwards
/// the previous interval grows by the (already updated) easiness factor.
pub fn next_interval(repetitions: u32, previous_interval: u32, easiness_factor: f64) -> u32 {
    match repetitions {
        0 | 1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => {
            let grown = (f64::from(previous_interval) * easiness_factor).round();
            // Saturating float-to-int cast; one day is the shortest review interval.
            (grown as u32).max(FIRST_INTERVAL_DAYS)
        }
    }
}
