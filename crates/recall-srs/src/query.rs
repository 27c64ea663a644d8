//! Read-only questions about a card's schedule, for queue selection and
//! display.

use chrono::{DateTime, Duration, Utc};

use crate::models::{CardLearningState, CardState};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whether the card should be presented at `now`. Suspended cards never are.
pub fn is_card_due_at(state: &CardLearningState, now: DateTime<Utc>) -> bool {
    state.state != CardState::Suspended && state.due_date <= now
}

/// [`is_card_due_at`] against the current time.
pub fn is_card_due(state: &CardLearningState) -> bool {
    is_card_due_at(state, Utc::now())
}

/// Whole days until the card is due, rounded up. Zero or negative means due.
pub fn days_until_due_at(state: &CardLearningState, now: DateTime<Utc>) -> i64 {
    let remaining = state.due_date - now;
    // num_seconds truncates toward zero; round a positive fraction up.
    let mut seconds = remaining.num_seconds();
    if remaining > Duration::seconds(seconds) {
        seconds += 1;
    }
    -(-seconds).div_euclid(SECONDS_PER_DAY)
}

/// [`days_until_due_at`] against the current time.
pub fn days_until_due(state: &CardLearningState) -> i64 {
    days_until_due_at(state, Utc::now())
}

/// Short status label: `New`, `Learning`, `Suspended`, or for review cards
/// `Due`, `Due tomorrow`, `Due in N days`.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use recall_srs::{CardLearningState, CardState, get_card_state_description_at};
///
/// let now = Utc::now();
/// let mut state = CardLearningState::new(now);
/// assert_eq!(get_card_state_description_at(&state, now), "New");
///
/// state.state = CardState::Review;
/// state.interval = 3;
/// state.due_date = now + Duration::days(3);
/// assert_eq!(get_card_state_description_at(&state, now), "Due in 3 days");
/// ```
pub fn get_card_state_description_at(state: &CardLearningState, now: DateTime<Utc>) -> String {
    match state.state {
        CardState::New => "New".to_string(),
        CardState::Learning => "Learning".to_string(),
        CardState::Suspended => "Suspended".to_string(),
        CardState::Review if state.due_date <= now => "Due".to_string(),
        CardState::Review => match days_until_due_at(state, now) {
            ..=1 => "Due tomorrow".to_string(),
            days => format!("Due in {days} days"),
        },
    }
}

/// [`get_card_state_description_at`] against the current time.
pub fn get_card_state_description(state: &CardLearningState) -> String {
    get_card_state_description_at(state, Utc::now())
}

/// Compact label for a scheduling delay, e.g. for answer buttons.
pub fn format_delay(delay: Duration) -> String {
    let minutes = delay.num_minutes();
    let hours = delay.num_hours();
    let days = delay.num_days();

    if minutes < 1 {
        "now".to_string()
    } else if hours < 1 {
        format!("{minutes}m")
    } else if days < 1 {
        format!("{hours}h")
    } else if days < 7 {
        format!("{days}d")
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
