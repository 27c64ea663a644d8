use chrono::{DateTime, Utc};
use recall_srs::{
    CardLearningState, ParseRatingError, Rating, Scheduler, get_card_state_description_at,
};
use serde::Serialize;

/// One answered card in a simulated study history.
#[derive(Debug, Serialize)]
pub struct SimStep {
    pub step: usize,
    pub rating: Rating,
    pub reviewed_at: DateTime<Utc>,
    pub lapsed: bool,
    pub description: String,
    #[serde(flatten)]
    pub card: CardLearningState,
}

pub fn parse_ratings<I, S>(args: I) -> Result<Vec<Rating>, ParseRatingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().map(|arg| arg.as_ref().parse()).collect()
}

/// Replay `ratings` against a fresh card created at `start`, answering each
/// time the card comes due.
pub fn simulate(scheduler: &Scheduler, ratings: &[Rating], start: DateTime<Utc>) -> Vec<SimStep> {
    let mut card = scheduler.schedule_new_card(start);
    let mut now = start;

    ratings
        .iter()
        .enumerate()
        .map(|(index, &rating)| {
            now = now.max(card.due_date);
            let result = scheduler.review_at(rating, &card, now);
            let lapsed = result.is_lapse();
            card = result.into_state();

            SimStep {
                step: index + 1,
                rating,
                reviewed_at: now,
                lapsed,
                description: get_card_state_description_at(&card, now),
                card: card.clone(),
            }
        })
        .collect()
}
