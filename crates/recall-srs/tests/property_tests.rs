use recall_srs::{
    CardState, MIN_EASINESS_FACTOR, Rating, Scheduler, schedule_new_card_at,
};

use crate::common::{self, Session};

const SEQUENCES: u64 = 200;
const SEQUENCE_LENGTH: usize = 60;

#[test]
fn test_easiness_never_below_floor() {
    for seed in 0..SEQUENCES {
        let mut rng = common::seeded_rng(seed);
        let now = common::fixed_now();
        let mut session = Session::new(schedule_new_card_at(now), now);

        for _ in 0..SEQUENCE_LENGTH {
            session.answer(common::random_rating(&mut rng));
            assert!(
                session.state.easiness_factor >= MIN_EASINESS_FACTOR,
                "seed {seed}: easiness {} below floor",
                session.state.easiness_factor
            );
        }
    }
}

#[test]
fn test_easiness_floor_under_repeated_lapses() {
    let now = common::fixed_now();
    let mut session = Session::new(common::review_state(now, 10, 3, 2.5), now);

    for _ in 0..50 {
        // Graduate straight back into review, then forget again.
        session.answer(Rating::Easy);
        session.answer(Rating::Again);
        assert!(session.state.easiness_factor >= MIN_EASINESS_FACTOR);
    }
    assert_eq!(session.state.lapses, 50);
}

#[test]
fn test_lapses_count_agains_after_graduation() {
    for seed in 0..SEQUENCES {
        let mut rng = common::seeded_rng(seed);
        let now = common::fixed_now();
        let mut session = Session::new(schedule_new_card_at(now), now);
        let mut graduated = false;

        for _ in 0..SEQUENCE_LENGTH {
            let rating = common::random_rating(&mut rng);
            let before = session.answer(rating);

            // Agains in review, or in learning once the card has graduated.
            let has_graduated = before.state == CardState::Review
                || (before.state == CardState::Learning && graduated);
            let expected = if rating == Rating::Again && has_graduated {
                before.lapses + 1
            } else {
                before.lapses
            };
            graduated |= session.state.state == CardState::Review;
            assert_eq!(session.state.lapses, expected, "seed {seed}");
        }
    }
}

#[test]
fn test_good_intervals_increase() {
    for ef_tenths in 13..=30 {
        let easiness_factor = f64::from(ef_tenths) / 10.0;
        let now = common::fixed_now();
        let mut session = Session::new(common::review_state(now, 1, 1, easiness_factor), now);

        let mut previous = 1;
        for _ in 0..12 {
            session.answer(Rating::Good);
            assert!(
                session.state.interval >= previous,
                "easiness {easiness_factor}: {} after {previous}",
                session.state.interval
            );
            previous = session.state.interval;
        }
        assert!(previous > 6);
    }
}

#[test]
fn test_learning_cards_come_back_within_minutes() {
    for seed in 0..SEQUENCES {
        let mut rng = common::seeded_rng(seed);
        let now = common::fixed_now();
        let mut session = Session::new(schedule_new_card_at(now), now);

        for _ in 0..SEQUENCE_LENGTH {
            session.answer(common::random_rating(&mut rng));
            match session.state.state {
                CardState::Learning => {
                    assert!(session.state.due_date - session.now <= chrono::Duration::minutes(10));
                    assert_eq!(session.state.interval, 0);
                }
                CardState::Review => {
                    assert!(session.state.interval >= 1);
                    assert!(session.state.validate().is_ok());
                }
                CardState::New | CardState::Suspended => {
                    panic!("seed {seed}: reviews never produce {}", session.state.state)
                }
            }
        }
    }
}

#[test]
fn test_scheduling_is_deterministic() {
    let now = common::fixed_now();
    let first = Scheduler::default();
    let second = Scheduler::default();

    for seed in 0..20 {
        let mut rng = common::seeded_rng(seed);
        let mut a = schedule_new_card_at(now);
        let mut b = schedule_new_card_at(now);

        for _ in 0..SEQUENCE_LENGTH {
            let rating = common::random_rating(&mut rng);
            a = first.calculate_next_review_at(rating, &a, now);
            b = second.calculate_next_review_at(rating, &b, now);
            assert_eq!(a, b);
            assert_eq!(a.easiness_factor.to_bits(), b.easiness_factor.to_bits());
        }
    }
}
