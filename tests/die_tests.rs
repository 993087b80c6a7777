//! Die property tests.

use dice_duel::core::{Die, GameRng, MAX_FACE_COUNT, MIN_FACE_COUNT};
use dice_duel::DiceError;
use proptest::prelude::*;

proptest! {
    /// Every roll lands in `1..=face_count` for all valid face counts.
    #[test]
    fn prop_roll_within_faces(face_count in 2i64..=100, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut die = Die::new(face_count).unwrap();
        for _ in 0..50 {
            let face = die.roll(&mut rng);
            prop_assert!(face >= 1 && i64::from(face) <= face_count);
            prop_assert_eq!(die.face_value(), Some(face));
        }
    }

    /// Reset always leaves the die unset, whatever happened before.
    #[test]
    fn prop_reset_unsets(face_count in 2i64..=100, rolls in 0usize..5, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut die = Die::new(face_count).unwrap();
        for _ in 0..rolls {
            die.roll(&mut rng);
        }
        die.reset();
        prop_assert_eq!(die.face_value(), None);
    }

    /// Face counts outside the valid range never construct.
    #[test]
    fn prop_out_of_range_rejected(face_count in prop_oneof![i64::MIN..2i64, 101i64..i64::MAX]) {
        let rejected = matches!(Die::new(face_count), Err(DiceError::InvalidArgument { .. }));
        prop_assert!(rejected);
    }
}

#[test]
fn test_boundary_face_counts_rejected() {
    for bad in [1, 101, 0, -5] {
        assert!(Die::new(bad).is_err(), "{} faces should fail", bad);
    }
}

#[test]
fn test_boundary_face_counts_accepted() {
    let mut rng = GameRng::new(42);
    for good in [MIN_FACE_COUNT, MAX_FACE_COUNT] {
        let mut die = Die::new(i64::from(good)).unwrap();
        assert!(die.roll(&mut rng) <= good);
    }
}

#[test]
fn test_same_seed_same_rolls() {
    let mut a = GameRng::new(2024);
    let mut b = GameRng::new(2024);
    let mut die_a = Die::default();
    let mut die_b = Die::default();

    let seq_a: Vec<_> = (0..30).map(|_| die_a.roll(&mut a)).collect();
    let seq_b: Vec<_> = (0..30).map(|_| die_b.roll(&mut b)).collect();
    assert_eq!(seq_a, seq_b);
}
