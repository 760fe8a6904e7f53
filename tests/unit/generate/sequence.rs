use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn recurrence_holds_for_every_scale() {
    for scale in SCALE_RANGE {
        for len in 2..=20 {
            let seq = RadiusSequence::from_scale(scale, len).unwrap();
            let r = seq.as_slice();
            assert_eq!(r.len(), len);
            assert_eq!(r[0], scale);
            assert_eq!(r[1], scale);
            for i in 2..len {
                assert_eq!(r[i], r[i - 1] + r[i - 2]);
            }
            assert!(r.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn twelve_entries_from_scale_one_is_fibonacci() {
    let seq = RadiusSequence::from_scale(1, 12).unwrap();
    assert_eq!(
        seq.as_slice(),
        &[1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]
    );
}

#[test]
fn generated_scale_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let seq = RadiusSequence::generate(&mut rng, 12).unwrap();
        assert!(SCALE_RANGE.contains(&seq.scale()));
        assert_eq!(seq.len(), 12);
    }
}

#[test]
fn same_seed_same_sequence() {
    let a = RadiusSequence::generate(&mut StdRng::seed_from_u64(3), 12).unwrap();
    let b = RadiusSequence::generate(&mut StdRng::seed_from_u64(3), 12).unwrap();
    assert_eq!(a, b);
}

#[test]
fn short_sequences_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(RadiusSequence::generate(&mut rng, 0).is_err());
    assert!(RadiusSequence::generate(&mut rng, 1).is_err());
    assert!(RadiusSequence::from_scale(0, 12).is_err());
}

#[test]
fn overflow_is_reported() {
    let err = RadiusSequence::from_scale(u64::MAX / 2, 5).unwrap_err();
    assert!(err.to_string().contains("overflows"));
}
