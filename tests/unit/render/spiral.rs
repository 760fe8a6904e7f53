use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::foundation::core::Canvas;

fn draw(seed: u64) -> (PixelBuffer, Vec<ArmStroke>) {
    let canvas = Canvas::new(800, 800).unwrap();
    let seq = RadiusSequence::from_scale(1, 12).unwrap();
    let mut buf = PixelBuffer::new(canvas);
    let mut rng = StdRng::seed_from_u64(seed);
    let strokes = draw_fibonacci_spiral(&mut buf, &seq, canvas.center(), FrameIndex(0), &mut rng);
    (buf, strokes)
}

#[test]
fn one_arm_per_radius_with_quarter_turn_steps() {
    let (_, strokes) = draw(17);
    assert_eq!(strokes.len(), 12);

    let offset = strokes[0].start_angle;
    assert!((0.0..MAX_ROTATION).contains(&offset));
    for (i, s) in strokes.iter().enumerate() {
        let expected = offset + ARM_SWEEP * i as f64;
        assert!((s.start_angle - expected).abs() < 1e-9);
        assert!(THICKNESS_RANGE.contains(&s.thickness));
    }

    let radii: Vec<u64> = strokes.iter().map(|s| s.radius).collect();
    assert_eq!(radii, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]);
}

#[test]
fn arm_pixels_use_the_arm_color() {
    let (buf, strokes) = draw(23);
    // The outermost arm is drawn last, so its pixels are never overwritten.
    let last = strokes.last().unwrap();
    let offset = kurbo::Vec2::from_angle(last.start_angle) * last.radius as f64;
    assert_eq!(
        buf.get(400 + offset.x as i64, 400 + offset.y as i64),
        Some(last.color)
    );
}

#[test]
fn same_seed_draws_same_spiral() {
    let (a, sa) = draw(99);
    let (b, sb) = draw(99);
    assert_eq!(sa, sb);
    assert_eq!(a.as_image(), b.as_image());
}

#[test]
fn draws_follow_rotation_then_color_then_thickness() {
    let (_, strokes) = draw(5);

    let mut rng = StdRng::seed_from_u64(5);
    let rotation: f64 = rng.random_range(0.0..MAX_ROTATION);
    let color = psychedelic_color(&mut rng, 0, FrameIndex(0));
    let thickness = rng.random_range(THICKNESS_RANGE);

    assert_eq!(strokes[0].start_angle, rotation);
    assert_eq!(strokes[0].color, color);
    assert_eq!(strokes[0].thickness, thickness);
}
