use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4},
    ops::Range,
};

use rand::Rng;

use crate::{
    foundation::core::FrameIndex,
    generate::{color::psychedelic_color, sequence::RadiusSequence},
    render::{
        arc::{arc_bounds, draw_thick_arc},
        buffer::PixelBuffer,
    },
};

/// Half-thickness range, in pixels, drawn once per arm.
pub const THICKNESS_RANGE: Range<i64> = 3..6;

/// Upper bound (exclusive) of the per-frame rotation offset, in radians.
pub const MAX_ROTATION: f64 = FRAC_PI_4;

/// Angular sweep of a single arm.
pub const ARM_SWEEP: f64 = FRAC_PI_2;

/// What was drawn for one spiral arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmStroke {
    pub radius: u64,
    pub start_angle: f64,
    pub color: image::Rgba<u8>,
    pub thickness: i64,
}

/// Draw one quarter-circle arm per radius, each starting where the previous one ended.
///
/// A single rotation offset in `[0, MAX_ROTATION)` is drawn first. Per arm the color channels are
/// drawn before the thickness.
pub fn draw_fibonacci_spiral<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    sequence: &RadiusSequence,
    center: (i64, i64),
    frame: FrameIndex,
    rng: &mut R,
) -> Vec<ArmStroke> {
    let (cx, cy) = center;
    let mut angle = rng.random_range(0.0..MAX_ROTATION);
    let mut strokes = Vec::with_capacity(sequence.len());

    for (arm, radius) in sequence.iter().enumerate() {
        let color = psychedelic_color(rng, arm, frame);
        let bounds = arc_bounds(cx, cy, radius as i64);
        let thickness = rng.random_range(THICKNESS_RANGE);

        draw_thick_arc(buf, bounds, angle, angle + ARM_SWEEP, color, thickness);
        strokes.push(ArmStroke {
            radius,
            start_angle: angle,
            color,
            thickness,
        });
        angle += ARM_SWEEP;
    }

    strokes
}

#[cfg(test)]
#[path = "../../tests/unit/render/spiral.rs"]
mod tests;
