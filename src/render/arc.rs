use image::Rgba;
use kurbo::{Rect, Vec2};

use crate::render::buffer::PixelBuffer;

/// Angular sampling step in radians.
///
/// Fixed regardless of radius, so large arcs can show gaps between samples.
pub const ANGLE_STEP: f64 = 0.01;

/// Square bounding box of half-width `radius` around `(cx, cy)`.
pub fn arc_bounds(cx: i64, cy: i64, radius: i64) -> Rect {
    Rect::new(
        (cx - radius) as f64,
        (cy - radius) as f64,
        (cx + radius) as f64,
        (cy + radius) as f64,
    )
}

/// Center and base radius of an arc box, using truncating integer division.
pub fn arc_geometry(bounds: Rect) -> (i64, i64, i64) {
    let (x0, y0, x1, y1) = (
        bounds.x0 as i64,
        bounds.y0 as i64,
        bounds.x1 as i64,
        bounds.y1 as i64,
    );
    ((x0 + x1) / 2, (y0 + y1) / 2, (x1 - x0) / 2)
}

/// Draw a thick arc by sampling concentric arcs at every integer radius offset in
/// `[-thickness, thickness]`.
///
/// Angles advance from `start` by [`ANGLE_STEP`] while strictly below `end`. Each sample lands on
/// `center + trunc((radius + t) * (cos a, sin a))` and overwrites whatever was there.
pub fn draw_thick_arc(
    buf: &mut PixelBuffer,
    bounds: Rect,
    start: f64,
    end: f64,
    color: Rgba<u8>,
    thickness: i64,
) {
    let (cx, cy, radius) = arc_geometry(bounds);

    for t in -thickness..=thickness {
        let r = (radius + t) as f64;
        for angle in sample_angles(start, end) {
            let offset = Vec2::from_angle(angle) * r;
            buf.set(cx + offset.x as i64, cy + offset.y as i64, color);
        }
    }
}

/// Accumulated angles `start, start + step, ...` strictly below `end`.
pub fn sample_angles(start: f64, end: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(start), |a| Some(a + ANGLE_STEP)).take_while(move |a| *a < end)
}

#[cfg(test)]
#[path = "../../tests/unit/render/arc.rs"]
mod tests;
