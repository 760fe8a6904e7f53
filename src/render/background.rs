use image::Rgba;
use rand::Rng;

use crate::{foundation::core::FrameIndex, render::buffer::PixelBuffer};

/// Upper bound (exclusive) for each gradient shift.
pub const SHIFT_MAX: u32 = 5;

/// Per-frame slopes of the diagonal gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientShift {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl GradientShift {
    /// Draw r, g and b shifts in that order from `[0, SHIFT_MAX)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r = rng.random_range(0..SHIFT_MAX);
        let g = rng.random_range(0..SHIFT_MAX);
        let b = rng.random_range(0..SHIFT_MAX);
        Self { r, g, b }
    }

    /// Gradient color at `(x, y)`; a pure function of its inputs.
    pub fn pixel(self, x: u32, y: u32, frame: FrameIndex) -> Rgba<u8> {
        let (x, y, f) = (u64::from(x), u64::from(y), u64::from(frame.0));
        let r = (x * u64::from(self.r) + f * 5) % 255;
        let g = (y * u64::from(self.g) + f * 7) % 255;
        let b = ((x + y) + f * u64::from(self.b)) % 255;
        Rgba([r as u8, g as u8, b as u8, u8::MAX])
    }
}

/// Overwrite every pixel of `buf` with a freshly shifted gradient for `frame`.
pub fn draw_gradient_background<R: Rng + ?Sized>(
    buf: &mut PixelBuffer,
    frame: FrameIndex,
    rng: &mut R,
) -> GradientShift {
    let shift = GradientShift::random(rng);
    fill_gradient(buf, frame, shift);
    shift
}

pub fn fill_gradient(buf: &mut PixelBuffer, frame: FrameIndex, shift: GradientShift) {
    let (w, h) = (buf.width(), buf.height());
    for y in 0..h {
        for x in 0..w {
            buf.set(i64::from(x), i64::from(y), shift.pixel(x, y, frame));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
