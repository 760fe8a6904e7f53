use image::RgbaImage;

use crate::{
    foundation::core::Canvas,
    quantize::{
        palette::{Palette, widen},
        quantizer::{QuantizedFrame, Quantizer},
    },
};

/// Floyd–Steinberg error diffusion onto a fixed palette.
///
/// Works in 16-bit channel space (`v * 257`) over r, g, b and a. Pixels are visited left to
/// right, top to bottom; the error of each pixel goes 7/16 to the right, 3/16 down-left, 5/16 down
/// and 1/16 down-right. The accumulated error is divided by 16 (truncating toward zero) and the
/// sum clamped to `[0, 0xffff]` before the nearest-color lookup.
#[derive(Clone, Debug, Default)]
pub struct FloydSteinberg {
    palette: Palette,
}

impl FloydSteinberg {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

const CHANNEL_MAX: i32 = 0xffff;

impl Quantizer for FloydSteinberg {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn quantize(&self, image: &RgbaImage) -> QuantizedFrame {
        let (w, h) = (image.width() as usize, image.height() as usize);
        let mut indices = Vec::with_capacity(w * h);

        // Error rows are offset by one so x-1 and x+1 never underflow or overflow.
        let mut curr = vec![[0i32; 4]; w + 2];
        let mut next = vec![[0i32; 4]; w + 2];

        for row in image.rows() {
            for (x, px) in row.enumerate() {
                let mut e = px.0.map(widen);
                for (c, v) in e.iter_mut().enumerate() {
                    *v = (*v + curr[x + 1][c] / 16).clamp(0, CHANNEL_MAX);
                }

                let idx = self.palette.nearest(e);
                indices.push(idx);

                let Some(chosen) = self.palette.wide_color(idx) else {
                    continue;
                };
                for c in 0..4 {
                    let err = e[c] - chosen[c];
                    next[x][c] += err * 3;
                    next[x + 1][c] += err * 5;
                    next[x + 2][c] += err;
                    curr[x + 2][c] += err * 7;
                }
            }
            std::mem::swap(&mut curr, &mut next);
            next.fill([0; 4]);
        }

        debug_assert_eq!(indices.len(), w * h);
        QuantizedFrame {
            canvas: Canvas {
                width: image.width(),
                height: image.height(),
            },
            indices,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/floyd_steinberg.rs"]
mod tests;
