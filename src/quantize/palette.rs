use image::Rgba;

use crate::foundation::error::{SpiralError, SpiralResult};

/// Ordered set of opaque colors a quantized frame may index into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    pub const MAX_COLORS: usize = 256;

    pub fn new(colors: Vec<[u8; 3]>) -> SpiralResult<Self> {
        if colors.is_empty() || colors.len() > Self::MAX_COLORS {
            return Err(SpiralError::validation(format!(
                "palette must hold 1..={} colors, got {}",
                Self::MAX_COLORS,
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// `{black, white}`, in that order.
    pub fn black_and_white() -> Self {
        Self {
            colors: vec![[0, 0, 0], [255, 255, 255]],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn color(&self, index: u8) -> Option<Rgba<u8>> {
        self.colors
            .get(usize::from(index))
            .map(|&[r, g, b]| Rgba([r, g, b, u8::MAX]))
    }

    /// Index of the closest entry to a 16-bit-per-channel RGBA value (`0..=0xffff`).
    ///
    /// Palette colors are widened with `v * 257` and treated as fully opaque. Distance is the sum
    /// over r, g, b and a of `(d * d) >> 2` in wrapping `u32` arithmetic; the earliest entry wins
    /// ties.
    pub fn nearest(&self, rgba16: [i32; 4]) -> u8 {
        let mut best = 0usize;
        let mut best_sum = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let sum = wide(c)
                .iter()
                .zip(rgba16)
                .fold(0u32, |acc, (&p, v)| acc.wrapping_add(sq_diff(v, p)));
            if sum < best_sum {
                best = i;
                best_sum = sum;
                if sum == 0 {
                    break;
                }
            }
        }
        best as u8
    }

    /// Entry `index` widened to 16 bits per channel, alpha included.
    pub fn wide_color(&self, index: u8) -> Option<[i32; 4]> {
        self.colors.get(usize::from(index)).map(wide)
    }

    /// Flat `r, g, b, r, g, b, ...` bytes as expected by GIF color tables.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

/// 8-bit channel to the 16-bit range (`0xff` becomes `0xffff`).
pub fn widen(v: u8) -> i32 {
    i32::from(v) * 257
}

fn wide(&[r, g, b]: &[u8; 3]) -> [i32; 4] {
    [widen(r), widen(g), widen(b), widen(u8::MAX)]
}

fn sq_diff(x: i32, y: i32) -> u32 {
    let d = x.wrapping_sub(y) as u32;
    d.wrapping_mul(d) >> 2
}

impl Default for Palette {
    fn default() -> Self {
        Self::black_and_white()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/palette.rs"]
mod tests;
