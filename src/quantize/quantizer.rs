use image::{Rgba, RgbaImage};

use crate::{
    foundation::core::Canvas,
    quantize::palette::{Palette, widen},
};

/// Palette-indexed frame, one byte per pixel in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedFrame {
    pub canvas: Canvas,
    pub indices: Vec<u8>,
}

impl QuantizedFrame {
    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        self.indices
            .get(y as usize * self.canvas.width as usize + x as usize)
            .copied()
    }

    /// Distinct palette indices used by this frame, ascending.
    pub fn distinct_indices(&self) -> Vec<u8> {
        let mut seen = [false; 256];
        for &i in &self.indices {
            seen[usize::from(i)] = true;
        }
        (0..=u8::MAX).filter(|&i| seen[usize::from(i)]).collect()
    }

    /// Expand back to full color through `palette`. Unknown indices become transparent.
    pub fn to_rgba(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(self.canvas.width, self.canvas.height, |x, y| {
            self.index_at(x, y)
                .and_then(|i| palette.color(i))
                .unwrap_or(Rgba([0, 0, 0, 0]))
        })
    }
}

/// Reduces a full-color frame to indices into a fixed palette.
pub trait Quantizer {
    fn palette(&self) -> &Palette;

    fn quantize(&self, image: &RgbaImage) -> QuantizedFrame;
}

/// Maps every pixel to its closest palette entry without diffusing the error.
#[derive(Clone, Debug, Default)]
pub struct NearestColor {
    palette: Palette,
}

impl NearestColor {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Quantizer for NearestColor {
    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn quantize(&self, image: &RgbaImage) -> QuantizedFrame {
        let indices = image
            .pixels()
            .map(|&Rgba([r, g, b, a])| {
                self.palette
                    .nearest([widen(r), widen(g), widen(b), widen(a)])
            })
            .collect();
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
#[path = "../../tests/unit/quantize/quantizer.rs"]
mod tests;
