use image::{Rgba, RgbaImage};

use crate::foundation::core::Canvas;

/// Full-color frame buffer that silently drops writes outside its bounds.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    image: RgbaImage,
}

impl PixelBuffer {
    /// Fresh buffer filled with transparent black.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            image: RgbaImage::new(canvas.width, canvas.height),
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.image.width()) && y < i64::from(self.image.height())
    }

    /// Overwrite one pixel. Coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: i64, y: i64, px: Rgba<u8>) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, px);
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        self.contains(x, y).then(|| *self.image.get_pixel(x as u32, y as u32))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;
