use std::path::{Path, PathBuf};

use crate::foundation::{
    core::Canvas,
    error::{SpiralError, SpiralResult},
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FRAME_COUNT: u32 = 30;
pub const DEFAULT_ARM_COUNT: usize = 12;
pub const DEFAULT_FILE_PREFIX: &str = "unique_psychedelic_fibonacci_spiral";

/// Fixed parameters of one generator run.
///
/// `Default` yields the canonical 800x800, 30-frame, 12-arm animation written to the working
/// directory. Other values exist for tests and library callers; the binary never changes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpiralConfig {
    pub canvas: Canvas,
    pub frame_count: u32,
    /// Number of spiral arms, which is also the radius sequence length.
    pub arm_count: usize,
    pub file_prefix: String,
    /// Directory the animation is written to; `None` means the working directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            frame_count: DEFAULT_FRAME_COUNT,
            arm_count: DEFAULT_ARM_COUNT,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            output_dir: None,
        }
    }
}

impl SpiralConfig {
    pub fn validate(&self) -> SpiralResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SpiralError::validation("canvas width/height must be non-zero"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            // GIF logical screen dimensions are 16-bit.
            return Err(SpiralError::validation(format!(
                "canvas {}x{} exceeds the GIF limit of {}x{}",
                self.canvas.width,
                self.canvas.height,
                u16::MAX,
                u16::MAX
            )));
        }
        if self.frame_count == 0 {
            return Err(SpiralError::validation("frame_count must be non-zero"));
        }
        if self.arm_count < 2 {
            return Err(SpiralError::validation(format!(
                "arm_count must be >= 2, got {}",
                self.arm_count
            )));
        }
        if self.file_prefix.is_empty() || self.file_prefix.contains(['/', '\\']) {
            return Err(SpiralError::validation(format!(
                "file_prefix '{}' must be a non-empty bare file name",
                self.file_prefix
            )));
        }
        Ok(())
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or_else(|| Path::new(""))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
