use crate::foundation::error::{SpiralError, SpiralResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> SpiralResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpiralError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Integer center of the canvas (truncating division).
    pub fn center(self) -> (i64, i64) {
        (i64::from(self.width) / 2, i64::from(self.height) / 2)
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Display duration of one animation frame, in hundredths of a second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameDelay(pub u16);

impl FrameDelay {
    pub fn as_millis(self) -> u32 {
        u32::from(self.0) * 10
    }
}

/// How many times a viewer should replay the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopCount {
    #[default]
    Infinite,
    Finite(u16),
}

impl LoopCount {
    /// Container encoding where `0` means "loop forever".
    pub fn as_raw(self) -> u16 {
        match self {
            Self::Infinite => 0,
            Self::Finite(n) => n,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
