use std::ops::Range;

use rand::Rng;

use crate::{
    foundation::{
        core::{Canvas, FrameDelay, FrameIndex, LoopCount},
        error::SpiralResult,
    },
    generate::sequence::RadiusSequence,
    pipeline::config::SpiralConfig,
    quantize::{
        palette::Palette,
        quantizer::{QuantizedFrame, Quantizer},
    },
    render::{
        background::draw_gradient_background, buffer::PixelBuffer, spiral::draw_fibonacci_spiral,
    },
};

/// Range of the run-wide frame delay, in hundredths of a second.
pub const DELAY_RANGE: Range<u16> = 5..15;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    pub frame: QuantizedFrame,
    pub delay: FrameDelay,
}

/// Every quantized frame of one run, ready to be encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    pub canvas: Canvas,
    pub palette: Palette,
    pub frames: Vec<AnimationFrame>,
    pub loop_count: LoopCount,
}

impl Animation {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Render and quantize every frame of the spiral animation.
///
/// Randomness is consumed in a fixed order: the radius sequence, the shared frame delay, then
/// per frame the background shifts followed by the spiral (rotation, then color and thickness per
/// arm). The same seed therefore always reproduces the same animation.
#[tracing::instrument(skip(quantizer, rng))]
pub fn render_animation<R: Rng + ?Sized>(
    config: &SpiralConfig,
    quantizer: &dyn Quantizer,
    rng: &mut R,
) -> SpiralResult<Animation> {
    config.validate()?;

    let sequence = RadiusSequence::generate(rng, config.arm_count)?;
    let delay = FrameDelay(rng.random_range(DELAY_RANGE));
    tracing::info!(
        scale = sequence.scale(),
        delay_cs = delay.0,
        "radius sequence and frame delay chosen"
    );

    let center = config.canvas.center();
    let mut frames = Vec::with_capacity(config.frame_count as usize);
    for f in 0..config.frame_count {
        let frame = FrameIndex(f);
        let mut buf = PixelBuffer::new(config.canvas);
        let shift = draw_gradient_background(&mut buf, frame, rng);
        let strokes = draw_fibonacci_spiral(&mut buf, &sequence, center, frame, rng);
        let quantized = quantizer.quantize(buf.as_image());
        tracing::debug!(
            frame = f,
            ?shift,
            rotation = strokes.first().map(|s| s.start_angle),
            "frame rendered"
        );
        frames.push(AnimationFrame {
            frame: quantized,
            delay,
        });
    }

    Ok(Animation {
        canvas: config.canvas,
        palette: quantizer.palette().clone(),
        frames,
        loop_count: LoopCount::Infinite,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/animation.rs"]
mod tests;
