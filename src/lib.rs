//! spiralgif procedurally generates looping animated GIFs of a rotating Fibonacci spiral.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: a Fibonacci-like [`RadiusSequence`] with a random start scale gives the arm
//!    radii. It is generated once and shared by every frame.
//! 2. **Rasterize**: per frame, a randomized diagonal gradient fills a [`PixelBuffer`], then one
//!    quarter-circle arc per radius is drawn on top, each with its own color and thickness.
//! 3. **Quantize**: a [`Quantizer`] reduces each buffer to a two-color palette
//!    ([`FloydSteinberg`] error diffusion by default).
//! 4. **Encode**: the indexed frames and their shared delay are written as an infinitely looping
//!    GIF named after the local time ([`write_animation`]).
//!
//! All randomness flows through a caller-provided [`rand::Rng`], so a seeded generator reproduces
//! an animation exactly.
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod generate;
mod pipeline;
mod quantize;
mod render;

pub use encode::animated_gif::{
    TIMESTAMP_FORMAT, encode_animation, ensure_parent_dir, output_file_name, write_animation,
};
pub use foundation::core::{Canvas, FrameDelay, FrameIndex, LoopCount};
pub use foundation::error::{SpiralError, SpiralResult};
pub use generate::color::{PERTURBATION_MAX, psychedelic_color};
pub use generate::sequence::{RadiusSequence, SCALE_RANGE};
pub use pipeline::animation::{Animation, AnimationFrame, DELAY_RANGE, render_animation};
pub use pipeline::config::{
    DEFAULT_ARM_COUNT, DEFAULT_FILE_PREFIX, DEFAULT_FRAME_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    SpiralConfig,
};
pub use quantize::floyd_steinberg::FloydSteinberg;
pub use quantize::palette::Palette;
pub use quantize::quantizer::{NearestColor, QuantizedFrame, Quantizer};
pub use render::arc::{ANGLE_STEP, arc_bounds, arc_geometry, draw_thick_arc, sample_angles};
pub use render::background::{GradientShift, SHIFT_MAX, draw_gradient_background, fill_gradient};
pub use render::buffer::PixelBuffer;
pub use render::spiral::{
    ARM_SWEEP, ArmStroke, MAX_ROTATION, THICKNESS_RANGE, draw_fibonacci_spiral,
};
