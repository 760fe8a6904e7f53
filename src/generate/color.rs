use image::Rgba;
use rand::Rng;

use crate::foundation::core::FrameIndex;

/// Upper bound (exclusive) of the per-channel random perturbation.
pub const PERTURBATION_MAX: u32 = 50;

const CHANNEL_MODULUS: u32 = 255;

/// Per-channel weights applied to `(arm index, frame index)` for r, g and b.
const ARM_WEIGHTS: [u32; 3] = [15, 33, 55];
const FRAME_WEIGHTS: [u32; 3] = [5, 7, 11];

/// Opaque color for spiral arm `arm` in `frame`.
///
/// Each channel is `(arm * w_arm + frame * w_frame + noise) % 255` with a fresh
/// `noise` in `[0, PERTURBATION_MAX)`, drawn in r, g, b order. No channel ever reaches 255.
pub fn psychedelic_color<R: Rng + ?Sized>(rng: &mut R, arm: usize, frame: FrameIndex) -> Rgba<u8> {
    let mut px = [0u8, 0, 0, u8::MAX];
    for (c, out) in px.iter_mut().take(3).enumerate() {
        let noise = rng.random_range(0..PERTURBATION_MAX);
        *out = channel(arm, frame, ARM_WEIGHTS[c], FRAME_WEIGHTS[c], noise);
    }
    Rgba(px)
}

fn channel(arm: usize, frame: FrameIndex, arm_weight: u32, frame_weight: u32, noise: u32) -> u8 {
    let arm = (arm as u64) * u64::from(arm_weight);
    let frame = u64::from(frame.0) * u64::from(frame_weight);
    ((arm + frame + u64::from(noise)) % u64::from(CHANNEL_MODULUS)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/generate/color.rs"]
mod tests;
