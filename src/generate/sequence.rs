use std::ops::RangeInclusive;

use rand::Rng;

use crate::foundation::error::{SpiralError, SpiralResult};

/// Range the shared start value of the sequence is drawn from.
pub const SCALE_RANGE: RangeInclusive<u64> = 1..=10;

/// Fibonacci-like radii for the spiral arms.
///
/// The first two entries share a random scale and every later entry is the sum of the two
/// before it. The sequence is generated once per run and reused for every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusSequence {
    radii: Vec<u64>,
}

impl RadiusSequence {
    /// Draw a scale from [`SCALE_RANGE`] and expand it to `len` radii.
    ///
    /// `len` is validated before any randomness is consumed.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> SpiralResult<Self> {
        if len < 2 {
            return Err(SpiralError::validation(format!(
                "radius sequence needs at least 2 entries, got {len}"
            )));
        }
        let scale = rng.random_range(SCALE_RANGE);
        Self::from_scale(scale, len)
    }

    /// Deterministic construction for a known scale.
    pub fn from_scale(scale: u64, len: usize) -> SpiralResult<Self> {
        if len < 2 {
            return Err(SpiralError::validation(format!(
                "radius sequence needs at least 2 entries, got {len}"
            )));
        }
        if scale == 0 {
            return Err(SpiralError::validation("radius sequence scale must be > 0"));
        }

        let mut radii = Vec::with_capacity(len);
        radii.push(scale);
        radii.push(scale);
        for i in 2..len {
            let next = radii[i - 1].checked_add(radii[i - 2]).ok_or_else(|| {
                SpiralError::validation(format!("radius sequence overflows at entry {i}"))
            })?;
            radii.push(next);
        }
        Ok(Self { radii })
    }

    pub fn scale(&self) -> u64 {
        self.radii[0]
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.radii
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.radii.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/sequence.rs"]
mod tests;
