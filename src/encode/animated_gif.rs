use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::NaiveDateTime;

use crate::{
    foundation::{
        core::LoopCount,
        error::{SpiralError, SpiralResult},
    },
    pipeline::{animation::Animation, config::SpiralConfig},
};

/// `strftime` layout of the timestamp embedded in output names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<prefix>_<YYYYMMDD_HHMMSS>.gif`.
///
/// Names only have one-second resolution: two runs within the same second produce the same name
/// and the later one replaces the earlier file.
pub fn output_file_name(prefix: &str, timestamp: NaiveDateTime) -> String {
    format!("{prefix}_{}.gif", timestamp.format(TIMESTAMP_FORMAT))
}

pub fn ensure_parent_dir(path: &Path) -> SpiralResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Serialize `anim` as a GIF89a stream into `w` and hand the writer back.
///
/// The palette is written once as the global color table and each frame carries its own delay.
pub fn encode_animation<W: Write>(anim: &Animation, w: W) -> SpiralResult<W> {
    if anim.is_empty() {
        return Err(SpiralError::validation("animation has no frames"));
    }
    let width = u16::try_from(anim.canvas.width)
        .map_err(|_| SpiralError::validation("animation width exceeds the GIF limit"))?;
    let height = u16::try_from(anim.canvas.height)
        .map_err(|_| SpiralError::validation("animation height exceeds the GIF limit"))?;

    let mut encoder = gif::Encoder::new(w, width, height, &anim.palette.to_rgb_bytes())
        .map_err(|e| SpiralError::encode(format!("failed to start gif stream: {e}")))?;

    let repeat = match anim.loop_count {
        LoopCount::Infinite => gif::Repeat::Infinite,
        LoopCount::Finite(n) => gif::Repeat::Finite(n),
    };
    encoder
        .set_repeat(repeat)
        .map_err(|e| SpiralError::encode(format!("failed to write loop extension: {e}")))?;

    for (i, f) in anim.frames.iter().enumerate() {
        if f.frame.canvas != anim.canvas {
            return Err(SpiralError::validation(format!(
                "frame {i} is {}x{}, expected {}x{}",
                f.frame.canvas.width, f.frame.canvas.height, anim.canvas.width, anim.canvas.height
            )));
        }

        let frame = gif::Frame {
            width,
            height,
            delay: f.delay.0,
            buffer: Cow::Borrowed(f.frame.indices.as_slice()),
            ..gif::Frame::default()
        };
        encoder
            .write_frame(&frame)
            .map_err(|e| SpiralError::encode(format!("failed to write frame {i}: {e}")))?;
    }

    encoder
        .into_inner()
        .map_err(|e| SpiralError::encode(format!("failed to finish gif stream: {e}")))
}

/// Write `anim` to a timestamped file under the configured output directory.
///
/// Failing to create the file is reported with the offending path. The file handle is closed when
/// this function returns, whether encoding succeeded or not.
pub fn write_animation(
    anim: &Animation,
    config: &SpiralConfig,
    timestamp: NaiveDateTime,
) -> SpiralResult<PathBuf> {
    let path = config
        .output_dir()
        .join(output_file_name(&config.file_prefix, timestamp));
    ensure_parent_dir(&path)?;

    let file = File::create(&path)
        .with_context(|| format!("failed to create output file '{}'", path.display()))?;
    let mut out = encode_animation(anim, BufWriter::new(file))?;
    out.flush()
        .with_context(|| format!("failed to flush '{}'", path.display()))?;

    tracing::info!(path = %path.display(), frames = anim.len(), "animation written");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/animated_gif.rs"]
mod tests;
