use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

/// Generate a looping psychedelic Fibonacci spiral GIF in the current directory.
#[derive(Parser, Debug)]
#[command(name = "spiralgif", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_nanos() as u64;
    tracing::info!(seed, "seeded random source");
    let mut rng = StdRng::seed_from_u64(seed);

    let config = spiralgif::SpiralConfig::default();
    let quantizer = spiralgif::FloydSteinberg::default();
    let anim = spiralgif::render_animation(&config, &quantizer, &mut rng)?;

    let now = chrono::Local::now().naive_local();
    let path = spiralgif::write_animation(&anim, &config, now)?;

    println!(
        "Unique Psychedelic Fibonacci Spiral GIF generated: {}",
        path.display()
    );
    Ok(())
}
