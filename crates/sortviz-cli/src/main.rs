//! `sortviz`: animate a step-wise merge sort in the terminal.
//!
//! Each frame runs one driver tick (at most one sorting step), draws the
//! array as text bars, and sleeps out the rest of the frame budget. Lines
//! typed on stdin are delivered to the driver as commands.

#![forbid(unsafe_code)]

mod args;
mod input;
mod pacing;
mod render;

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use sortviz_engine::LockstepDriver;
use sortviz_rng::SeedSource;
use tracing::{info, metadata::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::pacing::FrameClock;
use crate::render::TextRenderer;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing()?;

    let mut driver = LockstepDriver::new(args.driver_config())?;
    let seed = driver.seed();
    match seed.source {
        SeedSource::Fallback => {
            warn!(seed = seed.value, "entropy source unavailable; using fallback seed")
        }
        source => info!(seed = seed.value, %source, len = args.len, "seeded"),
    }

    let _reader = input::spawn_stdin_reader(driver.command_sender())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let frames = run(&args, &mut driver, &mut out)?;

    let m = driver.metrics();
    info!(
        frames,
        loads = m.loads,
        writes = m.writes,
        reshuffles = m.reshuffles,
        completions = m.completions,
        "run finished"
    );
    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::default()
            .add_directive("sortviz_engine=info".parse()?)
            .add_directive(LevelFilter::INFO.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// The frame loop. Returns the number of frames run.
fn run<W: Write>(args: &Args, driver: &mut LockstepDriver, out: &mut W) -> io::Result<u64> {
    let renderer = TextRenderer::new(args.height);
    let mut clock = FrameClock::new(driver.config().frame_budget());
    let mut frames = 0;

    loop {
        clock.begin();
        let outcome = driver.tick();
        if outcome.is_quit() {
            info!(tick = %outcome.tick(), "quit requested");
            break;
        }
        frames += 1;

        if !args.no_render {
            let effect = match outcome {
                sortviz_engine::TickOutcome::Stepped { effect, .. } => Some(effect),
                _ => None,
            };
            let status = format!(
                "tick {}  {}  [s]huffle [q]uit",
                outcome.tick(),
                if driver.is_done() { "sorted" } else { "sorting" },
            );
            renderer.draw(out, driver.snapshot(), effect, &status)?;
        }

        if args.exit_when_done && driver.is_done() {
            break;
        }
        if args.max_frames.is_some_and(|max| frames >= max) {
            break;
        }
        clock.sleep_remaining();
    }
    Ok(frames)
}
