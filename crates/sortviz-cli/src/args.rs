//! Command-line arguments.

use clap::Parser;
use sortviz_engine::DriverConfig;
use sortviz_rng::DrawMode;

/// Animate a step-wise merge sort in the terminal.
///
/// While running, type `s` and Enter to reshuffle, `q` and Enter to quit.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sortviz", version, about)]
pub struct Args {
    /// Number of elements to sort (the values 1..=LEN).
    #[arg(long, default_value_t = 100)]
    pub len: usize,

    /// Fixed RNG seed. Without it the OS entropy source is used.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Shuffle with the legacy draw (always a single cycle).
    #[arg(long)]
    pub legacy_draw: bool,

    /// Target frame length in milliseconds.
    #[arg(long, default_value_t = 30)]
    pub frame_ms: u64,

    /// Height of the bar chart in text rows.
    #[arg(long, default_value_t = 24)]
    pub height: usize,

    /// Stop after this many frames.
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Do not draw frames; only log.
    #[arg(long)]
    pub no_render: bool,

    /// Exit as soon as the array is sorted.
    #[arg(long)]
    pub exit_when_done: bool,
}

impl Args {
    /// The driver configuration these arguments describe.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            len: self.len,
            seed: self.seed,
            draw: if self.legacy_draw {
                DrawMode::Legacy
            } else {
                DrawMode::Uniform
            },
            frame_ms: self.frame_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_driver_defaults() {
        let args = Args::parse_from(["sortviz"]);
        assert_eq!(args.driver_config(), DriverConfig::default());
        assert_eq!(args.height, 24);
        assert!(!args.no_render);
    }

    #[test]
    fn flags_map_onto_config() {
        let args = Args::parse_from([
            "sortviz",
            "--len",
            "16",
            "--seed",
            "42",
            "--legacy-draw",
            "--frame-ms",
            "5",
        ]);
        let config = args.driver_config();
        assert_eq!(config.len, 16);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.draw, DrawMode::Legacy);
        assert_eq!(config.frame_ms, 5);
    }
}
