//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is the builder-input for a
//! [`LockstepDriver`](crate::LockstepDriver). [`validate()`](DriverConfig::validate)
//! checks structural invariants before anything is allocated or seeded.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use sortviz_rng::DrawMode;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DriverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two elements; there is nothing to animate.
    LengthTooSmall {
        /// The configured length.
        len: usize,
    },
    /// The dataset `1..=len` does not fit in `u32`.
    LengthOverflow {
        /// The configured length.
        len: usize,
    },
    /// `frame_ms` is zero.
    ZeroFrameBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooSmall { len } => {
                write!(f, "len {len} is below minimum of 2")
            }
            Self::LengthOverflow { len } => {
                write!(f, "len {len} exceeds u32::MAX")
            }
            Self::ZeroFrameBudget => write!(f, "frame_ms must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── DriverConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of elements; the dataset is `1..=len`. Default: 100.
    pub len: usize,
    /// Fixed seed. `None` reads the OS entropy source. Default: `None`.
    pub seed: Option<u32>,
    /// Range draw used by the shuffle. Default: [`DrawMode::Uniform`].
    pub draw: DrawMode,
    /// Target frame length in milliseconds. Default: 30.
    pub frame_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            len: 100,
            seed: None,
            draw: DrawMode::Uniform,
            frame_ms: 30,
        }
    }
}

impl DriverConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.len < 2 {
            return Err(ConfigError::LengthTooSmall { len: self.len });
        }
        if u32::try_from(self.len).is_err() {
            return Err(ConfigError::LengthOverflow { len: self.len });
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::ZeroFrameBudget);
        }
        Ok(())
    }

    /// The frame budget as a [`Duration`].
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
