//! Sortviz: sorting algorithms that advance one observable step at a time.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! sortviz sub-crates. Adding `sortviz` as a single dependency is enough for
//! most users; the `sortviz` binary lives in `sortviz-cli`.
//!
//! # Quick start
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let mut rng = XorShift32::new(42);
//! let mut data: Vec<u32> = (1..=32).collect();
//! shuffle(&mut data, &mut rng);
//!
//! let mut sort = MergeSort::new(data);
//! let mut frames = 0;
//! while !sort.is_done() {
//!     // A renderer would draw `sort.snapshot()` here.
//!     sort.step();
//!     frames += 1;
//! }
//! assert!(frames > 32);
//! assert_eq!(sort.snapshot(), (1..=32).collect::<Vec<u32>>().as_slice());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortviz-core` | `Stepper` trait, `StepEffect`, `TickId` |
//! | [`rng`] | `sortviz-rng` | Xorshift generator, seeding, shuffle |
//! | [`engine`] | `sortviz-engine` | `MergeSort`, `LockstepDriver`, config, commands |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core stepping contract (`sortviz-core`).
///
/// [`types::Stepper`] is the extension point for new algorithms.
pub use sortviz_core as types;

/// Deterministic randomness (`sortviz-rng`).
///
/// [`rng::XorShift32`] with [`rng::shuffle`] and [`rng::shuffle_with`];
/// [`rng::entropy_seed`] for unseeded runs.
pub use sortviz_rng as rng;

/// Engines and the frame driver (`sortviz-engine`).
///
/// [`engine::MergeSort`] for direct stepping, [`engine::LockstepDriver`]
/// for a render loop that accepts commands.
pub use sortviz_engine as engine;

/// Common imports for typical sortviz usage.
///
/// ```rust
/// use sortviz::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use sortviz_core::{StepEffect, Stepper, TickId};

    // Randomness
    pub use sortviz_rng::{shuffle, shuffle_with, DrawMode, Seed, SeedSource, XorShift32};

    // Engine
    pub use sortviz_engine::{
        ConfigError, DriverCommand, DriverConfig, LockstepDriver, MergeSort, StepMetrics,
        TickOutcome,
    };
}
