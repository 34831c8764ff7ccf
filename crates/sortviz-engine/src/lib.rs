//! Sorting engines and the lockstep driver for sortviz.
//!
//! [`MergeSort`] is the bottom-up merge sort state machine; it implements
//! [`Stepper`](sortviz_core::Stepper) so each call moves at most one
//! element. [`LockstepDriver`] owns the generator, the dataset and the
//! current engine, and is what a frame loop talks to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod driver;
pub mod merge;
pub mod metrics;

pub use command::{DriverCommand, ParseCommandError};
pub use config::{ConfigError, DriverConfig};
pub use driver::{LockstepDriver, TickOutcome};
pub use merge::MergeSort;
pub use metrics::{DriverMetrics, StepMetrics};
