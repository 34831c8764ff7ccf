//! Core types and traits for the sortviz workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the stepping contract every animated sorter implements ([`Stepper`]),
//! the value describing what a single step did ([`StepEffect`]), and the
//! tick counter used by drivers ([`TickId`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod effect;
pub mod id;
pub mod traits;

pub use effect::StepEffect;
pub use id::TickId;
pub use traits::{Steps, Stepper};
