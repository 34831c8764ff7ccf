//! Deterministic random draws for the sortviz workspace.
//!
//! The only consumer is the dataset shuffle that sets up each engine's
//! initial array, so the generator is deliberately tiny: a single `u32`
//! of xorshift state ([`XorShift32`]). Seeding reads the OS entropy source
//! and falls back to [`FALLBACK_SEED`] when it is unavailable; the caller
//! learns which happened through [`SeedSource`] and decides whether to log it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod seed;
pub mod shuffle;
pub mod xorshift;

pub use seed::{entropy_seed, seed_from_source, Seed, SeedSource};
pub use shuffle::{shuffle, shuffle_with, DrawMode};
pub use xorshift::{XorShift32, FALLBACK_SEED};
