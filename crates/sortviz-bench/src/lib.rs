//! Benchmark profiles for the sortviz stepping engines.
//!
//! - [`shuffled_dataset`]: `1..=len` shuffled from a fixed seed
//! - [`reference_len`] / [`stress_len`]: the window-sized and large profiles
//! - [`driver_profile`]: a seeded [`DriverConfig`] with no frame budget in play

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sortviz_engine::DriverConfig;
use sortviz_rng::{shuffle_with, DrawMode, XorShift32};

/// Element count of the interactive default (one bar per 8 pixels).
pub const fn reference_len() -> usize {
    100
}

/// Element count for stress runs.
pub const fn stress_len() -> usize {
    100_000
}

/// `1..=len` shuffled with the uniform draw from `seed`.
///
/// # Panics
///
/// Panics if `len` exceeds `u32::MAX`.
pub fn shuffled_dataset(len: usize, seed: u32) -> Vec<u32> {
    let top = u32::try_from(len).expect("benchmark length fits in u32");
    let mut data: Vec<u32> = (1..=top).collect();
    let mut rng = XorShift32::new(seed);
    shuffle_with(&mut data, &mut rng, DrawMode::Uniform);
    data
}

/// Driver configuration for `len` elements with a fixed seed.
pub fn driver_profile(len: usize, seed: u32) -> DriverConfig {
    DriverConfig {
        len,
        seed: Some(seed),
        ..DriverConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_is_deterministic_permutation() {
        let a = shuffled_dataset(reference_len(), 7);
        let b = shuffled_dataset(reference_len(), 7);
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn driver_profile_validates() {
        let config = driver_profile(stress_len(), 1);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, Some(1));
    }
}
