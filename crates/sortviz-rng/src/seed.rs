//! Seeding from the OS entropy source with a fixed fallback.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::xorshift::{XorShift32, FALLBACK_SEED};

/// Where a [`Seed`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedSource {
    /// Read from the entropy source.
    Entropy,
    /// The entropy source failed or produced zero; [`FALLBACK_SEED`] was used.
    ///
    /// This is the reproducible degraded mode, not an error. Callers that
    /// care should log it.
    Fallback,
    /// Supplied by the caller.
    Explicit,
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "entropy"),
            Self::Fallback => write!(f, "fallback"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// A seed value together with its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed {
    /// The seed word. Never zero.
    pub value: u32,
    /// How the value was obtained.
    pub source: SeedSource,
}

impl Seed {
    /// A caller-chosen seed. Zero is replaced with [`FALLBACK_SEED`] but
    /// still reported as [`SeedSource::Explicit`].
    pub fn explicit(value: u32) -> Self {
        Self {
            value: if value == 0 { FALLBACK_SEED } else { value },
            source: SeedSource::Explicit,
        }
    }

    /// The fixed fallback seed.
    pub fn fallback() -> Self {
        Self {
            value: FALLBACK_SEED,
            source: SeedSource::Fallback,
        }
    }

    /// Build a generator from this seed.
    pub fn rng(&self) -> XorShift32 {
        XorShift32::new(self.value)
    }

    /// Whether this seed is the degraded fallback.
    pub fn is_fallback(&self) -> bool {
        self.source == SeedSource::Fallback
    }
}

/// Read a seed from the operating system's entropy source.
///
/// Falls back to [`FALLBACK_SEED`] if the source is unavailable.
pub fn entropy_seed() -> Seed {
    seed_from_source(&mut OsRng)
}

/// Read four bytes from `source` as a little-endian seed.
///
/// A failed read, or a read that produced zero (the xorshift fixed point),
/// yields [`Seed::fallback`].
pub fn seed_from_source<R: RngCore + ?Sized>(source: &mut R) -> Seed {
    let mut bytes = [0u8; 4];
    match source.try_fill_bytes(&mut bytes) {
        Ok(()) => match u32::from_le_bytes(bytes) {
            0 => Seed::fallback(),
            value => Seed {
                value,
                source: SeedSource::Entropy,
            },
        },
        Err(_) => Seed::fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Error;

    /// Entropy source that always fails.
    struct Unavailable;

    impl RngCore for Unavailable {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
            Err(Error::new("entropy source unavailable"))
        }
    }

    /// Entropy source that always yields the same word.
    struct Fixed(u32);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.copy_from_slice(&self.0.to_le_bytes()[..dest.len()]);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn failing_source_falls_back() {
        let seed = seed_from_source(&mut Unavailable);
        assert_eq!(seed, Seed::fallback());
        assert!(seed.is_fallback());
        assert_eq!(seed.value, FALLBACK_SEED);
    }

    #[test]
    fn zero_entropy_falls_back() {
        assert!(seed_from_source(&mut Fixed(0)).is_fallback());
    }

    #[test]
    fn entropy_word_is_used() {
        let seed = seed_from_source(&mut Fixed(0xDEAD_BEEF));
        assert_eq!(seed.value, 0xDEAD_BEEF);
        assert_eq!(seed.source, SeedSource::Entropy);
        assert_eq!(seed.rng(), XorShift32::new(0xDEAD_BEEF));
    }

    #[test]
    fn fallback_rngs_are_identical() {
        let mut a = Seed::fallback().rng();
        let mut b = seed_from_source(&mut Unavailable).rng();
        for _ in 0..100 {
            assert_eq!(a.advance(), b.advance());
        }
    }

    #[test]
    fn explicit_zero_is_replaced() {
        let seed = Seed::explicit(0);
        assert_eq!(seed.value, FALLBACK_SEED);
        assert_eq!(seed.source, SeedSource::Explicit);
        assert!(!seed.is_fallback());
    }

    #[test]
    fn os_seed_is_never_zero() {
        assert_ne!(entropy_seed().value, 0);
    }

    #[test]
    fn source_display() {
        assert_eq!(SeedSource::Entropy.to_string(), "entropy");
        assert_eq!(SeedSource::Fallback.to_string(), "fallback");
        assert_eq!(SeedSource::Explicit.to_string(), "explicit");
    }
}
