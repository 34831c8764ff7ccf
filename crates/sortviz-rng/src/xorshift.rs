//! The [`XorShift32`] generator.

use rand::{Error, RngCore, SeedableRng};

/// Seed used when no entropy is available, and in place of a zero seed.
pub const FALLBACK_SEED: u32 = 42;

/// 32-bit xorshift generator (shifts 13, 17, 5).
///
/// Not cryptographically secure. A zero state is a fixed point of the
/// transform, so construction replaces a zero seed with [`FALLBACK_SEED`].
///
/// # Examples
///
/// ```
/// use sortviz_rng::XorShift32;
///
/// let mut a = XorShift32::new(7);
/// let mut b = XorShift32::new(7);
/// assert_eq!(a.next_in_range(1, 6), b.next_in_range(1, 6));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from `seed`. Zero is replaced with [`FALLBACK_SEED`].
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Current internal word.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Apply the xorshift transform once and return the new state.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Draw uniformly from the inclusive range `[low, high]`.
    ///
    /// Uses a plain modulo reduction of one 32-bit draw, so ranges that do
    /// not divide 2^32 carry the usual small bias.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        assert!(low <= high, "empty range: {low} > {high}");
        let span = u64::from(high - low) + 1;
        let offset = u64::from(self.advance()) % span;
        // offset < span <= 2^32, so this fits.
        low + offset as u32
    }

    /// Draw with the historical formula `low + 1 + x % (high - low)`.
    ///
    /// Kept so historical seeds replay bit for bit. The result
    /// lies in `[low + 1, high]` and never equals `low`.
    ///
    /// # Panics
    ///
    /// Panics unless `low < high` (the formula divides by `high - low`).
    pub fn legacy_next_in_range(&mut self, low: u32, high: u32) -> u32 {
        assert!(low < high, "legacy draw needs low < high, got [{low}, {high}]");
        let x = self.advance();
        low + 1 + x % (high - low)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.advance());
        let hi = u64::from(self.advance());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.advance().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
