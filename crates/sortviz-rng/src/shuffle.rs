//! In-place Fisher–Yates shuffle.

use crate::xorshift::XorShift32;

/// Which range draw the shuffle uses for its swap partner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Inclusive uniform draw; every permutation is reachable.
    #[default]
    Uniform,
    /// The historical draw, which never picks the current position. The
    /// result is always a single cycle (Sattolo's algorithm), but old seeds
    /// replay bit for bit.
    Legacy,
}

/// Shuffle `items` in place with the uniform draw.
///
/// Slices shorter than two elements are left untouched.
pub fn shuffle<T>(items: &mut [T], rng: &mut XorShift32) {
    shuffle_with(items, rng, DrawMode::Uniform);
}

/// Shuffle `items` in place, swapping each position `i` in `0..len-1` with
/// a partner drawn from `[i, len-1]` according to `mode`.
///
/// # Panics
///
/// Panics if `items.len() - 1` does not fit in a `u32`.
pub fn shuffle_with<T>(items: &mut [T], rng: &mut XorShift32, mode: DrawMode) {
    if items.len() < 2 {
        return;
    }
    let last = u32::try_from(items.len() - 1).expect("shuffle supports at most 2^32 elements");
    for i in 0..last {
        let j = match mode {
            DrawMode::Uniform => rng.next_in_range(i, last),
            DrawMode::Legacy => rng.legacy_next_in_range(i, last),
        };
        items.swap(i as usize, j as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn short_slices_untouched() {
        let mut rng = XorShift32::new(5);
        let mut empty: [u32; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [7];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [7]);
        // No draws were consumed.
        assert_eq!(rng, XorShift32::new(5));
    }

    #[test]
    fn deterministic_for_equal_seeds() {
        let mut a: Vec<u32> = (1..=100).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut XorShift32::new(42));
        shuffle(&mut b, &mut XorShift32::new(42));
        assert_eq!(a, b);
        assert_ne!(a, (1..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn draws_len_minus_one_words() {
        let mut rng = XorShift32::new(9);
        let mut items = [0u8; 10];
        shuffle(&mut items, &mut rng);
        let mut reference = XorShift32::new(9);
        for _ in 0..9 {
            reference.advance();
        }
        assert_eq!(rng, reference);
    }

    #[test]
    fn legacy_mode_matches_historical_sequence() {
        // Seed 42: first draw is 11_355_432, so position 0 swaps with
        // 0 + 1 + 11_355_432 % 3 = 1.
        let mut items = [10, 20, 30, 40];
        let mut rng = XorShift32::new(42);
        shuffle_with(&mut items, &mut rng, DrawMode::Legacy);
        let mut expected = [10, 20, 30, 40];
        let mut check = XorShift32::new(42);
        for i in 0..3u32 {
            let x = check.advance();
            let j = i + 1 + x % (3 - i);
            expected.swap(i as usize, j as usize);
        }
        assert_eq!(items, expected);
        assert_eq!(expected[0], 20);
    }

    #[test]
    fn legacy_mode_produces_single_cycle() {
        let mut rng = XorShift32::new(1234);
        for n in 2..40usize {
            let mut perm: Vec<usize> = (0..n).collect();
            shuffle_with(&mut perm, &mut rng, DrawMode::Legacy);
            let mut seen = 0;
            let mut at = 0;
            loop {
                at = perm[at];
                seen += 1;
                if at == 0 {
                    break;
                }
            }
            assert_eq!(seen, n, "permutation {perm:?} is not one cycle");
        }
    }

    #[test]
    fn uniform_mode_covers_all_permutations_evenly() {
        let mut seeder = ChaCha8Rng::seed_from_u64(0x5EED);
        let mut rng = XorShift32::new(seeder.next_u32());
        let trials = 24_000;
        let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
        for _ in 0..trials {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);
        let expected = trials / 24;
        for (perm, count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "{perm:?} appeared {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn uniform_mode_varies_across_seeds() {
        let mut seeder = ChaCha8Rng::seed_from_u64(7);
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut XorShift32::new(seeder.next_u32()));
            distinct.insert(items);
        }
        assert_eq!(distinct.len(), 24);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u32>(), items in prop::collection::vec(any::<i16>(), 0..64)) {
            let mut items = items;
            let mut sorted_before = items.clone();
            sorted_before.sort();
            shuffle(&mut items, &mut XorShift32::new(seed));
            items.sort();
            prop_assert_eq!(items, sorted_before);
        }

        #[test]
        fn legacy_shuffle_has_no_fixed_points(seed in any::<u32>(), n in 2usize..64) {
            let mut perm: Vec<usize> = (0..n).collect();
            shuffle_with(&mut perm, &mut XorShift32::new(seed), DrawMode::Legacy);
            for (i, &p) in perm.iter().enumerate() {
                prop_assert_ne!(i, p);
            }
        }
    }
}
