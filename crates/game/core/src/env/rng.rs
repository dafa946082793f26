//! Seeded randomness for world generation.
//!
//! Every draw is a pure function of its seed, so a world seed reproduces the
//! hazard layout exactly.

/// Source of seeded draws. `next_u32` must be a pure function of `seed`.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Draw in `min..=max` by modulo reduction.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Fisher-Yates shuffle. Each swap draws from its own derived seed so the
    /// permutation depends only on `seed` and the slice length.
    fn shuffle<T>(&self, seed: u64, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let roll = self.range(compute_seed(seed, i as u64, 0, 0), 0, i as u32);
            items.swap(i, roll as usize);
        }
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn advance(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn permute(state: u64) -> u32 {
        let mixed = (((state >> 18) ^ state) >> 27) as u32;
        mixed.rotate_right((state >> 59) as u32)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::permute(Self::advance(seed))
    }
}

/// Derives the seed of one draw from the world seed. `step` is the draw
/// index, `stream` separates the cell shuffle (0) from the pit count (1).
pub fn compute_seed(world_seed: u64, step: u64, stream: u32, context: u32) -> u64 {
    let mut hash = world_seed;

    hash ^= step.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // murmur3 finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_deterministic_permutation() {
        let rng = PcgRng;
        let mut first: Vec<u32> = (0..15).collect();
        let mut second = first.clone();

        rng.shuffle(42, &mut first);
        rng.shuffle(42, &mut second);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn range_stays_inclusive() {
        let rng = PcgRng;
        for seed in 0..200 {
            let value = rng.range(seed, 2, 3);
            assert!((2..=3).contains(&value));
        }
        assert_eq!(rng.range(7, 5, 5), 5);
    }
}
