//! Randomness used by maze generation.
//!
//! Generators only ever draw through `RandomSource`, so tests can script every draw and
//! production code can hand in a seeded generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::errors::*;

pub trait RandomSource {
    /// A uniformly chosen integer in `[0, upper)`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> Result<usize>;

    /// Uniformly permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index_below(&mut self, upper: usize) -> Result<usize> {
        Ok(self.gen_range(0..upper))
    }

    #[inline]
    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        SliceRandom::shuffle(items, self);
        Ok(())
    }
}

/// A generator that replays the same draws for the same seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}
