//! Uniform random indices from a cryptographically secure source.

use std::num::NonZeroUsize;

use ::rand::rngs::OsRng;
use rand_core::{CryptoRng, Error, RngCore};

/// Source of uniformly distributed indices.
///
/// Generation only ever asks for `[0, bound)`, so everything that drives
/// the algorithm (the OS source, a seeded generator in tests, a scripted
/// mock) goes through this one seam.
pub trait IndexSource {
    fn index(&mut self, bound: NonZeroUsize) -> Result<usize, Error>;
}

/// Rejection-sampled indices over a cryptographic generator.
pub struct SecureIndex<R> {
    rng: R,
}

impl SecureIndex<OsRng> {
    /// Indices backed by the operating system's entropy source.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> SecureIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    fn next_word(&mut self) -> Result<u64, Error> {
        let mut bytes = [0u8; 8];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }
}

impl<R: RngCore + CryptoRng> IndexSource for SecureIndex<R> {
    fn index(&mut self, bound: NonZeroUsize) -> Result<usize, Error> {
        let bound = bound.get() as u64;
        // Largest multiple of `bound` that fits; words at or past it would
        // favour the low residues.
        let zone = u64::MAX - (u64::MAX % bound);

        loop {
            let word = self.next_word()?;
            if word < zone {
                return Ok((word % bound) as usize);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    use super::testing::Broken;
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut source = SecureIndex::new(ChaCha8Rng::seed_from_u64(1));
        for _ in 0..100 {
            assert_eq!(source.index(nz(1)).unwrap(), 0);
        }
    }

    #[test]
    fn stays_in_range_and_covers_every_value() {
        let mut source = SecureIndex::new(ChaCha8Rng::seed_from_u64(7));
        let mut seen = [0usize; 10];
        for _ in 0..10_000 {
            let i = source.index(nz(10)).unwrap();
            assert!(i < 10);
            seen[i] += 1;
        }
        // Expected 1000 each; a biased sampler drifts far outside this.
        assert!(seen.iter().all(|&n| (850..1150).contains(&n)), "{seen:?}");
    }

    #[test]
    fn same_seed_same_indices() {
        let mut a = SecureIndex::new(ChaCha8Rng::seed_from_u64(42));
        let mut b = SecureIndex::new(ChaCha8Rng::seed_from_u64(42));
        for bound in 1..50 {
            assert_eq!(a.index(nz(bound)).unwrap(), b.index(nz(bound)).unwrap());
        }
    }

    #[test]
    fn huge_bound_is_accepted() {
        let mut source = SecureIndex::new(ChaCha8Rng::seed_from_u64(3));
        let bound = nz(usize::MAX);
        assert!(source.index(bound).unwrap() < usize::MAX);
    }

    #[test]
    fn source_failure_is_returned() {
        let mut source = SecureIndex::new(Broken);
        assert!(source.index(nz(5)).is_err());
    }

    #[test]
    fn os_source_works() {
        let mut source = SecureIndex::os();
        assert!(source.index(nz(26)).unwrap() < 26);
    }
}
