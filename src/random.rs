use crate::error::IdleError;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random draws the idle engine needs.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`, or 0 when `n` is 0.
    fn uniform_int(&mut self, n: u32) -> u32;

    /// Uniform real in `[0.0, 1.0)`.
    fn uniform_real01(&mut self) -> f32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform_int(&mut self, n: u32) -> u32 {
        (**self).uniform_int(n)
    }

    fn uniform_real01(&mut self) -> f32 {
        (**self).uniform_real01()
    }
}

/// Seeded PRNG, reproducible for a given seed.
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed once from the operating system entropy source.
    pub fn from_entropy() -> Result<Self, IdleError> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)?;
        Ok(Self::from_seed(u64::from_le_bytes(bytes)))
    }

    /// The seed, for replaying a session.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    fn uniform_real01(&mut self) -> f32 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut first = SeededRandom::from_seed(42);
        let mut second = SeededRandom::from_seed(42);
        for _ in 0..100 {
            assert_eq!(first.uniform_int(17), second.uniform_int(17));
            assert_eq!(first.uniform_real01(), second.uniform_real01());
        }
    }

    #[test]
    fn test_ranges() {
        let mut random = SeededRandom::from_seed(7);
        assert_eq!(random.uniform_int(0), 0);
        for _ in 0..1000 {
            assert!(random.uniform_int(3) < 3);
            let real = random.uniform_real01();
            assert!((0.0..1.0).contains(&real));
        }
    }

    #[test]
    fn test_entropy_seeding() {
        let random = SeededRandom::from_entropy().expect("entropy");
        let replay = SeededRandom::from_seed(random.seed());
        assert_eq!(random.seed(), replay.seed());
    }
}
