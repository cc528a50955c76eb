use crate::domain::model::{Draw, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
use crate::utils::error::{LottoError, Result};
use rand::Rng;
use std::collections::BTreeSet;

/// Upper bound on single-number draws before the random source is
/// considered broken.
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct NumberSampler {
    max_attempts: usize,
}

impl Default for NumberSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSampler {
    pub fn new() -> Self {
        Self {
            max_attempts: MAX_SAMPLING_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn sample(&self) -> Result<Draw> {
        self.sample_with(&mut rand::rng())
    }

    /// Rejection sampling: draw uniformly from the domain and keep distinct
    /// values until six are collected. The set is ordered, so the result is
    /// ascending.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Result<Draw> {
        let mut picked = BTreeSet::new();
        let mut attempts = 0;

        while picked.len() < DRAW_SIZE {
            if attempts >= self.max_attempts {
                tracing::error!(
                    "Sampler collected only {} distinct numbers after {} draws",
                    picked.len(),
                    attempts
                );
                return Err(LottoError::GenerationExhausted { attempts });
            }
            attempts += 1;
            picked.insert(rng.random_range(MIN_NUMBER..=MAX_NUMBER));
        }

        tracing::debug!("Sampled {} distinct numbers in {} draws", DRAW_SIZE, attempts);

        let mut numbers = [0u8; DRAW_SIZE];
        for (slot, number) in numbers.iter_mut().zip(picked) {
            *slot = number;
        }

        Draw::new(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Emits the same word forever, so every draw lands on the same number.
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_sample_is_six_distinct_ascending_numbers_in_domain() {
        let sampler = NumberSampler::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let draw = sampler.sample_with(&mut rng).unwrap();
            let numbers = draw.numbers();

            assert_eq!(numbers.len(), DRAW_SIZE);
            assert!(draw.is_ascending());
            assert!(numbers.iter().all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)));
        }
    }

    #[test]
    fn test_sample_with_thread_rng() {
        let draw = NumberSampler::new().sample().unwrap();
        assert!(draw.is_ascending());
    }

    #[test]
    fn test_sampling_is_uniform_over_domain() {
        const SAMPLES: usize = 100_000;

        let sampler = NumberSampler::new();
        let mut rng = StdRng::seed_from_u64(20_241_017);
        let mut counts = [0usize; MAX_NUMBER as usize + 1];

        for _ in 0..SAMPLES {
            for &n in sampler.sample_with(&mut rng).unwrap().numbers() {
                counts[n as usize] += 1;
            }
        }

        let expected = (SAMPLES * DRAW_SIZE) as f64 / MAX_NUMBER as f64;
        for number in MIN_NUMBER..=MAX_NUMBER {
            let observed = counts[number as usize] as f64;
            let deviation = (observed - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "number {} appeared {} times, expected about {}",
                number,
                observed,
                expected
            );
        }
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_broken_random_source_exhausts() {
        let sampler = NumberSampler::with_max_attempts(50);
        let err = sampler.sample_with(&mut StuckRng).unwrap_err();

        assert!(matches!(err, LottoError::GenerationExhausted { attempts: 50 }));
        assert!(!err.is_recoverable());
    }
}
