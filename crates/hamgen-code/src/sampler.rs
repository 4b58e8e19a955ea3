use num_bigint::RandBigInt;
use rand::RngCore;

use crate::word::Codeword;

/// Source of candidate codewords for the acceptance search.
///
/// Implementations carry no memory of earlier draws; deduplication is the
/// search's job.
pub trait CandidateSampler {
    /// Draws one candidate of exactly `width` bits.
    fn sample(&mut self, width: u32) -> Codeword;
}

/// Uniform sampler: every bit drawn independently from {0, 1}.
#[derive(Debug)]
pub struct UniformSampler<'a, R: RngCore + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: RngCore + ?Sized> UniformSampler<'a, R> {
    /// Wraps the provided random source.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + ?Sized> CandidateSampler for UniformSampler<'_, R> {
    fn sample(&mut self, width: u32) -> Codeword {
        let value = self.rng.gen_biguint(u64::from(width));
        Codeword::from_sampled(value, width)
    }
}
