use rand::Rng;

/// Draws standard normal deviates with the polar form of the Box-Muller transform.
///
/// Every accepted pair of uniform draws yields two independent deviates: the first one is
/// returned right away and the second one is kept as a spare for the next call. The spare
/// belongs to this sampler, so independent random streams never share it.
pub struct NormalSampler<R: Rng> {
    rng: R,
    spare: Option<f64>,
}

impl<R: Rng> NormalSampler<R> {
    /// Creates a new `NormalSampler`.
    ///
    /// # Arguments
    /// * `rng` - The source of uniform random numbers.
    pub fn new(rng: R) -> Self {
        Self { rng, spare: None }
    }

    /// Whether the next call will be served from the cached spare deviate.
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Returns the underlying random number generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Samples a deviate from the standard normal distribution.
    pub fn sample(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        let (first, second) = self.polar_pair();
        self.spare = Some(second);
        first
    }

    /// Samples a deviate from a normal distribution with the given parameters.
    ///
    /// # Arguments
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    pub fn sample_with(&mut self, mean: f64, std_dev: f64) -> f64 {
        self.sample() * std_dev + mean
    }

    /// Samples `n` standard normal deviates, starting with the cached spare if there is one.
    pub fn sample_vec(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample()).collect()
    }

    /// Samples `n` deviates from a normal distribution with the given parameters.
    pub fn sample_vec_with(&mut self, mean: f64, std_dev: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample_with(mean, std_dev)).collect()
    }

    fn polar_pair(&mut self) -> (f64, f64) {
        loop {
            let x1 = self.rng.random::<f64>() * 2. - 1.;
            let x2 = self.rng.random::<f64>() * 2. - 1.;
            let w = x1 * x1 + x2 * x2;

            if w > 0. && w < 1. {
                let factor = ((-2. * w.ln()) / w).sqrt();
                return (x1 * factor, x2 * factor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    /// Counts how many 64 bit words were pulled from the inner generator.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst)
        }
    }

    fn seeded(seed: u64) -> NormalSampler<StdRng> {
        NormalSampler::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn large_sample_is_standard_normal() {
        let mut sampler = seeded(42);
        let n = 100_000;

        let xs = sampler.sample_vec(n);
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        assert_eq!(xs.len(), n);
        assert!(mean.abs() < 0.05, "mean: {mean}");
        assert!((var.sqrt() - 1.).abs() < 0.05, "std dev: {}", var.sqrt());
    }

    #[test]
    fn two_samples_consume_a_single_pair() {
        let rng = CountingRng {
            inner: StdRng::seed_from_u64(7),
            draws: 0,
        };
        let mut sampler = NormalSampler::new(rng);

        sampler.sample();
        let after_first = sampler.rng.draws;
        assert!(after_first >= 2 && after_first % 2 == 0);
        assert!(sampler.has_spare());

        sampler.sample();
        assert_eq!(sampler.rng.draws, after_first);
        assert!(!sampler.has_spare());

        sampler.sample();
        assert!(sampler.into_inner().draws > after_first);
    }

    #[test]
    fn sample_vec_drains_the_spare_first() {
        let mut a = seeded(3);
        let mut b = seeded(3);

        let _ = a.sample();
        let spare = a.sample();

        let _ = b.sample();
        let drained = b.sample_vec(3);

        assert_eq!(drained[0], spare);
        assert_eq!(drained.len(), 3);
    }

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(seeded(11).sample_vec(16), seeded(11).sample_vec(16));
    }

    #[test]
    fn parameters_shift_and_scale() {
        let standard = seeded(5).sample_vec(4);
        let scaled = seeded(5).sample_vec_with(10., 2., 4);

        for (z, x) in standard.iter().zip(&scaled) {
            assert!((z * 2. + 10. - x).abs() < 1e-12);
        }

        let single = seeded(5).sample_with(-1., 0.5);
        assert!((standard[0] * 0.5 - 1. - single).abs() < 1e-12);
    }

    #[test]
    fn deviates_are_finite() {
        let mut sampler = seeded(0);
        assert!(sampler.sample_vec(10_000).iter().all(|x| x.is_finite()));
    }
}
