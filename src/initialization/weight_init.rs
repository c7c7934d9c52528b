use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{MlErr, Result, sampling::NormalSampler};

/// How the weights of a model are filled before its first epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightInit {
    /// Every weight takes the same value.
    Const(f64),
    /// Weights are drawn uniformly from `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Weights are drawn from a normal distribution.
    Normal { mean: f64, std_dev: f64 },
}

impl WeightInit {
    /// All weights start at zero.
    pub fn zeros() -> Self {
        Self::Const(0.)
    }

    /// Non negative seeds in `[0, 1)`.
    pub fn seeds() -> Self {
        Self::Uniform { low: 0., high: 1. }
    }

    /// Generates `n` weights.
    ///
    /// # Arguments
    /// * `n` - The amount of weights to generate.
    /// * `rng` - A random number generator.
    ///
    /// # Returns
    /// An error if the distribution parameters are invalid: `low >= high`, a non finite bound
    /// or a non finite or negative standard deviation.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        match *self {
            WeightInit::Const(value) => {
                if !value.is_finite() {
                    return Err(MlErr::InvalidDistribution(format!(
                        "constant weight {value} is not finite"
                    )));
                }

                Ok(vec![value; n])
            }
            WeightInit::Uniform { low, high } => {
                let distribution = Uniform::new(low, high)?;
                Ok((0..n).map(|_| distribution.sample(rng)).collect())
            }
            WeightInit::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0. {
                    return Err(MlErr::InvalidDistribution(format!(
                        "normal distribution needs a finite mean and a finite non negative standard deviation, got mean {mean} and std dev {std_dev}"
                    )));
                }

                let mut sampler = NormalSampler::new(rng);
                Ok(sampler.sample_vec_with(mean, std_dev, n))
            }
        }
    }
}
