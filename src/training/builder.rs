use rand::{SeedableRng, rngs::StdRng};

use super::{DeltaRule, ModelTrainer, Perceptron, Trainer};
use crate::{
    Result,
    arch::activations::ActFn,
    config::{ActFnConfig, AlgorithmConfig, InitConfig, TrainerConfig},
    initialization::WeightInit,
};

/// Builds `Trainer`s given a configuration.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following a configuration.
    ///
    /// Whatever the configuration leaves out takes the algorithm's default: a boolean step
    /// and uniform `[0, 1)` seeds for the perceptron, a unit sigmoid and zeroed weights for
    /// the delta rule.
    ///
    /// # Arguments
    /// * `config` - The configuration for the trainer.
    ///
    /// # Returns
    /// The trainer, or an error if the configuration doesn't validate.
    pub fn build(&self, config: &TrainerConfig) -> Result<Box<dyn Trainer>> {
        config.validate()?;

        let rng = self.generate_rng(config.seed);
        let max_iterations = config.max_iterations;

        let trainer: Box<dyn Trainer> = match config.algorithm {
            AlgorithmConfig::Perceptron { threshold } => {
                let mut rule = Perceptron::new(config.learning_rate, threshold);
                if let Some(act_fn) = config.act_fn {
                    rule = rule.with_act_fn(self.resolve_act_fn(act_fn));
                }
                if let Some(init) = config.init {
                    rule = rule.with_init(self.resolve_init(init));
                }

                Box::new(ModelTrainer::new(rule, max_iterations, rng))
            }
            AlgorithmConfig::Delta { clamp } => {
                let mut rule = DeltaRule::new(config.learning_rate).with_clamp(clamp.into());
                if let Some(act_fn) = config.act_fn {
                    rule = rule.with_act_fn(self.resolve_act_fn(act_fn));
                }
                if let Some(init) = config.init {
                    rule = rule.with_init(self.resolve_init(init));
                }

                Box::new(ModelTrainer::new(rule, max_iterations, rng))
            }
        };

        Ok(trainer)
    }

    fn resolve_act_fn(&self, config: ActFnConfig) -> ActFn {
        match config {
            ActFnConfig::Step {
                top,
                bottom,
                threshold,
            } => ActFn::step(top, bottom, threshold),
            ActFnConfig::Sigmoid { amp } => ActFn::sigmoid(amp),
        }
    }

    fn resolve_init(&self, config: InitConfig) -> WeightInit {
        match config {
            InitConfig::Const { value } => WeightInit::Const(value),
            InitConfig::Uniform { low, high } => WeightInit::Uniform { low, high },
            InitConfig::Normal { mean, std_dev } => WeightInit::Normal { mean, std_dev },
        }
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
