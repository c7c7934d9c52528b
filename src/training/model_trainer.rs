use log::{debug, info, warn};
use rand::Rng;

use super::{LearningRule, Trainer, TrainingScore};
use crate::{
    MlErr, Result,
    dataset::{DataDescriptor, Dataset, FeatureMatrix},
};

/// A model `Trainer`. Runs full batch epochs over a dataset, delegating the algorithm
/// specific decisions to its `LearningRule`.
pub struct ModelTrainer<L, R>
where
    L: LearningRule,
    R: Rng,
{
    rule: L,
    max_iterations: usize,
    rng: R,
}

impl<L, R> ModelTrainer<L, R>
where
    L: LearningRule,
    R: Rng,
{
    /// Returns a new `ModelTrainer`.
    ///
    /// # Arguments
    /// * `rule` - The learning rule to train with.
    /// * `max_iterations` - The maximum amount of epochs to run.
    /// * `rng` - A random number generator, used to initialize the weights.
    pub fn new(rule: L, max_iterations: usize, rng: R) -> Self {
        Self {
            rule,
            max_iterations,
            rng,
        }
    }

    pub fn rule(&self) -> &L {
        &self.rule
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Runs epochs until the rule reports convergence or `max_iterations` epochs went by.
    ///
    /// # Arguments
    /// * `matrix` - The labelled rows.
    /// * `descriptor` - The layout of the rows.
    ///
    /// # Returns
    /// The training score, or an error if the input is invalid or the model diverged.
    pub fn train(
        &mut self,
        matrix: &FeatureMatrix,
        descriptor: &DataDescriptor,
    ) -> Result<TrainingScore> {
        let dataset = Dataset::new(matrix, descriptor)?;
        let mut model = self.rule.init_model(dataset.dims(), &mut self.rng)?;

        let mut errors = vec![0.; dataset.len()];
        let mut history = Vec::with_capacity(self.max_iterations.min(1024));
        let mut converged = false;

        for epoch in 0..self.max_iterations {
            let mut total = 0.;

            for (example, (x, label)) in dataset.examples().enumerate() {
                let output = model.output(x);
                let error = label - output;

                errors[example] = error;
                total = self.rule.accumulate(total, error);
                self.rule.update(&mut model, x, output, error);

                if !model.is_finite() {
                    return Err(MlErr::NumericOverflow { epoch, example });
                }
            }

            history.push(total);
            debug!(epoch = epoch, total_error = total; "epoch finished");

            if self.rule.converged(total) {
                converged = true;
                break;
            }
        }

        let epochs = history.len();
        if converged {
            info!(epochs = epochs; "training converged");
        } else {
            warn!(epochs = epochs; "training stopped without converging");
        }

        Ok(TrainingScore::new(model, errors, history, converged))
    }
}

impl<L, R> Trainer for ModelTrainer<L, R>
where
    L: LearningRule,
    R: Rng,
{
    fn train(
        &mut self,
        matrix: &FeatureMatrix,
        descriptor: &DataDescriptor,
    ) -> Result<TrainingScore> {
        self.train(matrix, descriptor)
    }
}
