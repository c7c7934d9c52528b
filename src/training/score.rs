use crate::arch::LinearModel;

/// The outcome of a training run.
///
/// Fields are private so the result can't be altered once the run returns.
#[derive(Debug, Clone)]
pub struct TrainingScore {
    model: LinearModel,
    errors: Vec<f64>,
    history: Vec<f64>,
    converged: bool,
}

impl TrainingScore {
    pub(crate) fn new(
        model: LinearModel,
        errors: Vec<f64>,
        history: Vec<f64>,
        converged: bool,
    ) -> Self {
        Self {
            model,
            errors,
            history,
            converged,
        }
    }

    /// The trained model.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Consumes the score, keeping only the trained model.
    pub fn into_model(self) -> LinearModel {
        self.model
    }

    pub fn weights(&self) -> &[f64] {
        self.model.weights()
    }

    pub fn bias(&self) -> Option<f64> {
        self.model.bias()
    }

    /// The raw error of every example during the last epoch. All zeros if no epoch ran.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// The amount of epochs that were run, whether the run converged or not.
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    /// Whether the convergence criterion was met before running out of epochs.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The total error of the last epoch, `0` if no epoch ran.
    pub fn total_error(&self) -> f64 {
        self.history.last().copied().unwrap_or(0.)
    }

    /// The total error of every epoch, in order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}
