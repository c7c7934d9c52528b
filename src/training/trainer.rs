use super::TrainingScore;
use crate::{
    Result,
    dataset::{DataDescriptor, FeatureMatrix},
};

pub trait Trainer {
    /// Trains a fresh model over the labelled rows of `matrix`.
    fn train(
        &mut self,
        matrix: &FeatureMatrix,
        descriptor: &DataDescriptor,
    ) -> Result<TrainingScore>;
}
