mod builder;
mod delta;
mod model_trainer;
mod perceptron;
mod rule;
mod score;
mod trainer;

pub use builder::TrainerBuilder;
pub use delta::{DeltaClamp, DeltaRule};
pub use model_trainer::ModelTrainer;
pub use perceptron::Perceptron;
pub use rule::LearningRule;
pub use score::TrainingScore;
pub use trainer::Trainer;
