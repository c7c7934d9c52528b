pub mod activations;
mod model;

pub use model::{LinearModel, OutputPolicy};
