use std::env;

use anyhow::{Context, Result};
use linear_learning::{config::TrainerConfig, training::TrainerBuilder};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .context("usage: linear-learning <config.json>")?;

    let config = TrainerConfig::from_path(&path)
        .with_context(|| format!("cannot load config '{path}'"))?;
    let (matrix, descriptor) = config.dataset.load().context("cannot load dataset")?;
    info!(rows = matrix.nrows(), features = descriptor.features(); "dataset loaded");

    let mut trainer = TrainerBuilder::new().build(&config)?;
    let score = trainer.train(&matrix, &descriptor)?;

    println!("converged: {}", score.converged());
    println!("iterations: {}", score.iterations());
    println!("total error: {}", score.total_error());
    println!("weights: {:?}", score.weights());
    if let Some(bias) = score.bias() {
        println!("bias: {bias}");
    }
    println!("errors: {:?}", score.errors());

    let predictions = score.model().predict(&matrix, &descriptor)?;
    println!("predictions: {predictions:?}");

    Ok(())
}
