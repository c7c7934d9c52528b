mod weight_init;

pub use weight_init::WeightInit;
