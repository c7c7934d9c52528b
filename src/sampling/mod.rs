mod normal;

pub use normal::NormalSampler;
