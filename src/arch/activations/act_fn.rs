use super::{Sigmoid, Step};

/// An activation function, passed around by value. `Custom` wraps any plain function.
#[derive(Clone, Copy, Debug)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Step(Step),
    Custom(fn(f64) -> f64),
}
use ActFn::*;

impl ActFn {
    pub fn sigmoid(amp: f64) -> Self {
        Sigmoid(Sigmoid::new(amp))
    }

    pub fn step(top: f64, bottom: f64, tresh: f64) -> Self {
        Step(Step::new(top, bottom, tresh))
    }

    /// The boolean step used by the perceptron by default.
    pub fn boolean() -> Self {
        Step(Step::boolean())
    }

    pub fn custom(f: fn(f64) -> f64) -> Self {
        Custom(f)
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Sigmoid(a) => a.f(x),
            Step(a) => a.f(x),
            Custom(f) => f(x),
        }
    }
}
