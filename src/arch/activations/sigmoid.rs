/// The logistic function, scaled by an amplitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sigmoid {
    amp: f64,
}

impl Sigmoid {
    pub fn new(amp: f64) -> Self {
        Self { amp }
    }

    pub fn amp(&self) -> f64 {
        self.amp
    }

    pub fn f(&self, z: f64) -> f64 {
        self.amp / (1. + (-z).exp())
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(1.)
    }
}
