/// A hard threshold: `top` strictly above `tresh`, `bottom` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    top: f64,
    bottom: f64,
    tresh: f64,
}

impl Step {
    pub fn new(top: f64, bottom: f64, tresh: f64) -> Self {
        Self { top, bottom, tresh }
    }

    /// The boolean step, `1` for positive inputs and `0` otherwise.
    pub fn boolean() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn f(&self, z: f64) -> f64 {
        if z > self.tresh {
            self.top
        } else {
            self.bottom
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::boolean()
    }
}
