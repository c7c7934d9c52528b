use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum MlErr {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    LabelOutOfBounds {
        index: usize,
        width: usize,
    },
    /// A weight or the bias stopped being finite after an update.
    NumericOverflow {
        epoch: usize,
        example: usize,
    },
    InvalidDistribution(String),
    InvalidConfig(String),
    Io(io::Error),
}

impl MlErr {
    /// Whether this error was raised while validating the shape or contents of the input,
    /// before any training took place.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MlErr::InvalidInput(_) | MlErr::SizeMismatch { .. } | MlErr::LabelOutOfBounds { .. }
        )
    }
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::LabelOutOfBounds { index, width } => write!(
                f,
                "label index {index} is out of bounds for rows of width {width}"
            ),
            MlErr::NumericOverflow { epoch, example } => write!(
                f,
                "the model diverged to a non finite value at epoch {epoch}, example {example}"
            ),
            MlErr::InvalidDistribution(msg) => write!(f, "invalid distribution: {msg}"),
            MlErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            MlErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MlErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<UniformError> for MlErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}

impl From<serde_json::Error> for MlErr {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}
