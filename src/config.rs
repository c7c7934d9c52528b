use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    MlErr, Result,
    dataset::{DataDescriptor, FeatureMatrix},
    training::DeltaClamp,
};

/// The configuration of the learning algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    Perceptron {
        #[serde(default)]
        threshold: f64,
    },
    Delta {
        #[serde(default)]
        clamp: ClampConfig,
    },
}

/// The prediction policy of a delta-rule model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampConfig {
    #[default]
    Legacy,
    Threshold,
}

impl From<ClampConfig> for DeltaClamp {
    fn from(value: ClampConfig) -> Self {
        match value {
            ClampConfig::Legacy => DeltaClamp::Legacy,
            ClampConfig::Threshold => DeltaClamp::Threshold,
        }
    }
}

/// The configuration for the `ActFn` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActFnConfig {
    Step {
        #[serde(default = "one")]
        top: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        threshold: f64,
    },
    Sigmoid {
        #[serde(default = "one")]
        amp: f64,
    },
}

/// The configuration for the `WeightInit` enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitConfig {
    Const {
        value: f64,
    },
    Uniform {
        low: f64,
        high: f64,
    },
    Normal {
        #[serde(default)]
        mean: f64,
        #[serde(default = "one")]
        std_dev: f64,
    },
}

/// Where the labelled rows come from.
///
/// `label_index` defaults to `features`, the column right after the features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetConfig {
    Inline {
        features: usize,
        label_index: Option<usize>,
        rows: Vec<Vec<f64>>,
    },
    Local {
        features: usize,
        label_index: Option<usize>,
        path: PathBuf,
    },
}

impl DatasetConfig {
    pub fn descriptor(&self) -> DataDescriptor {
        let (features, label_index) = match self {
            DatasetConfig::Inline {
                features,
                label_index,
                ..
            }
            | DatasetConfig::Local {
                features,
                label_index,
                ..
            } => (*features, *label_index),
        };

        DataDescriptor::new(features, label_index.unwrap_or(features))
    }

    /// Reads the rows this configuration points to.
    ///
    /// # Returns
    /// The rows and their layout, or an error if the rows can't be read or are ragged.
    pub fn load(&self) -> Result<(FeatureMatrix, DataDescriptor)> {
        let matrix = match self {
            DatasetConfig::Inline { rows, .. } => FeatureMatrix::from_rows(rows)?,
            DatasetConfig::Local { path, .. } => read_csv(path)?,
        };

        Ok((matrix, self.descriptor()))
    }
}

/// The configuration of a whole training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    pub algorithm: AlgorithmConfig,
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub act_fn: Option<ActFnConfig>,
    pub init: Option<InitConfig>,
    pub seed: Option<u64>,
    pub dataset: DatasetConfig,
}

impl TrainerConfig {
    /// Parses and validates a configuration from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the JSON configuration file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the values serde can't.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() {
            return Err(MlErr::InvalidConfig(format!(
                "learning_rate must be finite, got {}",
                self.learning_rate
            )));
        }

        if let AlgorithmConfig::Perceptron { threshold } = self.algorithm {
            if !threshold.is_finite() {
                return Err(MlErr::InvalidConfig(format!(
                    "threshold must be finite, got {threshold}"
                )));
            }
        }

        Ok(())
    }
}

fn one() -> f64 {
    1.
}

fn read_csv(path: &Path) -> Result<FeatureMatrix> {
    let content = fs::read_to_string(path)?;
    let mut rows = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(',')
            .map(|v| {
                v.trim().parse::<f64>().map_err(|_| {
                    let line = i + 1;
                    MlErr::InvalidConfig(format!("dataset line {line}: cannot parse '{v}' as f64"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push(row);
    }

    FeatureMatrix::from_rows(rows)
}
