use crate::prelude::*;
use std::path::Path;

/// Network topology and initialization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Standard deviation of the normal distribution the weights are drawn from.
    pub init_std: f64,
    pub init_seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            input_size: 4,
            hidden_size: 5,
            output_size: 3,
            init_std: 0.01,
            init_seed: 42,
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 || self.hidden_size == 0 || self.output_size == 0 {
            return Err(NNError::InvalidConfiguration(
                "Layer dimensions must be greater than 0".to_string(),
            ));
        }
        if !(self.init_std.is_finite() && self.init_std > 0.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "init_std must be positive, got {}",
                self.init_std
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Log the cost every `report_every` epochs; 0 turns progress logging off.
    pub report_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            epochs: 1000,
            report_every: 100,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(NNError::InvalidConfiguration(
                "epochs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the dataset is partitioned before training.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    pub test_size: f64,
    pub random_state: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            random_state: 50,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "test_size must lie in (0, 1), got {}",
                self.test_size
            )));
        }
        Ok(())
    }
}

/// Complete run configuration. Any subset of fields may be given in a JSON
/// file; missing ones keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub train: TrainConfig,
    pub split: SplitConfig,
}

impl Config {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        self.train.validate()?;
        self.split.validate()
    }
}
