use std::path::PathBuf;

use crate::data::SyntheticConfig;
use crate::error::{Error, Result};
use crate::ml::DEFAULT_K;

/// Parameters of one end-to-end run: data generation, split, model and export.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of synthetic students to generate.
    pub samples: usize,
    /// Fraction of the shuffled students used as the reference store.
    pub train_ratio: f64,
    /// Neighbor count used when a request does not carry one.
    pub k: usize,
    /// Seed for data generation and shuffling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Where to write the generated dataset. `None` skips the export.
    pub csv_path: Option<PathBuf>,
    pub synthetic: SyntheticConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            train_ratio: 0.8,
            k: DEFAULT_K,
            seed: None,
            csv_path: Some(PathBuf::from("students.csv")),
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default values: 200 samples, an 80/20 split and k = 5.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_train_ratio(mut self, train_ratio: f64) -> Self {
        self.train_ratio = train_ratio;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Customize the export path, or disable the export with `None`.
    pub fn with_csv_path(mut self, csv_path: Option<PathBuf>) -> Self {
        self.csv_path = csv_path;
        self
    }

    pub fn with_synthetic(mut self, synthetic: SyntheticConfig) -> Self {
        self.synthetic = synthetic;
        self
    }

    /// Rejects settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InvalidConfig("samples must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(Error::InvalidSplitRatio(self.train_ratio));
        }
        if self.k == 0 {
            return Err(Error::InvalidConfig("k must be > 0".into()));
        }
        Ok(())
    }
}
