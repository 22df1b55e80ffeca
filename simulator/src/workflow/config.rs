use anyhow::Context;
use ppmcore::prelude::{PpmConfig, DEFAULT_MAX_DATA_LENGTH};
use ppmcore::processing::FftBandPass;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub max_data_length: usize,
    pub parallel_extraction: bool,
    pub low_pass_hz: Option<f64>,
    pub high_pass_hz: Option<f64>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_data_length: DEFAULT_MAX_DATA_LENGTH,
            parallel_extraction: true,
            low_pass_hz: None,
            high_pass_hz: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(max_data_length: usize, low_pass_hz: Option<f64>) -> Self {
        Self {
            max_data_length,
            low_pass_hz,
            ..Default::default()
        }
    }

    pub fn to_ppm_config(&self) -> PpmConfig {
        PpmConfig {
            max_data_length: self.max_data_length,
            parallel_extraction: self.parallel_extraction,
        }
    }

    /// Filter described by the configured corners, if any.
    pub fn build_filter(&self) -> Option<FftBandPass> {
        match (self.high_pass_hz, self.low_pass_hz) {
            (Some(low), Some(high)) => Some(FftBandPass::band_pass(low, high)),
            (None, Some(corner)) => Some(FftBandPass::low_pass(corner)),
            (Some(corner), None) => Some(FftBandPass::high_pass(corner)),
            (None, None) => None,
        }
    }
}
