use serde::{Deserialize, Serialize};

pub use crate::channel::{Channel, TimeInterval, TraceChannel};
pub use crate::display::{DisplaySink, PolarDataset, PolarPoint, PpmView};
pub use crate::processing::{PpmTransform, SampleFilter};

/// Largest paired window the polar transform accepts by default.
pub const DEFAULT_MAX_DATA_LENGTH: usize = 65_536;

/// Shared configuration for the particle-motion transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PpmConfig {
    pub max_data_length: usize,
    pub parallel_extraction: bool,
}

impl Default for PpmConfig {
    fn default() -> Self {
        Self {
            max_data_length: DEFAULT_MAX_DATA_LENGTH,
            parallel_extraction: true,
        }
    }
}

/// Failure reported by a channel that cannot produce a gapless window.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    #[error("no data in [{start}, {end})")]
    NoData { start: f64, end: f64 },
    #[error("gap of {length:.3}s at {at:.3}")]
    Gap { at: f64, length: f64 },
}

/// Failure reported by a sample filter.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{filter}: {reason}")]
pub struct FilterError {
    pub filter: String,
    pub reason: String,
}

impl FilterError {
    pub fn new(filter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            reason: reason.into(),
        }
    }
}

/// Common error type for the transform and its components.
#[derive(thiserror::Error, Debug)]
pub enum PpmError {
    #[error("{0}")]
    Validation(String),
    #[error("Channels have different sample rate ({north} Hz vs {east} Hz)")]
    SampleRateMismatch { north: f64, east: f64 },
    #[error("data gap in channel {channel}: {source}")]
    DataGap {
        channel: String,
        #[source]
        source: ChannelError,
    },
    #[error("filter failed on channel {channel}: {source}")]
    Filter {
        channel: String,
        #[source]
        source: FilterError,
    },
    #[error("Too many datapoints are selected ({size} > {max})")]
    Oversize { size: usize, max: usize },
    #[error("not enough samples (north {north}, east {east}, need {required})")]
    InsufficientData {
        north: usize,
        east: usize,
        required: usize,
    },
}

impl PpmError {
    /// True for problems with the caller's selection rather than the data.
    pub fn is_user_input(&self) -> bool {
        matches!(self, PpmError::Validation(_))
    }
}

pub type PpmResult<T> = Result<T, PpmError>;
