use serde::{Deserialize, Serialize};

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[i32]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| (v as f64) * (v as f64)).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Integer mean of the first `len` samples, truncated toward zero.
    pub fn truncated_mean(samples: &[i32], len: usize) -> i64 {
        let len = len.min(samples.len());
        if len == 0 {
            return 0;
        }
        let sum: i64 = samples[..len].iter().map(|&v| v as i64).sum();
        sum / len as i64
    }
}

/// Extremes and integer mean of a sample window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub min: i32,
    pub max: i32,
    pub mean: i64,
}

impl SampleSummary {
    /// Summary over the first `len` samples; `None` when that prefix is empty.
    pub fn over(samples: &[i32], len: usize) -> Option<Self> {
        let prefix = &samples[..len.min(samples.len())];
        let min = *prefix.iter().min()?;
        let max = *prefix.iter().max()?;
        Some(Self {
            min,
            max,
            mean: StatsHelper::truncated_mean(prefix, prefix.len()),
        })
    }
}
