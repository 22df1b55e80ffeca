use crate::display::{PolarDataset, PolarPoint};
use crate::math::stats::SampleSummary;
use crate::prelude::{PpmError, PpmResult};
use crate::telemetry::log::LogManager;

/// Turns a north/east sample pair into a demeaned polar path.
pub struct PolarDatasetBuilder {
    max_data_length: usize,
    logger: LogManager,
}

impl PolarDatasetBuilder {
    pub fn new(max_data_length: usize) -> Self {
        Self {
            max_data_length,
            logger: LogManager::new("polar"),
        }
    }

    pub fn max_data_length(&self) -> usize {
        self.max_data_length
    }

    /// Both the means and the emitted points cover the shared length
    /// `min(north.len(), east.len())`; trailing samples of the longer
    /// window are ignored.
    pub fn build(&self, north: &[i32], east: &[i32], label: &str) -> PpmResult<PolarDataset> {
        let size = north.len().min(east.len());
        if size > self.max_data_length {
            return Err(PpmError::Oversize {
                size,
                max: self.max_data_length,
            });
        }

        let insufficient = || PpmError::InsufficientData {
            north: north.len(),
            east: east.len(),
            required: 1,
        };
        let north_summary = SampleSummary::over(north, size).ok_or_else(insufficient)?;
        let east_summary = SampleSummary::over(east, size).ok_or_else(insufficient)?;

        let north_mean = north_summary.mean as f64;
        let east_mean = east_summary.mean as f64;
        let points: Vec<PolarPoint> = north[..size]
            .iter()
            .zip(east[..size].iter())
            .map(|(&n, &e)| {
                let x = n as f64 - north_mean;
                let y = e as f64 - east_mean;
                PolarPoint::new(y.atan2(x).to_degrees(), x.hypot(y))
            })
            .collect();

        self.logger.record(&format!(
            "{}: {} points, means ({}, {})",
            label,
            points.len(),
            north_summary.mean,
            east_summary.mean
        ));

        Ok(PolarDataset {
            name: label.to_string(),
            points,
            north: north_summary,
            east: east_summary,
        })
    }
}
