use crate::channel::TimeInterval;
use crate::math::stats::SampleSummary;
use serde::{Deserialize, Serialize};

/// One particle-motion sample in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub angle_deg: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(angle_deg: f64, radius: f64) -> Self {
        Self { angle_deg, radius }
    }
}

/// Demeaned particle-motion path; point order is the drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarDataset {
    pub name: String,
    pub points: Vec<PolarPoint>,
    pub north: SampleSummary,
    pub east: SampleSummary,
}

impl PolarDataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything a display needs to draw one particle-motion plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpmView {
    pub title: String,
    pub dataset: PolarDataset,
    pub back_azimuth_deg: f64,
    pub interval: TimeInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl PpmView {
    /// Series label in `"north east"` form.
    pub fn label(&self) -> &str {
        &self.dataset.name
    }
}
