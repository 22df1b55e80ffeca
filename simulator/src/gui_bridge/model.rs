use ppmcore::display::{PolarPoint, PpmView};
use serde::{Deserialize, Serialize};

/// State served to the plot front-end.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub title: String,
    pub label: String,
    pub points: Vec<PolarPoint>,
    pub back_azimuth_deg: Option<f64>,
    pub filter: Option<String>,
    pub message: Option<String>,
    pub revision: u64,
}

impl VisualizationModel {
    pub fn from_view(view: &PpmView) -> Self {
        Self {
            title: view.title.clone(),
            label: view.label().to_string(),
            points: view.dataset.points.clone(),
            back_azimuth_deg: Some(view.back_azimuth_deg),
            filter: view.filter.clone(),
            ..Default::default()
        }
    }

    /// Empty plot carrying only a message.
    pub fn from_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Default::default()
        }
    }
}
