use crate::generator::profile::SyntheticPair;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use ppmcore::display::{DisplaySink, PpmView};
use ppmcore::processing::{FftBandPass, PpmTransform, SampleFilter};
use std::sync::Arc;

pub struct WorkflowResult {
    pub title: String,
    pub point_count: usize,
    pub back_azimuth_deg: f64,
    pub view: PpmView,
}

impl From<PpmView> for WorkflowResult {
    fn from(view: PpmView) -> Self {
        Self {
            title: view.title.clone(),
            point_count: view.dataset.len(),
            back_azimuth_deg: view.back_azimuth_deg,
            view,
        }
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    transform: Arc<PpmTransform>,
    filter: Option<FftBandPass>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        let transform = Arc::new(PpmTransform::new(config.to_ppm_config()));
        let filter = config.build_filter();
        Self {
            config,
            transform,
            filter,
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn transform(&self) -> &PpmTransform {
        &self.transform
    }

    fn filter(&self) -> Option<&dyn SampleFilter> {
        self.filter.as_ref().map(|f| f as &dyn SampleFilter)
    }

    pub fn execute(&self, pair: &SyntheticPair) -> anyhow::Result<WorkflowResult> {
        let view = self
            .transform
            .transform(&pair.selection(), &pair.interval, self.filter())
            .context("running particle-motion transform")?;
        Ok(view.into())
    }

    /// Like `execute`, but also reports the outcome to a display.
    pub fn present(
        &self,
        pair: &SyntheticPair,
        sink: &dyn DisplaySink,
    ) -> anyhow::Result<WorkflowResult> {
        let view = self
            .transform
            .present(&pair.selection(), &pair.interval, self.filter(), sink)
            .context("presenting particle-motion transform")?;
        Ok(view.into())
    }
}
