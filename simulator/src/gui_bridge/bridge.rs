use crate::generator::profile::{build_channel_pair_from_config, GeneratorConfig};
use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::Runner;
use log::{error, info, warn};
use ppmcore::display::{DisplaySink, PpmView};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Display bridge: collects transform outcomes and serves the latest
/// repainted frame over HTTP.
///
/// Results land in a pending frame; `request_repaint` publishes it and
/// starts an empty one, so a failed attempt clears the previous plot.
#[derive(Clone, Default)]
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
    pending: Arc<RwLock<VisualizationModel>>,
}

impl GuiBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the HTTP endpoint on a background thread.
    pub fn serve(&self, runner: Arc<Runner>) -> thread::JoinHandle<()> {
        let bridge = self.clone();
        let bridge_filter = warp::any().map(move || bridge.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let payload_route = warp::path("payload")
            .and(warp::get())
            .and(bridge_filter.clone())
            .map(|bridge: GuiBridge| warp::reply::json(&bridge.snapshot()));

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(bridge_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig, bridge: GuiBridge, runner: Arc<Runner>| async move {
                    let outcome = build_channel_pair_from_config(&config)
                        .and_then(|pair| runner.present(&pair, &bridge));
                    let reply = match outcome {
                        Ok(result) => {
                            if let Some(name) = config.scenario.as_ref() {
                                info!(
                                    "[GUI] Scenario {} -> azimuth {:.2}",
                                    name, result.back_azimuth_deg
                                );
                            }
                            warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "back_azimuth_deg": result.back_azimuth_deg,
                                    "points": result.point_count,
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            )
                        }
                        Err(err) => {
                            warn!("ingest-config error: {:#}", err);
                            warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "error",
                                    "message": format!("{:#}", err)
                                })),
                                StatusCode::UNPROCESSABLE_ENTITY,
                            )
                        }
                    };
                    Ok::<_, warp::Rejection>(reply)
                },
            );

        thread::spawn(move || {
            let routes = payload_route.or(generator_route);
            match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(async move {
                    warp::serve(routes).run(gui_bind_address()).await;
                }),
                Err(err) => error!("failed to build bridge runtime: {}", err),
            }
        })
    }

    /// Replaces the served frame directly.
    pub fn publish(&self, model: &VisualizationModel) {
        if let Ok(mut guard) = self.state.write() {
            *guard = model.clone();
            println!(
                "[GUI] {} -> {} points, azimuth {:?}",
                guard.title,
                guard.points.len(),
                guard.back_azimuth_deg
            );
        }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    pub fn snapshot(&self) -> VisualizationModel {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn stage(&self, model: VisualizationModel) {
        if let Ok(mut guard) = self.pending.write() {
            *guard = model;
        }
    }
}

impl DisplaySink for GuiBridge {
    fn show_ppm(&self, view: &PpmView) {
        self.stage(VisualizationModel::from_view(view));
    }

    fn show_error(&self, message: &str) {
        self.publish_status(&format!("Error: {}", message));
        self.stage(VisualizationModel::from_message(message));
    }

    fn show_warning(&self, message: &str) {
        self.publish_status(&format!("Warning: {}", message));
        self.stage(VisualizationModel::from_message(message));
    }

    fn request_repaint(&self) {
        let frame = match self.pending.write() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        let revision = self.snapshot().revision + 1;
        self.publish(&VisualizationModel { revision, ..frame });
    }
}
