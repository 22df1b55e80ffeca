use anyhow::Context;
use clap::Parser;
use generator::profile::build_channel_pair;
use gui_bridge::bridge::GuiBridge;
use ppmcore::prelude::DEFAULT_MAX_DATA_LENGTH;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Particle-motion workflow driver")]
struct Args {
    /// Run a single synthetic pair through the transform and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_MAX_DATA_LENGTH)]
    max_data_length: usize,
    /// Low-pass corner in Hz applied to both channels
    #[arg(long)]
    low_pass: Option<f64>,
    /// Bearing of the synthetic wave in degrees
    #[arg(long, default_value_t = 30.0)]
    azimuth: f64,
    #[arg(long, default_value_t = 400)]
    samples: usize,
    /// Keep the GUI bridge alive for incoming generator requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.max_data_length, args.low_pass)
    };

    let runner = Runner::new(workflow_config);
    let gui_bridge = GuiBridge::new();
    let pair = build_channel_pair(args.samples, args.azimuth)?;

    if args.offline {
        let result = runner.present(&pair, &gui_bridge)?;

        println!(
            "Offline run -> {}, {} points, back-azimuth {:.2} deg",
            result.title, result.point_count, result.back_azimuth_deg
        );
        gui_bridge.publish_status("Offline workflow results ready.");

        let metrics = runner.transform().metrics();
        let report = format!(
            "title={:?} points={} back_azimuth={:.4} generated={:.4} max_data_length={} filter={:?} processed={} errors={}\n",
            result.title,
            result.point_count,
            result.back_azimuth_deg,
            args.azimuth,
            runner.config().max_data_length,
            result.view.filter,
            metrics.processed,
            metrics.errors
        );
        let report_path = PathBuf::from("tools/data/offline_ppm.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        let _server = gui_bridge.serve(Arc::new(runner.clone()));
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
