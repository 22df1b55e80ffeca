use crate::generator::template::sine_wave;
use anyhow::{ensure, Context};
use ppmcore::channel::{Segment, TimeInterval, TraceChannel};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic horizontal channel pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub north_name: String,
    pub east_name: String,
    pub samples: usize,
    pub sample_rate: f64,
    pub start_time: f64,
    /// Bearing the synthetic plane wave arrives from.
    pub azimuth_deg: f64,
    pub frequency: f64,
    pub phase_deg: f64,
    pub amplitude: f64,
    pub noise: f64,
    pub seed: u64,
    /// Drop `gap_samples` samples starting at this index.
    pub gap_at: Option<usize>,
    pub gap_samples: usize,
    /// Hand the channels back east first.
    pub swap_selection: bool,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            north_name: "BHN".into(),
            east_name: "BHE".into(),
            samples: 400,
            sample_rate: 40.0,
            start_time: 0.0,
            azimuth_deg: 30.0,
            frequency: 1.0,
            phase_deg: 45.0,
            amplitude: 5000.0,
            noise: 0.0,
            seed: 0,
            gap_at: None,
            gap_samples: 10,
            swap_selection: false,
            description: None,
            scenario: None,
        }
    }
}

/// Two synthetic channels in selection order plus the window covering them.
#[derive(Debug, Clone)]
pub struct SyntheticPair {
    pub channels: [TraceChannel; 2],
    pub interval: TimeInterval,
}

impl SyntheticPair {
    pub fn selection(&self) -> [&TraceChannel; 2] {
        [&self.channels[0], &self.channels[1]]
    }
}

fn build_component(
    config: &GeneratorConfig,
    wave: &[f64],
    weight: f64,
    rng: &mut StdRng,
) -> Vec<i32> {
    wave.iter()
        .map(|&value| {
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            (config.amplitude * weight * value + jitter).round() as i32
        })
        .collect()
}

fn build_channel(config: &GeneratorConfig, name: &str, samples: Vec<i32>) -> TraceChannel {
    let mut channel = TraceChannel::new(name, config.sample_rate);
    match config.gap_at {
        Some(gap_at) if gap_at < samples.len() => {
            let resume = (gap_at + config.gap_samples).min(samples.len());
            let head = samples[..gap_at].to_vec();
            let tail = samples[resume..].to_vec();
            channel.push_segment(Segment::new(config.start_time, head));
            if !tail.is_empty() {
                channel.push_segment(Segment::new(
                    config.start_time + resume as f64 / config.sample_rate,
                    tail,
                ));
            }
        }
        _ => channel.push_segment(Segment::new(config.start_time, samples)),
    }
    channel
}

pub fn build_channel_pair_from_config(config: &GeneratorConfig) -> anyhow::Result<SyntheticPair> {
    ensure!(
        config.sample_rate > 0.0,
        "sample rate must be positive, got {}",
        config.sample_rate
    );
    ensure!(config.samples > 0, "generator needs at least one sample");

    let wave = sine_wave(
        config.samples,
        config.sample_rate,
        config.frequency,
        config.phase_deg,
    );
    let azimuth = config.azimuth_deg.to_radians();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let north_samples = build_component(config, &wave, azimuth.cos(), &mut rng);
    let east_samples = build_component(config, &wave, azimuth.sin(), &mut rng);

    let north = build_channel(config, &config.north_name, north_samples);
    let east = build_channel(config, &config.east_name, east_samples);

    let duration = config.samples as f64 / config.sample_rate;
    let interval = TimeInterval::new(config.start_time, config.start_time + duration)
        .context("building generator interval")?;

    let channels = if config.swap_selection {
        [east, north]
    } else {
        [north, east]
    };
    Ok(SyntheticPair { channels, interval })
}

pub fn build_channel_pair(samples: usize, azimuth_deg: f64) -> anyhow::Result<SyntheticPair> {
    let config = GeneratorConfig {
        samples,
        azimuth_deg,
        ..Default::default()
    };
    build_channel_pair_from_config(&config)
}
