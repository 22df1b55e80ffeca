use std::f64::consts::PI;

/// Unit-amplitude sine sampled at `sample_rate`, starting at `phase_deg`.
pub fn sine_wave(length: usize, sample_rate: f64, frequency: f64, phase_deg: f64) -> Vec<f64> {
    let phase = phase_deg.to_radians();
    (0..length)
        .map(|i| (2.0 * PI * frequency * i as f64 / sample_rate + phase).sin())
        .collect()
}
