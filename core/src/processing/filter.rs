use crate::math::fft::FftHelper;
use crate::prelude::FilterError;
use num_complex::Complex64;

/// Filter collaborator applied to each raw window before the transform.
///
/// Implementations must return exactly one output sample per input sample.
pub trait SampleFilter: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, samples: &[i32], sample_rate: f64) -> Result<Vec<i32>, FilterError>;
}

/// Brick-wall band-pass filter in the frequency domain.
#[derive(Debug, Clone)]
pub struct FftBandPass {
    name: String,
    low_hz: f64,
    high_hz: f64,
}

impl FftBandPass {
    pub fn band_pass(low_hz: f64, high_hz: f64) -> Self {
        Self {
            name: format!("band-pass {}-{} Hz", low_hz, high_hz),
            low_hz,
            high_hz,
        }
    }

    pub fn low_pass(corner_hz: f64) -> Self {
        Self {
            name: format!("low-pass {} Hz", corner_hz),
            low_hz: 0.0,
            high_hz: corner_hz,
        }
    }

    pub fn high_pass(corner_hz: f64) -> Self {
        Self {
            name: format!("high-pass {} Hz", corner_hz),
            low_hz: corner_hz,
            high_hz: f64::INFINITY,
        }
    }

    fn validate(&self, sample_rate: f64) -> Result<(), FilterError> {
        if sample_rate.is_nan() || sample_rate <= 0.0 {
            return Err(FilterError::new(
                &self.name,
                format!("sample rate must be positive, got {}", sample_rate),
            ));
        }
        if self.low_hz.is_nan() || self.high_hz.is_nan() || self.low_hz < 0.0 {
            return Err(FilterError::new(&self.name, "corner frequencies must be >= 0"));
        }
        if self.high_hz <= self.low_hz {
            return Err(FilterError::new(&self.name, "pass band is empty"));
        }
        let nyquist = sample_rate / 2.0;
        if self.low_hz >= nyquist {
            return Err(FilterError::new(
                &self.name,
                format!("low corner at or above Nyquist ({} Hz)", nyquist),
            ));
        }
        Ok(())
    }
}

impl SampleFilter for FftBandPass {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, samples: &[i32], sample_rate: f64) -> Result<Vec<i32>, FilterError> {
        self.validate(sample_rate)?;
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let len = samples.len();
        let helper = FftHelper::new(len);
        let input: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        let mut spectrum = helper.forward(&input);

        for (bin, value) in spectrum.iter_mut().enumerate() {
            // bins above len/2 mirror the negative frequencies
            let frequency = bin.min(len - bin) as f64 * sample_rate / len as f64;
            if frequency < self.low_hz || frequency > self.high_hz {
                *value = Complex64::new(0.0, 0.0);
            }
        }

        Ok(helper
            .inverse(spectrum)
            .into_iter()
            .map(|v| v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
            .collect())
    }
}
