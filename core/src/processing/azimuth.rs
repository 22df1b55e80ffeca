use crate::math::angle::{fold_into_quadrant, reciprocal_atan_deg};
use crate::math::regression::ZeroInterceptRegression;
use crate::prelude::{PpmError, PpmResult};
use crate::telemetry::log::LogManager;

/// Offset from the end of the window used to probe the phase relationship.
pub const PHASE_CHECK_LAG: usize = 19;

/// Shortest window the phase probe can index into.
pub const MIN_AZIMUTH_SAMPLES: usize = PHASE_CHECK_LAG + 1;

/// Estimates back-azimuth from the particle-motion slope.
///
/// A line fit cannot tell a bearing from its reciprocal, so the raw angle
/// is folded into [0, 90) when north and east move in phase and into
/// [90, 180) when they move in anti-phase. The result may still be 180°
/// out, which only the vertical component could resolve.
pub struct AzimuthEstimator {
    logger: LogManager,
}

impl AzimuthEstimator {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("azimuth"),
        }
    }

    pub fn estimate(&self, north: &[i32], east: &[i32]) -> PpmResult<f64> {
        if north.len() != east.len() || north.len() < MIN_AZIMUTH_SAMPLES {
            return Err(PpmError::InsufficientData {
                north: north.len(),
                east: east.len(),
                required: MIN_AZIMUTH_SAMPLES,
            });
        }

        // north as a function of east; only the slope matters
        let mut regression = ZeroInterceptRegression::new();
        for (&n, &e) in north.iter().zip(east.iter()) {
            regression.add(e as f64, n as f64);
        }
        // flat east means pure north-south motion
        let raw = regression.slope().map(reciprocal_atan_deg).unwrap_or(0.0);

        let probe = north.len() - PHASE_CHECK_LAG;
        let signum_north = (north[0] as i64 - north[probe] as i64).signum();
        let signum_east = (east[0] as i64 - east[probe] as i64).signum();

        let azimuth = Self::correct_quadrant(raw, signum_north, signum_east);
        self.logger.record(&format!(
            "slope {:?}, raw {:.3}°, phase ({}, {}), azimuth {:.3}°",
            regression.slope(),
            raw,
            signum_north,
            signum_east,
            azimuth
        ));
        Ok(azimuth)
    }

    /// Folds `azimuth` into [0, 90) when the signs match and [90, 180)
    /// otherwise.
    pub fn correct_quadrant(azimuth: f64, signum_north: i64, signum_east: i64) -> f64 {
        let min = if signum_north == signum_east { 0.0 } else { 90.0 };
        fold_into_quadrant(azimuth, min)
    }
}

impl Default for AzimuthEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(len: usize, slope: f64) -> (Vec<i32>, Vec<i32>) {
        let east: Vec<i32> = (0..len as i32).map(|k| k * 10).collect();
        let north = east.iter().map(|&e| (slope * e as f64) as i32).collect();
        (north, east)
    }

    #[test]
    fn in_phase_line_lands_in_first_quadrant() {
        let estimator = AzimuthEstimator::new();
        for slope in [0.5, 1.0, 2.0, 4.0] {
            let (north, east) = line(40, slope);
            let azimuth = estimator.estimate(&north, &east).unwrap();
            let expected = (1.0 / slope).atan().to_degrees();
            assert!((0.0..90.0).contains(&azimuth));
            assert!((azimuth - expected).abs() < 0.01, "{} vs {}", azimuth, expected);
        }
    }

    #[test]
    fn flipped_tail_phase_moves_to_second_quadrant() {
        let estimator = AzimuthEstimator::new();
        let (mut north, east) = line(40, 2.0);
        let probe = north.len() - PHASE_CHECK_LAG;
        // north now falls between the first sample and the probe while east rises
        north[probe] = north[0] - 5;

        let azimuth = estimator.estimate(&north, &east).unwrap();
        assert!((90.0..180.0).contains(&azimuth));
    }

    #[test]
    fn reciprocal_slopes_agree_after_correction() {
        // the same line traced with both signs flipped gives the same bearing
        let (north, east) = line(30, 1.5);
        let north_neg: Vec<i32> = north.iter().map(|v| -v).collect();
        let east_neg: Vec<i32> = east.iter().map(|v| -v).collect();
        let estimator = AzimuthEstimator::new();
        let a = estimator.estimate(&north, &east).unwrap();
        let b = estimator.estimate(&north_neg, &east_neg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_slope_does_not_trap() {
        let north = vec![0; 25];
        let east: Vec<i32> = (1..=25).collect();
        let azimuth = AzimuthEstimator::new().estimate(&north, &east).unwrap();
        assert!(azimuth.is_finite());
        assert!((90.0..180.0).contains(&azimuth));
    }

    #[test]
    fn flat_east_starts_from_zero_degrees() {
        let north: Vec<i32> = (1..=25).collect();
        let east = vec![0; 25];
        // raw 0° is folded by the phase probe: east has no sign, north rises
        let azimuth = AzimuthEstimator::new().estimate(&north, &east).unwrap();
        assert_eq!(azimuth, 90.0);
    }

    #[test]
    fn short_or_unequal_windows_are_rejected() {
        let estimator = AzimuthEstimator::new();
        let err = estimator.estimate(&[1; 19], &[1; 19]).unwrap_err();
        assert!(matches!(err, PpmError::InsufficientData { required: 20, .. }));
        assert!(estimator.estimate(&[1; 30], &[1; 29]).is_err());
        assert!(estimator.estimate(&[1; 20], &[1; 20]).is_ok());
    }

    #[test]
    fn quadrant_correction_table() {
        assert!((AzimuthEstimator::correct_quadrant(-45.0, 1, 1) - 45.0).abs() < 1e-12);
        assert!((AzimuthEstimator::correct_quadrant(-45.0, 1, -1) - 135.0).abs() < 1e-12);
        assert!((AzimuthEstimator::correct_quadrant(30.0, -1, 1) - 120.0).abs() < 1e-12);
        assert!((AzimuthEstimator::correct_quadrant(30.0, 0, 0) - 30.0).abs() < 1e-12);
    }
}
