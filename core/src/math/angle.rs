/// Width of the folding step used by quadrant correction.
pub const QUADRANT_DEG: f64 = 90.0;

/// Folds `angle` into `[min, min + 90)` by whole quarter turns.
pub fn fold_into_quadrant(angle: f64, min: f64) -> f64 {
    min + (angle - min).rem_euclid(QUADRANT_DEG)
}

/// `atan(1 / slope)` in degrees; a zero slope lands on ±90 without trapping.
pub fn reciprocal_atan_deg(slope: f64) -> f64 {
    (1.0 / slope).atan().to_degrees()
}
