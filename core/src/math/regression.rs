/// Ordinary least squares through the origin: `y ≈ slope · x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroInterceptRegression {
    sum_xy: f64,
    sum_xx: f64,
    count: usize,
}

impl ZeroInterceptRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64, y: f64) {
        self.sum_xy += x * y;
        self.sum_xx += x * x;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` while every `x` seen so far is zero.
    pub fn slope(&self) -> Option<f64> {
        if self.sum_xx == 0.0 {
            None
        } else {
            Some(self.sum_xy / self.sum_xx)
        }
    }
}
