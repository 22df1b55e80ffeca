pub mod angle;
pub mod fft;
pub mod regression;
pub mod stats;

pub use fft::FftHelper;
pub use regression::ZeroInterceptRegression;
pub use stats::{SampleSummary, StatsHelper};
