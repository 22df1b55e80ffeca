pub mod azimuth;
pub mod filter;
pub mod orient;
pub mod polar;
pub mod transform;
pub mod window;

pub use azimuth::AzimuthEstimator;
pub use filter::{FftBandPass, SampleFilter};
pub use orient::ChannelOrienter;
pub use polar::PolarDatasetBuilder;
pub use transform::PpmTransform;
pub use window::WindowExtractor;
