//! Particle-motion (PPM) and back-azimuth core for paired seismic channels.
//!
//! The modules follow the path of a transform request: channels are oriented
//! into north/east order, gapless windows are extracted (and optionally
//! filtered), and the paired samples become a polar dataset plus a
//! quadrant-corrected back-azimuth for a display collaborator.

pub mod channel;
pub mod display;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{PpmConfig, PpmError, PpmResult};
pub use processing::PpmTransform;
