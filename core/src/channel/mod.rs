pub mod interval;
pub mod trace;

pub use interval::TimeInterval;
pub use trace::{Channel, Segment, TraceChannel};
