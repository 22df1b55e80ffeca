pub mod sink;
pub mod view;

pub use sink::DisplaySink;
pub use view::{PolarDataset, PolarPoint, PpmView};
