use crate::channel::TimeInterval;
use crate::prelude::ChannelError;
use serde::{Deserialize, Serialize};

/// Tolerance used when snapping interval edges onto the sample grid.
const GRID_EPSILON: f64 = 1e-9;

/// A seismic channel that can hand out gapless integer windows.
pub trait Channel: Sync {
    fn name(&self) -> &str;

    /// Component-type code, e.g. `N`, `E`, `1`, `2` or `Z`.
    fn component(&self) -> char;

    fn sample_rate(&self) -> f64;

    /// Samples whose timestamps fall inside `interval`, failing when the
    /// window holds no data or crosses a gap.
    fn gapless_samples(&self, interval: &TimeInterval) -> Result<Vec<i32>, ChannelError>;
}

/// Contiguous run of samples starting at `start` seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub samples: Vec<i32>,
}

impl Segment {
    pub fn new(start: f64, samples: Vec<i32>) -> Self {
        Self { start, samples }
    }
}

/// In-memory channel built from time-ordered segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceChannel {
    name: String,
    component: char,
    sample_rate: f64,
    segments: Vec<Segment>,
}

impl TraceChannel {
    /// The component code defaults to the third character of a SEED-style
    /// name (`BHN` -> `N`).
    pub fn new(name: impl Into<String>, sample_rate: f64) -> Self {
        let name = name.into();
        let component = name.chars().nth(2).unwrap_or(' ');
        Self {
            name,
            component,
            sample_rate,
            segments: Vec::new(),
        }
    }

    pub fn from_samples(
        name: impl Into<String>,
        sample_rate: f64,
        start: f64,
        samples: Vec<i32>,
    ) -> Self {
        let mut channel = Self::new(name, sample_rate);
        channel.push_segment(Segment::new(start, samples));
        channel
    }

    pub fn with_component(mut self, component: char) -> Self {
        self.component = component;
        self
    }

    /// Adds a segment, keeping segments ordered by start time.
    pub fn push_segment(&mut self, segment: Segment) {
        let position = self
            .segments
            .partition_point(|existing| existing.start <= segment.start);
        self.segments.insert(position, segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn sample_range(&self, segment: &Segment, interval: &TimeInterval) -> (usize, usize) {
        let rate = self.sample_rate;
        let first = if interval.start() <= segment.start {
            0
        } else {
            ((interval.start() - segment.start) * rate - GRID_EPSILON).ceil() as usize
        };
        let last = if interval.end() <= segment.start {
            0
        } else {
            ((interval.end() - segment.start) * rate - GRID_EPSILON).ceil() as usize
        };
        let len = segment.samples.len();
        (first.min(len), last.min(len))
    }
}

impl Channel for TraceChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn component(&self) -> char {
        self.component
    }

    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn gapless_samples(&self, interval: &TimeInterval) -> Result<Vec<i32>, ChannelError> {
        let no_data = ChannelError::NoData {
            start: interval.start(),
            end: interval.end(),
        };
        if self.sample_rate.is_nan() || self.sample_rate <= 0.0 {
            return Err(no_data);
        }

        let period = 1.0 / self.sample_rate;
        let mut output = Vec::new();
        // time the next sample is expected at, once a segment contributed
        let mut expected: Option<f64> = None;

        for segment in &self.segments {
            let (mut first, last) = self.sample_range(segment, interval);
            if first >= last {
                continue;
            }

            if let Some(next) = expected {
                // overlapping segments repeat samples we already hold
                while first < last && segment.start + first as f64 * period < next - period / 2.0
                {
                    first += 1;
                }
                if first >= last {
                    continue;
                }
                let actual = segment.start + first as f64 * period;
                if actual - next > period / 2.0 {
                    return Err(ChannelError::Gap {
                        at: next,
                        length: actual - next,
                    });
                }
            }

            output.extend_from_slice(&segment.samples[first..last]);
            expected = Some(segment.start + last as f64 * period);
        }

        if output.is_empty() {
            Err(no_data)
        } else {
            Ok(output)
        }
    }
}
