use crate::channel::{Channel, TimeInterval};
use crate::math::stats::StatsHelper;
use crate::prelude::{PpmError, PpmResult};
use crate::processing::filter::SampleFilter;
use crate::telemetry::log::LogManager;

/// Pulls gapless, optionally filtered sample windows out of channels.
pub struct WindowExtractor {
    parallel: bool,
    logger: LogManager,
}

impl WindowExtractor {
    pub fn new(parallel: bool) -> Self {
        Self {
            parallel,
            logger: LogManager::new("window"),
        }
    }

    pub fn extract<C: Channel + ?Sized>(
        &self,
        channel: &C,
        interval: &TimeInterval,
        filter: Option<&dyn SampleFilter>,
    ) -> PpmResult<Vec<i32>> {
        let raw = channel
            .gapless_samples(interval)
            .map_err(|source| PpmError::DataGap {
                channel: channel.name().to_string(),
                source,
            })?;

        let window = match filter {
            Some(filter) => filter
                .apply(&raw, channel.sample_rate())
                .map_err(|source| PpmError::Filter {
                    channel: channel.name().to_string(),
                    source,
                })?,
            None => raw,
        };

        self.logger.record(&format!(
            "{}: {} samples, RMS {:.3}",
            channel.name(),
            window.len(),
            StatsHelper::rms(&window)
        ));
        Ok(window)
    }

    /// Extracts both windows of an oriented pair, returned as (north, east)
    /// regardless of which extraction finishes first. A north failure wins
    /// when both fail.
    pub fn extract_pair<C: Channel + ?Sized>(
        &self,
        north: &C,
        east: &C,
        interval: &TimeInterval,
        filter: Option<&dyn SampleFilter>,
    ) -> PpmResult<(Vec<i32>, Vec<i32>)> {
        let (north_window, east_window) = if self.parallel {
            rayon::join(
                || self.extract(north, interval, filter),
                || self.extract(east, interval, filter),
            )
        } else {
            (
                self.extract(north, interval, filter),
                self.extract(east, interval, filter),
            )
        };
        Ok((north_window?, east_window?))
    }
}

impl Default for WindowExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Segment, TraceChannel};
    use crate::prelude::{ChannelError, FilterError};

    struct Doubler;

    impl SampleFilter for Doubler {
        fn name(&self) -> &str {
            "doubler"
        }

        fn apply(&self, samples: &[i32], _sample_rate: f64) -> Result<Vec<i32>, FilterError> {
            Ok(samples.iter().map(|v| v * 2).collect())
        }
    }

    struct Broken;

    impl SampleFilter for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn apply(&self, _samples: &[i32], _sample_rate: f64) -> Result<Vec<i32>, FilterError> {
            Err(FilterError::new("broken", "no coefficients"))
        }
    }

    fn interval() -> TimeInterval {
        TimeInterval::new(0.0, 4.0).unwrap()
    }

    #[test]
    fn filter_is_applied_to_raw_window() {
        let channel = TraceChannel::from_samples("BHN", 1.0, 0.0, vec![1, 2, 3, 4]);
        let extractor = WindowExtractor::default();
        let window = extractor
            .extract(&channel, &interval(), Some(&Doubler))
            .unwrap();
        assert_eq!(window, vec![2, 4, 6, 8]);
    }

    #[test]
    fn filter_failure_names_the_channel() {
        let channel = TraceChannel::from_samples("BHE", 1.0, 0.0, vec![1, 2, 3, 4]);
        let err = WindowExtractor::default()
            .extract(&channel, &interval(), Some(&Broken))
            .unwrap_err();
        assert!(matches!(err, PpmError::Filter { ref channel, .. } if channel == "BHE"));
    }

    #[test]
    fn gap_becomes_data_gap_error() {
        let mut channel = TraceChannel::new("BHN", 1.0);
        channel.push_segment(Segment::new(0.0, vec![1]));
        channel.push_segment(Segment::new(3.0, vec![4]));
        let err = WindowExtractor::default()
            .extract(&channel, &interval(), None)
            .unwrap_err();
        assert!(matches!(
            err,
            PpmError::DataGap {
                source: ChannelError::Gap { .. },
                ..
            }
        ));
    }

    #[test]
    fn pair_keeps_input_order_in_both_modes() {
        let north = TraceChannel::from_samples("BHN", 1.0, 0.0, vec![1, 1, 1, 1]);
        let east = TraceChannel::from_samples("BHE", 1.0, 0.0, vec![9, 9, 9]);
        for parallel in [true, false] {
            let (n, e) = WindowExtractor::new(parallel)
                .extract_pair(&north, &east, &interval(), None)
                .unwrap();
            assert_eq!(n, vec![1, 1, 1, 1]);
            assert_eq!(e, vec![9, 9, 9]);
        }
    }

    #[test]
    fn north_failure_is_reported_first() {
        let north = TraceChannel::from_samples("BHN", 1.0, 100.0, vec![1]);
        let east = TraceChannel::from_samples("BHE", 1.0, 100.0, vec![2]);
        let err = WindowExtractor::new(true)
            .extract_pair(&north, &east, &interval(), None)
            .unwrap_err();
        assert!(matches!(err, PpmError::DataGap { ref channel, .. } if channel == "BHN"));
    }
}
