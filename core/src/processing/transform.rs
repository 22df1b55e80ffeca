use crate::channel::{Channel, TimeInterval};
use crate::display::{DisplaySink, PpmView};
use crate::prelude::{PpmConfig, PpmError, PpmResult};
use crate::processing::azimuth::AzimuthEstimator;
use crate::processing::filter::SampleFilter;
use crate::processing::orient::ChannelOrienter;
use crate::processing::polar::PolarDatasetBuilder;
use crate::processing::window::WindowExtractor;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{MetricsRecorder, MetricsSnapshot};

/// Particle-motion transform: orients a channel pair, extracts their
/// windows and produces the polar dataset plus back-azimuth.
pub struct PpmTransform {
    config: PpmConfig,
    extractor: WindowExtractor,
    builder: PolarDatasetBuilder,
    estimator: AzimuthEstimator,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl PpmTransform {
    pub const NAME: &'static str = "Particle motion";

    pub fn new(config: PpmConfig) -> Self {
        Self {
            extractor: WindowExtractor::new(config.parallel_extraction),
            builder: PolarDatasetBuilder::new(config.max_data_length),
            estimator: AzimuthEstimator::new(),
            logger: LogManager::new("ppm"),
            metrics: MetricsRecorder::new(),
            config,
        }
    }

    pub fn config(&self) -> &PpmConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runs the whole transform. Either every stage succeeds or the first
    /// failure is returned; nothing is partially produced.
    pub fn transform<C: Channel + ?Sized>(
        &self,
        channels: &[&C],
        interval: &TimeInterval,
        filter: Option<&dyn SampleFilter>,
    ) -> PpmResult<PpmView> {
        let outcome = self.run(channels, interval, filter);
        match &outcome {
            Ok(_) => self.metrics.record_processed(),
            Err(err) if err.is_user_input() => self.metrics.record_rejected(),
            Err(err) => {
                self.logger.warn(&format!("transform failed: {}", err));
                self.metrics.record_error();
            }
        }
        outcome
    }

    /// Runs the transform and reports the outcome to `sink`: the view on
    /// success, one message on failure. A repaint is requested either way.
    pub fn present<C: Channel + ?Sized>(
        &self,
        channels: &[&C],
        interval: &TimeInterval,
        filter: Option<&dyn SampleFilter>,
        sink: &dyn DisplaySink,
    ) -> PpmResult<PpmView> {
        let outcome = self.transform(channels, interval, filter);
        match &outcome {
            Ok(view) => sink.show_ppm(view),
            Err(err) if err.is_user_input() => sink.show_error(&err.to_string()),
            Err(err) => sink.show_warning(&err.to_string()),
        }
        sink.request_repaint();
        outcome
    }

    fn run<C: Channel + ?Sized>(
        &self,
        channels: &[&C],
        interval: &TimeInterval,
        filter: Option<&dyn SampleFilter>,
    ) -> PpmResult<PpmView> {
        let (first, second) = match channels {
            [first, second] => (*first, *second),
            _ => {
                return Err(PpmError::Validation(
                    "You should select two channels to view PPM".into(),
                ))
            }
        };

        let (north, east) = ChannelOrienter::orient(first, second);
        self.logger.record(&format!(
            "oriented N:{} E:{} (selected {} {})",
            north.name(),
            east.name(),
            first.name(),
            second.name()
        ));

        if north.sample_rate() != east.sample_rate() {
            return Err(PpmError::SampleRateMismatch {
                north: north.sample_rate(),
                east: east.sample_rate(),
            });
        }

        let (mut north_window, mut east_window) = self
            .extractor
            .extract_pair(north, east, interval, filter)?;
        let shared = north_window.len().min(east_window.len());
        north_window.truncate(shared);
        east_window.truncate(shared);

        let label = format!("{} {}", north.name(), east.name());
        let dataset = self.builder.build(&north_window, &east_window, &label)?;
        let back_azimuth_deg = self.estimator.estimate(&north_window, &east_window)?;

        Ok(PpmView {
            title: format!("N:{}  E:{}", north.name(), east.name()),
            dataset,
            back_azimuth_deg,
            interval: *interval,
            filter: filter.map(|f| f.name().to_string()),
        })
    }
}

impl Default for PpmTransform {
    fn default() -> Self {
        Self::new(PpmConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::TraceChannel;
    use crate::processing::filter::FftBandPass;
    use std::cell::RefCell;
    use std::f64::consts::PI;

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<String>>,
    }

    impl DisplaySink for RecordingSink {
        fn show_ppm(&self, view: &PpmView) {
            self.events
                .borrow_mut()
                .push(format!("ppm {} {}", view.title, view.dataset.len()));
        }

        fn show_error(&self, message: &str) {
            self.events.borrow_mut().push(format!("error {}", message));
        }

        fn show_warning(&self, message: &str) {
            self.events.borrow_mut().push(format!("warning {}", message));
        }

        fn request_repaint(&self) {
            self.events.borrow_mut().push("repaint".into());
        }
    }

    fn circle_pair(len: usize) -> (TraceChannel, TraceChannel) {
        let north = (0..len)
            .map(|i| (1000.0 * (2.0 * PI * i as f64 / len as f64).sin()).round() as i32)
            .collect();
        let east = (0..len)
            .map(|i| (1000.0 * (2.0 * PI * i as f64 / len as f64).cos()).round() as i32)
            .collect();
        (
            TraceChannel::from_samples("BHN", 20.0, 0.0, north),
            TraceChannel::from_samples("BHE", 20.0, 0.0, east),
        )
    }

    fn interval() -> TimeInterval {
        TimeInterval::new(0.0, 5.0).unwrap()
    }

    #[test]
    fn sine_cosine_pair_produces_full_dataset() {
        let (north, east) = circle_pair(100);
        let transform = PpmTransform::default();
        let view = transform
            .transform(&[&north, &east], &interval(), None)
            .unwrap();

        assert_eq!(view.dataset.len(), 100);
        assert_eq!(view.label(), "BHN BHE");
        assert_eq!(view.title, "N:BHN  E:BHE");
        assert!((0.0..180.0).contains(&view.back_azimuth_deg));
        assert_eq!(transform.metrics().processed, 1);
    }

    #[test]
    fn selection_order_does_not_change_orientation() {
        let (north, east) = circle_pair(100);
        let transform = PpmTransform::default();
        let forward = transform
            .transform(&[&north, &east], &interval(), None)
            .unwrap();
        let reversed = transform
            .transform(&[&east, &north], &interval(), None)
            .unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let (north, east) = circle_pair(100);
        let transform = PpmTransform::default();
        let filter = FftBandPass::low_pass(2.0);
        let a = transform
            .transform(&[&north, &east], &interval(), Some(&filter))
            .unwrap();
        let b = transform
            .transform(&[&north, &east], &interval(), Some(&filter))
            .unwrap();
        assert_eq!(a.back_azimuth_deg.to_bits(), b.back_azimuth_deg.to_bits());
        assert_eq!(a.dataset.points, b.dataset.points);
        assert_eq!(a.filter.as_deref(), Some("low-pass 2 Hz"));
    }

    #[test]
    fn single_channel_is_a_validation_error() {
        let (north, _) = circle_pair(100);
        let transform = PpmTransform::default();
        let sink = RecordingSink::default();
        let err = transform
            .present(&[&north], &interval(), None, &sink)
            .unwrap_err();

        assert!(err.is_user_input());
        assert_eq!(
            *sink.events.borrow(),
            vec![
                "error You should select two channels to view PPM".to_string(),
                "repaint".to_string()
            ]
        );
        assert_eq!(transform.metrics().rejected, 1);
    }

    #[test]
    fn sample_rate_mismatch_yields_no_points() {
        let north = TraceChannel::from_samples("BHN", 40.0, 0.0, vec![1; 100]);
        let east = TraceChannel::from_samples("BHE", 20.0, 0.0, vec![1; 100]);
        let sink = RecordingSink::default();
        let transform = PpmTransform::default();
        let err = transform
            .present(&[&north, &east], &interval(), None, &sink)
            .unwrap_err();

        assert!(matches!(err, PpmError::SampleRateMismatch { .. }));
        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("warning Channels have different sample rate"));
        assert_eq!(events[1], "repaint");
        assert_eq!(transform.metrics().errors, 1);
    }

    #[test]
    fn success_is_shown_then_repainted() {
        let (north, east) = circle_pair(100);
        let sink = RecordingSink::default();
        PpmTransform::default()
            .present(&[&east, &north], &interval(), None, &sink)
            .unwrap();
        assert_eq!(
            *sink.events.borrow(),
            vec!["ppm N:BHN  E:BHE 100".to_string(), "repaint".to_string()]
        );
    }

    #[test]
    fn oversize_window_is_reported() {
        let (north, east) = circle_pair(100);
        let transform = PpmTransform::new(PpmConfig {
            max_data_length: 99,
            ..Default::default()
        });
        let err = transform
            .transform(&[&north, &east], &interval(), None)
            .unwrap_err();
        assert!(matches!(err, PpmError::Oversize { size: 100, max: 99 }));
    }

    #[test]
    fn uneven_windows_use_shared_length() {
        let (north, _) = circle_pair(100);
        let east = TraceChannel::from_samples("BHE", 20.0, 0.0, (0..60).collect());
        let view = PpmTransform::default()
            .transform(&[&north, &east], &interval(), None)
            .unwrap();
        assert_eq!(view.dataset.len(), 60);
    }

    #[test]
    fn short_windows_fail_azimuth_estimate() {
        let (north, east) = circle_pair(10);
        let err = PpmTransform::default()
            .transform(&[&north, &east], &interval(), None)
            .unwrap_err();
        assert!(matches!(err, PpmError::InsufficientData { required: 20, .. }));
    }

    #[test]
    fn dyn_channels_are_accepted() {
        let (north, east) = circle_pair(100);
        let channels: [&dyn Channel; 2] = [&north, &east];
        let view = PpmTransform::default()
            .transform(&channels, &interval(), None)
            .unwrap();
        assert_eq!(view.dataset.len(), 100);
    }
}
