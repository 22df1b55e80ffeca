use crate::prelude::{PpmError, PpmResult};
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` time range in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    start: f64,
    end: f64,
}

impl TimeInterval {
    pub fn new(start: f64, end: f64) -> PpmResult<Self> {
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(PpmError::Validation(format!(
                "invalid time interval [{}, {})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_half_open() {
        let interval = TimeInterval::new(1.0, 2.0).unwrap();
        assert!(interval.contains(1.0));
        assert!(interval.contains(1.5));
        assert!(!interval.contains(2.0));
        assert_eq!(interval.duration(), 1.0);
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let err = TimeInterval::new(5.0, 4.0).unwrap_err();
        assert!(err.is_user_input());
    }
}
