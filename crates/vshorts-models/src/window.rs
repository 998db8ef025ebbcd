//! Overlapping segment windows over a source duration.

use serde::{Deserialize, Serialize};

use crate::layout::GeometryError;

/// Default window length in seconds.
pub const DEFAULT_WINDOW_SECS: f64 = 30.0;

/// Default stride between window starts in seconds.
pub const DEFAULT_STRIDE_SECS: f64 = 5.0;

/// One time-bounded slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Start offset in seconds
    pub start_secs: f64,
    /// End offset in seconds (`start + window length`)
    pub end_secs: f64,
}

impl Window {
    /// Window duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

/// Plan for slicing a source into overlapping windows.
///
/// Successive windows overlap by `window_secs - stride_secs`; the plan
/// holds no resources and the iterator it produces is restartable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPlan {
    /// Length of each window in seconds
    pub window_secs: f64,
    /// Distance between successive window starts in seconds
    pub stride_secs: f64,
}

impl Default for WindowPlan {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            stride_secs: DEFAULT_STRIDE_SECS,
        }
    }
}

impl WindowPlan {
    /// Create a plan, enforcing that windows overlap.
    pub fn new(window_secs: f64, stride_secs: f64) -> Result<Self, GeometryError> {
        if !(stride_secs > 0.0 && window_secs > 0.0 && stride_secs < window_secs) {
            return Err(GeometryError::InvalidWindowPlan {
                window_secs,
                stride_secs,
            });
        }
        Ok(Self {
            window_secs,
            stride_secs,
        })
    }

    /// Lazy sequence of windows over a source of the given duration.
    ///
    /// Emission stops the first time `start + window_secs > duration`;
    /// a source shorter than one window yields nothing.
    pub fn windows(&self, duration_secs: f64) -> impl Iterator<Item = Window> + '_ {
        let window = self.window_secs;
        let stride = self.stride_secs;
        (0u64..)
            .map(move |i| i as f64 * stride)
            .take_while(move |start| start + window <= duration_secs)
            .map(move |start| Window {
                start_secs: start,
                end_secs: start + window,
            })
    }

    /// Number of windows a source of the given duration will produce.
    pub fn count(&self, duration_secs: f64) -> usize {
        if duration_secs < self.window_secs {
            return 0;
        }
        ((duration_secs - self.window_secs) / self.stride_secs).floor() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_plans_rejected() {
        assert!(WindowPlan::new(30.0, 30.0).is_err());
        assert!(WindowPlan::new(30.0, 31.0).is_err());
        assert!(WindowPlan::new(30.0, 0.0).is_err());
        assert!(WindowPlan::new(0.0, 5.0).is_err());
        assert!(WindowPlan::new(30.0, 5.0).is_ok());
    }

    #[test]
    fn test_65s_source_yields_8_windows() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        let windows: Vec<Window> = plan.windows(65.0).collect();

        assert_eq!(windows.len(), 8);
        assert_eq!(windows[0].start_secs, 0.0);
        assert_eq!(windows[0].end_secs, 30.0);
        // Last window exactly reaches the source end: 35 + 30 <= 65
        assert_eq!(windows[7].start_secs, 35.0);
        assert_eq!(windows[7].end_secs, 65.0);
        assert_eq!(plan.count(65.0), 8);
    }

    #[test]
    fn test_short_source_yields_nothing() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        assert_eq!(plan.windows(29.9).count(), 0);
        assert_eq!(plan.count(29.9), 0);
    }

    #[test]
    fn test_exact_length_source_yields_one_window() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        let windows: Vec<Window> = plan.windows(30.0).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].end_secs, 30.0);
    }

    #[test]
    fn test_windows_strictly_ordered_and_overlapping() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        let windows: Vec<Window> = plan.windows(120.0).collect();

        for pair in windows.windows(2) {
            assert!(pair[0].start_secs < pair[1].start_secs);
            // Overlap is window - stride = 25s
            assert!((pair[0].end_secs - pair[1].start_secs - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_count_matches_emitted() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        for duration in [0.0, 29.0, 30.0, 31.0, 65.0, 100.0, 3600.0] {
            assert_eq!(
                plan.count(duration),
                plan.windows(duration).count(),
                "duration {}",
                duration
            );
        }
    }

    #[test]
    fn test_iterator_is_restartable() {
        let plan = WindowPlan::new(30.0, 5.0).unwrap();
        let first: Vec<Window> = plan.windows(65.0).collect();
        let second: Vec<Window> = plan.windows(65.0).collect();
        assert_eq!(first, second);
    }
}
