//! Instant to horizontal offset mapping

use ganttprint_core::{DateRange, Instant};

/// Linear mapping from instants to offsets within the timeline band
///
/// Offsets are relative to the left edge of the band: `range.first` maps to
/// `0.0` and `range.last` to the band width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    origin: Instant,
    width: f64,
    scaling_factor: f64,
}

impl CoordinateMapper {
    pub fn new(range: &DateRange, width: f64) -> Self {
        let span_ms = range.duration().num_milliseconds();
        // A zero-length range collapses the timeline instead of dividing by zero.
        let scaling_factor = if span_ms == 0 {
            1.0
        } else {
            width / span_ms as f64
        };

        Self {
            origin: range.first(),
            width,
            scaling_factor,
        }
    }

    /// Offset of `instant` from the left edge of the band
    pub fn to_x(&self, instant: Instant) -> f64 {
        (instant - self.origin).num_milliseconds() as f64 * self.scaling_factor
    }

    /// Pixels per millisecond
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}
