// File: crates/tschart-core/src/scale.rs
// Summary: Linear (value) and UTC time scales mapping a domain onto a pixel range.

use chrono::{DateTime, Utc};

use crate::ticks::{format_tick, linear_ticks, precision_for_step, precision_for_value, tick_step};
use crate::time::{format_time_tick, time_ticks};

/// Continuous mapping from data space to screen space, with tick generation for axes.
pub trait Scale {
    type Value: Copy;

    /// Pixel position of `v`.
    fn map(&self, v: Self::Value) -> f64;
    /// Pixel range as `(start, end)`; `end` may be smaller than `start`.
    fn range(&self) -> (f64, f64);
    /// Roughly `count` representative domain values.
    fn ticks(&self, count: usize) -> Vec<Self::Value>;
    /// Human-readable label for a tick produced by `ticks(count)`.
    fn tick_label(&self, v: Self::Value, count: usize) -> String;
}

/// Plain `d0..d1 -> r0..r1` interpolation. A zero-width domain maps to the range midpoint.
#[inline]
fn interpolate(v: f64, (d0, d1): (f64, f64), (r0, r1): (f64, f64)) -> f64 {
    let span = d1 - d0;
    let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
    r0 + t * (r1 - r0)
}

/// Vertical value scale. Pass `(bottom, top)` as the range so larger values plot higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
    pub fn domain(&self) -> (f64, f64) { self.domain }

    /// Inverse of `map`; returns the domain start for a zero-width range.
    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        if r1 == r0 {
            return self.domain.0;
        }
        interpolate(px, self.range, self.domain)
    }
}

impl Scale for LinearScale {
    type Value = f64;

    #[inline]
    fn map(&self, v: f64) -> f64 {
        interpolate(v, self.domain, self.range)
    }
    fn range(&self) -> (f64, f64) { self.range }
    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
    fn tick_label(&self, v: f64, count: usize) -> String {
        // a flat domain has a single tick and no step; print the value as is
        if self.domain.0 == self.domain.1 {
            return format_tick(v, precision_for_value(v));
        }
        let precision = precision_for_step(tick_step(self.domain.0, self.domain.1, count));
        format_tick(v, precision)
    }
}

/// Horizontal UTC time scale; dates are interpolated as epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) { self.domain }

    fn domain_millis(&self) -> (f64, f64) {
        (self.domain.0.timestamp_millis() as f64, self.domain.1.timestamp_millis() as f64)
    }
}

impl Scale for TimeScale {
    type Value = DateTime<Utc>;

    #[inline]
    fn map(&self, v: DateTime<Utc>) -> f64 {
        interpolate(v.timestamp_millis() as f64, self.domain_millis(), self.range)
    }
    fn range(&self) -> (f64, f64) { self.range }
    fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        time_ticks(self.domain.0, self.domain.1, count)
    }
    fn tick_label(&self, v: DateTime<Utc>, _count: usize) -> String {
        format_time_tick(v)
    }
}
