// File: crates/tschart-core/src/series.rs
// Summary: Point and Series (dataset) model for a single time-series line.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One observation: a UTC timestamp and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl Point {
    pub fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// Ordered points of one line. Insertion order is kept as is; nothing here sorts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, date: DateTime<Utc>, value: f64) {
        self.points.push(Point::new(date, value));
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// Earliest and latest date, or `None` when empty.
    pub fn date_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?.date;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.date), hi.max(p.date))))
    }

    /// Smallest and largest value, or `None` when empty.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.value;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.value), hi.max(p.value))))
    }
}

/// Descriptive statistics over the values of a series.
///
/// `stdev` is the population standard deviation (divides by `n`); `sample_stdev` divides by
/// `n - 1` and is `None` for a single point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
    pub sample_stdev: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={} max={} mean={:.3} stdev={:.3}",
            self.count, self.min, self.max, self.mean, self.stdev
        )
    }
}

impl Series {
    /// Summary statistics of the values, or `None` when empty.
    pub fn summary(&self) -> Option<Summary> {
        let (min, max) = self.value_extent()?;
        let count = self.points.len();
        let n = count as f64;
        let mean = self.points.iter().map(|p| p.value).sum::<f64>() / n;
        let sq_dev: f64 = self.points.iter().map(|p| (p.value - mean).powi(2)).sum();
        Some(Summary {
            count,
            min,
            max,
            mean,
            stdev: (sq_dev / n).sqrt(),
            sample_stdev: (count > 1).then(|| (sq_dev / (n - 1.0)).sqrt()),
        })
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
