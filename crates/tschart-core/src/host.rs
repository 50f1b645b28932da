// File: crates/tschart-core/src/host.rs
// Summary: Host data adapter; turns page attributes and serialized chart data into a
//          ChartConfig and a Series.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::{Point, Series};
use crate::types::ChartConfig;

pub const ATTR_TARGET: &str = "target-replace-tag";
pub const ATTR_X_MIN: &str = "x-min";
pub const ATTR_X_MAX: &str = "x-max";
pub const ATTR_Y_MIN: &str = "y-min";
pub const ATTR_Y_MAX: &str = "y-max";

/// Date-time layouts accepted for timestamps, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Canonical attribute name: `data-` prefix dropped, lowercase, words joined by `-`.
/// `target_replace_tag`, `targetReplaceTag` and `data-target-replace-tag` all map to
/// `target-replace-tag`. A run of capitals is one word (`yMAX` is `y-max`, `XMin` is
/// `x-min`).
pub fn normalize_attribute_name(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_prefix("data-").unwrap_or(name);
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            let starts_word = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if starts_word && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Parse a timestamp as written by hosts: RFC 3339, `YYYY-MM-DD HH:MM:SS` (and a few
/// close variants, read as UTC), a bare `YYYY-MM-DD`, or integer epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
    }
    s.parse::<i64>().ok().and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

/// Attributes read off the embedding element, keyed by normalized name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostAttributes {
    values: BTreeMap<String, String>,
}

impl HostAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(normalize_attribute_name(name), value.into());
    }

    /// Value for `name` (any spelling), ignoring blank values.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&normalize_attribute_name(name))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn parse_with<T>(&self, name: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => parse(raw).map(Some).ok_or_else(|| ChartError::InvalidAttribute {
                name: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    fn number(&self, name: &str) -> Result<Option<f64>> {
        self.parse_with(name, |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    fn pixels(&self, name: &str) -> Result<Option<u32>> {
        self.parse_with(name, |s| s.parse::<u32>().ok())
    }

    /// Build a config on top of `base`. `target-replace-tag` is required; bounds, size,
    /// margins and stroke are optional and replace the corresponding `base` values.
    pub fn to_config_with(&self, base: ChartConfig) -> Result<ChartConfig> {
        let mut cfg = base;
        cfg.target = self
            .get(ATTR_TARGET)
            .ok_or_else(|| ChartError::MissingAttribute(ATTR_TARGET.to_string()))?
            .to_string();

        if let Some(v) = self.parse_with(ATTR_X_MIN, parse_timestamp)? { cfg.x_min = Some(v); }
        if let Some(v) = self.parse_with(ATTR_X_MAX, parse_timestamp)? { cfg.x_max = Some(v); }
        if let Some(v) = self.number(ATTR_Y_MIN)? { cfg.y_min = Some(v); }
        if let Some(v) = self.number(ATTR_Y_MAX)? { cfg.y_max = Some(v); }

        if let Some(v) = self.pixels("width")? { cfg.width = v; }
        if let Some(v) = self.pixels("height")? { cfg.height = v; }
        if let Some(v) = self.pixels("margin-top")? { cfg.margins.top = v; }
        if let Some(v) = self.pixels("margin-right")? { cfg.margins.right = v; }
        if let Some(v) = self.pixels("margin-bottom")? { cfg.margins.bottom = v; }
        if let Some(v) = self.pixels("margin-left")? { cfg.margins.left = v; }
        if let Some(v) = self.get("stroke") { cfg.line.stroke = v.to_string(); }
        if let Some(v) = self.number("stroke-width")? { cfg.line.stroke_width = v; }
        Ok(cfg)
    }

    pub fn to_config(&self) -> Result<ChartConfig> {
        self.to_config_with(ChartConfig::default())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for HostAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = HostAttributes::new();
        for (k, v) in iter {
            attrs.insert(k.as_ref(), v);
        }
        attrs
    }
}

/// Column-wise chart data as embedded in pages: parallel date strings and values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

impl ChartData {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Zip dates and values into a series. The first unparseable date or missing value
    /// aborts the conversion; nothing is skipped.
    pub fn to_series(&self) -> Result<Series> {
        if self.x.len() != self.y.len() {
            return Err(ChartError::LengthMismatch { x: self.x.len(), y: self.y.len() });
        }
        let points = self
            .x
            .iter()
            .zip(&self.y)
            .enumerate()
            .map(|(index, (date, value))| {
                let date = parse_timestamp(date).ok_or_else(|| ChartError::MalformedPoint {
                    index,
                    reason: format!("unparseable date `{date}`"),
                })?;
                let value = value.filter(|v| v.is_finite()).ok_or_else(|| ChartError::MalformedPoint {
                    index,
                    reason: "missing value".to_string(),
                })?;
                Ok(Point::new(date, value))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Series::with_points(points))
    }
}
