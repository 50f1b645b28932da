// File: crates/tschart-core/src/time.rs
// Summary: Calendar-aware UTC tick intervals and multi-scale tick labels for the time axis.

use chrono::{DateTime, Datelike, DurationRound, Months, TimeDelta, TimeZone, Timelike, Utc, Weekday};

use crate::ticks::tick_step;

const SECOND: i64 = 1_000;
const MINUTE: i64 = SECOND * 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;
const MONTH: i64 = DAY * 30;
const YEAR: i64 = DAY * 365;

/// Spacing between time ticks. Field-based intervals (`Minute(15)`, `Month(3)`, ...) keep
/// dates whose field is a multiple of the step, so ticks land on calendar boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Millis(i64),
    Second(u32),
    Minute(u32),
    Hour(u32),
    Day(u32),
    /// Sunday-based weeks.
    Week,
    Month(u32),
    Year(i32),
}

const LADDER: [(TimeInterval, i64); 18] = [
    (TimeInterval::Second(1), SECOND),
    (TimeInterval::Second(5), 5 * SECOND),
    (TimeInterval::Second(15), 15 * SECOND),
    (TimeInterval::Second(30), 30 * SECOND),
    (TimeInterval::Minute(1), MINUTE),
    (TimeInterval::Minute(5), 5 * MINUTE),
    (TimeInterval::Minute(15), 15 * MINUTE),
    (TimeInterval::Minute(30), 30 * MINUTE),
    (TimeInterval::Hour(1), HOUR),
    (TimeInterval::Hour(3), 3 * HOUR),
    (TimeInterval::Hour(6), 6 * HOUR),
    (TimeInterval::Hour(12), 12 * HOUR),
    (TimeInterval::Day(1), DAY),
    (TimeInterval::Day(2), 2 * DAY),
    (TimeInterval::Week, WEEK),
    (TimeInterval::Month(1), MONTH),
    (TimeInterval::Month(3), 3 * MONTH),
    (TimeInterval::Year(1), YEAR),
];

impl TimeInterval {
    /// Pick the ladder interval whose duration is closest (by ratio) to span / count.
    pub fn for_span(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Self {
        let (a, b) = (start.timestamp_millis() as f64, stop.timestamp_millis() as f64);
        let target = (b - a).abs() / count.max(1) as f64;

        let i = LADDER.partition_point(|&(_, d)| (d as f64) <= target);
        if i == LADDER.len() {
            let step = tick_step(a / YEAR as f64, b / YEAR as f64, count).abs().max(1.0);
            return TimeInterval::Year(step.round() as i32);
        }
        if i == 0 {
            let step = tick_step(a, b, count).abs().max(1.0);
            return TimeInterval::Millis(step.round() as i64);
        }
        let (below, below_d) = LADDER[i - 1];
        let (above, above_d) = LADDER[i];
        if target / (below_d as f64) < (above_d as f64) / target { below } else { above }
    }

    /// Start of the unit containing `t` (second, minute, ..., year).
    fn floor_unit(self, t: DateTime<Utc>) -> DateTime<Utc> {
        let trunc = |d: TimeDelta| t.duration_trunc(d).unwrap_or(t);
        match self {
            TimeInterval::Millis(_) => t,
            TimeInterval::Second(_) => trunc(TimeDelta::seconds(1)),
            TimeInterval::Minute(_) => trunc(TimeDelta::minutes(1)),
            TimeInterval::Hour(_) => trunc(TimeDelta::hours(1)),
            TimeInterval::Day(_) => trunc(TimeDelta::days(1)),
            TimeInterval::Week => {
                let day = trunc(TimeDelta::days(1));
                day - TimeDelta::days(day.weekday().num_days_from_sunday() as i64)
            }
            TimeInterval::Month(_) => Utc
                .with_ymd_and_hms(t.year(), t.month(), 1, 0, 0, 0)
                .single()
                .unwrap_or(t),
            TimeInterval::Year(_) => Utc.with_ymd_and_hms(t.year(), 1, 1, 0, 0, 0).single().unwrap_or(t),
        }
    }

    fn next_unit(self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeInterval::Millis(_) => None,
            TimeInterval::Second(_) => t.checked_add_signed(TimeDelta::seconds(1)),
            TimeInterval::Minute(_) => t.checked_add_signed(TimeDelta::minutes(1)),
            TimeInterval::Hour(_) => t.checked_add_signed(TimeDelta::hours(1)),
            TimeInterval::Day(_) => t.checked_add_signed(TimeDelta::days(1)),
            TimeInterval::Week => t.checked_add_signed(TimeDelta::weeks(1)),
            TimeInterval::Month(_) => t.checked_add_months(Months::new(1)),
            TimeInterval::Year(_) => t.checked_add_months(Months::new(12)),
        }
    }

    fn keeps(self, t: DateTime<Utc>) -> bool {
        match self {
            TimeInterval::Millis(_) | TimeInterval::Week => true,
            TimeInterval::Second(n) => t.second() % n == 0,
            TimeInterval::Minute(n) => t.minute() % n == 0,
            TimeInterval::Hour(n) => t.hour() % n == 0,
            TimeInterval::Day(n) => t.day0() % n == 0,
            TimeInterval::Month(n) => t.month0() % n == 0,
            TimeInterval::Year(n) => t.year().rem_euclid(n.max(1)) == 0,
        }
    }

    /// Interval boundaries inside `[start, stop]`, in ascending order.
    pub fn range(self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
        if let TimeInterval::Millis(step) = self {
            let step = step.max(1);
            let (a, b) = (lo.timestamp_millis(), hi.timestamp_millis());
            let first = a.div_euclid(step) * step + if a.rem_euclid(step) == 0 { 0 } else { step };
            return (0..)
                .map(|k| first + k * step)
                .take_while(|&ms| ms <= b)
                .filter_map(|ms| Utc.timestamp_millis_opt(ms).single())
                .collect();
        }

        let mut out = Vec::new();
        let mut t = self.floor_unit(lo);
        while t <= hi {
            if t >= lo && self.keeps(t) {
                out.push(t);
            }
            match self.next_unit(t) {
                Some(next) => t = next,
                None => break,
            }
        }
        out
    }
}

/// Time ticks for a domain, ascending unless the domain is reversed.
pub fn time_ticks(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let mut ticks = TimeInterval::for_span(start, stop, count).range(start, stop);
    if stop < start {
        ticks.reverse();
    }
    ticks
}

/// Label a tick with the coarsest unit it is not aligned to: `.%L`, `:%S`, `%I:%M`,
/// `%I %p`, `%a %d`, `%b %d`, `%B`, then `%Y`.
pub fn format_time_tick(t: DateTime<Utc>) -> String {
    let millis = t.timestamp_subsec_millis();
    if millis != 0 {
        format!(".{millis:03}")
    } else if t.second() != 0 {
        t.format(":%S").to_string()
    } else if t.minute() != 0 {
        t.format("%I:%M").to_string()
    } else if t.hour() != 0 {
        t.format("%I %p").to_string()
    } else if t.day() != 1 {
        if t.weekday() != Weekday::Sun {
            t.format("%a %d").to_string()
        } else {
            t.format("%b %d").to_string()
        }
    } else if t.month() != 1 {
        t.format("%B").to_string()
    } else {
        t.format("%Y").to_string()
    }
}
