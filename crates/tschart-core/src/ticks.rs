// File: crates/tschart-core/src/ticks.rs
// Summary: "Nice" numeric tick layout (1/2/5 x 10^n steps) and tick label formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices plus increment. A negative increment means "divide by -inc",
/// which keeps sub-unit steps exact (0.1 is represented as 1 / 10).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start { i1 += 1.0; }
        if i2 / scale > stop { i2 -= 1.0; }
        inc = -scale;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start { i1 += 1.0; }
        if i2 * step > stop { i2 -= 1.0; }
        inc = step;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced round values covering `[start, stop]`, inclusive when the
/// ends are themselves round. Reversed input yields reversed output.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Spacing between the ticks `linear_ticks` would produce.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if stop < start { -step } else { step }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fewest decimal places (up to 12) that print `value` without losing digits. Used when
/// there is no step to derive a precision from.
pub fn precision_for_value(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    (0..12)
        .find(|&p| format!("{:.*}", p, value).parse::<f64>().ok() == Some(value))
        .unwrap_or(12)
}

/// Fixed-point label with thousands separators and a typographic minus.
pub fn format_tick(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    // "-0" after rounding reads as zero
    let is_zero = grouped.chars().all(|c| c == '0' || c == '.' || c == ',');
    if value < 0.0 && !is_zero {
        format!("\u{2212}{grouped}")
    } else {
        grouped
    }
}

/// Compact number for path data: at most three decimals, no trailing zeros.
pub fn format_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{:.3}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_for_reference_values() {
        assert_eq!(
            linear_ticks(45.0, 95.0, 10),
            vec![45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0]
        );
        assert_eq!(tick_step(45.0, 95.0, 10), 5.0);
    }

    #[test]
    fn ticks_for_fractional_range() {
        let t = linear_ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert!((t[1] - 0.1).abs() < 1e-12);
        assert!((t[3] - 0.3).abs() < 1e-12);
        assert_eq!(precision_for_step(tick_step(0.0, 1.0, 10)), 1);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let t = linear_ticks(3.7, 18.2, 5);
        assert_eq!(t, vec![4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]);
    }

    #[test]
    fn degenerate_and_reversed_domains() {
        assert_eq!(linear_ticks(4.0, 4.0, 10), vec![4.0]);
        assert!(linear_ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(linear_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn value_precision_keeps_significant_digits() {
        assert_eq!(precision_for_value(5.5), 1);
        assert_eq!(precision_for_value(0.25), 2);
        assert_eq!(precision_for_value(70.0), 0);
        assert_eq!(precision_for_value(-1.125), 3);
        assert_eq!(format_tick(0.25, precision_for_value(0.25)), "0.25");
    }

    #[test]
    fn labels_group_thousands_and_use_minus_sign() {
        assert_eq!(format_tick(1500.0, 0), "1,500");
        assert_eq!(format_tick(-2.5, 1), "\u{2212}2.5");
        assert_eq!(format_tick(-0.0001, 1), "0.0");
        assert_eq!(format_tick(123456789.0, 0), "123,456,789");
    }

    #[test]
    fn coords_are_compact() {
        assert_eq!(format_coord(40.0), "40");
        assert_eq!(format_coord(370.25), "370.25");
        assert_eq!(format_coord(1.0 / 3.0), "0.333");
        assert_eq!(format_coord(-0.0001), "0");
    }
}
