// File: crates/tschart-core/tests/properties.rs
// Purpose: Property-style checks over generated datasets: order preservation and
//          monotonic vertical mapping.

use chrono::{TimeDelta, TimeZone, Utc};
use tschart_core::line::parse_line_path;
use tschart_core::{render, ChartConfig, Series};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn sorted_series(rng: &mut Lcg, n: usize) -> Series {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let mut t = start;
    let mut s = Series::new();
    for _ in 0..n {
        t += TimeDelta::minutes(1 + (rng.next_f64() * 600.0) as i64);
        s.push(t, rng.next_f64() * 2000.0 - 1000.0);
    }
    s
}

#[test]
fn path_visits_points_in_input_order() {
    let mut rng = Lcg(7);
    for n in [1usize, 2, 3, 17, 250] {
        let series = sorted_series(&mut rng, n);
        let chart = render(&series, &ChartConfig::new("#c")).unwrap();
        let visited = parse_line_path(chart.path_data().unwrap()).unwrap();
        assert_eq!(visited.len(), n);
        for (got, want) in visited.iter().zip(chart.points()) {
            assert!((got.0 - want.0).abs() < 1e-3 && (got.1 - want.1).abs() < 1e-3);
        }
        // sorted dates -> non-decreasing x
        assert!(visited.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}

#[test]
fn higher_values_plot_higher() {
    let mut rng = Lcg(42);
    for _ in 0..20 {
        let series = sorted_series(&mut rng, 40);
        let chart = render(&series, &ChartConfig::new("#c")).unwrap();
        let pts = chart.points();
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] < values[j] {
                    assert!(pts[i].1 > pts[j].1, "value {} vs {}", values[i], values[j]);
                }
            }
        }
    }
}

#[test]
fn points_stay_inside_plot_area_when_domain_is_data_derived() {
    let mut rng = Lcg(3);
    let cfg = ChartConfig::new("#c");
    let series = sorted_series(&mut rng, 100);
    let chart = render(&series, &cfg).unwrap();
    for &(x, y) in chart.points() {
        assert!(x >= cfg.plot_left() - 1e-9 && x <= cfg.plot_right() + 1e-9);
        assert!(y >= cfg.plot_top() - 1e-9 && y <= cfg.plot_bottom() + 1e-9);
    }
}
