// File: crates/tschart-core/tests/scenario.rs
// Purpose: Reference scenario (six monthly-ish readings on a 640x400 chart) and axis content.

use chrono::{DateTime, TimeZone, Utc};
use tschart_core::line::parse_line_path;
use tschart_core::{render, ChartConfig, Series};

fn ymd(m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, m, d, 0, 0, 0).unwrap()
}

fn reference_series() -> Series {
    let mut s = Series::new();
    s.push(ymd(2, 15), 45.0);
    s.push(ymd(4, 10), 62.0);
    s.push(ymd(6, 25), 58.0);
    s.push(ymd(8, 1), 75.0);
    s.push(ymd(10, 18), 88.0);
    s.push(ymd(12, 5), 95.0);
    s
}

#[test]
fn reference_chart_geometry() {
    let chart = render(&reference_series(), &ChartConfig::new("#graph")).unwrap();

    assert_eq!(chart.x_domain(), (ymd(2, 15), ymd(12, 5)));
    assert_eq!(chart.y_domain(), (45.0, 95.0));

    let pts = chart.points();
    assert_eq!(pts.first(), Some(&(40.0, 370.0)));
    assert_eq!(pts.last(), Some(&(620.0, 20.0)));

    let d = chart.path_data().expect("line path");
    assert!(d.starts_with("M40,370L"), "{d}");
    assert!(d.ends_with("L620,20"), "{d}");
    assert_eq!(parse_line_path(d).unwrap().len(), 6);

    let stats = chart.summary().expect("summary");
    assert_eq!((stats.count, stats.min, stats.max, stats.mean), (6, 45.0, 95.0, 70.5));
}

#[test]
fn reference_chart_axes() {
    let chart = render(&reference_series(), &ChartConfig::new("#graph")).unwrap();
    let svg = chart.svg();
    assert_eq!(svg.get_attr("viewBox"), Some("0 0 640 400"));

    let groups: Vec<_> = svg.elements().filter(|e| e.name() == "g").collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].get_attr("transform"), Some("translate(0,370)"));
    assert_eq!(groups[1].get_attr("transform"), Some("translate(40,0)"));

    let month_labels: Vec<String> = groups[0].find_all("text").iter().map(|t| t.text_content()).collect();
    assert_eq!(month_labels.first().map(String::as_str), Some("March"));
    assert_eq!(month_labels.last().map(String::as_str), Some("December"));
    assert_eq!(month_labels.len(), 10);

    let value_labels: Vec<String> = groups[1].find_all("text").iter().map(|t| t.text_content()).collect();
    assert_eq!(value_labels.first().map(String::as_str), Some("45"));
    assert_eq!(value_labels.last().map(String::as_str), Some("95"));
}

#[test]
fn custom_size_and_margins_move_the_plot_area() {
    let mut cfg = ChartConfig::new("#graph");
    cfg.width = 1000;
    cfg.height = 500;
    cfg.margins.left = 60;
    let chart = render(&reference_series(), &cfg).unwrap();
    assert_eq!(chart.points().first(), Some(&(60.0, 470.0)));
    assert_eq!(chart.points().last(), Some(&(980.0, 20.0)));
    assert_eq!((chart.width(), chart.height()), (1000, 500));
}

#[test]
fn flat_series_is_labelled_with_its_actual_value() {
    for (value, want) in [(5.5, "5.5"), (0.25, "0.25")] {
        let mut s = Series::new();
        s.push(ymd(3, 1), value);
        s.push(ymd(3, 9), value);
        let chart = render(&s, &ChartConfig::new("#graph")).unwrap();
        let y_axis = chart.svg().elements().filter(|e| e.name() == "g").nth(1).unwrap();
        let labels: Vec<String> = y_axis.find_all("text").iter().map(|t| t.text_content()).collect();
        assert_eq!(labels, vec![want.to_string()]);
    }
}
