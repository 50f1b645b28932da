// File: crates/tschart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing an SVG and mounting it into a page.

use tschart_core::{render, render_into, ChartConfig, HtmlPage, Series};
use chrono::{TimeZone, Utc};

fn tiny_series() -> Series {
    let mut s = Series::new();
    for (i, v) in [0.0, 2.0, 1.0, 3.5, 2.5].into_iter().enumerate() {
        s.push(Utc.with_ymd_and_hms(2024, 1, 1 + i as u32, 0, 0, 0).unwrap(), v);
    }
    s
}

#[test]
fn render_smoke_svg() {
    let chart = render(&tiny_series(), &ChartConfig::new("#chart")).expect("render should succeed");
    let svg = chart.to_svg_string();
    assert!(svg.starts_with("<svg "), "should be an svg root");
    assert!(svg.contains(r#"width="640""#));
    assert!(svg.contains(r#"height="400""#));
    assert!(svg.contains(r#"stroke="green""#));

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &svg).expect("write svg");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}

#[test]
fn render_into_page_replaces_placeholder() {
    let mut page = HtmlPage::new(r#"<html><body><h1>Temps</h1><img id="chart" src="loading.gif"></body></html>"#);
    render_into(&mut page, &tiny_series(), &ChartConfig::new("#chart")).expect("mount should succeed");
    let html = page.into_string();
    assert!(html.starts_with("<html><body><h1>Temps</h1><svg "));
    assert!(html.ends_with("</svg></body></html>"));
    assert!(!html.contains("loading.gif"));
}
