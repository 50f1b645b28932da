// File: crates/tschart-core/tests/mount.rs
// Purpose: Mount substitution behaviour against in-memory pages and a custom Page impl.

use chrono::{TimeZone, Utc};
use tschart_core::{mount, render, render_into, ChartConfig, ChartError, HtmlPage, Page, Series};

const PAGE: &str = r#"<main><p>Living room</p><div id="graph" class="placeholder">loading...</div></main>"#;

fn series() -> Series {
    let mut s = Series::new();
    s.push(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(), 19.5);
    s.push(Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap(), 21.0);
    s
}

#[test]
fn unmatched_selector_reports_and_leaves_page_unchanged() {
    let mut page = HtmlPage::new(PAGE);
    let err = render_into(&mut page, &series(), &ChartConfig::new("#missing")).unwrap_err();
    assert_eq!(err, ChartError::MountNotFound { selector: "#missing".to_string() });
    assert_eq!(page.as_str(), PAGE);
}

#[test]
fn failed_render_never_touches_page() {
    let mut page = HtmlPage::new(PAGE);
    let err = render_into(&mut page, &Series::new(), &ChartConfig::new("#graph")).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDomain { .. }));
    assert_eq!(page.as_str(), PAGE);
}

#[test]
fn second_mount_on_same_target_is_last_write_wins() {
    let mut page = HtmlPage::new(PAGE);
    let chart = render(&series(), &ChartConfig::new("svg")).unwrap();
    let mut other_cfg = ChartConfig::new("svg");
    other_cfg.line.stroke = "steelblue".to_string();
    let other = render(&series(), &other_cfg).unwrap();

    // mount into the placeholder, then replace that chart by selecting the svg itself
    mount(&mut page, "div.placeholder", &chart).unwrap();
    mount(&mut page, "svg", &other).unwrap();
    assert!(page.as_str().contains("steelblue"));
    assert!(!page.as_str().contains(r#"stroke="green""#));
}

/// Page that records calls instead of editing markup.
#[derive(Default)]
struct RecordingPage {
    known: Vec<&'static str>,
    mounted: Vec<(String, usize)>,
}

impl Page for RecordingPage {
    fn replace_element(&mut self, selector: &str, markup: &str) -> bool {
        if !self.known.contains(&selector) {
            return false;
        }
        self.mounted.push((selector.to_string(), markup.len()));
        true
    }
}

#[test]
fn custom_page_implementations_receive_full_markup() {
    let mut page = RecordingPage { known: vec!["#graph"], ..Default::default() };
    let chart = render(&series(), &ChartConfig::new("#graph")).unwrap();
    mount(&mut page, "#graph", &chart).unwrap();
    assert_eq!(page.mounted, vec![("#graph".to_string(), chart.to_svg_string().len())]);

    let err = mount(&mut page, "#other", &chart).unwrap_err();
    assert!(matches!(err, ChartError::MountNotFound { .. }));
    assert_eq!(page.mounted.len(), 1);
}
