// File: crates/tschart-web/src/lib.rs
// Summary: Browser host adapter. Turns the embedding script's attributes plus the page's
//          chart data into a rendered chart mounted on any `Page`; the `browser` feature
//          adds the DOM-backed page and the wasm exports.

use std::collections::BTreeMap;

use tschart_core::{mount, render, ChartError, HostAttributes, Page, RenderedChart};

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(feature = "browser")]
pub use browser::{render_chart, render_current_script, DomPage};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("invalid {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HostError>;

/// Parse a flat JSON object of attributes. Non-string scalars are kept in their JSON
/// spelling, `null` counts as absent.
pub fn parse_attributes(json: &str) -> Result<HostAttributes> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(json).map_err(|source| HostError::Json { what: "attributes", source })?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((k, s)),
            other => Some((k, other.to_string())),
        })
        .collect())
}

/// Full host flow: decode data, build the config from attributes, render, then mount.
/// Nothing touches the page unless rendering succeeded.
pub fn render_with<P: Page + ?Sized>(page: &mut P, data_json: &str, attrs: &HostAttributes) -> Result<RenderedChart> {
    let data = tschart_core::ChartData::from_json(data_json)
        .map_err(|source| HostError::Json { what: "chart data", source })?;
    let series = data.to_series()?;
    let config = attrs.to_config()?;
    let chart = render(&series, &config)?;
    mount(page, &config.target, &chart)?;
    Ok(chart)
}

/// Summary statistics of a rendered chart as JSON (`null` when it had no points), handed
/// back to the page so it can show them beside the chart.
pub fn summary_json(chart: &RenderedChart) -> Result<String> {
    serde_json::to_string(&chart.summary()).map_err(|source| HostError::Json { what: "summary", source })
}
