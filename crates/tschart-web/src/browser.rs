// File: crates/tschart-web/src/browser.rs
// Summary: Live DOM page and wasm exports.

use js_sys::{Object, Reflect, JSON};
use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

use tschart_core::{HostAttributes, Page};

use crate::{parse_attributes, render_with, summary_json, HostError};

/// `Page` over the live document: first `querySelector` match, replaced via `outerHTML`.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl Page for DomPage {
    fn replace_element(&mut self, selector: &str, markup: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(el)) => {
                el.set_outer_html(markup);
                true
            }
            Ok(None) => false,
            Err(_) => {
                console::warn_1(&format!("tschart: invalid selector `{selector}`").into());
                false
            }
        }
    }
}

fn report(err: HostError) -> JsValue {
    let msg = format!("tschart: {err}");
    console::error_1(&msg.as_str().into());
    JsValue::from_str(&msg)
}

/// Renders and mounts, then returns the summary statistics as JSON.
fn run(data_json: &str, attrs: &HostAttributes) -> Result<String, JsValue> {
    let mut page = DomPage::from_window().ok_or_else(|| JsValue::from_str("no document"))?;
    let chart = render_with(&mut page, data_json, attrs).map_err(report)?;
    console::log_1(&format!("tschart: path {}", chart.path_data().unwrap_or("")).into());
    summary_json(&chart).map_err(report)
}

/// Entry point for a classic `<script data-target-replace-tag="...">` shim: reads the
/// executing script's dataset and `window.chartData`. Must be called while that script
/// is still running, since `document.currentScript` is null afterwards.
#[wasm_bindgen]
pub fn render_current_script() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let script = document
        .current_script()
        .ok_or_else(|| JsValue::from_str("no current script"))?;

    let dataset = script.dataset();
    let mut attrs = HostAttributes::new();
    for key in Object::keys(&dataset).iter() {
        if let Some(name) = key.as_string() {
            if let Some(value) = dataset.get(&name) {
                attrs.insert(&name, value);
            }
        }
    }

    let data = Reflect::get(&window, &JsValue::from_str("chartData"))?;
    if data.is_undefined() || data.is_null() {
        let msg = "tschart: window.chartData is not set";
        console::error_1(&msg.into());
        return Err(JsValue::from_str(msg));
    }
    let data_json: String = JSON::stringify(&data)?.into();
    run(&data_json, &attrs)
}

/// Explicit entry point: chart data and attributes both passed as JSON text. Returns the
/// summary statistics JSON.
#[wasm_bindgen]
pub fn render_chart(data_json: &str, attrs_json: &str) -> Result<String, JsValue> {
    let attrs = parse_attributes(attrs_json).map_err(report)?;
    run(data_json, &attrs)
}
