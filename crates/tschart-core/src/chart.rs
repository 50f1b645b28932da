// File: crates/tschart-core/src/chart.rs
// Summary: Render pipeline (validate -> domains -> scales -> axes + line -> SVG) and mounting.

use chrono::{DateTime, Utc};

use crate::axis::Axis;
use crate::error::{AxisKind, ChartError, Result};
use crate::line::line_path;
use crate::page::Page;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::series::{Series, Summary};
use crate::svg::{SvgElement, SVG_NS};
use crate::types::ChartConfig;

/// Finished chart. Built once by [`render`], never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    width: u32,
    height: u32,
    x_domain: (DateTime<Utc>, DateTime<Utc>),
    y_domain: (f64, f64),
    points: Vec<(f64, f64)>,
    summary: Option<Summary>,
    root: SvgElement,
}

impl RenderedChart {
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    /// Horizontal domain the chart was drawn with.
    pub fn x_domain(&self) -> (DateTime<Utc>, DateTime<Utc>) { self.x_domain }
    /// Vertical domain the chart was drawn with.
    pub fn y_domain(&self) -> (f64, f64) { self.y_domain }
    /// Pixel positions of the data points, in input order.
    pub fn points(&self) -> &[(f64, f64)] { &self.points }
    pub fn svg(&self) -> &SvgElement { &self.root }
    /// Statistics of the plotted values; `None` for an empty dataset.
    pub fn summary(&self) -> Option<Summary> { self.summary }

    /// `d` attribute of the data line, if the dataset had any points.
    pub fn path_data(&self) -> Option<&str> {
        self.root
            .elements()
            .find(|e| e.name() == "path" && e.get_attr("class") == Some("line"))
            .and_then(|p| p.get_attr("d"))
    }

    pub fn to_svg_string(&self) -> String {
        self.root.to_string()
    }
}

/// Render `series` as a static line chart.
///
/// Fails before building anything when a point has a non-finite value (the whole render is
/// aborted, no point is skipped), when the plot area is empty, or when a domain cannot be
/// derived: an axis needs either data or both of its bounds in `config`.
pub fn render(series: &Series, config: &ChartConfig) -> Result<RenderedChart> {
    check_dimensions(config)?;
    check_points(series)?;

    let x_domain = x_domain(series, config)?;
    let y_domain = y_domain(series, config)?;
    tracing::debug!(?x_domain, ?y_domain, points = series.len(), "resolved chart domains");

    let x = TimeScale::new(x_domain, (config.plot_left(), config.plot_right()));
    let y = LinearScale::new(y_domain, (config.plot_bottom(), config.plot_top()));

    let (width, height) = (config.width, config.height);
    let mut root = SvgElement::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("width", width)
        .attr("height", height)
        .attr("viewBox", format!("0 0 {width} {height}"));

    let mut x_axis = Axis::bottom(&x).render();
    x_axis.set_attr("transform", format!("translate(0,{})", config.plot_bottom()));
    root.push(x_axis);

    let mut y_axis = Axis::left(&y).render();
    y_axis.set_attr("transform", format!("translate({},0)", config.plot_left()));
    root.push(y_axis);

    let points: Vec<(f64, f64)> = series.iter().map(|p| (x.map(p.date), y.map(p.value))).collect();
    let mut path = SvgElement::new("path")
        .attr("class", "line")
        .attr("fill", "none")
        .attr("stroke", &config.line.stroke)
        .attr("stroke-width", config.line.stroke_width);
    if let Some(d) = line_path(&points) {
        tracing::debug!(path = %d, "generated line path");
        path.set_attr("d", d);
    }
    root.push(path);

    let summary = series.summary();
    if let Some(stats) = &summary {
        tracing::debug!(%stats, "series summary");
    }
    Ok(RenderedChart { width, height, x_domain, y_domain, points, summary, root })
}

/// Replace the element matched by `selector` with the chart.
///
/// A selector that matches nothing is logged and returned as `MountNotFound`; the page is
/// left untouched in that case.
pub fn mount<P: Page + ?Sized>(page: &mut P, selector: &str, chart: &RenderedChart) -> Result<()> {
    if page.replace_element(selector, &chart.to_svg_string()) {
        tracing::debug!(selector, "chart mounted");
        Ok(())
    } else {
        tracing::error!(selector, "could not find mount element for chart");
        Err(ChartError::MountNotFound { selector: selector.to_string() })
    }
}

/// `render` followed by `mount` at `config.target`.
pub fn render_into<P: Page + ?Sized>(page: &mut P, series: &Series, config: &ChartConfig) -> Result<()> {
    let chart = render(series, config)?;
    mount(page, &config.target, &chart)
}

// ---- helpers ----------------------------------------------------------------

fn check_dimensions(config: &ChartConfig) -> Result<()> {
    if config.plot_right() <= config.plot_left() || config.plot_bottom() <= config.plot_top() {
        return Err(ChartError::InvalidDimensions {
            width: config.width,
            height: config.height,
            horizontal: config.margins.hsum(),
            vertical: config.margins.vsum(),
        });
    }
    Ok(())
}

fn check_points(series: &Series) -> Result<()> {
    match series.iter().position(|p| !p.value.is_finite()) {
        Some(index) => Err(ChartError::MalformedPoint {
            index,
            reason: format!("value {} is not a finite number", series.points()[index].value),
        }),
        None => Ok(()),
    }
}

/// Both bounds, one bound (ignored with a warning), or none.
fn explicit_bounds<T: Copy + std::fmt::Debug>(axis: AxisKind, min: Option<T>, max: Option<T>) -> Option<(T, T)> {
    match (min, max) {
        (Some(lo), Some(hi)) => Some((lo, hi)),
        (None, None) => None,
        (lo, hi) => {
            tracing::warn!(%axis, ?lo, ?hi, "only one domain bound supplied; using data extent instead");
            None
        }
    }
}

fn x_domain(series: &Series, config: &ChartConfig) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    match explicit_bounds(AxisKind::X, config.x_min, config.x_max) {
        Some((lo, hi)) if lo > hi => Err(ChartError::InvalidBounds {
            axis: AxisKind::X,
            min: lo.to_rfc3339(),
            max: hi.to_rfc3339(),
        }),
        Some(bounds) => Ok(bounds),
        None => series.date_extent().ok_or(ChartError::EmptyDomain { axis: AxisKind::X }),
    }
}

fn y_domain(series: &Series, config: &ChartConfig) -> Result<(f64, f64)> {
    match explicit_bounds(AxisKind::Y, config.y_min, config.y_max) {
        Some((lo, hi)) if !lo.is_finite() || !hi.is_finite() || lo > hi => Err(ChartError::InvalidBounds {
            axis: AxisKind::Y,
            min: lo.to_string(),
            max: hi.to_string(),
        }),
        Some(bounds) => Ok(bounds),
        None => series.value_extent().ok_or(ChartError::EmptyDomain { axis: AxisKind::Y }),
    }
}
