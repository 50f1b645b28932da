// File: crates/tschart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart renderer, SVG model and host adapters.

pub mod axis;
pub mod chart;
pub mod error;
pub mod host;
pub mod line;
pub mod page;
pub mod scale;
pub mod series;
pub mod svg;
pub mod ticks;
pub mod time;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use chart::{mount, render, render_into, RenderedChart};
pub use error::{AxisKind, ChartError};
pub use host::{parse_timestamp, ChartData, HostAttributes};
pub use page::{HtmlPage, Page, Selector};
pub use scale::{LinearScale, Scale, TimeScale};
pub use series::{Point, Series, Summary};
pub use svg::SvgElement;
pub use types::{ChartConfig, LineStyle, Margins};
