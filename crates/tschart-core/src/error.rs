// File: crates/tschart-core/src/error.rs
// Summary: Error type shared by rendering, mounting and host adapters.

use std::fmt;

/// Which of the two chart axes an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    /// No data to take an extent from and no complete bounds for this axis.
    #[error("cannot derive the {axis} domain: dataset is empty and no bounds were supplied")]
    EmptyDomain { axis: AxisKind },

    #[error("point {index} is malformed: {reason}")]
    MalformedPoint { index: usize, reason: String },

    #[error("{axis} bounds are inverted: min {min} is greater than max {max}")]
    InvalidBounds { axis: AxisKind, min: String, max: String },

    #[error("plot area is empty: {width}x{height} with margins {horizontal} horizontal / {vertical} vertical")]
    InvalidDimensions { width: u32, height: u32, horizontal: u64, vertical: u64 },

    #[error("no element matches mount selector `{selector}`")]
    MountNotFound { selector: String },

    #[error("missing required attribute `{0}`")]
    MissingAttribute(String),

    #[error("attribute `{name}` has invalid value `{value}`")]
    InvalidAttribute { name: String, value: String },

    #[error("chart data has {x} dates but {y} values")]
    LengthMismatch { x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
