//! Error type shared by the layout engine and the window view.
use crate::order::Axis;

/// Every failure the crate reports. Errors are raised where the invalid
/// input is detected; no partial window list is ever returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Width or height of the input is zero.
    #[error("invalid input dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Window extent is zero after clipping to the input.
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: usize, height: usize },

    /// Requested window count along an axis is zero.
    #[error("invalid window count {x}x{y}")]
    InvalidWindowCount { x: usize, y: usize },

    /// Overlap fraction outside `[0, 1)` or one that collapses the step.
    #[error("invalid overlap fraction {fraction} for window extent {extent}")]
    InvalidOverlap { fraction: f64, extent: usize },

    /// An axis list that does not name exactly one width and one height axis.
    #[error("invalid dimension order {0:?}")]
    InvalidDimOrder(Vec<Axis>),

    #[error("unsupported dimension order: {0}")]
    UnsupportedDimOrder(String),

    #[error("unsupported iteration order: {0}")]
    UnsupportedIterOrder(String),

    /// Rectangle with a zero extent.
    #[error("invalid window geometry ({x},{y},{w},{h})")]
    InvalidGeometry { x: usize, y: usize, w: usize, h: usize },

    /// Slice request the target array cannot express as a view.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// A range reaches past the extent of the sliced axis.
    #[error("range end {end} exceeds extent {extent} on axis {axis}")]
    OutOfBounds { axis: usize, end: usize, extent: usize },
}
