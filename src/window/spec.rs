use crate::error::WindowError;
use std::ops::Range;

/// Selection along one axis of an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRange {
    /// Every index of the axis.
    Full,
    /// Half-open `[start, end)`.
    Span { start: usize, end: usize },
}

impl AxisRange {
    pub const fn span(start: usize, end: usize) -> Self {
        AxisRange::Span { start, end }
    }

    /// Concrete index range on an axis of length `extent`.
    pub fn resolve(&self, axis: usize, extent: usize) -> Result<Range<usize>, WindowError> {
        match *self {
            AxisRange::Full => Ok(0..extent),
            AxisRange::Span { start, end } if start <= end && end <= extent => Ok(start..end),
            AxisRange::Span { end, .. } => Err(WindowError::OutOfBounds { axis, end, extent }),
        }
    }
}

/// Axis-ordered slice request. Entry `i` applies to axis `i`; axes past the
/// end of the list are left whole.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexSpec(Vec<AxisRange>);

impl IndexSpec {
    pub fn new(ranges: Vec<AxisRange>) -> Self {
        Self(ranges)
    }

    /// Number of leading axes the request touches.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[AxisRange] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisRange> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a IndexSpec {
    type Item = &'a AxisRange;
    type IntoIter = std::slice::Iter<'a, AxisRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
