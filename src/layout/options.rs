use crate::error::WindowError;
use crate::order::{DimOrder, IterOrder};

use serde::{Deserialize, Serialize};

/// Knobs shared by every layout entry point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Fraction of the window extent shared with the neighbouring window, in `[0, 1)`.
    pub overlap: f64,
    /// Order stamped on every generated window.
    pub dim_order: DimOrder,
    /// Nesting order of the emitted windows.
    pub iter_order: IterOrder,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            overlap: 0.0,
            dim_order: DimOrder::default(),
            iter_order: IterOrder::default(),
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_dim_order(mut self, dim_order: DimOrder) -> Self {
        self.dim_order = dim_order;
        self
    }

    pub fn with_iter_order(mut self, iter_order: IterOrder) -> Self {
        self.iter_order = iter_order;
        self
    }
}

/// How the window extent is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum WindowSizing {
    /// `size × size` windows.
    Square { size: usize },
    /// Explicit `width × height` windows.
    Rect { width: usize, height: usize },
    /// Windows sized to give roughly `x × y` tiles: `ceil(extent / count)`.
    Count { x: usize, y: usize },
}

impl WindowSizing {
    /// Requested `(window_width, window_height)` for an input of the given
    /// extent, before clipping.
    pub fn resolve(&self, width: usize, height: usize) -> Result<(usize, usize), WindowError> {
        match *self {
            WindowSizing::Square { size } => Ok((size, size)),
            WindowSizing::Rect { width, height } => Ok((width, height)),
            WindowSizing::Count { x, y } => {
                if x == 0 || y == 0 {
                    return Err(WindowError::InvalidWindowCount { x, y });
                }
                Ok((width.div_ceil(x), height.div_ceil(y)))
            }
        }
    }
}
