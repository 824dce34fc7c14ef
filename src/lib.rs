//! Coverage-complete sliding window layouts for tiled image processing.
//!
//! The [`layout`] engine turns an input extent, a window sizing policy and an
//! overlap fraction into an ordered list of [`Window`]s whose union covers the
//! input exactly. Each window can slice a caller-supplied array
//! ([`SliceArray`]) and run a bound [`Transform`] over the resulting view.
//!
//! ```
//! use sliding_window::prelude::*;
//! use ndarray::Array3;
//!
//! let image = Array3::<f32>::zeros((3, 100, 120));
//! let options = LayoutOptions::new()
//!     .with_overlap(0.25)
//!     .with_dim_order(DimOrder::ChannelHeightWidth);
//! let windows = layout_for_array::<_, NoTransform>(
//!     &image,
//!     WindowSizing::Square { size: 64 },
//!     &options,
//!     &[],
//! )
//! .unwrap();
//! // columns at 0, 48, 56 and rows at 0, 36
//! assert_eq!(windows.len(), 6);
//! let tile = windows[3].apply(&image).unwrap().into_inner();
//! assert_eq!(tile.shape(), &[3, 64, 64]);
//! ```

pub mod array;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image;
pub mod io;
pub mod layout;
pub mod order;
pub mod window;

pub use crate::array::{ArrayShape, SliceArray};
pub use crate::error::WindowError;
pub use crate::geometry::Rect;
pub use crate::layout::{
    layout_by_count, layout_by_size, layout_for_array, layout_from_shape, LayoutOptions,
    WindowLayout, WindowSizing,
};
pub use crate::order::{Axis, DimOrder, IterOrder};
pub use crate::window::{Applied, AxisRange, IndexSpec, NoTransform, Transform, Window};

/// Everything needed to lay out and apply windows.
pub mod prelude {
    pub use crate::image::{ImageBuffer, ImageView, StridedImage};
    pub use crate::{
        layout_by_count, layout_by_size, layout_for_array, layout_from_shape, Applied, ArrayShape,
        DimOrder, IterOrder, LayoutOptions, NoTransform, Rect, SliceArray, Transform, Window,
        WindowError, WindowLayout, WindowSizing,
    };
}
