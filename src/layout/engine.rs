use super::options::{LayoutOptions, WindowSizing};
use crate::error::WindowError;
use crate::geometry::Rect;
use crate::order::{DimOrder, IterOrder};
use crate::window::{NoTransform, Window};

use log::debug;
use std::sync::Arc;

/// Resolved window grid for one input extent.
///
/// Holds the clipped window size and per-axis step; offsets and windows are
/// derived on demand and are identical on every call. Only the validating
/// constructors build one, so `0 < window <= input` and `step >= 1` hold on
/// both axes.
///
/// ```compile_fail
/// use sliding_window::{LayoutOptions, WindowLayout};
///
/// let layout = WindowLayout::new(10, 10, 4, 4, &LayoutOptions::new()).unwrap();
/// let _ = WindowLayout { step_x: 0, ..layout };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowLayout {
    width: usize,
    height: usize,
    window_width: usize,
    window_height: usize,
    step_x: usize,
    step_y: usize,
    dim_order: DimOrder,
    iter_order: IterOrder,
}

impl WindowLayout {
    /// Validate the inputs and resolve the grid for `window_width × window_height`
    /// windows. Window extents larger than the input are clipped to it.
    pub fn new(
        width: usize,
        height: usize,
        window_width: usize,
        window_height: usize,
        options: &LayoutOptions,
    ) -> Result<Self, WindowError> {
        if width == 0 || height == 0 {
            return Err(WindowError::InvalidDimensions { width, height });
        }
        let window_width = window_width.min(width);
        let window_height = window_height.min(height);
        if window_width == 0 || window_height == 0 {
            return Err(WindowError::InvalidWindowSize {
                width: window_width,
                height: window_height,
            });
        }
        let fraction = options.overlap;
        if !(0.0..1.0).contains(&fraction) {
            return Err(WindowError::InvalidOverlap {
                fraction,
                extent: window_width.max(window_height),
            });
        }
        let step_x = axis_step(window_width, fraction)?;
        let step_y = axis_step(window_height, fraction)?;
        debug!(
            "WindowLayout: input {}x{} window {}x{} step {}x{} overlap {:.3}",
            width, height, window_width, window_height, step_x, step_y, fraction
        );
        Ok(Self {
            width,
            height,
            window_width,
            window_height,
            step_x,
            step_y,
            dim_order: options.dim_order,
            iter_order: options.iter_order,
        })
    }

    /// Resolve the window size from a sizing policy, then as [`WindowLayout::new`].
    pub fn from_sizing(
        width: usize,
        height: usize,
        sizing: WindowSizing,
        options: &LayoutOptions,
    ) -> Result<Self, WindowError> {
        if width == 0 || height == 0 {
            return Err(WindowError::InvalidDimensions { width, height });
        }
        let (window_width, window_height) = sizing.resolve(width, height)?;
        Self::new(width, height, window_width, window_height, options)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Window width after clipping to the input.
    #[inline]
    pub fn window_width(&self) -> usize {
        self.window_width
    }
    /// Window height after clipping to the input.
    #[inline]
    pub fn window_height(&self) -> usize {
        self.window_height
    }

    #[inline]
    pub fn step_x(&self) -> usize {
        self.step_x
    }
    #[inline]
    pub fn step_y(&self) -> usize {
        self.step_y
    }

    #[inline]
    pub fn dim_order(&self) -> DimOrder {
        self.dim_order
    }
    #[inline]
    pub fn iter_order(&self) -> IterOrder {
        self.iter_order
    }

    /// Left edges of the window columns, ascending.
    pub fn x_offsets(&self) -> Vec<usize> {
        axis_offsets(self.width - self.window_width, self.step_x)
    }

    /// Top edges of the window rows, ascending.
    pub fn y_offsets(&self) -> Vec<usize> {
        axis_offsets(self.height - self.window_height, self.step_y)
    }

    /// Number of windows produced for `transforms` bound transforms.
    pub fn window_count(&self, transforms: usize) -> usize {
        self.x_offsets().len() * self.y_offsets().len() * (transforms + 1)
    }

    /// Windows without transforms.
    pub fn windows(&self) -> Vec<Window> {
        self.windows_with::<NoTransform>(&[])
    }

    /// Cross the offsets with `transforms`, preceded by an unbound entry.
    ///
    /// Within one `(x, y)` position the unbound window comes first, then one
    /// window per transform in slice order. Positions are visited with the
    /// axis named by `iter_order` varying slowest.
    pub fn windows_with<T: ?Sized>(&self, transforms: &[Arc<T>]) -> Vec<Window<T>> {
        let xs = self.x_offsets();
        let ys = self.y_offsets();
        let mut out = Vec::with_capacity(xs.len() * ys.len() * (transforms.len() + 1));
        let mut push_position = |x: usize, y: usize| {
            let rect = Rect::new(x, y, self.window_width, self.window_height);
            out.push(Window::unchecked(rect, self.dim_order, None));
            for transform in transforms {
                let bound = Some(Arc::clone(transform));
                out.push(Window::unchecked(rect, self.dim_order, bound));
            }
        };
        match self.iter_order {
            IterOrder::XOuter => {
                for &x in &xs {
                    for &y in &ys {
                        push_position(x, y);
                    }
                }
            }
            IterOrder::YOuter => {
                for &y in &ys {
                    for &x in &xs {
                        push_position(x, y);
                    }
                }
            }
        }
        debug!(
            "WindowLayout: {} columns x {} rows x {} bindings -> {} windows ({})",
            xs.len(),
            ys.len(),
            transforms.len() + 1,
            out.len(),
            self.iter_order
        );
        out
    }
}

fn axis_step(window: usize, fraction: f64) -> Result<usize, WindowError> {
    let overlap = (window as f64 * fraction).floor() as usize;
    if overlap >= window {
        return Err(WindowError::InvalidOverlap {
            fraction,
            extent: window,
        });
    }
    Ok(window - overlap)
}

/// `0, step, 2·step, …` up to `last`, with `last` appended when the sequence
/// stops short of it.
fn axis_offsets(last: usize, step: usize) -> Vec<usize> {
    let mut offsets: Vec<usize> = (0..=last).step_by(step).collect();
    if offsets.last() != Some(&last) {
        offsets.push(last);
    }
    offsets
}

/// Windows of `window_width × window_height` over a `width × height` input.
pub fn layout_by_size<T: ?Sized>(
    width: usize,
    height: usize,
    window_width: usize,
    window_height: usize,
    options: &LayoutOptions,
    transforms: &[Arc<T>],
) -> Result<Vec<Window<T>>, WindowError> {
    let layout = WindowLayout::new(width, height, window_width, window_height, options)?;
    Ok(layout.windows_with(transforms))
}

/// Windows sized `ceil(width / count_x) × ceil(height / count_y)`.
pub fn layout_by_count<T: ?Sized>(
    width: usize,
    height: usize,
    count_x: usize,
    count_y: usize,
    options: &LayoutOptions,
    transforms: &[Arc<T>],
) -> Result<Vec<Window<T>>, WindowError> {
    let sizing = WindowSizing::Count {
        x: count_x,
        y: count_y,
    };
    let layout = WindowLayout::from_sizing(width, height, sizing, options)?;
    Ok(layout.windows_with(transforms))
}

/// Windows over an array shape, reading width and height at the positions
/// given by `options.dim_order`.
pub fn layout_from_shape<T: ?Sized>(
    shape: &[usize],
    sizing: WindowSizing,
    options: &LayoutOptions,
    transforms: &[Arc<T>],
) -> Result<Vec<Window<T>>, WindowError> {
    let (width, height) = options.dim_order.spatial_extent(shape)?;
    let layout = WindowLayout::from_sizing(width, height, sizing, options)?;
    Ok(layout.windows_with(transforms))
}

/// [`layout_from_shape`] for any array exposing its shape.
pub fn layout_for_array<A, T>(
    array: &A,
    sizing: WindowSizing,
    options: &LayoutOptions,
    transforms: &[Arc<T>],
) -> Result<Vec<Window<T>>, WindowError>
where
    A: crate::array::ArrayShape + ?Sized,
    T: ?Sized,
{
    layout_from_shape(&array.shape(), sizing, options, transforms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects<T: ?Sized>(windows: &[Window<T>]) -> Vec<(usize, usize, usize, usize)> {
        windows.iter().map(|w| w.rect().into()).collect()
    }

    #[test]
    fn offsets_append_last_when_step_falls_short() {
        assert_eq!(axis_offsets(66, 34), vec![0, 34, 66]);
        assert_eq!(axis_offsets(10, 5), vec![0, 5, 10]);
        assert_eq!(axis_offsets(0, 7), vec![0]);
        assert_eq!(axis_offsets(9, 4), vec![0, 4, 8, 9]);
    }

    #[test]
    fn oversized_window_is_clipped_to_input() {
        let opts = LayoutOptions::new();
        let windows = layout_by_size::<NoTransform>(10, 10, 50, 50, &opts, &[]).unwrap();
        assert_eq!(rects(&windows), vec![(0, 0, 10, 10)]);
    }

    #[test]
    fn count_sizing_covers_with_appended_offset() {
        let sizing = WindowSizing::Count { x: 3, y: 2 };
        let layout = WindowLayout::from_sizing(100, 50, sizing, &LayoutOptions::new()).unwrap();
        assert_eq!((layout.window_width(), layout.window_height()), (34, 25));
        assert_eq!((layout.width(), layout.height()), (100, 50));
        assert_eq!(layout.x_offsets(), vec![0, 34, 66]);
        assert_eq!(layout.y_offsets(), vec![0, 25]);
        assert_eq!(layout.window_count(0), 6);
        assert_eq!(layout.windows().len(), 6);
    }

    #[test]
    fn overlap_sets_step() {
        let opts = LayoutOptions::new().with_overlap(0.5);
        let layout = WindowLayout::new(20, 12, 8, 5, &opts).unwrap();
        assert_eq!((layout.step_x(), layout.step_y()), (4, 3));
        assert_eq!(layout.x_offsets(), vec![0, 4, 8, 12]);
        assert_eq!(layout.y_offsets(), vec![0, 3, 6, 7]);
    }

    #[test]
    fn transforms_are_innermost() {
        let t: Arc<fn(u8) -> u8> = Arc::new(u8::wrapping_neg as fn(u8) -> u8);
        let opts = LayoutOptions::new().with_iter_order(IterOrder::XOuter);
        let windows = layout_by_size(4, 2, 2, 2, &opts, &[Arc::clone(&t)]).unwrap();
        let order: Vec<_> = windows
            .iter()
            .map(|w| (w.x(), w.y(), w.transform().is_some()))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0, false), (0, 0, true), (2, 0, false), (2, 0, true)]
        );
        assert!(Arc::ptr_eq(windows[1].transform().unwrap(), &t));
    }

    #[test]
    fn invalid_inputs_fail_fast() {
        let opts = LayoutOptions::new();
        assert_eq!(
            WindowLayout::new(0, 5, 2, 2, &opts),
            Err(WindowError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            WindowLayout::new(5, 5, 0, 2, &opts),
            Err(WindowError::InvalidWindowSize { width: 0, height: 2 })
        );
        assert!(matches!(
            WindowLayout::new(5, 5, 2, 2, &opts.with_overlap(1.0)),
            Err(WindowError::InvalidOverlap { .. })
        ));
        assert!(matches!(
            WindowLayout::new(5, 5, 2, 2, &opts.with_overlap(-0.1)),
            Err(WindowError::InvalidOverlap { .. })
        ));
        assert!(matches!(
            WindowLayout::new(5, 5, 2, 2, &opts.with_overlap(f64::NAN)),
            Err(WindowError::InvalidOverlap { .. })
        ));
        assert_eq!(
            layout_by_count::<NoTransform>(5, 5, 2, 0, &opts, &[]),
            Err(WindowError::InvalidWindowCount { x: 2, y: 0 })
        );
        assert_eq!(
            layout_by_count::<NoTransform>(0, 5, 0, 0, &opts, &[]),
            Err(WindowError::InvalidDimensions { width: 0, height: 5 })
        );
    }

    #[test]
    fn near_unit_overlap_keeps_unit_step() {
        let fraction = 1.0 - f64::EPSILON / 2.0;
        for window in 1..=64 {
            assert_eq!(axis_step(window, fraction), Ok(1), "window {window}");
        }
    }

    #[test]
    fn shape_order_selects_axes() {
        let opts = LayoutOptions::new().with_dim_order(DimOrder::ChannelHeightWidth);
        let sizing = WindowSizing::Square { size: 16 };
        let windows = layout_from_shape::<NoTransform>(&[3, 20, 30], sizing, &opts, &[]).unwrap();
        assert_eq!(
            rects(&windows),
            vec![(0, 0, 16, 16), (14, 0, 16, 16), (0, 4, 16, 16), (14, 4, 16, 16)]
        );
        assert!(windows.iter().all(|w| w.dim_order() == DimOrder::ChannelHeightWidth));
    }

    #[test]
    fn accessors_report_resolved_grid() {
        let opts = LayoutOptions::new()
            .with_overlap(0.5)
            .with_dim_order(DimOrder::ChannelHeightWidth)
            .with_iter_order(IterOrder::XOuter);
        let layout = WindowLayout::new(12, 6, 40, 4, &opts).unwrap();
        assert_eq!((layout.window_width(), layout.window_height()), (12, 4));
        assert_eq!((layout.step_x(), layout.step_y()), (6, 2));
        assert_eq!(layout.dim_order(), DimOrder::ChannelHeightWidth);
        assert_eq!(layout.iter_order(), IterOrder::XOuter);
        assert_eq!(layout.x_offsets(), vec![0]);
        assert_eq!(layout.y_offsets(), vec![0, 2]);
    }
}
