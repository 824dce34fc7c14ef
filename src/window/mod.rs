//! Window view: one rectangle of a larger array plus an optional transform.
//!
//! A window stores coordinates only. Pixels are touched when [`Window::apply`]
//! slices a caller-supplied array through [`SliceArray`], which for the
//! array types in this crate yields a non-copying view.
mod batch;
mod spec;
mod transform;

#[cfg(feature = "parallel")]
pub use self::batch::par_apply_all;
pub use self::batch::apply_all;
pub use self::spec::{AxisRange, IndexSpec};
pub use self::transform::{Applied, NoTransform, Transform};

use crate::array::SliceArray;
use crate::error::WindowError;
use crate::geometry::Rect;
use crate::order::DimOrder;
use std::fmt;
use std::sync::Arc;

/// Result type of applying a `Window<T>` to an array of type `A`.
pub type AppliedView<'a, A, T> =
    Applied<<A as SliceArray>::View<'a>, <T as Transform<<A as SliceArray>::View<'a>>>::Output>;

/// One rectangle of a larger array, optionally bound to a shared transform.
pub struct Window<T: ?Sized = NoTransform> {
    rect: Rect,
    dim_order: DimOrder,
    transform: Option<Arc<T>>,
}

impl<T: ?Sized> Window<T> {
    /// Window over `rect` with no transform bound.
    pub fn new(rect: Rect, dim_order: DimOrder) -> Result<Self, WindowError> {
        check_extent(rect)?;
        Ok(Self::unchecked(rect, dim_order, None))
    }

    pub(crate) fn unchecked(rect: Rect, dim_order: DimOrder, transform: Option<Arc<T>>) -> Self {
        Self {
            rect,
            dim_order,
            transform,
        }
    }

    pub fn with_transform(mut self, transform: Arc<T>) -> Self {
        self.transform = Some(transform);
        self
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.rect.x
    }
    #[inline]
    pub fn y(&self) -> usize {
        self.rect.y
    }
    #[inline]
    pub fn w(&self) -> usize {
        self.rect.w
    }
    #[inline]
    pub fn h(&self) -> usize {
        self.rect.h
    }

    /// Bounds as `(x, y, w, h)`.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replace all four bounds at once. Zero extents, or edges past
    /// `usize::MAX`, are rejected and leave the window unchanged.
    pub fn set_rect(&mut self, rect: Rect) -> Result<(), WindowError> {
        check_extent(rect)?;
        self.rect = rect;
        Ok(())
    }

    #[inline]
    pub fn dim_order(&self) -> DimOrder {
        self.dim_order
    }

    pub fn transform(&self) -> Option<&Arc<T>> {
        self.transform.as_ref()
    }

    /// Per-axis ranges selecting this window from an array of the window's
    /// dimension order.
    ///
    /// Channel-last always yields `[rows, cols]`; the trailing channel axis is
    /// left whole. Channel-first yields `[.., rows, cols]` when
    /// `include_channel` is set, otherwise `[rows, cols]` for an array whose
    /// channel axis has already been indexed away.
    pub fn index_spec(&self, include_channel: bool) -> IndexSpec {
        let rows = AxisRange::span(self.rect.y, self.rect.bottom());
        let cols = AxisRange::span(self.rect.x, self.rect.right());
        match self.dim_order {
            DimOrder::HeightWidthChannel => IndexSpec::new(vec![rows, cols]),
            DimOrder::ChannelHeightWidth if include_channel => {
                IndexSpec::new(vec![AxisRange::Full, rows, cols])
            }
            DimOrder::ChannelHeightWidth => IndexSpec::new(vec![rows, cols]),
        }
    }

    /// Slice `array` to this window and run the bound transform, if any.
    ///
    /// Slicing errors are reported as `WindowError`; whatever the transform
    /// returns is handed back untouched.
    pub fn apply<'a, A>(&self, array: &'a A) -> Result<AppliedView<'a, A, T>, WindowError>
    where
        A: SliceArray + ?Sized,
        T: Transform<A::View<'a>>,
    {
        let view = array.slice(&self.index_spec(true))?;
        Ok(match &self.transform {
            Some(transform) => Applied::Transformed(transform.apply(view)),
            None => Applied::Raw(view),
        })
    }
}

fn check_extent(rect: Rect) -> Result<(), WindowError> {
    let overflows = rect.x.checked_add(rect.w).is_none() || rect.y.checked_add(rect.h).is_none();
    if rect.is_empty() || overflows {
        return Err(WindowError::InvalidGeometry {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        });
    }
    Ok(())
}

impl<T: ?Sized> Clone for Window<T> {
    fn clone(&self) -> Self {
        Self {
            rect: self.rect,
            dim_order: self.dim_order,
            transform: self.transform.clone(),
        }
    }
}

/// Equal geometry, equal order, and the same transform instance.
impl<T: ?Sized> PartialEq for Window<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_transform = match (&self.transform, &other.transform) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.rect == other.rect && self.dim_order == other.dim_order && same_transform
    }
}

impl<T: ?Sized> fmt::Debug for Window<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("rect", &self.rect)
            .field("dim_order", &self.dim_order)
            .field("has_transform", &self.transform.is_some())
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for Window<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rect, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageBuffer, ImageView, StridedImage};

    fn window(x: usize, y: usize, w: usize, h: usize, order: DimOrder) -> Window {
        Window::new(Rect::new(x, y, w, h), order).unwrap()
    }

    #[test]
    fn channel_first_spec_with_and_without_channel() {
        let win = window(2, 3, 4, 5, DimOrder::ChannelHeightWidth);
        assert_eq!(
            win.index_spec(true).as_slice(),
            &[AxisRange::Full, AxisRange::span(3, 8), AxisRange::span(2, 6)]
        );
        assert_eq!(
            win.index_spec(false).as_slice(),
            &[AxisRange::span(3, 8), AxisRange::span(2, 6)]
        );
    }

    #[test]
    fn channel_last_spec_ignores_channel_flag() {
        let win = window(2, 3, 4, 5, DimOrder::HeightWidthChannel);
        let expected = [AxisRange::span(3, 8), AxisRange::span(2, 6)];
        assert_eq!(win.index_spec(true).as_slice(), &expected);
        assert_eq!(win.index_spec(false).as_slice(), &expected);
    }

    #[test]
    fn set_rect_replaces_all_bounds() {
        let mut win = window(0, 0, 4, 4, DimOrder::HeightWidthChannel);
        win.set_rect((1, 2, 3, 5).into()).unwrap();
        assert_eq!(<(usize, usize, usize, usize)>::from(win.rect()), (1, 2, 3, 5));
        assert_eq!(win.to_string(), "(1,2,3,5)");
    }

    #[test]
    fn set_rect_rejects_empty_extent() {
        let mut win = window(0, 0, 4, 4, DimOrder::HeightWidthChannel);
        let err = win.set_rect(Rect::new(1, 1, 0, 3)).unwrap_err();
        assert_eq!(
            err,
            WindowError::InvalidGeometry {
                x: 1,
                y: 1,
                w: 0,
                h: 3
            }
        );
        assert_eq!(win.rect(), Rect::new(0, 0, 4, 4));
        assert!(Window::<NoTransform>::new(Rect::new(0, 0, 2, 0), DimOrder::default()).is_err());
    }

    #[test]
    fn set_rect_rejects_edges_past_usize_max() {
        let mut win = window(0, 0, 4, 4, DimOrder::ChannelHeightWidth);
        assert_eq!(
            win.set_rect(Rect::new(usize::MAX, 0, 1, 1)),
            Err(WindowError::InvalidGeometry {
                x: usize::MAX,
                y: 0,
                w: 1,
                h: 1
            })
        );
        assert!(win.set_rect(Rect::new(0, 1, 1, usize::MAX)).is_err());
        assert_eq!(win.index_spec(true).rank(), 3);
        assert_eq!(win.rect(), Rect::new(0, 0, 4, 4));
        let order = DimOrder::default();
        assert!(Window::<NoTransform>::new(Rect::new(1, 0, usize::MAX, 1), order).is_err());
        assert!(Window::<NoTransform>::new(Rect::new(0, 0, usize::MAX, 1), order).is_ok());
    }

    #[test]
    fn apply_without_transform_returns_view() {
        let mut img = ImageBuffer::<u8>::new(5, 4, 1);
        img.set(3, 2, 0, 9);
        let win = window(2, 1, 2, 2, DimOrder::HeightWidthChannel);
        let view = win.apply(&img).unwrap().into_inner();
        assert_eq!(view, img.as_view().crop(Rect::new(2, 1, 2, 2)).unwrap());
        assert_eq!(view.get(1, 1, 0), 9);
    }

    #[test]
    fn apply_runs_bound_transform() {
        let img = ImageBuffer::from_vec(3, 2, 1, vec![1u32, 2, 3, 4, 5, 6]).unwrap();
        let sum: Arc<dyn Fn(StridedImage<'_, u32>) -> u32> =
            Arc::new(|v: StridedImage<'_, u32>| -> u32 { v.rows().flatten().sum() });
        let win = Window::new(Rect::new(1, 0, 2, 2), DimOrder::HeightWidthChannel)
            .unwrap()
            .with_transform(sum);
        let out = win.apply(&img).unwrap();
        assert!(out.is_transformed());
        assert_eq!(out.transformed(), Some(2 + 3 + 5 + 6));
    }

    #[test]
    fn apply_outside_array_fails() {
        let img = ImageBuffer::<u8>::new(4, 4, 3);
        let win = window(2, 2, 4, 2, DimOrder::HeightWidthChannel);
        assert_eq!(
            win.apply(&img).unwrap_err(),
            WindowError::OutOfBounds {
                axis: 1,
                end: 6,
                extent: 4
            }
        );
    }

    fn double(v: u8) -> u8 {
        v * 2
    }

    #[test]
    fn equality_tracks_transform_identity() {
        let double: Arc<fn(u8) -> u8> = Arc::new(double as fn(u8) -> u8);
        let base = window(0, 0, 2, 2, DimOrder::HeightWidthChannel);
        let a = Window::<fn(u8) -> u8>::new(base.rect(), base.dim_order())
            .unwrap()
            .with_transform(Arc::clone(&double));
        let b = a.clone();
        let c = Window::new(base.rect(), base.dim_order())
            .unwrap()
            .with_transform(Arc::new(*double));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
