//! Array collaborators: shape introspection and range slicing.
//!
//! The layout engine only needs [`ArrayShape`]; [`Window::apply`] needs
//! [`SliceArray`]. Both are implemented for `ndarray` arrays and views of any
//! rank and for the crate's interleaved images (shape `[h, w, channels]`).
//!
//! [`Window::apply`]: crate::window::Window::apply
use crate::error::WindowError;
use crate::geometry::Rect;
use crate::image::{ImageBuffer, StridedImage};
use crate::window::IndexSpec;
use ndarray::{Array, ArrayView, ArrayViewD, Axis as NdAxis, Dimension, Slice};

/// Extent of every axis, outermost first.
pub trait ArrayShape {
    fn shape(&self) -> Vec<usize>;
}

/// Arrays that can be cut down by an [`IndexSpec`].
pub trait SliceArray: ArrayShape {
    /// Borrowed result of slicing.
    type View<'a>
    where
        Self: 'a;

    fn slice(&self, spec: &IndexSpec) -> Result<Self::View<'_>, WindowError>;
}

fn check_rank(spec: &IndexSpec, ndim: usize) -> Result<(), WindowError> {
    if spec.rank() > ndim {
        return Err(WindowError::UnsupportedGeometry(format!(
            "{} ranges requested for a {ndim}-axis array",
            spec.rank()
        )));
    }
    Ok(())
}

fn slice_dyn<'a, A>(
    mut view: ArrayViewD<'a, A>,
    spec: &IndexSpec,
) -> Result<ArrayViewD<'a, A>, WindowError> {
    check_rank(spec, view.ndim())?;
    for (axis, range) in spec.iter().enumerate() {
        let r = range.resolve(axis, view.len_of(NdAxis(axis)))?;
        view.slice_axis_inplace(NdAxis(axis), Slice::from(r));
    }
    Ok(view)
}

impl<A, D: Dimension> ArrayShape for Array<A, D> {
    fn shape(&self) -> Vec<usize> {
        self.shape().to_vec()
    }
}

impl<A, D: Dimension> SliceArray for Array<A, D> {
    type View<'a> = ArrayViewD<'a, A> where Self: 'a;

    fn slice(&self, spec: &IndexSpec) -> Result<ArrayViewD<'_, A>, WindowError> {
        slice_dyn(self.view().into_dyn(), spec)
    }
}

impl<'v, A, D: Dimension> ArrayShape for ArrayView<'v, A, D> {
    fn shape(&self) -> Vec<usize> {
        self.shape().to_vec()
    }
}

impl<'v, A, D: Dimension> SliceArray for ArrayView<'v, A, D> {
    type View<'a> = ArrayViewD<'a, A> where Self: 'a;

    fn slice(&self, spec: &IndexSpec) -> Result<ArrayViewD<'_, A>, WindowError> {
        slice_dyn(self.view().into_dyn(), spec)
    }
}

/// Crop an interleaved image. The channel axis can only be taken whole.
fn slice_image<'a, P: Copy>(
    image: StridedImage<'a, P>,
    spec: &IndexSpec,
) -> Result<StridedImage<'a, P>, WindowError> {
    check_rank(spec, 3)?;
    let extents = [image.h, image.w, image.channels];
    let mut rows = 0..image.h;
    let mut cols = 0..image.w;
    for (axis, range) in spec.iter().enumerate() {
        let r = range.resolve(axis, extents[axis])?;
        match axis {
            0 => rows = r,
            1 => cols = r,
            _ if r != (0..image.channels) => {
                return Err(WindowError::UnsupportedGeometry(format!(
                    "interleaved images cannot select channels {r:?} of {}",
                    image.channels
                )));
            }
            _ => {}
        }
    }
    image.crop(Rect::new(cols.start, rows.start, cols.len(), rows.len()))
}

impl<'v, P: Copy> ArrayShape for StridedImage<'v, P> {
    fn shape(&self) -> Vec<usize> {
        vec![self.h, self.w, self.channels]
    }
}

impl<'v, P: Copy> SliceArray for StridedImage<'v, P> {
    type View<'a> = StridedImage<'a, P> where Self: 'a;

    fn slice(&self, spec: &IndexSpec) -> Result<StridedImage<'_, P>, WindowError> {
        slice_image(*self, spec)
    }
}

impl<P: Copy> ArrayShape for ImageBuffer<P> {
    fn shape(&self) -> Vec<usize> {
        vec![self.h, self.w, self.channels]
    }
}

impl<P: Copy> SliceArray for ImageBuffer<P> {
    type View<'a> = StridedImage<'a, P> where Self: 'a;

    fn slice(&self, spec: &IndexSpec) -> Result<StridedImage<'_, P>, WindowError> {
        slice_image(self.as_view(), spec)
    }
}
