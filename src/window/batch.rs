use super::{AppliedView, Transform, Window};
use crate::array::SliceArray;
use crate::error::WindowError;

/// Apply every window to `array` in order. Stops at the first slicing error.
pub fn apply_all<'a, A, T>(
    windows: &[Window<T>],
    array: &'a A,
) -> Result<Vec<AppliedView<'a, A, T>>, WindowError>
where
    A: SliceArray + ?Sized,
    T: Transform<A::View<'a>> + ?Sized,
{
    windows.iter().map(|window| window.apply(array)).collect()
}

/// Parallel [`apply_all`] on the rayon pool; output keeps window order.
#[cfg(feature = "parallel")]
pub fn par_apply_all<'a, A, T>(
    windows: &[Window<T>],
    array: &'a A,
) -> Result<Vec<AppliedView<'a, A, T>>, WindowError>
where
    A: SliceArray + Sync + ?Sized,
    A::View<'a>: Send,
    T: Transform<A::View<'a>> + Send + Sync + ?Sized,
    <T as Transform<A::View<'a>>>::Output: Send,
{
    use rayon::prelude::*;

    windows.par_iter().map(|window| window.apply(array)).collect()
}
