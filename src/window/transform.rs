//! Transform capability bound to a window.
//!
//! Any `Fn(V) -> O` is a transform, so closures, function pointers and
//! `dyn Fn` trait objects all bind directly. Windows hold transforms behind
//! `Arc`, never a copy of their captured state.

/// Unary operation over a sliced view.
pub trait Transform<V> {
    type Output;

    fn apply(&self, view: V) -> Self::Output;
}

impl<V, O, F> Transform<V> for F
where
    F: Fn(V) -> O + ?Sized,
{
    type Output = O;

    #[inline]
    fn apply(&self, view: V) -> O {
        self(view)
    }
}

/// Transform slot of windows that never carry one.
///
/// Uninhabited: a `Window<NoTransform>` always applies as a raw view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoTransform {}

impl<V> Transform<V> for NoTransform {
    type Output = V;

    fn apply(&self, _view: V) -> V {
        match *self {}
    }
}

/// Result of [`Window::apply`](super::Window::apply).
#[derive(Clone, Debug, PartialEq)]
pub enum Applied<V, O> {
    /// No transform bound; the sliced view itself.
    Raw(V),
    /// Output of the bound transform.
    Transformed(O),
}

impl<V, O> Applied<V, O> {
    pub fn is_transformed(&self) -> bool {
        matches!(self, Applied::Transformed(_))
    }

    pub fn raw(self) -> Option<V> {
        match self {
            Applied::Raw(v) => Some(v),
            Applied::Transformed(_) => None,
        }
    }

    pub fn transformed(self) -> Option<O> {
        match self {
            Applied::Raw(_) => None,
            Applied::Transformed(o) => Some(o),
        }
    }
}

impl<V> Applied<V, V> {
    pub fn into_inner(self) -> V {
        match self {
            Applied::Raw(v) | Applied::Transformed(v) => v,
        }
    }
}
