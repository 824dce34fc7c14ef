//! Window layout engine.
//!
//! Pure functions from input extent, sizing policy and overlap fraction to an
//! ordered, eagerly built window list.
//!
//! Per axis, with window extent `n` (clipped to the input extent `N`) and
//! overlap fraction `f`:
//! - overlap `o = floor(n · f)`, step `s = n - o` (always `>= 1`);
//! - offsets `0, s, 2s, …` up to `N - n`, plus `N - n` itself when the
//!   sequence stops short, so the last window ends exactly at `N`.
//!
//! Adjacent windows therefore share exactly `o` pixels except the final pair,
//! which may share more.
mod engine;
mod options;

pub use self::engine::{
    layout_by_count, layout_by_size, layout_for_array, layout_from_shape, WindowLayout,
};
pub use self::options::{LayoutOptions, WindowSizing};
