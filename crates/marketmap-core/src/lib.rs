#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::uninlined_format_args)]
//! Core types for marketmap: geometry primitives, heatmap colors, and the
//! squarified treemap layout engine.
//!
//! The treemap engine is a pure function of `(items, weight accessor,
//! viewport)`: no I/O, no shared state, deterministic given identical input.
//! See [`treemap::layout`].

mod color;
mod geometry;
pub mod treemap;

pub use color::{return_color, Color, Gradient};
pub use geometry::{Rect, Size};
pub use treemap::{layout, Cell, MAX_ROW_ITEMS};
