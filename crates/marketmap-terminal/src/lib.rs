//! Terminal front end for marketmap.
//!
//! Renders the market heatmap, portfolio and watchlist views, calendars,
//! and the news feed to ANSI or plain text, and exposes the `marketmap`
//! CLI the binary wraps.

pub mod canvas;
pub mod cli;
pub mod error;
pub mod heatmap;
pub mod views;

pub use canvas::{Canvas, CanvasCell};
pub use cli::{run, Cli};
pub use error::AppError;
pub use heatmap::{market_tiles, portfolio_tiles, render_heatmap, watchlist_tiles, HeatTile};
