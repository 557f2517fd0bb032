#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
//! Generated mock market data for marketmap.
//!
//! Everything the dashboard displays comes from here: the S&P 500 sample
//! with market caps and daily returns, featured stocks with five years of
//! generated financial statements, calendar events, and news. There is no
//! network layer; "market data" means deterministic generation seeded per
//! symbol (override the seed with `MARKETMAP_SEED`).

pub mod calendar;
pub mod financials;
pub mod format;
pub mod news;
pub mod rng;
pub mod stocks;

pub use financials::Financials;
pub use stocks::{quote, FeaturedStock, Quote, Sector, Sp500Stock, FEATURED_STOCKS, SP500_STOCKS};
