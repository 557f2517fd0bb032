//! Command-line interface for the `marketmap` binary.

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marketmap_data::quote;
use marketmap_store::{DisplayMode, PortfolioStore, ViewMode};

use crate::error::AppError;
use crate::heatmap::{market_tiles, portfolio_tiles, render_heatmap, watchlist_tiles};
use crate::views;

/// Market heatmap and portfolio dashboard.
#[derive(Debug, Parser)]
#[command(name = "marketmap", version, about)]
pub struct Cli {
    /// Path to the portfolio store file (overrides MARKETMAP_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Disable colors (plain text output)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the S&P 500 market heatmap
    Market {
        /// Heatmap width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<u16>,

        /// Heatmap height in rows (defaults to the terminal height)
        #[arg(long)]
        height: Option<u16>,
    },

    /// Manage and show held positions
    Portfolio {
        #[command(subcommand)]
        action: Option<PortfolioAction>,
    },

    /// Manage and show the watchlist
    Watchlist {
        #[command(subcommand)]
        action: Option<WatchlistAction>,
    },

    /// Show the earnings, macro, or corporate calendar
    Calendar {
        #[command(subcommand)]
        tab: Option<CalendarTab>,
    },

    /// Show a single stock: quote, financial statements, technicals
    Stock { ticker: String },

    /// Show the news feed
    News,
}

#[derive(Debug, Subcommand)]
pub enum PortfolioAction {
    /// Add shares of a ticker (merges with an existing position)
    Add { ticker: String, quantity: f64 },

    /// Remove a position entirely
    Remove { ticker: String },

    /// Overwrite a position's share count (0 removes it)
    Set { ticker: String, quantity: f64 },

    /// Show the portfolio
    Show {
        /// Render as a heatmap weighted by position value
        #[arg(long, conflicts_with = "table")]
        map: bool,

        /// Render as a table
        #[arg(long)]
        table: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum WatchlistAction {
    /// Add a ticker to the watchlist
    Add { ticker: String },

    /// Remove a ticker from the watchlist
    Remove { ticker: String },

    /// Show the watchlist
    Show {
        /// Render as a heatmap weighted by market cap
        #[arg(long, conflicts_with = "table")]
        map: bool,

        /// Render as a table
        #[arg(long)]
        table: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CalendarTab {
    /// Upcoming earnings reports
    Earnings,
    /// Macroeconomic releases
    Macro,
    /// Corporate actions
    Corporate,
}

/// Run a parsed CLI invocation, printing to stdout.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let color = !cli.no_color && env::var_os("NO_COLOR").is_none();
    let path = store_path(cli.data_file);

    match cli.command {
        Command::Market { width, height } => {
            let (w, h) = viewport(width, height);
            print!("{}", render_heatmap(&market_tiles(), w, h, color));
        }
        Command::Portfolio { action } => {
            let mut store = PortfolioStore::load(path)?;
            match action.unwrap_or(PortfolioAction::Show {
                map: false,
                table: false,
            }) {
                PortfolioAction::Add { ticker, quantity } => {
                    require_known(&ticker)?;
                    store.add_to_portfolio(&ticker, quantity)?;
                    print!("{}", views::portfolio_table(&store));
                }
                PortfolioAction::Remove { ticker } => {
                    store.remove_from_portfolio(&ticker)?;
                    print!("{}", views::portfolio_table(&store));
                }
                PortfolioAction::Set { ticker, quantity } => {
                    require_known(&ticker)?;
                    store.set_portfolio_quantity(&ticker, quantity)?;
                    print!("{}", views::portfolio_table(&store));
                }
                PortfolioAction::Show { map, table } => {
                    store.set_view_mode(ViewMode::Portfolio)?;
                    if show_map(&mut store, map, table)? {
                        let (w, h) = viewport(None, None);
                        let tiles = portfolio_tiles(&store);
                        print!("{}", render_heatmap(&tiles, w, h, color));
                    } else {
                        print!("{}", views::portfolio_table(&store));
                    }
                }
            }
        }
        Command::Watchlist { action } => {
            let mut store = PortfolioStore::load(path)?;
            match action.unwrap_or(WatchlistAction::Show {
                map: false,
                table: false,
            }) {
                WatchlistAction::Add { ticker } => {
                    require_known(&ticker)?;
                    store.add_to_watchlist(&ticker)?;
                    print!("{}", views::watchlist_table(&store));
                }
                WatchlistAction::Remove { ticker } => {
                    store.remove_from_watchlist(&ticker)?;
                    print!("{}", views::watchlist_table(&store));
                }
                WatchlistAction::Show { map, table } => {
                    store.set_view_mode(ViewMode::Watchlist)?;
                    if show_map(&mut store, map, table)? {
                        let (w, h) = viewport(None, None);
                        let tiles = watchlist_tiles(&store);
                        print!("{}", render_heatmap(&tiles, w, h, color));
                    } else {
                        print!("{}", views::watchlist_table(&store));
                    }
                }
            }
        }
        Command::Calendar { tab } => match tab.unwrap_or(CalendarTab::Earnings) {
            CalendarTab::Earnings => print!("{}", views::earnings_table()),
            CalendarTab::Macro => print!("{}", views::macro_table()),
            CalendarTab::Corporate => print!("{}", views::corporate_table()),
        },
        Command::Stock { ticker } => match views::stock_detail(&ticker, color) {
            Some(detail) => print!("{detail}"),
            None => return Err(AppError::UnknownTicker(ticker.to_uppercase())),
        },
        Command::News => print!("{}", views::news_feed()),
    }
    Ok(())
}

/// Resolve whether to render a map, persisting an explicit choice so the
/// next bare `show` repeats it.
fn show_map(store: &mut PortfolioStore, map: bool, table: bool) -> Result<bool, AppError> {
    if map {
        store.set_display_mode(DisplayMode::Map)?;
        Ok(true)
    } else if table {
        store.set_display_mode(DisplayMode::Table)?;
        Ok(false)
    } else {
        Ok(store.display_mode() == DisplayMode::Map)
    }
}

fn require_known(ticker: &str) -> Result<(), AppError> {
    if quote(ticker).is_some() {
        Ok(())
    } else {
        Err(AppError::UnknownTicker(ticker.to_uppercase()))
    }
}

/// Viewport size: explicit flags win, else the attached terminal, else a
/// conventional 100x30 block for piped output.
fn viewport(width: Option<u16>, height: Option<u16>) -> (usize, usize) {
    let (term_w, term_h) = crossterm::terminal::size().unwrap_or((100, 31));
    let w = width.unwrap_or(term_w);
    // Leave one row for the shell prompt.
    let h = height.unwrap_or_else(|| term_h.saturating_sub(1));
    (usize::from(w), usize::from(h))
}

/// Store file location: `--data-file`, else `MARKETMAP_DATA_DIR`, else the
/// XDG data directory, else the home fallback.
fn store_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(dir) = env::var_os("MARKETMAP_DATA_DIR") {
        return PathBuf::from(dir).join("portfolio.json");
    }
    if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("marketmap").join("portfolio.json");
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("marketmap")
            .join("portfolio.json");
    }
    PathBuf::from("portfolio.json")
}
