#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
//! Persisted portfolio and watchlist state.
//!
//! The whole store is one JSON blob on disk: loaded once at startup, written
//! back after every mutation, last write wins. A missing file seeds the
//! default demo portfolio. Tickers are normalized to uppercase throughout,
//! adding an existing position merges quantities, and setting a quantity to
//! zero removes the position.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or persisting the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error reading or writing the blob.
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The blob on disk is not valid JSON for the current schema.
    #[error("store blob is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Which list the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Portfolio,
    Watchlist,
}

/// How the current list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Table,
    Map,
}

/// A held position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Uppercase ticker symbol.
    pub ticker: String,
    /// Number of shares held.
    pub quantity: f64,
    /// Unix milliseconds when the position was first added.
    pub added_at: u64,
}

/// A watched ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistItem {
    /// Uppercase ticker symbol.
    pub ticker: String,
    /// Unix milliseconds when the ticker was added.
    pub added_at: u64,
}

/// The serialized shape of the blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoreData {
    view_mode: ViewMode,
    display_mode: DisplayMode,
    portfolio: Vec<PortfolioItem>,
    watchlist: Vec<WatchlistItem>,
}

impl Default for StoreData {
    /// Demo seed used on first run.
    fn default() -> Self {
        let now = now_millis();
        Self {
            view_mode: ViewMode::default(),
            display_mode: DisplayMode::default(),
            portfolio: vec![
                seed_position("AAPL", 50.0, now),
                seed_position("MSFT", 30.0, now),
                seed_position("GOOGL", 20.0, now),
                seed_position("NVDA", 15.0, now),
            ],
            watchlist: vec![
                seed_watch("AMZN", now),
                seed_watch("META", now),
                seed_watch("TSLA", now),
            ],
        }
    }
}

fn seed_position(ticker: &str, quantity: f64, now: u64) -> PortfolioItem {
    PortfolioItem {
        ticker: ticker.to_string(),
        quantity,
        added_at: now,
    }
}

fn seed_watch(ticker: &str, now: u64) -> WatchlistItem {
    WatchlistItem {
        ticker: ticker.to_string(),
        added_at: now,
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Portfolio/watchlist store bound to a blob file.
#[derive(Debug)]
pub struct PortfolioStore {
    path: PathBuf,
    data: StoreData,
}

impl PortfolioStore {
    /// Load the store from `path`, seeding defaults if the file is missing.
    ///
    /// A present-but-unreadable or unparsable file is an error rather than a
    /// silent reset; the caller decides whether to discard user data.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            StoreData::default()
        };
        Ok(Self { path, data })
    }

    /// Path of the backing blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole store back to disk (last write wins).
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.data)?)?;
        Ok(())
    }

    /// Current view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.data.view_mode
    }

    /// Current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.data.display_mode
    }

    /// Held positions, in insertion order.
    #[must_use]
    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.data.portfolio
    }

    /// Watched tickers, in insertion order.
    #[must_use]
    pub fn watchlist(&self) -> &[WatchlistItem] {
        &self.data.watchlist
    }

    /// Set the view mode and persist.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<(), StoreError> {
        self.data.view_mode = mode;
        self.save()
    }

    /// Set the display mode and persist.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), StoreError> {
        self.data.display_mode = mode;
        self.save()
    }

    /// Add shares of a ticker; merges into an existing position.
    pub fn add_to_portfolio(&mut self, ticker: &str, quantity: f64) -> Result<(), StoreError> {
        let upper = ticker.to_uppercase();
        if let Some(existing) = self
            .data
            .portfolio
            .iter_mut()
            .find(|p| p.ticker == upper)
        {
            existing.quantity += quantity;
        } else {
            self.data.portfolio.push(PortfolioItem {
                ticker: upper,
                quantity,
                added_at: now_millis(),
            });
        }
        self.save()
    }

    /// Remove a position entirely.
    pub fn remove_from_portfolio(&mut self, ticker: &str) -> Result<(), StoreError> {
        let upper = ticker.to_uppercase();
        self.data.portfolio.retain(|p| p.ticker != upper);
        self.save()
    }

    /// Overwrite a position's share count; zero or negative removes it.
    pub fn set_portfolio_quantity(&mut self, ticker: &str, quantity: f64) -> Result<(), StoreError> {
        if quantity <= 0.0 {
            return self.remove_from_portfolio(ticker);
        }
        let upper = ticker.to_uppercase();
        if let Some(existing) = self
            .data
            .portfolio
            .iter_mut()
            .find(|p| p.ticker == upper)
        {
            existing.quantity = quantity;
        }
        self.save()
    }

    /// Add a ticker to the watchlist; a no-op if already present.
    pub fn add_to_watchlist(&mut self, ticker: &str) -> Result<(), StoreError> {
        let upper = ticker.to_uppercase();
        if !self.data.watchlist.iter().any(|w| w.ticker == upper) {
            self.data.watchlist.push(WatchlistItem {
                ticker: upper,
                added_at: now_millis(),
            });
        }
        self.save()
    }

    /// Remove a ticker from the watchlist.
    pub fn remove_from_watchlist(&mut self, ticker: &str) -> Result<(), StoreError> {
        let upper = ticker.to_uppercase();
        self.data.watchlist.retain(|w| w.ticker != upper);
        self.save()
    }

    /// Whether a ticker is held, case-insensitively.
    #[must_use]
    pub fn is_in_portfolio(&self, ticker: &str) -> bool {
        let upper = ticker.to_uppercase();
        self.data.portfolio.iter().any(|p| p.ticker == upper)
    }

    /// Whether a ticker is watched, case-insensitively.
    #[must_use]
    pub fn is_in_watchlist(&self, ticker: &str) -> bool {
        let upper = ticker.to_uppercase();
        self.data.watchlist.iter().any(|w| w.ticker == upper)
    }

    /// Look up a held position, case-insensitively.
    #[must_use]
    pub fn portfolio_item(&self, ticker: &str) -> Option<&PortfolioItem> {
        let upper = ticker.to_uppercase();
        self.data.portfolio.iter().find(|p| p.ticker == upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_ID: AtomicU32 = AtomicU32::new(0);

    /// Unique blob path per test so tests can run in parallel.
    fn temp_blob() -> PathBuf {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "marketmap-store-test-{}-{id}.json",
            std::process::id()
        ))
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_missing_file_seeds_defaults() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let store = PortfolioStore::load(&path).unwrap();
        assert_eq!(store.portfolio().len(), 4);
        assert_eq!(store.watchlist().len(), 3);
        assert!(store.is_in_portfolio("AAPL"));
        assert!(store.is_in_watchlist("TSLA"));
        assert_eq!(store.view_mode(), ViewMode::Portfolio);
        assert_eq!(store.display_mode(), DisplayMode::Table);
    }

    #[test]
    fn test_add_merges_quantity() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.add_to_portfolio("aapl", 10.0).unwrap();
        let item = store.portfolio_item("AAPL").unwrap();
        assert_eq!(item.quantity, 60.0);
        // Merging must not duplicate the row.
        assert_eq!(
            store.portfolio().iter().filter(|p| p.ticker == "AAPL").count(),
            1
        );
    }

    #[test]
    fn test_add_new_ticker_uppercases() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.add_to_portfolio("pltr", 25.0).unwrap();
        let item = store.portfolio_item("PLTR").unwrap();
        assert_eq!(item.ticker, "PLTR");
        assert_eq!(item.quantity, 25.0);
        assert!(item.added_at > 0);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.set_portfolio_quantity("MSFT", 0.0).unwrap();
        assert!(!store.is_in_portfolio("MSFT"));
        store.set_portfolio_quantity("GOOGL", -5.0).unwrap();
        assert!(!store.is_in_portfolio("GOOGL"));
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.set_portfolio_quantity("NVDA", 99.0).unwrap();
        assert_eq!(store.portfolio_item("NVDA").unwrap().quantity, 99.0);
    }

    #[test]
    fn test_watchlist_add_is_idempotent() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.add_to_watchlist("amzn").unwrap();
        store.add_to_watchlist("AMZN").unwrap();
        assert_eq!(
            store.watchlist().iter().filter(|w| w.ticker == "AMZN").count(),
            1
        );
    }

    #[test]
    fn test_watchlist_remove() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut store = PortfolioStore::load(&path).unwrap();
        store.remove_from_watchlist("meta").unwrap();
        assert!(!store.is_in_watchlist("META"));
    }

    #[test]
    fn test_roundtrip_through_disk() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        {
            let mut store = PortfolioStore::load(&path).unwrap();
            store.add_to_portfolio("COST", 7.5).unwrap();
            store.set_view_mode(ViewMode::Watchlist).unwrap();
            store.set_display_mode(DisplayMode::Map).unwrap();
        }
        let reloaded = PortfolioStore::load(&path).unwrap();
        assert_eq!(reloaded.portfolio_item("COST").unwrap().quantity, 7.5);
        assert_eq!(reloaded.view_mode(), ViewMode::Watchlist);
        assert_eq!(reloaded.display_mode(), DisplayMode::Map);
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            PortfolioStore::load(&path),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "marketmap-store-test-dir-{}-{id}",
            std::process::id()
        ));
        let path = dir.join("nested").join("portfolio.json");
        let mut store = PortfolioStore::load(&path).unwrap();
        store.add_to_watchlist("V").unwrap();
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_last_write_wins() {
        let path = temp_blob();
        let _guard = Cleanup(path.clone());
        let mut first = PortfolioStore::load(&path).unwrap();
        let mut second = PortfolioStore::load(&path).unwrap();
        first.add_to_portfolio("JPM", 1.0).unwrap();
        second.add_to_portfolio("XOM", 2.0).unwrap();

        let reloaded = PortfolioStore::load(&path).unwrap();
        assert!(reloaded.is_in_portfolio("XOM"));
        assert!(!reloaded.is_in_portfolio("JPM"));
    }
}
