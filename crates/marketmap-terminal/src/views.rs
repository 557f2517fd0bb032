//! Plain-text dashboard views: portfolio and watchlist tables, the three
//! calendar tabs, and the news feed.
//!
//! These render to strings so the CLI can print them and tests can assert on
//! them without a terminal.

use std::fmt::Write as _;

use marketmap_core::{Color, Gradient};
use marketmap_data::calendar::{mock_corporate_events, mock_earnings, mock_macro_events};
use marketmap_data::format::{
    country_flag, format_billions, format_currency, format_event_date, format_percent,
    format_relative_time, format_revenue,
};
use marketmap_data::news::mock_news;
use marketmap_data::{quote, Financials, Sector, FEATURED_STOCKS, SP500_STOCKS};
use marketmap_store::PortfolioStore;

use crate::canvas::Canvas;

/// Base year for generated financial statements.
const BASE_YEAR: u16 = 2025;

/// Held positions with live values and a totals row.
#[must_use]
pub fn portfolio_table(store: &PortfolioStore) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>10} {:>10} {:>14} {:>9}",
        "TICKER", "QTY", "PRICE", "VALUE", "DAY"
    );

    let mut total_value = 0.0f64;
    let mut weighted_change = 0.0f64;
    for item in store.portfolio() {
        match quote(&item.ticker) {
            Some(q) => {
                let value = q.price * item.quantity;
                total_value += value;
                weighted_change += q.change * value;
                let _ = writeln!(
                    out,
                    "{:<8} {:>10.2} {:>10} {:>14} {:>9}",
                    item.ticker,
                    item.quantity,
                    format_currency(q.price),
                    format_currency(value),
                    format_percent(q.change),
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{:<8} {:>10.2} {:>10} {:>14} {:>9}",
                    item.ticker, item.quantity, "-", "-", "-"
                );
            }
        }
    }

    let day_change = if total_value > 0.0 {
        weighted_change / total_value
    } else {
        0.0
    };
    let _ = writeln!(
        out,
        "{:<8} {:>10} {:>10} {:>14} {:>9}",
        "TOTAL",
        "",
        "",
        format_currency(total_value),
        format_percent(day_change),
    );
    out
}

/// Watched tickers with current quotes.
#[must_use]
pub fn watchlist_table(store: &PortfolioStore) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<24} {:>10} {:>9}",
        "TICKER", "NAME", "PRICE", "DAY"
    );
    for item in store.watchlist() {
        match quote(&item.ticker) {
            Some(q) => {
                let _ = writeln!(
                    out,
                    "{:<8} {:<24} {:>10} {:>9}",
                    q.symbol,
                    truncate(&q.name, 24),
                    format_currency(q.price),
                    format_percent(q.change),
                );
            }
            None => {
                let _ = writeln!(out, "{:<8} {:<24} {:>10} {:>9}", item.ticker, "-", "-", "-");
            }
        }
    }
    out
}

/// Upcoming earnings reports, soonest first.
#[must_use]
pub fn earnings_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<8} {:<18} {:<4} {:>8} {:>10}",
        "DATE", "TICKER", "COMPANY", "TIME", "EST EPS", "EST REV"
    );
    for event in mock_earnings() {
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<18} {:<4} {:>8.2} {:>10}",
            format_event_date(event.days_from_now),
            event.ticker,
            truncate(&event.company, 18),
            event.report_time.label(),
            event.estimated_eps,
            format_revenue(event.estimated_revenue),
        );
    }
    out
}

/// Upcoming macroeconomic releases, soonest first.
#[must_use]
pub fn macro_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<4} {:<34} {:<6} {:<6} {:>10} {:>10}",
        "DATE", "", "EVENT", "TIME", "IMP", "CONS", "PREV"
    );
    for event in mock_macro_events() {
        let _ = writeln!(
            out,
            "{:<12} {:<4} {:<34} {:<6} {:<6} {:>10} {:>10}",
            format_event_date(event.days_from_now),
            country_flag(&event.country_code),
            truncate(&event.event_name, 34),
            event.time_utc,
            event.importance.label(),
            event.consensus.as_deref().unwrap_or("-"),
            event.previous.as_deref().unwrap_or("-"),
        );
    }
    out
}

/// Upcoming corporate actions, soonest first.
#[must_use]
pub fn corporate_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<8} {:<26} {}",
        "DATE", "TICKER", "EVENT", "DETAILS"
    );
    for event in mock_corporate_events() {
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<26} {}",
            format_event_date(event.days_from_now),
            event.ticker,
            truncate(&event.event_name, 26),
            event.description,
        );
    }
    out
}

/// News feed, newest first, with relative timestamps.
#[must_use]
pub fn news_feed() -> String {
    let mut out = String::new();
    for item in mock_news() {
        let _ = writeln!(
            out,
            "[{:>9}] {} ({})  {}",
            format_relative_time(item.age_minutes),
            item.ticker,
            item.source,
            item.headline,
        );
        let _ = writeln!(out, "            {}", item.snippet);
    }
    out
}

/// Single-stock detail view: quote header for any known ticker, plus
/// generated statements, ratios, and technicals for featured stocks.
///
/// Returns `None` for tickers outside the market table.
#[must_use]
pub fn stock_detail(ticker: &str, color: bool) -> Option<String> {
    let q = quote(ticker)?;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})   {}  {}",
        q.name,
        q.symbol,
        format_currency(q.price),
        format_percent(q.change),
    );

    let sector_cap = FEATURED_STOCKS
        .iter()
        .find(|s| s.symbol == q.symbol)
        .map(|s| (s.sector, s.market_cap))
        .or_else(|| {
            SP500_STOCKS
                .iter()
                .find(|s| s.symbol == q.symbol)
                .map(|s| (s.sector, s.market_cap))
        });
    if let Some((sector, cap)) = sector_cap {
        let _ = writeln!(
            out,
            "{}   market cap {}",
            sector_chip(sector, color),
            format_billions(cap)
        );
    }

    if let Some(stock) = FEATURED_STOCKS.iter().find(|s| s.symbol == q.symbol) {
        let fin = Financials::generate(stock, BASE_YEAR);
        if let Some(latest) = fin.quarterly.last() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Latest quarter ({})", latest.quarter);
            let _ = writeln!(out, "  Revenue     {:>9}", format_revenue(latest.revenue * 1e9));
            let _ = writeln!(out, "  EBITDA      {:>9}", format_revenue(latest.ebitda * 1e9));
            let _ = writeln!(
                out,
                "  Net income  {:>9}",
                format_revenue(latest.net_income * 1e9)
            );
        }

        let r = &fin.ratios;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Ratios   P/E {:.1}   PEG {:.1}   P/S {:.1}   P/B {:.1}   ROE {:.1}%",
            r.pe, r.peg, r.ps, r.pb, r.roe
        );

        let t = &fin.technical;
        let _ = writeln!(
            out,
            "RSI {:>3.0} {}",
            t.rsi,
            rsi_gauge(t.rsi, color)
        );
        let _ = writeln!(
            out,
            "MACD {:.2} (signal {:.2})   SMA50 {}   SMA200 {}",
            t.macd,
            t.macd_signal,
            format_currency(t.sma50),
            format_currency(t.sma200),
        );
    }
    Some(out)
}

/// Sector label with a block glyph in the sector's display color.
fn sector_chip(sector: Sector, color: bool) -> String {
    let name = sector.name();
    if !color {
        return format!("■ {name}");
    }
    let mut canvas = Canvas::new(2 + name.len(), 1);
    canvas.set(0, 0, '■', Some(sector.color()), None);
    canvas.draw_text(2, 0, name, None, None, name.len());
    let mut line = canvas.render(true);
    line.truncate(line.trim_end_matches('\n').len());
    line
}

/// A 21-cell RSI gauge with the marker colored along an
/// oversold-to-overbought scale.
fn rsi_gauge(rsi: f64, color: bool) -> String {
    const WIDTH: usize = 21;
    let t = (rsi / 100.0).clamp(0.0, 1.0) as f32;
    let pos = (t * (WIDTH - 1) as f32).round() as usize;

    let mut canvas = Canvas::new(WIDTH + 2, 1);
    canvas.set(0, 0, '[', None, None);
    for i in 0..WIDTH {
        canvas.set(1 + i, 0, '·', None, None);
    }
    let scale = Gradient::three(
        Color::rgb8(16, 185, 129), // oversold, room to run
        Color::rgb8(161, 161, 170), // neutral
        Color::rgb8(239, 68, 68),  // overbought
    );
    let marker_fg = if color { Some(scale.sample(t)) } else { None };
    canvas.set(1 + pos, 0, '●', marker_fg, None);
    canvas.set(WIDTH + 1, 0, ']', None, None);

    let mut line = canvas.render(color);
    line.truncate(line.trim_end_matches('\n').len());
    line
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_ID: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> (PortfolioStore, PathBuf) {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "marketmap-views-test-{}-{id}.json",
            std::process::id()
        ));
        (PortfolioStore::load(&path).unwrap(), path)
    }

    #[test]
    fn test_portfolio_table_has_totals() {
        let (store, path) = temp_store();
        let table = portfolio_table(&store);
        assert!(table.contains("TICKER"));
        assert!(table.contains("AAPL"));
        assert!(table.contains("TOTAL"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_portfolio_unknown_ticker_shows_dashes() {
        let (mut store, path) = temp_store();
        store.add_to_portfolio("ZZZZ", 1.0).unwrap();
        let table = portfolio_table(&store);
        assert!(table.contains("ZZZZ"));
        let zzzz_line = table.lines().find(|l| l.contains("ZZZZ")).unwrap();
        assert!(zzzz_line.contains('-'));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_watchlist_table_lists_seeds() {
        let (store, path) = temp_store();
        let table = watchlist_table(&store);
        assert!(table.contains("AMZN"));
        assert!(table.contains("TSLA"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_earnings_table_today_first() {
        let table = earnings_table();
        let first_row = table.lines().nth(1).unwrap();
        assert!(first_row.starts_with("Today"));
        assert!(table.contains("AAPL"));
        assert!(table.contains("AMC"));
    }

    #[test]
    fn test_macro_table_shows_importance() {
        let table = macro_table();
        assert!(table.contains("high"));
        assert!(table.contains("CPI"));
    }

    #[test]
    fn test_corporate_table_events() {
        let table = corporate_table();
        assert!(table.lines().count() > 1);
        assert!(table.contains("DATE"));
    }

    #[test]
    fn test_news_feed_relative_times() {
        let feed = news_feed();
        assert!(feed.contains("ago") || feed.contains("Just now"));
        assert!(feed.lines().count() >= 2);
    }

    #[test]
    fn test_stock_detail_featured_has_financials() {
        let detail = stock_detail("aapl", false).unwrap();
        assert!(detail.contains("Apple Inc."));
        assert!(detail.contains("Latest quarter"));
        assert!(detail.contains("P/E"));
        assert!(detail.contains("RSI"));
        assert!(!detail.contains('\u{1b}'));
    }

    #[test]
    fn test_stock_detail_plain_ticker_is_quote_only() {
        let detail = stock_detail("TSLA", false).unwrap();
        assert!(detail.contains("TSLA"));
        assert!(detail.contains("market cap"));
        assert!(!detail.contains("RSI"));
    }

    #[test]
    fn test_stock_detail_unknown_is_none() {
        assert!(stock_detail("ZZZZ", false).is_none());
    }

    #[test]
    fn test_sector_chip_plain_and_colored() {
        assert_eq!(sector_chip(Sector::Technology, false), "■ Technology");
        let colored = sector_chip(Sector::Energy, true);
        assert!(colored.contains("Energy"));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_rsi_gauge_marker_position() {
        let low = rsi_gauge(0.0, false);
        let high = rsi_gauge(100.0, false);
        assert!(low.starts_with("[●"));
        assert!(high.ends_with("●]"));
        assert_eq!(rsi_gauge(50.0, false).chars().count(), 23);
    }

    #[test]
    fn test_rsi_gauge_colored_emits_ansi() {
        assert!(rsi_gauge(70.0, true).contains("\u{1b}["));
    }

    #[test]
    fn test_truncate_preserves_short_text() {
        assert_eq!(truncate("Apple", 18), "Apple");
        assert_eq!(truncate("A very long company name", 10), "A very lon");
    }
}
