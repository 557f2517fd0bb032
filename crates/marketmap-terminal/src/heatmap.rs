//! Market heatmap rendering.
//!
//! Turns weighted entries into treemap tiles sized by the core layout
//! engine, colors each tile by return intensity, and labels tiles that are
//! large enough to carry text. Thresholds follow the same display-rules
//! approach as the table views: a tile earns its symbol first, then its
//! return, then the company name as it grows.

use marketmap_core::{layout, return_color, Color};
use marketmap_data::{format::format_percent, quote, SP500_STOCKS};
use marketmap_store::PortfolioStore;
use unicode_width::UnicodeWidthStr;

use crate::canvas::Canvas;

/// Minimum tile size (columns, rows) to show the ticker symbol.
const SYMBOL_MIN: (usize, usize) = (5, 2);
/// Minimum tile size to add the daily return under the symbol.
const RETURN_MIN: (usize, usize) = (8, 3);
/// Minimum tile size to add the company name above the symbol.
const NAME_MIN: (usize, usize) = (14, 4);

/// One weighted entry of a heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatTile {
    pub symbol: String,
    pub name: String,
    /// Tile area weight. Market cap for the market view, position value for
    /// the portfolio view.
    pub weight: f32,
    /// Daily percentage return, drives the tile color.
    pub percent_return: f32,
}

/// Tiles for the full S&P market view, weighted by market cap.
#[must_use]
pub fn market_tiles() -> Vec<HeatTile> {
    SP500_STOCKS
        .iter()
        .map(|stock| HeatTile {
            symbol: stock.symbol.to_string(),
            name: stock.name.to_string(),
            weight: stock.market_cap as f32,
            percent_return: stock.daily_return as f32,
        })
        .collect()
}

/// Tiles for the held positions, weighted by position value.
///
/// Positions without a known quote still get a tile so the user sees the
/// holding, just with zero weight and a flat color.
#[must_use]
pub fn portfolio_tiles(store: &PortfolioStore) -> Vec<HeatTile> {
    store
        .portfolio()
        .iter()
        .map(|item| match quote(&item.ticker) {
            Some(q) => HeatTile {
                symbol: q.symbol,
                name: q.name,
                weight: (q.price * item.quantity) as f32,
                percent_return: q.change as f32,
            },
            None => HeatTile {
                symbol: item.ticker.clone(),
                name: item.ticker.clone(),
                weight: 0.0,
                percent_return: 0.0,
            },
        })
        .collect()
}

/// Tiles for the watchlist, weighted by market cap where known.
#[must_use]
pub fn watchlist_tiles(store: &PortfolioStore) -> Vec<HeatTile> {
    store
        .watchlist()
        .iter()
        .map(|item| {
            let in_table = SP500_STOCKS.iter().find(|s| s.symbol == item.ticker);
            match (in_table, quote(&item.ticker)) {
                (Some(stock), Some(q)) => HeatTile {
                    symbol: q.symbol,
                    name: q.name,
                    weight: stock.market_cap as f32,
                    percent_return: q.change as f32,
                },
                (None, Some(q)) => HeatTile {
                    symbol: q.symbol,
                    name: q.name,
                    weight: q.price as f32,
                    percent_return: q.change as f32,
                },
                _ => HeatTile {
                    symbol: item.ticker.clone(),
                    name: item.ticker.clone(),
                    weight: 0.0,
                    percent_return: 0.0,
                },
            }
        })
        .collect()
}

/// Render tiles into a `width` x `height` character block.
///
/// The first two rows carry the gainers/losers summary, the last row a
/// loss-to-gain legend, and everything between is the treemap itself with a
/// one-cell gutter between tiles.
#[must_use]
pub fn render_heatmap(tiles: &[HeatTile], width: usize, height: usize, color: bool) -> String {
    let mut out = summary_line(tiles);
    out.push('\n');
    out.push('\n');

    let map_height = height.saturating_sub(3);
    if width >= 4 && map_height >= 2 {
        let mut canvas = Canvas::new(width, map_height);
        let cells = layout(tiles, |t| t.weight, width as f32, map_height as f32);
        for cell in &cells {
            draw_tile(&mut canvas, cell.item, cell.rect);
        }
        out.push_str(&canvas.render(color));
    }

    out.push_str(&legend_line(color));
    out.push('\n');
    out
}

fn draw_tile(canvas: &mut Canvas, tile: &HeatTile, rect: marketmap_core::Rect) {
    let x0 = rect.x.round() as usize;
    let y0 = rect.y.round() as usize;
    let x1 = (rect.x + rect.width).round() as usize;
    let y1 = (rect.y + rect.height).round() as usize;
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    // One-cell gutter on the right and bottom edges, kept only when the
    // tile can spare it.
    let w = if x1 - x0 > 1 { x1 - x0 - 1 } else { x1 - x0 };
    let h = if y1 - y0 > 1 { y1 - y0 - 1 } else { y1 - y0 };

    let bg = return_color(tile.percent_return);
    canvas.fill_rect(x0, y0, w, h, bg);

    let mut lines: Vec<String> = Vec::new();
    if w >= NAME_MIN.0 && h >= NAME_MIN.1 {
        lines.push(tile.name.clone());
    }
    if w >= SYMBOL_MIN.0 && h >= SYMBOL_MIN.1 {
        lines.push(tile.symbol.clone());
    }
    if w >= RETURN_MIN.0 && h >= RETURN_MIN.1 {
        lines.push(format_percent(f64::from(tile.percent_return)));
    }
    if lines.is_empty() {
        return;
    }

    let top = y0 + (h - lines.len().min(h)) / 2;
    for (i, line) in lines.iter().take(h).enumerate() {
        let line_width = line.width().min(w);
        let x = x0 + (w - line_width) / 2;
        canvas.draw_text(x, top + i, line, Some(Color::WHITE), None, w);
    }
}

fn summary_line(tiles: &[HeatTile]) -> String {
    let gainers = tiles.iter().filter(|t| t.percent_return > 0.0).count();
    let losers = tiles.iter().filter(|t| t.percent_return < 0.0).count();
    let total_weight: f32 = tiles.iter().map(|t| t.weight).sum();
    let avg = if total_weight > 0.0 {
        tiles
            .iter()
            .map(|t| t.percent_return * t.weight)
            .sum::<f32>()
            / total_weight
    } else {
        0.0
    };
    format!(
        "▲ {gainers} gainers   ▼ {losers} losers   weighted avg {}",
        format_percent(f64::from(avg))
    )
}

fn legend_line(color: bool) -> String {
    if !color {
        return "-6%  ·  ·  ·  0  ·  ·  ·  +6%".to_string();
    }
    let mut canvas = Canvas::new(30, 1);
    canvas.draw_text(0, 0, "-6% ", None, None, 4);
    let steps = [-6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0];
    for (i, step) in steps.iter().enumerate() {
        canvas.set(4 + i * 2, 0, '■', Some(return_color(*step)), None);
    }
    canvas.draw_text(4 + steps.len() * 2, 0, " +6%", None, None, 4);
    let mut line = canvas.render(true);
    line.truncate(line.trim_end_matches('\n').len());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(symbol: &str, weight: f32, ret: f32) -> HeatTile {
        HeatTile {
            symbol: symbol.to_string(),
            name: format!("{symbol} Inc"),
            weight,
            percent_return: ret,
        }
    }

    #[test]
    fn test_market_tiles_cover_table() {
        let tiles = market_tiles();
        assert_eq!(tiles.len(), SP500_STOCKS.len());
        assert!(tiles.iter().any(|t| t.symbol == "AAPL"));
        assert!(tiles.iter().all(|t| t.weight > 0.0));
    }

    #[test]
    fn test_render_contains_dominant_symbol() {
        let tiles = vec![tile("AAPL", 100.0, 2.0), tile("XOM", 5.0, -1.0)];
        let out = render_heatmap(&tiles, 40, 12, false);
        assert!(out.contains("AAPL"));
    }

    #[test]
    fn test_summary_counts() {
        let tiles = vec![
            tile("A", 10.0, 1.5),
            tile("B", 10.0, -0.5),
            tile("C", 10.0, 0.0),
        ];
        let summary = summary_line(&tiles);
        assert!(summary.contains("1 gainers"));
        assert!(summary.contains("1 losers"));
    }

    #[test]
    fn test_summary_is_weight_averaged() {
        let tiles = vec![tile("A", 30.0, 2.0), tile("B", 10.0, -2.0)];
        // (2*30 - 2*10) / 40 = 1.0
        assert!(summary_line(&tiles).contains("+1.00%"));
    }

    #[test]
    fn test_empty_tiles_render_without_panic() {
        let out = render_heatmap(&[], 40, 10, false);
        assert!(out.contains("0 gainers"));
    }

    #[test]
    fn test_tiny_viewport_skips_map() {
        let tiles = vec![tile("AAPL", 100.0, 2.0)];
        let out = render_heatmap(&tiles, 2, 4, false);
        assert!(!out.contains("AAPL"));
    }

    #[test]
    fn test_colored_render_emits_ansi() {
        let tiles = vec![tile("AAPL", 100.0, 2.0)];
        let out = render_heatmap(&tiles, 40, 12, true);
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_plain_render_has_no_ansi() {
        let tiles = vec![tile("AAPL", 100.0, 2.0)];
        let out = render_heatmap(&tiles, 40, 12, false);
        assert!(!out.contains('\u{1b}'));
    }
}
