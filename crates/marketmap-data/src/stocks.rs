//! Static market universe: sectors, the S&P 500 sample, featured stocks,
//! and quote lookup.

use marketmap_core::Color;
use serde::{Deserialize, Serialize};

/// Market sector of a listed company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Financial,
    Consumer,
    Energy,
    Industrial,
    Communication,
}

impl Sector {
    /// All sectors in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Technology,
            Self::Healthcare,
            Self::Financial,
            Self::Consumer,
            Self::Energy,
            Self::Industrial,
            Self::Communication,
        ]
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Financial => "Financial",
            Self::Consumer => "Consumer",
            Self::Energy => "Energy",
            Self::Industrial => "Industrial",
            Self::Communication => "Communication",
        }
    }

    /// Accent color for sector labels.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Technology => Color::rgb8(0x3b, 0x82, 0xf6),
            Self::Healthcare => Color::rgb8(0x10, 0xb9, 0x81),
            Self::Financial => Color::rgb8(0x8b, 0x5c, 0xf6),
            Self::Consumer => Color::rgb8(0xf5, 0x9e, 0x0b),
            Self::Energy => Color::rgb8(0xef, 0x44, 0x44),
            Self::Industrial => Color::rgb8(0x6b, 0x72, 0x80),
            Self::Communication => Color::rgb8(0xec, 0x48, 0x99),
        }
    }
}

/// One constituent of the S&P 500 sample used by the market heatmap.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sp500Stock {
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Company display name.
    pub name: &'static str,
    /// Market sector.
    pub sector: Sector,
    /// Market capitalization in billions of dollars.
    pub market_cap: f64,
    /// Daily percentage return (signed).
    pub daily_return: f64,
}

/// Base facts for a featured stock; its financial statements are generated
/// by the `financials` module.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeaturedStock {
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Company display name.
    pub name: &'static str,
    /// Market sector.
    pub sector: Sector,
    /// Market capitalization in billions of dollars.
    pub market_cap: f64,
    /// Last traded price in dollars.
    pub current_price: f64,
    /// Daily percentage change (signed).
    pub price_change: f64,
    /// Base quarterly revenue in billions, input to statement generation.
    pub base_revenue: f64,
    /// Revenue volatility, input to statement generation.
    pub volatility: f64,
}

/// Resolved display quote for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Uppercase ticker symbol.
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// Daily percentage change (signed).
    pub change: f64,
}

/// Featured stocks with full fundamental/technical coverage.
pub const FEATURED_STOCKS: &[FeaturedStock] = &[
    FeaturedStock {
        symbol: "AAPL",
        name: "Apple Inc.",
        sector: Sector::Technology,
        market_cap: 2890.0,
        current_price: 178.52,
        price_change: 2.34,
        base_revenue: 100.0,
        volatility: 0.15,
    },
    FeaturedStock {
        symbol: "MSFT",
        name: "Microsoft Corp.",
        sector: Sector::Technology,
        market_cap: 2780.0,
        current_price: 374.58,
        price_change: 1.87,
        base_revenue: 60.0,
        volatility: 0.12,
    },
    FeaturedStock {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        sector: Sector::Technology,
        market_cap: 1720.0,
        current_price: 139.25,
        price_change: -0.54,
        base_revenue: 80.0,
        volatility: 0.14,
    },
    FeaturedStock {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        sector: Sector::Consumer,
        market_cap: 1580.0,
        current_price: 151.94,
        price_change: 3.21,
        base_revenue: 140.0,
        volatility: 0.18,
    },
    FeaturedStock {
        symbol: "NVDA",
        name: "NVIDIA Corp.",
        sector: Sector::Technology,
        market_cap: 1120.0,
        current_price: 454.72,
        price_change: 5.67,
        base_revenue: 35.0,
        volatility: 0.22,
    },
    FeaturedStock {
        symbol: "META",
        name: "Meta Platforms",
        sector: Sector::Technology,
        market_cap: 980.0,
        current_price: 386.27,
        price_change: 1.45,
        base_revenue: 40.0,
        volatility: 0.16,
    },
];

/// S&P 500 sample for the market heatmap.
pub const SP500_STOCKS: &[Sp500Stock] = &[
    // Technology
    Sp500Stock { symbol: "AAPL", name: "Apple", sector: Sector::Technology, market_cap: 2890.0, daily_return: 2.34 },
    Sp500Stock { symbol: "MSFT", name: "Microsoft", sector: Sector::Technology, market_cap: 2780.0, daily_return: 1.87 },
    Sp500Stock { symbol: "GOOGL", name: "Alphabet", sector: Sector::Technology, market_cap: 1720.0, daily_return: -0.54 },
    Sp500Stock { symbol: "NVDA", name: "NVIDIA", sector: Sector::Technology, market_cap: 1120.0, daily_return: 5.67 },
    Sp500Stock { symbol: "META", name: "Meta", sector: Sector::Technology, market_cap: 980.0, daily_return: 1.45 },
    Sp500Stock { symbol: "AVGO", name: "Broadcom", sector: Sector::Technology, market_cap: 580.0, daily_return: 3.21 },
    Sp500Stock { symbol: "ORCL", name: "Oracle", sector: Sector::Technology, market_cap: 310.0, daily_return: -1.23 },
    Sp500Stock { symbol: "CRM", name: "Salesforce", sector: Sector::Technology, market_cap: 245.0, daily_return: 0.89 },
    Sp500Stock { symbol: "AMD", name: "AMD", sector: Sector::Technology, market_cap: 220.0, daily_return: 4.56 },
    Sp500Stock { symbol: "ADBE", name: "Adobe", sector: Sector::Technology, market_cap: 215.0, daily_return: -2.34 },
    Sp500Stock { symbol: "INTC", name: "Intel", sector: Sector::Technology, market_cap: 180.0, daily_return: -4.21 },
    Sp500Stock { symbol: "CSCO", name: "Cisco", sector: Sector::Technology, market_cap: 195.0, daily_return: 0.45 },
    // Healthcare
    Sp500Stock { symbol: "UNH", name: "UnitedHealth", sector: Sector::Healthcare, market_cap: 480.0, daily_return: -1.56 },
    Sp500Stock { symbol: "JNJ", name: "Johnson & Johnson", sector: Sector::Healthcare, market_cap: 380.0, daily_return: 0.23 },
    Sp500Stock { symbol: "LLY", name: "Eli Lilly", sector: Sector::Healthcare, market_cap: 565.0, daily_return: 6.78 },
    Sp500Stock { symbol: "PFE", name: "Pfizer", sector: Sector::Healthcare, market_cap: 155.0, daily_return: -3.45 },
    Sp500Stock { symbol: "ABBV", name: "AbbVie", sector: Sector::Healthcare, market_cap: 285.0, daily_return: 1.12 },
    Sp500Stock { symbol: "MRK", name: "Merck", sector: Sector::Healthcare, market_cap: 265.0, daily_return: -0.89 },
    Sp500Stock { symbol: "TMO", name: "Thermo Fisher", sector: Sector::Healthcare, market_cap: 195.0, daily_return: 2.34 },
    // Financial
    Sp500Stock { symbol: "BRK.B", name: "Berkshire", sector: Sector::Financial, market_cap: 785.0, daily_return: 1.23 },
    Sp500Stock { symbol: "JPM", name: "JPMorgan", sector: Sector::Financial, market_cap: 495.0, daily_return: 2.67 },
    Sp500Stock { symbol: "V", name: "Visa", sector: Sector::Financial, market_cap: 520.0, daily_return: 0.98 },
    Sp500Stock { symbol: "MA", name: "Mastercard", sector: Sector::Financial, market_cap: 395.0, daily_return: 1.45 },
    Sp500Stock { symbol: "BAC", name: "Bank of America", sector: Sector::Financial, market_cap: 255.0, daily_return: -1.78 },
    Sp500Stock { symbol: "WFC", name: "Wells Fargo", sector: Sector::Financial, market_cap: 175.0, daily_return: -0.56 },
    Sp500Stock { symbol: "GS", name: "Goldman Sachs", sector: Sector::Financial, market_cap: 125.0, daily_return: 3.21 },
    // Consumer
    Sp500Stock { symbol: "AMZN", name: "Amazon", sector: Sector::Consumer, market_cap: 1580.0, daily_return: 3.21 },
    Sp500Stock { symbol: "TSLA", name: "Tesla", sector: Sector::Consumer, market_cap: 560.0, daily_return: -2.89 },
    Sp500Stock { symbol: "HD", name: "Home Depot", sector: Sector::Consumer, market_cap: 335.0, daily_return: 0.67 },
    Sp500Stock { symbol: "MCD", name: "McDonald's", sector: Sector::Consumer, market_cap: 205.0, daily_return: -0.34 },
    Sp500Stock { symbol: "NKE", name: "Nike", sector: Sector::Consumer, market_cap: 145.0, daily_return: -1.98 },
    Sp500Stock { symbol: "SBUX", name: "Starbucks", sector: Sector::Consumer, market_cap: 105.0, daily_return: 1.23 },
    Sp500Stock { symbol: "COST", name: "Costco", sector: Sector::Consumer, market_cap: 295.0, daily_return: 2.45 },
    // Energy
    Sp500Stock { symbol: "XOM", name: "Exxon Mobil", sector: Sector::Energy, market_cap: 425.0, daily_return: -0.78 },
    Sp500Stock { symbol: "CVX", name: "Chevron", sector: Sector::Energy, market_cap: 275.0, daily_return: -1.23 },
    Sp500Stock { symbol: "COP", name: "ConocoPhillips", sector: Sector::Energy, market_cap: 125.0, daily_return: 0.45 },
    Sp500Stock { symbol: "SLB", name: "Schlumberger", sector: Sector::Energy, market_cap: 65.0, daily_return: 2.34 },
    // Industrial
    Sp500Stock { symbol: "CAT", name: "Caterpillar", sector: Sector::Industrial, market_cap: 165.0, daily_return: 1.89 },
    Sp500Stock { symbol: "RTX", name: "RTX Corp", sector: Sector::Industrial, market_cap: 145.0, daily_return: 0.56 },
    Sp500Stock { symbol: "BA", name: "Boeing", sector: Sector::Industrial, market_cap: 115.0, daily_return: -5.67 },
    Sp500Stock { symbol: "HON", name: "Honeywell", sector: Sector::Industrial, market_cap: 135.0, daily_return: 0.78 },
    Sp500Stock { symbol: "UPS", name: "UPS", sector: Sector::Industrial, market_cap: 95.0, daily_return: -2.12 },
    Sp500Stock { symbol: "GE", name: "GE Aerospace", sector: Sector::Industrial, market_cap: 185.0, daily_return: 3.45 },
    // Communication
    Sp500Stock { symbol: "DIS", name: "Disney", sector: Sector::Communication, market_cap: 165.0, daily_return: -1.34 },
    Sp500Stock { symbol: "NFLX", name: "Netflix", sector: Sector::Communication, market_cap: 245.0, daily_return: 4.23 },
    Sp500Stock { symbol: "CMCSA", name: "Comcast", sector: Sector::Communication, market_cap: 145.0, daily_return: -0.67 },
    Sp500Stock { symbol: "T", name: "AT&T", sector: Sector::Communication, market_cap: 125.0, daily_return: 0.89 },
    Sp500Stock { symbol: "VZ", name: "Verizon", sector: Sector::Communication, market_cap: 155.0, daily_return: 0.34 },
];

/// Look up a display quote for a ticker, case-insensitively.
///
/// Featured stocks take precedence; other S&P constituents get a price
/// derived from market cap (`market_cap * 0.15`, rounded to cents), the same
/// placeholder the dashboard uses for non-featured tickers.
#[must_use]
pub fn quote(ticker: &str) -> Option<Quote> {
    let upper = ticker.to_uppercase();

    if let Some(stock) = FEATURED_STOCKS.iter().find(|s| s.symbol == upper) {
        return Some(Quote {
            symbol: upper,
            name: stock.name.to_string(),
            price: stock.current_price,
            change: stock.price_change,
        });
    }

    SP500_STOCKS.iter().find(|s| s.symbol == upper).map(|stock| Quote {
        symbol: upper,
        name: stock.name.to_string(),
        price: (stock.market_cap * 0.15 * 100.0).round() / 100.0,
        change: stock.daily_return,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_all_is_complete() {
        assert_eq!(Sector::all().len(), 7);
    }

    #[test]
    fn test_sp500_symbols_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in SP500_STOCKS {
            assert!(seen.insert(s.symbol), "duplicate symbol {}", s.symbol);
        }
    }

    #[test]
    fn test_sp500_market_caps_positive() {
        assert!(SP500_STOCKS.iter().all(|s| s.market_cap > 0.0));
    }

    #[test]
    fn test_quote_featured_precedence() {
        // AAPL is in both tables; the featured price must win.
        let q = quote("AAPL").unwrap();
        assert_eq!(q.price, 178.52);
        assert_eq!(q.change, 2.34);
    }

    #[test]
    fn test_quote_case_insensitive() {
        let q = quote("tsla").unwrap();
        assert_eq!(q.symbol, "TSLA");
        assert_eq!(q.name, "Tesla");
    }

    #[test]
    fn test_quote_derived_price_for_non_featured() {
        // TSLA: 560.0 * 0.15 = 84.00
        let q = quote("TSLA").unwrap();
        assert_eq!(q.price, 84.0);
        assert_eq!(q.change, -2.89);
    }

    #[test]
    fn test_quote_unknown_ticker() {
        assert!(quote("ZZZZ").is_none());
    }

    #[test]
    fn test_featured_all_have_quarterly_inputs() {
        for s in FEATURED_STOCKS {
            assert!(s.base_revenue > 0.0);
            assert!(s.volatility > 0.0 && s.volatility < 1.0);
        }
    }
}
