//! Mock news feed items.
//!
//! Ages are stored in minutes so the feed is independent of wall-clock
//! reads; `format::format_relative_time` renders them for display.

use serde::{Deserialize, Serialize};

/// One news item in the dashboard feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub ticker: String,
    pub company: String,
    pub headline: String,
    pub snippet: String,
    pub source: String,
    /// Minutes since publication.
    pub age_minutes: u64,
}

fn item(
    ticker: &str,
    company: &str,
    headline: &str,
    snippet: &str,
    source: &str,
    age_minutes: u64,
) -> NewsItem {
    NewsItem {
        ticker: ticker.to_string(),
        company: company.to_string(),
        headline: headline.to_string(),
        snippet: snippet.to_string(),
        source: source.to_string(),
        age_minutes,
    }
}

/// News items for the dashboard feed, newest first.
#[must_use]
pub fn mock_news() -> Vec<NewsItem> {
    vec![
        item(
            "NVDA",
            "NVIDIA Corp.",
            "NVIDIA Beats Earnings Expectations on Data Center Demand",
            "Quarterly revenue came in well above consensus as hyperscalers continued \
             to expand AI training capacity...",
            "Reuters",
            45,
        ),
        item(
            "AAPL",
            "Apple Inc.",
            "Apple Unveils AI Features Across Its Device Lineup",
            "The company announced a suite of on-device AI capabilities, including a \
             redesigned assistant with deep contextual understanding...",
            "TechCrunch",
            60 * 2,
        ),
        item(
            "TSLA",
            "Tesla Inc.",
            "Tesla Cuts Prices Again as EV Competition Intensifies",
            "The automaker reduced prices across its lineup for the third time this \
             year, pressuring margins but defending market share...",
            "Bloomberg",
            60 * 5,
        ),
        item(
            "JPM",
            "JPMorgan Chase",
            "JPMorgan Raises Outlook for Net Interest Income",
            "The bank lifted full-year guidance, citing persistent rate tailwinds and \
             resilient consumer spending...",
            "WSJ",
            60 * 9,
        ),
        item(
            "MSFT",
            "Microsoft Corp.",
            "Microsoft Expands Cloud Partnership With Major Retailers",
            "New multi-year agreements will move core workloads to Azure, deepening \
             the company's enterprise moat...",
            "CNBC",
            60 * 26,
        ),
        item(
            "XOM",
            "Exxon Mobil",
            "Exxon Approves Major Offshore Expansion Project",
            "The board greenlit a multi-billion-dollar development expected to add \
             250,000 barrels per day by 2028...",
            "FT",
            60 * 24 * 3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_sorted_newest_first() {
        let news = mock_news();
        assert!(!news.is_empty());
        assert!(news.windows(2).all(|w| w[0].age_minutes <= w[1].age_minutes));
    }

    #[test]
    fn test_news_fields_populated() {
        for n in mock_news() {
            assert!(!n.ticker.is_empty());
            assert!(!n.headline.is_empty());
            assert!(!n.source.is_empty());
        }
    }
}
