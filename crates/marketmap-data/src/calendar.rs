//! Earnings, macro, and corporate calendar events.
//!
//! All dates are day offsets relative to "today" so the data stays pure;
//! callers format offsets for display with `format::format_event_date`.

use serde::{Deserialize, Serialize};

/// When an earnings report lands relative to the trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportTime {
    /// Before market open.
    Bmo,
    /// After market close.
    Amc,
}

impl ReportTime {
    /// Short display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bmo => "BMO",
            Self::Amc => "AMC",
        }
    }
}

/// Market impact of a macro event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A scheduled earnings report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsEvent {
    pub ticker: String,
    pub company: String,
    /// Days from today (0 = today).
    pub days_from_now: i32,
    pub report_time: ReportTime,
    pub estimated_eps: f64,
    pub actual_eps: Option<f64>,
    /// Estimated revenue in dollars.
    pub estimated_revenue: f64,
    pub actual_revenue: Option<f64>,
}

/// A scheduled macroeconomic release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroEvent {
    pub country: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    pub event_name: String,
    pub description: String,
    /// Days from today (0 = today).
    pub days_from_now: i32,
    /// Release time in UTC, 24h "HH:MM".
    pub time_utc: String,
    pub consensus: Option<String>,
    pub previous: Option<String>,
    pub actual: Option<String>,
    pub importance: Importance,
}

/// A scheduled corporate action (product event, dividend, split, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateEvent {
    pub ticker: String,
    pub company: String,
    pub event_name: String,
    pub description: String,
    /// Days from today (0 = today).
    pub days_from_now: i32,
}

fn earnings(
    ticker: &str,
    company: &str,
    days: i32,
    time: ReportTime,
    eps: f64,
    revenue: f64,
) -> EarningsEvent {
    EarningsEvent {
        ticker: ticker.to_string(),
        company: company.to_string(),
        days_from_now: days,
        report_time: time,
        estimated_eps: eps,
        actual_eps: None,
        estimated_revenue: revenue,
        actual_revenue: None,
    }
}

/// Upcoming earnings reports, soonest first.
#[must_use]
pub fn mock_earnings() -> Vec<EarningsEvent> {
    vec![
        earnings("AAPL", "Apple Inc.", 0, ReportTime::Amc, 2.35, 94_500_000_000.0),
        earnings("MSFT", "Microsoft Corp.", 0, ReportTime::Amc, 3.12, 65_800_000_000.0),
        earnings("GOOGL", "Alphabet Inc.", 1, ReportTime::Amc, 1.85, 86_200_000_000.0),
        earnings("AMZN", "Amazon.com Inc.", 2, ReportTime::Amc, 1.03, 166_000_000_000.0),
        earnings("NVDA", "NVIDIA Corp.", 3, ReportTime::Amc, 5.59, 28_700_000_000.0),
        earnings("META", "Meta Platforms", 4, ReportTime::Amc, 5.25, 40_100_000_000.0),
        earnings("JPM", "JPMorgan Chase", 5, ReportTime::Bmo, 4.45, 42_800_000_000.0),
        earnings("TSLA", "Tesla Inc.", 6, ReportTime::Amc, 0.74, 25_500_000_000.0),
        earnings("UNH", "UnitedHealth", 7, ReportTime::Bmo, 6.95, 99_800_000_000.0),
        earnings("XOM", "Exxon Mobil", 8, ReportTime::Bmo, 2.27, 90_500_000_000.0),
    ]
}

fn macro_event(
    name: &str,
    description: &str,
    days: i32,
    time_utc: &str,
    consensus: Option<&str>,
    previous: Option<&str>,
    importance: Importance,
) -> MacroEvent {
    MacroEvent {
        country: "United States".to_string(),
        country_code: "US".to_string(),
        event_name: name.to_string(),
        description: description.to_string(),
        days_from_now: days,
        time_utc: time_utc.to_string(),
        consensus: consensus.map(str::to_string),
        previous: previous.map(str::to_string),
        actual: None,
        importance,
    }
}

/// Upcoming macroeconomic releases, soonest first.
#[must_use]
pub fn mock_macro_events() -> Vec<MacroEvent> {
    let mut events = vec![
        macro_event(
            "CPI (Consumer Price Index)",
            "Month-over-month change in consumer prices",
            1,
            "13:30",
            Some("0.2%"),
            Some("0.3%"),
            Importance::High,
        ),
        macro_event(
            "Non-Farm Payrolls",
            "Change in number of employed people (excluding farm workers)",
            2,
            "13:30",
            Some("180K"),
            Some("175K"),
            Importance::High,
        ),
        macro_event(
            "FOMC Rate Decision",
            "Federal Reserve interest rate announcement",
            3,
            "19:00",
            Some("5.50%"),
            Some("5.50%"),
            Importance::High,
        ),
        macro_event(
            "Initial Jobless Claims",
            "Weekly count of new unemployment insurance filings",
            4,
            "13:30",
            Some("215K"),
            Some("220K"),
            Importance::Medium,
        ),
        macro_event(
            "Retail Sales",
            "Month-over-month change in retail purchases",
            5,
            "13:30",
            Some("0.4%"),
            Some("0.1%"),
            Importance::Medium,
        ),
        macro_event(
            "Michigan Consumer Sentiment",
            "Survey of consumer confidence and expectations",
            6,
            "15:00",
            Some("69.5"),
            Some("68.2"),
            Importance::Low,
        ),
    ];
    let mut ecb = macro_event(
        "ECB Rate Decision",
        "European Central Bank interest rate announcement",
        4,
        "12:45",
        Some("4.25%"),
        Some("4.25%"),
        Importance::High,
    );
    ecb.country = "European Union".to_string();
    ecb.country_code = "EU".to_string();
    events.push(ecb);
    events.sort_by_key(|e| e.days_from_now);
    events
}

fn corporate(ticker: &str, company: &str, name: &str, description: &str, days: i32) -> CorporateEvent {
    CorporateEvent {
        ticker: ticker.to_string(),
        company: company.to_string(),
        event_name: name.to_string(),
        description: description.to_string(),
        days_from_now: days,
    }
}

/// Upcoming corporate events, soonest first.
#[must_use]
pub fn mock_corporate_events() -> Vec<CorporateEvent> {
    vec![
        corporate(
            "AAPL",
            "Apple Inc.",
            "WWDC Keynote",
            "Annual developer conference keynote",
            5,
        ),
        corporate(
            "MSFT",
            "Microsoft Corp.",
            "Ex-Dividend Date",
            "Last day to buy shares and receive the next dividend",
            9,
        ),
        corporate(
            "NVDA",
            "NVIDIA Corp.",
            "GTC Conference",
            "GPU technology conference with product announcements",
            14,
        ),
        corporate(
            "TSLA",
            "Tesla Inc.",
            "Annual Shareholder Meeting",
            "Votes on board seats and shareholder proposals",
            18,
        ),
        corporate(
            "AMZN",
            "Amazon.com Inc.",
            "Prime Day",
            "Two-day sales event",
            25,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earnings_sorted_soonest_first() {
        let events = mock_earnings();
        assert!(!events.is_empty());
        assert!(events.windows(2).all(|w| w[0].days_from_now <= w[1].days_from_now));
    }

    #[test]
    fn test_earnings_have_estimates_not_actuals() {
        for e in mock_earnings() {
            assert!(e.estimated_eps > 0.0);
            assert!(e.estimated_revenue > 0.0);
            assert!(e.actual_eps.is_none());
            assert!(e.actual_revenue.is_none());
        }
    }

    #[test]
    fn test_macro_events_sorted_and_flagged() {
        let events = mock_macro_events();
        assert!(events.windows(2).all(|w| w[0].days_from_now <= w[1].days_from_now));
        assert!(events.iter().any(|e| e.importance == Importance::High));
        assert!(events.iter().any(|e| e.country_code == "EU"));
    }

    #[test]
    fn test_importance_ordering() {
        assert!(Importance::High > Importance::Medium);
        assert!(Importance::Medium > Importance::Low);
    }

    #[test]
    fn test_report_time_labels() {
        assert_eq!(ReportTime::Bmo.label(), "BMO");
        assert_eq!(ReportTime::Amc.label(), "AMC");
    }

    #[test]
    fn test_corporate_events_in_future() {
        assert!(mock_corporate_events().iter().all(|e| e.days_from_now > 0));
    }
}
