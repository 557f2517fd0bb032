//! Display formatting helpers shared by every view.
//!
//! All money figures in the dashboard render through these; keeping them in
//! one place is what keeps the table, heatmap, and calendar views
//! consistent.

/// Format a market cap given in billions: `$2.9T`, `$425B`.
#[must_use]
pub fn format_billions(value: f64) -> String {
    if value >= 1000.0 {
        format!("${:.1}T", value / 1000.0)
    } else {
        format!("${value:.0}B")
    }
}

/// Format a signed percentage with an explicit `+` for gains: `+2.34%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Format a dollar price: `$178.52`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Format a revenue figure given in dollars, tiered by magnitude:
/// `$1.25T`, `$94.5B`, `$250.0M`, `$1200`.
#[must_use]
pub fn format_revenue(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else {
        format!("${value:.0}")
    }
}

/// Format an age in minutes as a relative time: "Just now", "5m ago",
/// "3h ago", "Yesterday", "4d ago".
#[must_use]
pub fn format_relative_time(age_minutes: u64) -> String {
    let hours = age_minutes / 60;
    let days = age_minutes / (60 * 24);

    if age_minutes < 1 {
        "Just now".to_string()
    } else if age_minutes < 60 {
        format!("{age_minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{days}d ago")
    }
}

/// Format a day offset as an event date: "Today", "Tomorrow", "In 5 days",
/// "3 days ago".
#[must_use]
pub fn format_event_date(days_from_now: i32) -> String {
    match days_from_now {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d > 1 => format!("In {d} days"),
        -1 => "Yesterday".to_string(),
        d => format!("{} days ago", -d),
    }
}

/// Emoji flag for a country code, with a globe fallback.
#[must_use]
pub fn country_flag(country_code: &str) -> &'static str {
    match country_code {
        "US" => "\u{1f1fa}\u{1f1f8}",
        "EU" => "\u{1f1ea}\u{1f1fa}",
        "GB" => "\u{1f1ec}\u{1f1e7}",
        "JP" => "\u{1f1ef}\u{1f1f5}",
        "CN" => "\u{1f1e8}\u{1f1f3}",
        "DE" => "\u{1f1e9}\u{1f1ea}",
        "FR" => "\u{1f1eb}\u{1f1f7}",
        "CA" => "\u{1f1e8}\u{1f1e6}",
        "AU" => "\u{1f1e6}\u{1f1fa}",
        _ => "\u{1f310}",
    }
}
