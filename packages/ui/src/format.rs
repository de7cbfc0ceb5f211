//! Display formatting for amounts and server dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `1234.5` → `"1,234.50"`.
pub fn money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Like [`money`], with `-` for a missing amount.
pub fn money_or_dash(amount: Option<f64>) -> String {
    amount.map(money).unwrap_or_else(|| "-".to_string())
}

/// Server timestamps and dates as `12 Mar 2024`; anything else unchanged.
pub fn date(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match parsed {
        Ok(day) => day.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn date_or_dash(raw: Option<&str>) -> String {
    raw.map(date).unwrap_or_else(|| "-".to_string())
}
