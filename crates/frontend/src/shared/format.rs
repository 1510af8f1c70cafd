//! Number and date formatting for dashboard cards and tables

use chrono::{Local, TimeZone};
use contracts::dashboards::d410_order_insights::parse_order_date;

/// How a stat card renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Integer => format_thousands(value.round() as i64),
        ValueFormat::Money => format_money(value),
    }
}

/// "$1,234.50", negative amounts as "-$12.00"
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
}

pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// Order date as shown in the table, in the browser's timezone
pub fn format_order_date(raw: &str) -> String {
    format_order_date_in(raw, &Local)
}

/// Date-only values are shown as stored; anything unparseable is shown verbatim
pub fn format_order_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.len() == 10 {
        return trimmed.to_string();
    }
    match parse_order_date(trimmed, tz) {
        Some(date_time) => date_time
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => raw.to_string(),
    }
}
