use chrono::NaiveDate;
use fintrack_api::endpoints::Milliunits;
use ratatui::{style::Style, text::Span};

use super::theme;

/// `1234567` milliunits -> ` $1,234.57`, negatives as `-$1,234.57`.
pub fn format_amount(amount: Milliunits) -> String {
    let abs = amount.inner().unsigned_abs();
    let cents = abs / 10 + u64::from(abs % 10 >= 5);
    let whole = group_thousands(cents / 100);
    let sign = if amount.is_negative() { "-" } else { " " };
    format!("{}${}.{:02}", sign, whole, cents % 100)
}

/// [`format_amount`] colored by sign.
pub fn fmt_amount(amount: Milliunits) -> Span<'static> {
    Span::styled(
        format_amount(amount),
        Style::default().fg(theme::amount_color(amount.inner())),
    )
}

pub fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
