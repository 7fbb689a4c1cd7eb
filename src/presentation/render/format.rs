// Formatting helpers for rendered values
use crate::domain::snapshot::Trend;

/// en-US style currency: symbol, thousands separators, always 2 decimals.
/// Codes without a known symbol fall back to `CODE 1,234.00`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let grouped = group_thousands(&(cents / 100).to_string());
    let fraction = cents % 100;

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{fraction:02}"),
        None => format!("{sign}{currency} {grouped}.{fraction:02}"),
    }
}

/// en-US style plain number: thousands separators, any fractional part
/// passed through unchanged.
pub fn format_number(value: f64) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", raw),
    };
    match unsigned.split_once('.') {
        Some((int_part, fraction)) => {
            format!("{sign}{}.{fraction}", group_thousands(int_part))
        }
        None => format!("{sign}{}", group_thousands(&unsigned)),
    }
}

/// Badge color for an order status. Case-insensitive; anything unrecognized
/// maps to `secondary`.
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "completed" => "success",
        "processing" => "warning",
        "shipped" => "info",
        "pending" => "secondary",
        "cancelled" => "danger",
        _ => "secondary",
    }
}

/// `+{change}%` for positive changes, `{change}%` otherwise (the minus sign
/// comes from the number itself).
pub fn change_label(change: f64) -> String {
    if change > 0.0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

/// The trend, not the sign of `change`, decides the styling: a negative
/// change with an `up` trend still styles positive.
pub fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-success",
        Trend::Down => "text-danger",
    }
}

/// Star markers for a 0-5 rating: `floor(rating)` full stars, a half star
/// when the fraction is non-zero, and empty stars filling up to five counted
/// from the full stars alone. Non-integral ratings therefore total six
/// markers (4.8 gives 4 full, 1 half and 1 empty); that inconsistency is
/// shipped behavior and stays as is.
pub fn star_markup(rating: f64) -> String {
    let full = rating.floor() as usize;
    let half = rating.fract() != 0.0;
    let empty = 5usize.saturating_sub(full);

    let mut stars = String::new();
    for _ in 0..full {
        stars.push_str(r#"<i class="bi bi-star-fill text-warning"></i>"#);
    }
    if half {
        stars.push_str(r#"<i class="bi bi-star-half text-warning"></i>"#);
    }
    for _ in 0..empty {
        stars.push_str(r#"<i class="bi bi-star text-muted"></i>"#);
    }
    stars
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
