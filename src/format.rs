//! Display Formatting
//!
//! Currency, dates, file sizes and status labels.

use chrono::DateTime;

use crate::config::CURRENCY_SYMBOL;

/// `12500` -> `₦12,500`
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
}

/// RFC 3339 timestamps become `Aug 3, 2025, 01:55 PM` (in the timestamp's own offset).
/// Anything else is assumed to be pre-formatted by the server.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Human-readable byte count: `0 Bytes`, `500 Bytes`, `1.5 KB`, `2 MB`
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ln() / 1024f64.ln()).floor().clamp(0.0, (UNITS.len() - 1) as f64);
    let value = bytes / 1024f64.powf(exponent);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent as usize])
}

pub fn reason_display(reason: Option<&str>) -> &str {
    match reason {
        Some(r) if !r.trim().is_empty() => r,
        _ => "No reason provided",
    }
}

/// (css class, label) for a confirmation status badge
pub fn status_label(confirmed: bool) -> (&'static str, &'static str) {
    if confirmed {
        ("confirmed", "Confirmed")
    } else {
        ("pending", "Pending")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "₦0");
        assert_eq!(format_amount(200), "₦200");
        assert_eq!(format_amount(12500), "₦12,500");
        assert_eq!(format_amount(1_234_567), "₦1,234,567");
        assert_eq!(format_amount(-4000), "-₦4,000");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-08-03T13:55:53.476959Z"), "Aug 3, 2025, 01:55 PM");
        assert_eq!(format_timestamp("2025-08-02T09:05:00+01:00"), "Aug 2, 2025, 09:05 AM");
        assert_eq!(format_timestamp("Aug 03, 2025 01:55 PM"), "Aug 03, 2025 01:55 PM");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(500.0), "500 Bytes");
        assert_eq!(format_file_size(1024.0), "1 KB");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(2.0 * 1024.0 * 1024.0), "2 MB");
    }

    #[test]
    fn test_reason_and_status() {
        assert_eq!(reason_display(Some("Lab fee")), "Lab fee");
        assert_eq!(reason_display(Some("  ")), "No reason provided");
        assert_eq!(reason_display(None), "No reason provided");
        assert_eq!(status_label(true), ("confirmed", "Confirmed"));
        assert_eq!(status_label(false), ("pending", "Pending"));
    }
}
