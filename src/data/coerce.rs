//! Cell value coercion
//!
//! Query results reach the chart engine as loosely typed cells: the same
//! column may hold `12`, `"12"` and `" 12 "`. These helpers give every cell a
//! numeric reading and a label reading, following the conversion rules web
//! front ends use (`Number(x)` and `String(x)`), so charts come out the same
//! whether a value was serialized as a number or as text.

use super::CellValue;
use regex::Regex;
use std::sync::LazyLock;

/// Decimal literal: optional sign, digits with optional fraction (or a bare
/// fraction), optional exponent.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").expect("valid regex")
});

/// Read a cell as a number.
///
/// - Numbers are returned as-is
/// - Null reads as 0
/// - Text is trimmed; empty text reads as 0
/// - `0x`, `0o` and `0b` prefixed integers, decimal literals and
///   `[+-]Infinity` are accepted
///
/// Returns `None` when the text is not a number at all.
///
/// # Example
/// ```
/// use nlsql_chart::data::{to_number, CellValue};
///
/// assert_eq!(to_number(&CellValue::from(" 4.5 ")), Some(4.5));
/// assert_eq!(to_number(&CellValue::from("0x1F")), Some(31.0));
/// assert_eq!(to_number(&CellValue::from("12 apples")), None);
/// ```
pub fn to_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Null => Some(0.0),
        CellValue::Text(s) => parse_number(s),
    }
}

/// Whether a cell reads as a finite number
pub fn is_numeric(value: &CellValue) -> bool {
    to_number(value).is_some_and(f64::is_finite)
}

/// Numeric reading of a cell for plotting; anything that is not a finite
/// number plots as 0.
pub fn number_or_zero(value: &CellValue) -> f64 {
    match to_number(value) {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Render a cell as label text.
///
/// Null renders as `"null"`. Numbers use the shortest representation that
/// round-trips, without a trailing `.0`, switching to exponent notation
/// outside `[1e-6, 1e21)`.
pub fn to_label(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => s.clone(),
        CellValue::Null => "null".to_string(),
        CellValue::Number(n) => format_number(*n),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if !DECIMAL_LITERAL.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    // Rust writes `1e21`, labels use `1e+21`
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_to_number_plain_numbers() {
        assert_eq!(to_number(&CellValue::Number(3.5)), Some(3.5));
        assert_eq!(to_number(&text("42")), Some(42.0));
        assert_eq!(to_number(&text("-7.25")), Some(-7.25));
        assert_eq!(to_number(&text("+3")), Some(3.0));
        assert_eq!(to_number(&text(".5")), Some(0.5));
        assert_eq!(to_number(&text("5.")), Some(5.0));
        assert_eq!(to_number(&text("1e3")), Some(1000.0));
        assert_eq!(to_number(&text("2.5E-2")), Some(0.025));
    }

    #[test]
    fn test_to_number_whitespace_and_empty() {
        assert_eq!(to_number(&text("  12\n")), Some(12.0));
        assert_eq!(to_number(&text("")), Some(0.0));
        assert_eq!(to_number(&text("   ")), Some(0.0));
        assert_eq!(to_number(&CellValue::Null), Some(0.0));
    }

    #[test]
    fn test_to_number_radix_prefixes() {
        assert_eq!(to_number(&text("0x1F")), Some(31.0));
        assert_eq!(to_number(&text("0o17")), Some(15.0));
        assert_eq!(to_number(&text("0b101")), Some(5.0));
        assert_eq!(to_number(&text("0x")), None);
        assert_eq!(to_number(&text("0xZZ")), None);
        assert_eq!(to_number(&text("-0x10")), None);
    }

    #[test]
    fn test_to_number_rejects_text() {
        assert_eq!(to_number(&text("abc")), None);
        assert_eq!(to_number(&text("12abc")), None);
        assert_eq!(to_number(&text("1,000")), None);
        assert_eq!(to_number(&text("2024-01-05")), None);
        assert_eq!(to_number(&text("inf")), None);
        assert_eq!(to_number(&text("NaN")), None);
        assert_eq!(to_number(&text("1_000")), None);
    }

    #[test]
    fn test_infinity_is_not_numeric() {
        assert_eq!(to_number(&text("Infinity")), Some(f64::INFINITY));
        assert_eq!(to_number(&text("-Infinity")), Some(f64::NEG_INFINITY));
        assert!(!is_numeric(&text("Infinity")));
        assert_eq!(number_or_zero(&text("-Infinity")), 0.0);
    }

    #[test]
    fn test_number_or_zero() {
        assert_eq!(number_or_zero(&text("n/a")), 0.0);
        assert_eq!(number_or_zero(&CellValue::Null), 0.0);
        assert_eq!(number_or_zero(&text("8")), 8.0);
        assert_eq!(number_or_zero(&CellValue::Number(0.0)), 0.0);
    }

    #[test]
    fn test_to_label() {
        assert_eq!(to_label(&text("Lyon")), "Lyon");
        assert_eq!(to_label(&CellValue::Null), "null");
        assert_eq!(to_label(&CellValue::Number(5.0)), "5");
        assert_eq!(to_label(&CellValue::Number(2.5)), "2.5");
        assert_eq!(to_label(&CellValue::Number(-0.0)), "0");
        assert_eq!(to_label(&CellValue::Number(0.1)), "0.1");
        assert_eq!(to_label(&CellValue::Number(1e21)), "1e+21");
        assert_eq!(to_label(&CellValue::Number(1.5e-7)), "1.5e-7");
        assert_eq!(to_label(&CellValue::Number(123456789.0)), "123456789");
    }
}
