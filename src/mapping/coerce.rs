//! String-level coercions used by the row mapper.
//!
//! Each helper returns `None` when the input is not recognized; the caller
//! decides the fallback.

use once_cell::sync::Lazy;
use regex::Regex;

static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("valid slash date regex"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid iso date regex"));
static DASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})$").expect("valid dash date regex"));
static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?([0-9]+(\.[0-9]*)?|\.[0-9]+)").expect("valid float regex"));
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("valid int regex"));

/// Parses an amount such as `"$1,234.56"` or `"(2,000)"`.
///
/// Everything outside `[0-9.-]` is discarded, then the longest leading
/// decimal literal is read.
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let literal = LEADING_FLOAT.find(&cleaned)?.as_str();
    literal.trim_end_matches('.').parse().ok()
}

/// Reads the leading signed integer, ignoring anything after it (`"3.7"` is 3).
pub fn parse_integer(input: &str) -> Option<i64> {
    let literal = LEADING_INT.find(input.trim_start())?.as_str();
    literal.parse().ok()
}

/// Rewrites a recognized date as zero-padded `YYYY-MM-DD`.
///
/// Slashes are always day first. Two-dash dates are day first unless only
/// the second component can be a day.
pub fn normalize_date(input: &str) -> Option<String> {
    let s = input.trim();

    if let Some(caps) = SLASH_DATE.captures(s) {
        return Some(format_ymd(&caps[3], &caps[2], &caps[1]));
    }

    if let Some(caps) = ISO_DATE.captures(s) {
        return Some(format_ymd(&caps[1], &caps[2], &caps[3]));
    }

    if let Some(caps) = DASH_DATE.captures(s) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let (day, month) = if first <= 12 && second > 12 {
            (&caps[2], &caps[1])
        } else {
            (&caps[1], &caps[2])
        };
        return Some(format_ymd(&caps[3], month, day));
    }

    None
}

fn format_ymd(year: &str, month: &str, day: &str) -> String {
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

pub fn normalize_yes_no(input: &str) -> Option<&'static str> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some("Yes"),
        "no" | "n" | "false" | "0" => Some("No"),
        _ => None,
    }
}

pub fn normalize_trade_side(input: &str) -> Option<&'static str> {
    match input.trim().to_uppercase().as_str() {
        "BUY" | "B" => Some("BUY"),
        "SELL" | "S" => Some("SELL"),
        _ => None,
    }
}
