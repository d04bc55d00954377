//! Settlement-date driven approval status for lifecycle events.
//!
//! Dates here come from stored trades rather than upload files, so they are
//! read with their own, more permissive rules than the row mapper uses.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{STATUS_APPROVED, STATUS_PENDING};

static DAY_BEFORE_MONTH_ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid date regex"));

/// Reads a stored settlement date.
///
/// Order: ISO date or timestamp, `YYYY-DD-MM` when only that reading is a
/// valid date, `DD/MM/YYYY`, then `MM/DD/YYYY`.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    if let Some(caps) = DAY_BEFORE_MONTH_ISO.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let month: u32 = caps[3].parse().ok()?;
        if day > 12 && month <= 12 {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(d);
            }
        }
    }

    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() == 3 {
        let first: u32 = parts[0].trim().parse().ok()?;
        let second: u32 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        if year > 1000 {
            return NaiveDate::from_ymd_opt(year, second, first)
                .or_else(|| NaiveDate::from_ymd_opt(year, first, second));
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// Already approved before this check
    Approved,
    /// Settlement date has passed; approve without operator action
    AutoApproved,
    /// Settles today; an operator may approve
    AwaitingApproval,
    /// Settles in the future; approval is not yet allowed
    NotYetDue,
    /// No readable settlement date
    Pending,
    /// Stored status is neither pending nor approved (e.g. rejected); left as is
    Retained,
}

impl SettlementStatus {
    /// Event status to store for the trade; `None` keeps the stored one.
    pub fn event_status(&self) -> Option<&'static str> {
        match self {
            SettlementStatus::Approved | SettlementStatus::AutoApproved => Some(STATUS_APPROVED),
            SettlementStatus::Retained => None,
            _ => Some(STATUS_PENDING),
        }
    }

    pub fn can_approve(&self) -> bool {
        matches!(self, SettlementStatus::AwaitingApproval)
    }
}

/// Decides a lifecycle event's approval status relative to `today`.
pub fn settlement_status(
    settlement_date: Option<&str>,
    current_status: Option<&str>,
    today: NaiveDate,
) -> SettlementStatus {
    match current_status.map(str::trim) {
        Some(STATUS_APPROVED) => return SettlementStatus::Approved,
        None | Some("") | Some(STATUS_PENDING) => {}
        Some(_) => return SettlementStatus::Retained,
    }

    let Some(settles) = settlement_date.and_then(parse_flexible_date) else {
        return SettlementStatus::Pending;
    };

    if settles < today {
        SettlementStatus::AutoApproved
    } else if settles == today {
        SettlementStatus::AwaitingApproval
    } else {
        SettlementStatus::NotYetDue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_and_timestamps() {
        assert_eq!(parse_flexible_date("2025-07-23"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_flexible_date("2025-07-23T09:30:00Z"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_flexible_date("2025-07-23T09:30:00"), Some(ymd(2025, 7, 23)));
    }

    #[test]
    fn test_parse_day_before_month_iso() {
        assert_eq!(parse_flexible_date("2025-23-07"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_flexible_date("2025-31-02"), None);
    }

    #[test]
    fn test_parse_slash_dates_prefer_day_first() {
        assert_eq!(parse_flexible_date("03/04/2025"), Some(ymd(2025, 4, 3)));
        // only valid month first
        assert_eq!(parse_flexible_date("04/13/2025"), Some(ymd(2025, 4, 13)));
        assert_eq!(parse_flexible_date("32/13/2025"), None);
        assert_eq!(parse_flexible_date("03/04/25"), None);
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("tomorrow"), None);
        assert_eq!(parse_flexible_date("٢٠٢٥-٢٣-٠٧"), None);
    }

    #[test]
    fn test_settlement_status_relative_to_today() {
        let today = ymd(2025, 7, 23);

        assert_eq!(settlement_status(Some("2025-07-22"), None, today), SettlementStatus::AutoApproved);
        assert_eq!(settlement_status(Some("23/07/2025"), Some("Pending"), today), SettlementStatus::AwaitingApproval);
        assert_eq!(settlement_status(Some("2025-07-24"), None, today), SettlementStatus::NotYetDue);
        assert_eq!(settlement_status(Some("soon"), None, today), SettlementStatus::Pending);
        assert_eq!(settlement_status(None, None, today), SettlementStatus::Pending);
    }

    #[test]
    fn test_approved_events_stay_approved() {
        let today = ymd(2025, 7, 23);
        let status = settlement_status(Some("2025-08-01"), Some("Approved"), today);
        assert_eq!(status, SettlementStatus::Approved);
        assert!(!status.can_approve());
        assert_eq!(status.event_status(), Some("Approved"));
    }

    #[test]
    fn test_only_pending_events_move() {
        let today = ymd(2025, 7, 23);
        for current in ["Rejected", "Cancelled"] {
            let status = settlement_status(Some("2025-07-01"), Some(current), today);
            assert_eq!(status, SettlementStatus::Retained, "{current}");
            assert_eq!(status.event_status(), None);
            assert!(!status.can_approve());
        }
        assert_eq!(settlement_status(Some("2025-07-01"), Some(" Pending "), today), SettlementStatus::AutoApproved);
        assert_eq!(settlement_status(Some("2025-07-01"), Some(""), today), SettlementStatus::AutoApproved);
    }

    #[test]
    fn test_event_status_strings() {
        assert_eq!(SettlementStatus::AutoApproved.event_status(), Some("Approved"));
        assert_eq!(SettlementStatus::AwaitingApproval.event_status(), Some("Pending"));
        assert!(SettlementStatus::AwaitingApproval.can_approve());
        assert!(!SettlementStatus::NotYetDue.can_approve());
    }
}
