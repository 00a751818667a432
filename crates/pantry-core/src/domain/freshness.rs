//! Freshness Classification
//!
//! Urgency level derived from days until expiry. Callers pass the reference
//! "now"; nothing here reads a clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;
pub const CRITICAL_DAYS: i64 = 3;
pub const WARNING_DAYS: i64 = 7;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessLevel {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl FreshnessLevel {
    pub fn from_days(days: i64) -> Self {
        if days <= CRITICAL_DAYS {
            FreshnessLevel::Critical
        } else if days <= WARNING_DAYS {
            FreshnessLevel::Warning
        } else {
            FreshnessLevel::Normal
        }
    }

    /// Class applied to the expiry cell
    pub fn css_class(&self) -> &'static str {
        match self {
            FreshnessLevel::Normal => "",
            FreshnessLevel::Warning => "text-warning fw-bold",
            FreshnessLevel::Critical => "text-danger fw-bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Freshness {
    pub level: FreshnessLevel,
    /// None when the expiry is missing or unparseable
    pub days_remaining: Option<i64>,
}

impl Freshness {
    /// "(2 days)" for anything due within the warning window
    pub fn days_note(&self) -> Option<String> {
        self.days_remaining
            .filter(|days| *days <= WARNING_DAYS)
            .map(|days| format!("({} days)", days))
    }
}

/// Classify against the start of `today`
pub fn classify(expiry: Option<&str>, today: NaiveDate) -> Freshness {
    classify_at(expiry, today.and_time(NaiveTime::MIN))
}

/// Classify against an exact instant; days are rounded up
pub fn classify_at(expiry: Option<&str>, now: NaiveDateTime) -> Freshness {
    let Some(expiry) = expiry.and_then(parse_expiry) else {
        return Freshness::default();
    };
    let days = ceil_days((expiry - now).num_seconds());
    Freshness {
        level: FreshnessLevel::from_days(days),
        days_remaining: Some(days),
    }
}

pub fn parse_expiry(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.naive_utc()))
}

fn ceil_days(seconds: i64) -> i64 {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_thresholds() {
        let today = day("2024-03-10");
        let cases = [
            ("2024-03-10", 0, FreshnessLevel::Critical),
            ("2024-03-13", 3, FreshnessLevel::Critical),
            ("2024-03-14", 4, FreshnessLevel::Warning),
            ("2024-03-17", 7, FreshnessLevel::Warning),
            ("2024-03-18", 8, FreshnessLevel::Normal),
            ("2025-01-01", 297, FreshnessLevel::Normal),
        ];
        for (expiry, days, level) in cases {
            let f = classify(Some(expiry), today);
            assert_eq!(f.days_remaining, Some(days), "{}", expiry);
            assert_eq!(f.level, level, "{}", expiry);
        }
    }

    #[test]
    fn test_past_due_is_critical() {
        let f = classify(Some("2024-01-01"), day("2024-01-03"));
        assert_eq!(f.level, FreshnessLevel::Critical);
        assert_eq!(f.days_remaining, Some(-2));
        assert_eq!(f.days_note().as_deref(), Some("(-2 days)"));
    }

    #[test]
    fn test_missing_or_garbage_is_normal() {
        let today = day("2024-01-03");
        assert_eq!(classify(None, today), Freshness { level: FreshnessLevel::Normal, days_remaining: None });
        assert_eq!(classify(Some("soon"), today).days_remaining, None);
        assert_eq!(classify(Some(""), today).level, FreshnessLevel::Normal);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let now = day("2024-01-01").and_hms_opt(18, 0, 0).unwrap();
        // 6 hours left counts as a full day
        assert_eq!(classify_at(Some("2024-01-02"), now).days_remaining, Some(1));
        // expired this morning
        assert_eq!(classify_at(Some("2024-01-01"), now).days_remaining, Some(0));
    }

    #[test]
    fn test_backend_date_formats() {
        let today = day("2024-01-01");
        for raw in [
            "2024-01-05",
            "2024/01/05",
            "01/05/2024",
            "2024-01-05 00:00:00",
            "2024-01-05T00:00:00",
            "Fri, 05 Jan 2024 00:00:00 GMT",
            "2024-01-05T00:00:00Z",
            "2024-01-05T00:00:00+00:00",
            "2024-01-05T00:00:00.000Z",
        ] {
            assert_eq!(classify(Some(raw), today).days_remaining, Some(4), "{}", raw);
        }
    }

    #[test]
    fn test_offset_timestamp_tomorrow_is_critical() {
        let f = classify(Some("2024-01-04T00:00:00Z"), day("2024-01-03"));
        assert_eq!(f.level, FreshnessLevel::Critical);
        assert_eq!(f.days_remaining, Some(1));
    }

    #[test]
    fn test_css_and_note() {
        assert_eq!(FreshnessLevel::Critical.css_class(), "text-danger fw-bold");
        assert_eq!(FreshnessLevel::Warning.css_class(), "text-warning fw-bold");
        assert_eq!(FreshnessLevel::Normal.css_class(), "");
        let far = Freshness { level: FreshnessLevel::Normal, days_remaining: Some(30) };
        assert_eq!(far.days_note(), None);
    }
}
