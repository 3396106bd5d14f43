//! Small text helpers shared by the page and the submission payload.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const DEFAULT_DATE_FORMAT: &str = "DD/MM/YYYY";

static MOBILE_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user-agent pattern is valid")
});

/// Substitutes the `DD`, `MM` and `YYYY` tokens of `pattern`.
///
/// Each token is replaced once (its first occurrence); day and month are
/// zero-padded.
///
/// ```
/// # use checklist_core::format::format_date;
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
/// assert_eq!(format_date(date, "YYYY-MM-DD"), "2024-07-05");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    pattern
        .replacen("DD", &format!("{:02}", date.day()), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("YYYY", &date.year().to_string(), 1)
}

/// Whether the user agent belongs to a phone or tablet.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}
