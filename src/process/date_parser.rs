use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Days from 0001-01-01 (CE) to 1970-01-01, the Arrow `Date32` epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

static DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").expect("day-first date pattern")
});

static YEAR_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}$").expect("year-first date pattern")
});

/// Parse `s` with `fmt` only when it has exactly the expected shape.
/// chrono alone accepts short years and leading whitespace.
fn parse_strict(s: &str, shape: &Regex, fmt: &str) -> Option<NaiveDate> {
    if !shape.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, fmt).ok()
}

/// Strict `DD/MM/YYYY`, falling back to strict `YYYY/MM/DD`.
/// Anything neither layout accepts (including impossible dates) is `None`.
pub fn parse_benefit_date(s: &str) -> Option<NaiveDate> {
    parse_strict(s, &DAY_FIRST, "%d/%m/%Y").or_else(|| parse_strict(s, &YEAR_FIRST, "%Y/%m/%d"))
}

/// Arrow `Date32` value (days since 1970-01-01)
pub fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}
