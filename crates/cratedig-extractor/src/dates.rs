//! Release date → year reduction

use regex::Regex;
use std::sync::LazyLock;

static FULL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

static BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})$").expect("year pattern is valid"));

/// Reduce a raw release date to its four-digit year
///
/// Accepts `YYYY-MM-DD` and bare `YYYY`. Anything else (partial dates such as
/// `1975-00`, symbolic markers such as `?` or `unknown`) yields `None`.
pub fn release_year(raw: &str) -> Option<String> {
    FULL_DATE
        .captures(raw)
        .or_else(|| BARE_YEAR.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|year| year.as_str().to_string())
}
