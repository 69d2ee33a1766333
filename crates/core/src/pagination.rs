//! Pagination defaults and defensive query-parameter parsing.
//!
//! List endpoints receive `page` and `limit` as raw query strings. Anything
//! unparseable or below 1 falls back to the defaults instead of erroring,
//! so a malformed link never breaks a listing.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// First page when `page` is absent or unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size when `limit` is absent or unusable. No maximum is enforced.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a raw `page` query value, falling back to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    parse_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// Parse a raw `limit` query value, falling back to [`DEFAULT_PAGE_SIZE`].
pub fn parse_limit(raw: Option<&str>) -> i64 {
    parse_positive(raw).unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Parse a strictly positive integer. `None` on absence, parse failure,
/// or a value below 1.
fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Row offset for a 1-based page.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

/// Whether rows remain beyond `page`, given the filtered total.
pub fn has_more(page: i64, limit: i64, total: i64) -> bool {
    page.saturating_mul(limit) < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_limit(None), 10);
    }

    #[test]
    fn unparseable_values_use_defaults() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_limit(Some("ten")), 10);
        assert_eq!(parse_limit(Some("")), 10);
    }

    #[test]
    fn non_positive_values_use_defaults() {
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_limit(Some("-5")), 10);
    }

    #[test]
    fn valid_values_pass_through() {
        assert_eq!(parse_page(Some("7")), 7);
        assert_eq!(parse_limit(Some("50")), 50);
        // Whitespace is tolerated.
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }

    #[test]
    fn no_upper_bound_on_limit() {
        assert_eq!(parse_limit(Some("100000")), 100_000);
    }

    #[test]
    fn offset_is_zero_based_from_page_one() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(3, 25), 50);
    }

    #[test]
    fn has_more_compares_consumed_rows_to_total() {
        assert!(has_more(1, 10, 11));
        assert!(!has_more(1, 10, 10));
        assert!(!has_more(2, 10, 20));
        assert!(has_more(2, 10, 21));
        assert!(!has_more(1, 10, 0));
    }
}
