//! Query-string helpers for list endpoints.

/// Reads a numeric query parameter leniently.
///
/// Anything that is not an integer is treated as absent so the search
/// defaults apply.
pub fn lenient_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Treats an empty query value as absent.
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}
