//! Shared utility helpers.

/// Case-insensitive equality against any of the given candidates.
#[inline]
pub fn eq_any_ci(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}

/// Case-insensitive ends_with check without allocating.
#[inline]
pub fn ends_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[haystack.len() - needle.len()..]
            .eq_ignore_ascii_case(needle.as_bytes())
}

/// Strip the first matching suffix (case-insensitive) from `value`.
///
/// Returns `None` when none of the suffixes match.
pub fn strip_suffix_ci<'a>(value: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find(|s| ends_with_ci(value, s))
        // Suffixes are ASCII, so the cut lands on a char boundary.
        .map(|s| &value[..value.len() - s.len()])
}

/// Parse a boolean attribute value (`true`/`false`, `1`/`0`), case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}
