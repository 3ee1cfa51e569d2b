//! String utilities for the domain layer.
//!
//! Lengths shown to the user and title cuts are measured in UTF-16 code
//! units, the unit the session endpoint's browser client counts in.

/// Length of `s` in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count as two.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Take at most `max_units` UTF-16 code units from the start of `s`.
///
/// A character whose surrogate pair would straddle the limit is left out
/// entirely, so the result is always valid and never longer than the limit.
/// Returns a sub-slice of the original string.
pub fn truncate_utf16(s: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (end, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &s[..end];
        }
    }
    s
}
