//! Answer text normalization and comparison.
//!
//! Free-text answers are graded leniently: surrounding whitespace, runs of
//! internal whitespace, and letter case never count against the user.

/// Normalize text for comparison.
///
/// Trims the ends, collapses internal whitespace runs to single spaces, and
/// lowercases. Korean text has no case so lowercasing only affects the
/// Latin-script side.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Compare a user answer against the expected text under [`normalize`].
pub fn answers_match(user: &str, expected: &str) -> bool {
    normalize(user) == normalize(expected)
}
