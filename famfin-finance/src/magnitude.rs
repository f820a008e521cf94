//! Magnitude suffixes ("k", "tr", "triệu", ...) that scale a typed numeral.
//!
//! Lookup is exact-string: "k" and "K" are both listed, "Tr" is not.

/// Every recognized suffix with its multiplier
pub const SUFFIXES: &[(&str, f64)] = &[
    ("k", 1_000.0),
    ("K", 1_000.0),
    ("m", 1_000_000.0),
    ("M", 1_000_000.0),
    ("tr", 1_000_000.0),
    ("triệu", 1_000_000.0),
    ("nghìn", 1_000.0),
    ("ngàn", 1_000.0),
];

/// Multiplier for a captured suffix token. Absent or unknown => 1.
pub fn multiplier(token: Option<&str>) -> f64 {
    token
        .and_then(|t| SUFFIXES.iter().find(|(s, _)| *s == t))
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Regex alternation over all suffixes, longest first so "triệu" is
/// never cut short by "tr".
pub(crate) fn suffix_alternation() -> String {
    let mut tokens: Vec<&str> = SUFFIXES.iter().map(|(s, _)| *s).collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}
