//! Locale-style string ordering for route files.
//!
//! First-wins conflict resolution depends on the order files are visited,
//! and directory listings come back in platform-specific order. Sorting with
//! [`RouteCollator`] first makes the outcome the same everywhere.

use std::cmp::Ordering;

/// Comparator approximating root-locale collation
///
/// Strings compare in three levels:
/// 1. character class (whitespace, punctuation, currency, digits, letters)
///    and case-folded character
/// 2. case, lowercase before uppercase at the first difference
/// 3. plain code point order, so distinct strings never compare equal
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteCollator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Currency,
    Digit,
    Letter,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if matches!(c, '$' | '¢' | '£' | '¥' | '€') {
        CharClass::Currency
    } else if c.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl RouteCollator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = a
            .chars()
            .map(|c| (classify(c), fold(c)))
            .cmp(b.chars().map(|c| (classify(c), fold(c))));

        primary
            .then_with(|| {
                a.chars()
                    .zip(b.chars())
                    .find(|(x, y)| x != y)
                    .map_or(Ordering::Equal, |(x, y)| {
                        // lowercase first
                        y.is_lowercase().cmp(&x.is_lowercase())
                    })
            })
            .then_with(|| a.cmp(b))
    }

    /// Stable sort in collation order
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}
