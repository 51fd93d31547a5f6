//! Locale-aware string ordering for Russian display text.
//!
//! Strings compare in three levels. The primary level orders characters
//! by class (whitespace, punctuation and symbols, digits, Cyrillic
//! letters, other letters) and then by letter, case-folded with `ё`
//! treated as `е`. The secondary level puts `е` before `ё` and the
//! tertiary level puts lowercase before uppercase.

use std::cmp::Ordering;

fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if !c.is_alphabetic() {
        1
    } else if matches!(c, '\u{0400}'..='\u{052F}') {
        3
    } else {
        4
    }
}

fn primary(c: char) -> (u8, char) {
    let folded = match c {
        'ё' | 'Ё' => 'е',
        _ => c.to_lowercase().next().unwrap_or(c),
    };
    (class(c), folded)
}

fn secondary(c: char) -> u8 {
    match c {
        'ё' | 'Ё' => 1,
        _ => 0,
    }
}

fn tertiary(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compare two strings for display ordering
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(secondary).cmp(b.chars().map(secondary)))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}

/// Sort strings in place with [`compare`]
pub fn sort_strings(values: &mut [String]) {
    values.sort_by(|a, b| compare(a, b));
}
