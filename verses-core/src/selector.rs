//! Deterministic "poem of the day" selection.
//!
//! The index is derived from the date string alone so every client picks
//! the same poem for the same day, given the same poem list.

use crate::library::Library;
use crate::models::Poem;
use chrono::{Local, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("No poems to choose from")]
    NoPoems,
}

/// 32-bit rolling hash of a string: `hash = hash * 31 + unit` over UTF-16
/// code units with signed wrap-around, then the absolute value.
pub fn date_hash(key: &str) -> u32 {
    let hash = key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// `YYYY-MM-DD` key for a calendar date
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Key for today in the local time zone
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Index into a collection of `len` items for a date key
pub fn index_for(key: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(date_hash(key) as usize % len)
}

/// Pick the poem for a date key
pub fn poem_of_the_day<'a>(key: &str, poems: &'a [Poem]) -> Result<&'a Poem, SelectError> {
    let index = index_for(key, poems.len()).ok_or(SelectError::NoPoems)?;
    Ok(&poems[index])
}

impl Library {
    pub fn poem_of_the_day(&self, date: NaiveDate) -> Result<&Poem, SelectError> {
        let key = date_key(date);
        let poem = poem_of_the_day(&key, self.poems());
        if poem.is_err() {
            tracing::error!("Poem of the day requested before any poems were loaded");
        }
        poem
    }

    pub fn poem_of_today(&self) -> Result<&Poem, SelectError> {
        self.poem_of_the_day(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::poem;

    #[test]
    fn test_date_hash_known_values() {
        assert_eq!(date_hash(""), 0);
        assert_eq!(date_hash("a"), 97);
        assert_eq!(date_hash("2024-01-01"), 613341632);
        assert_eq!(date_hash("2025-12-31"), 275115454);
        assert_eq!(date_hash("2026-10-19"), 1162559499);
    }

    #[test]
    fn test_date_hash_takes_absolute_value() {
        // both accumulate to negative values before the absolute value
        assert_eq!(date_hash("2024-01-02"), 613341631);
        assert_eq!(date_hash("2023-05-17"), 1500726112);
    }

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_key(date), "2024-03-07");
    }

    #[test]
    fn test_poem_of_the_day_is_stable() {
        let poems: Vec<Poem> = (1..=7).map(|i| poem(i, "T", "a", None)).collect();

        let first = poem_of_the_day("2024-01-01", &poems).unwrap();
        let second = poem_of_the_day("2024-01-01", &poems).unwrap();
        assert_eq!(first.id, second.id);
        // 613341632 % 7 == 1
        assert_eq!(first.id.0, 2);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(poem_of_the_day("2024-01-01", &[]), Err(SelectError::NoPoems));
        assert_eq!(index_for("2024-01-01", 0), None);

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Library::empty().poem_of_the_day(date), Err(SelectError::NoPoems));
    }
}
