//! Search, filtering and sorting over the library's poems.

use crate::collate;
use crate::library::Library;
use crate::models::Poem;
use crate::vocab::Era;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordering applied by [`sort_poems`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    /// Oldest first
    Year,
    /// Newest first
    YearDesc,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "year" => Ok(SortKey::Year),
            "yearDesc" => Ok(SortKey::YearDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Year => "year",
            SortKey::YearDesc => "yearDesc",
        }
    }

    fn compare(&self, a: &Poem, b: &Poem) -> Ordering {
        match self {
            SortKey::Title => collate::compare(&a.title, &b.title),
            SortKey::Author => collate::compare(&a.author, &b.author),
            SortKey::Year => a.year_or_zero().cmp(&b.year_or_zero()),
            SortKey::YearDesc => b.year_or_zero().cmp(&a.year_or_zero()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort of a poem list. Equal keys keep their input order in
/// both year directions.
pub fn sort_poems<'a>(poems: &[&'a Poem], key: SortKey) -> Vec<&'a Poem> {
    let mut sorted = poems.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

impl Library {
    /// Every poem, in document order
    pub fn all_poems(&self) -> Vec<&Poem> {
        self.poems().iter().collect()
    }

    /// Case-insensitive substring search over title, author, text and tags.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Poem> {
        if query.trim().is_empty() {
            return self.all_poems();
        }

        let needle = query.to_lowercase();
        self.poems()
            .iter()
            .filter(|poem| poem_matches(poem, &needle))
            .collect()
    }

    /// Poems carrying at least one of `tags`; no tags means no filter
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Poem> {
        if tags.is_empty() {
            return self.all_poems();
        }

        let wanted: HashSet<&str> = tags.iter().map(|t| t.as_ref()).collect();
        self.poems()
            .iter()
            .filter(|poem| poem.tags.iter().any(|t| wanted.contains(t.as_str())))
            .collect()
    }

    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Poem> {
        self.poems().iter().filter(|poem| poem.has_tag(tag)).collect()
    }

    /// Poems with exactly this mood; `None` or `""` means no filter
    pub fn filter_by_mood(&self, mood: Option<&str>) -> Vec<&Poem> {
        match mood {
            Some(mood) if !mood.is_empty() => self
                .poems()
                .iter()
                .filter(|poem| poem.mood.as_deref() == Some(mood))
                .collect(),
            _ => self.all_poems(),
        }
    }

    /// Poems written within `[start, end]`. Poems without a year never match.
    pub fn filter_by_era(&self, start: i32, end: i32) -> Vec<&Poem> {
        let era = Era::new(start, end);
        self.poems()
            .iter()
            .filter(|poem| poem.year.is_some_and(|year| era.contains(year)))
            .collect()
    }

    /// Like [`filter_by_era`](Self::filter_by_era) with a `"1800-1850"` key
    pub fn filter_by_era_key(&self, key: &str) -> Option<Vec<&Poem>> {
        let era = Era::parse(key)?;
        Some(self.filter_by_era(era.start, era.end))
    }

    /// Distinct tags in collation order
    pub fn all_tags(&self) -> Vec<String> {
        distinct_sorted(self.poems().iter().flat_map(|p| p.tags.iter()))
    }

    /// Distinct moods in collation order
    pub fn all_moods(&self) -> Vec<String> {
        distinct_sorted(
            self.poems()
                .iter()
                .filter_map(|p| p.mood.as_ref())
                .filter(|m| !m.is_empty()),
        )
    }
}

fn poem_matches(poem: &Poem, needle: &str) -> bool {
    poem.title.to_lowercase().contains(needle)
        || poem.author.to_lowercase().contains(needle)
        || poem.text.to_lowercase().contains(needle)
        || poem.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.as_str()) {
            out.push(value.clone());
        }
    }
    collate::sort_strings(&mut out);
    out
}
