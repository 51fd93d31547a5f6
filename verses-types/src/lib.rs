//! Shared types for verses
//!
//! This crate provides common types used across the verses crates,
//! including entity identifiers and library events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Poem identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoemId(pub i64);

impl PoemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parse an id the way page query strings carry it: optional
    /// surrounding whitespace, optional sign, then leading digits.
    /// Trailing garbage is ignored (`"12abc"` is 12).
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let s = raw.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }

        let value: i64 = digits[..end].parse().ok()?;
        Some(Self(if negative { -value } else { value }))
    }
}

impl From<i64> for PoemId {
    fn from(id: i64) -> Self {
        PoemId(id)
    }
}

impl From<PoemId> for i64 {
    fn from(id: PoemId) -> Self {
        id.0
    }
}

impl fmt::Display for PoemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Poet identifier (a slug such as "pushkin")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoetId(pub String);

impl PoetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PoetId {
    fn from(id: &str) -> Self {
        PoetId(id.to_string())
    }
}

impl fmt::Display for PoetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three static documents the library is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Poems,
    Poets,
    Facts,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Poems, Resource::Poets, Resource::Facts];

    /// Top-level key of the JSON document
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Poems => "poems",
            Resource::Poets => "poets",
            Resource::Facts => "facts",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Library event delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEvent {
    /// All three documents settled (loaded or failed)
    DataReady {
        poems: usize,
        poets: usize,
        facts: usize,
    },

    /// The favorites store was saved
    FavoritesChanged { poems: usize, poets: usize },
}
