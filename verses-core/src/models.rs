//! Content model structs for poems, poets and facts.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;
use verses_types::{PoemId, PoetId};

/// A single poem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub id: PoemId,

    pub title: String,

    /// Author display name
    pub author: String,

    /// Foreign key into the poets collection
    pub author_id: PoetId,

    /// Year of writing; numbers and numeric strings are accepted
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,

    /// Full text, stanzas separated by a blank line
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub mood: Option<String>,
}

/// Leading stanzas of a poem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaPreview<'a> {
    pub stanzas: Vec<&'a str>,
    /// True when stanzas were cut off
    pub truncated: bool,
}

impl Poem {
    /// Year used for ordering and averaging (missing counts as 0)
    pub fn year_or_zero(&self) -> i64 {
        self.year.map(i64::from).unwrap_or(0)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Split the text on blank lines
    pub fn stanzas(&self) -> Vec<&str> {
        self.text.split("\n\n").collect()
    }

    /// First `max` stanzas of the text
    pub fn stanza_preview(&self, max: usize) -> StanzaPreview<'_> {
        let stanzas = self.stanzas();
        let truncated = stanzas.len() > max;
        StanzaPreview {
            stanzas: stanzas.into_iter().take(max).collect(),
            truncated,
        }
    }

    /// First `max` lines of the text joined back with newlines
    pub fn line_preview(&self, max: usize) -> String {
        self.text.split('\n').take(max).collect::<Vec<_>>().join("\n")
    }
}

/// A poet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poet {
    pub id: PoetId,
    pub name: String,

    #[serde(default)]
    pub period: Option<String>,

    #[serde(default)]
    pub style: Option<String>,

    /// Portrait path
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Poet {
    pub fn period_or_default(&self) -> &str {
        non_empty(self.period.as_deref()).unwrap_or("Период неизвестен")
    }

    pub fn style_or_default(&self) -> &str {
        non_empty(self.style.as_deref()).unwrap_or("Стиль не указан")
    }

    /// Rebase a root-relative image path (`/images/x.jpg`) onto `base_path`
    pub fn rebase_image(&mut self, base_path: &str) {
        if let Some(rest) = self.image.strip_prefix('/') {
            self.image = format!("{}{}", base_path, rest);
        }
    }
}

/// A fact about poetry or poets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub title: Option<String>,

    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

impl Fact {
    pub fn title_or_default(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or("Интересный факт")
    }
}

/// `{"poems": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct PoemsDocument {
    pub poems: Vec<Poem>,
}

/// `{"poets": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct PoetsDocument {
    pub poets: Vec<Poet>,
}

/// `{"facts": [...]}`
#[derive(Debug, Deserialize)]
pub(crate) struct FactsDocument {
    pub facts: Vec<Fact>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

static LEADING_INT_REGEX: OnceLock<Regex> = OnceLock::new();

fn leading_int_regex() -> &'static Regex {
    LEADING_INT_REGEX.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").unwrap())
}

/// Parse the leading integer of a string (`"1820 г."` -> 1820)
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    leading_int_regex()
        .captures(raw)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// `null` reads as the type's default, like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawYear>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawYear::Int(n)) => i32::try_from(n).ok(),
        Some(RawYear::Float(f)) if f.is_finite() => Some(f.trunc() as i32),
        Some(RawYear::Text(s)) => parse_leading_int(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem_json(year: &str) -> String {
        format!(
            r#"{{"id": 1, "title": "T", "author": "A", "authorId": "a", "year": {}, "text": "x"}}"#,
            year
        )
    }

    #[test]
    fn test_year_accepts_numbers_and_strings() {
        let poem: Poem = serde_json::from_str(&poem_json("1820")).unwrap();
        assert_eq!(poem.year, Some(1820));

        let poem: Poem = serde_json::from_str(&poem_json("\"1833\"")).unwrap();
        assert_eq!(poem.year, Some(1833));

        let poem: Poem = serde_json::from_str(&poem_json("\"1901 г.\"")).unwrap();
        assert_eq!(poem.year, Some(1901));
    }

    #[test]
    fn test_year_unparseable_is_none() {
        let poem: Poem = serde_json::from_str(&poem_json("null")).unwrap();
        assert_eq!(poem.year, None);

        let poem: Poem = serde_json::from_str(&poem_json("\"неизвестно\"")).unwrap();
        assert_eq!(poem.year, None);

        let poem: Poem = serde_json::from_str(&poem_json("[1]")).unwrap();
        assert_eq!(poem.year, None);
    }

    #[test]
    fn test_missing_optional_fields() {
        let poem: Poem = serde_json::from_str(
            r#"{"id": 3, "title": "T", "author": "A", "authorId": "a", "text": "x"}"#,
        )
        .unwrap();
        assert_eq!(poem.year, None);
        assert!(poem.tags.is_empty());
        assert_eq!(poem.mood, None);
        assert_eq!(poem.year_or_zero(), 0);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let doc: PoemsDocument = serde_json::from_str(
            r#"{"poems": [
                {"id": 1, "title": "T", "author": "A", "authorId": "a", "text": "x", "tags": ["зима"]},
                {"id": 2, "title": "U", "author": "A", "authorId": "a", "text": "y", "tags": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(doc.poems.len(), 2);
        assert!(doc.poems[1].tags.is_empty());

        let poet: Poet =
            serde_json::from_str(r#"{"id": "fet", "name": "Афанасий Фет", "image": null}"#).unwrap();
        assert_eq!(poet.image, "");

        let fact: Fact = serde_json::from_str(r#"{"text": "t", "category": null}"#).unwrap();
        assert_eq!(fact.category, "");
    }

    #[test]
    fn test_stanza_preview() {
        let poem: Poem = serde_json::from_str(
            r#"{"id": 1, "title": "T", "author": "A", "authorId": "a",
                "text": "a\nb\n\nc\n\nd\n\ne"}"#,
        )
        .unwrap();

        let preview = poem.stanza_preview(3);
        assert_eq!(preview.stanzas, vec!["a\nb", "c", "d"]);
        assert!(preview.truncated);

        let preview = poem.stanza_preview(4);
        assert!(!preview.truncated);
        assert_eq!(poem.line_preview(2), "a\nb");
    }

    #[test]
    fn test_rebase_image() {
        let mut poet = Poet {
            id: PoetId::new("pushkin"),
            name: "Александр Пушкин".into(),
            period: None,
            style: Some(String::new()),
            image: "/images/poets/pushkin.jpg".into(),
        };
        poet.rebase_image("../");
        assert_eq!(poet.image, "../images/poets/pushkin.jpg");

        poet.rebase_image("./");
        assert_eq!(poet.image, "../images/poets/pushkin.jpg");

        assert_eq!(poet.period_or_default(), "Период неизвестен");
        assert_eq!(poet.style_or_default(), "Стиль не указан");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int(" 1799"), Some(1799));
        assert_eq!(parse_leading_int("около 1800"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
