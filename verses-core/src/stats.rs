//! Derived statistics: per-author summaries and poet rankings.

use crate::library::Library;
use crate::models::{Poem, Poet};
use std::collections::HashMap;
use std::hash::Hash;
use verses_types::PoetId;

/// Counter that remembers the order keys were first seen
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: &K) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }

    /// Entries by descending count, ties in first-seen order
    pub fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Clone + Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one author's poems
#[derive(Debug, Clone)]
pub struct AuthorStats<'a> {
    pub poet: Option<&'a Poet>,
    pub total_poems: usize,
    /// Tag frequencies in first-seen order
    pub tag_counts: Vec<(String, usize)>,
    /// Mood frequencies in first-seen order
    pub mood_counts: Vec<(String, usize)>,
    /// Rounded mean year; poems without a year count as year 0.
    /// `None` when the author has no poems.
    pub average_year: Option<i64>,
}

/// A poet placed by number of poems
#[derive(Debug, Clone, PartialEq)]
pub struct PoetRanking<'a> {
    pub poet: &'a Poet,
    pub poem_count: usize,
    /// `poem_count` relative to the most prolific author (0.0..=1.0)
    pub share: f64,
}

impl Library {
    pub fn author_stats(&self, author_id: &PoetId) -> AuthorStats<'_> {
        let poems = self.poems_by_author(author_id);

        let mut tags = Tally::new();
        let mut moods = Tally::new();
        for poem in &poems {
            for tag in &poem.tags {
                tags.add(tag);
            }
            if let Some(mood) = poem.mood.as_ref().filter(|m| !m.is_empty()) {
                moods.add(mood);
            }
        }

        AuthorStats {
            poet: self.poet(author_id),
            total_poems: poems.len(),
            tag_counts: tags.into_entries(),
            mood_counts: moods.into_entries(),
            average_year: average_year(&poems),
        }
    }

    /// Most prolific poets, at most `limit` of them.
    ///
    /// The top `limit` authors are taken before poets without a record are
    /// dropped, so fewer than `limit` entries may come back.
    pub fn poet_rankings(&self, limit: usize) -> Vec<PoetRanking<'_>> {
        let mut tally = Tally::new();
        for poem in self.poems() {
            tally.add(&poem.author_id);
        }

        let ranked = tally.into_ranked();
        let max = ranked.first().map(|(_, count)| *count).unwrap_or(0);

        ranked
            .into_iter()
            .take(limit)
            .filter_map(|(id, count)| {
                let poet = self.poet(&id)?;
                Some(PoetRanking {
                    poet,
                    poem_count: count,
                    share: count as f64 / max as f64,
                })
            })
            .collect()
    }
}

fn average_year(poems: &[&Poem]) -> Option<i64> {
    if poems.is_empty() {
        return None;
    }
    let sum: i64 = poems.iter().map(|p| p.year_or_zero()).sum();
    let mean = sum as f64 / poems.len() as f64;
    // half rounds up, -0.5 rounds to 0
    Some((mean + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{poem, poet, tagged, with_mood};

    #[test]
    fn test_tally_order() {
        let mut tally = Tally::new();
        for key in ["b", "a", "b", "c", "a"] {
            tally.add(&key);
        }
        assert_eq!(tally.get(&"b"), 2);
        assert_eq!(tally.get(&"z"), 0);
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.into_ranked(), vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_author_stats_missing_year_counts_as_zero() {
        let lib = Library::new(
            vec![
                with_mood(tagged(poem(1, "A", "fet", Some(1820)), &["ночь", "сад"]), "романтичное"),
                tagged(poem(2, "B", "fet", None), &["ночь"]),
                poem(3, "C", "tyutchev", Some(1836)),
            ],
            vec![poet("fet", "Афанасий Фет")],
            vec![],
        );

        let stats = lib.author_stats(&PoetId::new("fet"));
        assert_eq!(stats.poet.map(|p| p.name.as_str()), Some("Афанасий Фет"));
        assert_eq!(stats.total_poems, 2);
        assert_eq!(stats.average_year, Some(910));
        assert_eq!(
            stats.tag_counts,
            vec![("ночь".to_string(), 2), ("сад".to_string(), 1)]
        );
        assert_eq!(stats.mood_counts, vec![("романтичное".to_string(), 1)]);
    }

    #[test]
    fn test_author_stats_unknown_author() {
        let lib = Library::new(vec![poem(1, "A", "fet", Some(1850))], vec![], vec![]);
        let stats = lib.author_stats(&PoetId::new("blok"));
        assert!(stats.poet.is_none());
        assert_eq!(stats.total_poems, 0);
        assert_eq!(stats.average_year, None);

        let stats = lib.author_stats(&PoetId::new("fet"));
        assert!(stats.poet.is_none());
        assert_eq!(stats.average_year, Some(1850));
    }

    #[test]
    fn test_average_year_rounds_half_up() {
        let lib = Library::new(
            vec![poem(1, "A", "x", Some(1820)), poem(2, "B", "x", Some(1821))],
            vec![],
            vec![],
        );
        assert_eq!(lib.author_stats(&PoetId::new("x")).average_year, Some(1821));
    }

    #[test]
    fn test_poet_rankings() {
        let lib = Library::new(
            vec![
                poem(1, "A", "ghost", None),
                poem(2, "B", "fet", None),
                poem(3, "C", "fet", None),
                poem(4, "D", "blok", None),
                poem(5, "E", "ghost", None),
                poem(6, "F", "blok", None),
                poem(7, "G", "fet", None),
            ],
            vec![poet("blok", "Александр Блок"), poet("fet", "Афанасий Фет")],
            vec![],
        );

        let rankings = lib.poet_rankings(6);
        let names: Vec<_> = rankings.iter().map(|r| r.poet.id.as_str()).collect();
        assert_eq!(names, vec!["fet", "blok"]);
        assert_eq!(rankings[0].poem_count, 3);
        assert_eq!(rankings[0].share, 1.0);
        assert!((rankings[1].share - 2.0 / 3.0).abs() < 1e-9);

        // "ghost" takes the second slot before being dropped
        let top_two = lib.poet_rankings(2);
        assert_eq!(top_two.len(), 1);
    }
}
