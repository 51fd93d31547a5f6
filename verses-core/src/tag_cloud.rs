//! Frequency-ranked, size-scaled tag cloud.

use crate::config::TagCloudConfig;
use crate::library::Library;
use crate::models::Poem;
use crate::stats::Tally;

#[derive(Debug, Clone, PartialEq)]
pub struct TagCloudEntry {
    pub tag: String,
    pub count: usize,
    /// Display size between `min_size` and `max_size`
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagCloud {
    pub entries: Vec<TagCloudEntry>,
}

impl TagCloud {
    /// Count tags across `poems`, keep the `limit` most frequent (ties in
    /// first-seen order) and scale each linearly by `count / max_count`.
    pub fn build<'a>(poems: impl IntoIterator<Item = &'a Poem>, config: &TagCloudConfig) -> Self {
        let mut tally = Tally::new();
        for poem in poems {
            for tag in &poem.tags {
                tally.add(tag);
            }
        }

        let mut ranked = tally.into_ranked();
        ranked.truncate(config.limit);

        let max = ranked.first().map(|(_, count)| *count).unwrap_or(0);
        let span = config.max_size - config.min_size;

        let entries = ranked
            .into_iter()
            .map(|(tag, count)| TagCloudEntry {
                tag,
                count,
                size: config.min_size + (count as f64 / max as f64) * span,
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }
}

impl Library {
    pub fn tag_cloud(&self, config: &TagCloudConfig) -> TagCloud {
        TagCloud::build(self.poems(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{poem, tagged};

    #[test]
    fn test_ties_keep_first_seen_order() {
        let poems = vec![
            tagged(poem(1, "A", "a", None), &["love"]),
            tagged(poem(2, "B", "a", None), &["love", "night"]),
            tagged(poem(3, "C", "a", None), &["night"]),
        ];

        let cloud = TagCloud::build(&poems, &TagCloudConfig::default());
        assert_eq!(cloud.tags().collect::<Vec<_>>(), vec!["love", "night"]);
        assert_eq!(cloud.entries[0].count, 2);
        assert_eq!(cloud.entries[1].count, 2);
        assert!((cloud.entries[0].size - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_limit_and_scaling() {
        let poems = vec![
            tagged(poem(1, "A", "a", None), &["rare", "common"]),
            tagged(poem(2, "B", "a", None), &["common", "medium"]),
            tagged(poem(3, "C", "a", None), &["common", "medium"]),
            tagged(poem(4, "D", "a", None), &["common"]),
        ];
        let config = TagCloudConfig {
            limit: 2,
            min_size: 1.0,
            max_size: 3.0,
        };

        let cloud = TagCloud::build(&poems, &config);
        assert_eq!(cloud.tags().collect::<Vec<_>>(), vec!["common", "medium"]);
        assert!((cloud.entries[0].size - 3.0).abs() < 1e-9);
        assert!((cloud.entries[1].size - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_library() {
        let lib = Library::empty();
        assert!(lib.tag_cloud(&TagCloudConfig::default()).is_empty());
    }
}
