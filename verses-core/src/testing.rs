//! Builders for unit-test fixtures.

use crate::models::{Fact, Poem, Poet};
use verses_types::{PoemId, PoetId};

/// A poem with empty text, no tags and no mood
pub fn poem(id: i64, title: &str, author_id: &str, year: Option<i32>) -> Poem {
    Poem {
        id: PoemId(id),
        title: title.to_string(),
        author: author_id.to_string(),
        author_id: PoetId::new(author_id),
        year,
        text: String::new(),
        tags: Vec::new(),
        mood: None,
    }
}

pub fn tagged(mut poem: Poem, tags: &[&str]) -> Poem {
    poem.tags = tags.iter().map(|t| t.to_string()).collect();
    poem
}

pub fn with_mood(mut poem: Poem, mood: &str) -> Poem {
    poem.mood = Some(mood.to_string());
    poem
}

pub fn poet(id: &str, name: &str) -> Poet {
    Poet {
        id: PoetId::new(id),
        name: name.to_string(),
        period: None,
        style: None,
        image: format!("/images/poets/{}.jpg", id),
    }
}

pub fn fact(category: &str, text: &str) -> Fact {
    Fact {
        title: None,
        text: text.to_string(),
        category: category.to_string(),
    }
}
