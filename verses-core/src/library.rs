//! The loaded collections and their load status.

use crate::loader::{LoadError, LoadErrorKind};
use crate::models::{Fact, Poem, Poet};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use verses_types::{PoemId, PoetId, Resource};

/// Outcome of loading one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResourceStatus {
    NotAttempted,
    Loaded,
    /// The collection is empty because loading failed
    Failed { kind: LoadErrorKind, message: String },
}

impl ResourceStatus {
    pub fn failed(error: &LoadError) -> Self {
        ResourceStatus::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ResourceStatus::Loaded)
    }
}

/// Per-resource load status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadStatus {
    pub poems: ResourceStatus,
    pub poets: ResourceStatus,
    pub facts: ResourceStatus,
}

impl LoadStatus {
    pub fn not_attempted() -> Self {
        Self {
            poems: ResourceStatus::NotAttempted,
            poets: ResourceStatus::NotAttempted,
            facts: ResourceStatus::NotAttempted,
        }
    }

    pub fn all_loaded() -> Self {
        Self {
            poems: ResourceStatus::Loaded,
            poets: ResourceStatus::Loaded,
            facts: ResourceStatus::Loaded,
        }
    }

    pub fn get(&self, resource: Resource) -> &ResourceStatus {
        match resource {
            Resource::Poems => &self.poems,
            Resource::Poets => &self.poets,
            Resource::Facts => &self.facts,
        }
    }
}

/// Immutable, in-memory poems, poets and facts.
///
/// Built once by the [`Loader`](crate::Loader) (or directly from
/// collections) and shared by reference afterwards. Lookups that miss
/// return `None` or an empty vector.
#[derive(Debug, Clone)]
pub struct Library {
    poems: Vec<Poem>,
    poets: Vec<Poet>,
    facts: Vec<Fact>,
    status: LoadStatus,
}

impl Library {
    /// Library over already loaded collections
    pub fn new(poems: Vec<Poem>, poets: Vec<Poet>, facts: Vec<Fact>) -> Self {
        Self::with_status(poems, poets, facts, LoadStatus::all_loaded())
    }

    /// Library before anything was loaded
    pub fn empty() -> Self {
        Self::with_status(Vec::new(), Vec::new(), Vec::new(), LoadStatus::not_attempted())
    }

    pub(crate) fn with_status(
        poems: Vec<Poem>,
        poets: Vec<Poet>,
        facts: Vec<Fact>,
        status: LoadStatus,
    ) -> Self {
        Self {
            poems,
            poets,
            facts,
            status,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// True only when all three resources loaded
    pub fn is_loaded(&self) -> bool {
        self.status.poems.is_loaded()
            && self.status.poets.is_loaded()
            && self.status.facts.is_loaded()
    }

    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    pub fn poets(&self) -> &[Poet] {
        &self.poets
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Find a poem by id
    pub fn poem(&self, id: PoemId) -> Option<&Poem> {
        self.poems.iter().find(|p| p.id == id)
    }

    /// Find a poem by an id taken from a URL or form field
    pub fn poem_by_key(&self, key: &str) -> Option<&Poem> {
        PoemId::parse_lenient(key).and_then(|id| self.poem(id))
    }

    /// All poems by an author, in document order
    pub fn poems_by_author(&self, author_id: &PoetId) -> Vec<&Poem> {
        self.poems
            .iter()
            .filter(|p| &p.author_id == author_id)
            .collect()
    }

    pub fn poet(&self, id: &PoetId) -> Option<&Poet> {
        self.poets.iter().find(|p| &p.id == id)
    }

    /// The poet who wrote a poem
    pub fn poet_for_poem(&self, poem_id: PoemId) -> Option<&Poet> {
        self.poem(poem_id).and_then(|poem| self.poet(&poem.author_id))
    }

    /// Author display name, preferring the poet record
    pub fn author_name<'a>(&'a self, poem: &'a Poem) -> &'a str {
        self.poet(&poem.author_id)
            .map(|poet| poet.name.as_str())
            .unwrap_or(&poem.author)
    }

    pub fn facts_by_category(&self, category: &str) -> Vec<&Fact> {
        self.facts
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    pub fn random_poem(&self) -> Option<&Poem> {
        self.random_poem_with_rng(&mut rand::thread_rng())
    }

    pub fn random_poem_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Poem> {
        self.poems.choose(rng)
    }

    pub fn random_fact(&self) -> Option<&Fact> {
        self.random_fact_with_rng(&mut rand::thread_rng())
    }

    pub fn random_fact_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Fact> {
        self.facts.choose(rng)
    }

    /// Up to `count` distinct facts in random order
    pub fn random_facts(&self, count: usize) -> Vec<&Fact> {
        self.random_facts_with_rng(count, &mut rand::thread_rng())
    }

    pub fn random_facts_with_rng<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Fact> {
        self.facts.choose_multiple(rng, count).collect()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::empty()
    }
}
