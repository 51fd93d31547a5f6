//! Loading the three static documents into a [`Library`].

use crate::config::Config;
use crate::events::EventBus;
use crate::library::{Library, LoadStatus, ResourceStatus};
use crate::models::{FactsDocument, PoemsDocument, PoetsDocument};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use verses_types::{LibraryEvent, PoetId, Resource};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {resource}: {source}")]
    Network {
        resource: Resource,
        #[source]
        source: io::Error,
    },

    /// The document is not valid UTF-8
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {resource}: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse category of a [`LoadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadErrorKind {
    Network,
    Parse,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Network { .. } => LoadErrorKind::Network,
            LoadError::Decode { .. } | LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            LoadError::Network { resource, .. }
            | LoadError::Decode { resource, .. }
            | LoadError::Parse { resource, .. } => *resource,
        }
    }
}

/// Where the raw documents come from
pub trait DocumentSource {
    /// Fetch the raw JSON text of a document
    fn fetch(&self, resource: Resource) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// Documents read from a data directory
#[derive(Debug, Clone)]
pub struct FsSource {
    paths: HashMap<Resource, PathBuf>,
}

impl FsSource {
    pub fn from_config(config: &Config) -> Self {
        let paths = Resource::ALL
            .iter()
            .map(|&r| (r, config.resource_path(r)))
            .collect();
        Self { paths }
    }

    /// Default file names (`poems.json` etc.) inside `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let paths = Resource::ALL
            .iter()
            .map(|&r| (r, dir.join(format!("{}.json", r.key()))))
            .collect();
        Self { paths }
    }

    pub fn path(&self, resource: Resource) -> Option<&PathBuf> {
        self.paths.get(&resource)
    }
}

impl DocumentSource for FsSource {
    async fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        let path = self.paths.get(&resource).ok_or_else(|| LoadError::Network {
            resource,
            source: io::Error::new(io::ErrorKind::NotFound, "no path configured"),
        })?;

        tracing::debug!("Reading {} from {:?}", resource, path);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::InvalidData => LoadError::Decode { resource, source },
                _ => LoadError::Network { resource, source },
            })
    }
}

/// Documents held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<Resource, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: Resource, json: impl Into<String>) -> Self {
        self.documents.insert(resource, json.into());
        self
    }
}

impl DocumentSource for StaticSource {
    async fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        self.documents
            .get(&resource)
            .cloned()
            .ok_or_else(|| LoadError::Network {
                resource,
                source: io::Error::new(io::ErrorKind::NotFound, "document not available"),
            })
    }
}

/// Loads poems, poets and facts concurrently.
///
/// Each resource succeeds or fails on its own: a failed resource is
/// logged and left empty, the others are still used. Once all three
/// settle a [`LibraryEvent::DataReady`] is published.
pub struct Loader<S> {
    source: S,
    base_path: String,
    events: EventBus,
}

impl Loader<FsSource> {
    pub fn from_config(config: &Config, events: EventBus) -> Self {
        Loader::new(FsSource::from_config(config), events)
            .with_base_path(config.normalized_base_path())
    }
}

impl<S: DocumentSource> Loader<S> {
    pub fn new(source: S, events: EventBus) -> Self {
        Self {
            source,
            base_path: String::from("./"),
            events,
        }
    }

    /// Prefix applied to root-relative poet image paths
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Fetch and parse all documents
    pub async fn load(&self) -> Library {
        let (poems, poets, facts) = tokio::join!(
            self.fetch_document::<PoemsDocument>(Resource::Poems),
            self.fetch_document::<PoetsDocument>(Resource::Poets),
            self.fetch_document::<FactsDocument>(Resource::Facts),
        );

        let (poems, poems_status) = settle(poems.map(|d| d.poems));
        let (mut poets, poets_status) = settle(poets.map(|d| d.poets));
        let (facts, facts_status) = settle(facts.map(|d| d.facts));

        for poet in &mut poets {
            poet.rebase_image(&self.base_path);
        }

        if poems_status.is_loaded() && poets_status.is_loaded() {
            let known: HashSet<&PoetId> = poets.iter().map(|p| &p.id).collect();
            let dangling = poems
                .iter()
                .filter(|p| !known.contains(&p.author_id))
                .count();
            if dangling > 0 {
                tracing::warn!("{} poems reference an unknown poet", dangling);
            }
        }

        tracing::info!(
            poems = poems.len(),
            poets = poets.len(),
            facts = facts.len(),
            "Library data loaded"
        );

        self.events.publish(LibraryEvent::DataReady {
            poems: poems.len(),
            poets: poets.len(),
            facts: facts.len(),
        });

        let status = LoadStatus {
            poems: poems_status,
            poets: poets_status,
            facts: facts_status,
        };
        Library::with_status(poems, poets, facts, status)
    }

    async fn fetch_document<D: DeserializeOwned>(&self, resource: Resource) -> Result<D, LoadError> {
        let raw = self.source.fetch(resource).await?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse { resource, source })
    }
}

fn settle<T>(result: Result<Vec<T>, LoadError>) -> (Vec<T>, ResourceStatus) {
    match result {
        Ok(items) => (items, ResourceStatus::Loaded),
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "{}", e);
            (Vec::new(), ResourceStatus::failed(&e))
        }
    }
}
