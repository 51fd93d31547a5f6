//! Locally persisted favorite poems and poets.

use crate::config::Config;
use crate::events::EventBus;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use verses_types::{LibraryEvent, PoemId, PoetId};

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to write favorites: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Single-slot storage for the serialized favorites document
pub trait Storage {
    /// `Ok(None)` when nothing was stored yet
    fn read(&self) -> io::Result<Option<String>>;

    fn write(&self, contents: &str) -> io::Result<()>;
}

/// Favorites kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)
    }
}

/// Favorites kept in memory only
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "storage lock poisoned"))?;
        Ok(slot.clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "storage lock poisoned"))?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}

impl FavoritesStore<FileStorage> {
    /// Store backed by the configured favorites file
    pub fn from_config(config: &Config, events: EventBus) -> Self {
        Self::open(FileStorage::new(config.favorites_path()), events)
    }
}

/// Persisted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    pub poems: Vec<PoemId>,
    pub poets: Vec<PoetId>,
}

/// Favorite poems and poets, saved after every change.
///
/// Every save publishes [`LibraryEvent::FavoritesChanged`].
pub struct FavoritesStore<S> {
    storage: S,
    favorites: Favorites,
    events: EventBus,
}

impl<S: Storage> FavoritesStore<S> {
    /// Open the store. Unreadable or corrupt contents start empty.
    pub fn open(storage: S, events: EventBus) -> Self {
        let favorites = match storage.read() {
            Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::error!("Discarding corrupt favorites: {}", e);
                Favorites::default()
            }),
            Ok(None) => Favorites::default(),
            Err(e) => {
                tracing::error!("Failed to read favorites: {}", e);
                Favorites::default()
            }
        };

        Self {
            storage,
            favorites,
            events,
        }
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Returns `false` when the poem was already a favorite
    pub fn add_poem(&mut self, id: PoemId) -> Result<bool, FavoritesError> {
        if self.is_poem_favorite(id) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.poems.push(id);
        self.commit(next)?;
        Ok(true)
    }

    /// Returns `false` when the poem was not a favorite
    pub fn remove_poem(&mut self, id: PoemId) -> Result<bool, FavoritesError> {
        if !self.is_poem_favorite(id) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.poems.retain(|p| *p != id);
        self.commit(next)?;
        Ok(true)
    }

    /// Flip the poem's state; returns whether it is now a favorite
    pub fn toggle_poem(&mut self, id: PoemId) -> Result<bool, FavoritesError> {
        if self.is_poem_favorite(id) {
            self.remove_poem(id)?;
            Ok(false)
        } else {
            self.add_poem(id)?;
            Ok(true)
        }
    }

    pub fn is_poem_favorite(&self, id: PoemId) -> bool {
        self.favorites.poems.contains(&id)
    }

    pub fn favorite_poems(&self) -> &[PoemId] {
        &self.favorites.poems
    }

    pub fn poems_count(&self) -> usize {
        self.favorites.poems.len()
    }

    pub fn add_poet(&mut self, id: &PoetId) -> Result<bool, FavoritesError> {
        if self.is_poet_favorite(id) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.poets.push(id.clone());
        self.commit(next)?;
        Ok(true)
    }

    pub fn remove_poet(&mut self, id: &PoetId) -> Result<bool, FavoritesError> {
        if !self.is_poet_favorite(id) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.poets.retain(|p| p != id);
        self.commit(next)?;
        Ok(true)
    }

    pub fn toggle_poet(&mut self, id: &PoetId) -> Result<bool, FavoritesError> {
        if self.is_poet_favorite(id) {
            self.remove_poet(id)?;
            Ok(false)
        } else {
            self.add_poet(id)?;
            Ok(true)
        }
    }

    pub fn is_poet_favorite(&self, id: &PoetId) -> bool {
        self.favorites.poets.contains(id)
    }

    pub fn favorite_poets(&self) -> &[PoetId] {
        &self.favorites.poets
    }

    pub fn poets_count(&self) -> usize {
        self.favorites.poets.len()
    }

    pub fn total_count(&self) -> usize {
        self.poems_count() + self.poets_count()
    }

    pub fn clear_all(&mut self) -> Result<(), FavoritesError> {
        self.commit(Favorites::default())
    }

    pub fn clear_poems(&mut self) -> Result<(), FavoritesError> {
        let next = Favorites {
            poems: Vec::new(),
            poets: self.favorites.poets.clone(),
        };
        self.commit(next)
    }

    pub fn clear_poets(&mut self) -> Result<(), FavoritesError> {
        let next = Favorites {
            poems: self.favorites.poems.clone(),
            poets: Vec::new(),
        };
        self.commit(next)
    }

    /// Pretty-printed JSON document
    pub fn export_json(&self) -> Result<String, FavoritesError> {
        Ok(serde_json::to_string_pretty(&self.favorites)?)
    }

    /// Replace the favorites with an exported document.
    ///
    /// Returns `Ok(false)` without touching the store when the input is not
    /// JSON or lacks either the `poems` or the `poets` key.
    pub fn import_json(&mut self, json: &str) -> Result<bool, FavoritesError> {
        let favorites: Favorites = match serde_json::from_str(json) {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::error!("Rejected favorites import: {}", e);
                return Ok(false);
            }
        };
        self.commit(favorites)?;
        Ok(true)
    }

    /// Persist `next` and adopt it. The in-memory state is left untouched
    /// when the write fails.
    fn commit(&mut self, next: Favorites) -> Result<(), FavoritesError> {
        let contents = serde_json::to_string(&next)?;
        self.storage.write(&contents)?;
        self.favorites = next;
        self.events.publish(LibraryEvent::FavoritesChanged {
            poems: self.poems_count(),
            poets: self.poets_count(),
        });
        Ok(())
    }
}
