//! # verses-core
//!
//! Core library for the verses poetry collection.
//!
//! This crate loads the poems, poets and facts documents into an immutable
//! [`Library`] and answers the queries a poetry site needs: lookup, search,
//! tag/mood/era filters, sorting, author statistics, the tag cloud and a
//! deterministic poem of the day. Favorites live in a separate, persisted
//! [`FavoritesStore`].

pub mod collate;
pub mod config;
pub mod events;
pub mod favorites;
pub mod library;
pub mod loader;
pub mod models;
pub mod query;
pub mod selector;
pub mod stats;
pub mod tag_cloud;
pub mod vocab;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use events::EventBus;
pub use favorites::{Favorites, FavoritesError, FavoritesStore, FileStorage, MemoryStorage, Storage};
pub use library::{Library, LoadStatus, ResourceStatus};
pub use loader::{DocumentSource, FsSource, LoadError, LoadErrorKind, Loader, StaticSource};
pub use models::{Fact, Poem, Poet};
pub use query::{sort_poems, SortKey};
pub use selector::{date_hash, date_key, poem_of_the_day, SelectError};
pub use stats::{AuthorStats, PoetRanking};
pub use tag_cloud::{TagCloud, TagCloudEntry};
pub use verses_types::{LibraryEvent, PoemId, PoetId, Resource};
