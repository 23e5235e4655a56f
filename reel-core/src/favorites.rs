//! Favorites persistence
//!
//! The favorites list is an ordered, id-unique sequence of movie
//! summaries. The persistent store is the source of truth; the in-memory
//! copy is written back after every mutation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::tmdb::MovieSummary;

/// Store key under which the favorites list is persisted.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistent key-value store for small app state.
///
/// Byte-oriented so the store stays format-agnostic; [`Favorites`] owns
/// the JSON encoding. Injected into the controller rather than accessed
/// ambiently, so tests swap in [`MemoryStore`].
pub trait FavoritesStore: Send + Sync {
    /// Read the stored value for `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, FavoritesError>;
    /// Replace the stored value for `key`.
    fn save(&self, key: &str, data: &[u8]) -> Result<(), FavoritesError>;
}

/// File-backed store: one `<key>.json` file per key under the app data
/// directory (created on first save).
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, FavoritesError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<(), FavoritesError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), data)?;
        Ok(())
    }
}

/// In-memory store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, FavoritesError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<(), FavoritesError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

/// Ordered, id-unique collection of favorite movies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    movies: Vec<MovieSummary>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored favorites list. Absent or malformed data yields the
    /// empty set; the user never sees a startup error for this.
    pub fn from_stored(bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            return Self::default();
        };
        match serde_json::from_slice(bytes) {
            Ok(movies) => Self { movies },
            Err(e) => {
                warn!("Ignoring malformed favorites data: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FavoritesError> {
        Ok(serde_json::to_vec(&self.movies)?)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    /// Append the movie, or remove it if its id is already present.
    /// Returns true when the movie is a favorite afterwards.
    pub fn toggle(&mut self, movie: MovieSummary) -> bool {
        if let Some(pos) = self.movies.iter().position(|m| m.id == movie.id) {
            self.movies.remove(pos);
            false
        } else {
            self.movies.push(movie);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieSummary> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            overview: String::new(),
            vote_average: 0.0,
        }
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut favorites = Favorites::new();
        let before = favorites.clone();

        assert!(favorites.toggle(movie(5, "Heat")));
        assert!(favorites.contains(5));
        assert!(!favorites.toggle(movie(5, "Heat")));
        assert_eq!(favorites, before);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut favorites = Favorites::new();
        favorites.toggle(movie(3, "c"));
        favorites.toggle(movie(1, "a"));
        favorites.toggle(movie(2, "b"));

        let ids: Vec<u64> = favorites.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        // Removing from the middle keeps the rest in order.
        favorites.toggle(movie(1, "a"));
        let ids: Vec<u64> = favorites.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn from_stored_defaults_on_absent_or_malformed() {
        assert!(Favorites::from_stored(None).is_empty());
        assert!(Favorites::from_stored(Some(b"not json")).is_empty());
        assert!(Favorites::from_stored(Some(b"{\"wrong\": 1}")).is_empty());
    }

    #[test]
    fn stored_bytes_roundtrip() {
        let mut favorites = Favorites::new();
        favorites.toggle(movie(7, "Alien"));
        favorites.toggle(movie(9, "Stalker"));

        let bytes = favorites.to_bytes().unwrap();
        assert_eq!(Favorites::from_stored(Some(&bytes)), favorites);
    }

    #[test]
    fn file_store_roundtrip_and_absent_key() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("data"));

        assert!(store.load(FAVORITES_KEY).unwrap().is_none());

        store.save(FAVORITES_KEY, b"[1,2,3]").unwrap();
        assert_eq!(store.load(FAVORITES_KEY).unwrap().unwrap(), b"[1,2,3]");

        store.save(FAVORITES_KEY, b"[]").unwrap();
        assert_eq!(store.load(FAVORITES_KEY).unwrap().unwrap(), b"[]");
    }
}
