// src/services/collection_store.rs
//
// Favorites and watchlist
//
// ARCHITECTURE:
// - In-memory collections are the source of truth while the app runs
// - Every mutation is written through to durable storage before the
//   lock is released, so writes land in dispatch order
// - Storage problems never reach the caller: reads fall back to an empty
//   collection, failed writes are logged and the in-memory state is kept

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, error, warn};

use crate::domain::{
    validate_collection, validate_movie, CollectionKind, Membership, Movie, MovieCollection,
    MovieId,
};
use crate::error::{AppError, AppResult};
use crate::events::{CollectionChanged, EventBus};
use crate::repositories::CollectionRepository;

pub struct CollectionStore {
    repo: Arc<dyn CollectionRepository>,
    event_bus: Arc<EventBus>,
    collections: RwLock<HashMap<CollectionKind, MovieCollection>>,
}

impl CollectionStore {
    /// Create the store and rehydrate both collections from storage
    pub fn new(repo: Arc<dyn CollectionRepository>, event_bus: Arc<EventBus>) -> Self {
        let store = Self {
            repo,
            event_bus,
            collections: RwLock::new(HashMap::new()),
        };

        {
            let mut collections = store.collections.write().unwrap_or_else(|e| e.into_inner());
            for kind in CollectionKind::ALL {
                collections.insert(kind, store.load(kind));
            }
        }

        store
    }

    /// Read a collection from durable storage.
    ///
    /// Absent, unreadable or malformed data yields an empty collection.
    /// Stored records that are not valid movies are dropped.
    pub fn load(&self, kind: CollectionKind) -> MovieCollection {
        let json = match self.repo.load(kind) {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!("No saved {} yet", kind);
                return MovieCollection::new();
            }
            Err(e) => {
                warn!("Could not read saved {}, starting empty: {}", kind, e);
                return MovieCollection::new();
            }
        };

        let movies: Vec<Movie> = match serde_json::from_str(&json) {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Saved {} is not a movie list, starting empty: {}", kind, e);
                return MovieCollection::new();
            }
        };

        MovieCollection::from_movies(movies.into_iter().filter(|movie| {
            match validate_movie(movie) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Dropping saved {} entry {}: {}", kind, movie.id, e);
                    false
                }
            }
        }))
    }

    pub fn contains(&self, kind: CollectionKind, id: MovieId) -> bool {
        self.read(kind, |c| c.contains(id))
    }

    /// Movies in insertion order
    pub fn list(&self, kind: CollectionKind) -> Vec<Movie> {
        self.read(kind, MovieCollection::to_vec)
    }

    pub fn len(&self, kind: CollectionKind) -> usize {
        self.read(kind, MovieCollection::len)
    }

    pub fn is_empty(&self, kind: CollectionKind) -> bool {
        self.len(kind) == 0
    }

    /// Add a movie; returns false when it was already present or is invalid
    pub fn add(&self, kind: CollectionKind, movie: Movie) -> bool {
        if let Err(e) = validate_movie(&movie) {
            warn!("Refusing to add movie {} to {}: {}", movie.id, kind, e);
            return false;
        }

        let id = movie.id;
        let size = {
            let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
            let collection = collections.entry(kind).or_default();
            if !collection.add(movie) {
                return false;
            }
            self.write_through(kind, collection);
            collection.len()
        };

        self.event_bus
            .emit(CollectionChanged::new(kind, id, Membership::Added, size));
        true
    }

    /// Remove a movie; returns false when it was not present
    pub fn remove(&self, kind: CollectionKind, id: MovieId) -> bool {
        let size = {
            let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
            let collection = collections.entry(kind).or_default();
            if collection.remove(id).is_none() {
                return false;
            }
            self.write_through(kind, collection);
            collection.len()
        };

        self.event_bus
            .emit(CollectionChanged::new(kind, id, Membership::Removed, size));
        true
    }

    /// Remove the movie if present, add it otherwise.
    ///
    /// The membership check and the mutation happen under one write guard.
    pub fn toggle(&self, kind: CollectionKind, movie: Movie) -> Membership {
        let id = movie.id;

        let (change, size) = {
            let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
            let collection = collections.entry(kind).or_default();

            if !collection.contains(id) {
                if let Err(e) = validate_movie(&movie) {
                    warn!("Refusing to add movie {} to {}: {}", id, kind, e);
                    return Membership::Removed;
                }
            }

            let change = collection.toggle(movie);
            self.write_through(kind, collection);
            (change, collection.len())
        };

        self.event_bus
            .emit(CollectionChanged::new(kind, id, change, size));
        change
    }

    /// Write the current in-memory collection to storage
    pub fn persist(&self, kind: CollectionKind) {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        if let Some(collection) = collections.get(&kind) {
            self.write_through(kind, collection);
        }
    }

    fn read<T>(&self, kind: CollectionKind, f: impl FnOnce(&MovieCollection) -> T) -> T {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        match collections.get(&kind) {
            Some(collection) => f(collection),
            None => f(&MovieCollection::new()),
        }
    }

    fn write_through(&self, kind: CollectionKind, collection: &MovieCollection) {
        if let Err(e) = self.save(kind, collection) {
            error!("Failed to persist {} ({} movies): {}", kind, collection.len(), e);
        }
    }

    fn save(&self, kind: CollectionKind, collection: &MovieCollection) -> AppResult<()> {
        validate_collection(collection).map_err(AppError::Domain)?;
        let json = serde_json::to_string(collection)?;
        self.repo.save(kind, &json)
    }
}
