use serde::{Deserialize, Serialize};

use crate::domain::movie::{Movie, MovieId};

/// Which user list a collection represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Favorites,
    Watchlist,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Favorites, CollectionKind::Watchlist];

    /// Key of the durable storage entry holding this collection
    pub fn storage_key(&self) -> &'static str {
        match self {
            CollectionKind::Favorites => "favorites",
            CollectionKind::Watchlist => "watchlist",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionKind::Favorites => write!(f, "Favorites"),
            CollectionKind::Watchlist => write!(f, "Watchlist"),
        }
    }
}

/// Result of a toggle: where the movie ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    Added,
    Removed,
}

/// Ordered, duplicate-free set of movies keyed by id.
///
/// Serialized as a plain JSON array of movies, which is also the stored format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Movie>", into = "Vec<Movie>")]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence, keeping the first occurrence of each id
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let mut collection = Self::new();
        for movie in movies {
            collection.add(movie);
        }
        collection
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    /// Append unless already present. Returns whether the collection changed.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.contains(movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Remove by id. Returns the removed movie, if any.
    pub fn remove(&mut self, id: MovieId) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(index))
    }

    pub fn toggle(&mut self, movie: Movie) -> Membership {
        if self.remove(movie.id).is_some() {
            Membership::Removed
        } else {
            self.movies.push(movie);
            Membership::Added
        }
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Movie> {
        self.movies.clone()
    }
}

impl From<Vec<Movie>> for MovieCollection {
    fn from(movies: Vec<Movie>) -> Self {
        Self::from_movies(movies)
    }
}

impl From<MovieCollection> for Vec<Movie> {
    fn from(collection: MovieCollection) -> Self {
        collection.movies
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::validate_collection;

    fn movie(id: MovieId, title: &str) -> Movie {
        let mut movie = Movie::new(id, title);
        movie.overview = Some(format!("Overview of {}", title));
        movie.vote_average = 7.5;
        movie
    }

    fn sample() -> MovieCollection {
        MovieCollection::from_movies(vec![movie(1, "Alien"), movie(2, "Aliens")])
    }

    #[test]
    fn test_toggle_twice_restores_collection() {
        let original = sample();

        // Absent movie: added, then removed
        let mut c = original.clone();
        assert_eq!(c.toggle(movie(3, "Alien 3")), Membership::Added);
        assert_eq!(c.toggle(movie(3, "Alien 3")), Membership::Removed);
        assert_eq!(c, original);

        // Present (last) movie: removed, then added back at the end
        let mut c = original.clone();
        assert_eq!(c.toggle(movie(2, "Aliens")), Membership::Removed);
        assert!(!c.contains(2));
        assert_eq!(c.toggle(movie(2, "Aliens")), Membership::Added);
        assert_eq!(c, original);
    }

    #[test]
    fn test_add_then_remove() {
        let mut c = sample();
        let m = movie(3, "Alien 3");

        assert!(c.add(m.clone()));
        assert!(c.contains(3));

        assert_eq!(c.remove(3), Some(m));
        assert!(!c.contains(3));
        assert_eq!(c, sample());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = sample();
        once.add(movie(3, "Alien 3"));

        let mut twice = once.clone();
        assert!(!twice.add(movie(3, "Alien 3")));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut c = sample();
        assert_eq!(c.remove(99), None);
        assert_eq!(c, sample());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut c = MovieCollection::new();
        c.add(movie(30, "C"));
        c.add(movie(10, "A"));
        c.add(movie(20, "B"));
        c.remove(10);
        c.add(movie(10, "A"));

        let ids: Vec<_> = c.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![30, 20, 10]);
    }

    #[test]
    fn test_duplicates_collapse_on_build() {
        let c = MovieCollection::from_movies(vec![
            movie(1, "First"),
            movie(1, "Second copy"),
            movie(2, "Other"),
        ]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1).map(|m| m.title.as_str()), Some("First"));
        assert!(validate_collection(&c).is_ok());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));

        let back: MovieCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(CollectionKind::Favorites.storage_key(), "favorites");
        assert_eq!(CollectionKind::Watchlist.storage_key(), "watchlist");
    }
}
