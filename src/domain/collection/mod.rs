//! Critical Collection Invariants:
//!
//! 1. A collection never holds two movies with the same id
//! 2. Insertion order is display order
//! 3. Favorites and Watchlist are independent of each other
//! 4. Adding a present movie or removing an absent one changes nothing
//! 5. Toggling twice restores the original membership

pub mod entity;

pub use entity::{CollectionKind, Membership, MovieCollection};

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult};

/// Validates Collection invariants
pub fn validate_collection(collection: &MovieCollection) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for movie in collection.iter() {
        if !seen.insert(movie.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Movie {} appears twice in collection",
                movie.id
            )));
        }
    }
    Ok(())
}
