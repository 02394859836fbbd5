// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{CollectionKind, Movie};
use crate::events::EventBus;
use crate::integrations::tmdb::ImageResolver;
use crate::services::{CatalogController, CollectionStore, MovieDetailService};

use super::dto::{MembershipFlags, MovieCardDto};

/// Application state shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are built by `app::initialize_app` and passed here.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub event_bus: Arc<EventBus>,
    pub images: ImageResolver,
    pub catalog: Arc<CatalogController>,
    pub collections: Arc<CollectionStore>,
    pub movie_details: Arc<MovieDetailService>,
}

impl AppState {
    pub fn membership(&self, movie: &Movie) -> MembershipFlags {
        MembershipFlags {
            is_favorite: self.collections.contains(CollectionKind::Favorites, movie.id),
            in_watchlist: self.collections.contains(CollectionKind::Watchlist, movie.id),
        }
    }

    /// Card view of a movie with its current membership flags
    pub fn card(&self, movie: &Movie) -> MovieCardDto {
        MovieCardDto::from_movie(movie, &self.images, self.membership(movie))
    }

    pub fn cards<'a>(&self, movies: impl IntoIterator<Item = &'a Movie>) -> Vec<MovieCardDto> {
        movies.into_iter().map(|m| self.card(m)).collect()
    }
}
