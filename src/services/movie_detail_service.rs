// src/services/movie_detail_service.rs
//
// Detail page data: one movie with its cast, trailers and similar titles.
// Degraded sections are reported on the event bus for diagnostics.

use std::sync::Arc;

use log::debug;

use crate::domain::MovieId;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, MovieBundleDegraded};
use crate::integrations::tmdb::{fetch_movie_bundle, MovieApi, MovieBundle};

pub struct MovieDetailService {
    api: Arc<dyn MovieApi>,
    event_bus: Arc<EventBus>,
}

impl MovieDetailService {
    pub fn new(api: Arc<dyn MovieApi>, event_bus: Arc<EventBus>) -> Self {
        Self { api, event_bus }
    }

    /// Fetch the full bundle for one movie.
    ///
    /// Fails only when the movie itself cannot be fetched.
    pub async fn movie_bundle(&self, id: MovieId) -> AppResult<MovieBundle> {
        if id <= 0 {
            return Err(AppError::NotFound);
        }

        debug!("Fetching detail bundle for movie {}", id);
        let bundle = fetch_movie_bundle(self.api.as_ref(), id).await?;

        for degraded in &bundle.unavailable {
            self.event_bus.emit(MovieBundleDegraded::new(
                id,
                degraded.section.to_string(),
                degraded.reason.clone(),
            ));
        }

        Ok(bundle)
    }

    /// Parse a movie id from a route segment; anything else is "not found"
    pub fn parse_movie_id(raw: &str) -> AppResult<MovieId> {
        raw.trim()
            .parse::<MovieId>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or(AppError::NotFound)
    }
}
