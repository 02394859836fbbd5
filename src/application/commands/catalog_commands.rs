// src/application/commands/catalog_commands.rs
//
// Catalog Command Handlers
//
// RULES:
// - Fetch failures are part of the returned catalog (`error`), not command errors
// - Every handler returns the catalog as it stands after the operation

use log::debug;

use crate::application::dto::CatalogDto;
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::services::FetchOutcome;

/// Show the first page of popular movies
pub async fn browse_popular(state: &AppState) -> Result<CatalogDto, String> {
    let outcome = state.catalog.start_browse().await;
    debug!("browse_popular: {:?}", outcome);
    get_catalog(state)
}

/// Show `page` (default 1) of the results for `query`; blank queries browse
pub async fn search_movies(
    query: String,
    page: Option<u32>,
    state: &AppState,
) -> Result<CatalogDto, String> {
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(ErrorResponse::validation("Page numbers start at 1".to_string()).to_json());
    }

    let outcome = state.catalog.search(&query, page).await;
    debug!("search_movies(\"{}\", {}): {:?}", query, page, outcome);
    get_catalog(state)
}

/// Append the next page of the active feed
pub async fn load_more_movies(state: &AppState) -> Result<CatalogDto, String> {
    if state.catalog.load_more().await == FetchOutcome::Skipped {
        debug!("load_more_movies: nothing to load");
    }
    get_catalog(state)
}

/// Current catalog without fetching anything
pub fn get_catalog(state: &AppState) -> Result<CatalogDto, String> {
    let snapshot = state.catalog.snapshot();
    let cards = state.cards(&snapshot.movies);
    Ok(CatalogDto::from_state(&snapshot, cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::{page_of, test_state};
    use crate::domain::{CollectionKind, Movie};
    use crate::error::AppError;
    use crate::integrations::tmdb::MockMovieApi;

    #[tokio::test]
    async fn test_browse_and_load_more() {
        let mut api = MockMovieApi::new();
        api.expect_fetch_popular()
            .returning(|page| Ok(page_of(((page as i64 - 1) * 20 + 1)..=(page as i64 * 20), page, 500)));

        let (_dir, state) = test_state(api);

        let catalog = browse_popular(&state).await.unwrap();
        assert_eq!(catalog.heading, "Popular Movies");
        assert_eq!(catalog.movies.len(), 20);
        assert!(catalog.has_more);

        let catalog = load_more_movies(&state).await.unwrap();
        assert_eq!(catalog.movies.len(), 40);
        assert_eq!(catalog.current_page, 2);
        assert_eq!(catalog.movies[0].id, 1);
        assert_eq!(catalog.movies[20].id, 21);
    }

    #[tokio::test]
    async fn test_search_heading_and_reset() {
        let mut api = MockMovieApi::new();
        api.expect_fetch_popular()
            .returning(|page| Ok(page_of(1..=20, page, 500)));
        api.expect_search_movies()
            .returning(|_, page| Ok(page_of(300..=302, page, 1)));

        let (_dir, state) = test_state(api);

        let catalog = search_movies("ali".to_string(), None, &state).await.unwrap();
        assert_eq!(catalog.heading, "Search Results for \"ali\"");
        assert_eq!(catalog.movies.len(), 3);
        assert!(!catalog.has_more);

        let catalog = search_movies("".to_string(), Some(1), &state).await.unwrap();
        assert_eq!(catalog.heading, "Popular Movies");
        assert_eq!(catalog.movies.len(), 20);
    }

    #[tokio::test]
    async fn test_page_zero_is_validation_error() {
        let (_dir, state) = test_state(MockMovieApi::new());

        let err = search_movies("ali".to_string(), Some(0), &state).await.unwrap_err();
        assert!(err.contains("\"error_type\":\"validation\""));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_in_catalog() {
        let mut api = MockMovieApi::new();
        api.expect_fetch_popular()
            .returning(|_| Err(AppError::Network("offline".to_string())));

        let (_dir, state) = test_state(api);

        let catalog = browse_popular(&state).await.unwrap();
        assert!(catalog.movies.is_empty());
        assert!(!catalog.loading);
        assert!(catalog.error.unwrap().contains("Could not reach"));
        assert!(catalog.empty_message.is_none());
    }

    #[tokio::test]
    async fn test_cards_carry_membership() {
        let mut api = MockMovieApi::new();
        api.expect_fetch_popular()
            .returning(|page| Ok(page_of(1..=3, page, 1)));

        let (_dir, state) = test_state(api);
        state
            .collections
            .toggle(CollectionKind::Favorites, Movie::new(2, "Movie 2"));

        let catalog = browse_popular(&state).await.unwrap();
        let flags: Vec<_> = catalog.movies.iter().map(|c| c.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
