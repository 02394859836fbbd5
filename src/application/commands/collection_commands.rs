// src/application/commands/collection_commands.rs
//
// Favorites / Watchlist Command Handlers

use crate::application::dto::{nav_label, CollectionDto, ToggleResultDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{validate_movie, CollectionKind, Movie};
use crate::error::AppError;

/// Add the movie to favorites, or remove it if already there
pub async fn toggle_favorite(movie: Movie, state: &AppState) -> Result<ToggleResultDto, String> {
    toggle(CollectionKind::Favorites, movie, state)
}

/// Add the movie to the watchlist, or remove it if already there
pub async fn toggle_watchlist(movie: Movie, state: &AppState) -> Result<ToggleResultDto, String> {
    toggle(CollectionKind::Watchlist, movie, state)
}

pub async fn list_favorites(state: &AppState) -> Result<CollectionDto, String> {
    Ok(list(CollectionKind::Favorites, state))
}

pub async fn list_watchlist(state: &AppState) -> Result<CollectionDto, String> {
    Ok(list(CollectionKind::Watchlist, state))
}

fn toggle(kind: CollectionKind, movie: Movie, state: &AppState) -> Result<ToggleResultDto, String> {
    validate_movie(&movie).map_err(AppError::Domain).to_error_response()?;

    let movie_id = movie.id;
    let membership = state.collections.toggle(kind, movie);
    let count = state.collections.len(kind);

    Ok(ToggleResultDto {
        movie_id,
        kind,
        membership,
        count,
        nav_label: nav_label(kind, count),
    })
}

fn list(kind: CollectionKind, state: &AppState) -> CollectionDto {
    let movies = state.collections.list(kind);
    CollectionDto::new(kind, state.cards(&movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::test_state;
    use crate::domain::Membership;
    use crate::integrations::tmdb::MockMovieApi;

    fn fight_club() -> Movie {
        let mut movie = Movie::new(550, "Fight Club");
        movie.overview = Some("An insomniac office worker and a soap maker form a fight club.".to_string());
        movie.poster_path = Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string());
        movie.vote_average = 8.4;
        movie
    }

    #[tokio::test]
    async fn test_favorite_round_trip() {
        let (_dir, state) = test_state(MockMovieApi::new());

        let result = toggle_favorite(fight_club(), &state).await.unwrap();
        assert_eq!(result.membership, Membership::Added);
        assert_eq!(result.nav_label, "Favorites (1)");

        let favorites = list_favorites(&state).await.unwrap();
        assert_eq!(favorites.count, 1);
        assert_eq!(favorites.movies[0].title, "Fight Club");
        assert!(favorites.movies[0].overview.starts_with("An insomniac"));
        assert!(favorites.movies[0].is_favorite);
        assert!(favorites.empty_message.is_none());

        let result = toggle_favorite(fight_club(), &state).await.unwrap();
        assert_eq!(result.membership, Membership::Removed);
        assert_eq!(result.nav_label, "Favorites");

        let favorites = list_favorites(&state).await.unwrap();
        assert!(favorites.movies.is_empty());
        assert_eq!(
            favorites.empty_message.as_deref(),
            Some("No favorites yet. Start adding movies you love!")
        );
    }

    #[tokio::test]
    async fn test_watchlist_is_independent() {
        let (_dir, state) = test_state(MockMovieApi::new());

        toggle_watchlist(fight_club(), &state).await.unwrap();

        let watchlist = list_watchlist(&state).await.unwrap();
        assert_eq!(watchlist.count, 1);
        assert!(watchlist.movies[0].in_watchlist);
        assert!(!watchlist.movies[0].is_favorite);
        assert_eq!(list_favorites(&state).await.unwrap().count, 0);
    }

    #[tokio::test]
    async fn test_invalid_movie_is_rejected() {
        let (_dir, state) = test_state(MockMovieApi::new());

        let err = toggle_favorite(Movie::new(-1, "Broken"), &state).await.unwrap_err();
        assert!(err.contains("domain_error"));
        assert_eq!(list_favorites(&state).await.unwrap().count, 0);
    }
}
