// src/application/commands/movie_commands.rs
//
// Movie Detail Command Handlers

use crate::application::dto::MovieDetailDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::services::MovieDetailService;

/// Full detail page for the movie whose id is given as a route segment.
///
/// Unknown or malformed ids yield a `not_found` error ("Movie not found").
pub async fn get_movie_details(
    movie_id: String,
    state: &AppState,
) -> Result<MovieDetailDto, String> {
    let id = MovieDetailService::parse_movie_id(&movie_id).to_error_response()?;

    let bundle = state
        .movie_details
        .movie_bundle(id)
        .await
        .to_error_response()?;

    let similar = state.cards(&bundle.similar);
    let flags = state.membership(&bundle.details);

    Ok(MovieDetailDto::from_bundle(&bundle, &state.images, flags, similar))
}
