// src/integrations/tmdb/api.rs
//
// The seam between services and the metadata service.
// Services only ever hold an `Arc<dyn MovieApi>`.

use async_trait::async_trait;

use crate::domain::{CastMember, Movie, MovieId, MoviePage, Video};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// GET /movie/popular
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage>;

    /// GET /search/movie. A blank query behaves like `fetch_popular`.
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<MoviePage>;

    /// GET /movie/{id}
    async fn movie_details(&self, id: MovieId) -> AppResult<Movie>;

    /// GET /movie/{id}/credits, cast only
    async fn movie_credits(&self, id: MovieId) -> AppResult<Vec<CastMember>>;

    /// GET /movie/{id}/videos, unfiltered
    async fn movie_videos(&self, id: MovieId) -> AppResult<Vec<Video>>;

    /// GET /movie/{id}/similar, first page
    async fn similar_movies(&self, id: MovieId) -> AppResult<Vec<Movie>>;
}
