// src/integrations/tmdb/client.rs
//
// TMDB v3 HTTP client
//
// ARCHITECTURE:
// - Read-only REST client authenticated with a bearer token
// - Maps wire responses into domain values (Movie, MoviePage, ...)
// - Used by services through the `MovieApi` trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - No caching, no retries: identical calls repeat the request
// - Transport failures become `AppError::Network`,
//   status and payload failures become `AppError::Api`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::domain::{CastMember, Movie, MovieId, MoviePage, Video};
use crate::error::{AppError, AppResult};

use super::api::MovieApi;
use super::models::{CreditsResponse, ErrorBody, PaginatedResponse, VideosResponse};

/// TMDB API Client
pub struct TmdbClient {
    base_url: String,
    http_client: Client,
    token: String,
    language: String,
}

impl TmdbClient {
    /// Create a client from the runtime configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http_client,
            token: config.api_token.clone(),
            language: config.language.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with the language parameter plus `params`, decoding JSON into `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        debug!("TMDB GET {} {:?}", path, params);

        let response = self
            .http_client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json")
            .query(&[("language", self.language.as_str())])
            .query(params)
            .send()
            .await?;

        Self::handle_response(path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });

            warn!("TMDB {} returned {}: {}", path, status, message);

            return Err(AppError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AppError::Api {
            status: None,
            message: format!("Malformed response from {}: {}", path, e),
        })
    }
}

fn validate_page(page: u32) -> AppResult<()> {
    if page == 0 {
        return Err(AppError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage> {
        validate_page(page)?;

        let response: PaginatedResponse<Movie> = self
            .get_json("/movie/popular", &[("page", page.to_string())])
            .await?;

        Ok(response.into())
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<MoviePage> {
        let query = query.trim();
        if query.is_empty() {
            return self.fetch_popular(page).await;
        }

        validate_page(page)?;

        let response: PaginatedResponse<Movie> = self
            .get_json(
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("include_adult", "false".to_string()),
                ],
            )
            .await?;

        Ok(response.into())
    }

    async fn movie_details(&self, id: MovieId) -> AppResult<Movie> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    async fn movie_credits(&self, id: MovieId) -> AppResult<Vec<CastMember>> {
        let response: CreditsResponse = self
            .get_json(&format!("/movie/{}/credits", id), &[])
            .await?;
        Ok(response.cast)
    }

    async fn movie_videos(&self, id: MovieId) -> AppResult<Vec<Video>> {
        let response: VideosResponse = self
            .get_json(&format!("/movie/{}/videos", id), &[])
            .await?;
        Ok(response.results)
    }

    async fn similar_movies(&self, id: MovieId) -> AppResult<Vec<Movie>> {
        let response: PaginatedResponse<Movie> = self
            .get_json(&format!("/movie/{}/similar", id), &[("page", "1".to_string())])
            .await?;
        Ok(response.results)
    }
}
