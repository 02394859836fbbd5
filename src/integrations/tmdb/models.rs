// src/integrations/tmdb/models.rs
//
// Wire shapes of the metadata service responses.
// Every field the service may omit carries a serde default.

use serde::Deserialize;

use crate::domain::{CastMember, Movie, MoviePage, Video};

/// Envelope of the list endpoints (`/movie/popular`, `/search/movie`, `/similar`)
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl From<PaginatedResponse<Movie>> for MoviePage {
    fn from(response: PaginatedResponse<Movie>) -> Self {
        MoviePage {
            movies: response.results,
            page: response.page,
            total_pages: response.total_pages,
        }
    }
}

/// `/movie/{id}/credits`
#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// `/movie/{id}/videos`
#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Body sent with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_page_parses() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 550, "title": "Fight Club", "overview": "", "poster_path": "/p.jpg",
                 "vote_average": 8.4, "release_date": "1999-10-15", "genre_ids": [18]}
            ],
            "total_pages": 500,
            "total_results": 10000
        }"#;

        let response: PaginatedResponse<Movie> = serde_json::from_str(json).unwrap();
        let page = MoviePage::from(response);

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 500);
        assert_eq!(page.movies[0].id, 550);
        assert_eq!(page.movies[0].overview, None);
        assert_eq!(page.movies[0].genre_ids, vec![18]);
    }

    #[test]
    fn test_empty_search_page() {
        let json = r#"{"page": 1, "results": [], "total_pages": 0, "total_results": 0}"#;
        let response: PaginatedResponse<Movie> = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn test_credits_and_videos_parse() {
        let credits: CreditsResponse = serde_json::from_str(
            r#"{"id": 1, "cast": [{"id": 7, "name": "Edward Norton", "character": "Narrator", "profile_path": null}], "crew": []}"#,
        )
        .unwrap();
        assert_eq!(credits.cast[0].character, "Narrator");

        let videos: VideosResponse = serde_json::from_str(
            r#"{"id": 1, "results": [{"key": "abc", "name": "Official", "type": "Trailer", "site": "YouTube"}]}"#,
        )
        .unwrap();
        assert!(videos.results[0].is_trailer());
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"success": false, "status_code": 34, "status_message": "The resource you requested could not be found."}"#,
        )
        .unwrap();
        assert_eq!(body.status_code, Some(34));
        assert!(body.status_message.unwrap().contains("could not be found"));
    }
}
