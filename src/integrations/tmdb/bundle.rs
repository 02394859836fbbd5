// src/integrations/tmdb/bundle.rs
//
// Detail bundle assembly
//
// The detail page needs four independent resources. They are requested
// concurrently; only the primary detail record is required. Secondary
// sections that fail degrade to empty and are listed in `unavailable`.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::domain::{CastMember, Movie, MovieId, Video};
use crate::error::AppResult;

use super::api::MovieApi;

/// Similar titles shown on a detail page
pub const SIMILAR_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleSection {
    Credits,
    Videos,
    Similar,
}

impl BundleSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleSection::Credits => "credits",
            BundleSection::Videos => "videos",
            BundleSection::Similar => "similar",
        }
    }
}

impl fmt::Display for BundleSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secondary section that could not be fetched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegradedSection {
    pub section: BundleSection,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieBundle {
    pub details: Movie,
    pub cast: Vec<CastMember>,
    /// Trailers and teasers only, in service order
    pub trailers: Vec<Video>,
    /// At most `SIMILAR_LIMIT` entries
    pub similar: Vec<Movie>,
    pub unavailable: Vec<DegradedSection>,
}

impl MovieBundle {
    pub fn is_complete(&self) -> bool {
        self.unavailable.is_empty()
    }

    pub fn is_unavailable(&self, section: BundleSection) -> bool {
        self.unavailable.iter().any(|d| d.section == section)
    }
}

/// Fetch details, credits, videos and similar titles for one movie
pub async fn fetch_movie_bundle(api: &dyn MovieApi, id: MovieId) -> AppResult<MovieBundle> {
    let (details, credits, videos, similar) = tokio::join!(
        api.movie_details(id),
        api.movie_credits(id),
        api.movie_videos(id),
        api.similar_movies(id),
    );

    let details = details?;

    let mut unavailable = Vec::new();

    let cast = or_degrade(id, BundleSection::Credits, credits, &mut unavailable);

    let trailers = or_degrade(id, BundleSection::Videos, videos, &mut unavailable)
        .into_iter()
        .filter(Video::is_trailer)
        .collect();

    let mut similar = or_degrade(id, BundleSection::Similar, similar, &mut unavailable);
    similar.truncate(SIMILAR_LIMIT);

    Ok(MovieBundle {
        details,
        cast,
        trailers,
        similar,
        unavailable,
    })
}

fn or_degrade<T>(
    id: MovieId,
    section: BundleSection,
    result: AppResult<Vec<T>>,
    unavailable: &mut Vec<DegradedSection>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("Movie {}: {} unavailable, showing none ({})", id, section, e);
            unavailable.push(DegradedSection {
                section,
                reason: e.to_string(),
            });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::integrations::tmdb::api::MockMovieApi;

    fn video(key: &str, video_type: &str) -> Video {
        Video {
            key: key.to_string(),
            name: key.to_string(),
            video_type: video_type.to_string(),
            site: "YouTube".to_string(),
        }
    }

    fn cast_member(id: i64, name: &str) -> CastMember {
        CastMember {
            id,
            name: name.to_string(),
            character: "Someone".to_string(),
            profile_path: None,
        }
    }

    fn healthy_api() -> MockMovieApi {
        let mut api = MockMovieApi::new();
        api.expect_movie_details()
            .returning(|id| Ok(Movie::new(id, "Fight Club")));
        api.expect_movie_credits()
            .returning(|_| Ok(vec![cast_member(819, "Edward Norton"), cast_member(287, "Brad Pitt")]));
        api.expect_movie_videos().returning(|_| {
            Ok(vec![
                video("t1", "Trailer"),
                video("c1", "Clip"),
                video("t2", "Teaser"),
                video("f1", "Featurette"),
            ])
        });
        api.expect_similar_movies()
            .returning(|_| Ok((1..=10).map(|i| Movie::new(i, format!("Similar {}", i))).collect()));
        api
    }

    #[tokio::test]
    async fn test_complete_bundle() {
        let api = healthy_api();

        let bundle = fetch_movie_bundle(&api, 550).await.unwrap();

        assert_eq!(bundle.details.id, 550);
        assert_eq!(bundle.cast.len(), 2);
        let keys: Vec<_> = bundle.trailers.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["t1", "t2"]);
        assert_eq!(bundle.similar.len(), SIMILAR_LIMIT);
        assert_eq!(bundle.similar[0].id, 1);
        assert!(bundle.is_complete());
    }

    #[tokio::test]
    async fn test_primary_failure_is_fatal() {
        let mut api = MockMovieApi::new();
        api.expect_movie_details().returning(|_| {
            Err(AppError::Api {
                status: Some(404),
                message: "The resource you requested could not be found.".to_string(),
            })
        });
        api.expect_movie_credits().returning(|_| Ok(vec![]));
        api.expect_movie_videos().returning(|_| Ok(vec![]));
        api.expect_similar_movies().returning(|_| Ok(vec![]));

        let err = fetch_movie_bundle(&api, 1).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_credits_failure_degrades_to_empty_cast() {
        let mut api = MockMovieApi::new();
        api.expect_movie_details()
            .returning(|id| Ok(Movie::new(id, "Fight Club")));
        api.expect_movie_credits()
            .returning(|_| Err(AppError::Network("connection reset".to_string())));
        api.expect_movie_videos()
            .returning(|_| Ok(vec![video("t1", "Trailer")]));
        api.expect_similar_movies()
            .returning(|_| Err(AppError::Api { status: Some(500), message: "Internal".to_string() }));

        let bundle = fetch_movie_bundle(&api, 550).await.unwrap();

        assert_eq!(bundle.details.title, "Fight Club");
        assert!(bundle.cast.is_empty());
        assert_eq!(bundle.trailers.len(), 1);
        assert!(bundle.similar.is_empty());
        assert!(bundle.is_unavailable(BundleSection::Credits));
        assert!(bundle.is_unavailable(BundleSection::Similar));
        assert!(!bundle.is_unavailable(BundleSection::Videos));
        assert!(bundle.unavailable[0].reason.contains("connection reset"));
    }
}
