// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)
// - Display fallbacks ("N/A", placeholder images...) are decided here

use serde::{Deserialize, Serialize};

use crate::domain::{CastMember, CatalogState, CollectionKind, Membership, Movie, MovieId, Video};
use crate::integrations::tmdb::{
    youtube_embed_url, youtube_watch_url, ImageResolver, ImageSize, MovieBundle,
};

pub const NO_DESCRIPTION: &str = "No description available.";
pub const NOT_AVAILABLE: &str = "N/A";

/// Membership flags shown on every card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipFlags {
    pub is_favorite: bool,
    pub in_watchlist: bool,
}

// ============================================================================
// MOVIE CARD DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCardDto {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub rating: String,
    pub year: String,
    pub release_date: Option<String>,
    pub is_favorite: bool,
    pub in_watchlist: bool,
}

impl MovieCardDto {
    pub fn from_movie(movie: &Movie, images: &ImageResolver, flags: MembershipFlags) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie
                .overview
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            poster_url: images.url(movie.poster_path.as_deref(), ImageSize::W500),
            rating: movie.rating_label(),
            year: year_label(movie),
            release_date: movie.release_date.clone(),
            is_favorite: flags.is_favorite,
            in_watchlist: flags.in_watchlist,
        }
    }
}

fn year_label(movie: &Movie) -> String {
    movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDto {
    pub heading: String,
    pub query: String,
    pub movies: Vec<MovieCardDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Shown when a finished fetch produced no movies
    pub empty_message: Option<String>,
}

impl CatalogDto {
    pub fn from_state(state: &CatalogState, movies: Vec<MovieCardDto>) -> Self {
        let query = state.query().to_string();
        let heading = if query.is_empty() {
            "Popular Movies".to_string()
        } else {
            format!("Search Results for \"{}\"", query)
        };

        let empty_message = (movies.is_empty() && !state.loading && state.error.is_none()
            && state.current_page > 0)
            .then(|| "No movies found. Try a different search term".to_string());

        Self {
            heading,
            query,
            movies,
            current_page: state.current_page,
            total_pages: state.total_pages,
            has_more: state.has_more(),
            loading: state.loading,
            error: state.error.clone(),
            empty_message,
        }
    }
}

// ============================================================================
// COLLECTION DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDto {
    pub kind: CollectionKind,
    pub title: String,
    /// Navigation label, e.g. `Favorites (3)`
    pub nav_label: String,
    pub movies: Vec<MovieCardDto>,
    pub count: usize,
    pub empty_message: Option<String>,
}

impl CollectionDto {
    pub fn new(kind: CollectionKind, movies: Vec<MovieCardDto>) -> Self {
        let count = movies.len();
        let empty_message = (count == 0).then(|| match kind {
            CollectionKind::Favorites => {
                "No favorites yet. Start adding movies you love!".to_string()
            }
            CollectionKind::Watchlist => {
                "Your watchlist is empty. Add movies you want to watch later!".to_string()
            }
        });

        Self {
            kind,
            title: format!("Your {}", kind),
            nav_label: nav_label(kind, count),
            movies,
            count,
            empty_message,
        }
    }
}

/// `Favorites` when empty, `Favorites (n)` otherwise
pub fn nav_label(kind: CollectionKind, count: usize) -> String {
    if count == 0 {
        kind.to_string()
    } else {
        format!("{} ({})", kind, count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleResultDto {
    pub movie_id: MovieId,
    pub kind: CollectionKind,
    pub membership: Membership,
    pub count: usize,
    pub nav_label: String,
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastDto {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub profile_url: String,
}

impl CastDto {
    pub fn from_member(member: &CastMember, images: &ImageResolver) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            character: member.character.clone(),
            profile_url: images.url(member.profile_path.as_deref(), ImageSize::W185),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerDto {
    pub key: String,
    pub name: String,
    pub kind: String,
    pub site: String,
    pub watch_url: String,
    pub embed_url: String,
}

impl From<&Video> for TrailerDto {
    fn from(video: &Video) -> Self {
        Self {
            key: video.key.clone(),
            name: video.name.clone(),
            kind: video.video_type.clone(),
            site: video.site.clone(),
            watch_url: youtube_watch_url(&video.key),
            embed_url: youtube_embed_url(&video.key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: MovieId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub year: String,
    pub release_date: Option<String>,
    pub rating: String,
    pub vote_count: i64,
    pub runtime: Option<String>,
    pub status: Option<String>,
    pub genres: Vec<String>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub production_companies: Vec<String>,
    pub cast: Vec<CastDto>,
    pub trailers: Vec<TrailerDto>,
    pub similar: Vec<MovieCardDto>,
    /// Sections that could not be loaded ("credits", "videos", "similar")
    pub unavailable_sections: Vec<String>,
    pub is_favorite: bool,
    pub in_watchlist: bool,
}

impl MovieDetailDto {
    /// `similar` cards are built by the caller, which knows their membership
    pub fn from_bundle(
        bundle: &MovieBundle,
        images: &ImageResolver,
        flags: MembershipFlags,
        similar: Vec<MovieCardDto>,
    ) -> Self {
        let movie = &bundle.details;

        Self {
            id: movie.id,
            title: movie.title.clone(),
            tagline: movie.tagline.clone(),
            overview: movie
                .overview
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            poster_url: images.url(movie.poster_path.as_deref(), ImageSize::W500),
            backdrop_url: images.optional_url(movie.backdrop_path.as_deref(), ImageSize::W780),
            year: year_label(movie),
            release_date: movie.release_date.clone(),
            rating: movie.rating_label(),
            vote_count: movie.vote_count,
            runtime: movie.runtime_label(),
            status: movie.status.clone(),
            genres: movie.genre_names(),
            budget: movie.budget.filter(|b| *b > 0),
            revenue: movie.revenue.filter(|r| *r > 0),
            production_companies: movie
                .production_companies
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            cast: bundle
                .cast
                .iter()
                .map(|m| CastDto::from_member(m, images))
                .collect(),
            trailers: bundle.trailers.iter().map(TrailerDto::from).collect(),
            similar,
            unavailable_sections: bundle
                .unavailable
                .iter()
                .map(|d| d.section.to_string())
                .collect(),
            is_favorite: flags.is_favorite,
            in_watchlist: flags.in_watchlist,
        }
    }
}
