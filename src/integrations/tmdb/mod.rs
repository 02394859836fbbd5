// src/integrations/tmdb/mod.rs
//
// TMDB (The Movie Database) integration
//
// - api: the `MovieApi` seam used by services
// - client: reqwest implementation
// - models: wire envelopes
// - bundle: concurrent detail-page assembly
// - images: image and trailer URLs

pub mod api;
pub mod bundle;
pub mod client;
pub mod images;
pub mod models;

pub use api::MovieApi;
pub use bundle::{fetch_movie_bundle, BundleSection, DegradedSection, MovieBundle, SIMILAR_LIMIT};
pub use client::TmdbClient;
pub use images::{
    image_url, youtube_embed_url, youtube_watch_url, ImageResolver, ImageSize,
    PLACEHOLDER_IMAGE_URL,
};

#[cfg(test)]
pub use api::MockMovieApi;
