// src/integrations/tmdb/images.rs
//
// Image and trailer URL resolution.
// The service hands out relative image paths; views need absolute URLs.

use std::fmt;

use crate::config::DEFAULT_IMAGE_BASE_URL;

/// Shown wherever a movie has no poster or backdrop
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Width buckets served by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Cast portraits
    W185,
    /// Similar-title thumbnails
    W300,
    /// Catalog cards and detail posters
    W500,
    /// Backdrops
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves image paths against a configurable CDN base
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for `path`, or the placeholder when there is none
    pub fn url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) if path.starts_with('/') => format!("{}/{}{}", self.base_url, size, path),
            Some(path) => format!("{}/{}/{}", self.base_url, size, path),
            None => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    /// Like `url`, but `None` instead of the placeholder
    pub fn optional_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        path.filter(|p| !p.trim().is_empty())
            .map(|p| self.url(Some(p), size))
    }
}

/// Resolve against the public CDN
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    ImageResolver::default().url(path, size)
}

pub fn youtube_watch_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", key)
}

pub fn youtube_embed_url(key: &str) -> String {
    format!("https://www.youtube.com/embed/{}", key)
}
