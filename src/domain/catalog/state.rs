use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// Highest page the metadata service will serve for list endpoints
pub const MAX_PAGE: u32 = 500;

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
}

/// Which feed the catalog is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "query", rename_all = "snake_case")]
pub enum CatalogMode {
    Popular,
    Search(String),
}

impl CatalogMode {
    /// Blank queries mean "browse popular"
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            CatalogMode::Popular
        } else {
            CatalogMode::Search(trimmed.to_string())
        }
    }

    pub fn query(&self) -> &str {
        match self {
            CatalogMode::Popular => "",
            CatalogMode::Search(query) => query,
        }
    }
}

/// How a fetched page combines with the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    Replace,
    Append,
}

/// The displayed, paginated movie feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub movies: Vec<Movie>,
    pub current_page: u32,
    pub total_pages: u32,
    pub mode: CatalogMode,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            current_page: 0,
            total_pages: 0,
            mode: CatalogMode::Popular,
            loading: false,
            error: None,
        }
    }
}

impl CatalogState {
    /// Active search term, empty while browsing popular titles
    pub fn query(&self) -> &str {
        self.mode.query()
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// idle -> loading
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// loading -> success. Appending skips ids already displayed.
    pub fn apply_page(&mut self, page: MoviePage, merge: MergeMode, mode: CatalogMode) {
        match merge {
            MergeMode::Replace => {
                let mut seen = HashSet::new();
                self.movies = page
                    .movies
                    .into_iter()
                    .filter(|m| seen.insert(m.id))
                    .collect();
            }
            MergeMode::Append => {
                let mut seen: HashSet<_> = self.movies.iter().map(|m| m.id).collect();
                self.movies
                    .extend(page.movies.into_iter().filter(|m| seen.insert(m.id)));
            }
        }

        self.current_page = page.page.clamp(1, MAX_PAGE);
        self.total_pages = page.total_pages.min(MAX_PAGE).max(self.current_page);
        self.mode = mode;
        self.loading = false;
        self.error = None;
    }

    /// loading -> failed. The list and mode stay as they were.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// loading -> idle without a response. The list, page and error stay as they were.
    pub fn abandon_fetch(&mut self) {
        self.loading = false;
    }
}
