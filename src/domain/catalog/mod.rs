//! Catalog invariants:
//!
//! 1. `current_page <= total_pages`
//! 2. An error message never survives the start of a new fetch
//! 3. The movie list holds each id at most once

pub mod state;

pub use state::{CatalogMode, CatalogState, MergeMode, MoviePage, MAX_PAGE};

use crate::domain::{DomainError, DomainResult};

/// Validates catalog state invariants
pub fn validate_catalog(state: &CatalogState) -> DomainResult<()> {
    if state.current_page > state.total_pages {
        return Err(DomainError::InvariantViolation(format!(
            "Current page {} exceeds total pages {}",
            state.current_page, state.total_pages
        )));
    }
    if state.loading && state.error.is_some() {
        return Err(DomainError::InvalidStateTransition(
            "Catalog is loading while still holding an error".to_string(),
        ));
    }
    Ok(())
}
