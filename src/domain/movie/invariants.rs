use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates the Movie invariants the rest of the crate relies on
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_id(movie)?;
    validate_vote_average(movie)?;
    Ok(())
}

/// Ids come from the metadata service and are always positive
fn validate_id(movie: &Movie) -> DomainResult<()> {
    if movie.id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            movie.id
        )));
    }
    Ok(())
}

fn validate_vote_average(movie: &Movie) -> DomainResult<()> {
    if !(0.0..=10.0).contains(&movie.vote_average) {
        return Err(DomainError::InvariantViolation(format!(
            "Vote average {} for movie {} is outside 0-10",
            movie.vote_average, movie.id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Movie records:
///
/// 1. Identity (TMDB id) is positive and immutable
/// 2. Vote average stays within 0-10
/// 3. Records are replaced wholesale, never patched field by field
