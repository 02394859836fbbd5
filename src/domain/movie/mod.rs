pub mod entity;
pub mod invariants;

pub use entity::{CastMember, Genre, Movie, MovieId, ProductionCompany, Video};
pub use invariants::validate_movie;
