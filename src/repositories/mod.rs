// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Explicit SQL only

pub mod collection_repository;

pub use collection_repository::{CollectionRepository, SqliteCollectionRepository};

#[cfg(test)]
pub use collection_repository::MockCollectionRepository;
