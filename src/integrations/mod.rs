// src/integrations/mod.rs
//
// External Integrations Module
//
// Infrastructure only: talks to remote services and maps their payloads
// into domain values. No domain mutation, no events.

pub mod tmdb;

pub use tmdb::{MovieApi, TmdbClient};
