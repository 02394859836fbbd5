// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_controller;
pub mod collection_store;
pub mod movie_detail_service;


// Re-export all services and their types
pub use catalog_controller::{CatalogController, FetchOutcome};

pub use collection_store::CollectionStore;

pub use movie_detail_service::MovieDetailService;
