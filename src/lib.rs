// src/lib.rs
// MovieHub - Movie catalog core backed by TMDB
//
// Architecture:
// - Domain-centric: movie, collection and catalog rules live in `domain`
// - Event-driven: services announce changes on a synchronous event bus
// - Explicit: no implicit behavior, no magic
// - Local-first: favorites and watchlist live in a local SQLite file
// - Application Layer: command handlers returning DTOs for the views

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_catalog,
    validate_collection,
    validate_movie,
    // Movie
    CastMember,
    // Catalog
    CatalogMode,
    CatalogState,
    // Collection
    CollectionKind,
    Genre,
    Membership,
    MergeMode,
    Movie,
    MovieCollection,
    MovieId,
    MoviePage,
    ProductionCompany,
    Video,
    MAX_PAGE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::AppConfig;

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CatalogFetchFailed,
    CatalogLoaded,
    CollectionChanged,
    DomainEvent,
    EventBus,
    EventLogEntry,
    MovieBundleDegraded,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{CollectionRepository, SqliteCollectionRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogController, CollectionStore, FetchOutcome, MovieDetailService};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::tmdb::{
    fetch_movie_bundle, image_url, BundleSection, ImageResolver, ImageSize, MovieApi,
    MovieBundle, TmdbClient,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use app::initialize_app;
pub use application::{AppState, ErrorResponse, ErrorType};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
