// src/app/bootstrap.rs
//
// Builds the whole object graph from an `AppConfig`.
//
// CRITICAL RULES:
// - The only place concrete implementations are chosen
// - Services receive trait objects, never concrete types
// - Storage is ready (schema applied, integrity checked) before any service runs
// - Unusable saved data never blocks startup: the file is set aside and
//   recreated, or the session runs on an in-memory store

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::application::AppState;
use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, create_memory_pool, get_connection, get_database_path,
    initialize_database, set_aside_database, verify_database_integrity, ConnectionPool,
};
use crate::error::AppResult;
use crate::events::create_event_bus;
use crate::integrations::tmdb::{ImageResolver, MovieApi, TmdbClient};
use crate::repositories::{CollectionRepository, SqliteCollectionRepository};
use crate::services::{CatalogController, CollectionStore, MovieDetailService};

/// Open storage, build the HTTP client and wire every service.
///
/// Favorites and watchlist are rehydrated from disk before this returns.
/// The catalog starts empty; call `browse_popular` to load the first page.
pub fn initialize_app(config: AppConfig) -> AppResult<AppState> {
    // 1. INFRASTRUCTURE
    let pool = open_storage(&config)?;
    let api: Arc<dyn MovieApi> = Arc::new(TmdbClient::new(&config)?);

    // 2. REPOSITORIES
    let collection_repo: Arc<dyn CollectionRepository> =
        Arc::new(SqliteCollectionRepository::new(pool));

    Ok(assemble_state(config, api, collection_repo))
}

/// Open the collections database, starting fresh when saved data is unusable
fn open_storage(config: &AppConfig) -> AppResult<Arc<ConnectionPool>> {
    let db_path = match get_database_path(config) {
        Ok(path) => path,
        Err(e) => {
            warn!(
                "Data directory {} unavailable, collections will not be saved: {}",
                config.data_dir.display(),
                e
            );
            return open_memory_storage();
        }
    };

    match open_file_storage(&db_path) {
        Ok(pool) => {
            info!("Local storage ready at {}", db_path.display());
            return Ok(Arc::new(pool));
        }
        Err(e) => warn!(
            "Saved data at {} is unusable, starting empty: {}",
            db_path.display(),
            e
        ),
    }

    match set_aside_database(&db_path) {
        Ok(moved) => info!("Unusable database moved to {}", moved.display()),
        Err(e) => warn!("Could not move {} aside: {}", db_path.display(), e),
    }

    match open_file_storage(&db_path) {
        Ok(pool) => {
            info!("Local storage recreated at {}", db_path.display());
            Ok(Arc::new(pool))
        }
        Err(e) => {
            warn!(
                "Could not recreate {}, collections will not be saved: {}",
                db_path.display(),
                e
            );
            open_memory_storage()
        }
    }
}

fn open_file_storage(db_path: &Path) -> AppResult<ConnectionPool> {
    let pool = create_connection_pool(db_path)?;
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }
    Ok(pool)
}

fn open_memory_storage() -> AppResult<Arc<ConnectionPool>> {
    let pool = create_memory_pool()?;
    initialize_database(&*get_connection(&pool)?)?;
    Ok(Arc::new(pool))
}

/// Wire services and application state around already-built adapters
pub fn assemble_state(
    config: AppConfig,
    api: Arc<dyn MovieApi>,
    collection_repo: Arc<dyn CollectionRepository>,
) -> AppState {
    let event_bus = Arc::new(create_event_bus());

    // 3. SERVICES
    let collections = Arc::new(CollectionStore::new(collection_repo, event_bus.clone()));
    let catalog = Arc::new(CatalogController::new(api.clone(), event_bus.clone()));
    let movie_details = Arc::new(MovieDetailService::new(api, event_bus.clone()));

    // 4. APPLICATION STATE
    AppState {
        images: ImageResolver::new(&config.image_base_url),
        config: Arc::new(config),
        event_bus,
        catalog,
        collections,
        movie_details,
    }
}
