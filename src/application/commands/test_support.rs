// src/application/commands/test_support.rs
//
// Shared fixtures for command tests

use std::sync::Arc;

use crate::app::assemble_state;
use crate::application::AppState;
use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database};
use crate::domain::{Movie, MoviePage};
use crate::integrations::tmdb::MockMovieApi;
use crate::repositories::SqliteCollectionRepository;

/// App state over a mocked metadata service and a throwaway database
pub(crate) fn test_state(api: MockMovieApi) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_connection_pool(&dir.path().join("commands.db")).unwrap();
    initialize_database(&get_connection(&pool).unwrap()).unwrap();

    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };

    let state = assemble_state(
        config,
        Arc::new(api),
        Arc::new(SqliteCollectionRepository::new(Arc::new(pool))),
    );

    (dir, state)
}

pub(crate) fn page_of(ids: std::ops::RangeInclusive<i64>, page: u32, total_pages: u32) -> MoviePage {
    MoviePage {
        movies: ids.map(|id| Movie::new(id, format!("Movie {}", id))).collect(),
        page,
        total_pages,
    }
}
