// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Recovery from unusable database files

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, get_database_path,
    set_aside_database, ConnectionPool, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};
