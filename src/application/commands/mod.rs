// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between views and services
// - Commands accept plain values, return DTOs
// - Errors leave as serialized `ErrorResponse` strings
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod collection_commands;
pub mod movie_commands;

pub use catalog_commands::*;
pub use collection_commands::*;
pub use movie_commands::*;

#[cfg(test)]
pub(crate) mod test_support;
