// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between views and services
// - Translates domain values into DTOs
// - Maps errors into `ErrorResponse` payloads
// - Owns no business rules

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
