// src/app/mod.rs
//
// Application-level wiring

pub mod bootstrap;

pub use bootstrap::{assemble_state, initialize_app};
