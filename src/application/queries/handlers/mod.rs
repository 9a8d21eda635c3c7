//! Query Handlers

mod character_handlers;

pub use character_handlers::*;
