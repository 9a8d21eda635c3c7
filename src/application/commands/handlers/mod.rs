//! Command Handlers

mod prompt_handlers;

pub use prompt_handlers::*;
