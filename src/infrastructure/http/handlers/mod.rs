//! HTTP Handlers

mod characters;
mod prompt;
mod root;

pub use characters::*;
pub use prompt::*;
pub use root::*;
