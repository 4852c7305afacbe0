//! Core abstractions for schema rendering
//!
//! This module defines the renderer trait, the shared output vocabulary,
//! the error type and logging setup.

mod error;
pub mod logging;
mod renderer;
mod types;

pub use error::*;
pub use logging::*;
pub use renderer::*;
pub use types::*;
