//! Utility modules for permset
//!
//! - **error**: Error types and the crate-wide `Result` alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{PermsetError, Result};
pub use logging::init_logging;
