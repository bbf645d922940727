//! Error handling for permset
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{PermsetError, Result};
