//! Integration tests for permset
//!
//! These tests go through the public API only.

pub mod catalog_file_tests;
pub mod cli_tests;
pub mod compression_property_tests;
pub mod config_loading_tests;
