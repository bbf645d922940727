//! Configuration validation
//!
//! Every configuration model implements [`Validate`]; errors are plain
//! strings so the caller can prefix them with the section name.

mod validators;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
