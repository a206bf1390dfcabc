//! Pre-calculation input validation.

mod validate;

pub use validate::{validate_document, ValidationResult};
