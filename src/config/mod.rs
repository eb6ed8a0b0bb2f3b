//! Configuration and input files.
//!
//! Handles loading and validation of the optional configuration file
//! (bibxml templates, submission endpoint, required-field policy) and of
//! the form and script files the CLI reads.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoadWarning};
pub use schema::{SubmitConfig, WizardConfig};
pub use validation::{ValidationResult, Validator};
