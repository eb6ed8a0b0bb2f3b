//! Error types for `draftwizard`
//!
//! The error hierarchy mirrors the process exit codes used by the CLI.
//! Only two things can actually go wrong in the core: a required field
//! is missing when leaving a wizard page, or an input file cannot be
//! loaded. Document generation itself never fails.

use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::Page;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `draftwizard` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration or form file error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Submission error (connection failed, non-success response)
    pub const SUBMIT_ERROR: i32 = 4;

    /// Wizard error (required field missing, no page to advance to)
    pub const WIZARD_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `draftwizard` operations.
#[derive(Debug, Error)]
pub enum DraftWizardError {
    /// Configuration or form loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wizard transition error
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Submission error
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DraftWizardError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Wizard(_) => ExitCode::WIZARD_ERROR,
            Self::Submit(_) => ExitCode::SUBMIT_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration and form file loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "bibxml.rfc_url")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the configuration cannot be used
    Error,
    /// Warning - suspicious but usable
    Warning,
}

// ============================================================================
// Wizard Errors
// ============================================================================

/// Wizard transition errors.
///
/// A failed transition never changes the wizard position; the caller
/// surfaces the error and keeps the user on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A required field is empty on the page being left
    #[error("{field} is missing a required value (page: {page})")]
    MissingRequired {
        /// Page whose check failed
        page: Page,
        /// First offending field
        field: String,
    },

    /// Already on the final page
    #[error("no page after {0}")]
    NoNextPage(Page),

    /// Page name or number could not be parsed
    #[error("unknown page '{0}' (expected a name such as 'author' or a number 1-7)")]
    UnknownPage(String),
}

// ============================================================================
// Submission Errors
// ============================================================================

/// Errors raised while posting a generated document.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// HTTP client error (connect, timeout, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (may be empty)
        body: String,
    },

    /// Nothing to submit yet
    #[error("document is empty; advance past the intro page first")]
    EmptyDocument,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `draftwizard` operations.
pub type Result<T> = std::result::Result<T, DraftWizardError>;

// ============================================================================
// Tests
// ============================================================================
