//! File loading.
//!
//! The configuration pipeline:
//! 1. Size limit check
//! 2. Read and strip a UTF-8 BOM
//! 3. YAML parsing
//! 4. Empty-file rejection
//! 5. Deserialization to [`WizardConfig`]
//! 6. Validation
//!
//! Form files and session scripts share stages 1-5. Form files ending in
//! `.json` are parsed as JSON; everything else is YAML.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::config::schema::WizardConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;
use crate::form::FormState;
use crate::wizard::SessionScript;

// ============================================================================
// Public API
// ============================================================================

/// Limits applied to every file the loader reads.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum file size in bytes.
    pub max_config_size: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("DRAFTWIZARD_MAX_CONFIG_SIZE", 1024 * 1024),
        }
    }
}

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: WizardConfig,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} at {location}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Loader for configuration, form and script files.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    limits: ConfigLimits,
}

impl ConfigLoader {
    /// Creates a loader with the given limits.
    #[must_use]
    pub const fn new(limits: ConfigLimits) -> Self {
        Self { limits }
    }

    /// Creates a loader with default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing, unreadable or over the size limit
    /// - YAML parsing fails or the file is empty
    /// - Validation reports errors
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let config: WizardConfig = self.load_yaml(path, "Configuration file")?;

        let validation_result = Validator::new().validate(&config);
        if validation_result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: validation_result.errors,
            });
        }

        let warnings = validation_result
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: Some(issue.path),
            })
            .collect();

        Ok(LoadResult { config, warnings })
    }

    /// Loads `path` if given, otherwise returns the built-in defaults.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_or_default(&self, path: Option<&Path>) -> Result<LoadResult, ConfigError> {
        match path {
            Some(path) => self.load(path),
            None => Ok(LoadResult {
                config: WizardConfig::default(),
                warnings: Vec::new(),
            }),
        }
    }

    /// Loads a form file: a flat mapping of field name to value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a flat mapping
    /// or has an unquoted numeric value.
    pub fn load_form(&self, path: &Path) -> Result<FormState, ConfigError> {
        if has_extension(path, "json") {
            let content = self.read_source(path)?;
            return serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: Some(e.line()),
                message: e.to_string(),
            });
        }
        self.load_yaml(path, "Form file")
    }

    /// Loads a session script.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has an unknown step.
    pub fn load_script(&self, path: &Path) -> Result<SessionScript, ConfigError> {
        self.load_yaml(path, "Script file")
    }

    // ========================================================================
    // Stages
    // ========================================================================

    fn read_source(&self, path: &Path) -> Result<String, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.limits.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.limits.max_config_size),
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        Ok(match raw_content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => raw_content,
        })
    }

    fn load_yaml<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T, ConfigError> {
        let content = self.read_source(path)?;

        let root: Value = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        if root.is_null() {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!("{what} is empty"),
            });
        }

        serde_yaml::from_value(root).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: format!("Failed to deserialize {}: {e}", what.to_lowercase()),
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Reads an environment variable, falling back to `default` when unset or
/// unparsable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

// ============================================================================
// Tests
// ============================================================================
