//! Configuration validation.
//!
//! Runs on the deserialized [`WizardConfig`] and collects every issue
//! instead of stopping at the first one.

use std::collections::HashSet;

use crate::config::schema::WizardConfig;
use crate::document::references::ID_PLACEHOLDER;
use crate::error::{Severity, ValidationIssue};
use crate::wizard::Page;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns the result.
    pub fn validate(&mut self, config: &WizardConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_template("bibxml.rfc_url", &config.bibxml.rfc_url);
        self.validate_template("bibxml.draft_url", &config.bibxml.draft_url);
        self.validate_endpoint(&config.submit.endpoint);
        self.validate_required(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_template(&mut self, path: &str, template: &str) {
        if !template.contains(ID_PLACEHOLDER) {
            self.add_error(
                path,
                &format!("URL template must contain the {ID_PLACEHOLDER} placeholder"),
            );
        }
        if !is_http_url(template) {
            self.add_warning(path, "URL template is not an http(s) URL");
        }
    }

    fn validate_endpoint(&mut self, endpoint: &str) {
        if !is_http_url(endpoint) {
            self.add_error("submit.endpoint", "Endpoint must be an http:// or https:// URL");
        }
    }

    fn validate_required(&mut self, config: &WizardConfig) {
        for (page, fields) in &config.required.pages {
            let path = format!("required.pages.{}", page_key(*page));
            if matches!(page, Page::Intro | Page::Final) && !fields.is_empty() {
                self.add_warning(
                    &path,
                    &format!("Page '{page}' is never left through 'next'; these fields are not checked"),
                );
            }

            let mut seen = HashSet::new();
            for (i, field) in fields.iter().enumerate() {
                if field.trim().is_empty() {
                    self.add_error(&format!("{path}[{i}]"), "Required field name cannot be empty");
                } else if !seen.insert(field.as_str()) {
                    self.add_warning(
                        &format!("{path}[{i}]"),
                        &format!("Duplicate required field '{field}'"),
                    );
                }
            }
        }

        let mut seen = HashSet::new();
        for (i, field) in config.required.author_fields.iter().enumerate() {
            if !seen.insert(*field) {
                self.add_warning(
                    &format!("required.author_fields[{i}]"),
                    &format!("Duplicate author sub-field '{field}'"),
                );
            }
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

/// The key a page is written under in the configuration file.
fn page_key(page: Page) -> String {
    page.as_str().replace('-', "_")
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
