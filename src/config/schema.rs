//! Configuration schema.
//!
//! Every section is optional; an empty mapping yields the built-in
//! defaults.

use serde::{Deserialize, Serialize};

use crate::document::{BibXmlTemplates, GenerateOptions};
use crate::submit::DEFAULT_ENDPOINT;
use crate::wizard::RequiredFields;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    /// Reference entity URL templates.
    pub bibxml: BibXmlTemplates,

    /// Submission target.
    pub submit: SubmitConfig,

    /// Required-field policy.
    pub required: RequiredFields,
}

impl WizardConfig {
    /// Generation options for `year` using the configured templates.
    #[must_use]
    pub fn generate_options(&self, year: Option<i32>) -> GenerateOptions {
        let options = year.map_or_else(GenerateOptions::current, GenerateOptions::for_year);
        options.with_bibxml(self.bibxml.clone())
    }
}

/// Submission settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmitConfig {
    /// Base URL; the document is posted to `<endpoint>/<docName>.xml`.
    pub endpoint: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
