//! Incremental xml2rfc document generator.
//!
//! [`generate`] is a pure function of the form, the highest wizard page
//! reached, and a handful of options. It never fails: anything missing is
//! rendered as a placeholder comment or a default value, so the preview can
//! be shown at every step of the wizard.
//!
//! # Architecture
//!
//! - [`model`] reads the form into a [`DraftDocument`], gating each part on
//!   the page that collects it
//! - [`render`] turns that model into text
//! - [`naming`], [`references`] and [`author`] hold the per-field rules

pub mod author;
pub mod model;
pub mod naming;
pub mod references;
pub mod render;
pub mod section;

use chrono::Datelike;

use crate::form::FormState;
use crate::wizard::Page;

pub use author::{AuthorRecord, PostalAddress};
pub use model::DraftDocument;
pub use naming::{UNKNOWN_DOC_NAME, doc_name, normalize_doc_name};
pub use references::{BibXmlTemplates, ReferenceEntry, ReferenceKind, ReferenceList};
pub use section::Section;

/// Inputs to generation that do not come from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Year written to `<date year=".."/>`.
    pub year: i32,
    /// URL templates for the reference entity declarations.
    pub bibxml: BibXmlTemplates,
}

impl GenerateOptions {
    /// Options for a fixed year with the default bibxml service.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            bibxml: BibXmlTemplates::default(),
        }
    }

    /// Options dated with the current calendar year (UTC).
    #[must_use]
    pub fn current() -> Self {
        Self::for_year(chrono::Utc::now().year())
    }

    /// Replaces the bibxml URL templates.
    #[must_use]
    pub fn with_bibxml(mut self, bibxml: BibXmlTemplates) -> Self {
        self.bibxml = bibxml;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::current()
    }
}

/// Generates the document text for `form` as seen from `max_page_reached`.
///
/// Returns an empty string while only the intro page has been seen.
#[must_use]
pub fn generate(form: &FormState, max_page_reached: Page, options: &GenerateOptions) -> String {
    if max_page_reached <= Page::Intro {
        return String::new();
    }

    let doc = DraftDocument::build(form, max_page_reached, options.year);
    let text = render::render(&doc, &options.bibxml);
    tracing::debug!(
        max_page = %max_page_reached,
        bytes = text.len(),
        "document generated"
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_only_is_empty() {
        let out = generate(&FormState::sample(), Page::Intro, &GenerateOptions::for_year(2024));
        assert_eq!(out, "");
    }

    #[test]
    fn test_starts_with_declarations() {
        let out = generate(&FormState::new(), Page::Title, &GenerateOptions::for_year(2024));
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(r#"<?xml version="1.0" encoding="US-ASCII"?>"#));
        assert_eq!(lines.next(), Some(r#"<!DOCTYPE rfc SYSTEM "rfc2629.dtd" ["#));
        assert_eq!(lines.next(), Some("]>"));
        assert!(out.ends_with("</rfc>\n"));
    }

    #[test]
    fn test_year_is_an_input() {
        let form = FormState::sample();
        let a = generate(&form, Page::Final, &GenerateOptions::for_year(2001));
        assert!(a.contains(r#"<date year="2001" />"#));
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(GenerateOptions::current().year >= 2024);
    }
}
