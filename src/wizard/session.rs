//! Single-owner wizard session.
//!
//! Owns the form, the position and the latest generated document. After
//! every page transition, successful or not, the document is regenerated
//! from scratch.

use tracing::{debug, info, warn};

use crate::document::{GenerateOptions, doc_name, generate};
use crate::error::WizardError;
use crate::form::{FormState, keys};
use crate::submit::{Submission, preview};
use crate::wizard::{Page, RequiredFields, WizardPosition};

/// An editing session: form state, wizard position and generated text.
#[derive(Debug, Clone)]
pub struct WizardSession {
    form: FormState,
    position: WizardPosition,
    required: RequiredFields,
    options: GenerateOptions,
    document: String,
}

impl WizardSession {
    /// Starts a session on the intro page.
    #[must_use]
    pub fn new(form: FormState, required: RequiredFields, options: GenerateOptions) -> Self {
        Self::resume(form, WizardPosition::new(), required, options)
    }

    /// Starts a session at an existing position.
    #[must_use]
    pub fn resume(
        form: FormState,
        position: WizardPosition,
        required: RequiredFields,
        options: GenerateOptions,
    ) -> Self {
        let mut session = Self {
            form,
            position,
            required,
            options,
            document: String::new(),
        };
        session.regenerate();
        session
    }

    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub const fn position(&self) -> WizardPosition {
        self.position
    }

    /// Stores a raw field value. The document is not regenerated until the
    /// next page transition.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.form.set(name, value);
    }

    /// Stores several raw field values at once; later values win.
    pub fn set_fields(&mut self, fields: &FormState) {
        for (name, value) in fields.iter() {
            self.set_field(name, value);
        }
    }

    /// Tries to move to the next page.
    ///
    /// # Errors
    ///
    /// Returns the [`WizardError`] from the required-field check, or
    /// [`WizardError::NoNextPage`] on the final page. The position is
    /// unchanged on error.
    pub fn advance(&mut self) -> Result<Page, WizardError> {
        let from = self.position.current_page();
        let result = self.position.advance(&self.form, &self.required);
        match &result {
            Ok(next) => {
                info!(from = %from, to = %next.current_page(), max = %next.max_page_reached(), "page advanced");
                self.position = *next;
            }
            Err(e) => warn!(page = %from, error = %e, "advance blocked"),
        }
        self.regenerate();
        result.map(|p| p.current_page())
    }

    /// Moves back one page.
    pub fn retreat(&mut self) -> Page {
        self.position = self.position.retreat();
        debug!(to = %self.position.current_page(), "page retreated");
        self.regenerate();
        self.position.current_page()
    }

    /// Shows `page` directly (clamped to the highest page reached).
    pub fn jump_to(&mut self, page: Page) -> Page {
        self.position = self.position.jump_to(page);
        debug!(requested = %page, to = %self.position.current_page(), "page jumped");
        self.regenerate();
        self.position.current_page()
    }

    /// Latest generated document, raw.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Escaped document for display; empty while on the intro page.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.position.current_page() == Page::Intro {
            String::new()
        } else {
            preview(&self.document)
        }
    }

    /// Normalised document name (`unknown` without a filename).
    #[must_use]
    pub fn doc_name(&self) -> String {
        doc_name(self.form.read(keys::FILENAME))
    }

    /// Submission of the current document to `endpoint`.
    #[must_use]
    pub fn submission(&self, endpoint: &str) -> Submission {
        Submission::build(&self.form, &self.document, endpoint)
    }

    fn regenerate(&mut self) {
        self.document = generate(
            &self.form,
            self.position.max_page_reached(),
            &self.options,
        );
    }
}
