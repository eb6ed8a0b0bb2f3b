//! Wizard position and page transitions.
//!
//! [`WizardPosition`] is an immutable value: every transition returns a new
//! position and leaves the old one untouched. That keeps the invariant
//! `Intro <= current <= max_page_reached <= Final` local to this file.

use serde::Serialize;

use crate::error::WizardError;
use crate::form::FormState;
use crate::wizard::{Page, RequiredFields};

/// Current page plus the highest page ever reached in this session.
///
/// The high-water mark only grows, and only through [`advance`]. It decides
/// which parts of the document the generator fills in.
///
/// [`advance`]: WizardPosition::advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardPosition {
    current_page: Page,
    max_page_reached: Page,
}

impl Default for WizardPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardPosition {
    /// The start of a session: on the intro page, nothing else visited.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_page: Page::FIRST,
            max_page_reached: Page::FIRST,
        }
    }

    /// A position that has reached `page` and is currently on it.
    ///
    /// Used when generating a document for a form filled in elsewhere.
    #[must_use]
    pub const fn reached(page: Page) -> Self {
        Self {
            current_page: page,
            max_page_reached: page,
        }
    }

    /// Page the user is on.
    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    /// Highest page visited so far.
    #[must_use]
    pub const fn max_page_reached(&self) -> Page {
        self.max_page_reached
    }

    /// Moves to the next page if the current page's required fields are
    /// filled in.
    ///
    /// # Errors
    ///
    /// - [`WizardError::MissingRequired`] if the check fails.
    /// - [`WizardError::NoNextPage`] on the final page.
    pub fn advance(self, form: &FormState, required: &RequiredFields) -> Result<Self, WizardError> {
        let next = self
            .current_page
            .next()
            .ok_or(WizardError::NoNextPage(self.current_page))?;
        required.check(self.current_page, form)?;

        Ok(Self {
            current_page: next,
            max_page_reached: self.max_page_reached.max(next),
        })
    }

    /// Moves back one page. No validation; stays put on the intro page.
    #[must_use]
    pub fn retreat(self) -> Self {
        Self {
            current_page: self.current_page.prev().unwrap_or(Page::FIRST),
            ..self
        }
    }

    /// Shows `page` directly, without validation.
    ///
    /// Jumping never raises the high-water mark; a target beyond it is
    /// clamped to the highest page reached.
    #[must_use]
    pub fn jump_to(self, page: Page) -> Self {
        Self {
            current_page: page.min(self.max_page_reached),
            ..self
        }
    }
}
