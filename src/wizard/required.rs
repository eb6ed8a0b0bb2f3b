//! Required-field policy checked when leaving a page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::form::{AuthorField, FormState, MAX_AUTHORS, keys};
use crate::wizard::Page;

/// Titles longer than this need a short (running-header) title.
pub const SHORT_TITLE_THRESHOLD: usize = 35;

/// Which fields must be filled in before the user may leave a page.
///
/// `pages` lists plain required fields per page. Author slots are handled
/// separately through `author_fields`: those sub-fields become required for
/// every slot whose full name has been entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequiredFields {
    /// Required field names per page, in form order.
    pub pages: BTreeMap<Page, Vec<String>>,
    /// Sub-fields required for each started author slot.
    pub author_fields: Vec<AuthorField>,
}

impl Default for RequiredFields {
    fn default() -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(
            Page::Title,
            vec![keys::TITLE.to_string(), keys::FILENAME.to_string()],
        );
        pages.insert(Page::KeywordsAbstract, vec![keys::ABSTRACT.to_string()]);
        Self {
            pages,
            author_fields: vec![
                AuthorField::Fullname,
                AuthorField::Initials,
                AuthorField::Surname,
            ],
        }
    }
}

impl RequiredFields {
    /// No field is ever required.
    #[must_use]
    pub fn none() -> Self {
        Self {
            pages: BTreeMap::new(),
            author_fields: Vec::new(),
        }
    }

    /// Fields listed as required for `page`.
    #[must_use]
    pub fn for_page(&self, page: Page) -> &[String] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or_default()
    }

    /// Runs the check for leaving `page`.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::MissingRequired`] naming the first empty
    /// required field.
    pub fn check(&self, page: Page, form: &FormState) -> Result<(), WizardError> {
        match page {
            Page::Title => {
                if form.read(keys::TITLE).chars().count() > SHORT_TITLE_THRESHOLD {
                    require(page, form, keys::SHORT_TITLE)?;
                }
                self.check_listed(page, form)
            }
            Page::Author => {
                require(page, form, &keys::author(1, AuthorField::Fullname))?;
                for slot in 1..=MAX_AUTHORS {
                    if !form.is_filled(&keys::author(slot, AuthorField::Fullname)) {
                        continue;
                    }
                    for &field in &self.author_fields {
                        require(page, form, &keys::author(slot, field))?;
                    }
                }
                self.check_listed(page, form)
            }
            _ => self.check_listed(page, form),
        }
    }

    fn check_listed(&self, page: Page, form: &FormState) -> Result<(), WizardError> {
        self.for_page(page)
            .iter()
            .try_for_each(|field| require(page, form, field))
    }
}

fn require(page: Page, form: &FormState, field: &str) -> Result<(), WizardError> {
    if form.is_filled(field) {
        Ok(())
    } else {
        Err(WizardError::MissingRequired {
            page,
            field: field.to_string(),
        })
    }
}
