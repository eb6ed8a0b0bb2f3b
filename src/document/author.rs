//! Author records read from the numbered author slots.

use crate::form::{AuthorField, FormState, MAX_AUTHORS, keys};

/// Value used for name attributes left blank.
const UNKNOWN: &str = "unknown";

/// One author, with every value already escaped for the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub fullname: String,
    pub initials: String,
    pub surname: String,
    pub editor: bool,
    pub organization: Option<String>,
    /// `None` when every postal sub-field is blank.
    pub postal: Option<PostalAddress>,
    pub phone: Option<String>,
    pub facsimile: Option<String>,
    pub email: Option<String>,
    pub uri: Option<String>,
}

/// Postal address block. The street line is always emitted once the block
/// exists, so it is a plain string; the rest are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
}

impl AuthorRecord {
    /// Reads author `slot` (1-based). Returns `None` when the slot's full
    /// name is blank, since such a slot is not an author.
    #[must_use]
    pub fn from_slot(form: &FormState, slot: usize) -> Option<Self> {
        let field = |f: AuthorField| keys::author(slot, f);
        let optional = |f: AuthorField| form.read_optional(&field(f));

        if !form.is_filled(&field(AuthorField::Fullname)) {
            return None;
        }

        let has_postal = AuthorField::POSTAL
            .iter()
            .any(|&f| form.is_filled(&field(f)));
        let postal = has_postal.then(|| PostalAddress {
            street: form.read_display(&field(AuthorField::Street), None),
            city: optional(AuthorField::City),
            region: optional(AuthorField::Region),
            code: optional(AuthorField::Code),
            country: optional(AuthorField::Country),
        });

        Some(Self {
            fullname: form.read_display(&field(AuthorField::Fullname), Some(UNKNOWN)),
            initials: form.read_display(&field(AuthorField::Initials), Some(UNKNOWN)),
            surname: form.read_display(&field(AuthorField::Surname), Some(UNKNOWN)),
            editor: form.read(&field(AuthorField::Editor)) == "yes",
            organization: optional(AuthorField::Organization),
            postal,
            phone: optional(AuthorField::Phone),
            facsimile: optional(AuthorField::Facsimile),
            email: optional(AuthorField::Email),
            uri: optional(AuthorField::Uri),
        })
    }

    /// Every present author, in slot order.
    #[must_use]
    pub fn all_from_form(form: &FormState) -> Vec<Self> {
        (1..=MAX_AUTHORS)
            .filter_map(|slot| Self::from_slot(form, slot))
            .collect()
    }
}
