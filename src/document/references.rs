//! Normative and informative references.
//!
//! Each non-empty reference field becomes an external entity declared in
//! the DOCTYPE internal subset, an `<xref>` in the introduction, and an
//! entity reference in the back matter.

use serde::{Deserialize, Serialize};

use crate::form::{FormState, MAX_INFORMATIVE_REFS, MAX_NORMATIVE_REFS, keys};

/// Placeholder substituted with the reference identifier in URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Where the bibliographic XML for each entity is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BibXmlTemplates {
    /// URL template for RFCs; `{id}` is the RFC number.
    pub rfc_url: String,
    /// URL template for Internet-Drafts; `{id}` is the draft name.
    pub draft_url: String,
}

impl Default for BibXmlTemplates {
    fn default() -> Self {
        Self {
            rfc_url: "http://xml.resource.org/public/rfc/bibxml/reference.RFC.{id}.xml"
                .to_string(),
            draft_url: "http://xml.resource.org/public/rfc/bibxml3/reference.I-D.{id}.xml"
                .to_string(),
        }
    }
}

/// Kind of reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// An RFC the document depends on, entity `RFC<n>`.
    Normative,
    /// A supporting Internet-Draft, entity `I-D.<name>`.
    Informative,
}

/// One reference, identified by its stripped identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub kind: ReferenceKind,
    pub id: String,
}

impl ReferenceEntry {
    /// An RFC reference; a leading `rfc` (any case) is dropped.
    #[must_use]
    pub fn normative(value: &str) -> Self {
        let id = match value.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("rfc") => &value[3..],
            _ => value,
        };
        Self {
            kind: ReferenceKind::Normative,
            id: id.to_string(),
        }
    }

    /// A draft reference; a leading `draft-` and trailing `.txt` are dropped.
    #[must_use]
    pub fn informative(value: &str) -> Self {
        let id = value.strip_prefix("draft-").unwrap_or(value);
        let id = id.strip_suffix(".txt").unwrap_or(id);
        Self {
            kind: ReferenceKind::Informative,
            id: id.to_string(),
        }
    }

    /// Entity (and anchor) name, e.g. `RFC2119` or `I-D.ietf-foo-bar`.
    #[must_use]
    pub fn entity_name(&self) -> String {
        match self.kind {
            ReferenceKind::Normative => format!("RFC{}", self.id),
            ReferenceKind::Informative => format!("I-D.{}", self.id),
        }
    }

    /// System identifier of the entity declaration.
    #[must_use]
    pub fn system_url(&self, templates: &BibXmlTemplates) -> String {
        let template = match self.kind {
            ReferenceKind::Normative => &templates.rfc_url,
            ReferenceKind::Informative => &templates.draft_url,
        };
        template.replace(ID_PLACEHOLDER, &self.id)
    }
}

/// All references entered on the references page, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    pub normative: Vec<ReferenceEntry>,
    pub informative: Vec<ReferenceEntry>,
}

impl ReferenceList {
    /// Collects the non-empty reference fields.
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        let normative = (1..=MAX_NORMATIVE_REFS)
            .filter_map(|n| form.read_optional(&keys::normative_ref(n)))
            .map(|value| ReferenceEntry::normative(&value))
            .collect();
        let informative = (1..=MAX_INFORMATIVE_REFS)
            .filter_map(|n| form.read_optional(&keys::informative_ref(n)))
            .map(|value| ReferenceEntry::informative(&value))
            .collect();
        Self {
            normative,
            informative,
        }
    }

    /// Normative entries followed by informative ones.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.normative.iter().chain(&self.informative)
    }
}
