//! Field names understood by the wizard.
//!
//! Repeated groups are namespaced by a 1-based numeric suffix:
//! `author3_email`, `rfc2`, `id1`, `keyword5`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of author slots on the author page.
pub const MAX_AUTHORS: usize = 5;

/// Number of normative (RFC) reference fields.
pub const MAX_NORMATIVE_REFS: usize = 5;

/// Number of informative (Internet-Draft) reference fields.
pub const MAX_INFORMATIVE_REFS: usize = 5;

/// Number of keyword fields.
pub const MAX_KEYWORDS: usize = 5;

pub const TITLE: &str = "idtitle";
pub const SHORT_TITLE: &str = "idshorttitle";
pub const FILENAME: &str = "filename";
pub const CATEGORY: &str = "category";
pub const IPR: &str = "ipr";
pub const UPDATES: &str = "updates";
pub const OBSOLETES: &str = "obsoletes";
pub const AREA: &str = "area";
pub const WORKGROUP: &str = "workgroup";
pub const ABSTRACT: &str = "abstract";

/// Field name of an author sub-field, e.g. `author2_city`.
#[must_use]
pub fn author(slot: usize, field: AuthorField) -> String {
    format!("author{slot}_{}", field.as_str())
}

/// Field name of the n-th normative reference, e.g. `rfc1`.
#[must_use]
pub fn normative_ref(n: usize) -> String {
    format!("rfc{n}")
}

/// Field name of the n-th informative reference, e.g. `id1`.
#[must_use]
pub fn informative_ref(n: usize) -> String {
    format!("id{n}")
}

/// Field name of the n-th keyword, e.g. `keyword1`.
#[must_use]
pub fn keyword(n: usize) -> String {
    format!("keyword{n}")
}

/// Sub-fields of one author slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorField {
    Fullname,
    Initials,
    Surname,
    Editor,
    Organization,
    Street,
    City,
    Region,
    Code,
    Country,
    Phone,
    Facsimile,
    Email,
    Uri,
}

impl AuthorField {
    /// Every sub-field, in form order.
    pub const ALL: [Self; 14] = [
        Self::Fullname,
        Self::Initials,
        Self::Surname,
        Self::Editor,
        Self::Organization,
        Self::Street,
        Self::City,
        Self::Region,
        Self::Code,
        Self::Country,
        Self::Phone,
        Self::Facsimile,
        Self::Email,
        Self::Uri,
    ];

    /// Postal address sub-fields, in emission order.
    pub const POSTAL: [Self; 5] = [
        Self::Street,
        Self::City,
        Self::Region,
        Self::Code,
        Self::Country,
    ];

    /// The field-name suffix, which doubles as the xml2rfc element name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullname => "fullname",
            Self::Initials => "initials",
            Self::Surname => "surname",
            Self::Editor => "editor",
            Self::Organization => "organization",
            Self::Street => "street",
            Self::City => "city",
            Self::Region => "region",
            Self::Code => "code",
            Self::Country => "country",
            Self::Phone => "phone",
            Self::Facsimile => "facsimile",
            Self::Email => "email",
            Self::Uri => "uri",
        }
    }
}

impl std::fmt::Display for AuthorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown author field '{s}'"))
    }
}

/// Formatting options, each emitted as an `<?rfc name="value"?>` PI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOption {
    Toc,
    TocDepth,
    SymRefs,
    SortRefs,
    Compact,
    Subcompact,
}

impl FormatOption {
    /// The form field name, which is also the PI attribute name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Toc => "toc",
            Self::TocDepth => "tocdepth",
            Self::SymRefs => "symrefs",
            Self::SortRefs => "sortrefs",
            Self::Compact => "compact",
            Self::Subcompact => "subcompact",
        }
    }
}
