//! In-memory model of a draft document.
//!
//! [`DraftDocument::build`] reads everything the serializer needs from the
//! form in one pass. Each page-gated part is a [`Section`], so the
//! "placeholder or real content" decision is made once, here, rather than
//! at every line of output.

use crate::document::author::AuthorRecord;
use crate::document::naming::doc_name;
use crate::document::references::ReferenceList;
use crate::document::section::Section;
use crate::form::{FormState, FormatOption, MAX_KEYWORDS, keys};
use crate::wizard::Page;

const UNKNOWN: &str = "unknown";
const ABSTRACT_PLACEHOLDER: &str = "not yet specified";

/// Everything the serializer emits, gated by the highest page reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDocument {
    /// References page: entity declarations, xrefs and back matter.
    pub references: Section<ReferenceList>,
    /// Options page: formatting processing instructions.
    pub formatting: Section<FormattingOptions>,
    /// Title page onwards: the `<rfc>` element.
    pub rfc: Section<RfcElement>,
}

/// Values of the `<?rfc ...?>` formatting PIs, as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOptions {
    pub toc: String,
    pub tocdepth: String,
    pub symrefs: String,
    pub sortrefs: String,
    pub compact: String,
    pub subcompact: String,
}

/// The root element and its front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfcElement {
    pub category: String,
    pub doc_name: String,
    pub ipr: String,
    pub updates: Option<String>,
    pub obsoletes: Option<String>,
    pub title: String,
    pub short_title: Option<String>,
    pub authors: Section<Vec<AuthorRecord>>,
    pub year: i32,
    pub area: Option<String>,
    pub workgroup: Option<String>,
    pub keywords_abstract: Section<KeywordsAbstract>,
}

/// Keyword slots (blank ones kept, they render as placeholders) and the
/// abstract text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordsAbstract {
    pub keywords: Vec<Option<String>>,
    pub abstract_text: String,
}

impl DraftDocument {
    /// Reads the form as seen with `max_page_reached` as the high-water mark.
    #[must_use]
    pub fn build(form: &FormState, max_page_reached: Page, year: i32) -> Self {
        Self {
            references: Section::gate(max_page_reached, Page::References, || {
                ReferenceList::from_form(form)
            }),
            formatting: Section::gate(max_page_reached, Page::Options, || {
                FormattingOptions::from_form(form)
            }),
            rfc: Section::gate(max_page_reached, Page::Title, || {
                RfcElement::from_form(form, max_page_reached, year)
            }),
        }
    }
}

impl FormattingOptions {
    fn from_form(form: &FormState) -> Self {
        let value = |opt: FormatOption| form.read_display(opt.key(), None);
        Self {
            toc: value(FormatOption::Toc),
            tocdepth: value(FormatOption::TocDepth),
            symrefs: value(FormatOption::SymRefs),
            sortrefs: value(FormatOption::SortRefs),
            compact: value(FormatOption::Compact),
            subcompact: value(FormatOption::Subcompact),
        }
    }
}

impl RfcElement {
    fn from_form(form: &FormState, max_page_reached: Page, year: i32) -> Self {
        Self {
            category: form.read_display(keys::CATEGORY, Some(UNKNOWN)),
            doc_name: doc_name(form.read(keys::FILENAME)),
            ipr: form.read_display(keys::IPR, Some(UNKNOWN)),
            updates: form.read_optional(keys::UPDATES),
            obsoletes: form.read_optional(keys::OBSOLETES),
            title: form.read_display(keys::TITLE, None),
            short_title: form.read_optional(keys::SHORT_TITLE),
            authors: Section::gate(max_page_reached, Page::Author, || {
                AuthorRecord::all_from_form(form)
            }),
            year,
            area: form.read_optional(keys::AREA),
            workgroup: form.read_optional(keys::WORKGROUP),
            keywords_abstract: Section::gate(max_page_reached, Page::KeywordsAbstract, || {
                KeywordsAbstract {
                    keywords: (1..=MAX_KEYWORDS)
                        .map(|n| form.read_optional(&keys::keyword(n)))
                        .collect(),
                    abstract_text: form.read_display(keys::ABSTRACT, Some(ABSTRACT_PLACEHOLDER)),
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_page_only() {
        let form = FormState::sample();
        let doc = DraftDocument::build(&form, Page::Title, 2024);
        assert!(doc.references.visited().is_none());
        assert!(doc.formatting.visited().is_none());
        let rfc = doc.rfc.visited().unwrap();
        assert_eq!(rfc.doc_name, "draft-abc-00");
        assert!(rfc.authors.visited().is_none());
        assert!(rfc.keywords_abstract.visited().is_none());
    }

    #[test]
    fn test_everything_visited() {
        let form = FormState::sample();
        let doc = DraftDocument::build(&form, Page::Final, 2024);
        assert!(doc.references.visited().is_some());
        assert!(doc.formatting.visited().is_some());
        let rfc = doc.rfc.visited().unwrap();
        assert_eq!(rfc.authors.visited().map(Vec::len), Some(1));
        let ka = rfc.keywords_abstract.visited().unwrap();
        assert_eq!(ka.keywords.len(), MAX_KEYWORDS);
        assert_eq!(ka.abstract_text, "abc");
    }

    #[test]
    fn test_defaults() {
        let doc = DraftDocument::build(&FormState::new(), Page::Final, 2024);
        let rfc = doc.rfc.visited().unwrap();
        assert_eq!(rfc.category, "unknown");
        assert_eq!(rfc.ipr, "unknown");
        assert_eq!(rfc.doc_name, "unknown");
        assert_eq!(rfc.updates, None);
        assert_eq!(
            rfc.keywords_abstract.visited().unwrap().abstract_text,
            "not yet specified"
        );
    }

    #[test]
    fn test_formatting_values_read_as_entered() {
        let form = FormState::new().with("toc", "yes").with("tocdepth", "4");
        let doc = DraftDocument::build(&form, Page::Options, 2024);
        let fmt = doc.formatting.visited().unwrap();
        assert_eq!(fmt.toc, "yes");
        assert_eq!(fmt.tocdepth, "4");
        assert_eq!(fmt.compact, "");
    }
}
