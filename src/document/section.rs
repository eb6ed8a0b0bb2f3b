//! Page-gated document sections.

use crate::wizard::Page;

/// A part of the document whose content depends on a wizard page.
///
/// Until the page has been reached the section renders as an explanatory
/// placeholder (or nothing at all); afterwards it carries the data read
/// from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    /// The owning page has not been visited yet.
    NotYetVisited,
    /// The owning page has been visited; content built from the form.
    Visited(T),
}

impl<T> Section<T> {
    /// Builds the section content only if `page` is within reach.
    pub fn gate(max_page_reached: Page, page: Page, build: impl FnOnce() -> T) -> Self {
        if max_page_reached >= page {
            Self::Visited(build())
        } else {
            Self::NotYetVisited
        }
    }

    /// The content, if visited.
    #[must_use]
    pub const fn visited(&self) -> Option<&T> {
        match self {
            Self::Visited(content) => Some(content),
            Self::NotYetVisited => None,
        }
    }
}
