//! Wizard pages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// The seven wizard pages, in order.
///
/// The numeric value (1-based) is what the form UI uses for page ids and
/// what the high-water mark compares against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Intro = 1,
    Title = 2,
    Author = 3,
    #[serde(alias = "keywords_abstract")]
    KeywordsAbstract = 4,
    References = 5,
    Options = 6,
    Final = 7,
}

impl Page {
    /// All pages in wizard order.
    pub const ALL: [Self; 7] = [
        Self::Intro,
        Self::Title,
        Self::Author,
        Self::KeywordsAbstract,
        Self::References,
        Self::Options,
        Self::Final,
    ];

    /// First page of the wizard.
    pub const FIRST: Self = Self::Intro;

    /// 1-based page number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Page for a 1-based number.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.number() == n)
    }

    /// The following page, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding page, if any.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Title => "title",
            Self::Author => "author",
            Self::KeywordsAbstract => "keywords-abstract",
            Self::References => "references",
            Self::Options => "options",
            Self::Final => "final",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = WizardError;

    /// Accepts a page name (`keywords-abstract` or `keywords_abstract`,
    /// case-insensitive) or a page number `1`..`7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(n) = wanted.parse::<u8>() {
            return Self::from_number(n).ok_or_else(|| WizardError::UnknownPage(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| WizardError::UnknownPage(s.to_string()))
    }
}
