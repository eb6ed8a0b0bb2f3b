//! Scripted wizard sessions.
//!
//! A script is a YAML list of user actions replayed against a
//! [`WizardSession`]:
//!
//! ```yaml
//! steps:
//!   - action: set
//!     fields:
//!       idtitle: My Protocol
//!       filename: my-protocol
//!   - action: advance
//!   - action: jump
//!     page: title
//!   - action: retreat
//! ```
//!
//! A blocked advance does not stop the replay. It is recorded as a notice,
//! the way the form alerts the user and leaves them on the page.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::form::FormState;
use crate::wizard::{Page, WizardSession};

/// A sequence of user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionScript {
    pub steps: Vec<Step>,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Type values into fields.
    Set { fields: FormState },
    /// Press "next".
    Advance,
    /// Press "previous".
    Retreat,
    /// Pick a page from the menu.
    Jump { page: Page },
}

/// A blocked transition surfaced to the user during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// 0-based index of the step that raised it.
    pub step: usize,
    /// Page the user was kept on.
    pub page: Page,
    /// Offending field, when the failure was a required-field check.
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Notice {
    fn from_error(step: usize, page: Page, error: &WizardError) -> Self {
        let field = match error {
            WizardError::MissingRequired { field, .. } => Some(field.clone()),
            _ => None,
        };
        Self {
            step,
            page,
            field,
            message: error.to_string(),
        }
    }
}

/// Replays `script` against `session`, returning the notices raised.
pub fn replay(session: &mut WizardSession, script: &SessionScript) -> Vec<Notice> {
    let mut notices = Vec::new();
    for (index, step) in script.steps.iter().enumerate() {
        match step {
            Step::Set { fields } => session.set_fields(fields),
            Step::Advance => {
                let page = session.position().current_page();
                if let Err(e) = session.advance() {
                    notices.push(Notice::from_error(index, page, &e));
                }
            }
            Step::Retreat => {
                session.retreat();
            }
            Step::Jump { page } => {
                session.jump_to(*page);
            }
        }
    }
    notices
}
