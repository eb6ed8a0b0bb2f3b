//! Wizard state machine.
//!
//! Seven fixed pages are visited in order. Moving forward checks the
//! required fields of the page being left; moving back or jumping through
//! the menu never does. [`WizardPosition`] is immutable and every
//! transition returns a new value. [`WizardSession`] ties it to a form and
//! keeps the generated document current.

pub mod page;
pub mod position;
pub mod required;
pub mod script;
pub mod session;

pub use page::Page;
pub use position::WizardPosition;
pub use required::{RequiredFields, SHORT_TITLE_THRESHOLD};
pub use script::{Notice, SessionScript, Step, replay};
pub use session::WizardSession;
