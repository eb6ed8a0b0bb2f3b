//! `check`: run the required-field check for leaving a page.

use std::path::Path;

use crate::cli::args::CheckArgs;
use crate::cli::commands::{load_config, load_form};
use crate::error::DraftWizardError;

/// Check the form against the required fields of `--page`.
///
/// # Errors
///
/// Returns [`crate::error::WizardError::MissingRequired`] naming the first
/// empty required field, or a loading error.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> Result<(), DraftWizardError> {
    let config = load_config(config_path)?;
    let form = load_form(&args.form)?;

    config.required.check(args.page, &form)?;
    println!("{}: all required fields present", args.page);
    Ok(())
}
