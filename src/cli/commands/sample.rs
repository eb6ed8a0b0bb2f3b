//! `sample`: print an example form to start from.

use crate::cli::args::{DataFormat, SampleArgs};
use crate::error::DraftWizardError;
use crate::form::FormState;

/// Print the example form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(args: &SampleArgs) -> Result<(), DraftWizardError> {
    let form = FormState::sample();
    match args.format {
        DataFormat::Yaml => print!("{}", serde_yaml::to_string(&form)?),
        DataFormat::Json => println!("{}", serde_json::to_string_pretty(&form)?),
    }
    Ok(())
}
