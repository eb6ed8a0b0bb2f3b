//! Version information display.

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::DraftWizardError;

/// Print version information in human or JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), DraftWizardError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => println!("{name} {version}"),
        OutputFormat::Json => {
            let info = serde_json::json!({ "name": name, "version": version });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
