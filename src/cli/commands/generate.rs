//! `generate`: render the document for a form as seen from a page.

use std::path::Path;

use crate::cli::args::GenerateArgs;
use crate::cli::commands::{load_config, load_form, write_output};
use crate::document::generate;
use crate::error::DraftWizardError;
use crate::submit::preview;

/// Generate the document and write it to stdout or `--output`.
///
/// # Errors
///
/// Returns an error if the configuration or form cannot be loaded, or the
/// output cannot be written.
pub fn run(args: &GenerateArgs, config_path: Option<&Path>) -> Result<(), DraftWizardError> {
    let config = load_config(config_path)?;
    let form = load_form(&args.form)?;
    let options = config.generate_options(args.year);

    let document = generate(&form, args.reached, &options);
    if document.is_empty() {
        tracing::warn!(reached = %args.reached, "nothing to generate before leaving the intro page");
    }

    let text = if args.preview {
        preview(&document)
    } else {
        document
    };
    write_output(args.output.as_deref(), &text)
}
