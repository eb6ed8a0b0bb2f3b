//! `submit`: post the generated document to the processing endpoint.

use std::path::Path;

use crate::cli::args::SubmitArgs;
use crate::cli::commands::{load_config, load_form};
use crate::document::generate;
use crate::error::DraftWizardError;
use crate::submit::Submission;

/// Generate the document and post it, printing the endpoint's response.
///
/// With `--dry-run` the request line and body are printed instead.
///
/// # Errors
///
/// Returns a loading error, or a [`crate::error::SubmitError`] if the
/// document is empty or the request fails.
pub async fn run(args: &SubmitArgs, config_path: Option<&Path>) -> Result<(), DraftWizardError> {
    let config = load_config(config_path)?;
    let form = load_form(&args.form)?;
    let endpoint = args.endpoint.as_deref().unwrap_or(&config.submit.endpoint);

    let document = generate(&form, args.reached, &config.generate_options(args.year));
    let submission = Submission::build(&form, &document, endpoint);

    if args.dry_run {
        println!("{} {}", submission.method, submission.action);
        println!();
        print!("{}", submission.xml);
        return Ok(());
    }

    let client = reqwest::Client::new();
    let body = submission.send(&client).await?;
    print!("{body}");
    Ok(())
}
