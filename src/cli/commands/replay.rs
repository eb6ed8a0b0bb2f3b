//! `replay`: run a scripted wizard session.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ReplayArgs};
use crate::cli::commands::{load_config, load_form};
use crate::config::ConfigLoader;
use crate::error::DraftWizardError;
use crate::form::FormState;
use crate::wizard::{Notice, WizardPosition, WizardSession, replay};

#[derive(Serialize)]
struct ReplayOutput<'a> {
    position: WizardPosition,
    doc_name: String,
    document: &'a str,
    notices: &'a [Notice],
}

/// Replay `--script` and print the final document.
///
/// Blocked advances are reported, not fatal: the human format lists them
/// on stderr, the JSON format includes them in the output.
///
/// # Errors
///
/// Returns an error if the configuration, form or script cannot be loaded.
pub fn run(args: &ReplayArgs, config_path: Option<&Path>) -> Result<(), DraftWizardError> {
    let config = load_config(config_path)?;
    let form = match &args.form {
        Some(path) => load_form(path)?,
        None => FormState::new(),
    };
    let script = ConfigLoader::with_defaults().load_script(&args.script)?;
    tracing::info!(steps = script.steps.len(), "replaying session");

    let options = config.generate_options(args.year);
    let mut session = WizardSession::new(form, config.required, options);
    let notices = replay(&mut session, &script);

    match args.format {
        OutputFormat::Human => {
            for notice in &notices {
                eprintln!("notice: step {}: {}", notice.step + 1, notice.message);
            }
            print!("{}", session.document());
        }
        OutputFormat::Json => {
            let output = ReplayOutput {
                position: session.position(),
                doc_name: session.doc_name(),
                document: session.document(),
                notices: &notices,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
