//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod generate;
pub mod replay;
pub mod sample;
pub mod submit;
pub mod version;

use std::io::Write;
use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{ConfigLoader, WizardConfig};
use crate::error::DraftWizardError;
use crate::form::FormState;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), DraftWizardError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Generate(args) => generate::run(&args, config_path),
        Commands::Check(args) => check::run(&args, config_path),
        Commands::Replay(args) => replay::run(&args, config_path),
        Commands::Submit(args) => submit::run(&args, config_path).await,
        Commands::Sample(args) => sample::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

/// Loads the configuration (or defaults) and logs its warnings.
pub(crate) fn load_config(path: Option<&Path>) -> Result<WizardConfig, DraftWizardError> {
    if let Some(path) = path {
        tracing::info!(config = %path.display(), "loading configuration");
    }
    let load_result = ConfigLoader::with_defaults().load_or_default(path)?;

    for warning in &load_result.warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}",
            warning.message
        );
    }

    Ok(load_result.config)
}

/// Loads a form file.
pub(crate) fn load_form(path: &Path) -> Result<FormState, DraftWizardError> {
    tracing::info!(form = %path.display(), "loading form");
    let form = ConfigLoader::with_defaults().load_form(path)?;
    tracing::debug!(fields = form.len(), "form loaded");
    Ok(form)
}

/// Writes `text` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, text: &str) -> Result<(), DraftWizardError> {
    match path {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(output = %path.display(), bytes = text.len(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
