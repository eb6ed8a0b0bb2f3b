//! `draftwizard` - xml2rfc Internet-Draft skeleton generator

use clap::Parser;

use draftwizard::cli::args::Cli;
use draftwizard::cli::commands;
use draftwizard::error::{ConfigError, DraftWizardError, ExitCode};
use draftwizard::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    tokio::spawn(async {
        let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        else {
            tracing::warn!("failed to register SIGTERM handler");
            return;
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
            _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
        }
    });

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            if let DraftWizardError::Config(ConfigError::ValidationError { errors, .. }) = &e {
                for issue in errors {
                    eprintln!("  {issue}");
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}
