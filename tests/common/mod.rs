//! Shared integration-test harness for running the `draftwizard` binary
//! and locating fixture files.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs the `draftwizard` binary as a child process.
pub struct DraftWizard;

impl DraftWizard {
    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(args: &[&str]) -> Output {
        Self::run_with_env(args, &[])
    }

    /// Like [`run`](Self::run) with extra environment variables.
    ///
    /// Variables the binary reads are cleared first so the host
    /// environment cannot leak into the test.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
        let bin = env!("CARGO_BIN_EXE_draftwizard");
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .env_remove("DRAFTWIZARD_CONFIG")
            .env_remove("DRAFTWIZARD_ENDPOINT")
            .env_remove("DRAFTWIZARD_LOG_LEVEL")
            .env_remove("DRAFTWIZARD_MAX_CONFIG_SIZE")
            .env("NO_COLOR", "1");
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to spawn draftwizard")
    }

    /// Absolute path of a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// [`fixture_path`](Self::fixture_path) as an owned string argument.
    #[allow(clippy::missing_panics_doc)]
    pub fn fixture_arg(name: &str) -> String {
        Self::fixture_path(name)
            .to_str()
            .expect("non-UTF-8 fixture path")
            .to_string()
    }
}

/// Stdout of a finished process as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished process as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
