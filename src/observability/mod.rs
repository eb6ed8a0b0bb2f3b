//! Observability
//!
//! Structured logging for CLI runs. Wizard transitions, generation and
//! submission are reported as `tracing` events on stderr so stdout stays
//! free for document output.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
