//! `draftwizard` - incremental xml2rfc Internet-Draft generator
//!
//! A multi-page form collects the metadata of an Internet-Draft (title,
//! authors, abstract, references, formatting options). After every page
//! transition the complete xml2rfc v2 source is regenerated from the form,
//! including only the parts for pages the user has reached so far.
//!
//! - [`form`]: raw field storage and the trimming/escaping accessor
//! - [`wizard`]: pages, the position state machine and required fields
//! - [`document`]: the pure document generator
//! - [`submit`]: preview and submission to a processing endpoint

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod observability;
pub mod submit;
pub mod wizard;
