//! Internet-Draft document names.
//!
//! The filename field is free text. The `docName` attribute and the
//! submission file name need a canonical `draft-<name>-NN` form.

use std::sync::LazyLock;

use regex::Regex;

/// Name used when no filename has been entered.
pub const UNKNOWN_DOC_NAME: &str = "unknown";

static REVISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[0-9]{2}$").expect("valid regex"));

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9.-]").expect("valid regex"));

/// Canonicalises a filename into a draft name.
///
/// 1. Prefix `draft-` unless already present
/// 2. Drop a trailing `.txt`
/// 3. Remove characters outside `[a-zA-Z0-9.-]`
/// 4. Append `-00` unless the name already ends in a two-digit revision
///
/// An empty input stays empty.
#[must_use]
pub fn normalize_doc_name(filename: &str) -> String {
    let filename = filename.trim();
    if filename.is_empty() {
        return String::new();
    }

    let mut name = if filename.starts_with("draft-") {
        filename.to_string()
    } else {
        format!("draft-{filename}")
    };
    if let Some(stripped) = name.strip_suffix(".txt") {
        name = stripped.to_string();
    }
    let mut name = INVALID_CHARS_RE.replace_all(&name, "").into_owned();
    if !REVISION_RE.is_match(&name) {
        name.push_str("-00");
    }
    name
}

/// Like [`normalize_doc_name`], but an empty filename yields `unknown`.
#[must_use]
pub fn doc_name(filename: &str) -> String {
    let name = normalize_doc_name(filename);
    if name.is_empty() {
        UNKNOWN_DOC_NAME.to_string()
    } else {
        name
    }
}
