//! Preview and submission of the generated document.
//!
//! The preview is the escaped document text for display. A submission
//! carries the raw text to an external processing endpoint as a form POST,
//! addressed by the normalised document name.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::document::doc_name;
use crate::error::SubmitError;
use crate::form::{FormState, escape_html, keys};

/// Default processing endpoint; the document is posted to
/// `<endpoint>/<docName>.xml`.
pub const DEFAULT_ENDPOINT: &str = "http://localhost/cgi-bin/echoXml.cgi";

/// Form field carrying the raw document in a submission.
pub const XML_FIELD: &str = "xml";

/// Timeout for the submission request.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Escaped document text for a display surface.
#[must_use]
pub fn preview(document: &str) -> String {
    escape_html(document)
}

/// A ready-to-send form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// HTTP method (always `POST`).
    pub method: &'static str,
    /// `<docName>.xml`
    pub file_name: String,
    /// Full target URL.
    pub action: String,
    /// Raw, unescaped document text.
    pub xml: String,
}

impl Submission {
    /// Builds the submission for `document`, named after the form's
    /// filename field.
    #[must_use]
    pub fn build(form: &FormState, document: &str, endpoint: &str) -> Self {
        let file_name = format!("{}.xml", doc_name(form.read(keys::FILENAME)));
        let action = format!("{}/{file_name}", endpoint.trim_end_matches('/'));
        Self {
            method: "POST",
            file_name,
            action,
            xml: document.to_string(),
        }
    }

    /// Posts the document as `application/x-www-form-urlencoded` and returns
    /// the response body.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::EmptyDocument`] if there is nothing to send
    /// - [`SubmitError::Request`] on connection or body-read failure
    /// - [`SubmitError::Status`] if the endpoint answers with a non-2xx status
    pub async fn send(&self, client: &reqwest::Client) -> Result<String, SubmitError> {
        if self.xml.is_empty() {
            return Err(SubmitError::EmptyDocument);
        }

        debug!(action = %self.action, bytes = self.xml.len(), "submitting document");
        let response = client
            .post(&self.action)
            .timeout(SUBMIT_TIMEOUT)
            .form(&[(XML_FIELD, self.xml.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(file = %self.file_name, status = status.as_u16(), "document submitted");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_escapes_markup() {
        let out = preview("<rfc>\n</rfc>\n");
        assert_eq!(out, "&lt;rfc&gt;<br/>&lt;/rfc&gt;<br/>");
    }

    #[test]
    fn test_build_uses_normalized_name() {
        let form = FormState::new().with("filename", "my-proto");
        let sub = Submission::build(&form, "<rfc/>", "http://example.org/cgi-bin/echo.cgi/");
        assert_eq!(sub.method, "POST");
        assert_eq!(sub.file_name, "draft-my-proto-00.xml");
        assert_eq!(
            sub.action,
            "http://example.org/cgi-bin/echo.cgi/draft-my-proto-00.xml"
        );
        assert_eq!(sub.xml, "<rfc/>");
    }

    #[test]
    fn test_build_without_filename() {
        let sub = Submission::build(&FormState::new(), "x", DEFAULT_ENDPOINT);
        assert_eq!(sub.file_name, "unknown.xml");
    }

    #[test]
    fn test_body_is_raw() {
        let doc = "<t>a & b</t>";
        let sub = Submission::build(&FormState::new(), doc, DEFAULT_ENDPOINT);
        assert_eq!(sub.xml, doc);
    }

    #[tokio::test]
    async fn test_send_rejects_empty_document() {
        let sub = Submission::build(&FormState::new(), "", DEFAULT_ENDPOINT);
        let err = sub.send(&reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(err, SubmitError::EmptyDocument));
    }

    #[tokio::test]
    async fn test_send_connection_failure_is_request_error() {
        let sub = Submission::build(&FormState::sample(), "<rfc/>", "http://127.0.0.1:9");
        let err = sub.send(&reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Request(_)));
    }
}
