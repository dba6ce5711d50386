use http::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::Config, core::util::AsyncHttpClient, credential::Credential,
    request::RequestDescriptor,
};

pub const CONNECTION_SUCCESSFUL: &str = "Connection successful!";
pub const INVALID_API_KEY: &str = "The API Key included in the request is invalid";

/// Longest response body, in characters, kept in [ProbeError::Status].
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Outcome of a credential probe, as reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ValidationResult {
    #[serde(rename = "OK")]
    Ok { message: String },
    Error { message: String },
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Ok { message } | Self::Error { message } => message,
        }
    }
}

impl From<Result<(), ProbeError>> for ValidationResult {
    /// Every failure maps to the same message, whatever its cause.
    fn from(outcome: Result<(), ProbeError>) -> Self {
        match outcome {
            Ok(()) => Self::Ok {
                message: CONNECTION_SUCCESSFUL.to_owned(),
            },
            Err(_) => Self::Error {
                message: INVALID_API_KEY.to_owned(),
            },
        }
    }
}

/// Why a probe failed.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The request could not be built from the credential.
    #[error("invalid probe request: {0:#}")]
    Request(anyhow::Error),

    /// No response was obtained.
    #[error("probe request failed: {0:#}")]
    Transport(anyhow::Error),

    /// The API answered with a non-success status. `body` is cut to
    /// [MAX_ERROR_BODY_CHARS].
    #[error("probe request was unsuccessful (status: {status}): {body}")]
    Status { status: StatusCode, body: String },
}

/// Checks BambooHR credentials by listing the company's employee directory.
#[derive(Debug, Clone)]
pub struct CredentialValidator<C> {
    client: C,
    config: Config,
}

impl<C: AsyncHttpClient + Sync> CredentialValidator<C> {
    pub fn new(client: C) -> Self {
        Self::with_config(client, Config::default())
    }

    pub fn with_config(client: C, config: Config) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Probes the API and reports the outcome. Never fails.
    pub async fn test_credential(&self, credential: &Credential) -> ValidationResult {
        let outcome = self.validate_credentials(credential).await;
        if let Err(e) = &outcome {
            warn!("credential probe for '{}' failed: {e}", credential.subdomain());
        }
        outcome.into()
    }

    /// Probes the API, keeping the cause of a failure.
    ///
    /// The response body of a successful probe is not inspected.
    pub async fn validate_credentials(&self, credential: &Credential) -> Result<(), ProbeError> {
        let descriptor = RequestDescriptor::employee_directory(&self.config.base, credential);
        debug!("probing {} {}", descriptor.method, descriptor.url);

        let request = descriptor
            .to_http_request()
            .map_err(ProbeError::Request)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ProbeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = truncate_body(response.body());
            return Err(ProbeError::Status { status, body });
        }

        debug!("credential probe succeeded (status: {status})");
        Ok(())
    }
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}... ({} bytes)", &text[..end], body.len()),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn result_serialization() {
        let ok = ValidationResult::from(Ok::<(), ProbeError>(()));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "status": "OK", "message": "Connection successful!" })
        );

        let error =
            ValidationResult::from(Err(ProbeError::Transport(anyhow::anyhow!("timed out"))));
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "status": "Error",
                "message": "The API Key included in the request is invalid"
            })
        );
    }

    #[test]
    fn every_failure_has_the_same_message() {
        let failures = [
            ProbeError::Request(anyhow::anyhow!("invalid uri character")),
            ProbeError::Transport(anyhow::anyhow!("dns error")),
            ProbeError::Status {
                status: StatusCode::UNAUTHORIZED,
                body: String::new(),
            },
            ProbeError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "oops".to_owned(),
            },
        ];

        for failure in failures {
            let result = ValidationResult::from(Err(failure));
            assert!(!result.is_ok());
            assert_eq!(result.message(), INVALID_API_KEY);
        }
    }

    #[test]
    fn long_bodies_are_truncated() {
        assert_eq!(truncate_body(b"denied"), "denied");

        let exact = "a".repeat(MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body(exact.as_bytes()), exact);

        let page = "é".repeat(10_000);
        let body = truncate_body(page.as_bytes());
        assert_eq!(
            body,
            format!("{}... (20000 bytes)", "é".repeat(MAX_ERROR_BODY_CHARS))
        );
    }

    #[test]
    fn error_display() {
        let e = ProbeError::Status {
            status: StatusCode::FORBIDDEN,
            body: "denied".to_owned(),
        };
        assert_eq!(
            e.to_string(),
            "probe request was unsuccessful (status: 403 Forbidden): denied"
        );
    }
}
