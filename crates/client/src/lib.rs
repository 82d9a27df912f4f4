//! HTTP submission of validation requests to a DSS-style web service.
//!
//! The client owns no decision logic: it posts one JSON request, maps the
//! transport outcome onto the error taxonomy, and hands the raw report
//! back to `sigtrust-core` for interpretation.

use sigtrust_core::{ValidationReport, ValidationRequest};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Endpoint configuration, passed in at construction so tests can point
/// the client at a stub service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the validation endpoint,
    /// e.g. `http://localhost:8080/services/rest/validation/validateSignature`.
    pub endpoint: String,
    /// Optional whole-request deadline. Off by default: signed documents
    /// can be large and the service imposes no size ceiling.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(
        "cannot reach the validation service at {endpoint}; \
         make sure the DSS web service is running there"
    )]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-2xx response; `body` is the service's error payload, verbatim.
    #[error("validation service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },
    #[error("transport failure talking to the validation service")]
    Transport(#[source] reqwest::Error),
}

pub struct ValidationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ValidationClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Transport)?;
        Ok(Self { http, config })
    }

    /// Posts one request and returns the raw report on a 2xx response.
    /// Single shot: a failed attempt is never retried.
    pub async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationReport, ClientError> {
        debug!(
            endpoint = %self.config.endpoint,
            document = %request.signed_document.name,
            "submitting validation request"
        );

        let response = self
            .http
            .post(self.config.endpoint.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(ClientError::Transport)?;
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "validation response received");
        response
            .json::<ValidationReport>()
            .await
            .map_err(ClientError::Transport)
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() {
            ClientError::Connection {
                endpoint: self.config.endpoint.clone(),
                source: err,
            }
        } else {
            ClientError::Transport(err)
        }
    }
}
