// crates/skillhost-http/src/service.rs
// ============================================================================
// Module: Skillhost HTTP Service
// Description: Synchronous HTTP entry point around the dispatch core.
// Purpose: Authenticate, dispatch, and serialize one POST per request.
// Dependencies: skillhost-core, skillhost-verify, axum, tokio, serde_json
// ============================================================================

//! ## Overview
//! The HTTP service accepts a POST with a JSON body and the two trust
//! headers, runs the synchronous validate → dispatch → serialize core under
//! a blocking task, and maps outcomes onto status codes: 401 for any
//! authenticity failure, 400 for malformed bodies, stale or mismatched
//! requests, and unrecognized types, 200 with a JSON body on success, and
//! 500 when response serialization itself fails or a callback panics.
//!
//! The raw body bytes are verified before any JSON decoding, so the
//! signature covers exactly what was sent and the bytes stay available for
//! the decoder.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::post;
use skillhost_core::RequestEnvelope;
use skillhost_core::Skill;
use skillhost_verify::CertificateValidator;
use skillhost_verify::RequestAuthenticator;
use thiserror::Error;

use crate::config::SkillConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Header carrying the certificate chain URL.
const CERT_CHAIN_URL_HEADER: &str = "signaturecertchainurl";
/// Header carrying the base64 body signature.
const SIGNATURE_HEADER: &str = "signature";
/// Content type stamped onto successful JSON responses.
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
/// Content type stamped onto error responses.
const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Service construction and serving errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The certificate validator could not be constructed.
    #[error("service setup failed: {0}")]
    Setup(String),
    /// The listener could not be bound or the server failed.
    #[error("server io error: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Trust Headers
// ============================================================================

/// Raw trust header values accompanying a skill request.
///
/// # Invariants
/// - Values are untrusted until the certificate validator has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustHeaders {
    /// Declared certificate chain URL.
    pub cert_chain_url: Option<String>,
    /// Base64-encoded body signature.
    pub signature: Option<String>,
}

impl TrustHeaders {
    /// Extracts the trust headers from an HTTP header map.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            cert_chain_url: header_string(headers, CERT_CHAIN_URL_HEADER),
            signature: header_string(headers, SIGNATURE_HEADER),
        }
    }
}

/// Reads a header value as an owned string when present and valid.
fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_string)
}

// ============================================================================
// SECTION: Processed Response
// ============================================================================

/// Outcome of one validate → dispatch → serialize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedResponse {
    /// Status code for the transport reply.
    pub status: StatusCode,
    /// Content type for the transport reply.
    pub content_type: &'static str,
    /// Reply body.
    pub body: String,
}

impl ProcessedResponse {
    /// Builds a plain-text outcome.
    fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_CONTENT_TYPE,
            body: body.into(),
        }
    }

    /// Builds a successful JSON outcome.
    fn json(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: JSON_CONTENT_TYPE,
            body,
        }
    }
}

impl IntoResponse for ProcessedResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status, [(CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

// ============================================================================
// SECTION: Skill Service
// ============================================================================

/// Shared, read-only state behind a skill service.
struct ServiceInner {
    /// Callback table to dispatch into.
    skill: Skill,
    /// Process-wide configuration.
    config: SkillConfig,
    /// Certificate validator for the trust headers.
    validator: CertificateValidator,
    /// Timestamp and application identity checks.
    authenticator: RequestAuthenticator,
}

/// HTTP and serverless entry points around one configured skill.
///
/// # Invariants
/// - All state is read-only after construction; concurrent requests share
///   nothing mutable.
#[derive(Clone)]
pub struct SkillService {
    /// Shared service state.
    inner: Arc<ServiceInner>,
}

impl SkillService {
    /// Builds a service around the skill and its configuration.
    ///
    /// Construct the service before starting the async runtime: the
    /// validator owns a blocking HTTP client that must not be created
    /// inside an async context.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Setup`] when the certificate validator
    /// cannot be constructed.
    pub fn new(skill: Skill, config: SkillConfig) -> Result<Self, ServiceError> {
        let validator =
            CertificateValidator::new().map_err(|err| ServiceError::Setup(err.to_string()))?;
        let authenticator = RequestAuthenticator::new(config.application_id.clone())
            .with_tolerance(config.timestamp_tolerance);
        Ok(Self {
            inner: Arc::new(ServiceInner {
                skill,
                config,
                validator,
                authenticator,
            }),
        })
    }

    /// Returns the router exposing the skill at `POST /`.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new().route("/", post(handle_skill_request)).with_state(self.clone())
    }

    /// Binds the address and serves skill requests until the server stops.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Io`] when binding or serving fails.
    pub async fn serve(&self, addr: SocketAddr) -> Result<(), ServiceError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| ServiceError::Io(err.to_string()))?;
        tracing::info!(%addr, "serving skill requests");
        axum::serve(listener, self.router())
            .await
            .map_err(|err| ServiceError::Io(err.to_string()))
    }

    /// Runs the synchronous validate → dispatch → serialize core.
    ///
    /// This is the whole request pipeline; the async handler only moves it
    /// onto a blocking task.
    #[must_use]
    pub fn process(&self, headers: &TrustHeaders, body: &[u8]) -> ProcessedResponse {
        let inner = &self.inner;
        if !inner.config.skip_validation {
            let cert_url = headers.cert_chain_url.as_deref().unwrap_or_default();
            let signature = headers.signature.as_deref().unwrap_or_default();
            if let Err(err) = inner.validator.validate(cert_url, signature, body) {
                tracing::warn!(error = %err, "request authenticity check failed");
                return ProcessedResponse::text(StatusCode::UNAUTHORIZED, "Not Authorized");
            }
        }
        if inner.config.verbose {
            tracing::info!(body = %String::from_utf8_lossy(body), "inbound request");
        }

        let envelope: RequestEnvelope = match serde_json::from_slice(body) {
            Ok(envelope) => envelope,
            Err(err) => {
                return ProcessedResponse::text(
                    StatusCode::BAD_REQUEST,
                    format!("Bad Request: {err}"),
                );
            }
        };
        if !inner.config.skip_validation
            && let Err(err) = inner.authenticator.verify(&envelope)
        {
            tracing::warn!(error = %err, "request validation failed");
            return ProcessedResponse::text(StatusCode::BAD_REQUEST, err.to_string());
        }

        let response = match inner.skill.handle_request(&envelope) {
            Ok(response) => response,
            Err(err) => return ProcessedResponse::text(StatusCode::BAD_REQUEST, err.to_string()),
        };
        match serde_json::to_string(&response) {
            Ok(json) => {
                if inner.config.verbose {
                    tracing::info!(body = %json, "outbound response");
                }
                ProcessedResponse::json(json)
            }
            Err(err) => {
                tracing::error!(error = %err, "response serialization failed");
                ProcessedResponse::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }

    /// Returns the shared service state for sibling modules.
    pub(crate) fn parts(&self) -> (&Skill, &SkillConfig, &RequestAuthenticator) {
        (&self.inner.skill, &self.inner.config, &self.inner.authenticator)
    }
}

// ============================================================================
// SECTION: Handler
// ============================================================================

/// Axum handler bridging the async transport onto the blocking core.
async fn handle_skill_request(
    State(service): State<SkillService>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let trust = TrustHeaders::from_headers(&headers);
    let outcome = tokio::task::spawn_blocking(move || service.process(&trust, &body)).await;
    match outcome {
        Ok(processed) => processed.into_response(),
        Err(_) => {
            tracing::error!("skill request handling aborted");
            ProcessedResponse::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .into_response()
        }
    }
}
