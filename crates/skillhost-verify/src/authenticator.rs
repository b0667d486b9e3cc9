// crates/skillhost-verify/src/authenticator.rs
// ============================================================================
// Module: Skillhost Request Authenticator
// Description: Timestamp freshness and application identity checks.
// Purpose: Apply the stateless business checks after authenticity.
// Dependencies: skillhost-core, time
// ============================================================================

//! ## Overview
//! Once authenticity is established (or explicitly skipped in dev/test
//! mode), two stateless checks remain: the embedded request timestamp must
//! lie within a configured tolerance of current time, and the application
//! identity in the request context must equal the statically configured
//! identity for this skill. Failures here are client faults surfaced with a
//! human-readable reason, unlike authenticity failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use skillhost_core::CommonRequest;
use skillhost_core::RequestEnvelope;
use thiserror::Error;
use time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default freshness tolerance for request timestamps.
pub const DEFAULT_TIMESTAMP_TOLERANCE: Duration = Duration::seconds(150);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Business validation failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling and carry the
///   human-readable reason surfaced to the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request timestamp is missing or not an RFC 3339 instant.
    #[error("request timestamp missing or unparseable: {0}")]
    InvalidTimestamp(String),
    /// The request timestamp lies outside the freshness window.
    #[error("request too old to continue (>{tolerance_seconds}s)")]
    StaleRequest {
        /// Configured tolerance in whole seconds.
        tolerance_seconds: i64,
    },
    /// The declared application identity does not match this skill.
    #[error("application id mismatch, got: {got}")]
    ApplicationMismatch {
        /// Application identity found in the request context.
        got: String,
    },
}

// ============================================================================
// SECTION: Request Authenticator
// ============================================================================

/// Applies timestamp freshness and application identity checks.
///
/// # Invariants
/// - Configuration is read-only after construction; the authenticator holds
///   no per-request state.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    /// Application identity configured for this skill.
    application_id: String,
    /// Freshness tolerance for request timestamps.
    tolerance: Duration,
}

impl RequestAuthenticator {
    /// Creates an authenticator for the given application identity with the
    /// default freshness tolerance.
    #[must_use]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            tolerance: DEFAULT_TIMESTAMP_TOLERANCE,
        }
    }

    /// Replaces the freshness tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Verifies the envelope against current time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the timestamp is stale or the
    /// application identity does not match.
    pub fn verify(&self, envelope: &RequestEnvelope) -> Result<(), ValidationError> {
        self.verify_at(envelope, OffsetDateTime::now_utc())
    }

    /// Verifies the envelope against an explicit instant.
    ///
    /// The timestamp check uses the absolute distance from `now`, so modest
    /// clock skew in either direction stays within the tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the timestamp is missing, stale, or
    /// the application identity does not match.
    pub fn verify_at(
        &self,
        envelope: &RequestEnvelope,
        now: OffsetDateTime,
    ) -> Result<(), ValidationError> {
        let common: CommonRequest = envelope
            .typed_request()
            .map_err(|err| ValidationError::InvalidTimestamp(err.to_string()))?;
        let timestamp = OffsetDateTime::parse(&common.timestamp, &Rfc3339)
            .map_err(|_| ValidationError::InvalidTimestamp(common.timestamp.clone()))?;
        if (now - timestamp).abs() > self.tolerance {
            return Err(ValidationError::StaleRequest {
                tolerance_seconds: self.tolerance.whole_seconds(),
            });
        }

        let got = &envelope.context.system.application.application_id;
        if *got != self.application_id {
            return Err(ValidationError::ApplicationMismatch {
                got: got.clone(),
            });
        }
        Ok(())
    }
}
