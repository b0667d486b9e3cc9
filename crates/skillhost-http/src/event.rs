// crates/skillhost-http/src/event.rs
// ============================================================================
// Module: Skillhost Event Entry Point
// Description: Serverless invocation entry around the dispatch core.
// Purpose: Handle already-decoded events without transport trust headers.
// Dependencies: skillhost-core, skillhost-verify, serde_json
// ============================================================================

//! ## Overview
//! Serverless runtimes hand the skill an already-decoded event object: no
//! raw bytes, no headers, and trust established out-of-band by the hosting
//! platform, so certificate validation is bypassed at this entry point. The
//! timestamp and application identity checks still apply unless the
//! dev/test flag disables them. There is no status code concept here; the
//! caller receives either the populated response or an error value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use skillhost_core::DispatchError;
use skillhost_core::RequestEnvelope;
use skillhost_core::ResponseEnvelope;
use skillhost_verify::ValidationError;
use thiserror::Error;

use crate::service::SkillService;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Event entry point failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum EventError {
    /// The event object could not be decoded into a request envelope.
    #[error("event decode failed: {0}")]
    Decode(String),
    /// The request failed the freshness or identity checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request could not be routed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

// ============================================================================
// SECTION: Event Handling
// ============================================================================

impl SkillService {
    /// Handles one already-decoded event object.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] when the event cannot be decoded, fails the
    /// freshness or identity checks, or cannot be routed.
    pub fn handle_event(&self, event: &Value) -> Result<ResponseEnvelope, EventError> {
        let envelope: RequestEnvelope = serde_json::from_value(event.clone())
            .map_err(|err| EventError::Decode(err.to_string()))?;
        let (skill, config, authenticator) = self.parts();
        if config.verbose {
            tracing::info!(body = %event, "inbound event");
        }
        if !config.skip_validation {
            authenticator.verify(&envelope)?;
        }
        Ok(skill.handle_request(&envelope)?)
    }
}
