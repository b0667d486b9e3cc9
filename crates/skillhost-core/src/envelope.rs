// crates/skillhost-core/src/envelope.rs
// ============================================================================
// Module: Skillhost Request Envelope
// Description: Top-level inbound message and its session/context records.
// Purpose: Represent the wire JSON losslessly and re-project typed requests.
// Dependencies: serde, serde_json, crate::request
// ============================================================================

//! ## Overview
//! The request envelope wraps every inbound call: a protocol version, an
//! optional conversation [`Session`], a generic request body, and a
//! [`Context`] snapshot of device and platform state. The request body is
//! kept as a generic JSON value; [`RequestEnvelope::typed_request`]
//! re-projects it into a concrete request kind on demand and back-fills the
//! envelope-level session and context onto the projected value so callback
//! code needs no back-reference to the envelope.
//!
//! Security posture: envelope contents are untrusted until the transport
//! layer has authenticated the request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::request::CommonRequest;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Envelope projection errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The generic request body could not be decoded into the target shape.
    #[error("request projection failed: {0}")]
    Projection(String),
}

// ============================================================================
// SECTION: Request Envelope
// ============================================================================

/// Top-level inbound message decoded from the wire body.
///
/// # Invariants
/// - `request` always carries at least the [`CommonRequest`] fields
///   (`type`, `requestId`, `timestamp`, `locale`).
/// - The envelope is decoded once per call and treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Protocol version declared by the platform.
    pub version: String,
    /// Conversation session; absent for session-less request kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    /// Generic request body whose concrete shape depends on its `type` field.
    pub request: Value,
    /// Device and platform state at request time.
    #[serde(default)]
    pub context: Context,
}

impl RequestEnvelope {
    /// Re-projects the generic request body into a concrete request kind.
    ///
    /// The generic body is re-encoded and decoded into the target shape;
    /// the envelope-level session and context are then copied onto the
    /// projected value. Narrowing drops fields the target shape does not
    /// declare.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Projection`] when the body cannot be decoded
    /// into the target shape.
    pub fn typed_request<T>(&self) -> Result<T, EnvelopeError>
    where
        T: FromEnvelope,
    {
        let mut typed: T = serde_json::from_value(self.request.clone())
            .map_err(|err| EnvelopeError::Projection(err.to_string()))?;
        let common = typed.common_mut();
        common.session = self.session.clone();
        common.context = Some(self.context.clone());
        Ok(typed)
    }

    /// Returns a copy of the inbound session attributes, or an empty map for
    /// session-less requests.
    #[must_use]
    pub fn session_attributes(&self) -> Map<String, Value> {
        self.session.as_ref().map(|session| session.attributes.clone()).unwrap_or_default()
    }
}

/// Concrete request shapes that can be projected out of an envelope.
///
/// Implementors expose their embedded [`CommonRequest`] so the projection
/// can back-fill the envelope-level session and context.
pub trait FromEnvelope: DeserializeOwned {
    /// Returns the embedded common request fields for back-filling.
    fn common_mut(&mut self) -> &mut CommonRequest;
}

// ============================================================================
// SECTION: Session
// ============================================================================

/// Conversation state scoped to one multi-turn dialog.
///
/// # Invariants
/// - `attributes` is the only state carried across turns; it is returned to
///   the platform verbatim (plus callback mutations) in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first turn of a session.
    #[serde(default)]
    pub new: bool,
    /// Session identifier.
    #[serde(default)]
    pub session_id: String,
    /// Free-form key/value state round-tripped by the platform.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Application identity holder.
    #[serde(default)]
    pub application: Application,
    /// User identity and optional access token.
    #[serde(default)]
    pub user: User,
}

/// Holder of the skill's application identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application identifier assigned by the platform.
    #[serde(default)]
    pub application_id: String,
}

/// Opaque user identity with an optional linked-account token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user identifier.
    #[serde(default)]
    pub user_id: String,
    /// OAuth-style access token when account linking is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

// ============================================================================
// SECTION: Context
// ============================================================================

/// Snapshot of platform and device facts at request time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Platform service state and device identity.
    #[serde(default)]
    pub system: System,
    /// Audio playback state when the device supports it.
    #[serde(default)]
    pub audio_player: AudioPlayerState,
}

/// Platform service state for the requesting device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    /// Bearer token for calling back into platform services.
    #[serde(default)]
    pub api_access_token: String,
    /// Base endpoint for platform service calls.
    #[serde(default)]
    pub api_endpoint: String,
    /// Application identity as seen by the platform.
    #[serde(default)]
    pub application: Application,
    /// Requesting device identity and capabilities.
    #[serde(default)]
    pub device: Device,
    /// User identity as seen by the platform.
    #[serde(default)]
    pub user: User,
}

/// Requesting device identity and declared capability set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device identifier.
    #[serde(default)]
    pub device_id: String,
    /// Declared capability interfaces, keyed by interface name.
    #[serde(default)]
    pub supported_interfaces: Map<String, Value>,
}

/// Audio playback state carried in the request context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    /// Token of the current stream, when any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Playback offset in milliseconds.
    #[serde(default)]
    pub offset_in_milliseconds: i64,
    /// Player activity (for example `IDLE`, `PLAYING`, `STOPPED`).
    #[serde(default)]
    pub player_activity: String,
}
