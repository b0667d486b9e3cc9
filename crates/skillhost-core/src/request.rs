// crates/skillhost-core/src/request.rs
// ============================================================================
// Module: Skillhost Request Kinds
// Description: Common request fields, concrete request kinds, and routing.
// Purpose: Give each inbound request type a strongly typed shape.
// Dependencies: serde, crate::envelope
// ============================================================================

//! ## Overview
//! Every inbound request shares the [`CommonRequest`] fields; each concrete
//! kind embeds them and adds its own payload. [`RequestKind::classify`] is
//! the single routing table: it maps a declared request type string onto
//! exactly one kind, with exact matches taking priority over prefix matches,
//! and `None` for anything outside the closed set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::Context;
use crate::envelope::FromEnvelope;
use crate::envelope::Session;

// ============================================================================
// SECTION: Common Request
// ============================================================================

/// Fields shared by every request kind.
///
/// # Invariants
/// - `session` and `context` are not on the wire inside the request body;
///   they are back-filled from the envelope during projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRequest {
    /// Declared request type discriminator.
    #[serde(rename = "type")]
    pub request_type: String,
    /// Request identifier.
    #[serde(default)]
    pub request_id: String,
    /// Request timestamp as an RFC 3339 string, kept lossless.
    #[serde(default)]
    pub timestamp: String,
    /// Locale of the spoken interaction.
    #[serde(default)]
    pub locale: String,
    /// Session copied from the envelope during projection.
    #[serde(skip)]
    pub session: Option<Session>,
    /// Context copied from the envelope during projection.
    #[serde(skip)]
    pub context: Option<Context>,
}

impl FromEnvelope for CommonRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        self
    }
}

// ============================================================================
// SECTION: Routing
// ============================================================================

/// Closed set of request kinds the dispatcher can route to.
///
/// # Invariants
/// - Classification is total and deterministic; exact matches win over
///   prefix matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Skill launched without an intent.
    Launch,
    /// Named intent invocation.
    Intent,
    /// Session terminated by the user or the platform.
    SessionEnded,
    /// Audio playback failed; carries the richer failure shape.
    AudioPlayerPlaybackFailed,
    /// Any other audio player state notification.
    AudioPlayerState,
    /// Game engine input handler event.
    GameEngine,
    /// Platform-side exception notification.
    SystemException,
}

impl RequestKind {
    /// Maps a declared request type string onto its kind.
    ///
    /// Returns `None` for any type outside the closed set; callers turn that
    /// into a routing error carrying the offending string.
    #[must_use]
    pub fn classify(request_type: &str) -> Option<Self> {
        match request_type {
            "LaunchRequest" => Some(Self::Launch),
            "IntentRequest" => Some(Self::Intent),
            "SessionEndedRequest" => Some(Self::SessionEnded),
            "AudioPlayer.PlaybackFailed" => Some(Self::AudioPlayerPlaybackFailed),
            "System.ExceptionEncountered" => Some(Self::SystemException),
            other if other.starts_with("AudioPlayer.") => Some(Self::AudioPlayerState),
            other if other.starts_with("GameEngine.") => Some(Self::GameEngine),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Standard Request Kinds
// ============================================================================

/// Sent when a skill is started without a specific intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
}

impl FromEnvelope for LaunchRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

/// Sent when a named intent is invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// The invoked intent with its slots.
    #[serde(default)]
    pub intent: Intent,
    /// Dialog state (`STARTED`, `IN_PROGRESS`, or `COMPLETED`).
    #[serde(default)]
    pub dialog_state: String,
}

impl FromEnvelope for IntentRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

/// Named intent with its resolved slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Intent name.
    #[serde(default)]
    pub name: String,
    /// Slots keyed by slot name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: BTreeMap<String, Slot>,
    /// Confirmation status for the whole intent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub confirmation_status: String,
}

/// One named slot inside an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Slot name.
    #[serde(default)]
    pub name: String,
    /// Spoken or resolved slot value.
    #[serde(default)]
    pub value: String,
    /// Confirmation status for this slot.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub confirmation_status: String,
    /// Entity resolution payload, kept generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Value>,
}

/// Sent when a session is stopped or cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionEndedRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// Termination reason (for example `USER_INITIATED`, `ERROR`).
    #[serde(default)]
    pub reason: String,
    /// Error detail when the reason is an error, kept generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl FromEnvelope for SessionEndedRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

// ============================================================================
// SECTION: Audio Player Request Kinds
// ============================================================================

/// Playback state notification from the audio player interface.
///
/// # Invariants
/// - Audio player requests carry no session; responses to them may only
///   contain audio player directives or nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// Token of the stream the notification refers to.
    #[serde(default)]
    pub token: String,
    /// Playback offset in milliseconds.
    #[serde(default)]
    pub offset_in_milliseconds: i64,
}

impl FromEnvelope for AudioPlayerRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

/// Sent when the platform fails to play a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerPlaybackFailedRequest {
    /// Playback state fields shared with the generic notification.
    #[serde(flatten)]
    pub state: AudioPlayerRequest,
    /// Failure type and message.
    #[serde(default)]
    pub error: PlaybackError,
    /// Last known playback state before the failure.
    #[serde(default)]
    pub current_playback_state: PlaybackState,
}

impl FromEnvelope for AudioPlayerPlaybackFailedRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.state.common
    }
}

/// Playback failure detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackError {
    /// Failure type reported by the platform.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Human-readable failure message.
    #[serde(default)]
    pub message: String,
}

/// Last known playback state reported with a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Token of the stream that was playing.
    #[serde(default)]
    pub token: String,
    /// Playback offset in milliseconds.
    #[serde(default)]
    pub offset_in_milliseconds: i64,
    /// Player activity at failure time.
    #[serde(default)]
    pub player_activity: String,
}

// ============================================================================
// SECTION: Game Engine Request Kind
// ============================================================================

/// Sent by the game engine to notify the skill about gadget input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEngineInputHandlerEventRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// Identifier of the request that started the input handler.
    #[serde(default)]
    pub originating_request_id: String,
    /// Ordered list of named input handler events.
    #[serde(default)]
    pub events: Vec<InputHandlerEvent>,
}

impl FromEnvelope for GameEngineInputHandlerEventRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

/// One named event reported by the input handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputHandlerEvent {
    /// Name of the registration event that became true.
    #[serde(default)]
    pub name: String,
    /// Raw gadget inputs that satisfied the event.
    #[serde(default)]
    pub input_events: Vec<GadgetInputEvent>,
}

/// One raw gadget input inside an input handler event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetInputEvent {
    /// Identifier of the gadget that produced the input.
    #[serde(default)]
    pub gadget_id: String,
    /// Input timestamp as reported by the platform.
    #[serde(default)]
    pub timestamp: String,
    /// Action performed (for example `down`, `up`).
    #[serde(default)]
    pub action: String,
    /// Gadget color at input time.
    #[serde(default)]
    pub color: String,
    /// Gadget feature that produced the input.
    #[serde(default)]
    pub feature: String,
}

// ============================================================================
// SECTION: System Exception Request Kind
// ============================================================================

/// Sent when the platform encounters an error delivering a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemExceptionEncounteredRequest {
    /// Common request fields.
    #[serde(flatten)]
    pub common: CommonRequest,
    /// Error type and message.
    #[serde(default)]
    pub error: SystemError,
    /// Correlation to the request that caused the exception.
    #[serde(default)]
    pub cause: ExceptionCause,
}

impl FromEnvelope for SystemExceptionEncounteredRequest {
    fn common_mut(&mut self) -> &mut CommonRequest {
        &mut self.common
    }
}

/// Platform error detail carried by an exception notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemError {
    /// Error type reported by the platform.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

/// Correlation to the originating request of an exception.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCause {
    /// Identifier of the request that caused the exception.
    #[serde(default)]
    pub request_id: String,
}
