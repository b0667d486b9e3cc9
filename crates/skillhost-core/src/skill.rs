// crates/skillhost-core/src/skill.rs
// ============================================================================
// Module: Skillhost Dispatch
// Description: Callback table and the typed request dispatcher.
// Purpose: Route one validated envelope to one registered callback.
// Dependencies: crate::{envelope, request, response}
// ============================================================================

//! ## Overview
//! A [`Skill`] holds one optional callback per request kind. Dispatch is a
//! pure function of (validated envelope, callback table) to (response,
//! error): the declared request type is classified, the generic body is
//! re-projected into the matching concrete shape, and the callback runs
//! synchronously against a response envelope seeded with the inbound
//! session attributes. An unset callback is a no-op, not an error; an
//! unrecognized type is a routing error carrying the offending string.
//!
//! The dispatcher retains no state across calls and does not guard against
//! a panicking callback; transport adapters decide how an unwound call
//! surfaces to their caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::envelope::EnvelopeError;
use crate::envelope::FromEnvelope;
use crate::envelope::RequestEnvelope;
use crate::request::AudioPlayerPlaybackFailedRequest;
use crate::request::AudioPlayerRequest;
use crate::request::CommonRequest;
use crate::request::GameEngineInputHandlerEventRequest;
use crate::request::IntentRequest;
use crate::request::LaunchRequest;
use crate::request::RequestKind;
use crate::request::SessionEndedRequest;
use crate::request::SystemExceptionEncounteredRequest;
use crate::response::ResponseEnvelope;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Dispatch errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The declared request type is outside the closed routing set.
    #[error("unrecognized request type: {0}")]
    UnrecognizedType(String),
    /// The request body could not be projected into the expected shape.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

// ============================================================================
// SECTION: Callback Table
// ============================================================================

/// Callback invoked with the concrete typed request and the mutable
/// response envelope.
pub type RequestHandler<T> = Box<dyn Fn(&T, &mut ResponseEnvelope) + Send + Sync>;

/// Callback table for skill execution, one optional slot per request kind.
///
/// # Invariants
/// - The table is read-only during dispatch; registration happens before
///   serving begins.
#[derive(Default)]
pub struct Skill {
    /// Callback for launch requests.
    on_launch: Option<RequestHandler<LaunchRequest>>,
    /// Callback for intent requests.
    on_intent: Option<RequestHandler<IntentRequest>>,
    /// Callback for session-ended requests.
    on_session_ended: Option<RequestHandler<SessionEndedRequest>>,
    /// Callback for audio player state notifications.
    on_audio_player_state: Option<RequestHandler<AudioPlayerRequest>>,
    /// Callback for audio playback failures.
    on_playback_failed: Option<RequestHandler<AudioPlayerPlaybackFailedRequest>>,
    /// Callback for game engine input handler events.
    on_game_engine_event: Option<RequestHandler<GameEngineInputHandlerEventRequest>>,
    /// Callback for platform exception notifications.
    on_system_exception: Option<RequestHandler<SystemExceptionEncounteredRequest>>,
}

impl Skill {
    /// Creates a skill with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the launch callback.
    #[must_use]
    pub fn on_launch(
        mut self,
        handler: impl Fn(&LaunchRequest, &mut ResponseEnvelope) + Send + Sync + 'static,
    ) -> Self {
        self.on_launch = Some(Box::new(handler));
        self
    }

    /// Registers the intent callback.
    #[must_use]
    pub fn on_intent(
        mut self,
        handler: impl Fn(&IntentRequest, &mut ResponseEnvelope) + Send + Sync + 'static,
    ) -> Self {
        self.on_intent = Some(Box::new(handler));
        self
    }

    /// Registers the session-ended callback.
    #[must_use]
    pub fn on_session_ended(
        mut self,
        handler: impl Fn(&SessionEndedRequest, &mut ResponseEnvelope) + Send + Sync + 'static,
    ) -> Self {
        self.on_session_ended = Some(Box::new(handler));
        self
    }

    /// Registers the audio player state callback.
    #[must_use]
    pub fn on_audio_player_state(
        mut self,
        handler: impl Fn(&AudioPlayerRequest, &mut ResponseEnvelope) + Send + Sync + 'static,
    ) -> Self {
        self.on_audio_player_state = Some(Box::new(handler));
        self
    }

    /// Registers the audio playback failure callback.
    #[must_use]
    pub fn on_playback_failed(
        mut self,
        handler: impl Fn(&AudioPlayerPlaybackFailedRequest, &mut ResponseEnvelope)
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.on_playback_failed = Some(Box::new(handler));
        self
    }

    /// Registers the game engine event callback.
    #[must_use]
    pub fn on_game_engine_event(
        mut self,
        handler: impl Fn(&GameEngineInputHandlerEventRequest, &mut ResponseEnvelope)
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.on_game_engine_event = Some(Box::new(handler));
        self
    }

    /// Registers the platform exception callback.
    #[must_use]
    pub fn on_system_exception(
        mut self,
        handler: impl Fn(&SystemExceptionEncounteredRequest, &mut ResponseEnvelope)
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.on_system_exception = Some(Box::new(handler));
        self
    }

    /// Routes a validated envelope to the callback registered for its kind.
    ///
    /// The response envelope is seeded with the inbound session attributes
    /// and returned even when no callback is registered for the kind.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnrecognizedType`] for a type outside the
    /// closed routing set, or [`DispatchError::Envelope`] when the body
    /// cannot be projected into the expected shape.
    pub fn handle_request(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, DispatchError> {
        let common: CommonRequest = envelope.typed_request()?;
        let mut response = ResponseEnvelope::new(envelope.session_attributes());

        let Some(kind) = RequestKind::classify(&common.request_type) else {
            return Err(DispatchError::UnrecognizedType(common.request_type));
        };
        match kind {
            RequestKind::Launch => invoke(self.on_launch.as_ref(), envelope, &mut response)?,
            RequestKind::Intent => invoke(self.on_intent.as_ref(), envelope, &mut response)?,
            RequestKind::SessionEnded => {
                invoke(self.on_session_ended.as_ref(), envelope, &mut response)?;
            }
            RequestKind::AudioPlayerPlaybackFailed => {
                invoke(self.on_playback_failed.as_ref(), envelope, &mut response)?;
            }
            RequestKind::AudioPlayerState => {
                invoke(self.on_audio_player_state.as_ref(), envelope, &mut response)?;
            }
            RequestKind::GameEngine => {
                invoke(self.on_game_engine_event.as_ref(), envelope, &mut response)?;
            }
            RequestKind::SystemException => {
                invoke(self.on_system_exception.as_ref(), envelope, &mut response)?;
            }
        }
        Ok(response)
    }
}

// ============================================================================
// SECTION: Dispatch Helpers
// ============================================================================

/// Projects the concrete request and runs the callback when one is set.
fn invoke<T>(
    handler: Option<&RequestHandler<T>>,
    envelope: &RequestEnvelope,
    response: &mut ResponseEnvelope,
) -> Result<(), DispatchError>
where
    T: FromEnvelope,
{
    if let Some(handler) = handler {
        let request: T = envelope.typed_request()?;
        handler(&request, response);
    }
    Ok(())
}
