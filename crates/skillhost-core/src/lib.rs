// crates/skillhost-core/src/lib.rs
// ============================================================================
// Module: Skillhost Core Library
// Description: Envelope model, typed request kinds, response builder, dispatch.
// Purpose: Map inbound voice-skill requests onto registered callbacks.
// Dependencies: serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! Skillhost Core models the wire envelopes exchanged with the voice
//! platform and routes each inbound request to the callback registered for
//! its kind. Invariants:
//! - A [`RequestEnvelope`] is decoded once per call and is read-only.
//! - A [`ResponseEnvelope`] is built fresh per call, seeded with the inbound
//!   session attributes, and mutated by exactly one callback invocation.
//! - Routing is total: every request type maps to exactly one kind or to a
//!   routing error carrying the offending type string.
//!
//! Security posture: envelope contents are untrusted until the transport
//! layer has authenticated the request; this crate performs no network or
//! crypto work of its own.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audio_player;
pub mod dialog;
pub mod directive;
pub mod display;
pub mod envelope;
pub mod gadget;
pub mod game_engine;
pub mod request;
pub mod response;
pub mod skill;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audio_player::AudioItem;
pub use audio_player::AudioItemMetadata;
pub use audio_player::AudioPlayerClearQueueDirective;
pub use audio_player::AudioPlayerPlayDirective;
pub use audio_player::AudioPlayerStream;
pub use dialog::DialogConfirmIntentDirective;
pub use dialog::DialogConfirmSlotDirective;
pub use dialog::DialogDelegateDirective;
pub use dialog::DialogElicitSlotDirective;
pub use directive::Directive;
pub use display::DisplayImage;
pub use display::DisplayListItem;
pub use display::DisplayRenderTemplateDirective;
pub use display::DisplayTemplate;
pub use display::DisplayText;
pub use display::DisplayTextContent;
pub use display::ImageSource;
pub use envelope::Application;
pub use envelope::AudioPlayerState;
pub use envelope::Context;
pub use envelope::Device;
pub use envelope::EnvelopeError;
pub use envelope::FromEnvelope;
pub use envelope::RequestEnvelope;
pub use envelope::Session;
pub use envelope::System;
pub use envelope::User;
pub use gadget::GadgetAnimation;
pub use gadget::GadgetAnimationStep;
pub use gadget::GadgetControllerSetLightDirective;
pub use gadget::GadgetParameters;
pub use gadget::GadgetTriggerEvent;
pub use gadget::rgb_to_hex;
pub use game_engine::GameEnginePattern;
pub use game_engine::GameEngineRecognizer;
pub use game_engine::GameEngineRegistrationEvent;
pub use game_engine::GameEngineStartInputHandlerDirective;
pub use game_engine::GameEngineStopInputHandlerDirective;
pub use request::AudioPlayerPlaybackFailedRequest;
pub use request::AudioPlayerRequest;
pub use request::CommonRequest;
pub use request::ExceptionCause;
pub use request::GadgetInputEvent;
pub use request::GameEngineInputHandlerEventRequest;
pub use request::InputHandlerEvent;
pub use request::Intent;
pub use request::IntentRequest;
pub use request::LaunchRequest;
pub use request::PlaybackError;
pub use request::PlaybackState;
pub use request::RequestKind;
pub use request::SessionEndedRequest;
pub use request::Slot;
pub use request::SystemError;
pub use request::SystemExceptionEncounteredRequest;
pub use response::Card;
pub use response::CardImage;
pub use response::OutputSpeech;
pub use response::PROTOCOL_VERSION;
pub use response::Reprompt;
pub use response::Response;
pub use response::ResponseEnvelope;
pub use skill::DispatchError;
pub use skill::RequestHandler;
pub use skill::Skill;
