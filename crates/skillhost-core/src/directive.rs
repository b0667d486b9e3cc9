// crates/skillhost-core/src/directive.rs
// ============================================================================
// Module: Skillhost Directive Union
// Description: Closed union of platform directives behind one wire surface.
// Purpose: Let responses accumulate directives without inspecting them.
// Dependencies: serde, crate::{audio_player, dialog, display, gadget, game_engine}
// ============================================================================

//! ## Overview
//! Directives are opaque, independently serializable instructions appended
//! to a response. The dispatcher and response builder never inspect their
//! contents; they only accumulate them in call order and serialize them.
//! The wire discriminator is the `type` field carried by the tag.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::audio_player::AudioPlayerClearQueueDirective;
use crate::audio_player::AudioPlayerPlayDirective;
use crate::dialog::DialogConfirmIntentDirective;
use crate::dialog::DialogConfirmSlotDirective;
use crate::dialog::DialogDelegateDirective;
use crate::dialog::DialogElicitSlotDirective;
use crate::display::DisplayRenderTemplateDirective;
use crate::gadget::GadgetControllerSetLightDirective;
use crate::game_engine::GameEngineStartInputHandlerDirective;
use crate::game_engine::GameEngineStopInputHandlerDirective;

// ============================================================================
// SECTION: Directive Union
// ============================================================================

/// Closed set of directives a response can carry.
///
/// # Invariants
/// - Wire names are stable; the `type` tag is the only discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Start streaming an audio item.
    #[serde(rename = "AudioPlayer.Play")]
    AudioPlayerPlay(Box<AudioPlayerPlayDirective>),
    /// Stop the current audio playback.
    #[serde(rename = "AudioPlayer.Stop")]
    AudioPlayerStop,
    /// Clear the audio playback queue.
    #[serde(rename = "AudioPlayer.ClearQueue")]
    AudioPlayerClearQueue(AudioPlayerClearQueueDirective),
    /// Delegate the next dialog turn to the platform.
    #[serde(rename = "Dialog.Delegate")]
    DialogDelegate(DialogDelegateDirective),
    /// Ask the user for a specific slot value.
    #[serde(rename = "Dialog.ElicitSlot")]
    DialogElicitSlot(DialogElicitSlotDirective),
    /// Confirm a specific slot value with the user.
    #[serde(rename = "Dialog.ConfirmSlot")]
    DialogConfirmSlot(DialogConfirmSlotDirective),
    /// Confirm the whole intent with the user.
    #[serde(rename = "Dialog.ConfirmIntent")]
    DialogConfirmIntent(DialogConfirmIntentDirective),
    /// Render a display template on a screened device.
    #[serde(rename = "Display.RenderTemplate")]
    DisplayRenderTemplate(Box<DisplayRenderTemplateDirective>),
    /// Animate the lights of connected gadgets.
    #[serde(rename = "GadgetController.SetLight")]
    GadgetControllerSetLight(Box<GadgetControllerSetLightDirective>),
    /// Start the game engine input handler.
    #[serde(rename = "GameEngine.StartInputHandler")]
    GameEngineStartInputHandler(Box<GameEngineStartInputHandlerDirective>),
    /// Stop the game engine input handler.
    #[serde(rename = "GameEngine.StopInputHandler")]
    GameEngineStopInputHandler(GameEngineStopInputHandlerDirective),
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<AudioPlayerPlayDirective> for Directive {
    fn from(directive: AudioPlayerPlayDirective) -> Self {
        Self::AudioPlayerPlay(Box::new(directive))
    }
}

impl From<AudioPlayerClearQueueDirective> for Directive {
    fn from(directive: AudioPlayerClearQueueDirective) -> Self {
        Self::AudioPlayerClearQueue(directive)
    }
}

impl From<DialogDelegateDirective> for Directive {
    fn from(directive: DialogDelegateDirective) -> Self {
        Self::DialogDelegate(directive)
    }
}

impl From<DialogElicitSlotDirective> for Directive {
    fn from(directive: DialogElicitSlotDirective) -> Self {
        Self::DialogElicitSlot(directive)
    }
}

impl From<DialogConfirmSlotDirective> for Directive {
    fn from(directive: DialogConfirmSlotDirective) -> Self {
        Self::DialogConfirmSlot(directive)
    }
}

impl From<DialogConfirmIntentDirective> for Directive {
    fn from(directive: DialogConfirmIntentDirective) -> Self {
        Self::DialogConfirmIntent(directive)
    }
}

impl From<DisplayRenderTemplateDirective> for Directive {
    fn from(directive: DisplayRenderTemplateDirective) -> Self {
        Self::DisplayRenderTemplate(Box::new(directive))
    }
}

impl From<GadgetControllerSetLightDirective> for Directive {
    fn from(directive: GadgetControllerSetLightDirective) -> Self {
        Self::GadgetControllerSetLight(Box::new(directive))
    }
}

impl From<GameEngineStartInputHandlerDirective> for Directive {
    fn from(directive: GameEngineStartInputHandlerDirective) -> Self {
        Self::GameEngineStartInputHandler(Box::new(directive))
    }
}

impl From<GameEngineStopInputHandlerDirective> for Directive {
    fn from(directive: GameEngineStopInputHandlerDirective) -> Self {
        Self::GameEngineStopInputHandler(directive)
    }
}
