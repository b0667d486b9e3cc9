// crates/skillhost-core/src/game_engine.rs
// ============================================================================
// Module: Skillhost Game Engine Directives
// Description: Input handler start/stop directives and recognizer records.
// Purpose: Register for and stop gadget input event reporting.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The game engine reports gadget input (for example button presses) back to
//! the skill. A start directive registers recognizers (conditions over raw
//! input patterns) and named events (combinations of recognizers that
//! trigger a notification); a stop directive ends reporting for the handler
//! started by a given request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Start Input Handler
// ============================================================================

/// Starts reporting gadget input events to the skill.
///
/// # Invariants
/// - At least one registration event must be defined for the platform to
///   accept the directive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEngineStartInputHandlerDirective {
    /// Reporting window in milliseconds.
    pub timeout: i64,
    /// Maximum number of raw events kept in history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_history_length: Option<i64>,
    /// Gadget proxies available to recognizers, kept generic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxies: Vec<Value>,
    /// Recognizers keyed by name.
    pub recognizers: BTreeMap<String, GameEngineRecognizer>,
    /// Registration events keyed by name.
    pub events: BTreeMap<String, GameEngineRegistrationEvent>,
}

impl GameEngineStartInputHandlerDirective {
    /// Creates a start directive with the given reporting window.
    #[must_use]
    pub fn new(timeout: i64) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Adds a named recognizer.
    #[must_use]
    pub fn with_recognizer(
        mut self,
        name: impl Into<String>,
        recognizer: GameEngineRecognizer,
    ) -> Self {
        self.recognizers.insert(name.into(), recognizer);
        self
    }

    /// Adds a named registration event.
    #[must_use]
    pub fn with_event(
        mut self,
        name: impl Into<String>,
        event: GameEngineRegistrationEvent,
    ) -> Self {
        self.events.insert(name.into(), event);
        self
    }
}

// ============================================================================
// SECTION: Recognizers
// ============================================================================

/// Condition over raw gadget input evaluated by the game engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GameEngineRecognizer {
    /// True when the specified events occur in the specified order.
    Match {
        /// Where in the raw history the pattern may match.
        #[serde(default, skip_serializing_if = "String::is_empty")]
        anchor: String,
        /// Whether extra events between pattern steps are tolerated.
        #[serde(default)]
        fuzzy: bool,
        /// Gadgets the pattern applies to; empty means all.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        gadget_ids: Vec<String>,
        /// Actions the pattern applies to, kept generic.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        actions: Vec<Value>,
        /// Ordered pattern steps that must all occur.
        pattern: Vec<GameEnginePattern>,
    },
    /// True when another recognizer reports a deviation from its pattern.
    Deviation {
        /// Name of the recognizer to watch.
        recognizer: String,
    },
    /// True when another recognizer's completion passes a threshold.
    Progress {
        /// Name of the recognizer to consult.
        recognizer: String,
        /// Completion threshold as a decimal percentage.
        completion: f64,
    },
}

/// One step of a match recognizer pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEnginePattern {
    /// Gadgets the step applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gadget_ids: Vec<String>,
    /// Colors the step applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Action the step requires.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
}

// ============================================================================
// SECTION: Registration Events
// ============================================================================

/// Conditions under which the skill is notified of gadget input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEngineRegistrationEvent {
    /// Recognizers that must all be true.
    pub meets: Vec<String>,
    /// Recognizers that must all be false.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fails: Vec<String>,
    /// What the notification reports (`history` or `matches`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reports: String,
    /// Whether the input handler ends when this event fires.
    pub should_end_input_handler: bool,
    /// Maximum number of times this event may fire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_invocations: Option<i64>,
    /// Debounce window in milliseconds before the event fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_time_milliseconds: Option<i64>,
}

// ============================================================================
// SECTION: Stop Input Handler
// ============================================================================

/// Stops gadget input events from being sent to the skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEngineStopInputHandlerDirective {
    /// Identifier of the request that started the input handler.
    pub originating_request_id: String,
}

impl GameEngineStopInputHandlerDirective {
    /// Creates a stop directive for the handler started by the given request.
    #[must_use]
    pub fn new(originating_request_id: impl Into<String>) -> Self {
        Self {
            originating_request_id: originating_request_id.into(),
        }
    }
}
