// crates/skillhost-core/src/gadget.rs
// ============================================================================
// Module: Skillhost Gadget Controller Directives
// Description: Light animation directive and its animation records.
// Purpose: Animate the lights of connected gadgets.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The gadget controller animates the LEDs of connected gadgets. A set-light
//! directive names the target gadgets, the trigger that starts the
//! animation, and the animation steps (duration, color, blend) to play.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Set Light Directive
// ============================================================================

/// Animates the lights of the targeted gadgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetControllerSetLightDirective {
    /// Directive version; currently always `1`.
    pub version: i64,
    /// Gadgets to animate; empty targets all connected gadgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_gadgets: Vec<String>,
    /// Trigger and animation instructions.
    pub parameters: GadgetParameters,
}

impl GadgetControllerSetLightDirective {
    /// Creates a set-light directive with the given parameters.
    #[must_use]
    pub fn new(parameters: GadgetParameters) -> Self {
        Self {
            version: 1,
            target_gadgets: Vec::new(),
            parameters,
        }
    }

    /// Restricts the animation to the given gadgets.
    #[must_use]
    pub fn with_target_gadgets(mut self, target_gadgets: Vec<String>) -> Self {
        self.target_gadgets = target_gadgets;
        self
    }
}

/// Trigger and animation instructions for a set-light directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetParameters {
    /// Action that starts the animation.
    pub trigger_event: GadgetTriggerEvent,
    /// Delay after the trigger before the animation starts, in milliseconds.
    pub trigger_event_time_ms: i64,
    /// Animations to play.
    pub animations: Vec<GadgetAnimation>,
}

/// Action that triggers a light animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GadgetTriggerEvent {
    /// Start when a button is pressed.
    ButtonDown,
    /// Start when a button is released.
    ButtonUp,
    /// Start immediately.
    #[default]
    None,
}

/// One animation with its repeat count and target lights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetAnimation {
    /// Number of times to play the sequence.
    pub repeat: i64,
    /// Lights the animation applies to (for example `["1"]`).
    pub target_lights: Vec<String>,
    /// Ordered steps of the animation.
    pub sequence: Vec<GadgetAnimationStep>,
}

/// One step of a light animation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetAnimationStep {
    /// Step duration in milliseconds.
    pub duration_ms: i64,
    /// Light color as a hex string (for example `ff0000`).
    pub color: String,
    /// Whether to interpolate from the previous color.
    pub blend: bool,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Converts RGB components to the hex string representation colors use.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{r:02x}{g:02x}{b:02x}")
}
