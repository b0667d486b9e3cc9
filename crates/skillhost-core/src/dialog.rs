// crates/skillhost-core/src/dialog.rs
// ============================================================================
// Module: Skillhost Dialog Directives
// Description: Delegate, elicit, and confirm directive payloads.
// Purpose: Drive multi-turn dialog management from a callback.
// Dependencies: serde, crate::request
// ============================================================================

//! ## Overview
//! Dialog directives hand parts of a multi-turn conversation back to the
//! platform. They may only be returned while the dialog state is `STARTED`
//! or `IN_PROGRESS`; the platform rejects them once the dialog is
//! `COMPLETED`. Each directive can carry an updated intent to override
//! slot values collected so far.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::request::Intent;

// ============================================================================
// SECTION: Dialog Directives
// ============================================================================

/// Hands the next dialog turn to the platform's dialog model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogDelegateDirective {
    /// Intent overriding the slot values collected so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

impl DialogDelegateDirective {
    /// Creates a delegate directive without an updated intent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the updated intent.
    #[must_use]
    pub fn with_updated_intent(mut self, intent: Intent) -> Self {
        self.updated_intent = Some(intent);
        self
    }
}

/// Asks the user for the value of a specific slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogElicitSlotDirective {
    /// Name of the slot to elicit.
    pub slot_to_elicit: String,
    /// Intent overriding the slot values collected so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

impl DialogElicitSlotDirective {
    /// Creates an elicit directive for the named slot.
    #[must_use]
    pub fn new(slot_to_elicit: impl Into<String>) -> Self {
        Self {
            slot_to_elicit: slot_to_elicit.into(),
            updated_intent: None,
        }
    }

    /// Sets the updated intent.
    #[must_use]
    pub fn with_updated_intent(mut self, intent: Intent) -> Self {
        self.updated_intent = Some(intent);
        self
    }
}

/// Confirms the value of a specific slot before continuing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogConfirmSlotDirective {
    /// Name of the slot to confirm.
    pub slot_to_confirm: String,
    /// Intent overriding the slot values collected so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

impl DialogConfirmSlotDirective {
    /// Creates a confirm directive for the named slot.
    #[must_use]
    pub fn new(slot_to_confirm: impl Into<String>) -> Self {
        Self {
            slot_to_confirm: slot_to_confirm.into(),
            updated_intent: None,
        }
    }

    /// Sets the updated intent.
    #[must_use]
    pub fn with_updated_intent(mut self, intent: Intent) -> Self {
        self.updated_intent = Some(intent);
        self
    }
}

/// Confirms all collected intent information before the skill acts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogConfirmIntentDirective {
    /// Intent overriding the slot values collected so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_intent: Option<Intent>,
}

impl DialogConfirmIntentDirective {
    /// Creates a confirm-intent directive without an updated intent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the updated intent.
    #[must_use]
    pub fn with_updated_intent(mut self, intent: Intent) -> Self {
        self.updated_intent = Some(intent);
        self
    }
}
