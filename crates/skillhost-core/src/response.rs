// crates/skillhost-core/src/response.rs
// ============================================================================
// Module: Skillhost Response Envelope
// Description: Outbound message payload and its mutation helpers.
// Purpose: Let callbacks shape speech, cards, directives, and session end.
// Dependencies: serde, serde_json, tracing, crate::directive
// ============================================================================

//! ## Overview
//! The response envelope is built fresh per call, seeded with the inbound
//! session attributes, mutated by exactly one callback invocation, then
//! serialized and discarded. Invariants:
//! - Single-valued fields (speech, card, reprompt, session end) overwrite;
//!   only the last value set survives.
//! - Directives accumulate in call order and are never inspected.
//! - `should_end_session` is tri-state: absent, `true`, and `false` have
//!   distinct platform semantics, so it is an explicit optional boolean.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::directive::Directive;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Protocol version stamped onto every outbound envelope.
pub const PROTOCOL_VERSION: &str = "1.0";

// ============================================================================
// SECTION: Response Envelope
// ============================================================================

/// Complete outbound message returned for one inbound request.
///
/// # Invariants
/// - `session_attributes` starts as a copy of the inbound map; callback
///   mutations to it flow to the wire unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Protocol version, always [`PROTOCOL_VERSION`].
    pub version: String,
    /// Session attributes mirrored back to the platform.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,
    /// Response payload shaped by the callback.
    pub response: Response,
}

impl ResponseEnvelope {
    /// Creates a response skeleton seeded with the inbound session attributes.
    #[must_use]
    pub fn new(session_attributes: Map<String, Value>) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes,
            response: Response::default(),
        }
    }
}

// ============================================================================
// SECTION: Response Payload
// ============================================================================

/// Response payload rendered by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Speech rendered to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Card rendered in the companion app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Speech rendered when the user stays silent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Tri-state session end marker; absent keeps the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    /// Ordered directives appended by the callback.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl Response {
    /// Sets plain-text output speech, overwriting any present speech.
    pub fn set_output_speech(&mut self, text: impl Into<String>) -> &mut Self {
        self.output_speech = Some(OutputSpeech::Plain {
            text: text.into(),
        });
        self
    }

    /// Sets SSML output speech, overwriting any present speech.
    pub fn set_ssml_output_speech(&mut self, ssml: impl Into<String>) -> &mut Self {
        self.output_speech = Some(OutputSpeech::Ssml {
            ssml: ssml.into(),
        });
        self
    }

    /// Sets a plain-text reprompt, overwriting any present reprompt.
    pub fn set_reprompt(&mut self, text: impl Into<String>) -> &mut Self {
        self.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::Plain {
                text: text.into(),
            },
        });
        self
    }

    /// Sets an SSML reprompt, overwriting any present reprompt.
    pub fn set_ssml_reprompt(&mut self, ssml: impl Into<String>) -> &mut Self {
        self.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::Ssml {
                ssml: ssml.into(),
            },
        });
        self
    }

    /// Sets a simple card, overwriting any present card.
    pub fn set_simple_card(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> &mut Self {
        self.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Sets a standard card with optional image, overwriting any present card.
    pub fn set_standard_card(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        image: Option<CardImage>,
    ) -> &mut Self {
        self.card = Some(Card::Standard {
            title: title.into(),
            text: text.into(),
            image,
        });
        self
    }

    /// Sets a link-account card, overwriting any present card.
    pub fn set_link_account_card(&mut self) -> &mut Self {
        self.card = Some(Card::LinkAccount);
        self
    }

    /// Sets a permissions-consent card carrying the given scopes.
    ///
    /// Scope contents are platform-defined and never validated here; an
    /// empty scope list is flagged because the platform rejects such cards.
    pub fn set_permissions_consent_card(&mut self, permissions: Vec<String>) -> &mut Self {
        if permissions.is_empty() {
            tracing::warn!("permissions consent card requires at least one scope");
        }
        self.card = Some(Card::AskForPermissionsConsent {
            permissions,
        });
        self
    }

    /// Sets the session end marker explicitly.
    ///
    /// Leave it unset for directive kinds that require the session to stay
    /// open with the platform default behavior.
    pub fn set_should_end_session(&mut self, end: bool) -> &mut Self {
        self.should_end_session = Some(end);
        self
    }

    /// Appends a directive; all appended directives are kept in call order.
    pub fn add_directive(&mut self, directive: impl Into<Directive>) -> &mut Self {
        self.directives.push(directive.into());
        self
    }
}

// ============================================================================
// SECTION: Speech and Cards
// ============================================================================

/// Speech rendered to the user, as literal text or SSML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Literal text spoken as-is.
    #[serde(rename = "PlainText")]
    Plain {
        /// Text to speak.
        text: String,
    },
    /// SSML markup.
    #[serde(rename = "SSML")]
    Ssml {
        /// SSML document to render.
        ssml: String,
    },
}

/// Speech rendered when the user stays silent or times out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// Speech to render for the reprompt.
    pub output_speech: OutputSpeech,
}

/// Card rendered in the companion app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title and plain content.
    #[serde(rename = "Simple")]
    Simple {
        /// Card title.
        #[serde(default)]
        title: String,
        /// Card body text.
        #[serde(default)]
        content: String,
    },
    /// Title, text, and an optional image.
    #[serde(rename = "Standard")]
    Standard {
        /// Card title.
        #[serde(default)]
        title: String,
        /// Card body text.
        #[serde(default)]
        text: String,
        /// Optional card image.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<CardImage>,
    },
    /// Prompts the user to link their account.
    #[serde(rename = "LinkAccount")]
    LinkAccount,
    /// Prompts the user to grant the listed permission scopes.
    #[serde(rename = "AskForPermissionsConsent")]
    AskForPermissionsConsent {
        /// Permission scopes to request; contents are platform-defined.
        permissions: Vec<String>,
    },
}

/// Image URLs for a standard card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    /// URL of the small rendition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub small_image_url: String,
    /// URL of the large rendition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub large_image_url: String,
}
