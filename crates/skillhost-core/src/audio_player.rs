// crates/skillhost-core/src/audio_player.rs
// ============================================================================
// Module: Skillhost Audio Player Directives
// Description: Play, stop, and clear-queue directive payloads.
// Purpose: Build audio playback instructions for the response.
// Dependencies: serde, tracing, crate::display
// ============================================================================

//! ## Overview
//! Audio player directives control stream playback on the device. A play
//! directive identifies the stream and optional presentation metadata; the
//! session end marker should stay unset or explicit `false` alongside it,
//! otherwise playback pauses immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::display::DisplayImage;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Clear-queue behaviors accepted by the platform.
const CLEAR_BEHAVIORS: &[&str] = &["CLEAR_ENQUEUED", "CLEAR_ALL"];

// ============================================================================
// SECTION: Play Directive
// ============================================================================

/// Streams the audio item identified by the directive.
///
/// # Invariants
/// - `play_behavior` decides whether the stream starts immediately or is
///   added to the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerPlayDirective {
    /// Queueing behavior (for example `REPLACE_ALL`, `ENQUEUE`).
    pub play_behavior: String,
    /// Stream and presentation metadata.
    pub audio_item: AudioItem,
}

impl AudioPlayerPlayDirective {
    /// Creates a play directive with the given queueing behavior.
    #[must_use]
    pub fn new(play_behavior: impl Into<String>) -> Self {
        Self {
            play_behavior: play_behavior.into(),
            audio_item: AudioItem::default(),
        }
    }

    /// Sets the stream to play.
    #[must_use]
    pub fn with_stream(
        mut self,
        url: impl Into<String>,
        token: impl Into<String>,
        offset_in_milliseconds: i64,
    ) -> Self {
        self.audio_item.stream.url = url.into();
        self.audio_item.stream.token = token.into();
        self.audio_item.stream.offset_in_milliseconds = offset_in_milliseconds;
        self
    }

    /// Sets the token the platform expects the previous stream to carry.
    #[must_use]
    pub fn with_expected_previous_token(mut self, token: impl Into<String>) -> Self {
        self.audio_item.stream.expected_previous_token = Some(token.into());
        self
    }

    /// Sets the presentation metadata shown while the stream plays.
    #[must_use]
    pub fn with_metadata(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        let metadata = self.audio_item.metadata.get_or_insert_with(AudioItemMetadata::default);
        metadata.title = title.into();
        metadata.subtitle = subtitle.into();
        self
    }

    /// Sets the album art image in the presentation metadata.
    #[must_use]
    pub fn with_art(mut self, art: DisplayImage) -> Self {
        let metadata = self.audio_item.metadata.get_or_insert_with(AudioItemMetadata::default);
        metadata.art = Some(art);
        self
    }

    /// Sets the background image in the presentation metadata.
    #[must_use]
    pub fn with_background_image(mut self, image: DisplayImage) -> Self {
        let metadata = self.audio_item.metadata.get_or_insert_with(AudioItemMetadata::default);
        metadata.background_image = Some(image);
        self
    }
}

/// Stream and presentation metadata for a play directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioItem {
    /// Stream to play.
    pub stream: AudioPlayerStream,
    /// Presentation metadata shown on screened devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AudioItemMetadata>,
}

/// Identifies the audio stream to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerStream {
    /// Stream URL.
    pub url: String,
    /// Opaque token identifying the stream.
    pub token: String,
    /// Token the previous stream must carry for enqueueing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
    /// Playback start offset in milliseconds.
    pub offset_in_milliseconds: i64,
}

/// Presentation metadata for an audio item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItemMetadata {
    /// Title line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Subtitle line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    /// Album art image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<DisplayImage>,
    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<DisplayImage>,
}

// ============================================================================
// SECTION: Clear Queue Directive
// ============================================================================

/// Clears the audio playback queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerClearQueueDirective {
    /// Whether to keep or stop the currently playing stream.
    pub clear_behavior: String,
}

impl AudioPlayerClearQueueDirective {
    /// Creates a clear-queue directive.
    ///
    /// A behavior outside `CLEAR_ENQUEUED` / `CLEAR_ALL` is flagged and the
    /// directive is still built, leaving the platform to reject it.
    #[must_use]
    pub fn new(clear_behavior: impl Into<String>) -> Self {
        let clear_behavior = clear_behavior.into();
        if !CLEAR_BEHAVIORS.contains(&clear_behavior.as_str()) {
            tracing::warn!(behavior = %clear_behavior, "invalid clear queue behavior");
        }
        Self {
            clear_behavior,
        }
    }
}
