// crates/skillhost-core/tests/routing_prop.rs
// ============================================================================
// Module: Routing Property Tests
// Description: Totality and determinism of request type classification.
// Purpose: Validate the routing table against arbitrary type strings.
// ============================================================================

//! Property tests for `RequestKind::classify`: every string maps to
//! exactly one outcome, classification is deterministic, and prefix kinds
//! match regardless of suffix except where an exact variant takes priority.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use skillhost_core::RequestKind;

proptest! {
    #[test]
    fn classification_is_deterministic(request_type in ".*") {
        let first = RequestKind::classify(&request_type);
        let second = RequestKind::classify(&request_type);
        assert_eq!(first, second);
    }

    #[test]
    fn audio_player_prefix_routes_to_audio_state(suffix in "[A-Za-z]{1,24}") {
        let request_type = format!("AudioPlayer.{suffix}");
        let expected = if request_type == "AudioPlayer.PlaybackFailed" {
            RequestKind::AudioPlayerPlaybackFailed
        } else {
            RequestKind::AudioPlayerState
        };
        assert_eq!(RequestKind::classify(&request_type), Some(expected));
    }

    #[test]
    fn game_engine_prefix_routes_to_game_engine(suffix in "[A-Za-z]{0,24}") {
        let request_type = format!("GameEngine.{suffix}");
        assert_eq!(RequestKind::classify(&request_type), Some(RequestKind::GameEngine));
    }

    #[test]
    fn strings_without_known_shape_are_unroutable(request_type in "[a-z]{1,16}") {
        assert_eq!(RequestKind::classify(&request_type), None);
    }
}

#[test]
fn exact_matches_cover_the_closed_set() {
    assert_eq!(RequestKind::classify("LaunchRequest"), Some(RequestKind::Launch));
    assert_eq!(RequestKind::classify("IntentRequest"), Some(RequestKind::Intent));
    assert_eq!(RequestKind::classify("SessionEndedRequest"), Some(RequestKind::SessionEnded));
    assert_eq!(
        RequestKind::classify("AudioPlayer.PlaybackFailed"),
        Some(RequestKind::AudioPlayerPlaybackFailed)
    );
    assert_eq!(
        RequestKind::classify("System.ExceptionEncountered"),
        Some(RequestKind::SystemException)
    );
    assert_eq!(RequestKind::classify("Some.Unknown"), None);
    assert_eq!(RequestKind::classify(""), None);
}
