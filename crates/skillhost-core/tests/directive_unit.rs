// crates/skillhost-core/tests/directive_unit.rs
// ============================================================================
// Module: Directive Wire Shape Unit Tests
// Description: Dialog, display, gadget, and game engine directive payloads.
// Purpose: Validate the wire JSON each directive kind serializes to.
// ============================================================================

//! Directive catalogue tests: each interface's directives are appended
//! through a callback and checked against the wire shapes the platform
//! expects.

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

use serde_json::json;
use skillhost_core::DialogConfirmIntentDirective;
use skillhost_core::DialogConfirmSlotDirective;
use skillhost_core::DialogDelegateDirective;
use skillhost_core::DialogElicitSlotDirective;
use skillhost_core::DisplayRenderTemplateDirective;
use skillhost_core::DisplayText;
use skillhost_core::GadgetAnimation;
use skillhost_core::GadgetAnimationStep;
use skillhost_core::GadgetControllerSetLightDirective;
use skillhost_core::GadgetParameters;
use skillhost_core::GadgetTriggerEvent;
use skillhost_core::GameEnginePattern;
use skillhost_core::GameEngineRecognizer;
use skillhost_core::GameEngineRegistrationEvent;
use skillhost_core::GameEngineStartInputHandlerDirective;
use skillhost_core::GameEngineStopInputHandlerDirective;
use skillhost_core::Intent;
use skillhost_core::RequestEnvelope;
use skillhost_core::Response;
use skillhost_core::Skill;
use skillhost_core::rgb_to_hex;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn launch_envelope() -> RequestEnvelope {
    serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "session-1",
            "application": { "applicationId": "app-1" },
            "user": { "userId": "user-1" }
        },
        "context": {
            "system": {
                "application": { "applicationId": "app-1" },
                "device": { "deviceId": "device-1", "supportedInterfaces": {} },
                "user": { "userId": "user-1" }
            },
            "audioPlayer": { "offsetInMilliseconds": 0, "playerActivity": "IDLE" }
        },
        "request": {
            "type": "LaunchRequest",
            "requestId": "request-1",
            "timestamp": "2018-04-01T12:00:00Z",
            "locale": "en-US"
        }
    }))
    .unwrap()
}

// ============================================================================
// SECTION: Dialog Directives
// ============================================================================

#[test]
fn dialog_directives_keep_order_and_wire_names() {
    let skill = Skill::new().on_launch(|_request, response| {
        response
            .response
            .add_directive(DialogConfirmIntentDirective::new())
            .add_directive(DialogConfirmSlotDirective::new("slot1"))
            .add_directive(DialogDelegateDirective::new())
            .add_directive(DialogElicitSlotDirective::new("slot2"));
    });

    let response = skill.handle_request(&launch_envelope()).unwrap();
    let value = serde_json::to_value(&response).unwrap();
    let directives = value["response"]["directives"].as_array().unwrap();
    assert_eq!(directives.len(), 4);
    assert_eq!(directives[0]["type"], "Dialog.ConfirmIntent");
    assert_eq!(directives[1]["type"], "Dialog.ConfirmSlot");
    assert_eq!(directives[1]["slotToConfirm"], "slot1");
    assert_eq!(directives[2]["type"], "Dialog.Delegate");
    assert_eq!(directives[3]["type"], "Dialog.ElicitSlot");
    assert_eq!(directives[3]["slotToElicit"], "slot2");
}

#[test]
fn dialog_delegate_carries_the_updated_intent() {
    let intent = Intent {
        name: "PlanMyTrip".to_string(),
        confirmation_status: "NONE".to_string(),
        ..Intent::default()
    };

    let mut response = Response::default();
    response.add_directive(DialogDelegateDirective::new().with_updated_intent(intent));

    let value = serde_json::to_value(&response).unwrap();
    let delegate = &value["directives"][0];
    assert_eq!(delegate["updatedIntent"]["name"], "PlanMyTrip");
    assert_eq!(delegate["updatedIntent"]["confirmationStatus"], "NONE");
}

// ============================================================================
// SECTION: Display Directives
// ============================================================================

#[test]
fn render_template_directive_wire_shape() {
    let mut directive = DisplayRenderTemplateDirective::new("BodyTemplate1");
    directive.template.token = "view-1".to_string();
    directive.template.title = "Horoscope".to_string();
    directive.template.text_content.primary_text = Some(DisplayText {
        text_type: "PlainText".to_string(),
        text: "Today is your day.".to_string(),
    });

    let mut response = Response::default();
    response.add_directive(directive);

    let value = serde_json::to_value(&response).unwrap();
    let render = &value["directives"][0];
    assert_eq!(render["type"], "Display.RenderTemplate");
    assert_eq!(render["template"]["type"], "BodyTemplate1");
    assert_eq!(render["template"]["token"], "view-1");
    assert_eq!(render["template"]["title"], "Horoscope");
    assert_eq!(render["template"]["textContent"]["primaryText"]["type"], "PlainText");
    assert_eq!(render["template"]["textContent"]["primaryText"]["text"], "Today is your day.");
    assert!(render["template"].get("listItems").is_none());
}

// ============================================================================
// SECTION: Gadget Controller Directives
// ============================================================================

#[test]
fn set_light_directive_wire_shape() {
    let parameters = GadgetParameters {
        trigger_event: GadgetTriggerEvent::None,
        trigger_event_time_ms: 100,
        animations: vec![GadgetAnimation {
            repeat: 1,
            target_lights: vec!["1".to_string()],
            sequence: vec![GadgetAnimationStep {
                duration_ms: 1000,
                color: rgb_to_hex(255, 0, 0),
                blend: true,
            }],
        }],
    };
    let directive = GadgetControllerSetLightDirective::new(parameters)
        .with_target_gadgets(vec!["gadget-1".to_string()]);

    let mut response = Response::default();
    response.add_directive(directive);

    let value = serde_json::to_value(&response).unwrap();
    let set_light = &value["directives"][0];
    assert_eq!(set_light["type"], "GadgetController.SetLight");
    assert_eq!(set_light["version"], 1);
    assert_eq!(set_light["targetGadgets"], json!(["gadget-1"]));
    assert_eq!(set_light["parameters"]["triggerEvent"], "none");
    assert_eq!(set_light["parameters"]["triggerEventTimeMs"], 100);
    let animation = &set_light["parameters"]["animations"][0];
    assert_eq!(animation["repeat"], 1);
    assert_eq!(animation["targetLights"], json!(["1"]));
    assert_eq!(
        animation["sequence"][0],
        json!({ "durationMs": 1000, "color": "ff0000", "blend": true })
    );
}

#[test]
fn trigger_events_use_camel_case_wire_names() {
    for (event, expected) in [
        (GadgetTriggerEvent::ButtonDown, "buttonDown"),
        (GadgetTriggerEvent::ButtonUp, "buttonUp"),
        (GadgetTriggerEvent::None, "none"),
    ] {
        assert_eq!(serde_json::to_value(event).unwrap(), json!(expected));
    }
}

#[test]
fn rgb_components_render_as_lowercase_hex() {
    assert_eq!(rgb_to_hex(0x55, 0x22, 0x00), "552200");
    assert_eq!(rgb_to_hex(0xFF, 0x00, 0x00), "ff0000");
    assert_eq!(rgb_to_hex(0, 0, 0), "000000");
}

// ============================================================================
// SECTION: Game Engine Directives
// ============================================================================

#[test]
fn start_input_handler_directive_wire_shape() {
    let directive = GameEngineStartInputHandlerDirective::new(30_000)
        .with_recognizer(
            "button_down_recognizer",
            GameEngineRecognizer::Match {
                anchor: "end".to_string(),
                fuzzy: false,
                gadget_ids: Vec::new(),
                actions: Vec::new(),
                pattern: vec![GameEnginePattern {
                    gadget_ids: Vec::new(),
                    colors: Vec::new(),
                    action: "down".to_string(),
                }],
            },
        )
        .with_event(
            "button_down_event",
            GameEngineRegistrationEvent {
                meets: vec!["button_down_recognizer".to_string()],
                fails: Vec::new(),
                reports: "matches".to_string(),
                should_end_input_handler: false,
                maximum_invocations: None,
                trigger_time_milliseconds: None,
            },
        );

    let mut response = Response::default();
    response.add_directive(directive);

    let value = serde_json::to_value(&response).unwrap();
    let start = &value["directives"][0];
    assert_eq!(start["type"], "GameEngine.StartInputHandler");
    assert_eq!(start["timeout"], 30_000);
    let recognizer = &start["recognizers"]["button_down_recognizer"];
    assert_eq!(recognizer["type"], "match");
    assert_eq!(recognizer["anchor"], "end");
    assert_eq!(recognizer["fuzzy"], false);
    assert_eq!(recognizer["pattern"][0]["action"], "down");
    let event = &start["events"]["button_down_event"];
    assert_eq!(event["meets"], json!(["button_down_recognizer"]));
    assert_eq!(event["reports"], "matches");
    assert_eq!(event["shouldEndInputHandler"], false);
}

#[test]
fn derived_recognizers_name_their_source() {
    let deviation = GameEngineRecognizer::Deviation {
        recognizer: "button_down_recognizer".to_string(),
    };
    let value = serde_json::to_value(&deviation).unwrap();
    assert_eq!(value, json!({ "type": "deviation", "recognizer": "button_down_recognizer" }));

    let progress = GameEngineRecognizer::Progress {
        recognizer: "button_down_recognizer".to_string(),
        completion: 0.5,
    };
    let value = serde_json::to_value(&progress).unwrap();
    assert_eq!(value["type"], "progress");
    assert_eq!(value["completion"], 0.5);
}

#[test]
fn stop_input_handler_directive_wire_shape() {
    let mut response = Response::default();
    response
        .add_directive(GameEngineStopInputHandlerDirective::new("amzn1.echo-api.request.origin"));

    let value = serde_json::to_value(&response).unwrap();
    let stop = &value["directives"][0];
    assert_eq!(stop["type"], "GameEngine.StopInputHandler");
    assert_eq!(stop["originatingRequestId"], "amzn1.echo-api.request.origin");
}
