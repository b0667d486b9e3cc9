// demos/hello/src/main.rs
// ============================================================================
// Module: Skillhost Hello Demo
// Description: Minimal skill served over the HTTP entry point.
// Purpose: Demonstrate callback registration and local serving.
// Dependencies: skillhost-core, skillhost-http, tokio, tracing-subscriber
// ============================================================================

//! ## Overview
//! Serves a hello-world skill on localhost with validation skipped, suitable
//! for driving with curl or a local simulator. The launch callback greets,
//! the intent callback echoes the invoked intent name, and the
//! session-ended callback closes the session.

use std::error::Error;
use std::net::SocketAddr;

use skillhost_core::Skill;
use skillhost_http::SkillConfig;
use skillhost_http::SkillService;
use tracing_subscriber::EnvFilter;

/// Application identity used by the demo; any value works with validation
/// skipped.
const DEMO_APPLICATION_ID: &str = "amzn1.ask.skill.demo-hello";

/// Builds the demo skill and serves it on localhost.
///
/// The service is constructed before the runtime starts; its validator owns
/// a blocking HTTP client that must not be created inside an async context.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let skill = Skill::new()
        .on_launch(|_request, response| {
            response
                .response
                .set_output_speech("Welcome to the hello skill. Ask me to say hello.")
                .set_reprompt("Ask me to say hello.")
                .set_should_end_session(false);
        })
        .on_intent(|request, response| {
            if request.intent.name == "HelloIntent" {
                response
                    .response
                    .set_output_speech("Hello from Skillhost.")
                    .set_simple_card("Hello", "Hello from Skillhost.");
            } else {
                response.response.set_output_speech("I only know how to say hello.");
            }
            response.response.set_should_end_session(true);
        })
        .on_session_ended(|_request, _response| {});

    let config = SkillConfig::new(DEMO_APPLICATION_ID).skip_validation(true).verbose(true);
    let service = SkillService::new(skill, config)?;
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(service.serve(addr))?;
    Ok(())
}
