// crates/skillhost-http/tests/address_unit.rs
// ============================================================================
// Module: Device Address Client Unit Tests
// Description: Authenticated lookup paths against a local fixture server.
// Purpose: Validate request shape, decoding, and error mapping.
// ============================================================================

//! Device address client tests using a local HTTP fixture server standing in
//! for the platform's device settings API.

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

use std::thread::JoinHandle;

use serde_json::json;
use skillhost_core::System;
use skillhost_http::AddressError;
use skillhost_http::DeviceAddressClient;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn fixture_server(
    expected_path: &'static str,
    status: u16,
    body: serde_json::Value,
) -> (System, JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = std::thread::spawn(move || {
        let request = server.recv().unwrap();
        assert_eq!(request.url(), expected_path);
        let authorization = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Authorization"))
            .map(|header| header.value.as_str().to_string());
        assert_eq!(authorization.as_deref(), Some("Bearer api-token"));
        request
            .respond(tiny_http::Response::from_string(body.to_string()).with_status_code(status))
            .unwrap();
    });

    let system: System = serde_json::from_value(json!({
        "apiAccessToken": "api-token",
        "apiEndpoint": format!("http://{addr}"),
        "application": { "applicationId": "app-1" },
        "device": { "deviceId": "device-1", "supportedInterfaces": {} },
        "user": { "userId": "user-1" }
    }))
    .unwrap();
    (system, handle)
}

// ============================================================================
// SECTION: Lookups
// ============================================================================

#[test]
fn country_and_postal_code_lookup_decodes() {
    let (system, handle) = fixture_server(
        "/v1/devices/device-1/settings/address/countryAndPostalCode",
        200,
        json!({ "countryCode": "US", "postalCode": "98109" }),
    );

    let client = DeviceAddressClient::new().unwrap();
    let address = client.country_and_postal_code(&system).unwrap();
    assert_eq!(address.country_code.as_deref(), Some("US"));
    assert_eq!(address.postal_code.as_deref(), Some("98109"));
    handle.join().unwrap();
}

#[test]
fn full_address_lookup_decodes_with_nulls() {
    let (system, handle) = fixture_server(
        "/v1/devices/device-1/settings/address",
        200,
        json!({
            "countryCode": "US",
            "postalCode": "98109",
            "stateOrRegion": "WA",
            "city": "Seattle",
            "addressLine1": "410 Terry Ave North",
            "addressLine2": null,
            "addressLine3": null,
            "districtOrCounty": null
        }),
    );

    let client = DeviceAddressClient::new().unwrap();
    let address = client.full_address(&system).unwrap();
    assert_eq!(address.short.country_code.as_deref(), Some("US"));
    assert_eq!(address.state_or_region.as_deref(), Some("WA"));
    assert_eq!(address.city.as_deref(), Some("Seattle"));
    assert_eq!(address.address_line1.as_deref(), Some("410 Terry Ave North"));
    assert!(address.address_line2.is_none());
    assert!(address.district_or_county.is_none());
    handle.join().unwrap();
}

// ============================================================================
// SECTION: Error Mapping
// ============================================================================

#[test]
fn forbidden_lookup_maps_to_not_authorized() {
    let (system, handle) = fixture_server(
        "/v1/devices/device-1/settings/address",
        403,
        json!({ "message": "no permission" }),
    );

    let client = DeviceAddressClient::new().unwrap();
    let err = client.full_address(&system).unwrap_err();
    assert!(matches!(err, AddressError::NotAuthorized));
    handle.join().unwrap();
}

#[test]
fn unexpected_status_carries_the_code() {
    let (system, handle) = fixture_server(
        "/v1/devices/device-1/settings/address",
        500,
        json!({ "message": "boom" }),
    );

    let client = DeviceAddressClient::new().unwrap();
    let err = client.full_address(&system).unwrap_err();
    match err {
        AddressError::Status {
            status,
        } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other}"),
    }
    handle.join().unwrap();
}

#[test]
fn undecodable_body_maps_to_a_decode_error() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = std::thread::spawn(move || {
        let request = server.recv().unwrap();
        request.respond(tiny_http::Response::from_string("not json")).unwrap();
    });

    let system: System = serde_json::from_value(json!({
        "apiAccessToken": "api-token",
        "apiEndpoint": format!("http://{addr}"),
        "application": { "applicationId": "app-1" },
        "device": { "deviceId": "device-1", "supportedInterfaces": {} },
        "user": { "userId": "user-1" }
    }))
    .unwrap();

    let client = DeviceAddressClient::new().unwrap();
    let err = client.country_and_postal_code(&system).unwrap_err();
    assert!(matches!(err, AddressError::Decode(_)));
    handle.join().unwrap();
}
