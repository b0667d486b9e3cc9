// crates/skillhost-verify/tests/certificate_unit.rs
// ============================================================================
// Module: Certificate Validator Unit Tests
// Description: URL allow-list, X.509 checks, and body signature coverage.
// Purpose: Validate every fail-closed step of the authenticity chain.
// ============================================================================

//! Certificate validator tests using static PEM fixtures and runtime-signed
//! bodies. The signing fixture names the expected hostname; the other
//! fixture names an unrelated hostname to exercise subject mismatches.

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

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::SignatureEncoding;
use rsa::signature::Signer;
use sha1::Sha1;
use skillhost_verify::AuthenticityError;
use skillhost_verify::CertificateValidator;
use time::OffsetDateTime;
use url::Url;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Certificate naming the expected hostname among its alternate names.
const SIGNING_CERT_PEM: &str = include_str!("fixtures/signing_cert.pem");
/// Private key matching the signing certificate.
const SIGNING_KEY_PEM: &str = include_str!("fixtures/signing_key.pem");
/// Certificate naming an unrelated hostname.
const OTHER_CERT_PEM: &str = include_str!("fixtures/other_cert.pem");
/// Private key matching the unrelated certificate.
const OTHER_KEY_PEM: &str = include_str!("fixtures/other_key.pem");

const BODY: &[u8] = br#"{"version":"1.0","request":{"type":"LaunchRequest"}}"#;

fn sign_with(key_pem: &str, body: &[u8]) -> String {
    let key = RsaPrivateKey::from_pkcs8_pem(key_pem).unwrap();
    let signing_key = SigningKey::<Sha1>::new(key);
    let signature = signing_key.sign(body);
    Base64.encode(signature.to_bytes())
}

fn validator() -> CertificateValidator {
    CertificateValidator::new().unwrap()
}

// ============================================================================
// SECTION: URL Allow-List
// ============================================================================

#[test]
fn accepts_allow_listed_certificate_urls() {
    let validator = validator();
    let accepted = [
        "https://s3.amazonaws.com/echo.api/echo-api-cert-4.pem",
        "https://s3.amazonaws.com:443/echo.api/echo-api-cert-4.pem",
        "https://s3.amazonaws.com/echo.api/sub/echo-api-cert.pem",
    ];
    for url in accepted {
        assert!(validator.check_cert_url(url).is_ok(), "rejected {url}");
    }
}

#[test]
fn rejects_urls_outside_the_allow_list() {
    let validator = validator();
    let rejected = [
        "http://s3.amazonaws.com/echo.api/echo-api-cert-4.pem",
        "https://evil.example.com/echo.api/echo-api-cert-4.pem",
        "https://s3.amazonaws.com.evil.example.com/echo.api/cert.pem",
        "https://s3.amazonaws.com:8443/echo.api/echo-api-cert-4.pem",
        "https://s3.amazonaws.com/not-echo.api/echo-api-cert-4.pem",
        "https://s3.amazonaws.com/echo.apifake/cert.pem",
        "ftp://s3.amazonaws.com/echo.api/cert.pem",
        "not a url",
        "",
    ];
    for url in rejected {
        let err = validator.check_cert_url(url).unwrap_err();
        assert!(matches!(err, AuthenticityError::CertUrl(_)), "accepted {url}");
    }
}

#[test]
fn dot_segments_cannot_escape_the_path_prefix() {
    let validator = validator();
    let err = validator
        .check_cert_url("https://s3.amazonaws.com/echo.api/../evil/cert.pem")
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::CertUrl(_)));
}

// ============================================================================
// SECTION: Certificate and Signature Checks
// ============================================================================

#[test]
fn valid_certificate_and_signature_pass() {
    let signature = sign_with(SIGNING_KEY_PEM, BODY);
    let result = validator().verify_certificate(
        SIGNING_CERT_PEM.as_bytes(),
        &signature,
        BODY,
        OffsetDateTime::now_utc(),
    );
    assert!(result.is_ok());
}

#[test]
fn single_byte_body_change_breaks_the_signature() {
    let signature = sign_with(SIGNING_KEY_PEM, BODY);
    let mut tampered = BODY.to_vec();
    tampered[0] ^= 0x01;

    let err = validator()
        .verify_certificate(
            SIGNING_CERT_PEM.as_bytes(),
            &signature,
            &tampered,
            OffsetDateTime::now_utc(),
        )
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::SignatureMismatch));
}

#[test]
fn signature_from_a_different_key_is_rejected() {
    let signature = sign_with(OTHER_KEY_PEM, BODY);
    let err = validator()
        .verify_certificate(
            SIGNING_CERT_PEM.as_bytes(),
            &signature,
            BODY,
            OffsetDateTime::now_utc(),
        )
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::SignatureMismatch));
}

#[test]
fn certificate_without_expected_hostname_is_rejected() {
    let signature = sign_with(OTHER_KEY_PEM, BODY);
    let err = validator()
        .verify_certificate(
            OTHER_CERT_PEM.as_bytes(),
            &signature,
            BODY,
            OffsetDateTime::now_utc(),
        )
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::SubjectMismatch));
}

#[test]
fn time_before_the_validity_window_is_rejected() {
    let signature = sign_with(SIGNING_KEY_PEM, BODY);
    let before = OffsetDateTime::from_unix_timestamp(946_684_800).unwrap();
    let err = validator()
        .verify_certificate(SIGNING_CERT_PEM.as_bytes(), &signature, BODY, before)
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::OutsideValidityWindow));
}

#[test]
fn time_after_the_validity_window_is_rejected() {
    let signature = sign_with(SIGNING_KEY_PEM, BODY);
    let after = OffsetDateTime::from_unix_timestamp(7_258_118_400).unwrap();
    let err = validator()
        .verify_certificate(SIGNING_CERT_PEM.as_bytes(), &signature, BODY, after)
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::OutsideValidityWindow));
}

#[test]
fn undecodable_signature_header_is_rejected() {
    let err = validator()
        .verify_certificate(
            SIGNING_CERT_PEM.as_bytes(),
            "not-base64!",
            BODY,
            OffsetDateTime::now_utc(),
        )
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::SignatureEncoding));
}

#[test]
fn garbage_certificate_bytes_are_rejected() {
    let signature = sign_with(SIGNING_KEY_PEM, BODY);
    let err = validator()
        .verify_certificate(b"not a pem", &signature, BODY, OffsetDateTime::now_utc())
        .unwrap_err();
    assert!(matches!(err, AuthenticityError::Parse(_)));
}

// ============================================================================
// SECTION: Certificate Fetch
// ============================================================================

#[test]
fn fetch_returns_the_certificate_bytes() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = std::thread::spawn(move || {
        let request = server.recv().unwrap();
        assert_eq!(request.url(), "/echo.api/cert.pem");
        request.respond(tiny_http::Response::from_data(SIGNING_CERT_PEM.as_bytes())).unwrap();
    });

    let url = Url::parse(&format!("http://{addr}/echo.api/cert.pem")).unwrap();
    let bytes = validator().fetch_certificate(&url).unwrap();
    assert_eq!(bytes, SIGNING_CERT_PEM.as_bytes());
    handle.join().unwrap();
}

#[test]
fn fetch_fails_closed_on_error_status() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = std::thread::spawn(move || {
        let request = server.recv().unwrap();
        request.respond(tiny_http::Response::from_string("gone").with_status_code(404)).unwrap();
    });

    let url = Url::parse(&format!("http://{addr}/echo.api/cert.pem")).unwrap();
    let err = validator().fetch_certificate(&url).unwrap_err();
    assert!(matches!(err, AuthenticityError::Fetch(_)));
    handle.join().unwrap();
}
