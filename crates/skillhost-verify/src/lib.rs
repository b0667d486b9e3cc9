// crates/skillhost-verify/src/lib.rs
// ============================================================================
// Module: Skillhost Verify Library
// Description: Request authenticity and business validation for skill calls.
// Purpose: Prove an inbound request was signed by the platform and is fresh.
// Dependencies: skillhost-core, reqwest, rsa, sha1, x509-parser, url, base64
// ============================================================================

//! ## Overview
//! Skillhost Verify implements the trust side of the request pipeline: the
//! [`CertificateValidator`] proves the raw request body was signed by the
//! platform's private key (certificate chain retrieval, X.509 validation,
//! body signature check), and the [`RequestAuthenticator`] applies the
//! stateless business checks (timestamp freshness, application identity).
//! Invariants:
//! - Every authenticity failure collapses into one "not authorized"
//!   outcome; internal causes are logged, never surfaced to the caller.
//! - No state is cached across calls; certificate fetch-and-verify work is
//!   repeated per request.
//!
//! Security posture: header values, certificate bytes, and envelope
//! contents are untrusted inputs; every check fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod anchors;
pub mod authenticator;
pub mod certificate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use anchors::CERT_CHAIN_HOST;
pub use anchors::CERT_CHAIN_PATH_PREFIX;
pub use anchors::CERT_CHAIN_SCHEME;
pub use anchors::SIGNING_CERT_HOSTNAME;
pub use anchors::TrustAnchors;
pub use authenticator::DEFAULT_TIMESTAMP_TOLERANCE;
pub use authenticator::RequestAuthenticator;
pub use authenticator::ValidationError;
pub use certificate::AuthenticityError;
pub use certificate::CertificateValidator;
