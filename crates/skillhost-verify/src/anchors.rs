// crates/skillhost-verify/src/anchors.rs
// ============================================================================
// Module: Skillhost Trust Anchors
// Description: Fixed origin and hostname constants for certificate trust.
// Purpose: Pin where signing certificates may come from and who they name.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Trust anchors pin the certificate chain origin (scheme, host, path
//! prefix) and the hostname the signing certificate must name among its
//! subject alternative names. They are read-only configuration initialized
//! once at startup and never mutated; the defaults match the platform's
//! published values.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Scheme certificate chain URLs must use.
pub const CERT_CHAIN_SCHEME: &str = "https";
/// Host certificate chain URLs must name, with or without the default port.
pub const CERT_CHAIN_HOST: &str = "s3.amazonaws.com";
/// Path prefix certificate chain URLs must start with.
pub const CERT_CHAIN_PATH_PREFIX: &str = "/echo.api/";
/// Hostname the signing certificate must carry among its alternate names.
pub const SIGNING_CERT_HOSTNAME: &str = "echo-api.amazon.com";

// ============================================================================
// SECTION: Trust Anchors
// ============================================================================

/// Read-only trust anchor configuration for certificate validation.
///
/// # Invariants
/// - Values are fixed before serving begins and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchors {
    /// Host the certificate chain must be fetched from.
    pub cert_host: String,
    /// Path prefix the certificate chain URL must start with.
    pub cert_path_prefix: String,
    /// Hostname the signing certificate must name.
    pub signing_hostname: String,
}

impl Default for TrustAnchors {
    fn default() -> Self {
        Self {
            cert_host: CERT_CHAIN_HOST.to_string(),
            cert_path_prefix: CERT_CHAIN_PATH_PREFIX.to_string(),
            signing_hostname: SIGNING_CERT_HOSTNAME.to_string(),
        }
    }
}
