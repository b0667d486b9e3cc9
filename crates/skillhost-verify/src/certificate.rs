// crates/skillhost-verify/src/certificate.rs
// ============================================================================
// Module: Skillhost Certificate Validator
// Description: Certificate chain retrieval, X.509 checks, body signature.
// Purpose: Prove the raw request body was signed by the platform key.
// Dependencies: reqwest, url, base64, rsa, sha1, x509-parser, time
// ============================================================================

//! ## Overview
//! The certificate validator proves an inbound HTTP body was signed by the
//! platform's private key. The chain of checks, each failing closed:
//! URL allow-list, fetch, PEM and X.509 parse, validity window, subject
//! alternative name, and the PKCS#1 v1.5 SHA-1 signature over the exact raw
//! body bytes. The body is verified as a byte slice before any JSON
//! decoding, so the bytes remain fully readable by downstream code.
//!
//! Security posture: the certificate URL and signature are untrusted header
//! values; the fetched certificate bytes are untrusted until every check
//! has passed. No partial trust is granted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs1v15::Signature;
use rsa::pkcs1v15::VerifyingKey;
use rsa::signature::Verifier;
use sha1::Sha1;
use thiserror::Error;
use time::OffsetDateTime;
use url::Url;
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::GeneralName;
use x509_parser::pem::parse_x509_pem;
use x509_parser::time::ASN1Time;

use crate::anchors::CERT_CHAIN_SCHEME;
use crate::anchors::TrustAnchors;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum size of a fetched certificate chain (bytes).
const MAX_CERT_CHAIN_BYTES: usize = 64 * 1024;
/// Default secure port for certificate chain URLs.
const CERT_CHAIN_PORT: u16 = 443;
/// Timeout applied to certificate fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Authenticity failures.
///
/// Every variant collapses into the same "not authorized" outcome at the
/// transport boundary; the variant detail exists for logging only.
#[derive(Debug, Error)]
pub enum AuthenticityError {
    /// The certificate chain URL failed the allow-list check.
    #[error("invalid certificate chain url: {0}")]
    CertUrl(String),
    /// The certificate chain could not be fetched.
    #[error("certificate fetch failed: {0}")]
    Fetch(String),
    /// The certificate bytes could not be parsed.
    #[error("certificate parse failed: {0}")]
    Parse(String),
    /// The current time lies outside the certificate validity window.
    #[error("certificate validity window excludes the current time")]
    OutsideValidityWindow,
    /// The certificate does not name the expected hostname.
    #[error("certificate subject does not include the expected hostname")]
    SubjectMismatch,
    /// The signature header is not valid base64 or has the wrong length.
    #[error("invalid signature encoding")]
    SignatureEncoding,
    /// The signature does not match the request body.
    #[error("signature does not match the request body")]
    SignatureMismatch,
}

// ============================================================================
// SECTION: Certificate Validator
// ============================================================================

/// Validates the signing certificate and the body signature of one request.
///
/// # Invariants
/// - Nothing is cached across calls; every request repeats the full
///   fetch-and-verify chain.
#[derive(Debug, Clone)]
pub struct CertificateValidator {
    /// Pinned certificate origin and hostname configuration.
    anchors: TrustAnchors,
    /// HTTP client used for certificate fetches.
    client: Client,
}

impl CertificateValidator {
    /// Builds a validator with the default trust anchors.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError::Fetch`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, AuthenticityError> {
        Self::with_anchors(TrustAnchors::default())
    }

    /// Builds a validator with specific trust anchors.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError::Fetch`] when the HTTP client cannot be
    /// constructed.
    pub fn with_anchors(anchors: TrustAnchors) -> Result<Self, AuthenticityError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|_| AuthenticityError::Fetch("http client build failed".to_string()))?;
        Ok(Self {
            anchors,
            client,
        })
    }

    /// Runs the full authenticity chain for one request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError`] when any single check fails; callers
    /// must treat every variant as the same "not authorized" outcome.
    pub fn validate(
        &self,
        cert_url: &str,
        signature_b64: &str,
        body: &[u8],
    ) -> Result<(), AuthenticityError> {
        let url = self.check_cert_url(cert_url)?;
        let pem = self.fetch_certificate(&url)?;
        self.verify_certificate(&pem, signature_b64, body, OffsetDateTime::now_utc())
    }

    /// Checks a declared certificate chain URL against the allow-list.
    ///
    /// The scheme must be exactly `https`, the host must match the pinned
    /// origin (default port implied or written explicitly), and the path
    /// must start with the pinned prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError::CertUrl`] for any deviation.
    pub fn check_cert_url(&self, raw: &str) -> Result<Url, AuthenticityError> {
        let url =
            Url::parse(raw).map_err(|_| AuthenticityError::CertUrl(raw.to_string()))?;
        if url.scheme() != CERT_CHAIN_SCHEME {
            return Err(AuthenticityError::CertUrl(raw.to_string()));
        }
        if url.host_str() != Some(self.anchors.cert_host.as_str()) {
            return Err(AuthenticityError::CertUrl(raw.to_string()));
        }
        if url.port_or_known_default() != Some(CERT_CHAIN_PORT) {
            return Err(AuthenticityError::CertUrl(raw.to_string()));
        }
        if !url.path().starts_with(&self.anchors.cert_path_prefix) {
            return Err(AuthenticityError::CertUrl(raw.to_string()));
        }
        Ok(url)
    }

    /// Fetches the certificate chain bytes from the allow-listed URL.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError::Fetch`] on transport errors, non-success
    /// status codes, or oversized responses.
    pub fn fetch_certificate(&self, url: &Url) -> Result<Vec<u8>, AuthenticityError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|_| AuthenticityError::Fetch("certificate download failed".to_string()))?;
        if !response.status().is_success() {
            return Err(AuthenticityError::Fetch(format!(
                "certificate download failed with status {}",
                response.status()
            )));
        }
        let max_bytes_u64 = u64::try_from(MAX_CERT_CHAIN_BYTES).unwrap_or(u64::MAX);
        if let Some(length) = response.content_length()
            && length > max_bytes_u64
        {
            return Err(AuthenticityError::Fetch("certificate too large".to_string()));
        }
        let mut limited = response.take(max_bytes_u64.saturating_add(1));
        let mut bytes = Vec::new();
        limited
            .read_to_end(&mut bytes)
            .map_err(|_| AuthenticityError::Fetch("certificate read failed".to_string()))?;
        if bytes.len() > MAX_CERT_CHAIN_BYTES {
            return Err(AuthenticityError::Fetch("certificate too large".to_string()));
        }
        Ok(bytes)
    }

    /// Verifies the certificate and the body signature at a given instant.
    ///
    /// The body must be the exact raw bytes the signature was computed over,
    /// before any JSON parsing or normalization.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticityError`] when parsing, the validity window, the
    /// subject alternative names, or the signature check fails.
    pub fn verify_certificate(
        &self,
        pem_bytes: &[u8],
        signature_b64: &str,
        body: &[u8],
        now: OffsetDateTime,
    ) -> Result<(), AuthenticityError> {
        let (_, pem) = parse_x509_pem(pem_bytes)
            .map_err(|_| AuthenticityError::Parse("pem decode failed".to_string()))?;
        let cert = pem
            .parse_x509()
            .map_err(|_| AuthenticityError::Parse("x509 decode failed".to_string()))?;

        self.check_validity(&cert, now)?;
        self.check_subject_names(&cert)?;
        verify_body_signature(&cert, signature_b64, body)
    }

    /// Checks that `now` lies within the certificate validity window.
    fn check_validity(
        &self,
        cert: &X509Certificate<'_>,
        now: OffsetDateTime,
    ) -> Result<(), AuthenticityError> {
        let at = ASN1Time::from_timestamp(now.unix_timestamp())
            .map_err(|_| AuthenticityError::OutsideValidityWindow)?;
        if !cert.validity().is_valid_at(at) {
            return Err(AuthenticityError::OutsideValidityWindow);
        }
        Ok(())
    }

    /// Checks that the pinned hostname appears among the alternate names.
    fn check_subject_names(&self, cert: &X509Certificate<'_>) -> Result<(), AuthenticityError> {
        let san = cert
            .subject_alternative_name()
            .map_err(|_| AuthenticityError::Parse("subject alternative name".to_string()))?
            .ok_or(AuthenticityError::SubjectMismatch)?;
        let found = san.value.general_names.iter().any(|name| {
            matches!(name, GeneralName::DNSName(dns) if *dns == self.anchors.signing_hostname)
        });
        if !found {
            return Err(AuthenticityError::SubjectMismatch);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Signature Check
// ============================================================================

/// Verifies the body signature with the certificate's RSA public key.
fn verify_body_signature(
    cert: &X509Certificate<'_>,
    signature_b64: &str,
    body: &[u8],
) -> Result<(), AuthenticityError> {
    let signature_bytes =
        Base64.decode(signature_b64).map_err(|_| AuthenticityError::SignatureEncoding)?;
    let signature = Signature::try_from(signature_bytes.as_slice())
        .map_err(|_| AuthenticityError::SignatureEncoding)?;
    let public_key =
        RsaPublicKey::from_pkcs1_der(cert.public_key().subject_public_key.data.as_ref())
            .map_err(|_| AuthenticityError::Parse("rsa public key".to_string()))?;
    let verifying_key = VerifyingKey::<Sha1>::new(public_key);
    verifying_key.verify(body, &signature).map_err(|_| AuthenticityError::SignatureMismatch)
}
