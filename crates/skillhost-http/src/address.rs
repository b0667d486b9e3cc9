// crates/skillhost-http/src/address.rs
// ============================================================================
// Module: Skillhost Device Address Client
// Description: Authenticated lookup of the device's configured address.
// Purpose: Let callbacks read customer address data from platform services.
// Dependencies: skillhost-core, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! The device address client performs an authenticated GET against the
//! platform's device settings API using the endpoint, device identifier,
//! and bearer token carried in the request context. A 403 from the platform
//! means the user has not granted the address permission; callers usually
//! answer it by sending a permissions-consent card.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use skillhost_core::System;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Timeout applied to address lookups.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Address lookup failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The access token is invalid or lacks the address permission.
    #[error("the access token is invalid or lacks access to the resource")]
    NotAuthorized,
    /// The platform answered with an unexpected status code.
    #[error("address lookup failed with status {status}")]
    Status {
        /// Status code returned by the platform.
        status: u16,
    },
    /// The request could not be sent.
    #[error("address lookup failed: {0}")]
    Http(String),
    /// The response body could not be decoded.
    #[error("address response decode failed: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Address Records
// ============================================================================

/// Country and postal code of the device address.
///
/// Fields are optional because the platform returns `null` for values the
/// customer has not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortAddress {
    /// Country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Complete device address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAddress {
    /// Country and postal code.
    #[serde(flatten)]
    pub short: ShortAddress,
    /// State or region.
    #[serde(default)]
    pub state_or_region: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// First address line.
    #[serde(default)]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(default)]
    pub address_line2: Option<String>,
    /// Third address line.
    #[serde(default)]
    pub address_line3: Option<String>,
    /// District or county.
    #[serde(default)]
    pub district_or_county: Option<String>,
}

// ============================================================================
// SECTION: Device Address Client
// ============================================================================

/// Blocking client for the device settings address API.
#[derive(Debug, Clone)]
pub struct DeviceAddressClient {
    /// HTTP client used for lookups.
    client: Client,
}

impl DeviceAddressClient {
    /// Builds an address client with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, AddressError> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|_| AddressError::Http("http client build failed".to_string()))?;
        Ok(Self {
            client,
        })
    }

    /// Looks up the country and postal code for the requesting device.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the lookup fails or is not permitted.
    pub fn country_and_postal_code(&self, system: &System) -> Result<ShortAddress, AddressError> {
        let url = format!(
            "{}/v1/devices/{}/settings/address/countryAndPostalCode",
            system.api_endpoint, system.device.device_id
        );
        self.get_json(&url, &system.api_access_token)
    }

    /// Looks up the full address for the requesting device.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the lookup fails or is not permitted.
    pub fn full_address(&self, system: &System) -> Result<FullAddress, AddressError> {
        let url = format!(
            "{}/v1/devices/{}/settings/address",
            system.api_endpoint, system.device.device_id
        );
        self.get_json(&url, &system.api_access_token)
    }

    /// Performs an authenticated GET and decodes the JSON response.
    fn get_json<T>(&self, url: &str, access_token: &str) -> Result<T, AddressError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(access_token)
            .send()
            .map_err(|err| AddressError::Http(err.to_string()))?;
        if response.status() == StatusCode::FORBIDDEN {
            return Err(AddressError::NotAuthorized);
        }
        if !response.status().is_success() {
            return Err(AddressError::Status {
                status: response.status().as_u16(),
            });
        }
        response.json().map_err(|err| AddressError::Decode(err.to_string()))
    }
}
