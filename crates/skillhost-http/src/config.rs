// crates/skillhost-http/src/config.rs
// ============================================================================
// Module: Skillhost Service Configuration
// Description: Process-wide skill configuration, set once before serving.
// Purpose: Carry the application identity and the dev/test switches.
// Dependencies: time
// ============================================================================

//! ## Overview
//! One configuration record covers both entry points: the application
//! identity the authenticator matches against, the dev/test flag that
//! disables certificate validation and the freshness/identity checks, the
//! verbose flag that logs raw inbound and outbound bodies, and the
//! timestamp tolerance. The record is read-only after setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;

use skillhost_verify::DEFAULT_TIMESTAMP_TOLERANCE;

// ============================================================================
// SECTION: Skill Configuration
// ============================================================================

/// Process-wide skill configuration.
///
/// # Invariants
/// - Values are fixed before serving begins and never mutated.
/// - `skip_validation` is a local-testing convenience, not a security
///   feature; production deployments leave it off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    /// Application identity this skill accepts requests for.
    pub application_id: String,
    /// Disables certificate validation and the freshness/identity checks.
    pub skip_validation: bool,
    /// Logs raw inbound and outbound JSON bodies.
    pub verbose: bool,
    /// Freshness tolerance applied to request timestamps.
    pub timestamp_tolerance: Duration,
}

impl SkillConfig {
    /// Creates a production configuration for the given application identity.
    #[must_use]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            skip_validation: false,
            verbose: false,
            timestamp_tolerance: DEFAULT_TIMESTAMP_TOLERANCE,
        }
    }

    /// Toggles the dev/test flag that skips every validation step.
    #[must_use]
    pub const fn skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }

    /// Toggles raw body logging.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replaces the timestamp freshness tolerance.
    #[must_use]
    pub const fn timestamp_tolerance(mut self, tolerance: Duration) -> Self {
        self.timestamp_tolerance = tolerance;
        self
    }
}
