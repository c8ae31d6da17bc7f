use csv_onboard_core::CatalogIdentities;

/// What the orchestrator does when a call arrives without a request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentRequestPolicy {
    /// Return a result carrying neither identifier nor error.
    #[default]
    NoOp,
    /// Return an `InvalidInput` error.
    Reject,
}

/// Configuration for the onboarding orchestrator.
///
/// Carries the identity space given to shared sub-objects and the policy for
/// calls without a request.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Name of this onboarding server, recorded in logs and audit events.
    pub server_name: String,
    /// Fixed identities for the endpoint, connector type, and connection.
    pub identities: CatalogIdentities,
    /// Handling of a missing request.
    pub absent_request: AbsentRequestPolicy,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            server_name: "csv-onboard".to_string(),
            identities: CatalogIdentities::default(),
            absent_request: AbsentRequestPolicy::NoOp,
        }
    }
}
