//! Onboarding orchestration.
//!
//! 1. **Configuration** (`config`): server name, identity space, absent-request policy
//! 2. **Orchestrator** (`onboarding`): request -> descriptor graph -> store -> result

pub mod config;
pub mod onboarding;

// Re-export key types for convenient access.
pub use config::{AbsentRequestPolicy, OnboardingConfig};
pub use onboarding::{OnboardingService, MISSING_REQUEST_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
