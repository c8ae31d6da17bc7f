use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a failed onboarding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Caller-supplied data was rejected. Not retried.
    InvalidInput,
    /// The backing store could not complete the operation.
    StoreUnavailable,
    /// The caller lacks permission.
    NotAuthorized,
    /// Any other fault. The message carries no internal detail.
    Unexpected,
}

impl ErrorKind {
    /// HTTP-style status code reported alongside the error.
    #[must_use]
    pub fn http_code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::NotAuthorized => 403,
            Self::StoreUnavailable | Self::Unexpected => 500,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::StoreUnavailable => "store_unavailable",
            Self::NotAuthorized => "not_authorized",
            Self::Unexpected => "unexpected",
        }
    }
}

/// Structured error carried by a failed [`OnboardingResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingError {
    pub kind: ErrorKind,
    pub related_http_code: u16,
    pub message: String,
}

impl OnboardingError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            related_http_code: kind.http_code(),
            message: message.into(),
        }
    }
}

/// Outcome of one onboarding call: an identifier, an error, or (for an
/// absent request under the no-op policy) neither. Never both.
///
/// Fields are private so the "never both" rule holds by construction;
/// deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawOnboardingResult")]
pub struct OnboardingResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<OnboardingError>,
}

/// Wire shape of [`OnboardingResult`] before the "never both" check.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOnboardingResult {
    #[serde(default)]
    guid: Option<String>,
    #[serde(default)]
    error: Option<OnboardingError>,
}

/// Returned when a serialized result carries both an identifier and an error.
#[derive(Debug, Error)]
#[error("onboarding result carries both a guid and an error")]
pub struct ConflictingOutcome;

impl TryFrom<RawOnboardingResult> for OnboardingResult {
    type Error = ConflictingOutcome;

    fn try_from(raw: RawOnboardingResult) -> Result<Self, Self::Error> {
        if raw.guid.is_some() && raw.error.is_some() {
            return Err(ConflictingOutcome);
        }
        Ok(Self {
            guid: raw.guid,
            error: raw.error,
        })
    }
}

impl OnboardingResult {
    /// Successful result wrapping the store-assigned identifier.
    #[must_use]
    pub fn created(guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            error: None,
        }
    }

    /// Failed result.
    #[must_use]
    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            guid: None,
            error: Some(OnboardingError::new(kind, message)),
        }
    }

    /// Result carrying neither identifier nor error.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&OnboardingError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.guid.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guid.is_none() && self.error.is_none()
    }
}
