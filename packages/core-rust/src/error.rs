use thiserror::Error;

/// Failure reported by a catalog store when it cannot record an asset graph.
///
/// Every store implementation maps its own faults onto these four cases;
/// anything it cannot classify goes into [`StoreError::Unexpected`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied data was rejected. Correctable by the caller.
    #[error("invalid value for parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
    /// The store could not complete the operation.
    #[error("catalog store failure: {0}")]
    PropertyServer(String),
    /// The caller lacks permission to create the asset.
    #[error("user '{user_id}' is not authorized to create assets")]
    UserNotAuthorized { user_id: String },
    /// Any other fault.
    #[error("unexpected store error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl StoreError {
    /// Shorthand for [`StoreError::InvalidParameter`].
    #[must_use]
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
