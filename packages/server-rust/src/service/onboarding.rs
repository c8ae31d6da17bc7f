//! The onboarding orchestrator.
//!
//! [`OnboardingService::onboard`] builds the descriptor graph for a request,
//! submits it to the catalog store once, and folds every possible outcome
//! (identifier, typed store failure, or a panic inside the store) into a
//! single [`OnboardingResult`].

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use csv_onboard_core::{
    DescriptorBuilder, ErrorKind, OnboardingRequest, OnboardingResult, StoreError,
};
use futures_util::FutureExt;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::config::{AbsentRequestPolicy, OnboardingConfig};
use crate::audit::AuditEvent;
use crate::traits::{AuditLog, CatalogStore};

/// Message returned to the caller for unexpected failures. Details go to the audit log.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "an unexpected error occurred while onboarding the file; see the server audit log";

/// Message returned when a request is required but absent.
pub const MISSING_REQUEST_MESSAGE: &str = "an onboarding request is required";

const ACTION: &str = "onboard";

/// Adds CSV files to a catalog store.
///
/// Holds no per-call state; share it behind an `Arc` across tasks.
pub struct OnboardingService {
    config: Arc<OnboardingConfig>,
    builder: DescriptorBuilder,
    store: Arc<dyn CatalogStore>,
    audit: Option<Arc<dyn AuditLog>>,
}

impl OnboardingService {
    /// Creates a service without an audit sink.
    #[must_use]
    pub fn new(config: OnboardingConfig, store: Arc<dyn CatalogStore>) -> Self {
        let builder = DescriptorBuilder::new(config.identities.clone());
        Self {
            config: Arc::new(config),
            builder,
            store,
            audit: None,
        }
    }

    /// Attaches the sink that receives unexpected failures.
    #[must_use]
    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = Some(audit);
        self
    }

    #[must_use]
    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    /// Onboards one CSV file on behalf of `user_id`.
    ///
    /// Always returns a well-formed result: an identifier on success, an
    /// error otherwise, or neither when `request` is `None` and the
    /// configured policy is [`AbsentRequestPolicy::NoOp`].
    pub async fn onboard(
        &self,
        user_id: &str,
        request: Option<OnboardingRequest>,
    ) -> OnboardingResult {
        let span = info_span!(
            "onboard",
            server = %self.config.server_name,
            user = %user_id,
            qualified_name = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        async move {
            debug!("onboarding call started");

            let result = match request {
                Some(request) => self.submit(user_id, &request).await,
                None => self.absent_request(),
            };

            let outcome = result.error_kind().map_or(
                if result.is_empty() { "empty" } else { "created" },
                ErrorKind::as_str,
            );
            tracing::Span::current().record("outcome", outcome);
            debug!(outcome, "onboarding call finished");

            result
        }
        .instrument(span)
        .await
    }

    async fn submit(&self, user_id: &str, request: &OnboardingRequest) -> OnboardingResult {
        let graph = self.builder.build(request);
        let qualified_name = graph.asset.qualified_name.clone();
        tracing::Span::current().record("qualified_name", qualified_name.as_str());
        debug!(
            has_schema = graph.schema.is_some(),
            "submitting asset graph to catalog store"
        );

        let outcome = AssertUnwindSafe(self.store.create_asset(user_id, graph))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(guid)) => {
                info!(guid = %guid, "CSV file asset created");
                OnboardingResult::created(guid)
            }
            Ok(Err(err)) => self.store_failure(user_id, &qualified_name, err),
            Err(panic) => self.unexpected(
                user_id,
                &qualified_name,
                format!("catalog store panicked: {}", panic_message(panic.as_ref())),
            ),
        }
    }

    fn store_failure(
        &self,
        user_id: &str,
        qualified_name: &str,
        err: StoreError,
    ) -> OnboardingResult {
        match err {
            StoreError::InvalidParameter { .. } => {
                warn!(error = %err, "catalog store rejected the request");
                OnboardingResult::failed(ErrorKind::InvalidInput, err.to_string())
            }
            StoreError::PropertyServer(_) => {
                error!(error = %err, "catalog store could not complete the request");
                OnboardingResult::failed(ErrorKind::StoreUnavailable, err.to_string())
            }
            StoreError::UserNotAuthorized { .. } => {
                warn!(error = %err, "caller not authorized");
                OnboardingResult::failed(ErrorKind::NotAuthorized, err.to_string())
            }
            StoreError::Unexpected(source) => {
                self.unexpected(user_id, qualified_name, format!("{source:#}"))
            }
        }
    }

    fn unexpected(&self, user_id: &str, qualified_name: &str, detail: String) -> OnboardingResult {
        error!(detail = %detail, "unexpected onboarding failure");

        if let Some(audit) = &self.audit {
            let event = AuditEvent {
                server_name: self.config.server_name.clone(),
                user_id: user_id.to_string(),
                action: ACTION,
                qualified_name: Some(qualified_name.to_string()),
                detail,
            };
            if let Err(e) = audit.log_unexpected(&event) {
                warn!(error = %e, "audit log unavailable; event dropped");
            }
        }

        OnboardingResult::failed(ErrorKind::Unexpected, UNEXPECTED_ERROR_MESSAGE)
    }

    fn absent_request(&self) -> OnboardingResult {
        match self.config.absent_request {
            AbsentRequestPolicy::NoOp => {
                warn!("onboarding called without a request; nothing was created");
                OnboardingResult::empty()
            }
            AbsentRequestPolicy::Reject => {
                warn!("onboarding called without a request; rejecting");
                OnboardingResult::failed(ErrorKind::InvalidInput, MISSING_REQUEST_MESSAGE)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
