//! Audit events and sinks for unexpected onboarding failures.
//!
//! [`TracingAuditLog`] writes events to the `tracing` pipeline and
//! [`CompositeAuditLog`] fans a single event out to several sinks.

use std::sync::Arc;

use serde::Serialize;

use crate::traits::AuditLog;

/// A single unexpected failure, as handed to an [`AuditLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Name of the onboarding server that observed the failure.
    pub server_name: String,
    /// Caller on whose behalf the call ran.
    pub user_id: String,
    /// Operation that failed (e.g. `"onboard"`).
    pub action: &'static str,
    /// Qualified name of the asset being onboarded, when known.
    pub qualified_name: Option<String>,
    /// Full internal description of the fault. Never returned to the caller.
    pub detail: String,
}

/// Audit sink that emits each event as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn log_unexpected(&self, event: &AuditEvent) -> anyhow::Result<()> {
        tracing::error!(
            target: "csv_onboard::audit",
            server = %event.server_name,
            user = %event.user_id,
            action = event.action,
            qualified_name = event.qualified_name.as_deref().unwrap_or(""),
            detail = %event.detail,
            "unexpected onboarding failure"
        );
        Ok(())
    }
}

/// Composite sink that forwards every event to all registered sinks.
///
/// A failing sink does not prevent later sinks from receiving the event;
/// the first error encountered is returned once all sinks have run.
#[derive(Default)]
pub struct CompositeAuditLog {
    sinks: Vec<Arc<dyn AuditLog>>,
}

impl CompositeAuditLog {
    /// Creates a composite sink with the given list of sinks.
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn AuditLog>>) -> Self {
        Self { sinks }
    }

    /// Adds a sink after construction.
    pub fn add(&mut self, sink: Arc<dyn AuditLog>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AuditLog for CompositeAuditLog {
    fn log_unexpected(&self, event: &AuditEvent) -> anyhow::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.log_unexpected(event) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Test sink that counts received events.
    struct CountingAuditLog {
        count: AtomicUsize,
    }

    impl CountingAuditLog {
        fn new() -> Self {
            Self {
                count: AtomicUsize::new(0),
            }
        }
    }

    impl AuditLog for CountingAuditLog {
        fn log_unexpected(&self, _: &AuditEvent) -> anyhow::Result<()> {
            self.count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    /// Test sink that always fails.
    struct FailingAuditLog;

    impl AuditLog for FailingAuditLog {
        fn log_unexpected(&self, _: &AuditEvent) -> anyhow::Result<()> {
            anyhow::bail!("audit backend offline")
        }
    }

    fn make_event() -> AuditEvent {
        AuditEvent {
            server_name: "test-server".to_string(),
            user_id: "alice".to_string(),
            action: "onboard",
            qualified_name: Some("CSVFile:/data/x.csv".to_string()),
            detail: "store exploded".to_string(),
        }
    }

    #[test]
    fn tracing_sink_accepts_events() {
        assert!(TracingAuditLog.log_unexpected(&make_event()).is_ok());
    }

    #[test]
    fn empty_composite_is_ok() {
        let composite = CompositeAuditLog::default();
        assert!(composite.is_empty());
        assert!(composite.log_unexpected(&make_event()).is_ok());
    }

    #[test]
    fn composite_fans_out_to_all_sinks() {
        let a = Arc::new(CountingAuditLog::new());
        let b = Arc::new(CountingAuditLog::new());
        let composite = CompositeAuditLog::new(vec![
            Arc::clone(&a) as Arc<dyn AuditLog>,
            Arc::clone(&b) as Arc<dyn AuditLog>,
        ]);

        composite.log_unexpected(&make_event()).unwrap();
        composite.log_unexpected(&make_event()).unwrap();

        assert_eq!(a.count.load(Ordering::Relaxed), 2);
        assert_eq!(b.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn failing_sink_does_not_block_later_sinks() {
        let counter = Arc::new(CountingAuditLog::new());
        let composite = CompositeAuditLog::new(vec![
            Arc::new(FailingAuditLog) as Arc<dyn AuditLog>,
            Arc::clone(&counter) as Arc<dyn AuditLog>,
        ]);

        let result = composite.log_unexpected(&make_event());
        assert!(result.is_err());
        assert_eq!(counter.count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn add_sink_after_construction() {
        let mut composite = CompositeAuditLog::default();
        let counter = Arc::new(CountingAuditLog::new());

        composite.log_unexpected(&make_event()).unwrap();
        composite.add(Arc::clone(&counter) as Arc<dyn AuditLog>);
        composite.log_unexpected(&make_event()).unwrap();

        assert_eq!(composite.len(), 1);
        assert_eq!(counter.count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn audit_log_is_object_safe() {
        fn _assert_object_safe(_: &Arc<dyn AuditLog>) {}
    }
}
