use metrics_exporter_prometheus::PrometheusHandle;
use mindtrx::assessment::{ReportCode, ReportStore, StoreError, StoredReport};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local report store; results live as long as the server does.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportStore {
    reports: Arc<Mutex<HashMap<ReportCode, StoredReport>>>,
}

impl ReportStore for InMemoryReportStore {
    fn save(&self, report: StoredReport) -> Result<StoredReport, StoreError> {
        let mut guard = self.reports.lock().expect("report store mutex poisoned");
        if guard.contains_key(&report.code) {
            return Err(StoreError::Conflict);
        }
        guard.insert(report.code.clone(), report.clone());
        Ok(report)
    }

    fn fetch(&self, code: &ReportCode) -> Result<Option<StoredReport>, StoreError> {
        let guard = self.reports.lock().expect("report store mutex poisoned");
        Ok(guard.get(code).cloned())
    }
}
