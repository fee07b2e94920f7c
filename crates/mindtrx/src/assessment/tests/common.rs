use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::answers::{AnswerSet, COMMUNICATION_ITEMS, QUESTION_COUNT};
use crate::assessment::delivery::{DeliveryError, DeliveryReceipt, OutboundEmail, ReportMailer};
use crate::assessment::report::{ReportCode, ReportStore, StoreError, StoredReport};
use crate::assessment::{assessment_router, AssessmentService};
use crate::config::DeliveryConfig;

/// Answers with one value for every communication item and another for every trust item.
pub(super) fn split_answers(communication: u8, trust: u8) -> AnswerSet {
    let mut raw = [trust; QUESTION_COUNT];
    raw[..COMMUNICATION_ITEMS].fill(communication);
    AnswerSet::try_from(&raw[..]).expect("fixture answers are valid")
}

pub(super) fn split_json(communication: u8, trust: u8) -> Vec<Value> {
    split_answers(communication, trust)
        .as_slice()
        .iter()
        .map(|value| json!(value))
        .collect()
}

pub(super) fn delivery_config() -> DeliveryConfig {
    DeliveryConfig {
        public_url: "https://results.example.test".to_string(),
        from_address: "noreply@example.test".to_string(),
        smtp: None,
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    reports: Mutex<HashMap<ReportCode, StoredReport>>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.reports.lock().expect("store mutex poisoned").len()
    }
}

impl ReportStore for MemoryStore {
    fn save(&self, report: StoredReport) -> Result<StoredReport, StoreError> {
        let mut guard = self.reports.lock().expect("store mutex poisoned");
        if guard.contains_key(&report.code) {
            return Err(StoreError::Conflict);
        }
        guard.insert(report.code.clone(), report.clone());
        Ok(report)
    }

    fn fetch(&self, code: &ReportCode) -> Result<Option<StoredReport>, StoreError> {
        let guard = self.reports.lock().expect("store mutex poisoned");
        Ok(guard.get(code).cloned())
    }
}

#[derive(Default)]
pub(super) struct MemoryMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

impl ReportMailer for MemoryMailer {
    fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let mut guard = self.sent.lock().expect("mailer mutex poisoned");
        guard.push(email);
        Ok(DeliveryReceipt {
            message_id: format!("msg-{}", guard.len()),
        })
    }
}

pub(super) struct ConflictStore;

impl ReportStore for ConflictStore {
    fn save(&self, _report: StoredReport) -> Result<StoredReport, StoreError> {
        Err(StoreError::Conflict)
    }

    fn fetch(&self, _code: &ReportCode) -> Result<Option<StoredReport>, StoreError> {
        Ok(None)
    }
}

pub(super) struct UnavailableStore;

impl ReportStore for UnavailableStore {
    fn save(&self, _report: StoredReport) -> Result<StoredReport, StoreError> {
        Err(StoreError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _code: &ReportCode) -> Result<Option<StoredReport>, StoreError> {
        Err(StoreError::Unavailable("storage offline".to_string()))
    }
}

pub(super) struct OfflineMailer;

impl ReportMailer for OfflineMailer {
    fn send(&self, _email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::Transport("smtp relay refused connection".to_string()))
    }
}

pub(super) struct UnconfiguredMailer;

impl ReportMailer for UnconfiguredMailer {
    fn send(&self, _email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::NotConfigured)
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryStore, MemoryMailer>,
    Arc<MemoryStore>,
    Arc<MemoryMailer>,
) {
    let store = Arc::new(MemoryStore::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = AssessmentService::new(store.clone(), mailer.clone(), delivery_config());
    (service, store, mailer)
}

pub(super) fn router_with_service(
    service: AssessmentService<MemoryStore, MemoryMailer>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
