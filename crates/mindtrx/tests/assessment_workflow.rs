//! End-to-end scenarios driven through the public service facade and router:
//! a respondent fills the sheet, the result is stored, looked up by code, and emailed.

mod common {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use mindtrx::assessment::{
        AssessmentService, DeliveryError, DeliveryReceipt, OutboundEmail, ReportCode,
        ReportMailer, ReportStore, StoreError, StoredReport,
    };
    use mindtrx::config::DeliveryConfig;

    #[derive(Default)]
    pub(super) struct SharedStore {
        reports: Mutex<BTreeMap<ReportCode, StoredReport>>,
    }

    impl ReportStore for SharedStore {
        fn save(&self, report: StoredReport) -> Result<StoredReport, StoreError> {
            let mut guard = self.reports.lock().expect("store mutex poisoned");
            if guard.contains_key(&report.code) {
                return Err(StoreError::Conflict);
            }
            guard.insert(report.code.clone(), report.clone());
            Ok(report)
        }

        fn fetch(&self, code: &ReportCode) -> Result<Option<StoredReport>, StoreError> {
            Ok(self
                .reports
                .lock()
                .expect("store mutex poisoned")
                .get(code)
                .cloned())
        }
    }

    #[derive(Default)]
    pub(super) struct Outbox {
        pub(super) messages: Mutex<Vec<OutboundEmail>>,
    }

    impl ReportMailer for Outbox {
        fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
            let mut guard = self.messages.lock().expect("outbox mutex poisoned");
            guard.push(email);
            Ok(DeliveryReceipt {
                message_id: format!("outbox-{}", guard.len()),
            })
        }
    }

    pub(super) fn service() -> (
        Arc<AssessmentService<SharedStore, Outbox>>,
        Arc<SharedStore>,
        Arc<Outbox>,
    ) {
        let store = Arc::new(SharedStore::default());
        let outbox = Arc::new(Outbox::default());
        let service = Arc::new(AssessmentService::new(
            store.clone(),
            outbox.clone(),
            DeliveryConfig::default(),
        ));
        (service, store, outbox)
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use mindtrx::assessment::{
    assessment_router, score, validate, AnswerSheet, EmailRequest, Position, Quadrant,
    ReportCode, QUESTION_COUNT,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[test]
fn sheet_to_emailed_report() {
    let (service, _store, outbox) = common::service();

    let mut sheet = AnswerSheet::new();
    for index in 0..QUESTION_COUNT {
        sheet.record(index, 1).expect("valid write");
    }
    // Change of heart on the first trust item.
    sheet.record(14, 2).expect("overwrite");
    sheet.record(14, 1).expect("overwrite back");

    let answers = sheet.finish().expect("complete sheet");
    let report = service.submit_answers(answers).expect("stored");
    assert_eq!(report.scores.quadrant, Quadrant::DisengagedMind);
    assert_eq!(report.scores.position, Position::FrozenPotential);

    let typed_code = format!("  {}  ", report.code);
    let fetched = service
        .get(&ReportCode::parse(&typed_code))
        .expect("lookup by typed code");
    assert_eq!(fetched, report);

    let receipt = service
        .email(
            &report.code,
            EmailRequest {
                name: "Lin".to_string(),
                email: "lin@example.com".to_string(),
            },
        )
        .expect("email sent");
    assert_eq!(receipt.message_id, "outbox-1");

    let messages = outbox.messages.lock().expect("outbox mutex poisoned");
    assert!(messages[0]
        .html
        .contains(&format!("https://mindtrx.app/results?code={}", report.code)));
}

#[test]
fn validate_gates_scoring() {
    let good: Vec<Value> = (0..QUESTION_COUNT).map(|i| json!(i % 5 + 1)).collect();
    assert!(validate(&good));

    let mut bad = good.clone();
    bad[3] = json!(2.5);
    assert!(!validate(&bad));

    let answers = mindtrx::assessment::AnswerSet::parse(&good).expect("valid");
    let first = score(&answers);
    let second = score(&answers);
    assert_eq!(first, second);
}

#[tokio::test]
async fn router_round_trip_submit_then_fetch() {
    let (service, _store, _outbox) = common::service();
    let router = assessment_router(service);

    let answers: Vec<Value> = std::iter::repeat(json!(3))
        .take(14)
        .chain(std::iter::repeat(json!(5)).take(13))
        .collect();

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "answers": answers })).expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("submit executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    let created: Value = serde_json::from_slice(&body).expect("json");
    let code = created["code"].as_str().expect("code").to_string();
    assert_eq!(created["scores"]["position"], "Symbolic Strategist");

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/reports/{code}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("fetch executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    let fetched: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(fetched["code"], code.as_str());
    assert_eq!(fetched["scores"], created["scores"]);
}
