use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::delivery::{DeliveryError, EmailRequest, ReportMailer};
use super::feedback::{feedback_for, Feedback};
use super::questions::{quiz_items, sections, QuizItem, SectionInfo};
use super::report::{ReportCode, ReportStore, StoreError, StoredReport};
use super::service::{AssessmentService, AssessmentServiceError};

/// Body accepted by the submission endpoint. Answers stay untyped until
/// validation so the error can say which item was wrong.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssessmentSubmission {
    pub answers: Vec<Value>,
}

/// Stored report plus the copy a results page shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(flatten)]
    pub report: StoredReport,
    pub feedback: Feedback,
}

impl From<StoredReport> for ReportView {
    fn from(report: StoredReport) -> Self {
        let feedback = feedback_for(&report.scores);
        Self { report, feedback }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    pub sections: [SectionInfo; 2],
    pub items: &'static [QuizItem],
}

/// Router builder exposing the questionnaire, scoring, and report endpoints.
pub fn assessment_router<S, M>(service: Arc<AssessmentService<S, M>>) -> Router
where
    S: ReportStore + 'static,
    M: ReportMailer + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/assessments", post(submit_handler::<S, M>))
        .route("/api/v1/reports/:code", get(report_handler::<S, M>))
        .route("/api/v1/reports/:code/email", post(email_handler::<S, M>))
        .with_state(service)
}

pub(crate) async fn questions_handler() -> axum::Json<QuestionCatalog> {
    axum::Json(QuestionCatalog {
        sections: sections(),
        items: quiz_items(),
    })
}

pub(crate) async fn submit_handler<S, M>(
    State(service): State<Arc<AssessmentService<S, M>>>,
    body: Result<axum::Json<AssessmentSubmission>, JsonRejection>,
) -> Response
where
    S: ReportStore + 'static,
    M: ReportMailer + 'static,
{
    let submission = match body {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection.status(), &rejection),
    };

    match service.submit(&submission.answers) {
        Ok(report) => (StatusCode::CREATED, axum::Json(ReportView::from(report))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<S, M>(
    State(service): State<Arc<AssessmentService<S, M>>>,
    Path(code): Path<String>,
) -> Response
where
    S: ReportStore + 'static,
    M: ReportMailer + 'static,
{
    let code = ReportCode::parse(&code);
    match service.get(&code) {
        Ok(report) => (StatusCode::OK, axum::Json(ReportView::from(report))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn email_handler<S, M>(
    State(service): State<Arc<AssessmentService<S, M>>>,
    Path(code): Path<String>,
    body: Result<axum::Json<EmailRequest>, JsonRejection>,
) -> Response
where
    S: ReportStore + 'static,
    M: ReportMailer + 'static,
{
    let request = match body {
        Ok(axum::Json(request)) => request,
        // Well-formed JSON with unusable fields is a bad recipient, not a bad document.
        Err(rejection @ JsonRejection::JsonDataError(_)) => {
            return rejection_response(StatusCode::BAD_REQUEST, &rejection)
        }
        Err(rejection) => return rejection_response(rejection.status(), &rejection),
    };

    let code = ReportCode::parse(&code);
    // Mail transports block on network I/O.
    let outcome = tokio::task::spawn_blocking(move || service.email(&code, request)).await;
    let outcome = outcome.unwrap_or_else(|join_error| {
        Err(AssessmentServiceError::Delivery(DeliveryError::Transport(
            format!("delivery task failed: {join_error}"),
        )))
    });

    match outcome {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "messageId": receipt.message_id,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// HTTP status that best describes a service failure.
pub fn status_for(err: &AssessmentServiceError) -> StatusCode {
    match err {
        AssessmentServiceError::InvalidAnswers(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::InvalidRecipient(_) => StatusCode::BAD_REQUEST,
        AssessmentServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Store(StoreError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AssessmentServiceError::Delivery(DeliveryError::NotConfigured) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        AssessmentServiceError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (status_for(&err), axum::Json(payload)).into_response()
}

fn rejection_response(status: StatusCode, rejection: &JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (status, axum::Json(payload)).into_response()
}
