use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::answers::{AnswerError, AnswerSet};
use super::delivery::{
    render_report_email, DeliveryError, DeliveryReceipt, EmailRequest, ReportMailer,
};
use super::report::{ReportCode, ReportStore, StoreError, StoredReport};
use super::scoring::score;
use crate::config::DeliveryConfig;

/// Service composing the scoring engine with storage and delivery.
pub struct AssessmentService<S, M> {
    store: Arc<S>,
    mailer: Arc<M>,
    delivery: DeliveryConfig,
}

impl<S, M> AssessmentService<S, M>
where
    S: ReportStore + 'static,
    M: ReportMailer + 'static,
{
    pub fn new(store: Arc<S>, mailer: Arc<M>, delivery: DeliveryConfig) -> Self {
        Self {
            store,
            mailer,
            delivery,
        }
    }

    /// Validate and score raw answers, then persist the report under a fresh code.
    pub fn submit(&self, answers: &[Value]) -> Result<StoredReport, AssessmentServiceError> {
        let answers = AnswerSet::parse(answers)?;
        self.submit_answers(answers)
    }

    pub fn submit_answers(
        &self,
        answers: AnswerSet,
    ) -> Result<StoredReport, AssessmentServiceError> {
        let scores = score(&answers);
        let report = StoredReport::new(ReportCode::generate(), answers, scores);

        let stored = self.store.save(report)?;
        info!(
            code = %stored.code,
            quadrant = %stored.scores.quadrant,
            position = %stored.scores.position,
            "assessment report stored"
        );
        Ok(stored)
    }

    pub fn get(&self, code: &ReportCode) -> Result<StoredReport, AssessmentServiceError> {
        match self.store.fetch(code)? {
            Some(report) => Ok(report),
            None => {
                debug!(%code, "report lookup missed");
                Err(AssessmentServiceError::NotFound(code.clone()))
            }
        }
    }

    /// Render the stored report and hand it to the mailer.
    pub fn email(
        &self,
        code: &ReportCode,
        request: EmailRequest,
    ) -> Result<DeliveryReceipt, AssessmentServiceError> {
        let recipient = request.validated()?;
        let report = self.get(code)?;

        let message = render_report_email(
            &report,
            &recipient,
            &self.delivery.from_address,
            &self.delivery.public_url,
        );

        match self.mailer.send(message) {
            Ok(receipt) => {
                info!(%code, message_id = %receipt.message_id, "results email dispatched");
                Ok(receipt)
            }
            Err(err) => {
                warn!(%code, error = %err, "results email failed");
                Err(err.into())
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    InvalidAnswers(#[from] AnswerError),
    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),
    #[error("no report found for code {0}")]
    NotFound(ReportCode),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Delivery(DeliveryError),
}

impl From<DeliveryError> for AssessmentServiceError {
    fn from(value: DeliveryError) -> Self {
        match value {
            DeliveryError::InvalidRecipient(reason) => Self::InvalidRecipient(reason),
            other => Self::Delivery(other),
        }
    }
}
