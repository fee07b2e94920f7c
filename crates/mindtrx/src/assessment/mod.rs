//! Inner Mind Integration Inventory: answer validation, scoring, position
//! classification, and the report store and mailer seams around them.
//!
//! `answers`, `scoring`, and `classification` are pure. Everything with side
//! effects goes through [`ReportStore`] or [`ReportMailer`] so the engine can
//! be tested with literal answer arrays.

pub mod answers;
pub mod classification;
pub mod delivery;
pub mod feedback;
pub mod questions;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{validate, AnswerError, AnswerSet, AnswerSheet, QUESTION_COUNT};
pub use classification::{
    classify_position, classify_quadrant, position_for, Band, Position, Quadrant,
};
pub use delivery::{
    render_report_email, DeliveryError, DeliveryReceipt, EmailRequest, OutboundEmail,
    ReportMailer,
};
pub use feedback::{
    feedback_for, position_feedback, quadrant_feedback, Feedback, FeedbackContent,
};
pub use questions::{quiz_items, sections, Dimension, QuizItem, SectionInfo};
pub use report::{generate_code, ReportCode, ReportStore, StoreError, StoredReport, SCHEMA_VERSION};
pub use router::{assessment_router, status_for, AssessmentSubmission, ReportView};
pub use scoring::{normalize, score, ScoreResult};
pub use service::{AssessmentService, AssessmentServiceError};
