use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::scoring::ScoreResult;

/// Revision of the position table the stored scores were produced with.
pub const SCHEMA_VERSION: &str = "v2";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TIME_DIGITS: usize = 6;
const RANDOM_DIGITS: usize = 4;
const SEQUENCE_DIGITS: usize = 2;

static CODE_SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Opaque lookup key handed back to the user after an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportCode(pub String);

impl ReportCode {
    pub fn generate() -> Self {
        Self(generate_code())
    }

    /// Accepts user-typed codes, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn push_base36(out: &mut String, mut value: u64, digits: usize) {
    let mut buf = vec![b'0'; digits];
    for slot in buf.iter_mut().rev() {
        *slot = BASE36[(value % 36) as usize];
        value /= 36;
    }
    out.extend(buf.into_iter().map(char::from));
}

/// Short human-copyable code such as `k3x9qa-Q7ZM01`.
///
/// Millisecond clock digits, then random characters and a rolling sequence
/// so calls within the same millisecond still differ.
pub fn generate_code() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let sequence = CODE_SEQUENCE.fetch_add(1, Ordering::Relaxed) as u64;
    let mut rng = rand::thread_rng();

    let mut code = String::with_capacity(TIME_DIGITS + 1 + RANDOM_DIGITS + SEQUENCE_DIGITS);
    push_base36(&mut code, millis, TIME_DIGITS);
    code.push('-');
    for _ in 0..RANDOM_DIGITS {
        let digit = BASE36[rng.gen_range(0..BASE36.len())];
        code.push(char::from(digit.to_ascii_uppercase()));
    }
    let mut tail = String::with_capacity(SEQUENCE_DIGITS);
    push_base36(&mut tail, sequence, SEQUENCE_DIGITS);
    code.push_str(&tail.to_ascii_uppercase());
    code
}

/// Record persisted for a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub code: ReportCode,
    pub created_at: DateTime<Utc>,
    pub answers: AnswerSet,
    pub scores: ScoreResult,
    pub schema_version: String,
}

impl StoredReport {
    pub fn new(code: ReportCode, answers: AnswerSet, scores: ScoreResult) -> Self {
        Self {
            code,
            created_at: Utc::now(),
            answers,
            scores,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a backend.
pub trait ReportStore: Send + Sync {
    fn save(&self, report: StoredReport) -> Result<StoredReport, StoreError>;
    fn fetch(&self, code: &ReportCode) -> Result<Option<StoredReport>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("report code already in use")]
    Conflict,
    #[error("report store unavailable: {0}")]
    Unavailable(String),
}
