use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::questions::Dimension;

/// Number of items in the inventory.
pub const QUESTION_COUNT: usize = 27;
/// Items `0..COMMUNICATION_ITEMS` belong to the communication dimension.
pub const COMMUNICATION_ITEMS: usize = 14;
/// Items `COMMUNICATION_ITEMS..QUESTION_COUNT` belong to the trust dimension.
pub const TRUST_ITEMS: usize = QUESTION_COUNT - COMMUNICATION_ITEMS;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// Reasons an answer collection cannot be scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("expected {expected} answers, received {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("answer {index} is not an integer")]
    NotAnInteger { index: usize },
    #[error("answer {index} is {value}, expected a value between 1 and 5")]
    OutOfRange { index: usize, value: i64 },
    #[error("question index {index} is outside the inventory")]
    UnknownQuestion { index: usize },
    #[error("{missing} question(s) unanswered, starting at index {first}")]
    Incomplete { missing: usize, first: usize },
}

/// A complete, validated set of 27 Likert answers.
///
/// Only obtainable through [`AnswerSet::parse`], [`AnswerSet::try_from`], or
/// [`AnswerSheet::finish`], so anything holding one is safe to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerSet([u8; QUESTION_COUNT]);

impl AnswerSet {
    /// Validate an untyped JSON array as submitted by a client.
    pub fn parse(values: &[Value]) -> Result<Self, AnswerError> {
        if values.len() != QUESTION_COUNT {
            return Err(AnswerError::WrongLength {
                expected: QUESTION_COUNT,
                actual: values.len(),
            });
        }

        let mut answers = [0u8; QUESTION_COUNT];
        for (index, value) in values.iter().enumerate() {
            let number = integer_value(value).ok_or(AnswerError::NotAnInteger { index })?;
            answers[index] = checked_answer(index, number)?;
        }

        Ok(Self(answers))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn communication(&self) -> &[u8] {
        &self.0[..COMMUNICATION_ITEMS]
    }

    pub fn trust(&self) -> &[u8] {
        &self.0[COMMUNICATION_ITEMS..]
    }

    pub fn dimension(&self, dimension: Dimension) -> &[u8] {
        match dimension {
            Dimension::Communication => self.communication(),
            Dimension::Trust => self.trust(),
        }
    }
}

impl TryFrom<&[u8]> for AnswerSet {
    type Error = AnswerError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != QUESTION_COUNT {
            return Err(AnswerError::WrongLength {
                expected: QUESTION_COUNT,
                actual: values.len(),
            });
        }

        let mut answers = [0u8; QUESTION_COUNT];
        for (index, value) in values.iter().enumerate() {
            answers[index] = checked_answer(index, i64::from(*value))?;
        }
        Ok(Self(answers))
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        AnswerSet::parse(&values).map_err(serde::de::Error::custom)
    }
}

/// True iff `values` holds exactly 27 integers, each within 1..=5.
pub fn validate(values: &[Value]) -> bool {
    AnswerSet::parse(values).is_ok()
}

fn integer_value(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(integer) = number.as_i64() {
        return Some(integer);
    }
    if number.as_u64().is_some() {
        // Larger than i64::MAX, certainly out of range.
        return Some(i64::MAX);
    }
    let float = number.as_f64()?;
    if float.is_finite() && float.fract() == 0.0 {
        Some(float.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
    } else {
        None
    }
}

fn checked_answer(index: usize, value: i64) -> Result<u8, AnswerError> {
    if (i64::from(MIN_ANSWER)..=i64::from(MAX_ANSWER)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AnswerError::OutOfRange { index, value })
    }
}

/// In-progress answers, filled one question at a time.
///
/// Serializes as a 27-element array with `null` for unanswered questions, so
/// saved progress can be restored with the same validation as [`record`].
///
/// [`record`]: AnswerSheet::record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    slots: [Option<u8>; QUESTION_COUNT],
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write (or overwrite) the answer for `index`.
    pub fn record(&mut self, index: usize, value: u8) -> Result<(), AnswerError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AnswerError::UnknownQuestion { index })?;
        *slot = Some(checked_answer(index, i64::from(value))?);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == QUESTION_COUNT
    }

    /// First unanswered question, useful for resuming a session.
    pub fn next_unanswered(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn finish(&self) -> Result<AnswerSet, AnswerError> {
        if let Some(first) = self.next_unanswered() {
            return Err(AnswerError::Incomplete {
                missing: QUESTION_COUNT - self.answered(),
                first,
            });
        }

        let mut answers = [0u8; QUESTION_COUNT];
        for (index, slot) in self.slots.iter().enumerate() {
            answers[index] = slot.unwrap_or_default();
        }
        Ok(AnswerSet(answers))
    }

    /// Rebuild a sheet from saved progress.
    pub fn restore(values: &[Value]) -> Result<Self, AnswerError> {
        if values.len() != QUESTION_COUNT {
            return Err(AnswerError::WrongLength {
                expected: QUESTION_COUNT,
                actual: values.len(),
            });
        }

        let mut sheet = Self::new();
        for (index, value) in values.iter().enumerate() {
            if value.is_null() {
                continue;
            }
            let number = integer_value(value).ok_or(AnswerError::NotAnInteger { index })?;
            sheet.slots[index] = Some(checked_answer(index, number)?);
        }
        Ok(sheet)
    }
}

impl<'de> Deserialize<'de> for AnswerSheet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        AnswerSheet::restore(&values).map_err(serde::de::Error::custom)
    }
}
