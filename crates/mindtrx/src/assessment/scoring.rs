use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::classification::{classify_position, classify_quadrant, Band, Position, Quadrant};

/// Highest possible communication sum (14 items x 5).
pub const COMMUNICATION_MAX_RAW: u16 = 70;
/// Highest possible trust sum (13 items x 5).
pub const TRUST_MAX_RAW: u16 = 65;
/// Both axes are rescaled onto `0..=NORMALIZED_MAX`.
pub const NORMALIZED_MAX: u16 = 50;

/// Outcome of scoring one answer set. Field names are part of the stored
/// report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    pub comm_raw: u16,
    pub trust_raw: u16,
    pub comm50: u8,
    pub trust50: u8,
    pub quadrant: Quadrant,
    pub position: Position,
}

impl ScoreResult {
    pub fn comm_band(&self) -> Band {
        Band::of(self.comm50)
    }

    pub fn trust_band(&self) -> Band {
        Band::of(self.trust50)
    }
}

/// `round(raw / max * 50)`, rounding halves away from zero.
///
/// Done in integers so boundary scores never drift.
pub const fn normalize(raw: u16, max_raw: u16) -> u8 {
    let raw = raw as u32;
    let max = max_raw as u32;
    let scaled = (raw * NORMALIZED_MAX as u32 * 2 + max) / (2 * max);
    if scaled > NORMALIZED_MAX as u32 {
        NORMALIZED_MAX as u8
    } else {
        scaled as u8
    }
}

fn sum(values: &[u8]) -> u16 {
    values.iter().map(|value| u16::from(*value)).sum()
}

/// Score a validated answer set.
pub fn score(answers: &AnswerSet) -> ScoreResult {
    let comm_raw = sum(answers.communication());
    let trust_raw = sum(answers.trust());

    let comm50 = normalize(comm_raw, COMMUNICATION_MAX_RAW);
    let trust50 = normalize(trust_raw, TRUST_MAX_RAW);

    let quadrant = classify_quadrant(comm50, trust50);
    let position = classify_position(comm50, trust50, quadrant);

    ScoreResult {
        comm_raw,
        trust_raw,
        comm50,
        trust50,
        quadrant,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_matches_reference_values() {
        assert_eq!(normalize(56, COMMUNICATION_MAX_RAW), 40);
        assert_eq!(normalize(52, TRUST_MAX_RAW), 40);
        assert_eq!(normalize(14, COMMUNICATION_MAX_RAW), 10);
        assert_eq!(normalize(13, TRUST_MAX_RAW), 10);
        assert_eq!(normalize(70, COMMUNICATION_MAX_RAW), 50);
        assert_eq!(normalize(65, TRUST_MAX_RAW), 50);
    }

    #[test]
    fn normalize_agrees_with_float_rounding_over_full_range() {
        for (max, min) in [(COMMUNICATION_MAX_RAW, 14u16), (TRUST_MAX_RAW, 13u16)] {
            for raw in min..=max {
                let expected = (f64::from(raw) / f64::from(max) * 50.0).round() as u8;
                assert_eq!(normalize(raw, max), expected, "raw {raw} of {max}");
            }
        }
    }

    #[test]
    fn normalize_rounds_halves_up() {
        // 1/4 of 50 is 12.5
        assert_eq!(normalize(1, 4), 13);
        assert_eq!(normalize(3, 4), 38);
    }
}
