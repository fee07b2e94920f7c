use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized scores at or above this value sit in the high half of an axis.
pub const HIGH_THRESHOLD: u8 = 26;
/// Highest normalized score in the lower sub-band of the low half.
pub const LOW_BAND_CEILING: u8 = 12;
/// Highest normalized score in the lower sub-band of the high half.
pub const HIGH_BAND_CEILING: u8 = 38;

/// Coarse classification by which axes reach [`HIGH_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Disengaged Mind")]
    DisengagedMind,
    #[serde(rename = "Skeptical Explorer")]
    SkepticalExplorer,
    #[serde(rename = "Faithful Seeker")]
    FaithfulSeeker,
    #[serde(rename = "Integrated Alchemist")]
    IntegratedAlchemist,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DisengagedMind,
        Quadrant::SkepticalExplorer,
        Quadrant::FaithfulSeeker,
        Quadrant::IntegratedAlchemist,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::DisengagedMind => "Disengaged Mind",
            Quadrant::SkepticalExplorer => "Skeptical Explorer",
            Quadrant::FaithfulSeeker => "Faithful Seeker",
            Quadrant::IntegratedAlchemist => "Integrated Alchemist",
        }
    }

    /// The four positions inside this quadrant.
    pub fn positions(self) -> [Position; 4] {
        let (comm, trust) = match self {
            Quadrant::DisengagedMind => (Half::Low, Half::Low),
            Quadrant::SkepticalExplorer => (Half::High, Half::Low),
            Quadrant::FaithfulSeeker => (Half::Low, Half::High),
            Quadrant::IntegratedAlchemist => (Half::High, Half::High),
        };
        let [comm_lower, comm_upper] = comm.bands();
        let [trust_lower, trust_upper] = trust.bands();
        [
            position_for(comm_lower, trust_lower),
            position_for(comm_upper, trust_lower),
            position_for(comm_lower, trust_upper),
            position_for(comm_upper, trust_upper),
        ]
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Low,
    High,
}

impl Half {
    const fn bands(self) -> [Band; 2] {
        match self {
            Half::Low => [Band::LowLow, Band::LowHigh],
            Half::High => [Band::HighLow, Band::HighHigh],
        }
    }
}

/// Sub-band of a single normalized axis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    LowLow,
    LowHigh,
    HighLow,
    HighHigh,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::LowLow, Band::LowHigh, Band::HighLow, Band::HighHigh];

    pub const fn of(score: u8) -> Self {
        if score < HIGH_THRESHOLD {
            if score <= LOW_BAND_CEILING {
                Band::LowLow
            } else {
                Band::LowHigh
            }
        } else if score <= HIGH_BAND_CEILING {
            Band::HighLow
        } else {
            Band::HighHigh
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Band::HighLow | Band::HighHigh)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Band::LowLow => "lowLow",
            Band::LowHigh => "lowHigh",
            Band::HighLow => "highLow",
            Band::HighHigh => "highHigh",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the sixteen fine-grained placements, four per quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Frozen Potential")]
    FrozenPotential,
    #[serde(rename = "Overstimulated Skeptic")]
    OverstimulatedSkeptic,
    #[serde(rename = "Conditioned Thinker")]
    ConditionedThinker,
    #[serde(rename = "Detached Observer")]
    DetachedObserver,
    #[serde(rename = "Methodical Practitioner")]
    MethodicalPractitioner,
    #[serde(rename = "Hopeful Doubter")]
    HopefulDoubter,
    #[serde(rename = "Spiritual Technician")]
    SpiritualTechnician,
    #[serde(rename = "Experimental Learner")]
    ExperimentalLearner,
    #[serde(rename = "Inner Believer")]
    InnerBeliever,
    #[serde(rename = "Visionary Dreamer")]
    VisionaryDreamer,
    #[serde(rename = "Sacred Observer")]
    SacredObserver,
    #[serde(rename = "Intentional Yearner")]
    IntentionalYearner,
    #[serde(rename = "Grounded Mystic")]
    GroundedMystic,
    #[serde(rename = "Creative Conduit")]
    CreativeConduit,
    #[serde(rename = "Symbolic Strategist")]
    SymbolicStrategist,
    #[serde(rename = "Embodied Transformer")]
    EmbodiedTransformer,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::FrozenPotential => "Frozen Potential",
            Position::OverstimulatedSkeptic => "Overstimulated Skeptic",
            Position::ConditionedThinker => "Conditioned Thinker",
            Position::DetachedObserver => "Detached Observer",
            Position::MethodicalPractitioner => "Methodical Practitioner",
            Position::HopefulDoubter => "Hopeful Doubter",
            Position::SpiritualTechnician => "Spiritual Technician",
            Position::ExperimentalLearner => "Experimental Learner",
            Position::InnerBeliever => "Inner Believer",
            Position::VisionaryDreamer => "Visionary Dreamer",
            Position::SacredObserver => "Sacred Observer",
            Position::IntentionalYearner => "Intentional Yearner",
            Position::GroundedMystic => "Grounded Mystic",
            Position::CreativeConduit => "Creative Conduit",
            Position::SymbolicStrategist => "Symbolic Strategist",
            Position::EmbodiedTransformer => "Embodied Transformer",
        }
    }

    pub const fn quadrant(self) -> Quadrant {
        match self {
            Position::FrozenPotential
            | Position::OverstimulatedSkeptic
            | Position::ConditionedThinker
            | Position::DetachedObserver => Quadrant::DisengagedMind,
            Position::MethodicalPractitioner
            | Position::HopefulDoubter
            | Position::SpiritualTechnician
            | Position::ExperimentalLearner => Quadrant::SkepticalExplorer,
            Position::InnerBeliever
            | Position::VisionaryDreamer
            | Position::SacredObserver
            | Position::IntentionalYearner => Quadrant::FaithfulSeeker,
            Position::GroundedMystic
            | Position::CreativeConduit
            | Position::SymbolicStrategist
            | Position::EmbodiedTransformer => Quadrant::IntegratedAlchemist,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold is inclusive on the high side for both axes.
pub const fn classify_quadrant(comm50: u8, trust50: u8) -> Quadrant {
    match (comm50 >= HIGH_THRESHOLD, trust50 >= HIGH_THRESHOLD) {
        (false, false) => Quadrant::DisengagedMind,
        (true, false) => Quadrant::SkepticalExplorer,
        (false, true) => Quadrant::FaithfulSeeker,
        (true, true) => Quadrant::IntegratedAlchemist,
    }
}

/// Position table keyed by (communication band, trust band).
///
/// The halves of the two bands already pin the quadrant, so the sixteen
/// arms are the whole table.
pub const fn position_for(comm: Band, trust: Band) -> Position {
    use Band::*;

    match (comm, trust) {
        (LowLow, LowLow) => Position::FrozenPotential,
        (LowHigh, LowLow) => Position::OverstimulatedSkeptic,
        (LowLow, LowHigh) => Position::ConditionedThinker,
        (LowHigh, LowHigh) => Position::DetachedObserver,

        (HighLow, LowLow) => Position::MethodicalPractitioner,
        (HighHigh, LowLow) => Position::HopefulDoubter,
        (HighLow, LowHigh) => Position::SpiritualTechnician,
        (HighHigh, LowHigh) => Position::ExperimentalLearner,

        (LowLow, HighLow) => Position::InnerBeliever,
        (LowHigh, HighLow) => Position::VisionaryDreamer,
        (LowLow, HighHigh) => Position::SacredObserver,
        (LowHigh, HighHigh) => Position::IntentionalYearner,

        (HighLow, HighLow) => Position::GroundedMystic,
        (HighHigh, HighLow) => Position::CreativeConduit,
        (HighLow, HighHigh) => Position::SymbolicStrategist,
        (HighHigh, HighHigh) => Position::EmbodiedTransformer,
    }
}

/// Resolve the position for scores already placed in `quadrant`.
pub fn classify_position(comm50: u8, trust50: u8, quadrant: Quadrant) -> Position {
    let position = position_for(Band::of(comm50), Band::of(trust50));
    debug_assert_eq!(
        position.quadrant(),
        quadrant,
        "scores ({comm50}, {trust50}) were classified into the wrong quadrant"
    );
    position
}
