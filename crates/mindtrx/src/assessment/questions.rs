use serde::Serialize;

use super::answers::{COMMUNICATION_ITEMS, QUESTION_COUNT};

/// Scoring axis an item contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Communication,
    Trust,
}

impl Dimension {
    /// Dimension owning the answer at `index`, by position alone.
    pub const fn of_index(index: usize) -> Option<Self> {
        if index < COMMUNICATION_ITEMS {
            Some(Self::Communication)
        } else if index < QUESTION_COUNT {
            Some(Self::Trust)
        } else {
            None
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Dimension::Communication => "Communication with the Inner Mind",
            Dimension::Trust => "Trust in the Inner Mind",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Dimension::Communication => {
                "Practices that open channels to inner awareness and wisdom."
            }
            Dimension::Trust => "Beliefs and behaviors that honor and act on inner guidance.",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Communication => "communication",
            Dimension::Trust => "trust",
        }
    }
}

/// One Likert statement in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    /// 1-based, matching the printed questionnaire.
    pub id: u8,
    pub text: &'static str,
    pub dimension: Dimension,
}

/// Section heading for the questions of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub dimension: Dimension,
    pub title: &'static str,
    pub description: &'static str,
}

const fn item(id: u8, text: &'static str) -> QuizItem {
    let dimension = if (id as usize) <= COMMUNICATION_ITEMS {
        Dimension::Communication
    } else {
        Dimension::Trust
    };
    QuizItem {
        id,
        text,
        dimension,
    }
}

static QUIZ_ITEMS: [QuizItem; QUESTION_COUNT] = [
    item(1, "I journal about dreams, thoughts, or emotions."),
    item(2, "I meditate or sit in silence regularly."),
    item(3, "I use self-hypnosis, self-suggestion, or mental rehearsal."),
    item(4, "I visualize goals or healing imagery intentionally."),
    item(5, "I listen to Paraliminals or other guided audio experiences."),
    item(6, "I engage in prayer or spiritual dialogue."),
    item(7, "I use affirmations (spoken, written, or displayed)."),
    item(8, "I maintain a vision board or symbolic imagery collection."),
    item(9, "I participate in spiritual ceremonies or energy rituals."),
    item(10, "I track or interpret my dreams."),
    item(11, "I engage in automatic writing or freewriting."),
    item(12, "I practice somatic techniques (breathwork, yoga, ecstatic dance)."),
    item(13, "I use biofeedback or neurofeedback tools."),
    item(14, "I explore altered states (float tanks, trance, similar)."),
    item(15, "I believe the inner mind holds valuable insights."),
    item(16, "I trust my intuitive nudges and gut feelings."),
    item(17, "I act on synchronicities or inner signs."),
    item(18, "I apply dream insights or symbolic messages in my life."),
    item(19, "I study intuition/transformation/inner development."),
    item(20, "I participate in workshops, retreats, or coaching."),
    item(21, "I have used psychedelics/entheogens for awakening purposes."),
    item(22, "I trust non-linear inspiration and creative flow."),
    item(23, "I feel guided by a deeper or higher self."),
    item(24, "I integrate intuitive insights into decisions."),
    item(25, "I surrender control to inner knowing when appropriate."),
    item(26, "I feel confident in spontaneous insights and inspiration."),
    item(27, "I'm comfortable with paradox, ambiguity, and symbolic meaning."),
];

/// The full inventory in answer order.
pub fn quiz_items() -> &'static [QuizItem] {
    &QUIZ_ITEMS
}

pub fn sections() -> [SectionInfo; 2] {
    [Dimension::Communication, Dimension::Trust].map(|dimension| SectionInfo {
        dimension,
        title: dimension.title(),
        description: dimension.description(),
    })
}
