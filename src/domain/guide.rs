//! Session guide content: the walk and the writing

use super::entry::Prompt;

/// Which half of the session a section belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Welcome,
    Walk,
    Writing,
}

impl Part {
    pub fn title(&self) -> &'static str {
        match self {
            Part::Welcome => "The Invitation",
            Part::Walk => "Part I: The Walk (audio guided)",
            Part::Writing => "Part II: The Writing (self-guided)",
        }
    }
}

/// One step of the guided session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSection {
    pub part: Part,
    pub title: &'static str,
    /// Suggested timer length, if the step is timed
    pub minutes: Option<u32>,
    pub lines: Vec<&'static str>,
}

/// The full session in presentation order
pub fn session_guide() -> Vec<GuideSection> {
    vec![
        GuideSection {
            part: Part::Welcome,
            title: "Before we begin",
            minutes: None,
            lines: vec![
                "\"Love,\" as seen on Valentine's stickers, is often red hearts and easy purchases.",
                "Today, allow the forest to redefine it.",
                "Audio on: keep your headphones in for Part I.",
                "Safety first: wander, but stay aware of your path.",
                "At 30 minutes the audio ends. Write in solitude or rejoin after a 5-minute break.",
            ],
        },
        GuideSection {
            part: Part::Walk,
            title: "1. Walking with Presence (48 steps)",
            minutes: Some(15),
            lines: vec![
                "Synchronize your breath with your movement. Focus on the rhythm, not the count.",
                "Set 1 (12 steps), Rooting: inhale roots from your feet; exhale worries and judgments.",
                "Set 2 (12 steps), Lightness: inhale a lift through the crown; exhale the heaviness.",
                "Set 3 (12 steps), Wonder: inhale curiosity and freedom; exhale the masks and shoulds.",
                "Set 4 (12 steps), Love: inhale love, raw, wild and green; exhale fear.",
            ],
        },
        GuideSection {
            part: Part::Walk,
            title: "2. Orientation & Senses",
            minutes: None,
            lines: vec![
                "Stop walking. Stand still. You are accepted here.",
                "Look right, left, behind, up. What notices you?",
                "What do you smell? Taste? Hear? Touch?",
            ],
        },
        GuideSection {
            part: Part::Walk,
            title: "3. The Shape of Connection",
            minutes: None,
            lines: vec![
                "Beneath the moss runs a hidden network of fungi, the \"Wood Wide Web\",",
                "moving nutrients from strong trees to weaker ones.",
                "In the forest, love is not a transaction; it is a shared circular system.",
            ],
        },
        GuideSection {
            part: Part::Walk,
            title: "4. Visualization: The Center",
            minutes: Some(5),
            lines: vec![
                "Close your eyes, or keep them half-open. Sense the center of your body.",
                "If this new definition of Love had a shape, what would it look like inside you?",
            ],
        },
        GuideSection {
            part: Part::Writing,
            title: Prompt::Imprint.heading(),
            minutes: Some(Prompt::Imprint.minutes()),
            lines: vec![
                Prompt::Imprint.subheading(),
                "Capture the raw thoughts, emotions, or sensations before they fade.",
            ],
        },
        GuideSection {
            part: Part::Writing,
            title: Prompt::Letter.heading(),
            minutes: Some(Prompt::Letter.minutes()),
            lines: vec![
                "Write a letter to \"The Living\": a human, a spirit, a tree, or the forest itself.",
                "The constraint: write as if the trees can read over your shoulder.",
                "The challenge: write beyond your comfort zone.",
                "What does this new kind of love feel like, taste like, and smell like?",
                "What stories would you tell the trees about your heart?",
                "If you stripped away the \"convenience\" of modern love, what remains?",
            ],
        },
    ]
}
