//! Journal prompts and entries

/// The two writing prompts of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Journal reflection right after the walk
    Imprint,
    /// The main exercise: a letter to the living
    Letter,
}

impl Prompt {
    /// Display heading for this prompt's section
    pub fn heading(&self) -> &'static str {
        match self {
            Prompt::Imprint => "Prompt A \u{2014} The Imprint",
            Prompt::Letter => "Prompt B \u{2014} A Letter to the Living",
        }
    }

    /// Reminder caption shown under the heading
    pub fn subheading(&self) -> &'static str {
        match self {
            Prompt::Imprint => "What came up for you during the walk?",
            Prompt::Letter => "A letter to the living \u{2014} human, spirit, tree, or forest.",
        }
    }

    /// Suggested writing time in minutes
    pub fn minutes(&self) -> u32 {
        match self {
            Prompt::Imprint => 5,
            Prompt::Letter => 20,
        }
    }
}

/// A user's answer to one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub prompt: Prompt,
    pub body: String,
}

impl JournalEntry {
    pub fn new(prompt: Prompt, body: impl Into<String>) -> Self {
        JournalEntry {
            prompt,
            body: body.into(),
        }
    }

    /// The trimmed body, or `None` when there is nothing written
    pub fn present(&self) -> Option<&str> {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
