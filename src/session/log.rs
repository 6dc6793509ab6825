// Append-only conversation transcript for one interactive session

use std::fmt;

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Assistant => write!(f, "Assistant"),
        }
    }
}

/// A single (speaker, message) pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only log of conversation entries.
///
/// Created empty at session start. Entries are never reordered, edited, or
/// removed; the only way to clear history is to start a new session. A
/// successful turn appends exactly two entries (User then Assistant), a
/// failed turn appends nothing.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<ConversationEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of complete user/assistant turns
    pub fn turn_count(&self) -> usize {
        self.entries.len() / 2
    }

    /// Flatten the transcript to plain text: one `"{speaker}: {text}"` block
    /// per entry, separated by blank lines, in log order. Empty log exports
    /// an empty string.
    pub fn export(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.speaker, entry.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
