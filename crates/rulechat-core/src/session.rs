//! In-memory session store.
//!
//! A `Session` owns the chat transcript and the extracted document corpus
//! for one interactive session. Nothing is persisted; the session lives
//! exactly as long as the process.

use uuid::Uuid;

use rulechat_types::llm::Message;

/// Per-session state: the ordered transcript plus the document corpus.
///
/// Invariants:
/// - the transcript is append-only and reflects chronological turn order
/// - the corpus is either empty or the most recent successful extraction
///   (uploads replace it wholesale, never append)
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    corpus: String,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            corpus: String::new(),
        }
    }

    /// Session identifier (display only; sessions are never persisted).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The full transcript in chronological order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The current document corpus (empty until the first upload).
    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    /// Append a user turn to the transcript.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant turn to the transcript.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Replace the corpus with a new extraction.
    ///
    /// Upload events never merge with prior state: the last successful
    /// extraction wins. The transcript is untouched.
    pub fn replace_corpus(&mut self, corpus: String) {
        self.corpus = corpus;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
