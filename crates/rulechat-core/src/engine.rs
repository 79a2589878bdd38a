//! Chat engine.
//!
//! `ChatEngine` runs a single conversation turn: it appends the user
//! message, assembles the completion context from session state, streams
//! the response through the provider, and commits the result back to the
//! transcript.

use futures_util::StreamExt;
use tracing::{debug, warn};

use rulechat_types::llm::{
    CompletionRequest, LlmError, Message, StopReason, StreamEvent, Usage,
};

use crate::llm::CompletionProvider;
use crate::prompt::{ContextAssembler, SYSTEM_INSTRUCTION};
use crate::session::Session;

/// The single chat model this tool talks to.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Result of one conversation turn.
#[derive(Debug)]
pub struct TurnOutcome {
    /// The accumulated assistant text (possibly empty or truncated on error).
    pub text: String,
    /// Token usage, when the provider reported it.
    pub usage: Usage,
    /// Why generation stopped.
    pub stop_reason: StopReason,
    /// The streaming error, if the turn failed partway.
    pub error: Option<LlmError>,
}

/// Executes completion calls against a session.
pub struct ChatEngine {
    provider: Box<dyn CompletionProvider>,
}

impl ChatEngine {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Provider name, for the banner and log lines.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run one conversation turn.
    ///
    /// Appends `user_text` to the transcript, streams the completion, and
    /// invokes `on_delta` for every text chunk as it arrives. Whatever text
    /// accumulated is committed to the transcript as the assistant turn --
    /// including a truncated or empty response when the stream fails. The
    /// error, if any, is returned in the outcome for the caller to display.
    pub async fn run_turn(
        &self,
        session: &mut Session,
        user_text: String,
        mut on_delta: impl FnMut(&str),
    ) -> TurnOutcome {
        session.push_user(user_text);
        let request = self.build_request(session);

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            context_chars = request.messages[0].content.len(),
            "Sending streaming completion request"
        );

        let mut stream = self.provider.stream(request);
        let mut text = String::new();
        let mut usage = Usage::default();
        let mut stop_reason = StopReason::EndTurn;
        let mut error = None;

        while let Some(event) = stream.next().await {
            match event {
                Ok(StreamEvent::TextDelta { text: delta }) => {
                    on_delta(&delta);
                    text.push_str(&delta);
                }
                Ok(StreamEvent::Usage(u)) => usage = u,
                Ok(StreamEvent::MessageDelta { stop_reason: sr }) => stop_reason = sr,
                Ok(StreamEvent::Done) => break,
                Ok(StreamEvent::Connected) => {}
                Err(e) => {
                    // No retry: the turn ends here, partial output and all.
                    warn!(error = %e, received_chars = text.len(), "Completion stream failed");
                    error = Some(e);
                    break;
                }
            }
        }

        if stop_reason == StopReason::MaxTokens {
            warn!("Response truncated by the model's token limit");
        }

        session.push_assistant(text.clone());

        TurnOutcome {
            text,
            usage,
            stop_reason,
            error,
        }
    }

    /// Build the completion request for the session's current state.
    ///
    /// One system message plus one user message carrying the assembled
    /// context; streaming always on; fixed model.
    fn build_request(&self, session: &Session) -> CompletionRequest {
        let context = ContextAssembler::build(session);
        CompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![Message::user(context)],
            system: Some(SYSTEM_INSTRUCTION.to_string()),
            max_tokens: None,
            temperature: None,
            stream: true,
        }
    }
}
