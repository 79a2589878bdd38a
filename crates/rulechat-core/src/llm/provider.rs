//! CompletionProvider trait definition.
//!
//! This is the abstraction the chat engine talks to. The only call path is
//! streaming (the chat loop renders tokens incrementally), so the trait has
//! a single `stream` method returning a boxed stream, which keeps it
//! object-safe for `Box<dyn CompletionProvider>` without a wrapper type.

use std::pin::Pin;

use futures_util::Stream;

use rulechat_types::llm::{CompletionRequest, LlmError, StreamEvent};

/// A boxed stream of completion events.
pub type EventStream =
    Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + 'static>>;

/// Trait for completion endpoint backends.
///
/// Implementations live in rulechat-infra (e.g., `OpenAiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a streaming completion request. Returns a stream of events.
    ///
    /// The stream yields text deltas as they arrive; any error terminates
    /// the stream. There is no retry or timeout layer on top of this.
    fn stream(&self, request: CompletionRequest) -> EventStream;
}
