//! Business logic for rulechat.
//!
//! Holds the session store, the context assembler, the chat engine, and the
//! `CompletionProvider` trait. Provider implementations live in
//! rulechat-infra.

pub mod engine;
pub mod llm;
pub mod prompt;
pub mod session;
