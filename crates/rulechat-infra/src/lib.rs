//! Infrastructure implementations for rulechat.
//!
//! Concrete backends for the abstractions in rulechat-core: document text
//! extraction (PDF, plain text), the OpenAI completion provider, and
//! environment-variable secret lookup.

pub mod extract;
pub mod llm;
pub mod secret;
