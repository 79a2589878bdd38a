//! Shared domain types for rulechat.
//!
//! This crate holds the data shapes used across the workspace: LLM
//! request/stream types, uploaded document types, and error enums.
//! It has no I/O and no async code.

pub mod document;
pub mod error;
pub mod llm;
