//! Interactive terminal chat for rulechat.
//!
//! Implements the full chat loop: document uploads, streaming completion
//! responses, a thinking spinner, slash commands, and markdown rendering
//! for transcript review. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
