//! rulechat entry point.
//!
//! Binary name: `rulechat`
//!
//! Parses CLI arguments, initializes tracing and the completion provider,
//! preloads any documents given on the command line, then runs the
//! interactive chat loop.

mod chat;
mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rulechat_core::engine::{ChatEngine, DEFAULT_MODEL};
use rulechat_core::session::Session;
use rulechat_infra::extract::{extract_corpus, load_documents};
use rulechat_infra::llm::openai::OpenAiProvider;
use rulechat_infra::llm::openai::config::openai_defaults;
use rulechat_infra::secret::openai_api_key;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,rulechat=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Missing credential is a startup error, not a degraded mode.
    let api_key =
        openai_api_key().context("the completion API credential is required to start")?;
    let provider = OpenAiProvider::new(openai_defaults(api_key, DEFAULT_MODEL));
    let engine = ChatEngine::new(Box::new(provider));

    let mut session = Session::new();

    // Preload documents given on the command line. Extraction failures at
    // startup propagate as-is.
    if !cli.docs.is_empty() {
        let docs = load_documents(&cli.docs).await?;
        let corpus = extract_corpus(&docs)?;
        tracing::info!(
            documents = cli.docs.len(),
            corpus_chars = corpus.len(),
            "Documents loaded at startup"
        );
        session.replace_corpus(corpus);
    }

    chat::loop_runner::run_chat_loop(&engine, &mut session).await
}
