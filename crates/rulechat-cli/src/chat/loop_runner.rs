//! Main chat loop orchestration.
//!
//! Drives the session lifecycle: welcome banner, input loop with slash
//! commands, document uploads, and streaming completion responses. One
//! handler runs at a time; the loop suspends only at stream chunk
//! boundaries while a response is rendering.

use std::io::Write;
use std::time::Instant;

use console::style;
use tracing::info;

use rulechat_core::engine::{ChatEngine, DEFAULT_MODEL};
use rulechat_core::session::Session;
use rulechat_infra::extract::{extract_corpus, load_documents};
use rulechat_types::llm::MessageRole;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(engine: &ChatEngine, session: &mut Session) -> anyhow::Result<()> {
    let session_id = session.id().to_string();
    print_welcome_banner(DEFAULT_MODEL, &session_id, session.corpus().len());

    let renderer = ChatRenderer::new();
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Docs => print_docs_status(session),
                        ChatCommand::History => print_history(session, &renderer),
                        ChatCommand::Upload(paths) => {
                            upload_documents(session, &paths).await;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Send to the completion endpoint
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let start_time = Instant::now();
                let mut first_token = false;
                let outcome = engine
                    .run_turn(session, text, |delta| {
                        if !first_token {
                            spinner.finish_and_clear();
                            first_token = true;
                            print!("\n  {} ", style("Assistant").cyan().bold());
                            let _ = std::io::stdout().flush();
                        }
                        renderer.print_streaming_token(delta);
                    })
                    .await;

                if !first_token {
                    spinner.finish_and_clear();
                }

                match outcome.error {
                    Some(e) => {
                        // The partial response (possibly empty) stays in the
                        // transcript; only the error display is added here.
                        eprintln!("\n  {} An error occurred: {e}", style("!").red().bold());
                        eprintln!(
                            "  {}",
                            style("Whatever was received is kept in the transcript.").dim()
                        );
                    }
                    None => {
                        let response_ms = start_time.elapsed().as_millis() as u64;
                        println!();
                        renderer.print_stats_footer(
                            outcome.usage.output_tokens,
                            response_ms,
                            DEFAULT_MODEL,
                        );
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

/// Show how much corpus text is currently loaded.
fn print_docs_status(session: &Session) {
    println!();
    if session.corpus().is_empty() {
        println!(
            "  {} No documents loaded. Use /upload <files> or --docs at startup.",
            style("*").yellow().bold()
        );
    } else {
        println!(
            "  {} Corpus loaded: {} characters (sent with every question).",
            style("*").cyan().bold(),
            session.corpus().len()
        );
    }
    println!();
}

/// Print the transcript, rendering assistant markdown.
fn print_history(session: &Session, renderer: &ChatRenderer) {
    println!();
    if session.messages().is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for message in session.messages() {
        let label = match message.role {
            MessageRole::User => style("You").green().bold(),
            MessageRole::Assistant => style("Assistant").cyan().bold(),
            MessageRole::System => style("System").dim().bold(),
        };
        println!("  {label}");
        let rendered = renderer.render_final(&message.content);
        let body = rendered.trim_end();
        if body.is_empty() {
            println!("  {}", style("(empty response)").dim());
        } else {
            println!("  {body}");
        }
        println!();
    }
}

/// Load files and replace the session corpus.
///
/// Extraction failures are shown inline; the previous corpus stays in
/// place when an upload fails.
async fn upload_documents(session: &mut Session, paths: &[std::path::PathBuf]) {
    let result = match load_documents(paths).await {
        Ok(docs) => extract_corpus(&docs),
        Err(e) => Err(e),
    };

    match result {
        Ok(corpus) => {
            info!(
                documents = paths.len(),
                corpus_chars = corpus.len(),
                "Documents uploaded"
            );
            println!(
                "\n  {} Loaded {} file(s), {} characters of rules text.\n",
                style("*").green().bold(),
                paths.len(),
                corpus.len()
            );
            session.replace_corpus(corpus);
        }
        Err(e) => {
            eprintln!(
                "\n  {} Upload failed: {e}\n",
                style("!").red().bold()
            );
        }
    }
}
