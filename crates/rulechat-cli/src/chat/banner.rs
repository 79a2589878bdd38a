//! Welcome banner for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the model, the session id, and the corpus status, plus a hint
/// about slash commands.
pub fn print_welcome_banner(model: &str, session_id: &str, corpus_chars: usize) {
    println!();
    println!("  {}", style("Condominium Rules Chat").cyan().bold());
    println!(
        "  {}",
        style("Ask questions about your uploaded rules documents").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    if corpus_chars > 0 {
        println!(
            "  {}  {}",
            style("Documents:").bold(),
            style(format!("{corpus_chars} characters loaded")).dim()
        );
    } else {
        println!(
            "  {}  {}",
            style("Documents:").bold(),
            style("none loaded (use /upload or --docs)").dim()
        );
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
