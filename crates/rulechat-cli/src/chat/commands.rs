//! Slash command parsing and help text for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for document
//! uploads, transcript review, and session control.

use std::path::PathBuf;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Load rules documents, replacing the current corpus.
    Upload(Vec<PathBuf>),
    /// Show corpus status.
    Docs,
    /// Show the transcript for this session.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/docs" => Some(ChatCommand::Docs),
        "/history" => Some(ChatCommand::History),
        "/upload" | "/up" => match arg {
            Some(files) if !files.is_empty() => Some(ChatCommand::Upload(
                files.split_whitespace().map(PathBuf::from).collect(),
            )),
            _ => Some(ChatCommand::Unknown(
                "/upload requires one or more file paths".to_string(),
            )),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}   {}",
        style("/upload").cyan(),
        "Load PDF/TXT rules documents (replaces current set)"
    );
    println!("  {}     {}", style("/docs").cyan(), "Show corpus status");
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Show the conversation transcript"
    );
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_upload() {
        assert_eq!(
            parse("/upload rules.pdf extra.txt"),
            Some(ChatCommand::Upload(vec![
                PathBuf::from("rules.pdf"),
                PathBuf::from("extra.txt"),
            ]))
        );
    }

    #[test]
    fn test_parse_upload_without_files() {
        assert!(matches!(
            parse("/upload"),
            Some(ChatCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_parse_docs_and_history() {
        assert_eq!(parse("/docs"), Some(ChatCommand::Docs));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("are pets allowed?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
