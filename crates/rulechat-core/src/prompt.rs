//! Context assembler.
//!
//! Builds the single user-content blob sent to the completion endpoint:
//! a fixed preamble, the full document corpus verbatim, and a recent
//! window of the transcript, ending with an `assistant: ` cue.

use crate::session::Session;

/// Fixed system instruction sent as the request's system message.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that answers \
    questions about condominium rules and regulations. Use the provided documents \
    to answer questions accurately. If you don't know the answer, say so.";

/// How many trailing transcript entries are included in the context.
///
/// Deliberately not configurable.
const CONTEXT_WINDOW_TURNS: usize = 6;

/// Assembles the completion context from session state.
///
/// The entire corpus is always embedded verbatim, with no truncation and
/// no token budget check. That matches the observed behavior this tool
/// reproduces; it does not scale to large document sets.
pub struct ContextAssembler;

impl ContextAssembler {
    /// Build the user-content blob for one completion request.
    ///
    /// Layout:
    /// ```text
    /// {preamble}
    ///
    /// {corpus}
    ///
    /// Current conversation:
    /// {role}: {content}      (last 6 transcript entries, oldest first)
    /// ...
    /// assistant:
    /// ```
    pub fn build(session: &Session) -> String {
        let mut context = format!(
            "You are a helpful assistant that answers questions about condominium \
             rules and regulations.\n\
             Below is the relevant information from the condominium documents:\n\n\
             {}\n\n\
             Current conversation:",
            session.corpus()
        );

        let messages = session.messages();
        let start = messages.len().saturating_sub(CONTEXT_WINDOW_TURNS);
        for message in &messages[start..] {
            context.push_str(&format!("\n{}: {}", message.role, message.content));
        }

        context.push_str("\nassistant: ");
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_turns(n: usize) -> Session {
        let mut session = Session::new();
        for i in 0..n {
            if i % 2 == 0 {
                session.push_user(format!("question {i}"));
            } else {
                session.push_assistant(format!("answer {i}"));
            }
        }
        session
    }

    #[test]
    fn test_context_contains_full_corpus_verbatim() {
        let mut session = Session::new();
        session.replace_corpus("Pets are not allowed on the 3rd floor.\n\n".to_string());
        let context = ContextAssembler::build(&session);
        assert!(context.contains("Pets are not allowed on the 3rd floor."));
        assert!(context.contains("Below is the relevant information"));
    }

    #[test]
    fn test_context_ends_with_assistant_cue() {
        let session = session_with_turns(3);
        let context = ContextAssembler::build(&session);
        assert!(context.ends_with("\nassistant: "));
    }

    #[test]
    fn test_context_renders_role_content_lines() {
        let mut session = Session::new();
        session.push_user("Are pets allowed?");
        session.push_assistant("No.");
        let context = ContextAssembler::build(&session);
        assert!(context.contains("\nuser: Are pets allowed?"));
        assert!(context.contains("\nassistant: No."));
    }

    #[test]
    fn test_context_includes_exactly_last_six_entries() {
        let session = session_with_turns(10);
        let context = ContextAssembler::build(&session);

        // Entries 0-3 fall outside the window; 4-9 are included, in order.
        for i in 0..4 {
            assert!(!context.contains(&format!("question {i}")));
            assert!(!context.contains(&format!("answer {i}")));
        }
        let mut last_pos = 0;
        for i in 4..10 {
            let needle = if i % 2 == 0 {
                format!("question {i}")
            } else {
                format!("answer {i}")
            };
            let pos = context.find(&needle).unwrap();
            assert!(pos > last_pos, "entry {i} out of order");
            last_pos = pos;
        }
    }

    #[test]
    fn test_context_includes_all_entries_when_fewer_than_six() {
        let session = session_with_turns(4);
        let context = ContextAssembler::build(&session);
        for i in 0..4 {
            let needle = if i % 2 == 0 {
                format!("question {i}")
            } else {
                format!("answer {i}")
            };
            assert!(context.contains(&needle));
        }
    }

    #[test]
    fn test_empty_session_still_has_skeleton() {
        let session = Session::new();
        let context = ContextAssembler::build(&session);
        assert!(context.contains("Current conversation:"));
        assert!(context.ends_with("\nassistant: "));
    }

    #[test]
    fn test_system_instruction_text() {
        assert!(SYSTEM_INSTRUCTION.contains("condominium rules"));
        assert!(SYSTEM_INSTRUCTION.contains("If you don't know the answer, say so."));
    }
}
