//! Prompt template wrapped around the user's note text.

/// Instruction placed before the note text.
pub const PROMPT_PREFIX: &str = "Please provide a concise summary of the following text. \
Keep it clear, well-structured, and capture the main points:";

/// Cue placed after the note text.
pub const PROMPT_SUFFIX: &str = "Summary:";

/// Wraps `note_text` in the summarization template. The text is inserted
/// byte-for-byte; nothing is escaped or trimmed.
#[must_use]
pub fn build_prompt(note_text: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_PREFIX.len() + note_text.len() + PROMPT_SUFFIX.len() + 4);
    prompt.push_str(PROMPT_PREFIX);
    prompt.push_str("\n\n");
    prompt.push_str(note_text);
    prompt.push_str("\n\n");
    prompt.push_str(PROMPT_SUFFIX);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_single_line() {
        assert!(!PROMPT_PREFIX.contains('\n'));
        assert!(PROMPT_PREFIX.ends_with("main points:"));
    }

    #[test]
    fn test_empty_text_keeps_blank_lines() {
        assert_eq!(build_prompt(""), format!("{PROMPT_PREFIX}\n\n\n\n{PROMPT_SUFFIX}"));
    }
}
