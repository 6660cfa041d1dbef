/// Whitespace-delimited word count, as shown under the note input.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
