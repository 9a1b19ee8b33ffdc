/// Canonicalizes text for substring comparison.
///
/// Lowercases the input, replaces every character that is not a word
/// character, whitespace, `/`, `+`, or `#` with a space (so tokens like
/// "c++", "c#", and "ci/cd" survive), collapses whitespace runs to a single
/// space, and trims the ends.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(|c| c.to_lowercase()) {
        let kept = ch.is_alphanumeric() || matches!(ch, '_' | '/' | '+' | '#');
        if kept {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            out.push(ch);
            pending_space = false;
        } else {
            pending_space = true;
        }
    }

    out
}
