use std::cmp::Reverse;

use regex::RegexBuilder;

/// Wraps every case-insensitive occurrence of each matched keyword in
/// `<mark>` tags, preserving the original casing of the matched span.
/// Display-only: the canonical CV text is stored unmarked.
///
/// Keywords are processed longest first and claim byte ranges of the original
/// text as they match; a later (shorter) keyword that overlaps an already
/// claimed range is skipped, so "java" never splits a span "javascript" has
/// already marked. Patterns are regex-escaped literals; no regular-expression
/// features beyond escaping.
pub fn highlight_matches(text: &str, matched: &[String]) -> String {
    let mut keywords: Vec<&str> = matched
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();
    keywords.sort_by_key(|k| Reverse(k.chars().count()));

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for keyword in keywords {
        let pattern = match RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(_) => continue,
        };
        for found in pattern.find_iter(text) {
            let (start, end) = (found.start(), found.end());
            if spans.iter().all(|&(s, e)| end <= s || e <= start) {
                spans.push((start, end));
            }
        }
    }
    spans.sort_unstable();

    let mut highlighted = String::with_capacity(text.len() + spans.len() * "<mark></mark>".len());
    let mut cursor = 0;
    for (start, end) in spans {
        highlighted.push_str(&text[cursor..start]);
        highlighted.push_str("<mark>");
        highlighted.push_str(&text[start..end]);
        highlighted.push_str("</mark>");
        cursor = end;
    }
    highlighted.push_str(&text[cursor..]);
    highlighted
}
