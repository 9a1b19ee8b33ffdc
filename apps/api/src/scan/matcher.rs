use crate::scan::normalize::normalize;

/// Partitions `keywords` into (matched, missing) against the document text.
///
/// The text is normalized once; each keyword is normalized and tested for
/// substring containment in input order. The original keyword strings are
/// preserved in the outputs. Containment is plain substring matching, not
/// word-boundary aware: "go" matches inside "going". Job-ad keyword lists
/// are curated with that behavior in mind.
pub fn match_keywords(text: &str, keywords: &[String]) -> (Vec<String>, Vec<String>) {
    let haystack = normalize(text);

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for keyword in keywords {
        if haystack.contains(&normalize(keyword)) {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    (matched, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partitions_matched_and_missing() {
        let (matched, missing) = match_keywords(
            "Built dashboards with React and Git workflows",
            &kw(&["react", "git", "kubernetes"]),
        );
        assert_eq!(matched, kw(&["react", "git"]));
        assert_eq!(missing, kw(&["kubernetes"]));
    }

    #[test]
    fn test_union_is_input_and_order_preserved() {
        let keywords = kw(&["css", "html", "sass", "jest"]);
        let (matched, missing) = match_keywords("I know HTML and Jest", &keywords);

        let mut recombined = Vec::new();
        let mut m = matched.iter().peekable();
        let mut s = missing.iter().peekable();
        for keyword in &keywords {
            if m.peek() == Some(&keyword) {
                recombined.push(m.next().unwrap().clone());
            } else if s.peek() == Some(&keyword) {
                recombined.push(s.next().unwrap().clone());
            }
        }
        assert_eq!(recombined, keywords);
        assert!(matched.iter().all(|k| !missing.contains(k)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (matched, _) = match_keywords("Expert in TYPESCRIPT", &kw(&["TypeScript"]));
        assert_eq!(matched, kw(&["TypeScript"]));
    }

    #[test]
    fn test_original_keyword_casing_preserved_in_output() {
        let (matched, missing) = match_keywords("react here", &kw(&["React", "Git"]));
        assert_eq!(matched, kw(&["React"]));
        assert_eq!(missing, kw(&["Git"]));
    }

    #[test]
    fn test_punctuation_in_text_does_not_block_match() {
        let (matched, _) = match_keywords("Skills: C++, C#, CI/CD.", &kw(&["c++", "c#", "ci/cd"]));
        assert_eq!(matched, kw(&["c++", "c#", "ci/cd"]));
    }

    #[test]
    fn test_substring_matches_inside_larger_word() {
        // Intentional: containment is not word-boundary aware.
        let (matched, _) = match_keywords("I am going places", &kw(&["go"]));
        assert_eq!(matched, kw(&["go"]));
    }

    #[test]
    fn test_duplicates_are_matched_independently() {
        let (matched, missing) = match_keywords("git everywhere", &kw(&["git", "git", "svn"]));
        assert_eq!(matched, kw(&["git", "git"]));
        assert_eq!(missing, kw(&["svn"]));
    }

    #[test]
    fn test_empty_keyword_list_yields_empty_outputs() {
        let (matched, missing) = match_keywords("anything", &[]);
        assert!(matched.is_empty());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_multi_word_keyword_matches_across_whitespace() {
        let (matched, _) = match_keywords(
            "Focus on responsive   design across devices",
            &kw(&["responsive design"]),
        );
        assert_eq!(matched, kw(&["responsive design"]));
    }
}
