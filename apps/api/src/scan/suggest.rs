/// Upper bound on individually listed suggestions per scan.
pub const MAX_SUGGESTIONS: usize = 5;

/// Builds remediation hints from missing keywords.
///
/// Must-have misses are listed first, in input order, tagged "(must-have)";
/// whatever budget remains is filled from nice-to-have misses. When misses
/// from either tier overflow the budget, a single trailing summary line gives
/// the combined leftover count.
pub fn generate_suggestions(missing_must: &[String], missing_nice: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    for keyword in missing_must.iter().take(MAX_SUGGESTIONS) {
        suggestions.push(format!(
            "Consider adding experience with \"{keyword}\" to your CV (must-have)"
        ));
    }

    let budget = MAX_SUGGESTIONS - suggestions.len();
    for keyword in missing_nice.iter().take(budget) {
        suggestions.push(format!(
            "Consider adding experience with \"{keyword}\" to your CV"
        ));
    }

    let leftover = missing_must.len().saturating_sub(MAX_SUGGESTIONS)
        + missing_nice.len().saturating_sub(budget);
    if leftover > 0 {
        suggestions.push(format!("...and {leftover} more keywords to consider"));
    }

    suggestions
}
