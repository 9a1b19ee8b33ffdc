//! CV scanning pipeline: PDF text extraction, keyword matching, tiered
//! scoring, and suggestion generation.
//!
//! Every stage below the orchestrator is a pure function; [`scan`] is the one
//! entry point collaborators call. A scan either produces a complete
//! [`ScanResult`] or fails with a [`ScanError`]; never a partial record.

pub mod extract;
pub mod highlight;
pub mod keywords;
pub mod matcher;
pub mod normalize;
pub mod score;
pub mod suggest;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scan::keywords::{JobKeywords, KeywordTiers};
use crate::scan::score::ScoreWeights;

/// Failures of the scanning pipeline. All of them are recoverable from the
/// caller's perspective: report, let the candidate retry with a new upload.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not read document: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("could not extract text from document: {0}")]
    Extraction(#[from] pdf_extract::OutputError),

    #[error("invalid keywords: {0}")]
    InvalidKeywords(String),
}

/// Complete output record of one CV scan. Created once per invocation,
/// immutable afterwards, persisted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub cv_text: String,
    pub matched_keywords: KeywordTiers,
    pub missing_keywords: KeywordTiers,
    pub score: f64,
    pub suggestions: Vec<String>,
}

/// Full pipeline: extract text from the PDF at `path`, then match, score,
/// and generate suggestions against `keywords`.
pub fn scan(
    path: &Path,
    keywords: JobKeywords,
    weights: ScoreWeights,
) -> Result<ScanResult, ScanError> {
    let cv_text = extract::extract_text(path)?;
    scan_text(cv_text, keywords, weights)
}

/// Text-stage pipeline, shared by [`scan`] and by callers that already hold
/// the document text.
pub fn scan_text(
    cv_text: String,
    keywords: JobKeywords,
    weights: ScoreWeights,
) -> Result<ScanResult, ScanError> {
    keywords.validate()?;
    let tiers = keywords.into_tiers();

    let (matched_must, missing_must) = matcher::match_keywords(&cv_text, &tiers.must_have);
    let (matched_nice, missing_nice) = matcher::match_keywords(&cv_text, &tiers.nice_to_have);

    let score = score::compute_tiered_score(
        matched_must.len(),
        tiers.must_have.len(),
        matched_nice.len(),
        tiers.nice_to_have.len(),
        weights,
    );
    let suggestions = suggest::generate_suggestions(&missing_must, &missing_nice);

    Ok(ScanResult {
        cv_text,
        matched_keywords: KeywordTiers {
            must_have: matched_must,
            nice_to_have: matched_nice,
        },
        missing_keywords: KeywordTiers {
            must_have: missing_must,
            nice_to_have: missing_nice,
        },
        score,
        suggestions,
    })
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::fixtures::pdf_with_text;
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tiered(must: &[&str], nice: &[&str]) -> JobKeywords {
        JobKeywords::Tiered {
            must_have: kw(must),
            nice_to_have: kw(nice),
        }
    }

    #[test]
    fn test_scan_text_worked_example() {
        let result = scan_text(
            "I have shipped HTML layouts and React apps, styled with SASS.".to_string(),
            tiered(&["html", "css", "react"], &["sass", "webpack"]),
            ScoreWeights::default(),
        )
        .unwrap();

        assert_eq!(result.matched_keywords.must_have, kw(&["html", "react"]));
        assert_eq!(result.missing_keywords.must_have, kw(&["css"]));
        assert_eq!(result.matched_keywords.nice_to_have, kw(&["sass"]));
        assert_eq!(result.missing_keywords.nice_to_have, kw(&["webpack"]));
        // 2*3 + 1*1 = 7 of 3*3 + 2*1 = 11 points.
        assert_eq!(result.score, 63.6);
        assert_eq!(
            result.suggestions,
            vec![
                r#"Consider adding experience with "css" to your CV (must-have)"#,
                r#"Consider adding experience with "webpack" to your CV"#,
            ]
        );
    }

    #[test]
    fn test_flat_keywords_score_like_equivalent_tiers() {
        let text = "react on the frontend, git for version control";

        let flat = scan_text(
            text.to_string(),
            JobKeywords::Flat(kw(&["react", "git", "css"])),
            ScoreWeights::default(),
        )
        .unwrap();
        let equivalent = scan_text(
            text.to_string(),
            tiered(&["react", "git", "css"], &[]),
            ScoreWeights::default(),
        )
        .unwrap();

        assert_eq!(flat.score, equivalent.score);
        assert_eq!(flat.matched_keywords, equivalent.matched_keywords);
        assert_eq!(flat.missing_keywords, equivalent.missing_keywords);
    }

    #[test]
    fn test_scan_text_rejects_empty_keywords() {
        let err = scan_text(
            "anything".to_string(),
            JobKeywords::Flat(vec![String::new()]),
            ScoreWeights::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::InvalidKeywords(_)));
    }

    #[test]
    fn test_scan_text_empty_keyword_lists() {
        let result = scan_text(
            "some text".to_string(),
            tiered(&[], &[]),
            ScoreWeights::default(),
        )
        .unwrap();
        assert_eq!(result.score, 0.0);
        assert!(result.suggestions.is_empty());
        assert!(result.matched_keywords.must_have.is_empty());
        assert!(result.missing_keywords.must_have.is_empty());
    }

    #[test]
    fn test_scan_reads_pdf_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&pdf_with_text(Some("Shipped React dashboards using Git")))
            .unwrap();

        let result = scan(
            file.path(),
            tiered(&["react", "git"], &["sass"]),
            ScoreWeights::default(),
        )
        .unwrap();

        assert_eq!(result.matched_keywords.must_have, kw(&["react", "git"]));
        assert_eq!(result.missing_keywords.nice_to_have, kw(&["sass"]));
        assert_eq!(result.score, 85.7); // 6 of 7 points
        assert!(result.cv_text.contains("React"));
    }

    #[test]
    fn test_scan_propagates_extraction_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a pdf").unwrap();

        let err = scan(
            file.path(),
            JobKeywords::Flat(kw(&["react"])),
            ScoreWeights::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::Extraction(_)));
    }

    #[test]
    fn test_scan_result_round_trips_through_json() {
        let result = scan_text(
            "react".to_string(),
            tiered(&["react"], &["sass"]),
            ScoreWeights::default(),
        )
        .unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let decoded: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.matched_keywords, result.matched_keywords);
        assert_eq!(decoded.missing_keywords, result.missing_keywords);
        assert_eq!(decoded.score, result.score);
        assert_eq!(decoded.suggestions, result.suggestions);
    }
}
