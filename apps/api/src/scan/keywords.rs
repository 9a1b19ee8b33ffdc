//! Keyword requirements attached to a job ad, and the per-tier breakdowns a
//! scan produces.
//!
//! Older job ads (and older stored scan records) encode keywords as a bare
//! JSON array; newer ones split them into weighted tiers. Both shapes decode
//! through [`JobKeywords`], and a bare array always counts entirely as
//! must-have.

use serde::{Deserialize, Serialize};

use crate::scan::ScanError;

/// Keyword requirements for a job ad: either the legacy flat list or the
/// tiered must-have / nice-to-have form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobKeywords {
    Tiered {
        must_have: Vec<String>,
        #[serde(default)]
        nice_to_have: Vec<String>,
    },
    Flat(Vec<String>),
}

impl JobKeywords {
    /// Resolves either shape into the canonical two-tier form. A flat list
    /// counts entirely as must-have, which keeps scores stable for job ads
    /// created before tiers existed.
    pub fn into_tiers(self) -> KeywordTiers {
        match self {
            JobKeywords::Tiered {
                must_have,
                nice_to_have,
            } => KeywordTiers {
                must_have,
                nice_to_have,
            },
            JobKeywords::Flat(keywords) => KeywordTiers {
                must_have: keywords,
                nice_to_have: Vec::new(),
            },
        }
    }

    /// Rejects keyword lists containing empty strings. An empty keyword
    /// normalizes to "" and would substring-match every document.
    pub fn validate(&self) -> Result<(), ScanError> {
        let empty = match self {
            JobKeywords::Tiered {
                must_have,
                nice_to_have,
            } => must_have
                .iter()
                .chain(nice_to_have)
                .any(|kw| kw.trim().is_empty()),
            JobKeywords::Flat(keywords) => keywords.iter().any(|kw| kw.trim().is_empty()),
        };

        if empty {
            return Err(ScanError::InvalidKeywords(
                "keywords must be non-empty strings".to_string(),
            ));
        }
        Ok(())
    }
}

/// A two-tier keyword breakdown. Used both for the canonical resolved form of
/// [`JobKeywords`] and for the matched/missing halves of a scan result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordTiers {
    pub must_have: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
}

impl KeywordTiers {
    /// Decodes a stored breakdown, accepting the legacy flat-array encoding.
    pub fn from_stored(json: &str) -> serde_json::Result<Self> {
        let keywords: JobKeywords = serde_json::from_str(json)?;
        Ok(keywords.into_tiers())
    }

    /// Iterates both tiers, must-have first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.must_have.iter().chain(self.nice_to_have.iter())
    }
}
