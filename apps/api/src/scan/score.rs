/// Relative weight of each keyword tier in the overall score.
///
/// Injected by the caller (held in `AppState` for the process lifetime) and
/// never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub must_have: u32,
    pub nice_to_have: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            must_have: 3,
            nice_to_have: 1,
        }
    }
}

/// Weighted percentage of matched keywords, rounded to one decimal place.
///
/// `earned = matched_must * w.must_have + matched_nice * w.nice_to_have`,
/// `maximum` is the same sum over the totals, and the score is
/// `earned / maximum * 100`, or 0.0 when there are no keywords at all.
///
/// Legacy flat keyword lists are scored by passing their counts as the
/// must-have tier with zeroes for nice-to-have, which keeps scores identical
/// to records created before tiers existed.
pub fn compute_tiered_score(
    matched_must: usize,
    total_must: usize,
    matched_nice: usize,
    total_nice: usize,
    weights: ScoreWeights,
) -> f64 {
    let earned = matched_must as u64 * u64::from(weights.must_have)
        + matched_nice as u64 * u64::from(weights.nice_to_have);
    let maximum = total_must as u64 * u64::from(weights.must_have)
        + total_nice as u64 * u64::from(weights.nice_to_have);

    if maximum == 0 {
        return 0.0;
    }

    round_to_tenth(earned as f64 / maximum as f64 * 100.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(mm: usize, tm: usize, mn: usize, tn: usize) -> f64 {
        compute_tiered_score(mm, tm, mn, tn, ScoreWeights::default())
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        assert_eq!(score(0, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_full_match_scores_100() {
        assert_eq!(score(3, 3, 2, 2), 100.0);
    }

    #[test]
    fn test_no_match_scores_zero() {
        assert_eq!(score(0, 3, 0, 2), 0.0);
    }

    #[test]
    fn test_worked_example_rounds_to_one_decimal() {
        // 2 of 3 must-have, 1 of 2 nice-to-have: 7 of 11 points.
        assert_eq!(score(2, 3, 1, 2), 63.6);
    }

    #[test]
    fn test_must_have_weighs_three_times_nice_to_have() {
        // One must-have hit outweighs one nice-to-have hit.
        assert!(score(1, 2, 0, 2) > score(0, 2, 1, 2));
    }

    #[test]
    fn test_monotone_in_matched_counts() {
        let mut previous = -1.0;
        for matched in 0..=4 {
            let s = score(matched, 4, 0, 3);
            assert!(s >= previous);
            previous = s;
        }

        let mut previous = -1.0;
        for matched in 0..=3 {
            let s = score(2, 4, matched, 3);
            assert!(s >= previous);
            previous = s;
        }
    }

    #[test]
    fn test_flat_list_scores_like_must_have_only_tiers() {
        // A legacy flat list of N keywords with M matches is scored as
        // (M, N, 0, 0); weights cancel, so it equals plain M/N percent.
        assert_eq!(score(2, 2, 0, 0), 100.0);
        assert_eq!(score(1, 2, 0, 0), 50.0);
        assert_eq!(score(1, 3, 0, 0), 33.3);
    }

    #[test]
    fn test_score_stays_in_range() {
        for mm in 0..=3 {
            for mn in 0..=2 {
                let s = score(mm, 3, mn, 2);
                assert!((0.0..=100.0).contains(&s));
            }
        }
    }
}
