//! Batch filtering: run the matcher across many candidates and keep the
//! hits.

use log::debug;

use crate::config::Config;
use crate::matcher::{has_match, positions};
use crate::Score;

/// One batch-filter hit: which haystack matched, where, and how well.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMatch {
    /// Index of the haystack in the input slice.
    pub index: usize,
    /// Matched byte positions, one per needle byte, strictly increasing.
    /// Empty when the haystack was kept but degenerate (e.g. over the
    /// configured length limit).
    pub positions: Vec<usize>,
    /// The alignment score; [`SCORE_MIN`](crate::SCORE_MIN) for
    /// kept-but-degenerate inputs.
    pub score: Score,
}

/// Score every haystack the needle is a subsequence of, in input order.
///
/// A thin loop over [`has_match`] and [`positions`]; each call allocates
/// its own working state, so callers wanting parallelism can shard the
/// haystack list across threads and concatenate.
pub fn filter<S: AsRef<str>>(config: &Config, needle: &str, haystacks: &[S]) -> Vec<FilterMatch> {
    let mut matches = Vec::new();
    for (index, haystack) in haystacks.iter().enumerate() {
        let haystack = haystack.as_ref();
        if !has_match(config, needle, haystack) {
            continue;
        }
        let (matched, score) = positions(config, needle, haystack);
        matches.push(FilterMatch {
            index,
            positions: matched,
            score,
        });
    }
    debug!("filter kept {} of {} haystacks", matches.len(), haystacks.len());
    matches
}

/// The single best hit for `needle` across `haystacks`; ties go to the
/// earliest index. `None` when nothing matches.
pub fn best_match<S: AsRef<str>>(
    config: &Config,
    needle: &str,
    haystacks: &[S],
) -> Option<FilterMatch> {
    filter(config, needle, haystacks)
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score).then_with(|| b.index.cmp(&a.index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{score, SCORE_MIN};

    #[test]
    fn filter_keeps_only_subsequence_haystacks() {
        let config = Config::default();
        let haystacks = ["abc", "xbc", "abx"];
        let matches = filter(&config, "ab", &haystacks);
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[0].positions, vec![0, 1]);
        assert_eq!(matches[0].score, score(&config, "ab", "abc"));

        assert_eq!(matches[1].index, 2);
        assert_eq!(matches[1].positions, vec![0, 1]);
        assert_eq!(matches[1].score, score(&config, "ab", "abx"));
    }

    #[test]
    fn filter_preserves_input_order() {
        let config = Config::default();
        let haystacks = ["zab", "ab", "a_b"];
        let indices: Vec<usize> = filter(&config, "ab", &haystacks)
            .into_iter()
            .map(|m| m.index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn filter_with_empty_needle_keeps_everything_at_score_min() {
        let config = Config::default();
        let matches = filter(&config, "", &["one", "two"]);
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!(m.positions.is_empty());
            assert_eq!(m.score, SCORE_MIN);
        }
    }

    #[test]
    fn filter_keeps_oversized_haystacks_as_degenerate_hits() {
        let config = Config::builder().max_match_length(8).build().unwrap();
        let long = "a".repeat(9);
        let matches = filter(&config, "a", &[long.as_str(), "ab"]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, SCORE_MIN);
        assert!(matches[0].positions.is_empty());
        assert!(matches[1].score > SCORE_MIN);
    }

    #[test]
    fn best_match_picks_the_highest_score() {
        let config = Config::default();
        // Word-boundary match should beat the gapped one.
        let best = best_match(&config, "ab", &["axxb", "a_b"]).unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn best_match_breaks_ties_toward_the_earliest_index() {
        let config = Config::default();
        let best = best_match(&config, "ab", &["abc", "abc"]).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn best_match_is_none_when_nothing_matches() {
        let config = Config::default();
        assert_eq!(best_match(&config, "zz", &["abc", "def"]), None);
    }
}
