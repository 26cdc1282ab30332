//! The scoring engine: case folding, degenerate-input handling, and the
//! public matching operations.
//!
//! ## Pipeline
//!
//! Every scoring call walks the same path: short-circuit degenerate
//! inputs, short-circuit a perfect match, compute the per-position bonus
//! vector from the original-case haystack, fold case if configured, then
//! run the two-matrix recurrence. [`score`] reads the final cell;
//! [`positions`] additionally walks the matrices backward to recover the
//! alignment.

mod algo;
mod bonus;
mod matrix;
mod subseq;

use crate::config::Config;
use crate::{Score, SCORE_MAX, SCORE_MIN};

use self::algo::{build_matrices, trace_positions};
use self::bonus::bonus_vector;
use self::matrix::ScoreMatrix;

/// True when `needle` is a subsequence of `haystack` under the configured
/// case folding. An empty needle is trivially a subsequence.
///
/// Single forward pass with a monotonically advancing cursor; near O(m)
/// in practice. This is the cheap gate to run before [`score`] or
/// [`positions`] when bulk-filtering candidates.
pub fn has_match(config: &Config, needle: &str, haystack: &str) -> bool {
    subseq::is_subsequence(needle.as_bytes(), haystack.as_bytes(), config.case_sensitive)
}

/// True when needle and haystack are byte-equal under the configured case
/// folding.
pub fn is_perfect_match(config: &Config, needle: &str, haystack: &str) -> bool {
    perfect(config, needle.as_bytes(), haystack.as_bytes())
}

/// Relevance of `needle` against `haystack`.
///
/// Returns [`SCORE_MIN`](crate::SCORE_MIN) for degenerate inputs (empty
/// needle or haystack, haystack over the configured length limit, needle
/// longer than haystack) and for needles that are not subsequences of the
/// haystack; [`SCORE_MAX`](crate::SCORE_MAX) for a case-normalized exact
/// match; a finite score otherwise. `SCORE_MIN` means "no usable match",
/// not an error.
pub fn score(config: &Config, needle: &str, haystack: &str) -> Score {
    let (needle, haystack) = (needle.as_bytes(), haystack.as_bytes());
    if degenerate(config, needle.len(), haystack.len()) {
        return SCORE_MIN;
    }
    if perfect(config, needle, haystack) {
        return SCORE_MAX;
    }
    let (_, best) = matrices(config, needle, haystack);
    best.get(needle.len() - 1, haystack.len() - 1)
}

/// The optimal alignment: one 0-based haystack byte index per needle
/// byte, strictly increasing, plus the score of that alignment.
///
/// Degenerate inputs and non-subsequence needles yield
/// `(vec![], SCORE_MIN)`; a perfect match yields `[0, 1, .., n-1]` and
/// [`SCORE_MAX`](crate::SCORE_MAX). The returned score always equals
/// [`score`] on the same inputs.
pub fn positions(config: &Config, needle: &str, haystack: &str) -> (Vec<usize>, Score) {
    let (needle, haystack) = (needle.as_bytes(), haystack.as_bytes());
    if degenerate(config, needle.len(), haystack.len()) {
        return (Vec::new(), SCORE_MIN);
    }
    if perfect(config, needle, haystack) {
        return ((0..needle.len()).collect(), SCORE_MAX);
    }
    if !subseq::is_subsequence(needle, haystack, config.case_sensitive) {
        return (Vec::new(), SCORE_MIN);
    }
    let (ending, best) = matrices(config, needle, haystack);
    trace_positions(config, &ending, &best, needle.len(), haystack.len())
}

fn degenerate(config: &Config, n: usize, m: usize) -> bool {
    n == 0 || m == 0 || m > config.max_match_length || n > m
}

fn perfect(config: &Config, needle: &[u8], haystack: &[u8]) -> bool {
    if config.case_sensitive {
        needle == haystack
    } else {
        needle.eq_ignore_ascii_case(haystack)
    }
}

/// Bonus vector first, folding second: the capital-transition bonus reads
/// the original case.
fn matrices(config: &Config, needle: &[u8], haystack: &[u8]) -> (ScoreMatrix, ScoreMatrix) {
    let bonus = bonus_vector(config, haystack);
    if config.case_sensitive {
        build_matrices(config, needle, haystack, &bonus)
    } else {
        let needle = needle.to_ascii_lowercase();
        let haystack = haystack.to_ascii_lowercase();
        build_matrices(config, &needle, &haystack, &bonus)
    }
}
