//! The two-matrix recurrence and the backward traceback.

use crate::config::Config;
use crate::{Score, SCORE_MIN};

use super::matrix::ScoreMatrix;

/// Build the recurrence matrices for pre-folded `needle`/`haystack`.
///
/// `ending[i][j]` is the best score of any alignment of `needle[..=i]`
/// whose last match puts `needle[i]` exactly at haystack position `j`
/// (`SCORE_MIN` when impossible). `best[i][j]` is the best score of any
/// alignment of `needle[..=i]` confined to haystack positions `..=j`,
/// ending anywhere.
///
/// On a match, the cell either restarts from the best alignment strictly
/// left of the diagonal and earns the positional bonus, or extends a run
/// of consecutive matches and earns the flat consecutive bonus — never
/// both: the run already earned its positional bonus where it started.
/// `best` is maintained as a running row maximum that decays by the gap
/// penalty per skipped haystack byte; the final needle row decays by the
/// trailing-gap weight instead of the inner one.
///
/// The max direction and the `SCORE_MIN` row initialization are
/// load-bearing: the traceback recovers the alignment through exact
/// equality tests between `ending` and `best` cells.
pub(super) fn build_matrices(
    config: &Config,
    needle: &[u8],
    haystack: &[u8],
    bonus: &[Score],
) -> (ScoreMatrix, ScoreMatrix) {
    let n = needle.len();
    let m = haystack.len();
    let mut ending = ScoreMatrix::new(n, m);
    let mut best = ScoreMatrix::new(n, m);

    for (i, &nb) in needle.iter().enumerate() {
        let gap_score = if i == n - 1 {
            config.gap_trailing
        } else {
            config.gap_inner
        };
        let mut prev_score = SCORE_MIN;

        for (j, &hb) in haystack.iter().enumerate() {
            if nb == hb {
                let cell = if i == 0 {
                    j as Score * config.gap_leading + bonus[j]
                } else if j > 0 {
                    let from_best = best.get(i - 1, j - 1) + bonus[j];
                    let from_run = ending.get(i - 1, j - 1) + config.match_consecutive;
                    from_best.max(from_run)
                } else {
                    // needle[i] at haystack position 0 leaves no room for
                    // the i preceding needle bytes.
                    SCORE_MIN
                };
                ending.set(i, j, cell);
                prev_score = cell.max(prev_score + gap_score);
            } else {
                ending.set(i, j, SCORE_MIN);
                prev_score += gap_score;
            }
            best.set(i, j, prev_score);
        }
    }

    (ending, best)
}

/// Walk the matrices backward and recover the haystack position matched
/// to each needle byte, rightmost-optimal alignment first.
///
/// For each needle index, last to first, the scan moves strictly leftward
/// and accepts the first position whose ending-here score is live and —
/// unless a consecutive run is being unwound — equal to the best-overall
/// score at that cell. Accepting a cell that the forward pass reached by
/// consecutive extension sets `match_required`, which forces the next
/// acceptance one step down-left without the equality test, so the run
/// the score paid for is kept intact.
///
/// The leftward scan order must not be changed: scanning the other way
/// recovers a different (equally scoring) alignment and shifts
/// highlights.
///
/// Callers guarantee the needle is a subsequence of the haystack, so
/// every needle index accepts exactly one position and the result is
/// strictly increasing.
pub(super) fn trace_positions(
    config: &Config,
    ending: &ScoreMatrix,
    best: &ScoreMatrix,
    n: usize,
    m: usize,
) -> (Vec<usize>, Score) {
    let mut positions = vec![0usize; n];
    let mut match_required = false;
    let mut j = m;

    for i in (0..n).rev() {
        while j > 0 {
            j -= 1;
            if ending.get(i, j) != SCORE_MIN
                && (match_required || ending.get(i, j) == best.get(i, j))
            {
                match_required = i > 0
                    && j > 0
                    && best.get(i, j) == ending.get(i - 1, j - 1) + config.match_consecutive;
                positions[i] = j;
                break;
            }
        }
    }

    (positions, best.get(n - 1, m - 1))
}
