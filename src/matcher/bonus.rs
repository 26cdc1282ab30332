//! Per-position match bonuses derived from each haystack byte's
//! predecessor.

use crate::config::Config;
use crate::Score;

/// Bonus earned by matching `cur` when `prev` is the byte immediately
/// before it in the haystack.
#[inline(always)]
fn bonus_for(config: &Config, prev: u8, cur: u8) -> Score {
    match prev {
        b'/' | b'\\' => config.match_slash,
        b'-' | b'_' | b' ' => config.match_word,
        b'.' => config.match_dot,
        _ if prev.is_ascii_lowercase() && cur.is_ascii_uppercase() => config.match_capital,
        _ => 0.0,
    }
}

/// One bonus per haystack position. Position 0's predecessor is treated
/// as `/`, so a match at the very start of the haystack earns the
/// path-separator bonus.
///
/// Must run on the original-case haystack, before any folding: the
/// capital-transition bonus reads case. `haystack` must be non-empty.
pub(super) fn bonus_vector(config: &Config, haystack: &[u8]) -> Vec<Score> {
    let mut bonuses = Vec::with_capacity(haystack.len());
    bonuses.extend(
        std::iter::once(bonus_for(config, b'/', haystack[0]))
            .chain(haystack.windows(2).map(|w| bonus_for(config, w[0], w[1]))),
    );
    bonuses
}
