//! Fuzzy substring scoring and match-position recovery.
//!
//! Scores a short query string (the *needle*) against a longer candidate
//! string (the *haystack*), and optionally recovers the exact byte
//! positions the optimal alignment touches. Intended for ranking and
//! highlighting candidates — file paths, command names, menu entries —
//! against partial user input.
//!
//! Matching is subsequence-based: every needle byte must appear in the
//! haystack in order, but not necessarily adjacent. The score rewards
//! consecutive runs and matches at word, path, and case boundaries, and
//! penalizes gaps. Inputs are treated as byte sequences; multi-byte
//! codepoint awareness is out of scope.
//!
//! ```
//! use sift::{positions, score, Config, SCORE_MAX};
//!
//! let config = Config::default();
//! assert_eq!(score(&config, "abc", "abc"), SCORE_MAX);
//!
//! let (matched, s) = positions(&config, "amor", "app/models/order.rb");
//! assert_eq!(matched, vec![0, 4, 11, 12]);
//! assert!(s.is_finite());
//! ```

pub mod config;
mod filter;
mod matcher;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use filter::{best_match, filter, FilterMatch};
pub use matcher::{has_match, is_perfect_match, positions, score};

/// Scores are IEEE-754 doubles. The two sentinels below are the only
/// non-finite values the crate ever returns; every real alignment scores
/// strictly between them.
pub type Score = f64;

/// Sentinel for "no usable match". Compares below every finite score.
pub const SCORE_MIN: Score = Score::NEG_INFINITY;

/// Sentinel for a case-normalized exact match. Compares above every
/// finite score.
pub const SCORE_MAX: Score = Score::INFINITY;
