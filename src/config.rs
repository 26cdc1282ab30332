//! Scoring configuration: gap penalties, boundary bonuses, and the match
//! length limit.

use thiserror::Error;

use crate::Score;

// ---------------------------------------------------------------------------
// Default weights
// ---------------------------------------------------------------------------

/// Penalty per skipped haystack byte before the first matched byte.
pub const DEFAULT_GAP_LEADING: Score = -0.005;

/// Penalty per skipped haystack byte between two matched bytes.
pub const DEFAULT_GAP_INNER: Score = -0.01;

/// Penalty per skipped haystack byte after the last matched byte.
pub const DEFAULT_GAP_TRAILING: Score = -0.005;

/// Flat bonus for extending a run of consecutive matched bytes.
pub const DEFAULT_MATCH_CONSECUTIVE: Score = 1.0;

/// Bonus for a match right after a path separator (`/` or `\`).
pub const DEFAULT_MATCH_SLASH: Score = 0.9;

/// Bonus for a match right after `-`, `_`, or a space.
pub const DEFAULT_MATCH_WORD: Score = 0.8;

/// Bonus for an uppercase match right after a lowercase byte.
pub const DEFAULT_MATCH_CAPITAL: Score = 0.7;

/// Bonus for a match right after a dot.
pub const DEFAULT_MATCH_DOT: Score = 0.6;

/// Haystacks longer than this many bytes never match.
pub const DEFAULT_MAX_MATCH_LENGTH: usize = 1024;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Immutable set of scoring weights and the one limit the engine honors.
///
/// Built once via [`Config::builder`] (or [`Config::default`]) and shared
/// read-only across any number of scoring calls; the type is `Copy` and
/// `Send + Sync`, so concurrent callers need no synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub(crate) case_sensitive: bool,
    pub(crate) gap_leading: Score,
    pub(crate) gap_inner: Score,
    pub(crate) gap_trailing: Score,
    pub(crate) match_consecutive: Score,
    pub(crate) match_slash: Score,
    pub(crate) match_word: Score,
    pub(crate) match_capital: Score,
    pub(crate) match_dot: Score,
    pub(crate) max_match_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            gap_leading: DEFAULT_GAP_LEADING,
            gap_inner: DEFAULT_GAP_INNER,
            gap_trailing: DEFAULT_GAP_TRAILING,
            match_consecutive: DEFAULT_MATCH_CONSECUTIVE,
            match_slash: DEFAULT_MATCH_SLASH,
            match_word: DEFAULT_MATCH_WORD,
            match_capital: DEFAULT_MATCH_CAPITAL,
            match_dot: DEFAULT_MATCH_DOT,
            max_match_length: DEFAULT_MAX_MATCH_LENGTH,
        }
    }
}

impl Config {
    /// Returns a default builder for chaining.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether matching distinguishes ASCII case.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Longest haystack (in bytes) the engine will score.
    pub fn max_length(&self) -> usize {
        self.max_match_length
    }

    /// Lower bound on any finite score this configuration can produce:
    /// the inner-gap penalty applied across a maximum-length haystack.
    pub fn score_floor(&self) -> Score {
        self.max_match_length as Score * self.gap_inner
    }

    /// Upper bound on any finite score this configuration can produce:
    /// the consecutive bonus earned across a maximum-length haystack.
    pub fn score_ceiling(&self) -> Score {
        self.max_match_length as Score * self.match_consecutive
    }

    /// Structural validity check over all ten fields.
    ///
    /// Holds for anything a [`ConfigBuilder`] hands out; exposed so
    /// callers deserializing or hand-assembling weights can re-check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("gap_leading", self.gap_leading),
            ("gap_inner", self.gap_inner),
            ("gap_trailing", self.gap_trailing),
            ("match_consecutive", self.match_consecutive),
            ("match_slash", self.match_slash),
            ("match_word", self.match_word),
            ("match_capital", self.match_capital),
            ("match_dot", self.match_dot),
        ];
        for (field, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.max_match_length == 0 {
            return Err(ConfigError::ZeroMaxMatchLength);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Chained-setter builder for [`Config`]. Unset fields keep their
/// defaults; [`ConfigBuilder::build`] validates the final record.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.config.case_sensitive = case_sensitive;
        self
    }

    pub fn gap_leading(mut self, score: Score) -> Self {
        self.config.gap_leading = score;
        self
    }

    pub fn gap_inner(mut self, score: Score) -> Self {
        self.config.gap_inner = score;
        self
    }

    pub fn gap_trailing(mut self, score: Score) -> Self {
        self.config.gap_trailing = score;
        self
    }

    pub fn match_consecutive(mut self, score: Score) -> Self {
        self.config.match_consecutive = score;
        self
    }

    pub fn match_slash(mut self, score: Score) -> Self {
        self.config.match_slash = score;
        self
    }

    pub fn match_word(mut self, score: Score) -> Self {
        self.config.match_word = score;
        self
    }

    pub fn match_capital(mut self, score: Score) -> Self {
        self.config.match_capital = score;
        self
    }

    pub fn match_dot(mut self, score: Score) -> Self {
        self.config.match_dot = score;
        self
    }

    pub fn max_match_length(mut self, length: usize) -> Self {
        self.config.max_match_length = length;
        self
    }

    /// Validates the assembled record and returns it.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Rejected configuration input. Raised only at construction time;
/// scoring calls never error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("score weight `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: Score },

    #[error("max_match_length must be at least 1")]
    ZeroMaxMatchLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn builder_keeps_defaults_for_unset_fields() {
        let config = Config::builder().case_sensitive(true).build().unwrap();
        assert!(config.case_sensitive());
        assert_eq!(config.max_length(), DEFAULT_MAX_MATCH_LENGTH);
        assert_eq!(config.gap_inner, DEFAULT_GAP_INNER);
    }

    #[test]
    fn builder_overrides_stick() {
        let config = Config::builder()
            .match_word(2.5)
            .max_match_length(64)
            .build()
            .unwrap();
        assert_eq!(config.match_word, 2.5);
        assert_eq!(config.max_length(), 64);
    }

    #[test]
    fn nan_weight_is_rejected() {
        let err = Config::builder().match_slash(Score::NAN).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "match_slash", .. }));
    }

    #[test]
    fn infinite_weight_is_rejected() {
        let err = Config::builder().gap_inner(Score::NEG_INFINITY).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "gap_inner", .. }));
    }

    #[test]
    fn zero_max_match_length_is_rejected() {
        let err = Config::builder().max_match_length(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroMaxMatchLength);
    }

    #[test]
    fn score_bounds_are_ordered() {
        let config = Config::default();
        assert!(crate::SCORE_MIN < config.score_floor());
        assert!(config.score_floor() < config.score_ceiling());
        assert!(config.score_ceiling() < crate::SCORE_MAX);
    }
}
