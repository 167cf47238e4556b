//! Scoring and game configuration options.

/// How a flush is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FlushRule {
    /// Four points when every card of the hand (starter excluded) shares one
    /// suit. The starter never changes the award, and the crib is scored like
    /// any other hand.
    #[default]
    Flat,
    /// Four points for a single-suit hand, five when the starter matches as
    /// well. The crib only scores a five-card flush.
    Standard,
}

/// Rules applied when scoring a hand.
///
/// ```
/// use cribbage::{FlushRule, ScoringRules};
///
/// let rules = ScoringRules::default()
///     .with_flush(FlushRule::Standard)
///     .with_nobs(false);
/// assert_eq!(rules.flush, FlushRule::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringRules {
    /// Flush scoring rule.
    pub flush: FlushRule,
    /// Whether his nobs is scored.
    pub nobs: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            flush: FlushRule::Flat,
            nobs: true,
        }
    }
}

impl ScoringRules {
    /// Sets the flush rule.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::{FlushRule, ScoringRules};
    ///
    /// let rules = ScoringRules::default().with_flush(FlushRule::Standard);
    /// assert_eq!(rules.flush, FlushRule::Standard);
    /// ```
    #[must_use]
    pub const fn with_flush(mut self, flush: FlushRule) -> Self {
        self.flush = flush;
        self
    }

    /// Sets whether his nobs is scored.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::ScoringRules;
    ///
    /// let rules = ScoringRules::default().with_nobs(false);
    /// assert!(!rules.nobs);
    /// ```
    #[must_use]
    pub const fn with_nobs(mut self, nobs: bool) -> Self {
        self.nobs = nobs;
        self
    }
}

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribbage::{FlushRule, GameOptions, ScoringRules};
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_scoring(ScoringRules::default().with_flush(FlushRule::Standard));
/// assert_eq!(options.winning_score, 61);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Score a player must reach to win.
    pub winning_score: u16,
    /// Rules used for every show.
    pub scoring: ScoringRules,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            scoring: ScoringRules::default(),
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u16) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the scoring rules.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::{GameOptions, ScoringRules};
    ///
    /// let options = GameOptions::default().with_scoring(ScoringRules::default().with_nobs(false));
    /// assert!(!options.scoring.nobs);
    /// ```
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }
}
