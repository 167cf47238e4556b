//! Game state types.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The first player, who deals the first round.
    One,
    /// The second player.
    Two,
}

impl Player {
    /// Returns the opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the index of the player in per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the deal.
    Deal,
    /// Both players hold six cards and must lay away two.
    Discard,
    /// Waiting for the starter to be cut.
    Cut,
    /// Hands and crib are ready to be counted.
    Show,
    /// The round has been counted; clear it to deal the next one.
    RoundOver,
    /// A player reached the winning score.
    GameOver {
        /// The winning player.
        winner: Player,
    },
}
