//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in display order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the one-letter code of the suit (`H`, `D`, `C` or `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'H' | 'h' | '♥' => Some(Self::Hearts),
            'D' | 'd' | '♦' => Some(Self::Diamonds),
            'C' | 'c' | '♣' => Some(Self::Clubs),
            'S' | 's' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
///
/// Cards order by rank first and suit second, which gives a stable order for
/// enumeration and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the counting value used for fifteens.
    ///
    /// Aces count 1, face cards count 10, everything else counts its rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            JACK..=KING => 10,
            _ => self.rank,
        }
    }

    /// Returns whether the card is a jack.
    #[must_use]
    pub const fn is_jack(self) -> bool {
        self.rank == JACK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => write!(f, "A{}", self.suit.symbol()),
            JACK => write!(f, "J{}", self.suit.symbol()),
            QUEEN => write!(f, "Q{}", self.suit.symbol()),
            KING => write!(f, "K{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses short card notation such as `5H`, `10c`, `TD` or `J♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];

        let rank = match rank_text {
            "A" | "a" => ACE,
            "T" | "t" => 10,
            "J" | "j" => JACK,
            "Q" | "q" => QUEEN,
            "K" | "k" => KING,
            digits => match digits.parse::<u8>() {
                Ok(rank @ 2..=10) => rank,
                _ => return Err(ParseCardError::InvalidRank),
            },
        };

        Ok(Self::new(rank, suit))
    }
}

/// Parses a whitespace separated list of cards, e.g. `"5H 5D JS"`.
///
/// # Errors
///
/// Returns the first [`ParseCardError`] encountered.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an unshuffled 52-card deck, suit by suit and ace to king.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades] {
        for rank in ACE..=KING {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
