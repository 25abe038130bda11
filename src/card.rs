//! Card types and label vocabulary.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::CodecError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the label of the suit, e.g. `"Hearts"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Suit {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.label() == s)
            .ok_or_else(|| CodecError::UnknownLabel {
                label: s.to_string(),
            })
    }
}

/// Card rank. Ace is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the label of the rank, e.g. `"Ace"` or `"10"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Rank {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| CodecError::UnknownLabel {
                label: s.to_string(),
            })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses `"<rank> of <suit>"`, the form produced by [`Card`]'s `Display`.
impl FromStr for Card {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.split_once(" of ").ok_or_else(|| CodecError::UnknownLabel {
            label: s.to_string(),
        })?;
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

/// Anything that names a card by suit and rank labels.
///
/// Hands owned by other card libraries implement this so they can be
/// indexed and sorted without converting to [`Card`] first.
pub trait CardLike {
    /// The suit label, e.g. `"Spades"`.
    fn suit_label(&self) -> &str;
    /// The rank label, e.g. `"Queen"`.
    fn rank_label(&self) -> &str;
}

impl CardLike for Card {
    fn suit_label(&self) -> &str {
        self.suit.label()
    }

    fn rank_label(&self) -> &str {
        self.rank.label()
    }
}

impl<C: CardLike + ?Sized> CardLike for &C {
    fn suit_label(&self) -> &str {
        (**self).suit_label()
    }

    fn rank_label(&self) -> &str {
        (**self).rank_label()
    }
}

/// `(suit, rank)` label pairs.
impl<S: AsRef<str>, R: AsRef<str>> CardLike for (S, R) {
    fn suit_label(&self) -> &str {
        self.0.as_ref()
    }

    fn rank_label(&self) -> &str {
        self.1.as_ref()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
