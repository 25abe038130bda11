//! Suit and rank enumeration table.
//!
//! A [`Table`] fixes the position of every suit and rank. Positions drive
//! both the card index and the sort order, so every operation in this crate
//! takes the table by reference rather than reading a global.

use alloc::string::ToString;

use crate::card::{Rank, Suit};
use crate::error::{CodecError, TableError};

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks.
pub const RANK_COUNT: usize = 13;

/// Bidirectional mapping between suit/rank labels and positions.
///
/// ```
/// use cardatlas::Table;
///
/// let table = Table::standard();
/// assert_eq!(table.suit_position("Hearts"), Ok(2));
/// assert_eq!(table.rank_label(0), Some("Ace"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table {
    suits: [Suit; SUIT_COUNT],
    ranks: [Rank; RANK_COUNT],
}

impl Table {
    /// Clubs, Diamonds, Hearts, Spades; Ace low through King.
    pub const STANDARD: Self = Self {
        suits: Suit::ALL,
        ranks: Rank::ALL,
    };

    /// Returns the standard table.
    #[must_use]
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// Creates a table with a custom precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a suit or rank is listed twice.
    pub fn new(suits: [Suit; SUIT_COUNT], ranks: [Rank; RANK_COUNT]) -> Result<Self, TableError> {
        if has_duplicates(&suits) {
            return Err(TableError::DuplicateSuit);
        }
        if has_duplicates(&ranks) {
            return Err(TableError::DuplicateRank);
        }
        Ok(Self { suits, ranks })
    }

    /// Returns the suits in position order.
    #[must_use]
    pub const fn suits(&self) -> &[Suit; SUIT_COUNT] {
        &self.suits
    }

    /// Returns the ranks in position order.
    #[must_use]
    pub const fn ranks(&self) -> &[Rank; RANK_COUNT] {
        &self.ranks
    }

    /// Returns the number of suits.
    #[must_use]
    pub const fn suit_count(&self) -> usize {
        SUIT_COUNT
    }

    /// Returns the number of ranks.
    #[must_use]
    pub const fn rank_count(&self) -> usize {
        RANK_COUNT
    }

    /// Returns the suit labels in position order.
    #[must_use]
    pub fn suit_labels(&self) -> [&'static str; SUIT_COUNT] {
        self.suits.map(Suit::label)
    }

    /// Returns the rank labels in position order.
    #[must_use]
    pub fn rank_labels(&self) -> [&'static str; RANK_COUNT] {
        self.ranks.map(Rank::label)
    }

    /// Looks up the position of a suit label.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownLabel`] if no suit has this label.
    pub fn suit_position(&self, label: &str) -> Result<u8, CodecError> {
        position(self.suits.iter().map(|suit| suit.label()), label)
    }

    /// Looks up the position of a rank label.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownLabel`] if no rank has this label.
    pub fn rank_position(&self, label: &str) -> Result<u8, CodecError> {
        position(self.ranks.iter().map(|rank| rank.label()), label)
    }

    /// Returns the suit at a position.
    #[must_use]
    pub fn suit_at(&self, position: usize) -> Option<Suit> {
        self.suits.get(position).copied()
    }

    /// Returns the rank at a position.
    #[must_use]
    pub fn rank_at(&self, position: usize) -> Option<Rank> {
        self.ranks.get(position).copied()
    }

    /// Returns the suit label at a position.
    #[must_use]
    pub fn suit_label(&self, position: usize) -> Option<&'static str> {
        self.suit_at(position).map(Suit::label)
    }

    /// Returns the rank label at a position.
    #[must_use]
    pub fn rank_label(&self, position: usize) -> Option<&'static str> {
        self.rank_at(position).map(Rank::label)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn position<'a>(mut labels: impl Iterator<Item = &'a str>, label: &str) -> Result<u8, CodecError> {
    labels
        .position(|candidate| candidate == label)
        .map(|pos| pos as u8)
        .ok_or_else(|| CodecError::UnknownLabel {
            label: label.to_string(),
        })
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[i + 1..].contains(item))
}
