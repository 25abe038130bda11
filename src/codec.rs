//! Card index encoding.
//!
//! A card index packs a card into `0..52` as a two-digit base-13 number: the
//! suit position is the high digit and the rank position the low digit.

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, CardLike, DECK_SIZE};
use crate::error::CodecError;
use crate::table::{RANK_COUNT, Table};

const RADIX: u8 = RANK_COUNT as u8;

/// A card's position in a canonically ordered deck, always in `0..52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardIndex(u8);

impl CardIndex {
    /// Smallest index.
    pub const MIN: Self = Self(0);
    /// Largest index.
    pub const MAX: Self = Self(DECK_SIZE as u8 - 1);

    /// Creates an index.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IndexOutOfRange`] if `value >= 52`.
    pub fn new(value: u8) -> Result<Self, CodecError> {
        Self::try_from(usize::from(value))
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Suit position (the high base-13 digit).
    #[must_use]
    pub const fn suit_position(self) -> u8 {
        self.0 / RADIX
    }

    /// Rank position (the low base-13 digit).
    #[must_use]
    pub const fn rank_position(self) -> u8 {
        self.0 % RADIX
    }
}

impl TryFrom<usize> for CardIndex {
    type Error = CodecError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < DECK_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(CodecError::IndexOutOfRange { index })
        }
    }
}

impl From<CardIndex> for u8 {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}

impl From<CardIndex> for usize {
    fn from(index: CardIndex) -> Self {
        Self::from(index.0)
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returns `13 * suit_position + rank_position`.
///
/// This is the sort key of the ordering engine and the value of the card
/// index; both go through here.
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] if the suit or rank label is not in
/// the table.
pub fn card_rank<C: CardLike + ?Sized>(table: &Table, card: &C) -> Result<u8, CodecError> {
    let suit = table.suit_position(card.suit_label())?;
    let rank = table.rank_position(card.rank_label())?;
    Ok(RADIX * suit + rank)
}

/// Encodes a card as its index.
///
/// # Example
///
/// ```
/// use cardatlas::{Card, Rank, Suit, Table, encode_index};
///
/// let table = Table::standard();
/// let index = encode_index(&table, &Card::new(Suit::Hearts, Rank::Ace)).unwrap();
/// assert_eq!(index.get(), 26);
/// ```
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] if the suit or rank label is not in
/// the table.
pub fn encode_index<C: CardLike + ?Sized>(table: &Table, card: &C) -> Result<CardIndex, CodecError> {
    card_rank(table, card).map(CardIndex)
}

/// Decodes an index back into a card.
///
/// # Errors
///
/// Returns [`CodecError::IndexOutOfRange`] if `index >= 52`.
pub fn decode_index(table: &Table, index: usize) -> Result<Card, CodecError> {
    let index = CardIndex::try_from(index)?;
    // A valid index has a suit digit below 4 and a rank digit below 13.
    let suit = table.suits()[usize::from(index.suit_position())];
    let rank = table.ranks()[usize::from(index.rank_position())];
    Ok(Card::new(suit, rank))
}

/// Encodes every card of a hand, preserving order.
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] on the first card with a label not in
/// the table.
pub fn encode_hand<C: CardLike>(table: &Table, hand: &[C]) -> Result<Vec<CardIndex>, CodecError> {
    hand.iter().map(|card| encode_index(table, card)).collect()
}

/// Decodes a sequence of indices into cards, preserving order.
///
/// # Errors
///
/// Returns [`CodecError::IndexOutOfRange`] on the first index outside
/// `0..52`.
pub fn decode_hand<I>(table: &Table, indices: &[I]) -> Result<Vec<Card>, CodecError>
where
    I: Copy + Into<usize>,
{
    indices
        .iter()
        .map(|&index| decode_index(table, index.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn known_indices() {
        let table = Table::standard();
        let ace_hearts = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(encode_index(&table, &ace_hearts).unwrap().get(), 26);
        assert_eq!(decode_index(&table, 26), Ok(ace_hearts));

        let king_spades = Card::new(Suit::Spades, Rank::King);
        assert_eq!(encode_index(&table, &king_spades), Ok(CardIndex::MAX));
        assert_eq!(
            encode_index(&table, &Card::new(Suit::Clubs, Rank::Ace)),
            Ok(CardIndex::MIN)
        );
    }

    #[test]
    fn every_index_round_trips() {
        let table = Table::standard();
        for i in 0..DECK_SIZE {
            let card = decode_index(&table, i).unwrap();
            assert_eq!(usize::from(encode_index(&table, &card).unwrap()), i);
        }
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let table = Table::standard();
        assert_eq!(
            decode_index(&table, 52),
            Err(CodecError::IndexOutOfRange { index: 52 })
        );
        assert_eq!(
            CardIndex::new(200),
            Err(CodecError::IndexOutOfRange { index: 200 })
        );
    }

    #[test]
    fn unknown_label_fails_encode() {
        let table = Table::standard();
        assert_eq!(
            encode_index(&table, &("Hearts", "Joker")),
            Err(CodecError::UnknownLabel {
                label: "Joker".to_string()
            })
        );
        assert!(encode_index(&table, &("Cups", "Ace")).is_err());
    }

    #[test]
    fn hands_keep_order() {
        let table = Table::standard();
        let hand = [("Spades", "2"), ("Clubs", "Ace"), ("Hearts", "King")];
        let indices = encode_hand(&table, &hand).unwrap();
        let raw: Vec<u8> = indices.iter().map(|i| i.get()).collect();
        assert_eq!(raw, vec![40, 0, 38]);

        let cards = decode_hand(&table, &indices).unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Spades, Rank::Two),
                Card::new(Suit::Clubs, Rank::Ace),
                Card::new(Suit::Hearts, Rank::King),
            ]
        );
        assert!(encode_hand::<Card>(&table, &[]).unwrap().is_empty());
    }

    #[test]
    fn custom_table_decodes_by_its_own_positions() {
        let table = Table::new(
            [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
            Rank::ALL,
        )
        .unwrap();
        assert_eq!(decode_index(&table, 0), Ok(Card::new(Suit::Spades, Rank::Ace)));
        assert_eq!(decode_index(&table, 51), Ok(Card::new(Suit::Clubs, Rank::King)));
        for i in 0..DECK_SIZE {
            let card = decode_index(&table, i).unwrap();
            assert_eq!(usize::from(encode_index(&table, &card).unwrap()), i);
        }
        assert_eq!(
            decode_index(&table, 52),
            Err(CodecError::IndexOutOfRange { index: 52 })
        );
    }

    #[test]
    fn index_digits() {
        let index = CardIndex::new(38).unwrap();
        assert_eq!(index.suit_position(), 2);
        assert_eq!(index.rank_position(), 12);
        assert_eq!(index.to_string(), "38");
    }
}
