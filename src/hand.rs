//! Owned hand container.

use alloc::vec::Vec;

use crate::atlas::{AtlasLayout, AtlasRegion};
use crate::card::Card;
use crate::codec::{CardIndex, encode_hand};
use crate::error::CodecError;
use crate::order;
use crate::table::Table;

/// An ordered hand of cards.
///
/// Callers that already keep cards in their own collection can use the free
/// functions in [`crate::order`] and [`crate::codec`] on a slice instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the hand in place by the table's order.
    ///
    /// # Errors
    ///
    /// Propagates [`order::sort_in_place`] errors.
    pub fn sort(&mut self, table: &Table) -> Result<(), CodecError> {
        order::sort_in_place(table, &mut self.cards)
    }

    /// Returns a sorted copy of the hand.
    ///
    /// # Errors
    ///
    /// Propagates [`order::sort_hand`] errors.
    pub fn sorted(&self, table: &Table) -> Result<Self, CodecError> {
        order::sort_hand(table, &self.cards).map(|cards| Self { cards })
    }

    /// Returns whether the hand is in the table's order.
    ///
    /// # Errors
    ///
    /// Propagates [`order::is_sorted`] errors.
    pub fn is_sorted(&self, table: &Table) -> Result<bool, CodecError> {
        order::is_sorted(table, &self.cards)
    }

    /// Returns the index of every card, in hand order.
    ///
    /// # Errors
    ///
    /// Propagates [`encode_hand`] errors.
    pub fn indices(&self, table: &Table) -> Result<Vec<CardIndex>, CodecError> {
        encode_hand(table, &self.cards)
    }

    /// Returns the atlas region of every card, in hand order.
    ///
    /// # Errors
    ///
    /// Propagates [`AtlasLayout::locate_hand`] errors.
    pub fn regions(&self, layout: &AtlasLayout) -> Result<Vec<AtlasRegion>, CodecError> {
        layout.locate_hand(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}
