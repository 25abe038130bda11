//! Hand ordering.
//!
//! Cards are ordered suit-major, rank-minor by [`card_rank`], the same value
//! the card index is built from, so sorting by index and sorting here always
//! agree.

use alloc::vec::Vec;

use crate::card::CardLike;
use crate::codec::card_rank;
use crate::error::CodecError;
use crate::table::Table;

fn rank_keys<C: CardLike>(table: &Table, hand: &[C]) -> Result<Vec<u8>, CodecError> {
    hand.iter().map(|card| card_rank(table, card)).collect()
}

/// Returns a sorted copy of a hand.
///
/// The sort is stable, so exact duplicates keep their relative order.
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] if any card has a label not in the
/// table.
pub fn sort_hand<C: CardLike + Clone>(table: &Table, hand: &[C]) -> Result<Vec<C>, CodecError> {
    let keys = rank_keys(table, hand)?;
    let mut keyed: Vec<(u8, &C)> = keys.into_iter().zip(hand).collect();
    keyed.sort_by_key(|&(key, _)| key);
    Ok(keyed.into_iter().map(|(_, card)| card.clone()).collect())
}

/// Returns whether a hand is already in sorted order.
///
/// Cards compare by suit and rank, so this is `true` exactly when
/// [`sort_hand`] would return the same sequence.
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] if any card has a label not in the
/// table.
pub fn is_sorted<C: CardLike>(table: &Table, hand: &[C]) -> Result<bool, CodecError> {
    Ok(rank_keys(table, hand)?.is_sorted())
}

/// Sorts a hand in place.
///
/// On error the hand is left untouched.
///
/// # Errors
///
/// Returns [`CodecError::UnknownLabel`] if any card has a label not in the
/// table.
pub fn sort_in_place<C: CardLike>(table: &Table, hand: &mut [C]) -> Result<(), CodecError> {
    let keys = rank_keys(table, hand)?;
    let mut order: Vec<usize> = (0..hand.len()).collect();
    order.sort_by_key(|&i| keys[i]);

    // `order[i]` is the original slot of the card that belongs at `i`. Slots
    // before `i` have already been swapped out, so follow the chain to where
    // that card went.
    for (i, &slot) in order.iter().enumerate() {
        let mut from = slot;
        while from < i {
            from = order[from];
        }
        hand.swap(i, from);
    }
    Ok(())
}
