//! Playing card indexing, ordering, and sprite-atlas lookup with optional
//! `no_std` support.
//!
//! A card can be named three ways: by its suit and rank, by a canonical
//! index in `0..52`, and by the rectangle it occupies in a card atlas image.
//! A [`Table`] fixes suit and rank positions, which drive both the index and
//! the sort order of hands.
//!
//! # Example
//!
//! ```
//! use cardatlas::{AtlasLayout, Card, Rank, Suit, Table, decode_index, encode_index, sort_hand};
//!
//! let table = Table::standard();
//! let card = Card::new(Suit::Spades, Rank::King);
//! let index = encode_index(&table, &card).unwrap();
//! assert_eq!(index.get(), 51);
//! assert_eq!(decode_index(&table, 51).unwrap(), card);
//!
//! let region = AtlasLayout::default().locate_index(index);
//! assert_eq!(region.width(), 122);
//!
//! let hand = [card, Card::new(Suit::Clubs, Rank::Ace)];
//! assert_eq!(sort_hand(&table, &hand).unwrap()[0].suit, Suit::Clubs);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod atlas;
pub mod card;
pub mod codec;
pub mod error;
pub mod hand;
pub mod order;
pub mod table;

// Re-export main types
pub use atlas::{AtlasLayout, AtlasRegion};
pub use card::{Card, CardLike, DECK_SIZE, Rank, Suit};
pub use codec::{CardIndex, card_rank, decode_hand, decode_index, encode_hand, encode_index};
pub use error::{CodecError, TableError};
pub use hand::Hand;
pub use order::{is_sorted, sort_hand, sort_in_place};
pub use table::{RANK_COUNT, SUIT_COUNT, Table};
