//! Codec, ordering, and atlas integration tests.

use cardatlas::{
    AtlasLayout, AtlasRegion, Card, CardIndex, CodecError, DECK_SIZE, Hand, Rank, Suit, Table,
    decode_hand, decode_index, encode_hand, encode_index, is_sorted, sort_hand, sort_in_place,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| card(suit, rank)))
        .collect()
}

fn random_hands(seed: u64, count: usize) -> Vec<Vec<Card>> {
    let table = Table::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=20);
            (0..len)
                .map(|_| decode_index(&table, rng.random_range(0..DECK_SIZE)).unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn deck_round_trips_through_indices() {
    let table = Table::standard();
    for card in full_deck() {
        let index = encode_index(&table, &card).unwrap();
        assert_eq!(decode_index(&table, index.into()).unwrap(), card);
    }
    for i in 0..DECK_SIZE {
        let card = decode_index(&table, i).unwrap();
        assert_eq!(usize::from(encode_index(&table, &card).unwrap()), i);
    }
}

#[test]
fn canonical_deck_is_index_order() {
    let table = Table::standard();
    let indices = encode_hand(&table, &full_deck()).unwrap();
    let expected: Vec<CardIndex> = (0..DECK_SIZE)
        .map(|i| CardIndex::try_from(i).unwrap())
        .collect();
    assert_eq!(indices, expected);
    assert!(is_sorted(&table, &full_deck()).unwrap());
}

#[test]
fn documented_examples() {
    let table = Table::standard();
    assert_eq!(
        encode_index(&table, &("Hearts", "Ace")).unwrap().get(),
        26
    );
    assert_eq!(
        decode_index(&table, 26).unwrap(),
        card(Suit::Hearts, Rank::Ace)
    );
    assert_eq!(
        encode_index(&table, &card(Suit::Spades, Rank::King))
            .unwrap()
            .get(),
        51
    );
    assert_eq!(
        AtlasLayout::default().locate(0, 0),
        AtlasRegion {
            top: 0,
            left: 1,
            bottom: 178,
            right: 123,
        }
    );
    assert_eq!(
        sort_hand(
            &table,
            &[card(Suit::Spades, Rank::Two), card(Suit::Clubs, Rank::Ace)]
        )
        .unwrap(),
        vec![card(Suit::Clubs, Rank::Ace), card(Suit::Spades, Rank::Two)]
    );
}

#[test]
fn bad_input_fails_instead_of_clamping() {
    let table = Table::standard();
    assert_eq!(
        decode_index(&table, DECK_SIZE),
        Err(CodecError::IndexOutOfRange { index: 52 })
    );
    assert_eq!(
        decode_index(&table, usize::MAX),
        Err(CodecError::IndexOutOfRange { index: usize::MAX })
    );
    assert_eq!(
        encode_index(&table, &("Spades", "Knight")),
        Err(CodecError::UnknownLabel {
            label: "Knight".to_string()
        })
    );
    assert!(decode_hand(&table, &[3_usize, 60]).is_err());
    assert!(encode_hand(&table, &[("Clubs", "2"), ("clubs", "2")]).is_err());
}

#[test]
fn sorting_by_index_matches_sort_hand() {
    let table = Table::standard();
    for hand in random_hands(7, 200) {
        let mut by_index = hand.clone();
        by_index.sort_by_key(|c| encode_index(&table, c).unwrap());
        assert_eq!(sort_hand(&table, &hand).unwrap(), by_index);
    }
}

#[test]
fn is_sorted_agrees_with_sort_hand() {
    let table = Table::standard();
    for hand in random_hands(11, 200) {
        let sorted = sort_hand(&table, &hand).unwrap();
        assert!(is_sorted(&table, &sorted).unwrap());
        assert_eq!(is_sorted(&table, &hand).unwrap(), hand == sorted);

        let mut reversed = sorted.clone();
        reversed.reverse();
        assert_eq!(is_sorted(&table, &reversed).unwrap(), reversed == sorted);
    }
}

#[test]
fn shuffled_deck_sorts_back_in_place() {
    let table = Table::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut deck = full_deck();
    deck.shuffle(&mut rng);
    assert!(!is_sorted(&table, &deck).unwrap());

    sort_in_place(&table, &mut deck).unwrap();
    assert_eq!(deck, full_deck());
}

#[test]
fn index_hands_render_like_card_hands() {
    let table = Table::standard();
    let layout = AtlasLayout::default();
    let hand: Hand = random_hands(3, 1).remove(0).into();
    let indices = hand.indices(&table).unwrap();

    let from_indices: Vec<AtlasRegion> = indices.iter().map(|&i| layout.locate_index(i)).collect();
    assert_eq!(hand.regions(&layout).unwrap(), from_indices);
    assert_eq!(decode_hand(&table, &indices).unwrap(), hand.cards());
}

#[test]
fn atlas_rows_are_suits_and_columns_are_ranks() {
    let table = Table::standard();
    let layout = AtlasLayout::default().with_margins(0, 0).with_spacing(2, 3);
    for card in full_deck() {
        let region = layout.locate_card(&card).unwrap();
        let row = i64::from(table.suit_position(card.suit.label()).unwrap());
        let col = i64::from(table.rank_position(card.rank.label()).unwrap());
        assert_eq!(region.top, row * 180);
        assert_eq!(region.left, col * 125);
        assert_eq!(region.height(), 178);
        assert_eq!(region.width(), 122);
    }
}
