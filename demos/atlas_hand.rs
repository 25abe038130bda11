//! Prints the index and atlas crop of every card in a hand.
//!
//! Cards are given as arguments in `"<rank> of <suit>"` form, e.g.
//! `cargo run --example atlas_hand -- "Queen of Hearts" "2 of Clubs"`.

use std::process::ExitCode;

use cardatlas::{AtlasLayout, Card, Hand, Rank, Suit, Table};

fn default_hand() -> Hand {
    [
        Card::new(Suit::Spades, Rank::Two),
        Card::new(Suit::Hearts, Rank::Queen),
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::Ten),
    ]
    .into_iter()
    .collect()
}

fn print_hand(hand: &Hand, table: &Table, layout: &AtlasLayout) -> Result<(), cardatlas::CodecError> {
    let indices = hand.indices(table)?;
    let regions = hand.regions(layout)?;
    for ((card, index), region) in hand.into_iter().zip(indices).zip(regions) {
        let name = card.to_string();
        println!(
            "{name:<18} index {index:>2}  rows {}..{}  cols {}..{}",
            region.top, region.bottom, region.left, region.right
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let table = Table::standard();
    let layout = AtlasLayout::default();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let hand = if args.is_empty() {
        default_hand()
    } else {
        match args.iter().map(|arg| arg.parse::<Card>()).collect::<Result<Hand, _>>() {
            Ok(hand) => hand,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    };

    println!("Hand as dealt:");
    let sorted = match print_hand(&hand, &table, &layout).and_then(|()| hand.sorted(&table)) {
        Ok(sorted) => sorted,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("\nSorted:");
    if let Err(err) = print_hand(&sorted, &table, &layout) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
