//! Interactive card menu example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Dealer, DealerOptions, MenuChoice, parse_draw_count};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = Dealer::new(DealerOptions::default(), seed);

    let choice = prompt_line("dial 1 for card deck, 2 to pick cards, 3 for a shuffled deck: ");
    match choice.parse::<MenuChoice>() {
        Ok(MenuChoice::OrderedDeck) => print_deck(&Dealer::ordered_deck()),
        Ok(MenuChoice::ShuffledDeck) => print_deck(&dealer.shuffled_deck()),
        Ok(MenuChoice::RandomDraws) => pick_cards(&mut dealer),
        Err(err) => println!("{err}"),
    }
}

fn pick_cards(dealer: &mut Dealer) {
    let input = prompt_line("How many cards do you want: ");
    let count = match parse_draw_count(&input) {
        Ok(count) => count,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    for card in dealer.draws(count) {
        print_draw(card);
    }
}

fn print_deck(deck: &[Card]) {
    for card in deck {
        println!("{card}");
    }
}

fn print_draw(card: Card) {
    println!("card is: {card}");
    println!("{} is the suit's ordinal", card.suit.ordinal());
    println!("{} is the rank's ordinal", card.rank.ordinal());
    println!("--------------------------");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}
