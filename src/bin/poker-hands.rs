use poker_hands::deck::Deck;
use poker_hands::hand::{Hand, HandError};

/// The example lineup, one hand per category.
const EXAMPLES: [&str; 10] = [
    "Ah Kh Qh Jh Th",
    "8c 7c 6c 5c 4c",
    "5d 5s 5h 5c 3h",
    "Kh Kd Ks 5h 5c",
    "Ks Js 9s 7s 3s",
    "Qs Jd Tc 9s 8h",
    "Qs Qh Qd 5s 9c",
    "Kh Ks Jc Jd 9d",
    "Ac Ad 9h 6h 4d",
    "Ad 7h 6c 3d 2s",
];

fn narrate_hand(hand: &Hand) {
    let names: Vec<String> = hand.cards().iter().map(|c| c.describe()).collect();
    println!("\nNew hand: {}", names.join(", "));
    println!("This hand is a {}", hand.category());
}

fn main() -> Result<(), HandError> {
    println!("Shuffling deck");
    let mut deck = Deck::standard();
    deck.shuffle_with(&mut rand::rng());

    for _ in 0..3 {
        let cards = deck.draw_n(5);
        for card in &cards {
            println!("Drawing card: {}", card.describe());
        }
        let hand = Hand::try_new(&cards)?;
        narrate_hand(&hand);
    }

    println!("\nExample lineup, strongest first:");
    let mut hands: Vec<Hand> =
        EXAMPLES.iter().map(|s| s.parse()).collect::<Result<_, _>>()?;
    hands.sort_by(|a, b| b.cmp(a));
    for hand in &hands {
        println!("  {}  {} (strength {})", hand, hand.category(), hand.strength());
    }
    Ok(())
}
