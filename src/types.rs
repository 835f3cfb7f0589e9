//! Core type definitions for cards, hands and piles

/// Card value. Deck cards are 2..=99; piles also use 1 and 100 as their
/// starting values.
pub type Card = i16;
pub const MIN_CARD: Card = 2;
pub const MAX_CARD: Card = 99;
pub const NUM_CARDS_IN_DECK: usize = (MAX_CARD - MIN_CARD + 1) as usize;

/// Starting value of an ascending pile
pub const ASCENDING_PILE_START: Card = 1;
/// Starting value of a descending pile
pub const DESCENDING_PILE_START: Card = 100;

/// Maximum number of cards in a hand (single player game)
pub const MAX_HAND_SIZE: usize = 8;

/// A hand, always sorted ascending.
pub type Hand = Vec<Card>;

/// Piles: 0 and 1 ascend from 1, 2 and 3 descend from 100.
pub const NUM_PILES: usize = 4;
pub type Piles = [Card; NUM_PILES];

pub const STARTING_PILES: Piles = [
    ASCENDING_PILE_START,
    ASCENDING_PILE_START,
    DESCENDING_PILE_START,
    DESCENDING_PILE_START,
];

/// Mirror a card so a descending pile can be treated as an ascending one.
#[inline]
pub fn flip_card(card: Card) -> Card {
    101 - card
}

/// Flip every card and reverse the order, so a sorted hand stays sorted.
pub fn flip_hand(hand: &[Card]) -> Hand {
    hand.iter().rev().map(|&c| flip_card(c)).collect()
}

/// Distance between the closest ascending and descending pile tops.
/// Larger means the piles have closed in on each other more.
#[inline]
pub fn get_pile_extremes(piles: &Piles) -> i32 {
    i32::from(piles[0].min(piles[1])) - i32::from(piles[2].max(piles[3]))
}

/// Check a hand is sorted ascending and holds only deck cards
pub fn is_valid_hand(hand: &[Card]) -> bool {
    hand.len() <= MAX_HAND_SIZE
        && hand.windows(2).all(|w| w[0] < w[1])
        && hand.iter().all(|&c| (MIN_CARD..=MAX_CARD).contains(&c))
}

/// Format a list of cards as `{a,b,c}`
pub fn cards_to_string(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("{{{}}}", cards.join(","))
}

/// Format piles as `{a, b, c, d}`
pub fn piles_to_string(piles: &Piles) -> String {
    format!(
        "{{{}, {}, {}, {}}}",
        piles[0], piles[1], piles[2], piles[3]
    )
}

/// Parse a hand from a comma or whitespace separated list of cards.
/// The result is sorted; duplicates and out-of-range cards are rejected.
pub fn parse_hand(s: &str) -> Option<Hand> {
    let mut hand = Hand::new();
    for token in s
        .trim_matches(|c: char| c == '{' || c == '}')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        hand.push(token.parse().ok()?);
    }
    hand.sort_unstable();
    if is_valid_hand(&hand) {
        Some(hand)
    } else {
        None
    }
}

/// Parse four pile values, e.g. `1,8,100,100`
pub fn parse_piles(s: &str) -> Option<Piles> {
    let values: Vec<Card> = s
        .trim_matches(|c: char| c == '{' || c == '}')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse().ok())
        .collect::<Option<_>>()?;
    let piles: Piles = values.try_into().ok()?;
    let in_range = piles
        .iter()
        .all(|&c| (ASCENDING_PILE_START..=DESCENDING_PILE_START).contains(&c));
    in_range.then_some(piles)
}
