//! Playing a full game: deck, deal, draw and the turn loop

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::hand_mask::HandMask;
use super::search::find_best_turn;
use super::turn::{Turn, TurnCompare};
use super::types::*;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 5;
pub const MIN_CARD_REACH_DISTANCE: i32 = 0;
pub const MAX_CARD_REACH_DISTANCE: i32 = 20;

/// Cards each turn must play while the deck has cards
pub const STARTING_MIN_CARDS_FOR_TURN: usize = 2;
/// Cards each turn must play once the deck is empty
pub const ENDGAME_MIN_CARDS_FOR_TURN: usize = 1;

/// Invalid game or trial settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    NumPlayers(usize),
    CardReachDistance(i32),
    CardReachDistanceEndgame(i32),
    NumTrials(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NumPlayers(n) => write!(
                f,
                "number of players {n} is not in {MIN_PLAYERS}..={MAX_PLAYERS}"
            ),
            ConfigError::CardReachDistance(d) => write!(
                f,
                "card reach distance {d} is not in {MIN_CARD_REACH_DISTANCE}..={MAX_CARD_REACH_DISTANCE}"
            ),
            ConfigError::CardReachDistanceEndgame(d) => write!(
                f,
                "endgame card reach distance {d} is not in {MIN_CARD_REACH_DISTANCE}..={MAX_CARD_REACH_DISTANCE}"
            ),
            ConfigError::NumTrials(n) => write!(
                f,
                "number of trials {n} is not in {}..={}",
                crate::games::MIN_TRIALS,
                crate::games::MAX_TRIALS
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings shared by every game of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    num_players: usize,
    card_reach_distance_normal: i32,
    card_reach_distance_endgame: i32,
}

impl GameConfig {
    pub fn new(
        num_players: usize,
        card_reach_distance_normal: i32,
        card_reach_distance_endgame: i32,
    ) -> Result<Self, ConfigError> {
        let reach_range = MIN_CARD_REACH_DISTANCE..=MAX_CARD_REACH_DISTANCE;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::NumPlayers(num_players));
        }
        if !reach_range.contains(&card_reach_distance_normal) {
            return Err(ConfigError::CardReachDistance(card_reach_distance_normal));
        }
        if !reach_range.contains(&card_reach_distance_endgame) {
            return Err(ConfigError::CardReachDistanceEndgame(card_reach_distance_endgame));
        }
        Ok(GameConfig {
            num_players,
            card_reach_distance_normal,
            card_reach_distance_endgame,
        })
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn card_reach_distance_normal(&self) -> i32 {
        self.card_reach_distance_normal
    }

    pub fn card_reach_distance_endgame(&self) -> i32 {
        self.card_reach_distance_endgame
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            num_players: 1,
            card_reach_distance_normal: 1,
            card_reach_distance_endgame: 1,
        }
    }
}

/// Whether to print the deck and every turn to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintGame {
    No,
    Yes,
}

/// Hand size for a number of players
pub fn calc_num_cards_per_hand(num_players: usize) -> usize {
    match num_players {
        1 => 8,
        2 => 7,
        3..=5 => 6,
        _ => panic!("no hand size for {num_players} players"),
    }
}

/// All the deck cards, shuffled. The same seed always gives the same deck.
pub fn new_shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck: Vec<Card> = (MIN_CARD..=MAX_CARD).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal sorted hands off the end of the deck
pub fn deal(deck: &mut Vec<Card>, num_players: usize) -> Vec<Hand> {
    let num_cards_per_hand = calc_num_cards_per_hand(num_players);
    assert!(
        deck.len() >= num_players * num_cards_per_hand,
        "not enough cards to deal"
    );
    (0..num_players)
        .map(|_| {
            let mut hand = deck.split_off(deck.len() - num_cards_per_hand);
            hand.sort_unstable();
            hand
        })
        .collect()
}

/// Remove the played hand positions and refill the hand from the end of the
/// deck, as far as the deck allows. The hand stays sorted.
pub fn draw_cards(deck: &mut Vec<Card>, hand: &mut Hand, hand_mask: HandMask) {
    let hand_size = hand.len();
    *hand = hand
        .iter()
        .enumerate()
        .filter(|&(i, _)| !hand_mask.have(i))
        .map(|(_, &card)| card)
        .collect();
    let num_cards_to_draw = (hand_size - hand.len()).min(deck.len());
    hand.extend(deck.drain(deck.len() - num_cards_to_draw..));
    hand.sort_unstable();
}

/// Index of the hand with the best opening turn; the first one wins ties.
pub fn get_strongest_starting_hands_index(
    piles: &Piles,
    hands: &[Hand],
    min_cards_for_turn: usize,
    card_reach_distance: i32,
) -> usize {
    let turns: Vec<Turn> = hands
        .iter()
        .map(|hand| find_best_turn(piles, hand, min_cards_for_turn, card_reach_distance))
        .collect();
    TurnCompare::new(min_cards_for_turn)
        .best_index(&turns)
        .unwrap_or_default()
}

/// Play one game and return the number of cards left over (deck and hands).
/// Zero means the game was beaten.
pub fn play_game(seed: u64, config: &GameConfig, print_game: PrintGame) -> usize {
    let mut piles = STARTING_PILES;
    let mut deck = new_shuffled_deck(seed);
    let mut hands = deal(&mut deck, config.num_players());

    if print_game == PrintGame::Yes {
        println!("seed: {seed}, deck: {}", cards_to_string(&deck));
    }

    let mut hands_index = get_strongest_starting_hands_index(
        &piles,
        &hands,
        STARTING_MIN_CARDS_FOR_TURN,
        config.card_reach_distance_normal(),
    );

    loop {
        let num_cards_left = deck.len() + hands.iter().map(Vec::len).sum::<usize>();
        if num_cards_left == 0 {
            return 0;
        }

        let hand = &mut hands[hands_index];
        if !hand.is_empty() {
            let (min_cards_for_turn, card_reach_distance) = if deck.is_empty() {
                (ENDGAME_MIN_CARDS_FOR_TURN, config.card_reach_distance_endgame())
            } else {
                (STARTING_MIN_CARDS_FOR_TURN, config.card_reach_distance_normal())
            };
            let turn = find_best_turn(&piles, hand, min_cards_for_turn, card_reach_distance);
            if print_game == PrintGame::Yes {
                println!(
                    "{}, hand: {hands_index}, {}, {}",
                    piles_to_string(&piles),
                    cards_to_string(hand),
                    turn.hand_mask
                );
            }
            if !turn.has_min_cards(min_cards_for_turn) {
                return num_cards_left;
            }
            piles = turn.piles;
            draw_cards(&mut deck, hand, turn.hand_mask);
        }

        hands_index = (hands_index + 1) % hands.len();
    }
}
