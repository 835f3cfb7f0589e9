//! The Game Analyzer - Turn resolver and simulator for the card game "The Game"
//!
//! Four piles: two count up from 1 and two count down from 100. Cards 2-99
//! go onto them from the players' hands. A card may also go onto a pile when it
//! is exactly 10 back from the pile's top.
//!
//! The analyzer plays a greedy strategy:
//! - Every legal run of plays is enumerated per pile, treating runs of cards
//!   10 apart ("ten groups") as a single play
//! - The cheapest turn that meets the minimum number of cards is chosen and
//!   topped up with further cheap plays
//! - Whole games are simulated from seeded decks and summarized over many
//!   trials
//!
//! # Example
//!
//! ```
//! use the_game_analyzer::find_best_turn;
//!
//! let hand = [6, 11, 20, 24, 51, 53, 57, 92];
//! let turn = find_best_turn(&[1, 8, 100, 100], &hand, 2, 1);
//! assert_eq!(turn.piles, [6, 11, 100, 100]);
//! assert_eq!(turn.num_cards(), 2);
//! ```

pub mod game;
pub mod games;
pub mod hand_mask;
pub mod play;
mod search;
pub mod ten_groups;
pub mod turn;
pub mod types;

pub use game::{
    calc_num_cards_per_hand, deal, draw_cards, get_strongest_starting_hands_index,
    new_shuffled_deck, play_game, ConfigError, GameConfig, PrintGame,
};
pub use games::{calculate_games_stats, play_games, TheGamesResults, MAX_TRIALS, MIN_TRIALS};
pub use hand_mask::{get_num_cards_in, HandMask, HAND_MASK_WIDTH};
pub use play::{get_plays_ascending, get_plays_descending, Play, Plays};
pub use search::{find_best_turn, get_piles_of_plays, PilesOfPlays};
pub use ten_groups::{get_ten_groups, TenGroup, TenGroups};
pub use turn::{Turn, TurnCompare};
pub use types::{Card, Hand, Piles, MAX_HAND_SIZE, NUM_CARDS_IN_DECK, NUM_PILES, STARTING_PILES};
