//! the-game-analyzer - Play "The Game" and report how well the greedy strategy does
//!
//! With a seed (or a single trial) one game is played and printed turn by
//! turn. Otherwise the trials are played with seeds 0, 1, 2, ... and the
//! statistics are written to stdout as JSON:
//! - excellent_percent: games with fewer than 10 cards left
//! - beat_the_game_percent: games with every card played
//! - cards_left_average and cards_left_stddev
//!
//! With a hand, no game is played: the best turn for that hand is resolved
//! against the given piles and printed.
//!
//! Usage: the-game-analyzer --num-players 3 --num-trials 1000 --parallel
//!        the-game-analyzer --hand 6,11,20,24,51,53,57,92 --piles 1,8,100,100

use clap::Parser;
use std::time::Instant;
use the_game_analyzer::game::{
    MAX_CARD_REACH_DISTANCE, MAX_PLAYERS, MIN_PLAYERS, STARTING_MIN_CARDS_FOR_TURN,
};
use the_game_analyzer::types::{cards_to_string, parse_hand, parse_piles};
use the_game_analyzer::{
    find_best_turn, play_game, play_games, GameConfig, PrintGame, MAX_HAND_SIZE, MAX_TRIALS,
    MIN_TRIALS,
};

#[derive(Parser)]
#[command(name = "the-game-analyzer")]
#[command(about = "Play 'The Game' several times and give some stats")]
#[command(version)]
struct Args {
    /// Number of players
    #[arg(short = 'n', long = "num-players", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(MIN_PLAYERS as i64..=MAX_PLAYERS as i64))]
    num_players: u8,

    /// How far to reach to play another card (non-endgame)
    #[arg(short = 'r', long = "card-reach-distance", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(..=MAX_CARD_REACH_DISTANCE as i64))]
    card_reach_distance: u8,

    /// How far to reach to play another card (endgame)
    #[arg(short = 'e', long = "card-reach-distance-endgame", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(..=MAX_CARD_REACH_DISTANCE as i64))]
    card_reach_distance_endgame: u8,

    /// Play a single game with this seed and print it
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// How many trials to play. If 1, print the game
    #[arg(short = 't', long = "num-trials", default_value_t = 1,
          value_parser = clap::value_parser!(u16).range(MIN_TRIALS as i64..=MAX_TRIALS as i64))]
    num_trials: u16,

    /// Run trials in parallel
    #[arg(short = 'p', long = "parallel")]
    parallel: bool,

    /// Resolve one turn for this hand (e.g. 6,11,20) instead of playing games
    #[arg(long = "hand")]
    hand: Option<String>,

    /// Piles for --hand
    #[arg(long = "piles", default_value = "1,1,100,100", requires = "hand")]
    piles: String,

    /// Minimum cards for the --hand turn
    #[arg(short = 'm', long = "min-cards", default_value_t = STARTING_MIN_CARDS_FOR_TURN as u8,
          requires = "hand",
          value_parser = clap::value_parser!(u8).range(1..=MAX_HAND_SIZE as i64))]
    min_cards: u8,

    /// Verbose output - show settings and timing
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let config = match GameConfig::new(
        usize::from(args.num_players),
        i32::from(args.card_reach_distance),
        i32::from(args.card_reach_distance_endgame),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if args.verbose {
        eprintln!(
            "Players: {}, reach: {}, endgame reach: {}",
            config.num_players(),
            config.card_reach_distance_normal(),
            config.card_reach_distance_endgame()
        );
    }

    if let Some(hand) = &args.hand {
        resolve_turn(hand, &args.piles, usize::from(args.min_cards), &config);
        return;
    }

    let start = Instant::now();
    if args.seed.is_some() || args.num_trials == 1 {
        let seed = args.seed.unwrap_or_default();
        let cards_left = play_game(seed, &config, PrintGame::Yes);
        println!("Cards remaining: {}", cards_left);
    } else {
        let num_trials = usize::from(args.num_trials);
        if args.verbose {
            eprintln!(
                "Playing {} trials{}...",
                num_trials,
                if args.parallel { " in parallel" } else { "" }
            );
        }
        let results = match play_games(&config, num_trials, args.parallel) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        if args.verbose {
            eprintln!("Results: {}", results);
        }
        match results.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing results: {}", e);
                std::process::exit(1);
            }
        }
    }
    if args.verbose {
        eprintln!("Time: {:.2}s", start.elapsed().as_secs_f64());
    }
}

/// Print the best turn for one hand
fn resolve_turn(hand: &str, piles: &str, min_cards_for_turn: usize, config: &GameConfig) {
    let Some(hand) = parse_hand(hand) else {
        eprintln!(
            "Error: bad hand '{}' (at most {} distinct cards 2-99)",
            hand, MAX_HAND_SIZE
        );
        std::process::exit(1);
    };
    let Some(piles) = parse_piles(piles) else {
        eprintln!("Error: bad piles '{}' (four values 1-100)", piles);
        std::process::exit(1);
    };

    let turn = find_best_turn(
        &piles,
        &hand,
        min_cards_for_turn,
        config.card_reach_distance_normal(),
    );
    let played: Vec<_> = turn.hand_mask.iter().map(|i| hand[i]).collect();
    println!("{}", turn);
    println!("Cards played: {}", cards_to_string(&played));
    if !turn.has_min_cards(min_cards_for_turn) {
        println!("No turn plays {} cards", min_cards_for_turn);
    }
}
