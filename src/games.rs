//! Many games and their statistics

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::game::{play_game, ConfigError, GameConfig, PrintGame};

pub const MIN_TRIALS: usize = 1;
pub const MAX_TRIALS: usize = 10_000;

/// Games with fewer cards left than this count as excellent
pub const EXCELLENT_CARDS_LEFT: usize = 10;

/// Summary of a run of games
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TheGamesResults {
    /// Percent of games with fewer than [`EXCELLENT_CARDS_LEFT`] cards left
    pub excellent_percent: f64,
    /// Percent of games with every card played
    pub beat_the_game_percent: f64,
    pub cards_left_average: f64,
    /// Population standard deviation of the cards left
    pub cards_left_stddev: f64,
}

impl TheGamesResults {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for TheGamesResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{excellent_percent: {}, beat_the_game_percent: {}, cards_left_average: {}, cards_left_stddev: {}}}",
            self.excellent_percent,
            self.beat_the_game_percent,
            self.cards_left_average,
            self.cards_left_stddev
        )
    }
}

/// Statistics over the cards left by each game
pub fn calculate_games_stats(cards_left: &[usize]) -> TheGamesResults {
    assert!(!cards_left.is_empty(), "no games to summarize");
    let num_games = cards_left.len() as f64;
    let percent_of = |predicate: fn(usize) -> bool| {
        cards_left.iter().filter(|&&n| predicate(n)).count() as f64 / num_games * 100.0
    };

    let cards_left_average = cards_left.iter().sum::<usize>() as f64 / num_games;
    let variance = cards_left
        .iter()
        .map(|&n| (n as f64 - cards_left_average).powi(2))
        .sum::<f64>()
        / num_games;

    TheGamesResults {
        excellent_percent: percent_of(|n| n < EXCELLENT_CARDS_LEFT),
        beat_the_game_percent: percent_of(|n| n == 0),
        cards_left_average,
        cards_left_stddev: variance.sqrt(),
    }
}

/// Play `num_trials` games, seeded 0, 1, 2, ... in order. The results don't
/// depend on `parallel`.
pub fn play_games(
    config: &GameConfig,
    num_trials: usize,
    parallel: bool,
) -> Result<TheGamesResults, ConfigError> {
    if !(MIN_TRIALS..=MAX_TRIALS).contains(&num_trials) {
        return Err(ConfigError::NumTrials(num_trials));
    }
    let play = |seed: u64| play_game(seed, config, PrintGame::No);
    let cards_left: Vec<usize> = if parallel {
        (0..num_trials as u64).into_par_iter().map(play).collect()
    } else {
        (0..num_trials as u64).map(play).collect()
    };
    Ok(calculate_games_stats(&cards_left))
}
