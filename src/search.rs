//! Best turn search
//!
//! The search is greedy, with no lookahead past the current turn:
//! - Plays are enumerated once per pile ([`get_piles_of_plays`])
//! - A cross-pile turn takes the cheapest next play on any pile until the
//!   minimum number of cards is reached
//! - Single-pile turns take one pile's plays in order until the minimum
//! - The best of those, by [`TurnCompare`], is topped up with any further
//!   plays within the card reach distance

use super::play::*;
use super::ten_groups::get_ten_groups;
use super::turn::{Turn, TurnCompare};
use super::types::*;

/// Plays for each pile
pub type PilesOfPlays = [Plays; NUM_PILES];

/// Upper bound for each ascending pile: the lower pile stops below the
/// higher one so the two don't compete for the same cards. Pile 0 is the
/// lower one on ties.
fn get_ascending_max_cards(piles: &Piles) -> [Card; 2] {
    if piles[0] <= piles[1] {
        [piles[1], DESCENDING_PILE_START]
    } else {
        [DESCENDING_PILE_START, piles[0]]
    }
}

/// Lower bound for each descending pile, mirroring the ascending rule.
fn get_descending_min_cards(piles: &Piles) -> [Card; 2] {
    if piles[2] >= piles[3] {
        [piles[3], ASCENDING_PILE_START]
    } else {
        [ASCENDING_PILE_START, piles[2]]
    }
}

/// Get the plays for all four piles
pub fn get_piles_of_plays(
    piles: &Piles,
    hand: &[Card],
    min_cards_for_turn: usize,
    card_reach_distance: i32,
) -> PilesOfPlays {
    let mut piles_of_plays = PilesOfPlays::default();

    let ten_groups = get_ten_groups(hand);
    for (offset, max_card) in get_ascending_max_cards(piles).into_iter().enumerate() {
        piles_of_plays[offset] = get_plays_ascending(
            piles[offset],
            max_card,
            offset,
            hand,
            &ten_groups,
            min_cards_for_turn,
            card_reach_distance,
        );
    }

    let flipped_hand = flip_hand(hand);
    let flipped_ten_groups = get_ten_groups(&flipped_hand);
    for (offset, min_card) in get_descending_min_cards(piles).into_iter().enumerate() {
        let piles_index = 2 + offset;
        piles_of_plays[piles_index] = get_plays_descending(
            piles[piles_index],
            min_card,
            piles_index,
            &flipped_hand,
            &flipped_ten_groups,
            min_cards_for_turn,
            card_reach_distance,
        );
    }
    piles_of_plays
}

/// Next unused play on a pile, if it can still be made
fn get_next_play<'a>(turn: &Turn, piles_of_plays: &'a PilesOfPlays, piles_index: usize) -> Option<&'a Play> {
    piles_of_plays[piles_index]
        .get(turn.piles_indexes[piles_index])
        .filter(|play| turn.can_apply(play))
}

/// Pile whose next play has the smallest delta. On equal deltas a play that
/// isn't a group reach wins, then the lower pile index.
///
/// A pile whose next play reuses a card already in the turn is done: its
/// later plays build on the blocked one.
pub fn get_next_min_play_piles_index(turn: &Turn, piles_of_plays: &PilesOfPlays) -> Option<usize> {
    let mut best: Option<(usize, &Play)> = None;
    for piles_index in 0..NUM_PILES {
        let Some(play) = get_next_play(turn, piles_of_plays, piles_index) else {
            continue;
        };
        let is_better = match best {
            None => true,
            Some((_, best_play)) => {
                play.delta < best_play.delta
                    || (play.delta == best_play.delta
                        && best_play.is_group_reach()
                        && !play.is_group_reach())
            }
        };
        if is_better {
            best = Some((piles_index, play));
        }
    }
    best.map(|(piles_index, _)| piles_index)
}

/// Best turn using the cheapest plays across all piles, stopping once the
/// minimum number of cards is played.
pub fn get_best_min_cards_across_piles(
    piles: &Piles,
    piles_of_plays: &PilesOfPlays,
    min_cards_for_turn: usize,
) -> Turn {
    let mut turn = Turn::new(*piles);
    while !turn.has_min_cards(min_cards_for_turn) {
        let Some(piles_index) = get_next_min_play_piles_index(&turn, piles_of_plays) else {
            break;
        };
        let play = &piles_of_plays[piles_index][turn.piles_indexes[piles_index]];
        turn = turn.apply_play(play);
    }
    turn
}

/// Turn playing only on one pile, in order, until the minimum number of
/// cards is played.
pub fn get_best_min_cards_in_pile(
    piles: &Piles,
    piles_of_plays: &PilesOfPlays,
    piles_index: usize,
    min_cards_for_turn: usize,
) -> Turn {
    let mut turn = Turn::new(*piles);
    for play in &piles_of_plays[piles_index] {
        if turn.has_min_cards(min_cards_for_turn) {
            break;
        }
        turn = turn.apply_play(play);
    }
    turn
}

/// Add further plays to a turn, cheapest first, while they stay within the
/// card reach distance.
pub fn extend_turn(turn: &Turn, piles_of_plays: &PilesOfPlays, card_reach_distance: i32) -> Turn {
    let mut turn = *turn;
    while let Some(piles_index) = get_next_min_play_piles_index(&turn, piles_of_plays) {
        let play = &piles_of_plays[piles_index][turn.piles_indexes[piles_index]];
        if play.delta > card_reach_distance {
            break;
        }
        turn = turn.apply_play(play);
    }
    turn
}

/// Find the best turn for a given set of piles and hand.
///
/// * `piles` - Game piles
/// * `hand` - Sorted hand, at most [`MAX_HAND_SIZE`] cards
/// * `min_cards_for_turn` - Minimum cards to be played for this turn
/// * `card_reach_distance` - How far to reach to play another card
///
/// A turn with fewer than `min_cards_for_turn` cards means no legal turn
/// exists; the caller decides what that means for the game.
pub fn find_best_turn(
    piles: &Piles,
    hand: &[Card],
    min_cards_for_turn: usize,
    card_reach_distance: i32,
) -> Turn {
    assert!(
        is_valid_hand(hand),
        "hand {} must be sorted deck cards, at most {} of them",
        cards_to_string(hand),
        MAX_HAND_SIZE
    );
    assert!(
        card_reach_distance >= 0,
        "card reach distance {card_reach_distance} is negative"
    );

    if hand.is_empty() {
        return Turn::new(*piles);
    }

    let piles_of_plays = get_piles_of_plays(piles, hand, min_cards_for_turn, card_reach_distance);
    let compare = TurnCompare::new(min_cards_for_turn);

    let mut best_turn = get_best_min_cards_across_piles(piles, &piles_of_plays, min_cards_for_turn);
    for piles_index in 0..NUM_PILES {
        let turn = get_best_min_cards_in_pile(piles, &piles_of_plays, piles_index, min_cards_for_turn);
        if compare.is_better(&best_turn, &turn) {
            best_turn = turn;
        }
    }

    if best_turn.has_min_cards(min_cards_for_turn) {
        best_turn = extend_turn(&best_turn, &piles_of_plays, card_reach_distance);
    }
    best_turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_mask::HandMask;

    #[test]
    fn test_max_min_cards() {
        assert_eq!(get_ascending_max_cards(&[1, 1, 100, 100]), [1, 100]);
        assert_eq!(get_ascending_max_cards(&[1, 8, 100, 100]), [8, 100]);
        assert_eq!(get_ascending_max_cards(&[20, 8, 100, 100]), [100, 20]);
        assert_eq!(get_descending_min_cards(&[1, 1, 100, 100]), [100, 1]);
        assert_eq!(get_descending_min_cards(&[1, 1, 90, 95]), [1, 90]);
    }

    #[test]
    fn test_get_piles_of_plays() {
        let hand = [6, 11, 20, 24, 51, 53, 57, 92];
        let piles_of_plays = get_piles_of_plays(&[1, 8, 100, 100], &hand, 2, 1);

        let ends = |plays: &Plays| plays.iter().map(|p| p.pile_card_end).collect::<Vec<_>>();
        assert_eq!(ends(&piles_of_plays[0]), vec![6]);
        assert_eq!(ends(&piles_of_plays[1]), vec![11, 20]);
        assert!(piles_of_plays[2].is_empty());
        assert_eq!(ends(&piles_of_plays[3]), vec![92, 57]);
        for (piles_index, plays) in piles_of_plays.iter().enumerate() {
            assert!(plays.iter().all(|p| p.piles_index == piles_index));
        }
    }

    #[test]
    fn test_next_min_play() {
        let hand = [6, 11, 20, 24, 51, 53, 57, 92];
        let piles = [1, 8, 100, 100];
        let piles_of_plays = get_piles_of_plays(&piles, &hand, 2, 1);
        let turn = Turn::new(piles);
        assert_eq!(get_next_min_play_piles_index(&turn, &piles_of_plays), Some(1));
        let turn = turn.apply_play(&piles_of_plays[1][0]);
        assert_eq!(get_next_min_play_piles_index(&turn, &piles_of_plays), Some(0));
        let turn = turn.apply_play(&piles_of_plays[0][0]);
        assert_eq!(get_next_min_play_piles_index(&turn, &piles_of_plays), Some(3));
    }

    #[test]
    fn test_next_min_play_prefers_no_group_reach() {
        let reach = Play::new(HandMask::from_bits(0x3), 0, 1, 4);
        let single = Play {
            hand_mask: HandMask::from_bits(0x4),
            piles_index: 2,
            pile_card_start: 100,
            pile_card_end: 97,
            delta: 3,
        };
        let piles_of_plays: PilesOfPlays = [vec![reach], vec![], vec![single], vec![]];
        let turn = Turn::new(STARTING_PILES);
        assert_eq!(get_next_min_play_piles_index(&turn, &piles_of_plays), Some(2));
    }

    #[test]
    fn test_blocked_pile_is_skipped() {
        let piles_of_plays: PilesOfPlays = [
            vec![Play::new(HandMask::from_bits(0x1), 0, 1, 3)],
            vec![Play::new(HandMask::from_bits(0x1), 1, 1, 3)],
            vec![],
            vec![Play::new(HandMask::from_bits(0x2), 3, 100, 90)],
        ];
        let turn = Turn::new(STARTING_PILES).apply_play(&piles_of_plays[0][0]);
        assert_eq!(get_next_min_play_piles_index(&turn, &piles_of_plays), Some(3));
    }

    #[test]
    fn test_best_min_cards_in_pile() {
        let hand = [6, 11, 20, 24, 51, 53, 57, 92];
        let piles = [1, 8, 100, 100];
        let piles_of_plays = get_piles_of_plays(&piles, &hand, 2, 1);

        let turn = get_best_min_cards_in_pile(&piles, &piles_of_plays, 1, 2);
        assert_eq!(turn.piles, [1, 20, 100, 100]);
        assert_eq!(turn.hand_mask.value(), 0x6);
        assert_eq!(turn.delta, 12);

        let turn = get_best_min_cards_in_pile(&piles, &piles_of_plays, 0, 2);
        assert_eq!(turn.num_cards(), 1);

        let turn = get_best_min_cards_in_pile(&piles, &piles_of_plays, 2, 2);
        assert_eq!(turn, Turn::new(piles));
    }

    #[test]
    fn test_find_best_turn_spreads_over_piles() {
        let hand = [6, 11, 20, 24, 51, 53, 57, 92];
        let turn = find_best_turn(&[1, 8, 100, 100], &hand, 2, 1);
        assert_eq!(turn.piles, [6, 11, 100, 100]);
        assert_eq!(turn.hand_mask.value(), 0x3);
        assert_eq!(turn.delta, 8);
        assert!(!turn.reached_for_group);
    }

    #[test]
    fn test_find_best_turn_group_backs_up_pile() {
        // 30 goes onto pile 0 and its group walks back down to 20.
        let hand = [20, 30, 70, 80];
        let turn = find_best_turn(&[25, 1, 100, 100], &hand, 2, 0);
        assert_eq!(turn.piles, [20, 1, 100, 100]);
        assert_eq!(turn.hand_mask.value(), 0x3);
        assert_eq!(turn.delta, -5);
    }

    #[test]
    fn test_find_best_turn_extends_within_reach() {
        let hand = [2, 3, 4, 5, 40, 60];
        let turn = find_best_turn(&STARTING_PILES, &hand, 2, 1);
        // Pile 0 is capped by pile 1 while they are equal.
        assert_eq!(turn.piles, [1, 5, 100, 100]);
        assert_eq!(turn.hand_mask.value(), 0xf);
        assert_eq!(turn.delta, 4);
    }

    #[test]
    fn test_find_best_turn_under_quota() {
        let turn = find_best_turn(&[98, 97, 3, 2], &[50], 1, 1);
        assert_eq!(turn, Turn::new([98, 97, 3, 2]));

        let turn = find_best_turn(&[98, 1, 3, 2], &[50], 2, 1);
        assert_eq!(turn.num_cards(), 1);
        assert!(!turn.has_min_cards(2));
        assert_eq!(turn.piles, [98, 50, 3, 2]);
    }

    #[test]
    fn test_single_pile_beats_across_piles() {
        let hand = [6, 7, 16, 95];
        let piles_of_plays = get_piles_of_plays(&STARTING_PILES, &hand, 2, 0);

        let across = get_best_min_cards_across_piles(&STARTING_PILES, &piles_of_plays, 2);
        assert_eq!(across.piles, [1, 6, 100, 95]);
        assert_eq!(across.hand_mask.value(), 0xf);
        assert_eq!(across.delta, 10);

        let in_pile = get_best_min_cards_in_pile(&STARTING_PILES, &piles_of_plays, 1, 2);
        assert_eq!(in_pile.hand_mask.value(), 0x7);
        assert_eq!(in_pile.delta, 5);
        assert!(TurnCompare::new(2).is_better(&across, &in_pile));

        assert_eq!(find_best_turn(&STARTING_PILES, &hand, 2, 0), in_pile);
    }

    #[test]
    fn test_find_best_turn_empty_hand() {
        let piles = [10, 20, 80, 70];
        assert_eq!(find_best_turn(&piles, &[], 2, 3), Turn::new(piles));
    }

    #[test]
    #[should_panic(expected = "must be sorted")]
    fn test_find_best_turn_unsorted_hand() {
        find_best_turn(&STARTING_PILES, &[20, 10], 2, 1);
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn test_find_best_turn_negative_reach() {
        find_best_turn(&STARTING_PILES, &[10, 20], 2, -1);
    }
}
