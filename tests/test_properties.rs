//! Property-based tests for the turn engine.

use proptest::prelude::*;

use the_game_analyzer::types::flip_hand;
use the_game_analyzer::*;

/// Strategy: a sorted game hand of up to 8 distinct cards.
fn hand_strategy() -> impl Strategy<Value = Hand> {
    let cards: Vec<Card> = (2..=99).collect();
    prop::sample::subsequence(cards, 0..=MAX_HAND_SIZE)
}

/// Strategy: any pile tops.
fn piles_strategy() -> impl Strategy<Value = Piles> {
    prop::array::uniform4(1..=100 as Card)
}

fn turn(piles: Piles, bits: u16, delta: i32, reached_for_group: bool) -> Turn {
    Turn {
        piles,
        hand_mask: HandMask::from_bits(bits),
        delta,
        piles_indexes: [0; NUM_PILES],
        reached_for_group,
    }
}

proptest! {
    // 1. Lookup table popcount agrees with the hardware one
    #[test]
    fn num_cards_matches_count_ones(bits in any::<u16>()) {
        prop_assert_eq!(get_num_cards_in(bits), bits.count_ones() as usize);
    }

    // 2. Flipping a mask twice restores the positions below the hand size
    #[test]
    fn mask_flip_involution(bits in any::<u16>(), hand_size in 0..=HAND_MASK_WIDTH) {
        let low_bits = if hand_size == HAND_MASK_WIDTH {
            bits
        } else {
            bits & ((1u16 << hand_size) - 1)
        };
        let mask = HandMask::from_bits(low_bits);
        prop_assert_eq!(mask.flip(hand_size).size(), mask.size());
        prop_assert_eq!(mask.flip(hand_size).flip(hand_size), mask);
    }

    // 3. Flipping a hand keeps it sorted and flipping back restores it
    #[test]
    fn hand_flip_involution(hand in hand_strategy()) {
        let flipped = flip_hand(&hand);
        prop_assert!(flipped.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(flip_hand(&flipped), hand);
    }

    // 4. Plays on a pile chain from the pile top and never share a card
    #[test]
    fn plays_chain_without_overlap(
        hand in hand_strategy(),
        pile_card in 1..=99 as Card,
        min_cards_for_turn in 1..=2usize,
        card_reach_distance in 0..=20i32,
    ) {
        let ten_groups = get_ten_groups(&hand);
        let plays = get_plays_ascending(
            pile_card, 100, 0, &hand, &ten_groups, min_cards_for_turn, card_reach_distance,
        );
        let again = get_plays_ascending(
            pile_card, 100, 0, &hand, &ten_groups, min_cards_for_turn, card_reach_distance,
        );
        prop_assert_eq!(&plays, &again);

        let mut last_card = pile_card;
        let mut used = HandMask::new();
        for play in &plays {
            prop_assert_eq!(play.pile_card_start, last_card);
            prop_assert!(!play.hand_mask.overlaps(used));
            prop_assert!(play.hand_mask.iter().all(|i| i < hand.len()));
            used.add_mask(play.hand_mask);
            last_card = play.pile_card_end;
        }
    }

    // 5. A turn uses each card once and exactly the plays it counted
    #[test]
    fn turn_claims_each_card_once(
        piles in piles_strategy(),
        hand in hand_strategy(),
        min_cards_for_turn in 1..=2usize,
        card_reach_distance in 0..=20i32,
    ) {
        let piles_of_plays = get_piles_of_plays(&piles, &hand, min_cards_for_turn, card_reach_distance);
        let best = find_best_turn(&piles, &hand, min_cards_for_turn, card_reach_distance);
        prop_assert_eq!(best, find_best_turn(&piles, &hand, min_cards_for_turn, card_reach_distance));

        let mut hand_mask = HandMask::new();
        let mut delta = 0;
        for (piles_index, plays) in piles_of_plays.iter().enumerate() {
            let num_plays = best.piles_indexes[piles_index];
            for play in &plays[..num_plays] {
                prop_assert!(!hand_mask.overlaps(play.hand_mask));
                hand_mask.add_mask(play.hand_mask);
                delta += play.delta;
            }
            if num_plays == 0 {
                prop_assert_eq!(best.piles[piles_index], piles[piles_index]);
            } else {
                prop_assert_eq!(best.piles[piles_index], plays[num_plays - 1].pile_card_end);
            }
        }
        prop_assert_eq!(hand_mask, best.hand_mask);
        prop_assert_eq!(delta, best.delta);
    }

    // 6. If any single pile can meet the minimum, the best turn does too
    #[test]
    fn best_turn_meets_minimum_when_possible(
        piles in piles_strategy(),
        hand in hand_strategy(),
        min_cards_for_turn in 1..=2usize,
    ) {
        let piles_of_plays = get_piles_of_plays(&piles, &hand, min_cards_for_turn, 1);
        let possible = piles_of_plays
            .iter()
            .any(|plays| plays.iter().map(Play::num_cards).sum::<usize>() >= min_cards_for_turn);
        let best = find_best_turn(&piles, &hand, min_cards_for_turn, 1);
        if possible {
            prop_assert!(best.has_min_cards(min_cards_for_turn), "{}", best);
        }
    }

    // 7. Meeting the minimum outranks every other tier
    #[test]
    fn meeting_minimum_wins(
        short_delta in -50..=200i32,
        long_delta in -50..=200i32,
        short_reached in any::<bool>(),
        long_reached in any::<bool>(),
    ) {
        let compare = TurnCompare::new(2);
        let short = turn(STARTING_PILES, 0x1, short_delta, short_reached);
        let long = turn(STARTING_PILES, 0x6, long_delta, long_reached);
        prop_assert!(compare.is_better(&short, &long));
        prop_assert!(!compare.is_better(&long, &short));
    }

    // 8. An empty hand leaves the piles alone
    #[test]
    fn empty_hand_is_identity(
        piles in piles_strategy(),
        min_cards_for_turn in 0..=2usize,
        card_reach_distance in 0..=20i32,
    ) {
        let turn = find_best_turn(&piles, &[], min_cards_for_turn, card_reach_distance);
        prop_assert_eq!(turn, Turn::new(piles));
    }
}
