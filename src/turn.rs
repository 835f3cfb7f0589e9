//! Turn state and turn ranking

use std::cmp::Ordering;

use super::hand_mask::HandMask;
use super::play::Play;
use super::types::*;

/// Number of plays consumed from each pile's plays
pub type PilesIndexes = [usize; NUM_PILES];

/// The intermediate state and outcome of a player turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Turn {
    /// Piles after the turn's plays
    pub piles: Piles,
    /// Hand positions played so far
    pub hand_mask: HandMask,
    /// Sum of the plays' deltas
    pub delta: i32,
    pub piles_indexes: PilesIndexes,
    /// Some play was a ten group that had to jump up
    pub reached_for_group: bool,
}

impl Turn {
    /// Empty turn on the given piles
    pub fn new(piles: Piles) -> Self {
        Turn {
            piles,
            ..Default::default()
        }
    }

    /// Number of cards played
    #[inline]
    pub fn num_cards(&self) -> usize {
        self.hand_mask.size()
    }

    /// Check if the turn plays the required number of cards
    #[inline]
    pub fn has_min_cards(&self, min_cards_for_turn: usize) -> bool {
        self.num_cards() >= min_cards_for_turn
    }

    /// Check if a play could be added without reusing a card
    #[inline]
    pub fn can_apply(&self, play: &Play) -> bool {
        !self.hand_mask.overlaps(play.hand_mask)
    }

    /// Turn with `play` added on top. The play must not reuse a card.
    pub fn apply_play(&self, play: &Play) -> Turn {
        assert!(
            self.can_apply(play),
            "play {play} reuses cards of turn mask {}",
            self.hand_mask
        );
        let mut turn = *self;
        turn.piles[play.piles_index] = play.pile_card_end;
        turn.hand_mask.add_mask(play.hand_mask);
        turn.delta += play.delta;
        turn.piles_indexes[play.piles_index] += 1;
        turn.reached_for_group |= play.is_group_reach();
        turn
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{piles: {}, hand_mask: {}, delta: {}, piles_indexes: {:?}, reached_for_group: {}}}",
            piles_to_string(&self.piles),
            self.hand_mask,
            self.delta,
            self.piles_indexes,
            self.reached_for_group
        )
    }
}

/// Ranks turns for a given minimum number of cards.
///
/// In priority order a turn is better when it:
/// 1. plays the minimum number of cards (when the other doesn't)
/// 2. has a smaller total delta
/// 3. didn't have to reach for a ten group
/// 4. plays more cards
/// 5. has larger pile extremes (see [`get_pile_extremes`])
#[derive(Clone, Copy, Debug)]
pub struct TurnCompare {
    pub min_cards_for_turn: usize,
}

impl TurnCompare {
    pub fn new(min_cards_for_turn: usize) -> Self {
        TurnCompare { min_cards_for_turn }
    }

    /// Order two turns from worst to best: `Greater` means `t1` is better.
    pub fn compare(&self, t1: &Turn, t2: &Turn) -> Ordering {
        let min_cards = self.min_cards_for_turn;
        t1.has_min_cards(min_cards)
            .cmp(&t2.has_min_cards(min_cards))
            .then_with(|| t2.delta.cmp(&t1.delta))
            .then_with(|| t2.reached_for_group.cmp(&t1.reached_for_group))
            .then_with(|| t1.num_cards().cmp(&t2.num_cards()))
            .then_with(|| get_pile_extremes(&t1.piles).cmp(&get_pile_extremes(&t2.piles)))
    }

    /// Check if `t2` is strictly better than `t1`
    #[inline]
    pub fn is_better(&self, t1: &Turn, t2: &Turn) -> bool {
        self.compare(t2, t1) == Ordering::Greater
    }

    /// Index of the best turn; the first one wins ties. None if empty.
    pub fn best_index(&self, turns: &[Turn]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, turn) in turns.iter().enumerate() {
            match best {
                Some(b) if !self.is_better(&turns[b], turn) => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
