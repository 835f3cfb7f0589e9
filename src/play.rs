//! Plays available on a single pile

use super::hand_mask::HandMask;
use super::ten_groups::TenGroups;
use super::types::*;

/// Play of one or more cards out of a hand onto a pile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Play {
    /// Hand positions of the cards played
    pub hand_mask: HandMask,
    pub piles_index: usize,
    /// Pile top before the play
    pub pile_card_start: Card,
    /// Pile top after the play
    pub pile_card_end: Card,
    /// Cost of the play measured as if the pile were ascending. Negative for
    /// a play that backs a pile up by a ten.
    pub delta: i32,
}

impl Play {
    pub fn new(
        hand_mask: HandMask,
        piles_index: usize,
        pile_card_start: Card,
        pile_card_end: Card,
    ) -> Self {
        Play {
            hand_mask,
            piles_index,
            pile_card_start,
            pile_card_end,
            delta: i32::from(pile_card_end) - i32::from(pile_card_start),
        }
    }

    /// Number of cards played
    #[inline]
    pub fn num_cards(&self) -> usize {
        self.hand_mask.size()
    }

    /// A ten group that had to jump up to get played
    #[inline]
    pub fn is_group_reach(&self) -> bool {
        self.delta > 0 && self.num_cards() > 1
    }

    /// Mirror the play back from a flipped hand. The piles index and delta
    /// stay as they are.
    pub fn flip(&self, hand_size: usize) -> Play {
        Play {
            hand_mask: self.hand_mask.flip(hand_size),
            piles_index: self.piles_index,
            pile_card_start: flip_card(self.pile_card_start),
            pile_card_end: flip_card(self.pile_card_end),
            delta: self.delta,
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{hand_mask: {}, piles_index: {}, pile_card_start: {}, pile_card_end: {}, delta: {}}}",
            self.hand_mask, self.piles_index, self.pile_card_start, self.pile_card_end, self.delta
        )
    }
}

/// Plays for one pile, in the order they must be made
pub type Plays = Vec<Play>;

/// Flip every play in place
pub fn flip_plays(plays: &mut Plays, hand_size: usize) {
    for play in plays.iter_mut() {
        *play = play.flip(hand_size);
    }
}

/// Format plays as `{play,play}`
pub fn plays_to_string(plays: &[Play]) -> String {
    let plays: Vec<String> = plays.iter().map(|p| p.to_string()).collect();
    format!("{{{}}}", plays.join(","))
}

/// Find plays for an ascending pile. For descending piles use
/// [`get_plays_descending`].
///
/// * `pile_card` - Top card of the pile
/// * `max_card` - Cards >= max_card are left for the other ascending pile
/// * `hand` - Sorted hand
/// * `ten_groups` - Ten groups of `hand`
/// * `min_cards_for_turn` - Cards that must be played this turn
/// * `card_reach_distance` - How far to reach to play a card past the minimum
pub fn get_plays_ascending(
    pile_card: Card,
    max_card: Card,
    piles_index: usize,
    hand: &[Card],
    ten_groups: &TenGroups,
    min_cards_for_turn: usize,
    card_reach_distance: i32,
) -> Plays {
    let mut plays = Plays::new();
    let mut used = HandMask::new();
    let mut last_card = pile_card;

    // A card exactly 10 below the pile is always playable, along with any
    // ten group it tops.
    let mut i = match hand.iter().position(|&c| c == pile_card - 10) {
        Some(index) => {
            let (lo, hand_mask) = match ten_groups.find_by_hi(index) {
                Some(group) => (group.lo, group.hand_mask),
                None => (index, HandMask::from_index(index)),
            };
            plays.push(Play::new(hand_mask, piles_index, last_card, hand[lo]));
            used.add_mask(hand_mask);
            last_card = hand[lo];
            lo + 1
        }
        None => hand
            .iter()
            .position(|&c| c > pile_card)
            .unwrap_or(hand.len()),
    };

    while i < hand.len() {
        if used.have(i) {
            i += 1;
            continue;
        }
        let card = hand[i];
        if card >= max_card {
            break;
        }

        let group = ten_groups.find_unused_spanning(i, used);
        if used.size() >= min_cards_for_turn {
            // Past the minimum only take small steps, and never jump into
            // a fresh group from its bottom card.
            if i32::from(card - last_card) > card_reach_distance {
                break;
            }
            if group.is_some_and(|g| g.lo == i) {
                break;
            }
        }

        let (end, hand_mask) = match group {
            Some(group) => {
                if hand[group.hi] >= max_card {
                    break;
                }
                // Climb through the loose cards up to the group's top, then
                // walk the group back down to its bottom card.
                let mut hand_mask = group.hand_mask;
                for j in i..group.hi {
                    if !used.have(j) && !ten_groups.groups_hand_mask.have(j) {
                        hand_mask.add(j);
                    }
                }
                (group.lo, hand_mask)
            }
            None => (i, HandMask::from_index(i)),
        };
        plays.push(Play::new(hand_mask, piles_index, last_card, hand[end]));
        used.add_mask(hand_mask);
        last_card = hand[end];
        i = end + 1;
    }
    plays
}

/// Find plays for a descending pile by mirroring it onto an ascending one.
///
/// `flipped_hand` and `flipped_ten_groups` are the flipped hand and its ten
/// groups; the returned plays refer to the original, unflipped hand.
pub fn get_plays_descending(
    pile_card: Card,
    min_card: Card,
    piles_index: usize,
    flipped_hand: &[Card],
    flipped_ten_groups: &TenGroups,
    min_cards_for_turn: usize,
    card_reach_distance: i32,
) -> Plays {
    let mut plays = get_plays_ascending(
        flip_card(pile_card),
        flip_card(min_card),
        piles_index,
        flipped_hand,
        flipped_ten_groups,
        min_cards_for_turn,
        card_reach_distance,
    );
    flip_plays(&mut plays, flipped_hand.len());
    plays
}
