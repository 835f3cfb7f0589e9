//! Ten groups: runs of hand cards spaced exactly 10 apart
//!
//! A ten group can go onto an ascending pile in one motion: play the top
//! card, then walk back down the run 10 at a time. For hand
//! `{5, 10, 20, 30, 40}` the group is positions 1..=4.

use super::hand_mask::{HandMask, HAND_MASK_WIDTH};
use super::types::*;

/// Hand positions of one ten group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TenGroup {
    /// Hand index of the lowest card in the group
    pub lo: usize,
    /// Hand index of the highest card in the group
    pub hi: usize,
    /// Positions of every card in the group. Positions between `lo` and `hi`
    /// that are not in the run are not set.
    pub hand_mask: HandMask,
}

impl TenGroup {
    /// Check if a hand index lies within the group's span
    #[inline]
    pub fn spans(&self, index: usize) -> bool {
        self.lo <= index && index <= self.hi
    }
}

impl std::fmt::Display for TenGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{lo: {}, hi: {}, hand_mask: {}}}",
            self.lo, self.hi, self.hand_mask
        )
    }
}

/// All ten groups in a hand
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TenGroups {
    pub groups: Vec<TenGroup>,
    /// Union of every group's mask
    pub groups_hand_mask: HandMask,
}

impl TenGroups {
    /// Iterate over the groups in hand order
    pub fn iter(&self) -> std::slice::Iter<'_, TenGroup> {
        self.groups.iter()
    }

    /// First group spanning `index` that shares no card with `used`
    pub fn find_unused_spanning(&self, index: usize, used: HandMask) -> Option<&TenGroup> {
        self.groups
            .iter()
            .find(|g| g.spans(index) && !g.hand_mask.overlaps(used))
    }

    /// Group whose highest card is at `index`
    pub fn find_by_hi(&self, index: usize) -> Option<&TenGroup> {
        self.groups.iter().find(|g| g.hi == index)
    }

    fn push(&mut self, group: TenGroup) {
        self.groups_hand_mask.add_mask(group.hand_mask);
        self.groups.push(group);
    }
}

impl std::ops::Index<usize> for TenGroups {
    type Output = TenGroup;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.groups[index]
    }
}

impl<'a> IntoIterator for &'a TenGroups {
    type Item = &'a TenGroup;
    type IntoIter = std::slice::Iter<'a, TenGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for TenGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups: Vec<String> = self.groups.iter().map(|g| g.to_string()).collect();
        write!(
            f,
            "{{groups: {{{}}}, hand_mask: {}}}",
            groups.join(","),
            self.groups_hand_mask
        )
    }
}

/// Get the ten groups of a sorted hand.
///
/// Each position joins at most one group. Scanning forward from an ungrouped
/// card stops at the first card past the next wanted value, so gaps of other
/// cards inside a run are allowed.
pub fn get_ten_groups(hand: &[Card]) -> TenGroups {
    assert!(
        hand.len() <= HAND_MASK_WIDTH,
        "hand of {} cards does not fit in a hand mask",
        hand.len()
    );
    let mut ten_groups = TenGroups::default();
    for i in 0..hand.len() {
        if ten_groups.groups_hand_mask.have(i) {
            continue;
        }
        let card_mask = HandMask::from_index(i);
        let mut group = TenGroup {
            lo: i,
            hi: i,
            hand_mask: card_mask,
        };
        let mut num_to_find = hand[i] + 10;
        for (j, &card) in hand.iter().enumerate().skip(i + 1) {
            if card > num_to_find {
                break;
            }
            if card == num_to_find {
                num_to_find += 10;
                group.hand_mask.add(j);
                group.hi = j;
            }
        }
        if group.hand_mask != card_mask {
            ten_groups.push(group);
        }
    }
    ten_groups
}
