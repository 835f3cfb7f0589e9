//! Hand mask representation
//!
//! Uses a 16-bit integer where each bit represents a position in a sorted
//! hand (not a card value). Bit 0 = lowest card in the hand. Game hands hold
//! at most 8 cards, the extra width lets longer card runs be analysed.

/// Number of hand positions a mask can hold
pub const HAND_MASK_WIDTH: usize = 16;

/// Number of set bits for every byte value
const NUM_CARDS_TABLE: [u8; 256] = build_num_cards_table();

const fn build_num_cards_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = (i & 1) as u8 + table[i >> 1];
        i += 1;
    }
    table
}

/// Get the number of cards in a raw mask value via the lookup table
#[inline]
pub fn get_num_cards_in(bits: u16) -> usize {
    let [lo, hi] = bits.to_le_bytes();
    (NUM_CARDS_TABLE[lo as usize] + NUM_CARDS_TABLE[hi as usize]) as usize
}

/// Hand positions used by a play or a turn
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct HandMask {
    bits: u16,
}

impl HandMask {
    /// Create empty mask
    #[inline]
    pub const fn new() -> Self {
        HandMask { bits: 0 }
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        HandMask { bits }
    }

    /// Create a mask with a single hand position set
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < HAND_MASK_WIDTH,
            "hand index {index} does not fit in a hand mask"
        );
        HandMask { bits: 1 << index }
    }

    /// Get raw bits value
    #[inline]
    pub fn value(&self) -> u16 {
        self.bits
    }

    /// Count number of cards
    #[inline]
    pub fn size(&self) -> usize {
        get_num_cards_in(self.bits)
    }

    /// Check if a hand position is set
    #[inline]
    pub fn have(&self, index: usize) -> bool {
        index < HAND_MASK_WIDTH && self.bits & (1 << index) != 0
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if any position is shared with another mask
    #[inline]
    pub fn overlaps(&self, other: HandMask) -> bool {
        self.bits & other.bits != 0
    }

    /// Add a single hand position
    #[inline]
    pub fn add(&mut self, index: usize) -> &mut Self {
        self.bits |= HandMask::from_index(index).bits;
        self
    }

    /// Add all positions from another mask
    #[inline]
    pub fn add_mask(&mut self, other: HandMask) -> &mut Self {
        self.bits |= other.bits;
        self
    }

    /// Mirror the low `hand_size` positions (index i becomes hand_size - 1 - i).
    /// Bits at or above `hand_size` are dropped.
    pub fn flip(&self, hand_size: usize) -> HandMask {
        assert!(hand_size <= HAND_MASK_WIDTH, "hand size {hand_size} too big");
        let mut flipped = 0u16;
        let mut bits = self.bits;
        for i in (0..hand_size).rev() {
            flipped |= (bits & 1) << i;
            bits >>= 1;
        }
        HandMask::from_bits(flipped)
    }

    /// Iterate over set positions (lowest first)
    pub fn iter(&self) -> HandMaskIterator {
        HandMaskIterator { bits: self.bits }
    }
}

impl std::fmt::Debug for HandMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandMask({:#06x})", self.bits)
    }
}

impl std::fmt::Display for HandMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.bits)
    }
}

/// Iterator over positions in a HandMask
pub struct HandMaskIterator {
    bits: u16,
}

impl Iterator for HandMaskIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let index = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1; // Clear lowest set bit
            Some(index)
        }
    }
}

impl IntoIterator for HandMask {
    type Item = usize;
    type IntoIter = HandMaskIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
