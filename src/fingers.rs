//! Per-finger extended/curled state for one hand.

use serde::Serialize;

use crate::geometry::{
    Hand, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP,
    PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, is_finger_extended,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// The thumb sticks out sideways, so the tip/base ratio can't be used for it;
    /// it counts as extended when its tip sits above the wrist.
    pub fn from_hand(hand: &Hand) -> Self {
        let pts = hand.points();
        Self {
            thumb: hand.thumb_tip().y < hand.wrist().y,
            index: is_finger_extended(INDEX_TIP, INDEX_PIP, INDEX_MCP, pts),
            middle: is_finger_extended(MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP, pts),
            ring: is_finger_extended(RING_TIP, RING_PIP, RING_MCP, pts),
            pinky: is_finger_extended(PINKY_TIP, PINKY_PIP, PINKY_MCP, pts),
        }
    }

    /// Decodes a 5-bit mask, thumb in bit 0 through pinky in bit 4.
    pub const fn from_bits(bits: u8) -> Self {
        Self::new(
            bits & 0b00001 != 0,
            bits & 0b00010 != 0,
            bits & 0b00100 != 0,
            bits & 0b01000 != 0,
            bits & 0b10000 != 0,
        )
    }

    pub fn none_extended(&self) -> bool {
        !(self.thumb || self.index || self.middle || self.ring || self.pinky)
    }

    pub fn all_extended(&self) -> bool {
        self.thumb && self.index && self.middle && self.ring && self.pinky
    }
}
