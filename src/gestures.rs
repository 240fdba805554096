//! Static hand-pose classification.
//!
//! A pose is matched against [`RULES`] in order and the first rule whose
//! predicate holds wins. Several predicates overlap, so the table order is
//! the tie-break policy:
//!
//! - Thumbs Down and Fist both need every finger curled; Thumbs Down is
//!   checked first and takes every pose with the thumb tip below the wrist,
//!   leaving Fist only the thumb-level case.
//! - Pinky Promise and Call Me share a predicate; Call Me never wins.
//! - Rock On ignores the thumb, so it also takes every I Love You pose.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::fingers::FingerStates;
use crate::geometry::{Hand, Landmark, distance};

pub const NO_GESTURE: &str = "No Gesture Detected";
pub const NO_HAND: &str = "No Hand Detected";

/// Thumb and index tips closer than this form the OK circle.
pub const OK_SIGN_MAX_GAP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    ThumbsUp,
    ThumbsDown,
    PeaceSign,
    Fist,
    Pointing,
    OpenHand,
    PinkyPromise,
    OkSign,
    RockOn,
    CallMe,
    ILoveYou,
}

impl Gesture {
    pub const ALL: [Gesture; 11] = [
        Gesture::ThumbsUp,
        Gesture::ThumbsDown,
        Gesture::PeaceSign,
        Gesture::Fist,
        Gesture::Pointing,
        Gesture::OpenHand,
        Gesture::PinkyPromise,
        Gesture::OkSign,
        Gesture::RockOn,
        Gesture::CallMe,
        Gesture::ILoveYou,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ThumbsUp => "Thumbs Up",
            Self::ThumbsDown => "Thumbs Down",
            Self::PeaceSign => "Peace Sign",
            Self::Fist => "Fist",
            Self::Pointing => "Pointing",
            Self::OpenHand => "Open Hand",
            Self::PinkyPromise => "Pinky Promise",
            Self::OkSign => "OK Sign",
            Self::RockOn => "Rock On",
            Self::CallMe => "Call Me",
            Self::ILoveYou => "I Love You",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::ThumbsDown => "👎",
            Self::PeaceSign => "✌️",
            Self::Fist => "✊",
            Self::Pointing => "👆",
            Self::OpenHand => "🖐️",
            Self::PinkyPromise | Self::CallMe => "🤙",
            Self::OkSign => "👌",
            Self::RockOn => "🤘",
            Self::ILoveYou => "🤟",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Gesture {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

/// What one frame showed: no hand, a hand matching no rule, or a named gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    NoHand,
    NoGesture,
    Gesture(Gesture),
}

impl Detection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoHand => NO_HAND,
            Self::NoGesture => NO_GESTURE,
            Self::Gesture(g) => g.name(),
        }
    }
}

impl From<Option<Gesture>> for Detection {
    fn from(g: Option<Gesture>) -> Self {
        g.map_or(Self::NoGesture, Self::Gesture)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Detection {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

/// Everything the rule table looks at for one hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseFeatures {
    pub fingers: FingerStates,
    pub thumb_below_wrist: bool,
    pub thumb_index_gap: f32,
}

impl PoseFeatures {
    pub fn new(
        fingers: FingerStates,
        wrist: Landmark,
        thumb_tip: Landmark,
        index_tip: Landmark,
    ) -> Self {
        Self {
            fingers,
            thumb_below_wrist: thumb_tip.y > wrist.y,
            thumb_index_gap: distance(thumb_tip, index_tip),
        }
    }

    pub fn from_hand(hand: &Hand) -> Self {
        Self::new(
            FingerStates::from_hand(hand),
            hand.wrist(),
            hand.thumb_tip(),
            hand.index_tip(),
        )
    }
}

pub struct GestureRule {
    pub gesture: Gesture,
    pub matches: fn(&PoseFeatures) -> bool,
}

pub static RULES: [GestureRule; 11] = [
    GestureRule {
        gesture: Gesture::ThumbsUp,
        matches: |p| {
            let f = p.fingers;
            f.thumb && !f.index && !f.middle && !f.ring && !f.pinky
        },
    },
    GestureRule {
        gesture: Gesture::ThumbsDown,
        matches: |p| p.fingers.none_extended() && p.thumb_below_wrist,
    },
    GestureRule {
        gesture: Gesture::PeaceSign,
        matches: |p| {
            let f = p.fingers;
            f.index && f.middle && !f.ring && !f.pinky
        },
    },
    GestureRule {
        gesture: Gesture::Fist,
        matches: |p| p.fingers.none_extended(),
    },
    GestureRule {
        gesture: Gesture::Pointing,
        matches: |p| {
            let f = p.fingers;
            f.index && !f.middle && !f.ring && !f.pinky
        },
    },
    GestureRule {
        gesture: Gesture::OpenHand,
        matches: |p| p.fingers.all_extended(),
    },
    GestureRule {
        gesture: Gesture::PinkyPromise,
        matches: |p| {
            let f = p.fingers;
            f.thumb && !f.index && !f.middle && !f.ring && f.pinky
        },
    },
    GestureRule {
        // the OK circle folds thumb and index, so only their proximity is checked
        gesture: Gesture::OkSign,
        matches: |p| {
            let f = p.fingers;
            p.thumb_index_gap < OK_SIGN_MAX_GAP && f.middle && f.ring && f.pinky
        },
    },
    GestureRule {
        gesture: Gesture::RockOn,
        matches: |p| {
            let f = p.fingers;
            f.index && !f.middle && !f.ring && f.pinky
        },
    },
    GestureRule {
        // same predicate as Pinky Promise
        gesture: Gesture::CallMe,
        matches: |p| {
            let f = p.fingers;
            f.thumb && !f.index && !f.middle && !f.ring && f.pinky
        },
    },
    GestureRule {
        gesture: Gesture::ILoveYou,
        matches: |p| {
            let f = p.fingers;
            f.thumb && f.index && !f.middle && !f.ring && f.pinky
        },
    },
];

pub fn classify(pose: &PoseFeatures) -> Option<Gesture> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(pose))
        .map(|rule| rule.gesture)
}

pub fn classify_hand(hand: &Hand) -> Option<Gesture> {
    classify(&PoseFeatures::from_hand(hand))
}

/// Gestures that win for at least one physically consistent pose, in rule order.
///
/// Walks every combination of the four long fingers, the three thumb
/// positions (above, level with, below the wrist) and thumb-index
/// proximity (touching or apart).
pub fn reachable_gestures() -> Vec<Gesture> {
    let mut hits = [false; 11];
    for bits in 0u8..16 {
        for (thumb, thumb_below_wrist) in [(true, false), (false, false), (false, true)] {
            for gap in [0.0, 1.0] {
                let long = FingerStates::from_bits(bits << 1);
                let pose = PoseFeatures {
                    fingers: FingerStates { thumb, ..long },
                    thumb_below_wrist,
                    thumb_index_gap: gap,
                };
                if let Some(g) = classify(&pose) {
                    hits[g as usize] = true;
                }
            }
        }
    }
    Gesture::ALL
        .into_iter()
        .filter(|g| hits[*g as usize])
        .collect()
}
