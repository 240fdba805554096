//! Synthetic hands for unit tests.

use crate::geometry::{Hand, LANDMARK_COUNT, Landmark, THUMB_TIP, WRIST};

const WRIST_Y: f32 = 0.8;
const BASE_Y: f32 = 0.6;
const MID_Y: f32 = 0.5;
const EXTENDED_TIP_Y: f32 = 0.35;
const CURLED_TIP_Y: f32 = 0.62;

#[derive(Debug, Clone, Copy)]
pub enum Thumb {
    /// Tip above the wrist.
    Up,
    /// Tip below the wrist.
    Down,
    /// Tip level with the wrist.
    Level,
}

/// Builds a hand whose fingers (index, middle, ring, pinky) are extended per `fingers`.
pub fn pose(thumb: Thumb, fingers: [bool; 4]) -> Hand {
    let mut pts = [Landmark::default(); LANDMARK_COUNT];
    pts[WRIST] = Landmark::new(0.5, WRIST_Y, 0.0);
    pts[THUMB_TIP] = Landmark::new(
        0.25,
        match thumb {
            Thumb::Up => 0.5,
            Thumb::Down => 0.9,
            Thumb::Level => WRIST_Y,
        },
        0.0,
    );

    for (i, extended) in fingers.iter().enumerate() {
        let base = 5 + i * 4;
        let x = 0.4 + i as f32 * 0.1;
        pts[base] = Landmark::new(x, BASE_Y, 0.0);
        pts[base + 1] = Landmark::new(x, MID_Y, 0.0);
        pts[base + 2] = Landmark::new(x, 0.45, 0.0);
        let tip_y = if *extended { EXTENDED_TIP_Y } else { CURLED_TIP_Y };
        pts[base + 3] = Landmark::new(x, tip_y, 0.0);
    }
    Hand::new(pts)
}

/// Thumb tip pinched against a curled index, remaining three fingers up.
pub fn ok_sign() -> Hand {
    let mut pts = *pose(Thumb::Up, [false, true, true, true]).points();
    let index_tip = pts[8];
    pts[THUMB_TIP] = Landmark::new(index_tip.x + 0.02, index_tip.y, 0.0);
    Hand::new(pts)
}
