//! Hand-sign practice core: classify a tracked hand into a named gesture and
//! score it against a lesson target.

pub mod config;
pub mod error;
pub mod fingers;
pub mod frames;
pub mod geometry;
pub mod gestures;
pub mod lessons;
pub mod practice;

#[cfg(test)]
mod fixtures;

pub use error::{Error, Result};
pub use fingers::FingerStates;
pub use geometry::{Hand, Landmark};
pub use gestures::{Detection, Gesture, classify, classify_hand};
pub use lessons::{Lesson, LessonSession};
pub use practice::{Feedback, FrameResult, PracticeEvaluator, PracticeSession, SessionStats};
