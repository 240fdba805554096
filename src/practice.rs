//! Scoring classified frames against the current lesson.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::geometry::{Hand, Landmark};
use crate::gestures::{Detection, Gesture, classify_hand};
use crate::lessons::{Lesson, LessonSession};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub correct: u64,
    pub attempts: u64,
}

impl SessionStats {
    /// Percentage of correct attempts, rounded half away from zero; 0 before any attempt.
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (100.0 * self.correct as f64 / self.attempts as f64).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    WrongGesture { detected: Gesture, target: String },
    Unrecognized,
    NoHand,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct! Great job!"),
            Self::WrongGesture { detected, target } => {
                write!(f, "That's the \"{detected}\" gesture. Try for \"{target}\"")
            }
            Self::Unrecognized => f.write_str("Gesture not recognized. Try again!"),
            Self::NoHand => f.write_str("Position your hand in the camera view"),
        }
    }
}

/// Sole owner of the session counters.
#[derive(Debug, Clone, Default)]
pub struct PracticeEvaluator {
    stats: SessionStats,
}

impl PracticeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Scores one frame in which a hand was seen.
    pub fn evaluate(&mut self, detected: Option<Gesture>, target: &str) -> Feedback {
        self.stats.attempts += 1;
        match detected {
            Some(g) if g.name() == target => {
                self.stats.correct += 1;
                Feedback::Correct
            }
            Some(g) => Feedback::WrongGesture {
                detected: g,
                target: target.to_string(),
            },
            None => Feedback::Unrecognized,
        }
    }

    /// Frames without a hand leave the counters alone.
    pub fn no_hand(&self) -> Feedback {
        Feedback::NoHand
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameResult {
    pub detected: Detection,
    pub feedback: Feedback,
    pub stats: SessionStats,
}

/// Lesson navigation plus scoring, driven one frame at a time in arrival order.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    lessons: LessonSession,
    evaluator: PracticeEvaluator,
}

impl PracticeSession {
    pub fn new(lessons: LessonSession) -> Self {
        Self {
            lessons,
            evaluator: PracticeEvaluator::new(),
        }
    }

    pub fn lessons(&self) -> &LessonSession {
        &self.lessons
    }

    pub fn current_lesson(&self) -> &Lesson {
        self.lessons.current_lesson()
    }

    pub fn next(&mut self) -> &Lesson {
        self.lessons.next()
    }

    pub fn previous(&mut self) -> &Lesson {
        self.lessons.previous()
    }

    pub fn select_lesson(&mut self, index: usize) -> Result<&Lesson> {
        self.lessons.select_lesson(index)
    }

    pub fn stats(&self) -> SessionStats {
        self.evaluator.stats()
    }

    /// Classifies one frame's hand (if any) and scores it against the current lesson.
    ///
    /// A malformed landmark set is rejected before anything is counted, so the
    /// caller can skip the frame and carry on.
    pub fn on_frame(&mut self, hand: Option<&[Landmark]>) -> Result<FrameResult> {
        let Some(points) = hand else {
            return Ok(FrameResult {
                detected: Detection::NoHand,
                feedback: self.evaluator.no_hand(),
                stats: self.evaluator.stats(),
            });
        };

        let hand = Hand::from_slice(points)?;
        let gesture = classify_hand(&hand);
        let target = &self.lessons.current_lesson().gesture;
        let feedback = self.evaluator.evaluate(gesture, target);
        debug!(
            "frame: detected={} target={} feedback={:?}",
            Detection::from(gesture),
            target,
            feedback
        );

        Ok(FrameResult {
            detected: Detection::from(gesture),
            feedback,
            stats: self.evaluator.stats(),
        })
    }
}
