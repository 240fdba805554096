//! Ordered, cyclic lesson navigation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gestures::Gesture;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    /// Compared verbatim against the classifier's gesture name.
    pub gesture: String,
    pub meaning: String,
    pub hint: String,
}

impl Lesson {
    pub fn target(&self) -> Option<Gesture> {
        Gesture::from_name(&self.gesture)
    }
}

/// The catalog is fixed at construction; only the current index moves.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lessons: Vec<Lesson>,
    current: usize,
}

impl LessonSession {
    pub fn new(lessons: Vec<Lesson>) -> Result<Self> {
        if lessons.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self {
            lessons,
            current: 0,
        })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_lesson(&self) -> &Lesson {
        &self.lessons[self.current]
    }

    pub fn next(&mut self) -> &Lesson {
        self.current = (self.current + 1) % self.lessons.len();
        self.current_lesson()
    }

    pub fn previous(&mut self) -> &Lesson {
        let len = self.lessons.len();
        self.current = (self.current + len - 1) % len;
        self.current_lesson()
    }

    pub fn select_lesson(&mut self, index: usize) -> Result<&Lesson> {
        if index >= self.lessons.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.lessons.len(),
            });
        }
        self.current = index;
        Ok(self.current_lesson())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }
}
