use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid landmark set: expected {expected} points, got {actual}")]
    InvalidLandmarkSet { expected: usize, actual: usize },

    #[error("lesson index {index} out of range (catalog has {len} lessons)")]
    OutOfRange { index: usize, len: usize },

    #[error("lesson catalog is empty")]
    EmptyCatalog,

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),
}

pub type Result<T> = std::result::Result<T, Error>;
