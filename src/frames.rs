//! Recorded tracker output, one JSON object per line.
//!
//! ```text
//! {"hands": [[{"x": 0.5, "y": 0.8, "z": 0.0}, ...21 points]]}
//! {"hands": []}
//! ```

use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::{
    fs,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::geometry::Landmark;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<Vec<Landmark>>,
}

impl Frame {
    /// Only the first tracked hand takes part in a lesson.
    pub fn primary_hand(&self) -> Option<&[Landmark]> {
        self.hands.first().map(Vec::as_slice)
    }
}

/// A parsed frame tagged with its 1-based line number.
pub type NumberedFrame = (usize, Frame);

pub fn read_frames<R: Read>(reader: R) -> Result<Vec<NumberedFrame>> {
    let mut out = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame =
            serde_json::from_str(&line).map_err(|e| anyhow!("line {}: {e}", i + 1))?;
        out.push((i + 1, frame));
    }
    Ok(out)
}

pub fn load_frames(path: &Path) -> Result<Vec<NumberedFrame>> {
    let f = fs::File::open(path).map_err(|e| anyhow!("failed to open {}: {e}", path.display()))?;
    read_frames(f).map_err(|e| anyhow!("{}: {e}", path.display()))
}
