use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::speaker::SpeakerId;

/// Shortest interval a segment may occupy at rest, in seconds.
pub const MIN_SEGMENT_DURATION: f64 = 0.5;

/// Length given to segments created at an anchor point.
pub const DEFAULT_SEGMENT_DURATION: f64 = 3.0;

/// Opaque, stable segment identity. Fresh ids are minted locally; ids
/// assigned by an external importer round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(String);

impl SegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SegmentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A speaker-attributed stretch of transcript text. `start`/`end` are
/// seconds; the textual `MM:SS` form exists only at the import/export
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub speaker_id: SpeakerId,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }
}

/// Partial update for [`ProjectState::update_segment`]; `None` fields keep
/// their current value. Time edits are not re-validated here — callers
/// adjusting bounds (the drag layer) reject invalid candidates up front.
///
/// [`ProjectState::update_segment`]: crate::project::ProjectState::update_segment
#[derive(Debug, Clone, Default)]
pub struct SegmentEdit {
    pub speaker_id: Option<SpeakerId>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub text: Option<String>,
}

impl SegmentEdit {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn times(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn speaker(speaker_id: SpeakerId) -> Self {
        Self {
            speaker_id: Some(speaker_id),
            ..Self::default()
        }
    }
}
