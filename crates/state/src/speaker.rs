use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::segment::Segment;

/// Colors handed to auto-created speakers, cycled by roster index.
pub const SPEAKER_PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];

pub fn palette_color(index: usize) -> &'static str {
    SPEAKER_PALETTE[index % SPEAKER_PALETTE.len()]
}

/// Opaque, stable speaker identity. Transcription results arrive with
/// their own ids (`speaker_1`, ...) which are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerId(String);

impl SpeakerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SpeakerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SpeakerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, colored identity owning zero or more segments. Roster order
/// is display/track order only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: SpeakerId,
    pub name: String,
    /// 6-hex-digit RGB, `#`-prefixed.
    pub color: String,
}

impl Speaker {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: SpeakerId::new(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial update for [`ProjectState::update_speaker`]. An empty `name`
/// is ignored rather than persisted.
///
/// [`ProjectState::update_speaker`]: crate::project::ProjectState::update_speaker
#[derive(Debug, Clone, Default)]
pub struct SpeakerEdit {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Derives a roster from a bulk segment batch: distinct speaker ids in
/// first-seen order, sequential display names, palette colors by index.
pub fn speakers_from_segments(segments: &[Segment]) -> Vec<Speaker> {
    let mut roster: Vec<Speaker> = Vec::new();
    for segment in segments {
        if roster.iter().any(|s| s.id == segment.speaker_id) {
            continue;
        }
        let index = roster.len();
        roster.push(Speaker {
            id: segment.speaker_id.clone(),
            name: format!("Speaker {}", index + 1),
            color: palette_color(index).to_owned(),
        });
    }
    roster
}
