use serde::Serialize;

use scribe_state::persist::ProjectMeta;
use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;

#[derive(Serialize)]
struct TranscriptDocument<'a> {
    meta: &'a ProjectMeta,
    speakers: &'a [Speaker],
    segments: &'a [Segment],
}

/// Pretty-printed JSON of the full snapshot, times in canonical seconds.
pub fn to_json(
    segments: &[Segment],
    speakers: &[Speaker],
    meta: &ProjectMeta,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TranscriptDocument {
        meta,
        speakers,
        segments,
    })
}
