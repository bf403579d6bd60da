use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;

use crate::speaker_name;
use crate::timestamp::srt_timestamp;

/// SubRip document: 1-based numbered cues, comma-millis timestamps,
/// `Name: text` bodies, blank line between cues.
pub fn to_srt(segments: &[Segment], speakers: &[Speaker]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            format!(
                "{}\n{} --> {}\n{}: {}",
                index + 1,
                srt_timestamp(segment.start),
                srt_timestamp(segment.end),
                speaker_name(speakers, &segment.speaker_id),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
