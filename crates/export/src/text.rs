use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;
use scribe_state::timecode::format_timecode;

use crate::speaker_name;

/// Plain-text blocks: `[start - end] SpeakerName` over the segment text,
/// times in the editor's `MM:SS` display form.
pub fn to_text(segments: &[Segment], speakers: &[Speaker]) -> String {
    segments
        .iter()
        .map(|segment| {
            format!(
                "[{} - {}] {}\n{}",
                format_timecode(segment.start),
                format_timecode(segment.end),
                speaker_name(speakers, &segment.speaker_id),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
