use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;
use scribe_state::timecode::format_timecode;

use crate::speaker_name;

/// RFC4180-style quoting: the field is wrapped in quotes and embedded
/// quotes are doubled.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// CSV document: header plus one `start,end,"Name","text"` row per
/// segment. Times are unquoted display timecodes.
pub fn to_csv(segments: &[Segment], speakers: &[Speaker]) -> String {
    let mut out = String::from("start,end,speaker,text\n");
    for segment in segments {
        out.push_str(&format!(
            "{},{},{},{}\n",
            format_timecode(segment.start),
            format_timecode(segment.end),
            quote(speaker_name(speakers, &segment.speaker_id)),
            quote(&segment.text)
        ));
    }
    out
}
