use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;

use crate::speaker_name;
use crate::timestamp::vtt_timestamp;

/// WebVTT document: `WEBVTT` header, dot-millis timestamps, `Name: text`
/// cue bodies. An empty segment list still yields the bare header.
pub fn to_vtt(segments: &[Segment], speakers: &[Speaker]) -> String {
    let mut out = String::from("WEBVTT\n\n");
    let cues = segments
        .iter()
        .map(|segment| {
            format!(
                "{} --> {}\n{}: {}",
                vtt_timestamp(segment.start),
                vtt_timestamp(segment.end),
                speaker_name(speakers, &segment.speaker_id),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push_str(&cues);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_state::speaker::SpeakerId;

    #[test]
    fn header_and_dot_separated_millis() {
        let segments = vec![Segment {
            id: "1".into(),
            speaker_id: SpeakerId::from("speaker_1"),
            start: 0.0,
            end: 4.0,
            text: "Hi".into(),
        }];
        let speakers = vec![Speaker {
            id: SpeakerId::from("speaker_1"),
            name: "Alice".into(),
            color: "#3B82F6".into(),
        }];
        assert_eq!(
            to_vtt(&segments, &speakers),
            "WEBVTT\n\n00:00:00.000 --> 00:00:04.000\nAlice: Hi"
        );
    }

    #[test]
    fn empty_input_yields_bare_header() {
        assert_eq!(to_vtt(&[], &[]), "WEBVTT\n\n");
    }
}
