use scribe_state::persist::ProjectMeta;
use scribe_state::segment::Segment;
use scribe_state::speaker::Speaker;
use scribe_state::timecode::format_timecode;

use crate::speaker_name;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn speaker_color<'a>(speakers: &'a [Speaker], segment: &Segment) -> &'a str {
    speakers
        .iter()
        .find(|s| s.id == segment.speaker_id)
        .map(|s| s.color.as_str())
        .unwrap_or("#888888")
}

/// Standalone HTML transcript: one entry per segment, speaker names in
/// their roster colors.
pub fn to_html(segments: &[Segment], speakers: &[Speaker], meta: &ProjectMeta) -> String {
    let title = if meta.title.is_empty() {
        "Transcript"
    } else {
        meta.title.as_str()
    };
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str(
        "<style>\nbody { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }\n\
         .entry { margin-bottom: 1rem; }\n\
         .time { color: #666; font-size: 0.85rem; margin-right: 0.5rem; }\n\
         .speaker { font-weight: bold; }\n</style>\n",
    );
    out.push_str(&format!("</head>\n<body>\n<h1>{}</h1>\n", escape(title)));
    for segment in segments {
        out.push_str(&format!(
            "<div class=\"entry\"><span class=\"time\">[{} - {}]</span>\
             <span class=\"speaker\" style=\"color: {}\">{}</span><p>{}</p></div>\n",
            format_timecode(segment.start),
            format_timecode(segment.end),
            speaker_color(speakers, segment),
            escape(speaker_name(speakers, &segment.speaker_id)),
            escape(&segment.text)
        ));
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_state::speaker::SpeakerId;

    #[test]
    fn escapes_markup_in_text_and_names() {
        let segments = vec![Segment {
            id: "1".into(),
            speaker_id: SpeakerId::from("speaker_1"),
            start: 0.0,
            end: 1.0,
            text: "a < b & c".into(),
        }];
        let speakers = vec![Speaker {
            id: SpeakerId::from("speaker_1"),
            name: "<Alice>".into(),
            color: "#3B82F6".into(),
        }];
        let html = to_html(&segments, &speakers, &ProjectMeta::default());
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(html.contains("&lt;Alice&gt;"));
        assert!(html.contains("color: #3B82F6"));
    }

    #[test]
    fn empty_input_is_a_complete_document() {
        let html = to_html(&[], &[], &ProjectMeta::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(!html.contains("class=\"entry\""));
    }
}
