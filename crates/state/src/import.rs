use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::segment::{Segment, SegmentId};
use crate::speaker::SpeakerId;
use crate::timecode::parse_timecode;

/// One entry of a bulk transcription result. Times arrive in the textual
/// `MM:SS` form; segment ids are assigned here at the import boundary,
/// not by the producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRecord {
    pub speaker_id: String,
    pub start_time: String,
    pub end_time: String,
    pub text: String,
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("transcript is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("transcript contains no records")]
    Empty,
}

/// Parses a JSON array of [`TranscriptRecord`]s.
pub fn parse_transcript_json(json: &str) -> Result<Vec<TranscriptRecord>, ImportError> {
    let records: Vec<TranscriptRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(records)
}

/// Converts records to segments, minting a fresh id per record. Malformed
/// timecodes fall back to `0.0` per the codec contract.
pub fn segments_from_records(records: &[TranscriptRecord]) -> Vec<Segment> {
    records
        .iter()
        .map(|record| Segment {
            id: SegmentId::new(),
            speaker_id: SpeakerId::from(record.speaker_id.as_str()),
            start: parse_timecode(&record.start_time),
            end: parse_timecode(&record.end_time),
            text: record.text.clone(),
        })
        .collect()
}

/// Built-in fixture in the same shape a transcription backend produces.
pub fn sample_records() -> Vec<TranscriptRecord> {
    let raw = [
        ("speaker_1", "00:00", "00:04", "Okay, I think we're live. Can everyone hear me?"),
        ("speaker_2", "00:04", "00:07", "Loud and clear. Let's get started."),
        ("speaker_1", "00:07", "00:13", "Great. First item is the release timeline for the spring update."),
        ("speaker_3", "00:13", "00:19", "Engineering is on track. We froze the feature list last Friday."),
        ("speaker_2", "00:19", "00:24", "Marketing needs final screenshots by the end of next week."),
        ("speaker_1", "00:24", "00:30", "Noted. I'll make sure design delivers them before Thursday."),
    ];
    raw.iter()
        .map(|(speaker_id, start, end, text)| TranscriptRecord {
            speaker_id: (*speaker_id).to_owned(),
            start_time: (*start).to_owned(),
            end_time: (*end).to_owned(),
            text: (*text).to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_become_segments_with_fresh_ids() {
        let records = sample_records();
        let segments = segments_from_records(&records);
        assert_eq!(segments.len(), records.len());
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 4.0);
        assert_eq!(segments[2].start, 7.0);
        assert_ne!(segments[0].id, segments[1].id);
        assert_eq!(segments[1].speaker_id, SpeakerId::from("speaker_2"));
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::to_string(&sample_records()).unwrap();
        let records = parse_transcript_json(&json).unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].speaker_id, "speaker_1");
        // The wire form keeps camelCase keys.
        assert!(json.contains("\"speakerId\""));
        assert!(json.contains("\"startTime\""));
    }

    #[test]
    fn empty_and_malformed_json_are_errors() {
        assert!(matches!(
            parse_transcript_json("[]"),
            Err(ImportError::Empty)
        ));
        assert!(matches!(
            parse_transcript_json("not json"),
            Err(ImportError::Json(_))
        ));
    }
}
