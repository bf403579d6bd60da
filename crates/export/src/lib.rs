//! Pure, deterministic formatters over a finalized `(segments, speakers,
//! meta)` snapshot. Formatters never mutate and never depend on anything
//! but their inputs; an empty segment list yields a valid empty document
//! in every format.

pub mod csv;
pub mod html;
pub mod json;
pub mod srt;
pub mod text;
pub mod timestamp;
pub mod vtt;

pub use csv::to_csv;
pub use html::to_html;
pub use json::to_json;
pub use srt::to_srt;
pub use text::to_text;
pub use vtt::to_vtt;

use scribe_state::speaker::{Speaker, SpeakerId};

/// Display name for a segment's speaker; dangling references render as
/// `Unknown` rather than failing the export.
pub(crate) fn speaker_name<'a>(speakers: &'a [Speaker], id: &SpeakerId) -> &'a str {
    speakers
        .iter()
        .find(|s| &s.id == id)
        .map(|s| s.name.as_str())
        .unwrap_or("Unknown")
}
