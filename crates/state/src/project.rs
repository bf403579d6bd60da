use tracing::{debug, warn};

use crate::playback::Playback;
use crate::segment::{
    Segment, SegmentEdit, SegmentId, DEFAULT_SEGMENT_DURATION, MIN_SEGMENT_DURATION,
};
use crate::selection::Selection;
use crate::speaker::{speakers_from_segments, Speaker, SpeakerEdit, SpeakerId};
use crate::undo::{EditorSnapshot, UndoManager};

/// Owner assigned to segments created while the roster is empty.
pub const FALLBACK_SPEAKER_ID: &str = "speaker_1";

/// Pre-gesture state held by the drag layer between pointer-down and
/// pointer-up. Committing it produces the gesture's single history entry.
#[derive(Debug, Clone)]
pub struct GestureSnapshot(EditorSnapshot);

/// The authoritative editor model: segment sequence (ascending start
/// order), speaker roster, selection, transport value, and history.
/// All mutation goes through the methods here; each discrete operation
/// snapshots state for undo before applying.
#[derive(Debug, Default)]
pub struct ProjectState {
    pub segments: Vec<Segment>,
    pub speakers: Vec<Speaker>,
    pub selection: Selection,
    pub playback: Playback,
    undo: UndoManager,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            segments: self.segments.clone(),
            speakers: self.speakers.clone(),
        }
    }

    fn save_undo(&mut self) {
        let snapshot = self.snapshot();
        self.undo.save(snapshot);
    }

    fn apply_snapshot(&mut self, snapshot: EditorSnapshot) {
        self.segments = snapshot.segments;
        self.speakers = snapshot.speakers;
        self.prune_selection();
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selection.selected_segment {
            if !self.segments.iter().any(|s| &s.id == id) {
                self.selection.selected_segment = None;
            }
        }
    }

    fn sort_segments(&mut self) {
        self.segments
            .sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal));
    }

    pub fn segment(&self, id: &SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| &s.id == id)
    }

    pub fn speaker(&self, id: &SpeakerId) -> Option<&Speaker> {
        self.speakers.iter().find(|s| &s.id == id)
    }

    /// Replaces the entity set with a bulk transcription result. Caller
    /// supplies segments already ordered; the roster is derived from the
    /// batch and history starts over.
    pub fn load_transcript(&mut self, segments: Vec<Segment>) {
        self.speakers = speakers_from_segments(&segments);
        self.segments = segments;
        self.selection = Selection::default();
        self.undo = UndoManager::new();
        self.playback.playhead = 0.0;
        self.playback.duration = self
            .segments
            .iter()
            .map(|s| s.end)
            .fold(self.playback.duration, f64::max);
    }

    /// Creates a default-duration segment at `anchor`, owned by the given
    /// speaker (or the first roster entry), inserted in start order and
    /// selected.
    pub fn add_segment(&mut self, anchor: f64, speaker: Option<SpeakerId>) -> SegmentId {
        self.save_undo();
        let speaker_id = speaker
            .or_else(|| self.speakers.first().map(|s| s.id.clone()))
            .unwrap_or_else(|| SpeakerId::from(FALLBACK_SPEAKER_ID));
        let start = anchor.max(0.0);
        let segment = Segment {
            id: SegmentId::new(),
            speaker_id,
            start,
            end: start + DEFAULT_SEGMENT_DURATION,
            text: String::new(),
        };
        let id = segment.id.clone();
        self.segments.push(segment);
        self.sort_segments();
        self.selection.select(id.clone());
        id
    }

    /// Shallow-merges `edit` into the matching segment. No re-sort and no
    /// min-duration re-validation; bound-changing callers pre-validate.
    /// Unknown ids are no-ops and leave history untouched.
    pub fn update_segment(&mut self, id: &SegmentId, edit: SegmentEdit) {
        let Some(index) = self.segments.iter().position(|s| &s.id == id) else {
            return;
        };
        self.save_undo();
        let segment = &mut self.segments[index];
        if let Some(speaker_id) = edit.speaker_id {
            segment.speaker_id = speaker_id;
        }
        if let Some(start) = edit.start {
            segment.start = start;
        }
        if let Some(end) = edit.end {
            segment.end = end;
        }
        if let Some(text) = edit.text {
            segment.text = text;
        }
    }

    pub fn delete_segment(&mut self, id: &SegmentId) {
        if !self.segments.iter().any(|s| &s.id == id) {
            return;
        }
        self.save_undo();
        self.segments.retain(|s| &s.id != id);
        self.prune_selection();
    }

    /// Splits a segment at its midpoint: the original shrinks to the
    /// midpoint and a default-duration continuation for the same speaker
    /// starts there. One history entry covers both halves, so a single
    /// undo reverses the whole split. Segments too short for two valid
    /// halves are left alone.
    pub fn split_segment(&mut self, id: &SegmentId) -> Option<SegmentId> {
        let (midpoint, speaker_id) = {
            let segment = self.segment(id)?;
            if segment.duration() < MIN_SEGMENT_DURATION * 2.0 {
                debug!(segment = %id, "split rejected: segment too short");
                return None;
            }
            ((segment.start + segment.end) / 2.0, segment.speaker_id.clone())
        };
        self.save_undo();
        if let Some(segment) = self.segments.iter_mut().find(|s| &s.id == id) {
            segment.end = midpoint;
        }
        let continuation = Segment {
            id: SegmentId::new(),
            speaker_id,
            start: midpoint,
            end: midpoint + DEFAULT_SEGMENT_DURATION,
            text: String::new(),
        };
        let new_id = continuation.id.clone();
        self.segments.push(continuation);
        self.sort_segments();
        self.selection.select(new_id.clone());
        Some(new_id)
    }

    /// Shallow-merges `edit` into the matching speaker. An empty or
    /// whitespace-only name is not persisted.
    pub fn update_speaker(&mut self, id: &SpeakerId, edit: SpeakerEdit) {
        let Some(index) = self.speakers.iter().position(|s| &s.id == id) else {
            return;
        };
        self.save_undo();
        let speaker = &mut self.speakers[index];
        if let Some(name) = edit.name {
            if !name.trim().is_empty() {
                speaker.name = name;
            }
        }
        if let Some(color) = edit.color {
            speaker.color = color;
        }
    }

    /// Removes a speaker and every segment it owns. Destructive; the
    /// calling surface confirms with the user first.
    pub fn delete_speaker(&mut self, id: &SpeakerId) {
        if !self.speakers.iter().any(|s| &s.id == id) {
            return;
        }
        self.save_undo();
        self.speakers.retain(|s| &s.id != id);
        self.segments.retain(|s| &s.speaker_id != id);
        self.prune_selection();
    }

    /// Reassigns every segment of `from` to `to`, then drops `from` from
    /// the roster. A missing target or a self-merge is rejected outright;
    /// segments must never reference a speaker the roster lacks.
    pub fn merge_speakers(&mut self, from: &SpeakerId, to: &SpeakerId) {
        if from == to {
            warn!(speaker = %from, "merge rejected: source and target are the same");
            return;
        }
        if !self.speakers.iter().any(|s| &s.id == to) {
            warn!(target = %to, "merge rejected: target speaker does not exist");
            return;
        }
        if !self.speakers.iter().any(|s| &s.id == from) {
            return;
        }
        self.save_undo();
        for segment in &mut self.segments {
            if &segment.speaker_id == from {
                segment.speaker_id = to.clone();
            }
        }
        self.speakers.retain(|s| &s.id != from);
    }

    /// Moves the roster entry at `from_index` to `to_index` (splice
    /// semantics). Cosmetic ordering only.
    pub fn reorder_speakers(&mut self, from_index: usize, to_index: usize) {
        if from_index >= self.speakers.len() || from_index == to_index {
            return;
        }
        self.save_undo();
        let speaker = self.speakers.remove(from_index);
        let to_index = to_index.min(self.speakers.len());
        self.speakers.insert(to_index, speaker);
    }

    pub fn undo(&mut self) {
        let current = self.snapshot();
        if let Some(previous) = self.undo.undo(current) {
            self.apply_snapshot(previous);
        }
    }

    pub fn redo(&mut self) {
        let current = self.snapshot();
        if let Some(next) = self.undo.redo(current) {
            self.apply_snapshot(next);
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Captures the pre-gesture state at pointer-down. Intermediate drag
    /// ticks then write through [`set_segment_times`] without touching
    /// history, and [`commit_gesture`] records the whole gesture as one
    /// undo step.
    ///
    /// [`set_segment_times`]: Self::set_segment_times
    /// [`commit_gesture`]: Self::commit_gesture
    pub fn begin_gesture(&self) -> GestureSnapshot {
        GestureSnapshot(self.snapshot())
    }

    /// Raw bound write used by the drag layer between gesture begin and
    /// commit. Validation happens in the drag layer, which drops ticks
    /// that would violate the minimum duration.
    pub fn set_segment_times(&mut self, id: &SegmentId, start: f64, end: f64) {
        if let Some(segment) = self.segments.iter_mut().find(|s| &s.id == id) {
            segment.start = start;
            segment.end = end;
        }
    }

    /// Ends a gesture: pushes the captured pre-state as a single history
    /// entry, or nothing if the gesture changed nothing.
    pub fn commit_gesture(&mut self, gesture: GestureSnapshot) {
        let GestureSnapshot(before) = gesture;
        if before.segments == self.segments && before.speakers == self.speakers {
            return;
        }
        self.undo.save(before);
    }
}
