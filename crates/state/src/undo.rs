use crate::segment::Segment;
use crate::speaker::Speaker;

const MAX_HISTORY: usize = 100;

/// Fully denormalized copy of the editable entity set, captured before a
/// mutation. No structural sharing; transcript-scale data stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub segments: Vec<Segment>,
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone)]
pub struct UndoManager {
    undo_stack: Vec<EditorSnapshot>,
    redo_stack: Vec<EditorSnapshot>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Records the pre-mutation state. Any new mutation invalidates the
    /// redo branch.
    pub fn save(&mut self, snapshot: EditorSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    pub fn undo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(n: usize) -> EditorSnapshot {
        let segments = (0..n)
            .map(|i| Segment {
                id: crate::segment::SegmentId::from(format!("s{i}").as_str()),
                speaker_id: crate::speaker::SpeakerId::from("a"),
                start: i as f64,
                end: i as f64 + 1.0,
                text: String::new(),
            })
            .collect();
        EditorSnapshot {
            segments,
            speakers: Vec::new(),
        }
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut undo = UndoManager::new();
        assert!(!undo.can_undo());
        assert!(!undo.can_redo());
        assert!(undo.undo(snapshot(0)).is_none());
        assert!(undo.redo(snapshot(0)).is_none());
    }

    #[test]
    fn undo_then_redo_swaps_states() {
        let mut undo = UndoManager::new();
        undo.save(snapshot(1));
        let previous = undo.undo(snapshot(2)).unwrap();
        assert_eq!(previous, snapshot(1));
        assert!(undo.can_redo());
        let next = undo.redo(previous).unwrap();
        assert_eq!(next, snapshot(2));
    }

    #[test]
    fn save_clears_redo_branch() {
        let mut undo = UndoManager::new();
        undo.save(snapshot(1));
        undo.undo(snapshot(2)).unwrap();
        assert!(undo.can_redo());
        undo.save(snapshot(3));
        assert!(!undo.can_redo());
    }

    #[test]
    fn history_is_bounded() {
        let mut undo = UndoManager::new();
        for i in 0..(MAX_HISTORY + 10) {
            undo.save(snapshot(i));
        }
        let mut depth = 0;
        let mut current = snapshot(0);
        while let Some(previous) = undo.undo(current) {
            current = previous;
            depth += 1;
        }
        assert_eq!(depth, MAX_HISTORY);
    }
}
