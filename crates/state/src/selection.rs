use crate::segment::SegmentId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub selected_segment: Option<SegmentId>,
    pub hovered_segment: Option<SegmentId>,
}

impl Selection {
    pub fn select(&mut self, id: SegmentId) {
        self.selected_segment = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_segment = None;
    }
}
