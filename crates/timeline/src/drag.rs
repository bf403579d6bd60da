use scribe_state::project::{GestureSnapshot, ProjectState};
use scribe_state::segment::{SegmentId, MIN_SEGMENT_DURATION};
use tracing::debug;

use crate::autoscroll::AutoScroll;
use crate::snap::{segment_edge_times, snap_time, snap_to_edge, snap_to_grid, SnapConfig};
use crate::view::TimelineView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    LeftEdge,
    RightEdge,
    Move,
}

/// Captured at pointer-down. `initial_pointer_x` is in content space
/// (viewport x plus the scroll offset at grab time), so later deltas are
/// unaffected by auto-scroll moving the viewport under the pointer.
#[derive(Debug, Clone)]
pub struct DragState {
    pub segment_id: SegmentId,
    pub mode: DragMode,
    pub initial_pointer_x: f32,
    pub initial_start: f64,
    pub initial_end: f64,
}

/// Direct-manipulation state machine: Idle until a handle or body grab,
/// then one proposed mutation per pointer tick until release. A whole
/// gesture commits exactly one undo entry.
#[derive(Debug, Default)]
pub struct DragController {
    drag: Option<DragState>,
    gesture: Option<GestureSnapshot>,
    snap_guide: Option<f64>,
    auto_scroll: AutoScroll,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active_drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Time at which the visual snap guide should render, if an edge
    /// snap landed this tick.
    pub fn snap_guide(&self) -> Option<f64> {
        self.snap_guide
    }

    /// Pointer-down on a segment handle or body. Returns false (and stays
    /// Idle) for unknown segments.
    pub fn begin(
        &mut self,
        project: &ProjectState,
        id: &SegmentId,
        mode: DragMode,
        viewport_x: f32,
        view: &TimelineView,
    ) -> bool {
        let Some(segment) = project.segment(id) else {
            return false;
        };
        self.gesture = Some(project.begin_gesture());
        self.drag = Some(DragState {
            segment_id: id.clone(),
            mode,
            initial_pointer_x: view.content_x(viewport_x),
            initial_start: segment.start,
            initial_end: segment.end,
        });
        self.snap_guide = None;
        debug!(segment = %id, ?mode, "drag started");
        true
    }

    /// Pointer-move tick. Converts the pointer delta to a time delta,
    /// resolves snapping against every other segment's bounds, validates,
    /// and writes the accepted bounds into the store. Ticks that would
    /// violate the minimum duration are dropped; the drag continues.
    pub fn update(
        &mut self,
        project: &mut ProjectState,
        viewport_x: f32,
        view: &TimelineView,
        config: &SnapConfig,
    ) {
        let Some(drag) = self.drag.clone() else {
            return;
        };
        let pointer_x = view.content_x(viewport_x);
        let delta_time = f64::from((pointer_x - drag.initial_pointer_x) / view.zoom);
        let targets = segment_edge_times(&project.segments, &drag.segment_id);
        self.snap_guide = None;

        match drag.mode {
            DragMode::LeftEdge => {
                let candidate = (drag.initial_start + delta_time).max(0.0);
                let result = snap_time(candidate, &targets, config);
                if result.snapped {
                    self.snap_guide = Some(result.time);
                }
                if result.time < drag.initial_end - MIN_SEGMENT_DURATION {
                    project.set_segment_times(&drag.segment_id, result.time, drag.initial_end);
                }
            }
            DragMode::RightEdge => {
                let candidate =
                    (drag.initial_end + delta_time).max(drag.initial_start + MIN_SEGMENT_DURATION);
                let result = snap_time(candidate, &targets, config);
                if result.snapped {
                    self.snap_guide = Some(result.time);
                }
                project.set_segment_times(&drag.segment_id, drag.initial_start, result.time);
            }
            DragMode::Move => {
                let duration = drag.initial_end - drag.initial_start;
                let candidate_start = (drag.initial_start + delta_time).max(0.0);
                let candidate_end = candidate_start + duration;
                let start_snap =
                    snap_to_edge(candidate_start, &targets, config.edge_threshold, config.edge_enabled);
                let end_snap =
                    snap_to_edge(candidate_end, &targets, config.edge_threshold, config.edge_enabled);
                let start = if start_snap.snapped {
                    self.snap_guide = Some(start_snap.time);
                    start_snap.time
                } else if end_snap.snapped {
                    self.snap_guide = Some(end_snap.time);
                    end_snap.time - duration
                } else {
                    snap_to_grid(candidate_start, config.grid_interval, config.grid_enabled)
                };
                let start = start.max(0.0);
                project.set_segment_times(&drag.segment_id, start, start + duration);
            }
        }
    }

    /// Feeds the latest pointer position to the edge auto-scroller. Only
    /// meaningful while a drag is active.
    pub fn update_auto_scroll(&mut self, viewport_x: f32, view: &TimelineView) {
        if self.drag.is_none() {
            return;
        }
        self.auto_scroll.update(viewport_x, view.viewport_width);
    }

    /// Per-frame auto-scroll step; moves the viewport while the pointer
    /// sits in an edge zone.
    pub fn tick_auto_scroll(&mut self, dt: f32, view: &mut TimelineView) {
        self.auto_scroll.tick(dt, view);
    }

    pub fn auto_scroll_active(&self) -> bool {
        self.auto_scroll.is_active()
    }

    /// Pointer-up from anywhere. Clears drag state and guides, stops any
    /// in-flight auto-scroll, and commits the gesture's single history
    /// entry (none if nothing changed).
    pub fn finish(&mut self, project: &mut ProjectState) {
        if self.drag.take().is_none() {
            return;
        }
        self.snap_guide = None;
        self.auto_scroll.cancel();
        if let Some(gesture) = self.gesture.take() {
            project.commit_gesture(gesture);
        }
        debug!("drag finished");
    }
}
