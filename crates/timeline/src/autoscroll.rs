use crate::coords;
use crate::view::TimelineView;

/// Width of the margin at each viewport edge that triggers scrolling
/// during a drag, in pixels.
pub const SCROLL_ZONE_PX: f32 = 40.0;

/// Scroll speed at full zone penetration, pixels per second.
pub const MAX_SCROLL_SPEED: f32 = 600.0;

/// Drag-time edge scrolling. The host feeds the latest pointer position
/// into `update` every frame and calls `tick` once per frame; `cancel`
/// stops motion immediately so nothing outlives the drag.
#[derive(Debug, Default)]
pub struct AutoScroll {
    velocity: Option<f32>,
}

impl AutoScroll {
    /// Recomputes the scroll velocity from the pointer's viewport x.
    /// Outside both zones the scroller goes inactive.
    pub fn update(&mut self, viewport_x: f32, viewport_width: f32) {
        self.velocity = if viewport_x < SCROLL_ZONE_PX {
            let depth = ((SCROLL_ZONE_PX - viewport_x) / SCROLL_ZONE_PX).clamp(0.0, 1.0);
            Some(-depth * MAX_SCROLL_SPEED)
        } else if viewport_x > viewport_width - SCROLL_ZONE_PX {
            let over = viewport_x - (viewport_width - SCROLL_ZONE_PX);
            let depth = (over / SCROLL_ZONE_PX).clamp(0.0, 1.0);
            Some(depth * MAX_SCROLL_SPEED)
        } else {
            None
        };
    }

    pub fn is_active(&self) -> bool {
        self.velocity.is_some()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity.unwrap_or(0.0)
    }

    /// Advances the view by one frame worth of scrolling.
    pub fn tick(&self, dt: f32, view: &mut TimelineView) {
        if let Some(velocity) = self.velocity {
            view.scroll_by(velocity * dt);
        }
    }

    pub fn cancel(&mut self) {
        self.velocity = None;
    }
}

/// Keeps the playhead visible while playback advances. Never runs during
/// a drag; drag scrolling owns the viewport then.
pub fn follow_playhead(view: &mut TimelineView, playhead: f64, dragging: bool) {
    if dragging {
        return;
    }
    let playhead_px = coords::time_to_pixel(playhead, view.zoom);
    let viewport_x = playhead_px - view.scroll_offset;
    if viewport_x < 0.0 || viewport_x > view.viewport_width {
        let centered = playhead_px - view.viewport_width / 2.0;
        view.scroll_offset = centered.clamp(0.0, view.max_scroll());
    }
}
