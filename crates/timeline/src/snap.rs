use scribe_state::segment::{Segment, SegmentId};

/// Snapping policy for drag candidates. Grid pulls to fixed intervals;
/// edge pulls to other segments' bounds and takes precedence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    pub grid_enabled: bool,
    /// Grid spacing in seconds.
    pub grid_interval: f64,
    pub edge_enabled: bool,
    /// Capture distance in seconds; the boundary itself is exclusive.
    pub edge_threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_enabled: true,
            grid_interval: 0.5,
            edge_enabled: true,
            edge_threshold: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub time: f64,
    /// True only for edge snaps; grid rounding never sets it. Drives the
    /// visual snap guide.
    pub snapped: bool,
}

/// Rounds to the nearest grid line. Disabled or non-positive intervals
/// pass the input through.
pub fn snap_to_grid(time: f64, interval: f64, enabled: bool) -> f64 {
    if !enabled || interval <= 0.0 {
        return time;
    }
    (time / interval).round() * interval
}

/// Pulls `time` to the closest target strictly under `threshold` away.
/// Ties keep the first minimal-distance target in iteration order.
pub fn snap_to_edge(time: f64, targets: &[f64], threshold: f64, enabled: bool) -> SnapResult {
    if !enabled || targets.is_empty() {
        return SnapResult {
            time,
            snapped: false,
        };
    }
    let mut best_time = time;
    let mut best_dist = threshold;
    for &target in targets {
        let dist = (time - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best_time = target;
        }
    }
    SnapResult {
        time: best_time,
        snapped: best_time != time,
    }
}

/// Combined policy: edge snap wins outright; otherwise the grid result is
/// returned with `snapped: false`.
pub fn snap_time(time: f64, targets: &[f64], config: &SnapConfig) -> SnapResult {
    let edge = snap_to_edge(time, targets, config.edge_threshold, config.edge_enabled);
    if edge.snapped {
        return edge;
    }
    SnapResult {
        time: snap_to_grid(time, config.grid_interval, config.grid_enabled),
        snapped: false,
    }
}

/// Flattens every other segment's bounds into one target list. The
/// dragged segment never snaps to itself.
pub fn segment_edge_times(segments: &[Segment], exclude: &SegmentId) -> Vec<f64> {
    let mut targets = Vec::with_capacity(segments.len().saturating_sub(1) * 2);
    for segment in segments {
        if &segment.id == exclude {
            continue;
        }
        targets.push(segment.start);
        targets.push(segment.end);
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_state::speaker::SpeakerId;

    #[test]
    fn grid_snap_rounds_to_interval() {
        assert_eq!(snap_to_grid(5.05, 0.5, true), 5.0);
        assert_eq!(snap_to_grid(5.3, 0.5, true), 5.5);
        assert_eq!(snap_to_grid(1.9, 0.5, true), 2.0);
    }

    #[test]
    fn grid_snap_is_idempotent() {
        for (time, interval) in [(5.05, 0.5), (7.3, 0.25), (0.1, 1.0), (123.4, 2.0)] {
            let once = snap_to_grid(time, interval, true);
            assert_eq!(snap_to_grid(once, interval, true), once);
        }
    }

    #[test]
    fn grid_snap_passes_through_when_disabled_or_degenerate() {
        assert_eq!(snap_to_grid(5.05, 0.5, false), 5.05);
        assert_eq!(snap_to_grid(5.05, 0.0, true), 5.05);
        assert_eq!(snap_to_grid(5.05, -1.0, true), 5.05);
    }

    #[test]
    fn edge_snap_threshold_is_exclusive() {
        let targets = [1.0, 3.0, 5.0, 10.0];
        let hit = snap_to_edge(1.1, &targets, 0.2, true);
        assert_eq!(hit.time, 1.0);
        assert!(hit.snapped);
        // Exactly at the threshold does not snap.
        let miss = snap_to_edge(1.3, &targets, 0.2, true);
        assert_eq!(miss.time, 1.3);
        assert!(!miss.snapped);
    }

    #[test]
    fn edge_snap_noop_when_disabled_or_empty() {
        let result = snap_to_edge(1.1, &[1.0], 0.2, false);
        assert_eq!(result, SnapResult { time: 1.1, snapped: false });
        let result = snap_to_edge(1.1, &[], 0.2, true);
        assert_eq!(result, SnapResult { time: 1.1, snapped: false });
    }

    #[test]
    fn edge_snap_ties_keep_first_target() {
        // 2.0 is equidistant from 1.9 and 2.1.
        let result = snap_to_edge(2.0, &[1.9, 2.1], 0.2, true);
        assert_eq!(result.time, 1.9);
        assert!(result.snapped);
    }

    #[test]
    fn edge_snap_onto_exact_target_reports_unsnapped() {
        let result = snap_to_edge(2.0, &[2.0], 0.2, true);
        assert_eq!(result.time, 2.0);
        assert!(!result.snapped);
    }

    #[test]
    fn combined_snap_prefers_edge_over_grid() {
        let config = SnapConfig::default();
        let targets = [2.0, 4.0, 6.0];
        // Both policies land on 2.0 here, but the flag must say edge.
        let result = snap_time(1.9, &targets, &config);
        assert_eq!(result.time, 2.0);
        assert!(result.snapped);
    }

    #[test]
    fn combined_snap_falls_back_to_grid_unflagged() {
        let config = SnapConfig::default();
        let targets = [2.0, 4.0, 6.0];
        let result = snap_time(3.2, &targets, &config);
        assert_eq!(result.time, 3.0);
        assert!(!result.snapped);
    }

    #[test]
    fn edge_targets_exclude_the_dragged_segment() {
        let make = |id: &str, start: f64, end: f64| Segment {
            id: SegmentId::from(id),
            speaker_id: SpeakerId::from("a"),
            start,
            end,
            text: String::new(),
        };
        let segments = vec![make("s1", 0.0, 4.0), make("s2", 4.0, 8.0), make("s3", 9.0, 12.0)];
        let targets = segment_edge_times(&segments, &SegmentId::from("s2"));
        assert_eq!(targets, vec![0.0, 4.0, 9.0, 12.0]);
    }
}
