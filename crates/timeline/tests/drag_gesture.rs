//! End-to-end drag gestures over a live project: pointer deltas through
//! snapping into the store, with history observed from the outside.

use scribe_state::project::ProjectState;
use scribe_state::segment::Segment;
use scribe_state::speaker::SpeakerId;
use scribe_state::timecode::{format_timecode, parse_timecode};
use scribe_timeline::{DragController, DragMode, SnapConfig, TimelineView};

fn single_segment_project() -> ProjectState {
    let mut project = ProjectState::new();
    project.load_transcript(vec![Segment {
        id: "1".into(),
        speaker_id: SpeakerId::from("speaker_1"),
        start: parse_timecode("00:00"),
        end: parse_timecode("00:05"),
        text: "hello".into(),
    }]);
    project
}

#[test]
fn right_edge_drag_lands_on_the_grid() {
    let mut project = single_segment_project();
    let view = TimelineView {
        zoom: 100.0,
        scroll_offset: 0.0,
        viewport_width: 800.0,
        duration: 60.0,
    };
    let config = SnapConfig {
        edge_enabled: false,
        grid_enabled: true,
        grid_interval: 0.5,
        ..SnapConfig::default()
    };

    let mut controller = DragController::new();
    controller.begin(&project, &"1".into(), DragMode::RightEdge, 500.0, &view);
    // Raw candidate end 5.05s: five pixels right at 100 px/s.
    controller.update(&mut project, 505.0, &view, &config);
    controller.finish(&mut project);

    let segment = project.segment(&"1".into()).unwrap();
    assert_eq!(format_timecode(segment.end), "00:05");
}

#[test]
fn a_gesture_is_one_undo_step_even_across_many_ticks() {
    let mut project = single_segment_project();
    let view = TimelineView {
        zoom: 100.0,
        scroll_offset: 0.0,
        viewport_width: 800.0,
        duration: 60.0,
    };
    let config = SnapConfig {
        edge_enabled: false,
        grid_enabled: false,
        ..SnapConfig::default()
    };

    let mut controller = DragController::new();
    controller.begin(&project, &"1".into(), DragMode::Move, 100.0, &view);
    for x in (110..400).step_by(10) {
        controller.update(&mut project, x as f32, &view, &config);
    }
    controller.finish(&mut project);

    let segment = project.segment(&"1".into()).unwrap();
    assert!((segment.start - 2.9).abs() < 1e-3);
    assert!((segment.duration() - 5.0).abs() < 1e-6);

    project.undo();
    let segment = project.segment(&"1".into()).unwrap();
    assert_eq!(segment.start, 0.0);
    assert_eq!(segment.end, 5.0);
    assert!(!project.can_undo());
}

#[test]
fn scroll_offset_shifts_do_not_skew_an_active_drag() {
    let mut project = single_segment_project();
    let mut view = TimelineView {
        zoom: 100.0,
        scroll_offset: 0.0,
        viewport_width: 400.0,
        duration: 60.0,
    };
    let config = SnapConfig {
        edge_enabled: false,
        grid_enabled: false,
        ..SnapConfig::default()
    };

    let mut controller = DragController::new();
    controller.begin(&project, &"1".into(), DragMode::RightEdge, 380.0, &view);
    // The pointer parks in the right scroll zone and the view slides.
    controller.update_auto_scroll(390.0, &view);
    assert!(controller.auto_scroll_active());
    controller.tick_auto_scroll(0.5, &mut view);
    assert!(view.scroll_offset > 0.0);

    // Same viewport x, but the content underneath moved by the scroll.
    controller.update(&mut project, 390.0, &view, &config);
    let expected_end = 5.0 + f64::from((390.0 + view.scroll_offset - 380.0) / 100.0);
    let segment = project.segment(&"1".into()).unwrap();
    assert!((segment.end - expected_end).abs() < 1e-3);

    controller.finish(&mut project);
    assert!(!controller.auto_scroll_active());
}
