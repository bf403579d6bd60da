//! Textual clock form used at the import/export/display boundary:
//! `MM:SS` or `MM:SS.d`, minutes unbounded (no hour rollover).

/// Parses `MM:SS` / `MM:SS.d` into seconds. Malformed input degrades to
/// `0.0` rather than erroring; a live editing surface treats a transient
/// typo as "start of timeline", not a crash.
pub fn parse_timecode(text: &str) -> f64 {
    let mut parts = text.split(':');
    let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0.0;
    };
    let Ok(minutes) = minutes.trim().parse::<f64>() else {
        return 0.0;
    };
    let Ok(seconds) = seconds.trim().parse::<f64>() else {
        return 0.0;
    };
    if !minutes.is_finite() || !seconds.is_finite() {
        return 0.0;
    }
    minutes * 60.0 + seconds
}

/// Renders seconds as `MM:SS` (integral remainder) or `MM:SS.d`.
/// The remainder is rounded decimal half-up, so `5.55` renders `"00:05.6"`.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u64;
    let remainder = total - minutes as f64 * 60.0;
    // The epsilon counters binary representation of `.x5` remainders,
    // which would otherwise round down.
    let tenths = (remainder * 10.0 + 1e-6).round();
    if tenths % 10.0 == 0.0 {
        format!("{:02}:{:02}", minutes, (tenths / 10.0) as u64)
    } else {
        format!("{:02}:{:04.1}", minutes, tenths / 10.0)
    }
}
