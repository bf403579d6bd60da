//! Subtitle timestamps: `HH:MM:SS,mmm` for SRT, `HH:MM:SS.mmm` for VTT.
//! Hours grow without bound; components are zero-padded.

fn split(seconds: f64) -> (u64, u64, u64, u64) {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    (total_s / 3600, (total_s % 3600) / 60, total_s % 60, ms)
}

pub fn srt_timestamp(seconds: f64) -> String {
    let (h, m, s, ms) = split(seconds);
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

pub fn vtt_timestamp(seconds: f64) -> String {
    let (h, m, s, ms) = split(seconds);
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_every_component() {
        assert_eq!(srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(srt_timestamp(4.0), "00:00:04,000");
        assert_eq!(srt_timestamp(3599.5), "00:59:59,500");
        assert_eq!(vtt_timestamp(3661.25), "01:01:01.250");
    }

    #[test]
    fn hours_are_unbounded() {
        assert_eq!(srt_timestamp(100.0 * 3600.0), "100:00:00,000");
    }

    #[test]
    fn sub_millisecond_input_rounds() {
        assert_eq!(srt_timestamp(1.0005), "00:00:01,001");
        assert_eq!(vtt_timestamp(1.0004), "00:00:01.000");
    }
}
