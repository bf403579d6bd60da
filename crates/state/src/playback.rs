#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Transport value shared with the (external) playback layer. The editor
/// core only reads and writes `playhead` and `duration`; decode and
/// output live elsewhere.
#[derive(Debug, Clone)]
pub struct Playback {
    pub state: PlaybackState,
    pub playhead: f64,
    pub speed: f64,
    pub duration: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            playhead: 0.0,
            speed: 1.0,
            duration: 0.0,
        }
    }
}

impl Playback {
    pub fn toggle_play(&mut self) {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Stopped,
            PlaybackState::Stopped => PlaybackState::Playing,
        };
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn seek(&mut self, time: f64) {
        self.playhead = time.max(0.0);
        if self.duration > 0.0 {
            self.playhead = self.playhead.min(self.duration);
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if self.state == PlaybackState::Playing {
            self.playhead += dt * self.speed;
        }
        if self.playhead < 0.0 {
            self.playhead = 0.0;
            self.state = PlaybackState::Stopped;
        }
        if self.duration > 0.0 && self.playhead >= self.duration {
            self.playhead = self.duration;
            self.state = PlaybackState::Stopped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_duration() {
        let mut playback = Playback {
            duration: 10.0,
            ..Playback::default()
        };
        playback.toggle_play();
        playback.advance(11.0);
        assert_eq!(playback.playhead, 10.0);
        assert_eq!(playback.state, PlaybackState::Stopped);
    }

    #[test]
    fn seek_clamps_into_range() {
        let mut playback = Playback {
            duration: 10.0,
            ..Playback::default()
        };
        playback.seek(-1.0);
        assert_eq!(playback.playhead, 0.0);
        playback.seek(99.0);
        assert_eq!(playback.playhead, 10.0);
    }
}
