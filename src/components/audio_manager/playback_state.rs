// Playback state and its transitions. Components own one instance in a
// signal; the browser side effects live in `media`.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no media element is attached")]
    NoElement,
    #[error("playback request rejected: {0}")]
    Rejected(String),
}

/// What a play/pause click should do to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIntent {
    /// Issue an asynchronous play request and wait for its outcome.
    Start,
    /// Pause synchronously; state has already been updated.
    Stop,
}

/// Index movement caused by "next" or a natural end of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackChange {
    pub from: usize,
    pub to: usize,
    /// Whether playback was running when the change happened.
    pub resume: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub track_count: usize,
    resume_on_load: bool,
}

impl PlaybackState {
    pub fn new(track_count: usize) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            track_count,
            resume_on_load: false,
        }
    }

    /// Decide what a play/pause click does. Without an element nothing
    /// happens and the state is left untouched.
    pub fn begin_toggle(&mut self, element_present: bool) -> Option<ToggleIntent> {
        if !element_present {
            return None;
        }
        if self.is_playing {
            self.is_playing = false;
            Some(ToggleIntent::Stop)
        } else {
            Some(ToggleIntent::Start)
        }
    }

    /// Apply the outcome of a play request issued by a toggle.
    pub fn finish_play(&mut self, outcome: &Result<(), PlaybackError>) {
        self.is_playing = outcome.is_ok();
    }

    /// Advance circularly. Used for both "next" and natural end of track.
    pub fn advance(&mut self) -> TrackChange {
        let from = self.current_index;
        let to = if self.track_count == 0 {
            0
        } else {
            (from + 1) % self.track_count
        };
        self.current_index = to;
        self.resume_on_load = self.is_playing;
        TrackChange {
            from,
            to,
            resume: self.resume_on_load,
        }
    }

    /// Consume the resume decision recorded by the last `advance`.
    pub fn take_resume(&mut self) -> bool {
        std::mem::take(&mut self.resume_on_load)
    }
}
