//! Background music state.
//!
//! `is_playing` mirrors what the media element reports, never what the user
//! asked for: the only writer is [`PlaybackController::handle_event`]. The
//! automatic start requested by the view sequencer is latched so it can fire
//! at most once per page lifetime.

use crate::constants::AUDIO_DEFAULT_VOLUME;
use crate::error::CardError;

/// The imperative side of an audio element.
pub trait MediaElement {
    /// Request playback. `Ok` means the request was issued, not that audio is
    /// playing; that arrives later as [`MediaEvent::Play`].
    fn play(&mut self) -> Result<(), CardError>;
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
    fn set_volume(&mut self, volume: f64);
}

/// The three element events the playback state listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 3] = [MediaEvent::Play, MediaEvent::Pause, MediaEvent::Ended];

    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::Ended => "ended",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioPlaybackState {
    is_playing: bool,
    is_muted: bool,
    has_auto_started: bool,
}

impl AudioPlaybackState {
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }
    pub fn has_auto_started(&self) -> bool {
        self.has_auto_started
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoplayOutcome {
    /// Playback was requested; the element may still refuse asynchronously.
    Requested,
    /// The element refused synchronously. Not retried.
    Rejected(CardError),
    /// The latch had already fired.
    AlreadyStarted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioSettings {
    pub src: &'static str,
    pub volume: f64,
    pub track_title: &'static str,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            src: crate::constants::AUDIO_SRC,
            volume: AUDIO_DEFAULT_VOLUME,
            track_title: crate::constants::AUDIO_TRACK_TITLE,
        }
    }
}

pub struct PlaybackController<M: MediaElement> {
    media: M,
    state: AudioPlaybackState,
    volume: f64,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self::with_volume(media, AUDIO_DEFAULT_VOLUME)
    }

    pub fn with_volume(media: M, volume: f64) -> Self {
        Self {
            media,
            state: AudioPlaybackState::default(),
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> AudioPlaybackState {
        self.state
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// The one automatic playback attempt.
    pub fn autoplay(&mut self) -> AutoplayOutcome {
        if self.state.has_auto_started {
            log::debug!("[audio] autoplay already attempted; ignoring");
            return AutoplayOutcome::AlreadyStarted;
        }
        self.state.has_auto_started = true;
        self.media.set_volume(self.volume);
        match self.media.play() {
            Ok(()) => AutoplayOutcome::Requested,
            Err(e) => {
                log::info!("[audio] autoplay prevented: {}", e);
                AutoplayOutcome::Rejected(e)
            }
        }
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.media.pause();
        } else if let Err(e) = self.media.play() {
            log::info!("[audio] play prevented: {}", e);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.media.set_muted(self.state.is_muted);
    }

    pub fn handle_event(&mut self, event: MediaEvent) {
        self.state.is_playing = match event {
            MediaEvent::Play => true,
            MediaEvent::Pause | MediaEvent::Ended => false,
        };
    }
}
