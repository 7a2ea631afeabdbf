//! Welcome → loading → content gate.
//!
//! The sequencer is a pure, time-driven state machine. The frontend calls
//! [`ViewSequencer::tick`] once per frame and reacts to the emitted
//! [`SequencerEvent`]s (hide overlays, start audio, mount scroll effects).
//! Nothing changes unless the sequencer is ticked, so dropping the frame
//! registration that ticks it cancels any pending transition.

use crate::constants::*;
use crate::ease::Ease;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Welcome,
    Loading,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    WelcomeExitStarted,
    EnteredLoading,
    /// Ask the audio subsystem for its one automatic playback attempt.
    StartAudio,
    LoadingExitStarted,
    EnteredContent,
}

/// Batch of events produced by a single call; most frames produce none.
pub type SequencerEvents = SmallVec<[SequencerEvent; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for the enter gesture.
    Idle,
    WelcomeExit { elapsed: f32 },
    LoadingFill { elapsed: f32 },
    LoadingExit { elapsed: f32 },
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SequencerTimings {
    pub welcome_exit_sec: f32,
    pub loading_fill_sec: f32,
    pub loading_text_fade_sec: f32,
    pub loading_exit_sec: f32,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            welcome_exit_sec: WELCOME_EXIT_SEC,
            loading_fill_sec: LOADING_FILL_SEC,
            loading_text_fade_sec: LOADING_TEXT_FADE_SEC,
            loading_exit_sec: LOADING_EXIT_SEC,
        }
    }
}

impl SequencerTimings {
    /// Length of the loading timeline before the exit slide starts. The text
    /// fade overlaps the end of the fill.
    pub fn loading_timeline_sec(&self) -> f32 {
        self.loading_fill_sec.max(self.loading_text_fade_sec)
    }
}

/// Everything the overlays need to draw the current instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequencerVisuals {
    pub welcome_visible: bool,
    pub welcome_opacity: f32,
    pub welcome_scale: f32,
    pub loading_visible: bool,
    /// Progress bar fill in [0, 1].
    pub loading_fill: f32,
    pub loading_text_opacity: f32,
    pub loading_text_offset_px: f32,
    /// Vertical offset of the loading overlay in percent of its height.
    pub loading_offset_percent: f32,
    pub content_visible: bool,
}

pub struct ViewSequencer {
    state: ViewState,
    phase: Phase,
    pub timings: SequencerTimings,
}

impl Default for ViewSequencer {
    fn default() -> Self {
        Self::new(SequencerTimings::default())
    }
}

impl ViewSequencer {
    pub fn new(timings: SequencerTimings) -> Self {
        Self {
            state: ViewState::Welcome,
            phase: Phase::Idle,
            timings,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The single user gesture. Returns `false` (and does nothing) unless the
    /// sequencer is still idling on the welcome screen.
    pub fn enter(&mut self, out: &mut SequencerEvents) -> bool {
        if self.state != ViewState::Welcome || self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::WelcomeExit { elapsed: 0.0 };
        out.push(SequencerEvent::WelcomeExitStarted);
        log::info!("[sequencer] enter; welcome exit started");
        true
    }

    /// Advance time. Leftover time carries over phase boundaries so a large
    /// `dt` can cross several of them in one call.
    pub fn tick(&mut self, dt: Duration, out: &mut SequencerEvents) {
        let mut remaining = dt.as_secs_f32();
        loop {
            match self.phase {
                Phase::Idle | Phase::Done => return,
                Phase::WelcomeExit { elapsed } => {
                    let total = self.timings.welcome_exit_sec;
                    let (elapsed, rest) = accumulate(elapsed, remaining, total);
                    if elapsed < total {
                        self.phase = Phase::WelcomeExit { elapsed };
                        return;
                    }
                    self.begin_loading(out);
                    remaining = rest;
                }
                Phase::LoadingFill { elapsed } => {
                    let total = self.timings.loading_timeline_sec();
                    let (elapsed, rest) = accumulate(elapsed, remaining, total);
                    if elapsed < total {
                        self.phase = Phase::LoadingFill { elapsed };
                        return;
                    }
                    self.phase = Phase::LoadingExit { elapsed: 0.0 };
                    out.push(SequencerEvent::LoadingExitStarted);
                    remaining = rest;
                }
                Phase::LoadingExit { elapsed } => {
                    let total = self.timings.loading_exit_sec;
                    let (elapsed, rest) = accumulate(elapsed, remaining, total);
                    if elapsed < total {
                        self.phase = Phase::LoadingExit { elapsed };
                        return;
                    }
                    self.finish(out);
                    remaining = rest;
                }
            }
            if remaining <= 0.0 && !self.phase_is_complete() {
                return;
            }
        }
    }

    /// Complete every outstanding transition immediately. Used when no frame
    /// driver is available so the page still reaches its content.
    pub fn settle(&mut self, out: &mut SequencerEvents) {
        if self.phase == Phase::Idle {
            return;
        }
        loop {
            match self.phase {
                Phase::Idle | Phase::Done => return,
                Phase::WelcomeExit { .. } => self.begin_loading(out),
                Phase::LoadingFill { .. } => {
                    self.phase = Phase::LoadingExit { elapsed: 0.0 };
                    out.push(SequencerEvent::LoadingExitStarted);
                }
                Phase::LoadingExit { .. } => self.finish(out),
            }
        }
    }

    pub fn visuals(&self) -> SequencerVisuals {
        let t = &self.timings;
        let mut v = SequencerVisuals {
            welcome_visible: self.state == ViewState::Welcome,
            welcome_opacity: 1.0,
            welcome_scale: 1.0,
            loading_visible: self.state == ViewState::Loading,
            loading_fill: 0.0,
            loading_text_opacity: 1.0,
            loading_text_offset_px: 0.0,
            loading_offset_percent: 0.0,
            content_visible: self.state == ViewState::Content,
        };
        match self.phase {
            Phase::Idle => {}
            Phase::WelcomeExit { elapsed } => {
                let k = Ease::Power2In.apply(fraction(elapsed, t.welcome_exit_sec));
                v.welcome_opacity = 1.0 - k;
                v.welcome_scale = 1.0 + (WELCOME_EXIT_SCALE - 1.0) * k;
            }
            Phase::LoadingFill { elapsed } => {
                v.loading_fill = Ease::Power2InOut.apply(fraction(elapsed, t.loading_fill_sec));
                let fade_start = t.loading_timeline_sec() - t.loading_text_fade_sec;
                let k = fraction(elapsed - fade_start, t.loading_text_fade_sec);
                v.loading_text_opacity = 1.0 - k;
                v.loading_text_offset_px = -LOADING_TEXT_RISE_PX * k;
            }
            Phase::LoadingExit { elapsed } => {
                v.loading_fill = 1.0;
                v.loading_text_opacity = 0.0;
                v.loading_text_offset_px = -LOADING_TEXT_RISE_PX;
                let k = Ease::Power4InOut.apply(fraction(elapsed, t.loading_exit_sec));
                v.loading_offset_percent = -100.0 * k;
            }
            Phase::Done => {
                v.loading_fill = 1.0;
                v.loading_offset_percent = -100.0;
            }
        }
        v
    }

    fn begin_loading(&mut self, out: &mut SequencerEvents) {
        self.state = ViewState::Loading;
        self.phase = Phase::LoadingFill { elapsed: 0.0 };
        out.push(SequencerEvent::EnteredLoading);
        out.push(SequencerEvent::StartAudio);
        log::info!("[sequencer] state=Loading");
    }

    fn finish(&mut self, out: &mut SequencerEvents) {
        self.state = ViewState::Content;
        self.phase = Phase::Done;
        out.push(SequencerEvent::EnteredContent);
        log::info!("[sequencer] state=Content");
    }

    // Zero-length phases complete without needing any time.
    fn phase_is_complete(&self) -> bool {
        let t = &self.timings;
        match self.phase {
            Phase::WelcomeExit { elapsed } => elapsed >= t.welcome_exit_sec,
            Phase::LoadingFill { elapsed } => elapsed >= t.loading_timeline_sec(),
            Phase::LoadingExit { elapsed } => elapsed >= t.loading_exit_sec,
            Phase::Idle | Phase::Done => false,
        }
    }
}

#[inline]
fn accumulate(elapsed: f32, dt: f32, total: f32) -> (f32, f32) {
    let next = elapsed + dt.max(0.0);
    if next >= total {
        (total, next - total)
    } else {
        (next, 0.0)
    }
}

#[inline]
fn fraction(elapsed: f32, total: f32) -> f32 {
    if total <= 0.0 {
        1.0
    } else {
        (elapsed / total).clamp(0.0, 1.0)
    }
}
