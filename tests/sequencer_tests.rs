// Host-side tests for the welcome → loading → content sequencer.
// The main crate is wasm-only, so these drive card-core directly.

use card_core::sequencer::{Phase, SequencerTimings};
use card_core::{FrameScheduler, SequencerEvent, SequencerEvents, ViewSequencer, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn run_frames(seq: &mut ViewSequencer, frames: usize, dt: Duration) -> Vec<SequencerEvent> {
    let mut all = Vec::new();
    for _ in 0..frames {
        let mut out = SequencerEvents::new();
        seq.tick(dt, &mut out);
        all.extend(out);
    }
    all
}

#[test]
fn starts_idle_on_welcome() {
    let seq = ViewSequencer::default();
    assert_eq!(seq.state(), ViewState::Welcome);
    assert_eq!(seq.phase(), Phase::Idle);
    let v = seq.visuals();
    assert!(v.welcome_visible && !v.loading_visible && !v.content_visible);
}

#[test]
fn ticking_without_enter_changes_nothing() {
    let mut seq = ViewSequencer::default();
    let events = run_frames(&mut seq, 600, ms(16));
    assert!(events.is_empty());
    assert_eq!(seq.state(), ViewState::Welcome);
}

#[test]
fn time_alone_reaches_content_after_enter() {
    let mut seq = ViewSequencer::default();
    let mut events = SequencerEvents::new();
    assert!(seq.enter(&mut events));
    // 0.5 + 2.5 + 1.0 s of frames, plus slack
    events.extend(run_frames(&mut seq, 300, ms(16)));
    assert_eq!(seq.state(), ViewState::Content);
    assert_eq!(
        events.as_slice(),
        &[
            SequencerEvent::WelcomeExitStarted,
            SequencerEvent::EnteredLoading,
            SequencerEvent::StartAudio,
            SequencerEvent::LoadingExitStarted,
            SequencerEvent::EnteredContent,
        ]
    );
}

#[test]
fn phases_follow_the_configured_timings() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);

    seq.tick(ms(400), &mut out);
    assert_eq!(seq.state(), ViewState::Welcome);
    seq.tick(ms(100), &mut out);
    assert_eq!(seq.state(), ViewState::Loading);

    seq.tick(ms(2400), &mut out);
    assert!(matches!(seq.phase(), Phase::LoadingFill { .. }));
    seq.tick(ms(100), &mut out);
    assert!(matches!(seq.phase(), Phase::LoadingExit { .. }));

    seq.tick(ms(999), &mut out);
    assert_eq!(seq.state(), ViewState::Loading);
    seq.tick(ms(1), &mut out);
    assert_eq!(seq.state(), ViewState::Content);
}

#[test]
fn one_large_tick_crosses_every_phase() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.tick(Duration::from_secs(10), &mut out);
    assert_eq!(seq.state(), ViewState::Content);
    assert_eq!(seq.phase(), Phase::Done);
    assert_eq!(out.len(), 5);
}

#[test]
fn second_enter_has_no_effect() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    assert!(seq.enter(&mut out));
    assert!(!seq.enter(&mut out));
    assert_eq!(out.as_slice(), &[SequencerEvent::WelcomeExitStarted]);

    seq.tick(Duration::from_secs(10), &mut out);
    let before = out.len();
    assert!(!seq.enter(&mut out));
    assert_eq!(out.len(), before);
    assert_eq!(seq.state(), ViewState::Content);
}

#[test]
fn each_state_is_visited_once() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    let mut visited = vec![seq.state()];
    for _ in 0..500 {
        seq.tick(ms(16), &mut out);
        if visited.last() != Some(&seq.state()) {
            visited.push(seq.state());
        }
        seq.enter(&mut out);
    }
    assert_eq!(
        visited,
        vec![ViewState::Welcome, ViewState::Loading, ViewState::Content]
    );
    let starts = out
        .iter()
        .filter(|e| **e == SequencerEvent::StartAudio)
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn settle_completes_with_the_same_events() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.settle(&mut out);
    assert_eq!(seq.state(), ViewState::Content);
    assert_eq!(
        out.as_slice(),
        &[
            SequencerEvent::WelcomeExitStarted,
            SequencerEvent::EnteredLoading,
            SequencerEvent::StartAudio,
            SequencerEvent::LoadingExitStarted,
            SequencerEvent::EnteredContent,
        ]
    );
}

#[test]
fn settle_before_enter_does_nothing() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.settle(&mut out);
    assert!(out.is_empty());
    assert_eq!(seq.state(), ViewState::Welcome);
}

#[test]
fn settle_mid_loading_finishes_the_rest() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.tick(ms(1000), &mut out);
    assert_eq!(seq.state(), ViewState::Loading);
    out.clear();
    seq.settle(&mut out);
    assert_eq!(
        out.as_slice(),
        &[SequencerEvent::LoadingExitStarted, SequencerEvent::EnteredContent]
    );
}

#[test]
fn zero_length_timings_complete_immediately() {
    let timings = SequencerTimings {
        welcome_exit_sec: 0.0,
        loading_fill_sec: 0.0,
        loading_text_fade_sec: 0.0,
        loading_exit_sec: 0.0,
    };
    let mut seq = ViewSequencer::new(timings);
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.tick(Duration::ZERO, &mut out);
    assert_eq!(seq.state(), ViewState::Content);
}

#[test]
fn visuals_track_the_welcome_exit() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    let start = seq.visuals();
    assert!((start.welcome_opacity - 1.0).abs() < 1e-6);
    assert!((start.welcome_scale - 1.0).abs() < 1e-6);

    seq.tick(ms(250), &mut out);
    let mid = seq.visuals();
    assert!(mid.welcome_opacity < 1.0 && mid.welcome_opacity > 0.0);
    assert!(mid.welcome_scale > 1.0 && mid.welcome_scale < 1.1);
}

#[test]
fn loading_text_fades_only_at_the_end_of_the_fill() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.tick(ms(500), &mut out);

    seq.tick(ms(1500), &mut out);
    let v = seq.visuals();
    assert!(v.loading_fill > 0.0 && v.loading_fill < 1.0);
    assert!((v.loading_text_opacity - 1.0).abs() < 1e-6);

    seq.tick(ms(750), &mut out);
    let v = seq.visuals();
    assert!(v.loading_text_opacity < 1.0);
    assert!(v.loading_text_offset_px < 0.0);
}

#[test]
fn loading_overlay_slides_up_on_exit() {
    let mut seq = ViewSequencer::default();
    let mut out = SequencerEvents::new();
    seq.enter(&mut out);
    seq.tick(ms(3000), &mut out);
    assert_eq!(seq.visuals().loading_offset_percent, 0.0);
    seq.tick(ms(500), &mut out);
    let p = seq.visuals().loading_offset_percent;
    assert!(p < 0.0 && p > -100.0);
    seq.tick(ms(500), &mut out);
    assert!(seq.visuals().content_visible);
}

#[test]
fn unmount_during_loading_cancels_the_transition() {
    let scheduler = FrameScheduler::new();
    let seq = Rc::new(RefCell::new(ViewSequencer::default()));
    let events = Rc::new(RefCell::new(Vec::new()));

    let seq_frame = seq.clone();
    let events_frame = events.clone();
    let registration = scheduler.on_frame(move |t| {
        let mut out = SequencerEvents::new();
        seq_frame
            .borrow_mut()
            .tick(Duration::from_secs_f64(t.dt_sec), &mut out);
        events_frame.borrow_mut().extend(out);
    });

    let mut out = SequencerEvents::new();
    seq.borrow_mut().enter(&mut out);
    for _ in 0..60 {
        scheduler.advance(1.0 / 60.0);
    }
    assert_eq!(seq.borrow().state(), ViewState::Loading);

    drop(registration);
    for _ in 0..600 {
        scheduler.advance(1.0 / 60.0);
    }
    assert_eq!(seq.borrow().state(), ViewState::Loading);
    assert!(!events.borrow().contains(&SequencerEvent::EnteredContent));
}
