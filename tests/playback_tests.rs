// Host-side tests for the background music state.

use card_core::{AutoplayOutcome, CardError, MediaElement, MediaEvent, PlaybackController};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Play,
    Pause,
    Muted(bool),
    Volume(f64),
}

/// Records every call; optionally refuses to play.
#[derive(Default)]
struct FakeMedia {
    calls: Vec<Call>,
    refuse: bool,
}

impl MediaElement for FakeMedia {
    fn play(&mut self) -> Result<(), CardError> {
        self.calls.push(Call::Play);
        if self.refuse {
            Err(CardError::AutoplayRejected("NotAllowedError".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(Call::Muted(muted));
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(Call::Volume(volume));
    }
}

fn plays(c: &PlaybackController<FakeMedia>) -> usize {
    c.media().calls.iter().filter(|c| **c == Call::Play).count()
}

#[test]
fn autoplay_sets_volume_then_plays_once() {
    let mut c = PlaybackController::new(FakeMedia::default());
    assert_eq!(c.autoplay(), AutoplayOutcome::Requested);
    assert_eq!(c.media().calls, vec![Call::Volume(0.5), Call::Play]);
    assert!(c.state().has_auto_started());

    assert_eq!(c.autoplay(), AutoplayOutcome::AlreadyStarted);
    assert_eq!(plays(&c), 1);
}

#[test]
fn rejected_autoplay_is_not_retried() {
    let media = FakeMedia {
        refuse: true,
        ..FakeMedia::default()
    };
    let mut c = PlaybackController::new(media);
    assert!(matches!(c.autoplay(), AutoplayOutcome::Rejected(CardError::AutoplayRejected(_))));
    assert!(c.state().has_auto_started());
    assert!(!c.state().is_playing());

    for _ in 0..5 {
        assert_eq!(c.autoplay(), AutoplayOutcome::AlreadyStarted);
    }
    assert_eq!(plays(&c), 1);
}

#[test]
fn is_playing_only_follows_media_events() {
    let mut c = PlaybackController::new(FakeMedia::default());
    c.autoplay();
    assert!(!c.state().is_playing());

    c.handle_event(MediaEvent::Play);
    assert!(c.state().is_playing());
    c.handle_event(MediaEvent::Ended);
    assert!(!c.state().is_playing());
    c.handle_event(MediaEvent::Play);
    c.handle_event(MediaEvent::Pause);
    assert!(!c.state().is_playing());
}

#[test]
fn toggle_play_twice_restores_the_state() {
    let mut c = PlaybackController::new(FakeMedia::default());
    let initial = c.state().is_playing();

    c.toggle_play();
    assert_eq!(c.media().calls.last(), Some(&Call::Play));
    c.handle_event(MediaEvent::Play);
    assert!(c.state().is_playing());

    c.toggle_play();
    assert_eq!(c.media().calls.last(), Some(&Call::Pause));
    c.handle_event(MediaEvent::Pause);
    assert_eq!(c.state().is_playing(), initial);
}

#[test]
fn manual_play_still_works_after_rejected_autoplay() {
    let media = FakeMedia {
        refuse: true,
        ..FakeMedia::default()
    };
    let mut c = PlaybackController::new(media);
    c.autoplay();
    c.toggle_play();
    assert_eq!(plays(&c), 2);
    assert!(!c.state().is_playing());
}

#[test]
fn toggle_mute_flips_and_applies() {
    let mut c = PlaybackController::new(FakeMedia::default());
    assert!(!c.state().is_muted());
    c.toggle_mute();
    assert!(c.state().is_muted());
    c.toggle_mute();
    assert!(!c.state().is_muted());
    assert_eq!(c.media().calls, vec![Call::Muted(true), Call::Muted(false)]);
}

#[test]
fn volume_is_clamped() {
    let mut c = PlaybackController::with_volume(FakeMedia::default(), 3.0);
    c.autoplay();
    assert_eq!(c.media().calls.first(), Some(&Call::Volume(1.0)));
}

#[test]
fn media_event_names_round_trip() {
    for e in MediaEvent::ALL {
        assert_eq!(MediaEvent::from_name(e.name()), Some(e));
    }
    assert_eq!(MediaEvent::from_name("timeupdate"), None);
}
