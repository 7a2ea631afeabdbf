use crate::constants::*;
use crate::dom::{self, Listener};
use card_core::playback::AudioSettings;
use card_core::{AudioPlaybackState, AutoplayOutcome, CardError, MediaElement, MediaEvent, PlaybackController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// [`MediaElement`] over an `<audio>` element.
pub struct HtmlAudio {
    element: web::HtmlAudioElement,
}

impl HtmlAudio {
    pub fn new(src: &str) -> Result<Self, CardError> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| CardError::MediaUnavailable(format!("{:?}", e)))?;
        element.set_loop(true);
        element.set_preload("auto");
        Ok(Self { element })
    }
}

impl MediaElement for HtmlAudio {
    fn play(&mut self) -> Result<(), CardError> {
        let promise: js_sys::Promise = self
            .element
            .play()
            .map_err(|e| CardError::AutoplayRejected(format!("{:?}", e)))?;
        // The browser settles the request later; a rejection only means no sound.
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("[audio] playback prevented: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause error: {:?}", e);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }
}

type Controller = Rc<RefCell<PlaybackController<HtmlAudio>>>;

struct Controls {
    pill: Option<web::Element>,
    toggle: Option<web::Element>,
    mute: Option<web::Element>,
    notes: Option<web::Element>,
    title: Option<web::Element>,
}

impl Controls {
    fn resolve(document: &web::Document) -> Self {
        Self {
            pill: dom::by_id(document, MUSIC_PILL_ID),
            toggle: dom::by_id(document, MUSIC_TOGGLE_ID),
            mute: dom::by_id(document, MUSIC_MUTE_ID),
            notes: dom::by_id(document, MUSIC_NOTES_ID),
            title: dom::by_id(document, MUSIC_TITLE_ID),
        }
    }

    fn render(&self, state: AudioPlaybackState) {
        if let Some(toggle) = &self.toggle {
            let (label, icon) = if state.is_playing() {
                ("Pause music", "\u{23f8}")
            } else {
                ("Play music", "\u{25b6}")
            };
            toggle.set_text_content(Some(icon));
            let _ = toggle.set_attribute("aria-label", label);
        }
        if let Some(mute) = &self.mute {
            let (label, icon) = if state.is_muted() {
                ("Unmute music", "\u{1f507}")
            } else {
                ("Mute music", "\u{1f50a}")
            };
            mute.set_text_content(Some(icon));
            let _ = mute.set_attribute("aria-label", label);
        }
        let animation = if state.is_playing() { "running" } else { "paused" };
        dom::set_style(self.notes.as_ref(), "animation-play-state", animation);
        let title = if state.is_playing() { "inline" } else { "none" };
        dom::set_style(self.title.as_ref(), "display", title);
    }
}

/// Background music: the element, its playback state and the controls that
/// reflect it.
pub struct MusicPlayer {
    controller: Controller,
    controls: Rc<Controls>,
    _listeners: Vec<Listener>,
}

impl MusicPlayer {
    pub fn mount(document: &web::Document, settings: &AudioSettings) -> Result<Self, CardError> {
        let media = HtmlAudio::new(settings.src)?;
        let target: web::EventTarget = media.element.clone().into();
        let controller: Controller = Rc::new(RefCell::new(PlaybackController::with_volume(
            media,
            settings.volume,
        )));
        let controls = Rc::new(Controls::resolve(document));
        controls.render(controller.borrow().state());

        let mut listeners = Vec::new();
        for event in MediaEvent::ALL {
            let controller = controller.clone();
            let controls = controls.clone();
            listeners.extend(Listener::new(&target, event.name(), move |_| {
                let Ok(mut c) = controller.try_borrow_mut() else {
                    log::warn!("[audio] {} event while busy; dropped", event.name());
                    return;
                };
                c.handle_event(event);
                controls.render(c.state());
            }));
        }
        if let Some(toggle) = &controls.toggle {
            let controller = controller.clone();
            listeners.extend(Listener::on_click(toggle, move || {
                if let Ok(mut c) = controller.try_borrow_mut() {
                    c.toggle_play();
                }
            }));
        }
        if let Some(mute) = &controls.mute {
            let controller = controller.clone();
            let controls_mute = controls.clone();
            listeners.extend(Listener::on_click(mute, move || {
                if let Ok(mut c) = controller.try_borrow_mut() {
                    c.toggle_mute();
                    controls_mute.render(c.state());
                }
            }));
        }

        log::info!("[audio] mounted {}", settings.src);
        Ok(Self {
            controller,
            controls,
            _listeners: listeners,
        })
    }

    /// The one automatic start, requested by the sequencer.
    pub fn autoplay(&self) -> AutoplayOutcome {
        match self.controller.try_borrow_mut() {
            Ok(mut c) => c.autoplay(),
            Err(_) => {
                log::warn!("[audio] controller busy; autoplay skipped");
                AutoplayOutcome::AlreadyStarted
            }
        }
    }

    pub fn show_controls(&self) {
        dom::set_style(self.controls.pill.as_ref(), "display", "flex");
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            if c.state().is_playing() {
                c.toggle_play();
            }
        }
        log::info!("[audio] unmounted");
    }
}
