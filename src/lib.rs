#![cfg(target_arch = "wasm32")]
use card_core::{
    AutoplayOutcome, CardConfig, FrameScheduler, PageAction, PageLifecycle, Registration,
    SequencerEvent, SequencerEvents, ViewSequencer,
};
use card_core::content::CardContent;
use card_core::sequencer::Phase;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod frame;
mod intro;
mod overlay;
mod page;
mod scroll;
mod snow;

use audio::MusicPlayer;
use dom::Listener;
use frame::FrameLoop;
use overlay::Overlays;
use scroll::ScrollDriver;
use snow::SnowLayer;

/// What the sequencer drives. Shared between its frame callback and the
/// enter button.
struct Stage {
    sequencer: ViewSequencer,
    overlays: Overlays,
    music: Option<MusicPlayer>,
    hero_intro: Option<Registration>,
    scroll: Option<ScrollDriver>,
}

impl Drop for Stage {
    fn drop(&mut self) {
        log::debug!(
            "[sequencer] stage dropped; hero intro {}, scroll driver {}",
            self.hero_intro.is_some(),
            self.scroll.is_some()
        );
    }
}

struct Context {
    document: web::Document,
    scheduler: FrameScheduler,
    content: CardContent,
    /// False when no animation frames are available; transitions then settle
    /// immediately.
    animated: bool,
}

/// Everything mounted for the lifetime of the page.
struct Card {
    _enter: Option<Listener>,
    _sequence: Registration,
    _welcome_intro: Registration,
    _snow: Option<SnowLayer>,
    _stage: Rc<RefCell<Stage>>,
    _frame_loop: Option<FrameLoop>,
}

thread_local! {
    static CARD: RefCell<Option<Card>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("card already mounted");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = CardConfig::default();
    page::render(&document, &config)?;

    let scheduler = FrameScheduler::new();
    let frame_loop = match FrameLoop::start(scheduler.clone()) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[frame] no animation frames; transitions will settle at once: {:?}", e);
            None
        }
    };

    let snow = match SnowLayer::mount(&document, &scheduler, config.snow.clone()) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[snow] not mounted: {}", e);
            None
        }
    };
    let music = match MusicPlayer::mount(&document, &config.audio) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[audio] not mounted: {}", e);
            None
        }
    };

    let overlays = Overlays::resolve(&document);
    let sequencer = ViewSequencer::new(config.timings.clone());
    overlays.apply(&sequencer.visuals());
    let welcome_button = overlays.welcome_button();

    let ctx = Rc::new(Context {
        document: document.clone(),
        scheduler: scheduler.clone(),
        content: config.content,
        animated: frame_loop.is_some(),
    });
    let stage = Rc::new(RefCell::new(Stage {
        sequencer,
        overlays,
        music,
        hero_intro: None,
        scroll: None,
    }));

    let welcome_intro = play_intro(intro::welcome(&document), &ctx);

    let stage_frame = stage.clone();
    let ctx_frame = ctx.clone();
    let sequence = scheduler.on_frame(move |t| {
        let Ok(mut stage) = stage_frame.try_borrow_mut() else {
            return;
        };
        if matches!(stage.sequencer.phase(), Phase::Idle | Phase::Done) {
            return;
        }
        let mut events = SequencerEvents::new();
        stage
            .sequencer
            .tick(Duration::from_secs_f64(t.dt_sec.max(0.0)), &mut events);
        let visuals = stage.sequencer.visuals();
        stage.overlays.apply(&visuals);
        react(&mut stage, &events, &ctx_frame);
    });

    let stage_enter = stage.clone();
    let ctx_enter = ctx.clone();
    let enter = welcome_button.and_then(|button| {
        Listener::on_click(&button, move || {
            let Ok(mut stage) = stage_enter.try_borrow_mut() else {
                return;
            };
            let mut events = SequencerEvents::new();
            if !stage.sequencer.enter(&mut events) {
                return;
            }
            if !ctx_enter.animated {
                stage.sequencer.settle(&mut events);
            }
            let visuals = stage.sequencer.visuals();
            stage.overlays.apply(&visuals);
            react(&mut stage, &events, &ctx_enter);
        })
    });
    if enter.is_none() {
        log::warn!("[sequencer] no enter button; card stays on the welcome screen");
    }

    CARD.with(|card| {
        *card.borrow_mut() = Some(Card {
            _enter: enter,
            _sequence: sequence,
            _welcome_intro: welcome_intro,
            _snow: snow,
            _stage: stage,
            _frame_loop: frame_loop,
        });
    });
    wire_page_lifecycle(&window);
    log::info!("card mounted");
    Ok(())
}

fn play_intro(mut timeline: intro::Timeline, ctx: &Context) -> Registration {
    if !ctx.animated {
        timeline.tick(f32::MAX);
    }
    ctx.scheduler
        .on_frame(move |t| timeline.tick(t.dt_sec as f32))
}

fn react(stage: &mut Stage, events: &SequencerEvents, ctx: &Context) {
    for event in events {
        match event {
            SequencerEvent::WelcomeExitStarted => {
                log::debug!("[sequencer] welcome exit");
            }
            SequencerEvent::EnteredLoading => stage.overlays.remove_welcome(),
            SequencerEvent::StartAudio => {
                if let Some(music) = &stage.music {
                    if let AutoplayOutcome::Requested = music.autoplay() {
                        log::info!("[audio] autoplay requested");
                    }
                }
            }
            SequencerEvent::LoadingExitStarted => {
                log::debug!("[sequencer] loading exit");
            }
            SequencerEvent::EnteredContent => {
                stage.overlays.remove_loading();
                if let Some(music) = &stage.music {
                    music.show_controls();
                }
                let letters = page::hero_letter_count(&ctx.content);
                stage.hero_intro = Some(play_intro(intro::hero(&ctx.document, letters), ctx));
                let mounted = ScrollDriver::mount(
                    &ctx.document,
                    &ctx.scheduler,
                    &ctx.content,
                    ctx.animated,
                );
                match mounted {
                    Ok(driver) => stage.scroll = Some(driver),
                    Err(e) => log::warn!("[scroll] not mounted: {:?}", e),
                }
            }
        }
    }
}

// The card lives until the page is discarded. A page kept in the
// back/forward cache stays mounted so it works again once restored.
fn wire_page_lifecycle(window: &web::Window) {
    let lifecycle = Rc::new(RefCell::new(PageLifecycle::new()));

    let hide_lifecycle = lifecycle.clone();
    let on_pagehide = Closure::<dyn FnMut(web::Event)>::new(move |ev: web::Event| {
        let persisted = persisted(&ev);
        match hide_lifecycle.borrow_mut().hide(persisted) {
            PageAction::Unmount => {
                let card = CARD.with(|card| card.borrow_mut().take());
                drop(card);
                log::info!("card unmounted");
            }
            PageAction::Freeze => log::info!("[page] kept in back/forward cache"),
            PageAction::Keep | PageAction::Resume => {}
        }
    });

    let on_pageshow = Closure::<dyn FnMut(web::Event)>::new(move |ev: web::Event| {
        if let PageAction::Resume = lifecycle.borrow_mut().show(persisted(&ev)) {
            log::info!("[page] restored from back/forward cache");
        }
    });

    for (name, cb) in [("pagehide", &on_pagehide), ("pageshow", &on_pageshow)] {
        if let Err(e) = window.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
            log::error!("[dom] add {} listener error: {:?}", name, e);
        }
    }
    on_pagehide.forget();
    on_pageshow.forget();
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false)
}
