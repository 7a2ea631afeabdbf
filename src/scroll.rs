use crate::constants::*;
use crate::dom::{self, Listener};
use crate::page;
use card_core::constants::{
    HERO_PARALLAX_PERCENT, MESSAGE_CHAR_DURATION_SEC, MESSAGE_CHAR_MIN_OPACITY,
    MESSAGE_CHAR_STAGGER_SEC, NEW_YEAR_PARALLAX_PERCENT,
};
use card_core::content::{
    CardContent, REVEAL_CARD, REVEAL_CARD_STAGGER, REVEAL_DECOR, REVEAL_DECOR_STAGGER, REVEAL_PHOTO,
    REVEAL_RISE, REVEAL_RISE_LARGE, REVEAL_RISE_SMALL, REVEAL_YEAR,
};
use card_core::scroll::{stagger_progress, Anchor, Scrub, SmoothScroll, TriggerRange};
use card_core::tween::{Entrance, Pose, Reveal};
use card_core::{FrameScheduler, FrameTime, Registration};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const LINE_HEIGHT_PX: f64 = 16.0;

fn viewport_height() -> f64 {
    dom::viewport_size().map(|(_, h)| h).unwrap_or(0.0)
}

fn scroll_limit(document: &web::Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (content - viewport_height()).max(0.0)
}

fn range_of(trigger: Option<&web::Element>, vh: f64, start: Anchor, end: Anchor) -> TriggerRange {
    let el = trigger.map(dom::document_box).unwrap_or_default();
    TriggerRange::resolve(el, vh, start, end)
}

/// Scrubbed vertical offset of a background, in percent of its own height.
struct Parallax {
    target: Option<web::Element>,
    trigger: Option<web::Element>,
    start: Anchor,
    end: Anchor,
    percent: f32,
    range: TriggerRange,
    scrub: Scrub,
}

impl Parallax {
    fn new(
        document: &web::Document,
        target: &str,
        trigger: &str,
        (start, end): (Anchor, Anchor),
        percent: f32,
    ) -> Self {
        Self {
            target: dom::by_id(document, target),
            trigger: dom::by_id(document, trigger),
            start,
            end,
            percent,
            range: TriggerRange { start: 0.0, end: 0.0 },
            scrub: Scrub::default(),
        }
    }

    fn layout(&mut self, vh: f64) {
        self.range = range_of(self.trigger.as_ref(), vh, self.start, self.end);
    }

    fn update(&mut self, scroll: f64, dt: f32) {
        self.scrub.set_target(self.range.progress(scroll));
        let before = self.scrub.value();
        let k = self.scrub.tick(dt);
        if k != before {
            self.apply(k);
        }
    }

    fn settle(&mut self, scroll: f64) {
        let k = self.scrub.snap(self.range.progress(scroll));
        self.apply(k);
    }

    fn apply(&self, k: f32) {
        dom::set_style(
            self.target.as_ref(),
            "transform",
            &format!("translateY({:.3}%)", self.percent * k),
        );
    }
}

/// Message text brightening letter by letter as its section scrolls in.
struct LetterReveal {
    letters: Vec<Option<web::Element>>,
    trigger: Option<web::Element>,
    range: TriggerRange,
    scrub: Scrub,
    shown: Option<f32>,
}

impl LetterReveal {
    fn new(document: &web::Document, count: usize) -> Self {
        Self {
            letters: dom::indexed(document, MESSAGE_CHAR_PREFIX, count),
            trigger: dom::by_id(document, MESSAGE_ID),
            range: TriggerRange { start: 0.0, end: 0.0 },
            scrub: Scrub::default(),
            shown: None,
        }
    }

    fn layout(&mut self, vh: f64) {
        self.range = range_of(
            self.trigger.as_ref(),
            vh,
            Anchor::top_at(70.0),
            Anchor::CENTER_CENTER,
        );
    }

    fn update(&mut self, scroll: f64, dt: f32) {
        self.scrub.set_target(self.range.progress(scroll));
        let p = self.scrub.tick(dt);
        self.apply(p);
    }

    // Fully lit: nothing will brighten the letters later.
    fn settle(&mut self) {
        let p = self.scrub.snap(1.0);
        self.apply(p);
    }

    fn apply(&mut self, p: f32) {
        if self.shown == Some(p) {
            return;
        }
        self.shown = Some(p);
        let count = self.letters.len();
        for (i, letter) in self.letters.iter().enumerate() {
            let k = stagger_progress(
                p,
                i,
                count,
                MESSAGE_CHAR_STAGGER_SEC,
                MESSAGE_CHAR_DURATION_SEC,
            );
            let opacity = MESSAGE_CHAR_MIN_OPACITY + (1.0 - MESSAGE_CHAR_MIN_OPACITY) * k;
            let rgb: Vec<String> = MESSAGE_CHAR_DIM_RGB
                .iter()
                .zip(MESSAGE_CHAR_LIT_RGB.iter())
                .map(|(a, b)| format!("{:.0}", a + (b - a) * k))
                .collect();
            dom::set_style(letter.as_ref(), "opacity", &format!("{:.3}", opacity));
            dom::set_style(letter.as_ref(), "color", &format!("rgb({})", rgb.join(",")));
        }
    }
}

/// Element that plays its entrance once its trigger line is crossed and
/// reverses when scrolled back above it.
struct Toggle {
    target: Option<web::Element>,
    trigger: Option<web::Element>,
    // The target is its own trigger, so its measured box carries the
    // reveal offset.
    self_triggered: bool,
    start: Anchor,
    range: TriggerRange,
    reveal: Reveal,
    shown: Option<Pose>,
}

impl Toggle {
    fn new(
        target: Option<web::Element>,
        trigger: Option<web::Element>,
        start_percent: f64,
        entrance: Entrance,
    ) -> Self {
        Self {
            target,
            trigger,
            self_triggered: false,
            start: Anchor::top_at(start_percent),
            range: TriggerRange { start: 0.0, end: 0.0 },
            reveal: Reveal::new(entrance),
            shown: None,
        }
    }

    fn triggered_by_itself(
        target: Option<web::Element>,
        start_percent: f64,
        entrance: Entrance,
    ) -> Self {
        Self {
            self_triggered: true,
            ..Self::new(target.clone(), target, start_percent, entrance)
        }
    }

    fn layout(&mut self, vh: f64) {
        let mut el = self.trigger.as_ref().map(dom::document_box).unwrap_or_default();
        if self.self_triggered {
            let offset = self.shown.map(|p| p.translate_y_px).unwrap_or(0.0);
            el = el.without_translate(offset as f64);
        }
        self.range = TriggerRange::resolve(el, vh, self.start, Anchor::BOTTOM_TOP);
    }

    fn update(&mut self, scroll: f64, dt: f32) {
        self.reveal.set_active(self.range.has_started(scroll));
        self.reveal.tick(dt);
        self.apply();
    }

    fn settle(&mut self) {
        self.reveal.finish();
        self.apply();
    }

    fn apply(&mut self) {
        let pose = self.reveal.pose();
        if self.shown != Some(pose) {
            self.shown = Some(pose);
            dom::set_transform(self.target.as_ref(), &pose.css_transform(), pose.opacity);
        }
    }
}

fn toggles(document: &web::Document, wishes: usize) -> Vec<Toggle> {
    let by_id = |id: &str| dom::by_id(document, id);
    let mut out = Vec::new();

    for (i, decor) in dom::indexed(document, MESSAGE_DECOR_PREFIX, MESSAGE_DECOR_COUNT)
        .into_iter()
        .enumerate()
    {
        out.push(Toggle::new(
            decor,
            by_id(MESSAGE_ID),
            80.0,
            REVEAL_DECOR.nth(i, REVEAL_DECOR_STAGGER),
        ));
    }
    out.push(Toggle::triggered_by_itself(
        by_id(MESSAGE_SIGNATURE_ID),
        90.0,
        REVEAL_RISE_LARGE,
    ));

    out.push(Toggle::new(by_id(PHOTO_FRAME_ID), by_id(PHOTO_ID), 75.0, REVEAL_PHOTO));
    out.push(Toggle::new(by_id(PHOTO_TITLE_ID), by_id(PHOTO_ID), 80.0, REVEAL_RISE));
    out.push(Toggle::new(
        by_id(PHOTO_CAPTION_ID),
        by_id(PHOTO_ID),
        70.0,
        REVEAL_RISE_SMALL.after(0.2),
    ));

    out.push(Toggle::new(by_id(WISHES_TITLE_ID), by_id(WISHES_ID), 80.0, REVEAL_RISE_LARGE));
    for (i, card) in dom::indexed(document, WISH_PREFIX, wishes).into_iter().enumerate() {
        out.push(Toggle::new(
            card,
            by_id(WISHES_ID),
            80.0,
            REVEAL_CARD.nth(i, REVEAL_CARD_STAGGER),
        ));
    }

    let new_year = || by_id(NEW_YEAR_ID);
    out.push(Toggle::new(by_id(NEW_YEAR_HEADER_ID), new_year(), 80.0, REVEAL_RISE));
    out.push(Toggle::new(
        by_id(NEW_YEAR_TITLE_ID),
        new_year(),
        75.0,
        REVEAL_RISE_LARGE.after(0.1),
    ));
    out.push(Toggle::new(by_id(NEW_YEAR_YEAR_ID), new_year(), 70.0, REVEAL_YEAR));
    out.push(Toggle::new(
        by_id(NEW_YEAR_DESC_ID),
        new_year(),
        65.0,
        REVEAL_RISE.after(0.3),
    ));
    out.push(Toggle::new(
        by_id(NEW_YEAR_BUTTON_ID),
        new_year(),
        60.0,
        REVEAL_RISE_SMALL.after(0.4),
    ));
    out
}

struct Effects {
    parallax: Vec<Parallax>,
    letters: LetterReveal,
    toggles: Vec<Toggle>,
}

impl Effects {
    fn new(document: &web::Document, content: &CardContent) -> Self {
        Self {
            parallax: vec![
                Parallax::new(
                    document,
                    HERO_BG_ID,
                    HERO_ID,
                    (Anchor::TOP_TOP, Anchor::BOTTOM_TOP),
                    HERO_PARALLAX_PERCENT,
                ),
                Parallax::new(
                    document,
                    NEW_YEAR_BG_ID,
                    NEW_YEAR_ID,
                    (Anchor::TOP_BOTTOM, Anchor::BOTTOM_TOP),
                    NEW_YEAR_PARALLAX_PERCENT,
                ),
            ],
            letters: LetterReveal::new(document, page::message_letter_count(content)),
            toggles: toggles(document, content.wishes.len()),
        }
    }

    fn layout(&mut self) {
        let vh = viewport_height();
        for p in &mut self.parallax {
            p.layout(vh);
        }
        self.letters.layout(vh);
        for t in &mut self.toggles {
            t.layout(vh);
        }
    }

    fn update(&mut self, scroll: f64, dt: f32) {
        for p in &mut self.parallax {
            p.update(scroll, dt);
        }
        self.letters.update(scroll, dt);
        for t in &mut self.toggles {
            t.update(scroll, dt);
        }
    }

    /// Final state for pages without animation frames: backgrounds at their
    /// current offset, every text and card revealed.
    fn settle(&mut self, scroll: f64) {
        self.layout();
        for p in &mut self.parallax {
            p.settle(scroll);
        }
        self.letters.settle();
        for t in &mut self.toggles {
            t.settle();
        }
    }
}

struct DriverState {
    smooth: SmoothScroll,
    effects: Effects,
    layout_dirty: bool,
}

/// Smoothed wheel scrolling plus every scroll-linked effect of the content
/// sections. Mounted once the content is shown; dropping it stops the frame
/// callback and removes its listeners.
pub struct ScrollDriver {
    _frame: Registration,
    _listeners: Vec<Listener>,
}

impl ScrollDriver {
    pub fn mount(
        document: &web::Document,
        scheduler: &FrameScheduler,
        content: &CardContent,
        animated: bool,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let start = window.scroll_y().unwrap_or(0.0);
        let mut effects = Effects::new(document, content);
        if !animated {
            effects.settle(start);
            log::info!("[scroll] no animation frames; effects settled");
        }
        let state = Rc::new(RefCell::new(DriverState {
            smooth: SmoothScroll::new(start, scroll_limit(document)),
            effects,
            layout_dirty: true,
        }));

        let mut listeners = Vec::new();

        let wheel_state = state.clone();
        listeners.extend(Listener::non_passive(&window, "wheel", move |ev| {
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            // Zoom and horizontal gestures stay with the browser.
            if !SmoothScroll::accepts_wheel(wheel.ctrl_key(), wheel.delta_x(), wheel.delta_y())
            {
                return;
            }
            let delta = match wheel.delta_mode() {
                web::WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * LINE_HEIGHT_PX,
                web::WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * viewport_height(),
                _ => wheel.delta_y(),
            };
            ev.prevent_default();
            wheel_state.borrow_mut().smooth.scroll_by(delta);
        }));

        let scroll_state = state.clone();
        let scroll_window = window.clone();
        listeners.extend(Listener::new(&window, "scroll", move |_| {
            if let Ok(y) = scroll_window.scroll_y() {
                scroll_state.borrow_mut().smooth.sync(y);
            }
        }));

        let resize_state = state.clone();
        let resize_document = document.clone();
        listeners.extend(Listener::new(&window, "resize", move |_| {
            let mut s = resize_state.borrow_mut();
            s.smooth.set_limit(scroll_limit(&resize_document));
            s.layout_dirty = true;
        }));

        let frame_window = window.clone();
        let frame = scheduler.on_frame(move |t: FrameTime| {
            let dt = t.dt_sec as f32;
            let mut s = state.borrow_mut();
            if let Some(y) = s.smooth.tick(dt) {
                frame_window.scroll_to_with_x_and_y(0.0, y);
            }
            if s.layout_dirty {
                s.layout_dirty = false;
                s.effects.layout();
            }
            let scroll = if s.smooth.is_animating() {
                s.smooth.position()
            } else {
                frame_window.scroll_y().unwrap_or_else(|_| s.smooth.position())
            };
            s.effects.update(scroll, dt);
        });

        log::info!("[scroll] driver mounted; start={:.0}", start);
        Ok(Self {
            _frame: frame,
            _listeners: listeners,
        })
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        log::info!("[scroll] driver unmounted");
    }
}
