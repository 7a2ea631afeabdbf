//! Scroll smoothing and scroll-linked progress.

use crate::constants::{SCRUB_LAG_SEC, SMOOTH_SCROLL_DURATION_SEC};
use crate::ease::Ease;

/// Wheel smoothing: input moves a target, the visible position eases toward
/// it over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    from: f64,
    elapsed: f32,
    duration: f32,
    limit: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let position = position.clamp(0.0, limit);
        Self {
            current: position,
            target: position,
            from: position,
            elapsed: 0.0,
            duration: SMOOTH_SCROLL_DURATION_SEC,
            limit,
            animating: false,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether a wheel gesture is taken over by the smoother. Zoom gestures
    /// (ctrl+wheel, trackpad pinch) and mostly horizontal gestures stay with
    /// the browser.
    pub fn accepts_wheel(ctrl_key: bool, delta_x: f64, delta_y: f64) -> bool {
        !ctrl_key && delta_y != 0.0 && delta_y.abs() >= delta_x.abs()
    }

    pub fn scroll_by(&mut self, delta: f64) {
        let target = (self.target + delta).clamp(0.0, self.limit);
        if (target - self.current).abs() < f64::EPSILON {
            return;
        }
        self.target = target;
        self.from = self.current;
        self.elapsed = 0.0;
        self.animating = true;
    }

    /// Adopt a position the browser reached on its own (scrollbar, keys,
    /// touch). Ignored while a smoothed scroll is in flight.
    pub fn sync(&mut self, native: f64) {
        if self.animating {
            return;
        }
        let p = native.clamp(0.0, self.limit);
        self.current = p;
        self.target = p;
        self.from = p;
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Advance the animation; returns the new position while moving.
    pub fn tick(&mut self, dt_sec: f32) -> Option<f64> {
        if !self.animating {
            return None;
        }
        self.elapsed += dt_sec.max(0.0);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            let k = Ease::ExpoSettle.apply(t) as f64;
            self.current = self.from + (self.target - self.from) * k;
        }
        Some(self.current)
    }
}

/// A point on an element paired with a line on the viewport, both as
/// fractions (0 = top, 0.5 = center, 1 = bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const TOP_TOP: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP_BOTTOM: Anchor = Anchor::new(0.0, 1.0);
    pub const BOTTOM_TOP: Anchor = Anchor::new(1.0, 0.0);
    pub const CENTER_CENTER: Anchor = Anchor::new(0.5, 0.5);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Element top meets the viewport line at `percent` from the top.
    pub const fn top_at(percent: f64) -> Self {
        Self::new(0.0, percent / 100.0)
    }
}

/// Document-space box of a trigger element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    /// Box as laid out before a `translateY` of `offset_y` px was applied.
    pub fn without_translate(self, offset_y: f64) -> Self {
        Self {
            top: self.top - offset_y,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

impl TriggerRange {
    pub fn resolve(el: ElementBox, viewport_height: f64, start: Anchor, end: Anchor) -> Self {
        let at = |a: Anchor| el.top + el.height * a.element - viewport_height * a.viewport;
        Self {
            start: at(start),
            end: at(end),
        }
    }

    pub fn has_started(&self, scroll: f64) -> bool {
        scroll >= self.start
    }

    pub fn progress(&self, scroll: f64) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0) as f32
    }
}

/// Lagged follower of a scroll-linked progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct Scrub {
    value: f32,
    target: f32,
    lag_sec: f32,
}

impl Default for Scrub {
    fn default() -> Self {
        Self::new(SCRUB_LAG_SEC)
    }
}

impl Scrub {
    pub fn new(lag_sec: f32) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            lag_sec: lag_sec.max(0.0),
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        if self.lag_sec <= 0.0 {
            self.value = self.target;
            return self.value;
        }
        // Time constant of a quarter of the lag: ~98% caught up after `lag_sec`.
        let alpha = 1.0 - (-dt_sec.max(0.0) * 4.0 / self.lag_sec).exp();
        self.value += (self.target - self.value) * alpha;
        if (self.target - self.value).abs() < 1e-4 {
            self.value = self.target;
        }
        self.value
    }

    /// Jump straight to `target`, skipping the lag.
    pub fn snap(&mut self, target: f32) -> f32 {
        self.set_target(target);
        self.value = self.target;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Progress of item `index` out of `count` when a scrubbed sequence staggers
/// its items `each` seconds apart, every item animating for `duration`.
pub fn stagger_progress(progress: f32, index: usize, count: usize, each: f32, duration: f32) -> f32 {
    if count == 0 || index >= count {
        return 0.0;
    }
    let duration = duration.max(f32::EPSILON);
    let total = duration + each.max(0.0) * (count - 1) as f32;
    let local = progress.clamp(0.0, 1.0) * total - each.max(0.0) * index as f32;
    (local / duration).clamp(0.0, 1.0)
}
