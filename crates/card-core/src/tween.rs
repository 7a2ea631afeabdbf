//! Time-based entrance animations.
//!
//! A [`Tween`] maps elapsed seconds to eased progress in [0, 1]. A [`Pose`] is
//! the offset an element animates *from*; at progress 1 it is back at its
//! natural layout. [`Reveal`] plays a tween forward while its trigger is
//! active and backwards once the trigger is left again.

use crate::ease::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub const fn new(delay: f32, duration: f32, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
        }
    }

    /// Copy of this tween shifted for the `index`-th item of a stagger.
    pub fn nth(self, index: usize, stagger: f32) -> Self {
        Self {
            delay: self.delay + stagger * index as f32,
            ..self
        }
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }

    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        self.ease.apply((elapsed - self.delay) / self.duration)
    }
}

/// Offset of an element relative to its resting layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translate_y_px: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub rotate_x_deg: f32,
    pub opacity: f32,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        translate_y_px: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
        rotate_x_deg: 0.0,
        opacity: 1.0,
    };

    /// Hidden and shifted down by `px`.
    pub const fn rise(px: f32) -> Pose {
        Pose {
            translate_y_px: px,
            opacity: 0.0,
            ..Pose::IDENTITY
        }
    }

    /// Hidden and shrunk to `scale`.
    pub const fn grow(scale: f32) -> Pose {
        Pose {
            scale,
            opacity: 0.0,
            ..Pose::IDENTITY
        }
    }

    /// Interpolate from `self` (t = 0) to the identity pose (t = 1). `t` may
    /// overshoot for back-out easing.
    pub fn toward_identity(&self, t: f32) -> Pose {
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            translate_y_px: lerp(self.translate_y_px, 0.0),
            scale: lerp(self.scale, 1.0),
            rotate_deg: lerp(self.rotate_deg, 0.0),
            rotate_x_deg: lerp(self.rotate_x_deg, 0.0),
            opacity: lerp(self.opacity, 1.0).clamp(0.0, 1.0),
        }
    }

    pub fn css_transform(&self) -> String {
        let mut out = format!(
            "translateY({:.2}px) scale({:.4})",
            self.translate_y_px,
            self.scale.max(0.0)
        );
        if self.rotate_deg != 0.0 {
            out.push_str(&format!(" rotate({:.2}deg)", self.rotate_deg));
        }
        if self.rotate_x_deg != 0.0 {
            out.push_str(&format!(" rotateX({:.2}deg)", self.rotate_x_deg));
        }
        out
    }
}

/// One animated element of an entrance timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub tween: Tween,
}

impl Entrance {
    pub const fn new(from: Pose, tween: Tween) -> Self {
        Self { from, tween }
    }

    pub fn nth(self, index: usize, stagger: f32) -> Self {
        Self {
            tween: self.tween.nth(index, stagger),
            ..self
        }
    }

    /// Same entrance, started `delay` seconds later.
    pub fn after(self, delay: f32) -> Self {
        Self {
            tween: Tween {
                delay: self.tween.delay + delay,
                ..self.tween
            },
            ..self
        }
    }

    pub fn pose_at(&self, elapsed: f32) -> Pose {
        self.from.toward_identity(self.tween.progress(elapsed))
    }
}

/// Toggle-action reveal: plays forward when its trigger is entered, reverses
/// when the trigger is left backwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    entrance: Entrance,
    // Seconds along the tween timeline, delay included.
    clock: f32,
    forward: bool,
}

impl Reveal {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            clock: 0.0,
            forward: false,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active != self.forward {
            self.forward = active;
            if !active {
                // Reverse from where the tween visibly is, skipping the delay.
                self.clock = self.clock.min(self.entrance.tween.end());
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.forward
    }

    /// Play forward and land on the resting pose at once.
    pub fn finish(&mut self) {
        self.forward = true;
        self.clock = self.entrance.tween.end();
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let end = self.entrance.tween.end();
        if self.forward {
            self.clock = (self.clock + dt_sec).min(end);
        } else {
            self.clock = (self.clock - dt_sec).max(0.0);
            if self.clock < self.entrance.tween.delay {
                self.clock = 0.0;
            }
        }
    }

    pub fn progress(&self) -> f32 {
        self.entrance.tween.progress(self.clock)
    }

    pub fn pose(&self) -> Pose {
        self.entrance.pose_at(self.clock)
    }
}
