//! Easing curves used by the overlays, intro timelines and scroll smoothing.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2InOut,
    Power3Out,
    Power4InOut,
    /// Overshooting ease-out; the parameter controls the overshoot amount.
    BackOut(f32),
    /// Exponential settle used for wheel smoothing.
    ExpoSettle,
}

impl Ease {
    /// Standard overshoot used across the page.
    pub const BACK_OUT: Ease = Ease::BackOut(1.7);

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2In => t * t * t,
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + u * u * ((s + 1.0) * u + s)
            }
            Self::ExpoSettle => (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0),
        }
    }
}
