use crate::constants::*;
use crate::dom;
use card_core::content::{
    HERO_SCROLL_HINT, HERO_STAR, HERO_STAR_STAGGER, HERO_SUBTITLE, HERO_TITLE_CHAR,
    HERO_TITLE_STAGGER, WELCOME_BUTTON, WELCOME_STAR, WELCOME_SUBTITLE, WELCOME_TITLE,
};
use card_core::tween::Entrance;
use web_sys as web;

struct Track {
    target: Option<web::Element>,
    entrance: Entrance,
}

/// Time-based entrance of a fixed set of elements. Each element is posed
/// from its entrance offset toward its resting layout.
pub struct Timeline {
    name: &'static str,
    tracks: Vec<Track>,
    elapsed: f32,
    end: f32,
}

impl Timeline {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tracks: Vec::new(),
            elapsed: 0.0,
            end: 0.0,
        }
    }

    pub fn add(mut self, target: Option<web::Element>, entrance: Entrance) -> Self {
        self.end = self.end.max(entrance.tween.end());
        self.tracks.push(Track { target, entrance });
        self
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.end
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.end);
        self.apply();
        if self.is_finished() {
            log::debug!("[intro] {} finished", self.name);
        }
    }

    /// Pose every element for the current instant.
    pub fn apply(&self) {
        for track in &self.tracks {
            let pose = track.entrance.pose_at(self.elapsed);
            dom::set_transform(track.target.as_ref(), &pose.css_transform(), pose.opacity);
        }
    }
}

/// Played as soon as the page mounts.
pub fn welcome(document: &web::Document) -> Timeline {
    let timeline = Timeline::new("welcome")
        .add(dom::by_id(document, WELCOME_STAR_ID), WELCOME_STAR)
        .add(dom::by_id(document, WELCOME_TITLE_ID), WELCOME_TITLE)
        .add(dom::by_id(document, WELCOME_SUBTITLE_ID), WELCOME_SUBTITLE)
        .add(dom::by_id(document, WELCOME_BUTTON_ID), WELCOME_BUTTON);
    timeline.apply();
    timeline
}

/// Played once the content is revealed.
pub fn hero(document: &web::Document, letters: usize) -> Timeline {
    let mut timeline = Timeline::new("hero");
    for (i, star) in dom::indexed(document, HERO_STAR_PREFIX, HERO_STAR_COUNT)
        .into_iter()
        .enumerate()
    {
        timeline = timeline.add(star, HERO_STAR.nth(i, HERO_STAR_STAGGER));
    }
    for (i, letter) in dom::indexed(document, HERO_CHAR_PREFIX, letters)
        .into_iter()
        .enumerate()
    {
        timeline = timeline.add(letter, HERO_TITLE_CHAR.nth(i, HERO_TITLE_STAGGER));
    }
    let timeline = timeline
        .add(dom::by_id(document, HERO_SUBTITLE_ID), HERO_SUBTITLE)
        .add(dom::by_id(document, HERO_SCROLL_ID), HERO_SCROLL_HINT);
    timeline.apply();
    timeline
}
