use crate::constants::*;
use crate::dom;
use card_core::sequencer::SequencerVisuals;
use web_sys as web;

/// The welcome and loading overlays plus the content container they gate.
pub struct Overlays {
    welcome: Option<web::Element>,
    loading: Option<web::Element>,
    loading_text: Option<web::Element>,
    loading_progress: Option<web::Element>,
    content: Option<web::Element>,
}

impl Overlays {
    pub fn resolve(document: &web::Document) -> Self {
        Self {
            welcome: dom::by_id(document, WELCOME_ID),
            loading: dom::by_id(document, LOADING_ID),
            loading_text: dom::by_id(document, LOADING_TEXT_ID),
            loading_progress: dom::by_id(document, LOADING_PROGRESS_ID),
            content: dom::by_id(document, CONTENT_ID),
        }
    }

    pub fn welcome_button(&self) -> Option<web::Element> {
        self.welcome
            .as_ref()
            .and_then(|w| w.query_selector(&format!("#{}", WELCOME_BUTTON_ID)).ok().flatten())
    }

    pub fn apply(&self, v: &SequencerVisuals) {
        if v.welcome_visible {
            dom::set_style(self.welcome.as_ref(), "display", "flex");
            dom::set_transform(
                self.welcome.as_ref(),
                &format!("scale({:.4})", v.welcome_scale),
                v.welcome_opacity,
            );
        } else {
            dom::set_style(self.welcome.as_ref(), "display", "none");
        }

        if v.loading_visible {
            dom::set_style(self.loading.as_ref(), "display", "flex");
            dom::set_style(
                self.loading.as_ref(),
                "transform",
                &format!("translateY({:.3}%)", v.loading_offset_percent),
            );
            dom::set_style(
                self.loading_progress.as_ref(),
                "transform",
                &format!("scaleX({:.4})", v.loading_fill),
            );
            dom::set_transform(
                self.loading_text.as_ref(),
                &format!("translateY({:.2}px)", v.loading_text_offset_px),
                v.loading_text_opacity,
            );
        } else {
            dom::set_style(self.loading.as_ref(), "display", "none");
        }

        let visibility = if v.content_visible { "visible" } else { "hidden" };
        dom::set_style(self.content.as_ref(), "visibility", visibility);
    }

    /// The welcome overlay leaves the document once loading starts.
    pub fn remove_welcome(&mut self) {
        dom::remove(self.welcome.take().as_ref());
    }

    /// The loading overlay leaves the document once content is shown.
    pub fn remove_loading(&mut self) {
        dom::remove(self.loading.take().as_ref());
        self.loading_text = None;
        self.loading_progress = None;
    }
}
