use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::debug!("[dom] missing #{}", id);
    }
    el
}

/// Event listener that removes itself from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] add {} listener error: {:?}", event, e);
                None
            }
        }
    }

    /// Listener allowed to call `prevent_default` on scroll-blocking events.
    pub fn non_passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] add {} listener error: {:?}", event, e);
                None
            }
        }
    }

    pub fn on_click(el: &web::Element, mut handler: impl FnMut() + 'static) -> Option<Self> {
        Self::new(el, "click", move |_| handler())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Size the canvas backing store to the CSS viewport, one pixel per CSS pixel
/// so simulation coordinates and canvas coordinates agree.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<(f64, f64)> {
    let (width, height) = viewport_size()?;
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
    Some((width, height))
}

pub fn set_style(el: Option<&web::Element>, property: &str, value: &str) {
    if let Some(html) = el.and_then(|e| e.dyn_ref::<web::HtmlElement>()) {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_transform(el: Option<&web::Element>, transform: &str, opacity: f32) {
    if let Some(html) = el.and_then(|e| e.dyn_ref::<web::HtmlElement>()) {
        let style = html.style();
        let _ = style.set_property("transform", transform);
        let _ = style.set_property("opacity", &format!("{:.3}", opacity));
    }
}

pub fn remove(el: Option<&web::Element>) {
    if let Some(e) = el {
        e.remove();
    }
}

/// Document-space top and height of an element.
pub fn document_box(el: &web::Element) -> card_core::scroll::ElementBox {
    let rect = el.get_bounding_client_rect();
    let scroll_y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    card_core::scroll::ElementBox {
        top: rect.top() + scroll_y,
        height: rect.height(),
    }
}

/// `#{prefix}0` .. `#{prefix}{count - 1}`, keeping a `None` slot for each
/// missing element so indices stay aligned.
pub fn indexed(document: &web::Document, prefix: &str, count: usize) -> Vec<Option<web::Element>> {
    (0..count)
        .map(|i| by_id(document, &format!("{}{}", prefix, i)))
        .collect()
}
