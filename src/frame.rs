use card_core::constants::MAX_FRAME_DT_SEC;
use card_core::FrameScheduler;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop advancing a [`FrameScheduler`]. Dropping the
/// loop cancels the pending frame and releases the callback.
pub struct FrameLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn start(scheduler: FrameScheduler) -> anyhow::Result<FrameLoop> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let window_tick = window.clone();
        let mut last_instant = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            let now = Instant::now();
            let dt = (now - last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
            last_instant = now;
            scheduler.advance(dt);
            // Cleared once the loop is dropped.
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => pending_tick.set(Some(handle)),
                    Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = {
            let cb = tick.borrow();
            let cb = cb
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("frame callback missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?
        };
        pending.set(Some(first));
        log::info!("[frame] loop started");
        Ok(FrameLoop {
            window,
            pending,
            tick,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        // Breaks the closure's reference to itself.
        let released = self.tick.try_borrow_mut().ok().and_then(|mut t| t.take());
        drop(released);
        log::info!("[frame] loop stopped");
    }
}
