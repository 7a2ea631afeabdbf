use crate::constants::SNOW_CANVAS_ID;
use crate::dom::{self, Listener};
use card_core::particles::FieldParams;
use card_core::{CardError, FrameScheduler, ParticleField, ParticleSurface, Registration, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`ParticleSurface`] drawing soft white flakes on a 2D canvas.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, CardError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(CardError::SurfaceUnavailable("2d context"))?;
        Ok(Self { ctx })
    }
}

impl ParticleSurface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn draw_glow(&mut self, center: Vec2, radius: f32, opacity: f32) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {:.3})", opacity));
        let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if self.ctx.arc(x, y, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

/// Full-viewport snowfall behind the card. Stops drawing and stops listening
/// for resizes when dropped.
pub struct SnowLayer {
    _frame: Registration,
    _resize: Option<Listener>,
}

impl SnowLayer {
    pub fn mount(
        document: &web::Document,
        scheduler: &FrameScheduler,
        params: FieldParams,
    ) -> Result<Self, CardError> {
        let canvas = dom::by_id(document, SNOW_CANVAS_ID)
            .ok_or_else(|| CardError::MissingTarget(SNOW_CANVAS_ID.to_string()))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| CardError::SurfaceUnavailable("canvas"))?;
        let mut surface = CanvasSurface::new(&canvas)?;
        let (width, height) = dom::sync_canvas_backing_size(&canvas)
            .ok_or(CardError::SurfaceUnavailable("viewport"))?;

        let field = Rc::new(RefCell::new(ParticleField::new(
            Viewport::new(width as f32, height as f32),
            params,
            rand::random(),
        )));
        log::info!(
            "[snow] mounted {:.0}x{:.0}; {} flakes",
            width,
            height,
            field.borrow().particles().len()
        );

        let field_frame = field.clone();
        let frame = scheduler.on_frame(move |_| {
            let mut field = field_frame.borrow_mut();
            field.step();
            field.render(&mut surface);
        });

        let resize = web::window().and_then(|window| {
            let field = field.clone();
            Listener::new(&window, "resize", move |_| {
                if let Some((w, h)) = dom::sync_canvas_backing_size(&canvas) {
                    field.borrow_mut().resize(Viewport::new(w as f32, h as f32));
                }
            })
        });

        Ok(Self {
            _frame: frame,
            _resize: resize,
        })
    }
}
