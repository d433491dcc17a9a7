use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{glyph_font, GlyphSurface, ParticleField, Rgba, Subscription, Theme};
use site_core::PARTICLE_COUNT;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// 2D canvas context as a glyph surface.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl GlyphSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_glyph(&mut self, glyph: char, center: DVec2, size: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&glyph_font(size));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let mut buf = [0u8; 4];
        _ = self
            .ctx
            .fill_text(glyph.encode_utf8(&mut buf), center.x, center.y);
    }
}

pub struct FrameContext {
    pub field: ParticleField<StdRng>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
}

impl FrameContext {
    pub fn new(canvas: web::HtmlCanvasElement, document: web::Document) -> anyhow::Result<Self> {
        let surface = CanvasSurface::new(&canvas)?;
        let (width, height) = dom::sync_canvas_to_viewport(&canvas);
        let field = ParticleField::new(PARTICLE_COUNT, width, height, StdRng::from_entropy());
        log::info!(
            "[backdrop] {} particles on {}x{}",
            field.len(),
            width,
            height
        );
        Ok(Self {
            field,
            surface,
            canvas,
            document,
        })
    }

    /// The root `data-theme` is kept current by the theme switch, so the
    /// frame reads it instead of storage.
    fn theme(&self) -> Theme {
        dom::root_theme(&self.document).unwrap_or_default()
    }

    pub fn frame(&mut self) {
        let theme = self.theme();
        self.field.tick(&mut self.surface, theme);
    }

    pub fn resize(&mut self) {
        let (width, height) = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.resize(width, height);
    }
}

/// Call `step` once per display frame for as long as it returns true. When
/// it returns false the frame closure is released.
pub fn request_frames(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot = tick.clone();
    // A closure may not be dropped while it runs; drop it on the next task.
    let release = Subscription::new(move || {
        let done = slot.borrow_mut().take();
        dom::set_timeout(0, move || drop(done));
    });
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            release.cancel();
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Runs the backdrop forever once the icon font is ready.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    request_frames(move || {
        frame_ctx.borrow_mut().frame();
        true
    });
}

/// Resolves when the document's fonts finished loading; failures are logged
/// and treated as ready so the backdrop still starts.
pub async fn fonts_ready(document: &web::Document) {
    match document.fonts().ready() {
        Ok(promise) => {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("[backdrop] fonts.ready rejected: {:?}", e);
            }
        }
        Err(e) => log::warn!("[backdrop] fonts.ready unavailable: {:?}", e),
    }
}
