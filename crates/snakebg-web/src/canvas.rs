use glam::Vec2;
use snakebg_core::{Rgba, Shadow, Surface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a `<canvas>` 2D context.
///
/// The simulation works in CSS pixels; the backing store is scaled by the
/// device pixel ratio and the context transform maps one to the other.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    viewport: Viewport,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, viewport: Viewport) -> Self {
        let mut surface = Self {
            canvas,
            ctx: None,
            viewport,
            dpr: 1.0,
        };
        surface.resize(viewport);
        if !surface.is_available() {
            log::warn!("[canvas] 2d context unavailable; simulating without drawing");
        }
        surface
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn acquire_context(&mut self) {
        let ctx = match self.canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok(),
            _ => None,
        };
        if let Some(ctx) = &ctx {
            apply_scale(ctx, self.dpr);
        }
        self.ctx = ctx;
    }
}

#[inline]
fn apply_scale(ctx: &web::CanvasRenderingContext2d, dpr: f64) {
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|d| *d > 0.0)
            .unwrap_or(1.0);
        self.canvas
            .set_width(((viewport.width as f64 * self.dpr) as u32).max(1));
        self.canvas
            .set_height(((viewport.height as f64 * self.dpr) as u32).max(1));
        // Resizing the backing store resets the context state.
        if let Some(ctx) = &self.ctx {
            apply_scale(ctx, self.dpr);
        }
    }

    fn is_available(&mut self) -> bool {
        if self.ctx.is_none() {
            self.acquire_context();
        }
        self.ctx.is_some()
    }

    fn clear(&mut self, fade: Rgba) {
        let Some(ctx) = &self.ctx else { return };
        ctx.set_fill_style_str(&fade.to_string());
        ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let Some(ctx) = &self.ctx else { return };
        ctx.begin_path();
        if ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        ctx.set_fill_style_str(&color.to_string());
        ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let Some(ctx) = &self.ctx else { return };
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&color.to_string());
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        let Some(ctx) = &self.ctx else { return };
        match shadow {
            Some(s) => {
                ctx.set_shadow_color(&s.color.to_string());
                ctx.set_shadow_blur(s.blur as f64);
                ctx.set_shadow_offset_x(s.offset.x as f64);
                ctx.set_shadow_offset_y(s.offset.y as f64);
            }
            None => {
                ctx.set_shadow_blur(0.0);
                ctx.set_shadow_offset_x(0.0);
                ctx.set_shadow_offset_y(0.0);
            }
        }
    }

    fn fill_highlight(&mut self, center: Vec2, radius: f32, alpha: f32) {
        let Some(ctx) = &self.ctx else { return };
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = ctx.create_radial_gradient(x - r * 0.3, y - r * 0.3, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha));
        _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        ctx.begin_path();
        if ctx.arc(x, y, r, 0.0, TAU).is_err() {
            return;
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
}
