use ambient_core::{BackdropError, OrbPaint, Surface, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: web::HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(BackdropError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_orb(&mut self, paint: &OrbPaint) {
        let x = paint.center.x as f64;
        let y = paint.center.y as f64;
        let r = paint.radius as f64;
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &paint.color.to_css());
        _ = gradient.add_color_stop(1.0, "transparent");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }
}
