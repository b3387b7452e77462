//! HTML canvas backend (2D context)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Color, DrawSurface, TextStyle};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    show_labels: bool,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64, show_labels: bool) -> Self {
        Self {
            ctx,
            width,
            height,
            show_labels,
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.ctx.set_fill_style_str(Color::Text.as_css());
        self.ctx.set_font(style.font());
        self.ctx.set_text_align(match style {
            TextStyle::Label => "center",
            TextStyle::Hud => "left",
        });
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn labels_enabled(&self) -> bool {
        self.show_labels
    }
}
