//! Rendering module
//!
//! The simulation only talks to a [`DrawSurface`]: filled circles and text.
//! The browser backend draws on an HTML canvas; tests record the calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::consts::LABEL_OFFSET;
use crate::sim::SpeciesKey;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Fill colors by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Player,
    Prey,
    Predator,
    Text,
}

impl Color {
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Player => "blue",
            Color::Prey => "green",
            Color::Predator => "red",
            Color::Text => "black",
        }
    }
}

/// Text presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Species name, centered on the anchor
    Label,
    /// Score/round overlay, left aligned
    Hud,
}

impl TextStyle {
    pub fn font(&self) -> &'static str {
        match self {
            TextStyle::Label => "14px Arial",
            TextStyle::Hud => "20px Arial",
        }
    }
}

/// Minimal immediate-mode drawing target
pub trait DrawSurface {
    /// Wipe the previous frame
    fn clear(&mut self);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    /// Whether species labels should be drawn above creatures
    fn labels_enabled(&self) -> bool {
        true
    }
}

/// Draw a creature's body and, if enabled, its species name above it
pub fn draw_creature(
    surface: &mut impl DrawSurface,
    pos: Vec2,
    radius: f32,
    color: Color,
    species: SpeciesKey,
) {
    surface.draw_circle(pos, radius, color);
    if surface.labels_enabled() {
        let anchor = Vec2::new(pos.x, pos.y - radius - LABEL_OFFSET);
        surface.draw_text(species.descriptor().name, anchor, TextStyle::Label);
    }
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self) {}

    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _style: TextStyle) {}

    fn labels_enabled(&self) -> bool {
        false
    }
}

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// Surface that keeps every call since the last clear
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub show_labels: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            show_labels: true,
        }
    }
}

impl RecordingSurface {
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }

    fn labels_enabled(&self) -> bool {
        self.show_labels
    }
}
