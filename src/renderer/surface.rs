//! Drawing-surface abstraction
//!
//! The scene painter only ever writes to a surface through these four calls.
//! Nothing is read back.

use std::fmt;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const SKY: Color = Color::rgb(0x87, 0xce, 0xeb);
    pub const SUN: Color = Color::rgb(0xff, 0xcc, 0x00);
    pub const CLOUD: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const PLAYER: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const OBSTACLE: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const TEXT: Color = Color::rgb(0x00, 0x00, 0x00);

    /// CSS hex form, e.g. `#87ceeb`
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A font spec understood by canvas-style text APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub family: &'static str,
}

impl Font {
    pub const HUD: Font = Font {
        size_px: 20,
        family: "Arial",
    };
    pub const BANNER: Font = Font {
        size_px: 30,
        family: "Arial",
    };

    /// CSS shorthand, e.g. `20px Arial`
    pub fn to_css(self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Something the scene can be painted onto
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { cx: f32, cy: f32, r: f32, color: Color },
    Text { text: String, x: f32, y: f32, font: Font, color: Color },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far (call once per frame)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn since the last reset
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles drawn in `color`
    pub fn rects_of(&self, color: Color) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Rect { color: rc, .. } if *rc == color))
    }
}

impl DrawSurface for CommandBuffer {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { cx, cy, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font,
            color,
        });
    }
}
