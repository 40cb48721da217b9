use crate::color::Color;
use crate::glyphs;
use crate::path::Path;
use glam::Vec2;

/// Dash pattern for stroked lines, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }

    pub fn period(&self) -> f32 {
        self.on + self.off
    }
}

/// Stroke definition with width, color and optional dash pattern
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash: Option<Dash>,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub const fn dashed(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Horizontal/vertical anchoring of drawn text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Centered on both axes.
    Center,
    /// Left edge on the anchor, baseline on the anchor.
    Start,
}

/// The drawing surface particles are rendered onto.
///
/// Transforms compose like a canvas context: `translate` and `rotate` apply to
/// everything drawn until the matching `restore`.
pub trait Canvas {
    /// Erase everything drawn since the last clear.
    fn clear(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    /// Rotate by `angle` radians (clockwise on screen, y points down).
    fn rotate(&mut self, angle: f32);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    fn fill_path(&mut self, path: &Path, color: Color);

    /// Bold monospace text of the given pixel size.
    fn fill_text(&mut self, text: &str, anchor: Vec2, size: f32, color: Color, align: TextAlign) {
        let path = glyphs::text_path(text, anchor, size, align);
        if !path.is_empty() {
            self.stroke_path(&path, &Stroke::new(glyphs::stroke_width(size), color));
        }
    }

    /// Convenience for a single straight stroked line.
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let path = Path::new().move_to(from).line_to(to);
        self.stroke_path(&path, stroke);
    }
}
