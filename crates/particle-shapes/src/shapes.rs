//! Shape kinds and their draw routines.
//!
//! Every routine draws centered on the origin; the caller translates and
//! rotates the canvas to the particle first. Routines never read simulation
//! state, only the particle size.

use crate::canvas::{Canvas, Stroke, TextAlign};
use crate::color::{palette, Color};
use crate::path::Path;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Line width of outlined icons.
const OUTLINE_WIDTH: f32 = 2.0;

/// Tints available to plain dot particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Blue,
    Violet,
    Emerald,
    White,
}

impl Tint {
    pub const fn color(self) -> Color {
        match self {
            Tint::Blue => palette::BLUE_500,
            Tint::Violet => palette::VIOLET_500,
            Tint::Emerald => palette::EMERALD_500,
            Tint::White => palette::WHITE,
        }
    }
}

/// Visual descriptor of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Filled circle whose radius is the particle size.
    Dot(Tint),

    // Digital logic: gate symbols and binary digits
    LogicAnd,
    LogicOr,
    LogicXor,
    LogicNot,
    BitOne,
    BitZero,

    // Electronics: schematic components
    Resistor,
    Capacitor,
    Diode,
    SchematicAnd,
    SchematicNot,
    SchematicOr,

    // Delivery drones
    Drone,
    Parcel,
    LocationPin,
    MedicalCross,

    // Sentiment emoticons
    Smile,
    Frown,
    Neutral,

    // Scheduling
    Clock,
    Calendar,
    VideoCall,
    ChainLink,
    Envelope,
}

impl ShapeKind {
    /// Base color of the kind.
    pub const fn color(self) -> Color {
        use ShapeKind::*;
        match self {
            Dot(tint) => tint.color(),
            LogicAnd => palette::BLUE_500,
            LogicOr => palette::EMERALD_500,
            LogicXor => palette::VIOLET_500,
            LogicNot => palette::RED_500,
            BitOne | BitZero => palette::WHITE_40,
            Resistor => palette::AMBER_400,
            Capacitor => palette::CYAN_400,
            Diode => palette::PINK_400,
            SchematicAnd => palette::INDIGO_400,
            SchematicNot => palette::RED_500,
            SchematicOr => palette::EMERALD_400,
            Drone => palette::CYAN_400,
            Parcel => palette::AMBER_400,
            LocationPin => palette::PINK_400,
            MedicalCross => palette::RED_500,
            Smile => palette::EMERALD_500,
            Frown => palette::RED_500,
            Neutral => palette::BLUE_500,
            Clock => palette::AMBER_400,
            Calendar => palette::PINK_400,
            VideoCall => palette::CYAN_400,
            ChainLink => palette::EMERALD_400,
            Envelope => palette::RED_500,
        }
    }

    /// Upright kinds are never rotated: glyphs, dots and the delivery icons.
    pub const fn is_upright(self) -> bool {
        use ShapeKind::*;
        matches!(
            self,
            Dot(_)
                | BitOne
                | BitZero
                | Smile
                | Frown
                | Neutral
                | Drone
                | Parcel
                | LocationPin
                | MedicalCross
        )
    }

    /// Multiplier applied to the spawn velocity of this kind.
    pub const fn speed_factor(self) -> f32 {
        match self {
            ShapeKind::Drone => 1.5,
            _ => 1.0,
        }
    }

    /// Text drawn by glyph kinds, with its anchoring.
    pub const fn glyph(self) -> Option<(&'static str, TextAlign)> {
        use ShapeKind::*;
        match self {
            BitOne => Some(("1", TextAlign::Center)),
            BitZero => Some(("0", TextAlign::Center)),
            Smile => Some((":)", TextAlign::Start)),
            Frown => Some((":(", TextAlign::Start)),
            Neutral => Some((":|", TextAlign::Start)),
            _ => None,
        }
    }

    /// Draw the shape centered on the canvas origin.
    pub fn draw(self, canvas: &mut dyn Canvas, size: f32) {
        use ShapeKind::*;

        if let Some((text, align)) = self.glyph() {
            canvas.fill_text(text, Vec2::ZERO, size, self.color(), align);
            return;
        }

        let color = self.color();
        match self {
            Dot(_) => canvas.fill_path(&Path::new().circle(Vec2::ZERO, size), color),
            LogicAnd => logic_and(canvas, size, color),
            LogicOr => logic_or(canvas, size, color),
            LogicXor => logic_xor(canvas, size, color),
            LogicNot => logic_not(canvas, size, color),
            Resistor => resistor(canvas, size, color),
            Capacitor => capacitor(canvas, size, color),
            Diode => diode(canvas, size, color),
            SchematicAnd => schematic_and(canvas, size, color),
            SchematicNot => schematic_not(canvas, size, color),
            SchematicOr => schematic_or(canvas, size, color),
            Drone => drone(canvas, size, color),
            Parcel => parcel(canvas, size, color),
            LocationPin => location_pin(canvas, size, color),
            MedicalCross => medical_cross(canvas, size, color),
            Clock => clock(canvas, size, color),
            Calendar => calendar(canvas, size, color),
            VideoCall => video_call(canvas, size, color),
            ChainLink => chain_link(canvas, size, color),
            Envelope => envelope(canvas, size, color),
            BitOne | BitZero | Smile | Frown | Neutral => {}
        }
    }
}

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn outline(canvas: &mut dyn Canvas, path: &Path, color: Color) {
    canvas.stroke_path(path, &Stroke::new(OUTLINE_WIDTH, color));
}

/// D-shaped body: flat back, half-disc front.
fn d_body(w: f32, h: f32) -> Path {
    Path::new()
        .move_to(v(-w / 2.0, -h / 2.0))
        .line_to(v(-w / 2.0, h / 2.0))
        .line_to(v(0.0, h / 2.0))
        .arc(Vec2::ZERO, h / 2.0, FRAC_PI_2, -FRAC_PI_2, true)
        .line_to(v(-w / 2.0, -h / 2.0))
}

/// Shield-shaped OR body.
fn or_body(w: f32, h: f32) -> Path {
    Path::new()
        .move_to(v(-w, -h / 2.0))
        .quad_to(v(-w / 2.0, 0.0), v(-w, h / 2.0))
        .quad_to(v(w / 2.0, h / 2.0), v(w, 0.0))
        .quad_to(v(w / 2.0, -h / 2.0), v(-w, -h / 2.0))
}

fn logic_and(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size * 1.2, size);
    outline(canvas, &d_body(w, h), color);

    let pins = Path::new()
        .move_to(v(-w / 2.0 - 5.0, -h / 3.0))
        .line_to(v(-w / 2.0, -h / 3.0))
        .move_to(v(-w / 2.0 - 5.0, h / 3.0))
        .line_to(v(-w / 2.0, h / 3.0))
        .move_to(v(h / 2.0, 0.0))
        .line_to(v(h / 2.0 + 5.0, 0.0));
    outline(canvas, &pins, color);
}

fn logic_or(canvas: &mut dyn Canvas, size: f32, color: Color) {
    outline(canvas, &or_body(size * 1.2, size), color);
}

fn logic_xor(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size * 1.2, size);
    let shield = Path::new()
        .move_to(v(-w - 4.0, -h / 2.0))
        .quad_to(v(-w / 2.0 - 4.0, 0.0), v(-w - 4.0, h / 2.0));
    outline(canvas, &shield, color);
    outline(canvas, &or_body(w, h), color);
}

fn logic_not(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.6;
    let triangle = Path::new()
        .move_to(v(-s, -s / 2.0))
        .line_to(v(s / 2.0, 0.0))
        .line_to(v(-s, s / 2.0))
        .close();
    outline(canvas, &triangle, color);
    outline(canvas, &Path::new().circle(v(s / 2.0 + 2.0, 0.0), 2.0), color);
}

fn resistor(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size, size / 2.0);
    let zigzag = Path::new()
        .move_to(v(-w / 2.0, 0.0))
        .line_to(v(-w / 3.0, -h))
        .line_to(v(-w / 6.0, h))
        .line_to(v(w / 6.0, -h))
        .line_to(v(w / 3.0, h))
        .line_to(v(w / 2.0, 0.0));
    outline(canvas, &zigzag, color);
}

fn capacitor(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let gap = 4.0;
    let h = size * 0.8;
    let plates = Path::new()
        .move_to(v(-gap, -h / 2.0))
        .line_to(v(-gap, h / 2.0))
        .move_to(v(gap, -h / 2.0))
        .line_to(v(gap, h / 2.0));
    outline(canvas, &plates, color);
}

fn diode(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.6;
    let triangle = Path::new()
        .move_to(v(-s, -s))
        .line_to(v(-s, s))
        .line_to(v(s, 0.0))
        .close();
    outline(canvas, &triangle, color);
    canvas.fill_path(&triangle, color);

    let bar = Path::new().move_to(v(s, -s)).line_to(v(s, s));
    outline(canvas, &bar, color);
}

fn schematic_and(canvas: &mut dyn Canvas, size: f32, color: Color) {
    outline(canvas, &d_body(size * 0.8, size * 0.8), color);
}

fn schematic_not(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.5;
    let triangle = Path::new()
        .move_to(v(-s, -s))
        .line_to(v(s, 0.0))
        .line_to(v(-s, s))
        .close();
    outline(canvas, &triangle, color);
    outline(canvas, &Path::new().circle(v(s + 3.0, 0.0), 3.0), color);
}

fn schematic_or(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size * 0.8, size * 0.6);
    let body = Path::new()
        .move_to(v(-w, -h))
        .quad_to(v(-w / 2.0, 0.0), v(-w, h))
        .quad_to(v(w / 2.0, h), v(w, 0.0))
        .move_to(v(-w, -h))
        .quad_to(v(w / 2.0, -h), v(w, 0.0));
    outline(canvas, &body, color);
}

fn drone(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.8;
    let frame = Path::new()
        .move_to(v(-s, -s))
        .line_to(v(s, s))
        .move_to(v(s, -s))
        .line_to(v(-s, s));
    outline(canvas, &frame, color);

    let rotor_fill = color.with_alpha(0.4);
    for corner in [v(-s, -s), v(s, -s), v(-s, s), v(s, s)] {
        let rotor = Path::new().circle(corner, s * 0.4);
        canvas.fill_path(&rotor, rotor_fill);
        outline(canvas, &rotor, color);
    }

    canvas.fill_path(&Path::new().circle(Vec2::ZERO, s * 0.3), palette::WHITE);
}

fn parcel(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.6;
    let bx = Path::new().rect(v(-s, -s), v(s * 2.0, s * 2.0));
    canvas.fill_path(&bx, color.with_alpha(0.2));
    outline(canvas, &bx, color);

    let tape = Path::new()
        .move_to(v(0.0, -s))
        .line_to(v(0.0, s))
        .move_to(v(-s, 0.0))
        .line_to(v(s, 0.0));
    outline(canvas, &tape, color);
}

fn location_pin(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.8;
    let drop = Path::new()
        .arc(v(0.0, -s / 2.0), s, PI, 0.0, false)
        .line_to(v(0.0, s * 1.5))
        .line_to(v(-s, -s / 2.0))
        .close();
    canvas.fill_path(&drop, color.with_alpha(0.2));
    outline(canvas, &drop, color);

    canvas.fill_path(&Path::new().circle(v(0.0, -s / 2.0), s * 0.3), color);
}

fn medical_cross(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.7;
    let cross = Path::new()
        .rect(v(-s, -s / 3.0), v(s * 2.0, s * 2.0 / 3.0))
        .rect(v(-s / 3.0, -s), v(s * 2.0 / 3.0, s * 2.0));
    canvas.fill_path(&cross, color);
}

fn clock(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let r = size * 0.8;
    outline(canvas, &Path::new().circle(Vec2::ZERO, r), color);

    let hands = Path::new()
        .move_to(Vec2::ZERO)
        .line_to(v(0.0, -r * 0.6))
        .move_to(Vec2::ZERO)
        .line_to(v(r * 0.4, r * 0.4));
    outline(canvas, &hands, color);
}

fn calendar(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size * 1.2, size);
    outline(canvas, &Path::new().rect(v(-w / 2.0, -h / 2.0), v(w, h)), color);

    let rim = Path::new()
        .move_to(v(-w / 2.0, -h / 2.0 + 4.0))
        .line_to(v(w / 2.0, -h / 2.0 + 4.0));
    outline(canvas, &rim, color);

    let check = Path::new()
        .move_to(v(-5.0, 0.0))
        .line_to(v(-2.0, 4.0))
        .line_to(v(5.0, -4.0));
    outline(canvas, &check, color);
}

fn video_call(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size, size * 0.7);
    let fill = color.with_alpha(0.2);

    let body = Path::new().rect(v(-w / 2.0, -h / 2.0), v(w, h));
    canvas.fill_path(&body, fill);
    outline(canvas, &body, color);

    let lens = Path::new()
        .move_to(v(w / 2.0, 0.0))
        .line_to(v(w / 2.0 + 6.0, -5.0))
        .line_to(v(w / 2.0 + 6.0, 5.0))
        .close();
    canvas.fill_path(&lens, fill);
    outline(canvas, &lens, color);
}

fn chain_link(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let s = size * 0.5;
    canvas.save();
    canvas.rotate(-FRAC_PI_4);
    let radii = v(s, s / 2.0);
    outline(canvas, &Path::new().ellipse(v(-s / 2.0, 0.0), radii), color);
    outline(canvas, &Path::new().ellipse(v(s / 2.0, 0.0), radii), color);
    canvas.restore();
}

fn envelope(canvas: &mut dyn Canvas, size: f32, color: Color) {
    let (w, h) = (size * 1.4, size * 0.9);
    outline(canvas, &Path::new().rect(v(-w / 2.0, -h / 2.0), v(w, h)), color);

    let flap = Path::new()
        .move_to(v(-w / 2.0, -h / 2.0))
        .line_to(v(0.0, 2.0))
        .line_to(v(w / 2.0, -h / 2.0));
    outline(canvas, &flap, color);
}
