use glam::Vec2;
use std::f32::consts::TAU;

/// Number of line segments used to flatten one quadratic curve.
const QUAD_SEGMENTS: usize = 12;

/// A single path command, in the vocabulary of a 2D canvas context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    /// Circular arc. Joins the current point with a straight line first.
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        anticlockwise: bool,
    },
    /// Closed axis-aligned ellipse, always its own sub-path.
    Ellipse { center: Vec2, radii: Vec2 },
    Close,
}

/// A flattened sub-path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, including the closing edge for closed polylines.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 2 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

/// Path builder mirroring `beginPath` .. `stroke` sequences of a 2D canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn move_to(mut self, to: Vec2) -> Self {
        self.verbs.push(PathVerb::MoveTo(to));
        self
    }

    pub fn line_to(mut self, to: Vec2) -> Self {
        self.verbs.push(PathVerb::LineTo(to));
        self
    }

    pub fn quad_to(mut self, ctrl: Vec2, to: Vec2) -> Self {
        self.verbs.push(PathVerb::QuadTo { ctrl, to });
        self
    }

    /// Canvas style arc. Angles are in radians with y pointing down, so
    /// increasing angles sweep clockwise on screen.
    pub fn arc(
        mut self,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        anticlockwise: bool,
    ) -> Self {
        self.verbs.push(PathVerb::Arc {
            center,
            radius,
            start,
            end,
            anticlockwise,
        });
        self
    }

    /// Full circle as its own sub-path.
    pub fn circle(self, center: Vec2, radius: f32) -> Self {
        self.move_to(center + Vec2::new(radius, 0.0))
            .arc(center, radius, 0.0, TAU, false)
            .close()
    }

    pub fn ellipse(mut self, center: Vec2, radii: Vec2) -> Self {
        self.verbs.push(PathVerb::Ellipse { center, radii });
        self
    }

    /// Rectangle from its top-left corner and size.
    pub fn rect(self, min: Vec2, size: Vec2) -> Self {
        self.move_to(min)
            .line_to(min + Vec2::new(size.x, 0.0))
            .line_to(min + size)
            .line_to(min + Vec2::new(0.0, size.y))
            .close()
    }

    pub fn close(mut self) -> Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    /// Flatten into polylines, one per sub-path.
    pub fn flatten(&self) -> Vec<Polyline> {
        let mut out = Vec::new();
        let mut current = Polyline::default();

        fn flush(out: &mut Vec<Polyline>, current: &mut Polyline) {
            if current.points.len() > 1 {
                out.push(std::mem::take(current));
            } else {
                current.points.clear();
                current.closed = false;
            }
        }

        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(p) => {
                    flush(&mut out, &mut current);
                    current.points.push(p);
                }
                PathVerb::LineTo(p) => current.points.push(p),
                PathVerb::QuadTo { ctrl, to } => {
                    let from = current.points.last().copied().unwrap_or(ctrl);
                    if current.points.is_empty() {
                        current.points.push(from);
                    }
                    for i in 1..=QUAD_SEGMENTS {
                        let t = i as f32 / QUAD_SEGMENTS as f32;
                        let a = from.lerp(ctrl, t);
                        let b = ctrl.lerp(to, t);
                        current.points.push(a.lerp(b, t));
                    }
                }
                PathVerb::Arc {
                    center,
                    radius,
                    start,
                    end,
                    anticlockwise,
                } => {
                    let sweep = arc_sweep(start, end, anticlockwise);
                    let steps = arc_steps(sweep, radius);
                    for i in 0..=steps {
                        let angle = start + sweep * (i as f32 / steps as f32);
                        current
                            .points
                            .push(center + radius * Vec2::new(angle.cos(), angle.sin()));
                    }
                }
                PathVerb::Ellipse { center, radii } => {
                    flush(&mut out, &mut current);
                    let steps = arc_steps(TAU, radii.max_element());
                    current.points.extend((0..steps).map(|i| {
                        let angle = TAU * (i as f32 / steps as f32);
                        center + radii * Vec2::new(angle.cos(), angle.sin())
                    }));
                    current.closed = true;
                    flush(&mut out, &mut current);
                }
                PathVerb::Close => {
                    if let Some(&first) = current.points.first() {
                        current.closed = true;
                        flush(&mut out, &mut current);
                        // A closed sub-path leaves the pen at its start point.
                        current.points.push(first);
                    }
                }
            }
        }

        flush(&mut out, &mut current);
        out
    }
}

/// Signed sweep of a canvas arc.
///
/// Clockwise arcs sweep `(end - start) mod 2π`, anticlockwise arcs the
/// negative of `(start - end) mod 2π`; a difference of a full turn or more is
/// a full circle.
pub fn arc_sweep(start: f32, end: f32, anticlockwise: bool) -> f32 {
    if !anticlockwise {
        if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        }
    } else if start - end >= TAU {
        -TAU
    } else {
        -(start - end).rem_euclid(TAU)
    }
}

fn arc_steps(sweep: f32, radius: f32) -> usize {
    let per_turn = (radius.max(1.0) * 2.0).clamp(12.0, 48.0);
    ((sweep.abs() / TAU) * per_turn).ceil().max(2.0) as usize
}
