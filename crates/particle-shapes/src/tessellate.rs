use crate::canvas::{Canvas, Dash, Stroke};
use crate::color::Color;
use crate::mesh::Mesh;
use crate::path::{Path, Polyline};
use glam::{Affine2, Vec2};

// NOTE: strokes are emitted as one quad per segment with square caps, which
// also covers the gaps at polyline joints for the narrow widths used here.

/// Canvas implementation that turns draw calls into a triangle mesh.
pub struct Tessellator {
    mesh: Mesh,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::with_capacity(4096, 8192),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Geometry produced since the last [`Canvas::clear`].
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    fn transformed(&self, line: &Polyline) -> Vec<Vec2> {
        line.points
            .iter()
            .map(|&p| self.transform.transform_point2(p))
            .collect()
    }

    fn add_segment(&mut self, a: Vec2, b: Vec2, half_width: f32, cap: bool, color: Color) {
        let delta = b - a;
        let len = delta.length();
        if len <= f32::EPSILON {
            return;
        }

        let dir = delta / len;
        let normal = dir.perp() * half_width;
        let (a, b) = if cap {
            (a - dir * half_width, b + dir * half_width)
        } else {
            (a, b)
        };

        self.mesh
            .push_quad([a + normal, b + normal, b - normal, a - normal], color);
    }

    fn add_dashed(&mut self, segments: &[(Vec2, Vec2)], dash: Dash, half_width: f32, color: Color) {
        let period = dash.period();
        if dash.on <= 0.0 || period <= 0.0 {
            for &(a, b) in segments {
                self.add_segment(a, b, half_width, true, color);
            }
            return;
        }

        // Distance into the current dash period, carried across joints.
        let mut phase = 0.0f32;
        for &(a, b) in segments {
            let len = a.distance(b);
            if len <= f32::EPSILON {
                continue;
            }
            let dir = (b - a) / len;
            let mut t = 0.0;

            while t < len {
                let remaining = len - t;
                if phase < dash.on {
                    let run = (dash.on - phase).min(remaining);
                    self.add_segment(a + dir * t, a + dir * (t + run), half_width, false, color);
                    t += run;
                    phase += run;
                } else {
                    let run = (period - phase).min(remaining);
                    t += run;
                    phase += run;
                }
                if phase >= period {
                    phase -= period;
                }
            }
        }
    }
}

impl Canvas for Tessellator {
    fn clear(&mut self) {
        self.mesh.clear();
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform = self.transform * Affine2::from_angle(angle);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if stroke.width <= 0.0 || stroke.color.a <= 0.0 {
            return;
        }
        let half_width = stroke.width * 0.5;

        for line in path.flatten() {
            let points = self.transformed(&line);
            let outline = Polyline {
                points,
                closed: line.closed,
            };
            let segments: Vec<(Vec2, Vec2)> = outline.segments().collect();

            match stroke.dash {
                Some(dash) => self.add_dashed(&segments, dash, half_width, stroke.color),
                None => {
                    for (a, b) in segments {
                        self.add_segment(a, b, half_width, true, stroke.color);
                    }
                }
            }
        }
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        if color.a <= 0.0 {
            return;
        }

        for line in path.flatten() {
            let ring = self.transformed(&line);
            if ring.len() < 3 {
                continue;
            }
            let centroid = ring.iter().copied().sum::<Vec2>() / ring.len() as f32;
            self.mesh.push_fan(centroid, &ring, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    fn extent(mesh: &Mesh) -> (Vec2, Vec2) {
        mesh.vertices.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(lo, hi), v| {
                let p = Vec2::from_array(v.pos);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_line_is_one_quad() {
        let mut t = Tessellator::new();
        t.line(Vec2::ZERO, Vec2::new(10.0, 0.0), &Stroke::new(2.0, palette::WHITE));
        assert_eq!(t.mesh().triangle_count(), 2);
        let (lo, hi) = extent(t.mesh());
        assert_eq!(lo, Vec2::new(-1.0, -1.0));
        assert_eq!(hi, Vec2::new(11.0, 1.0));
    }

    #[test]
    fn test_zero_length_line_is_skipped() {
        let mut t = Tessellator::new();
        t.line(Vec2::ONE, Vec2::ONE, &Stroke::new(1.0, palette::WHITE));
        assert!(t.mesh().is_empty());
    }

    #[test]
    fn test_transparent_stroke_is_skipped() {
        let mut t = Tessellator::new();
        t.line(Vec2::ZERO, Vec2::X, &Stroke::new(1.0, Color::transparent()));
        assert!(t.mesh().is_empty());
    }

    #[test]
    fn test_dashed_line_splits_into_dashes() {
        let mut t = Tessellator::new();
        let stroke = Stroke::new(1.0, palette::WHITE).dashed(Dash::new(5.0, 5.0));
        t.line(Vec2::ZERO, Vec2::new(20.0, 0.0), &stroke);
        // 0..5 and 10..15
        assert_eq!(t.mesh().triangle_count(), 4);
    }

    #[test]
    fn test_fill_rect_fans_around_centroid() {
        let mut t = Tessellator::new();
        let path = Path::new().rect(Vec2::ZERO, Vec2::new(2.0, 2.0));
        t.fill_path(&path, palette::RED_500);
        assert_eq!(t.mesh().triangle_count(), 4);
        assert_eq!(t.mesh().vertices[0].pos, [1.0, 1.0]);
    }

    #[test]
    fn test_translate_and_restore() {
        let mut t = Tessellator::new();
        t.save();
        t.translate(Vec2::new(100.0, 0.0));
        t.line(Vec2::ZERO, Vec2::new(1.0, 0.0), &Stroke::new(0.0001, palette::WHITE));
        t.restore();
        let (lo, _) = extent(t.mesh());
        assert!(lo.x > 99.0);
        assert_eq!(t.transform(), Affine2::IDENTITY);
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        let mut t = Tessellator::new();
        t.rotate(std::f32::consts::FRAC_PI_2);
        let p = t.transform().transform_point2(Vec2::X);
        assert!(p.distance(Vec2::Y) < 1e-6);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut t = Tessellator::new();
        t.translate(Vec2::ONE);
        t.fill_path(&Path::new().circle(Vec2::ZERO, 3.0), palette::WHITE);
        t.clear();
        assert!(t.mesh().is_empty());
        assert_eq!(t.transform(), Affine2::IDENTITY);
    }
}
