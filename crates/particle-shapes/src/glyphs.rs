//! Tiny built-in stroke font for glyph particles (binary digits, emoticons).
//!
//! Glyphs are monospaced and described in em units with the baseline at
//! `y = 0` and the cap height at `y = -CAP_HEIGHT`, so a glyph drawn at pixel
//! size `s` simply scales every point by `s`. Unknown characters render as a
//! placeholder box.

use crate::canvas::TextAlign;
use crate::path::Path;
use glam::Vec2;

/// Horizontal advance of every glyph, in em.
pub const ADVANCE: f32 = 0.6;

/// Height of digits above the baseline, in em.
pub const CAP_HEIGHT: f32 = 0.7;

/// Stroke width giving a bold look at the given pixel size.
pub fn stroke_width(size: f32) -> f32 {
    (size * 0.11).max(1.0)
}

/// Width of a run of text in pixels.
pub fn measure(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * ADVANCE * size
}

/// Build the stroke outline of `text` anchored at `anchor`.
pub fn text_path(text: &str, anchor: Vec2, size: f32, align: TextAlign) -> Path {
    let origin = match align {
        TextAlign::Start => anchor,
        TextAlign::Center => {
            anchor + Vec2::new(-measure(text, size) * 0.5, CAP_HEIGHT * 0.5 * size)
        }
    };

    text.chars().enumerate().fold(Path::new(), |path, (i, ch)| {
        let pen = origin + Vec2::new(i as f32 * ADVANCE * size, 0.0);
        glyph(path, ch, pen, size)
    })
}

/// Append the strokes of one glyph whose baseline-left corner sits at `pen`.
fn glyph(path: Path, ch: char, pen: Vec2, size: f32) -> Path {
    let p = |x: f32, y: f32| pen + Vec2::new(x, y) * size;

    match ch {
        ' ' => path,
        '0' => path.ellipse(p(0.3, -0.35), Vec2::new(0.19, 0.34) * size),
        '1' => path
            .move_to(p(0.17, -0.55))
            .line_to(p(0.31, -0.7))
            .line_to(p(0.31, 0.0))
            .move_to(p(0.14, 0.0))
            .line_to(p(0.46, 0.0)),
        ':' => path
            .circle(p(0.3, -0.48), 0.04 * size)
            .circle(p(0.3, -0.06), 0.04 * size),
        '(' => path.move_to(p(0.42, -0.78)).quad_to(p(0.05, -0.35), p(0.42, 0.08)),
        ')' => path.move_to(p(0.18, -0.78)).quad_to(p(0.55, -0.35), p(0.18, 0.08)),
        '|' => path.move_to(p(0.3, -0.8)).line_to(p(0.3, 0.1)),
        _ => path.rect(p(0.1, -0.7), Vec2::new(0.4, 0.7) * size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_is_monospace() {
        assert_eq!(measure(":)", 10.0), measure("01", 10.0));
        assert!((measure("1", 10.0) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_space_draws_nothing() {
        assert!(text_path(" ", Vec2::ZERO, 12.0, TextAlign::Start).is_empty());
    }

    #[test]
    fn test_centered_text_straddles_anchor() {
        let anchor = Vec2::new(50.0, 50.0);
        let lines = text_path("1", anchor, 20.0, TextAlign::Center).flatten();
        let xs: Vec<f32> = lines.iter().flat_map(|l| l.points.iter().map(|p| p.x)).collect();
        let ys: Vec<f32> = lines.iter().flat_map(|l| l.points.iter().map(|p| p.y)).collect();
        assert!(xs.iter().any(|&x| x < anchor.x) && xs.iter().any(|&x| x > anchor.x));
        assert!(ys.iter().any(|&y| y < anchor.y) && ys.iter().any(|&y| y > anchor.y));
    }

    #[test]
    fn test_start_aligned_text_sits_on_baseline() {
        let lines = text_path(":|", Vec2::ZERO, 16.0, TextAlign::Start).flatten();
        let min_x = lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.x))
            .fold(f32::INFINITY, f32::min);
        assert!(min_x >= 0.0);
    }
}
