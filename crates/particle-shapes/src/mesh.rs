use crate::color::Color;
use glam::Vec2;

/// Vertex format for backdrop rendering with position and color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos: pos.to_array(),
            color: color.to_array(),
        }
    }
}

/// A mesh consisting of vertices and indices for triangle rendering
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a quad given its corners in winding order.
    pub fn push_quad(&mut self, corners: [Vec2; 4], color: Color) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(corners.iter().map(|&c| Vertex::new(c, color)));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append a triangle fan around `center` over a closed ring of points.
    pub fn push_fan(&mut self, center: Vec2, ring: &[Vec2], color: Color) {
        if ring.len() < 2 {
            return;
        }
        let base = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(center, color));
        self.vertices
            .extend(ring.iter().map(|&p| Vertex::new(p, color)));

        let n = ring.len() as u32;
        for i in 0..n {
            let a = base + 1 + i;
            let b = base + 1 + (i + 1) % n;
            self.indices.extend_from_slice(&[base, a, b]);
        }
    }
}
