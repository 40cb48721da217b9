//! # particle-shapes
//!
//! Backend agnostic drawing primitives for the backdrop particles.
//!
//! Every particle draws itself through the [`Canvas`] trait, which mirrors the
//! small subset of a 2D canvas context the themes need (save/restore,
//! translate/rotate, stroke/fill of paths, text). [`Tessellator`] implements it
//! by turning every call into triangles on a [`Mesh`], so rendering backends
//! only ever see vertices and indices.

mod canvas;
mod color;
pub mod glyphs;
mod mesh;
mod path;
mod shapes;
mod tessellate;

pub use canvas::*;
pub use color::*;
pub use mesh::*;
pub use path::*;
pub use shapes::*;
pub use tessellate::*;
