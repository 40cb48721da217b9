use particle_shapes::Vertex;

/// GPU vertex with the color packed as Unorm8x4 (12 bytes instead of 24).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WgpuVertex {
    pub pos: [f32; 2],
    pub color: [u8; 4],
}

fn unorm8(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<&Vertex> for WgpuVertex {
    fn from(vertex: &Vertex) -> Self {
        let [r, g, b, a] = vertex.color;
        Self {
            pos: vertex.pos,
            color: [unorm8(r), unorm8(g), unorm8(b), unorm8(a)],
        }
    }
}

impl WgpuVertex {
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Unorm8x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<WgpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_packed() {
        assert_eq!(std::mem::size_of::<WgpuVertex>(), 12);
        assert_eq!(WgpuVertex::desc().array_stride, 12);
    }

    #[test]
    fn test_color_quantization() {
        let v = Vertex {
            pos: [3.0, 4.0],
            color: [1.0, 0.0, 2.0, 0.5],
        };
        let gpu = WgpuVertex::from(&v);
        assert_eq!(gpu.color, [255, 0, 255, 128]);
        assert_eq!(gpu.pos, [3.0, 4.0]);
    }
}
