//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0]; // #87CEEB
    pub const SAND: [f32; 4] = [0.545, 0.27, 0.075, 1.0]; // #8B4513
    pub const SAND_CHECK: [f32; 4] = [0.63, 0.32, 0.18, 1.0]; // #A0522D
    pub const SHARK: [f32; 4] = [0.29, 0.565, 0.886, 1.0]; // #4A90E2
    pub const EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const MOUTH: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Faint halo behind falling emoji
    pub const GOOD_TILE: [f32; 4] = [0.3, 0.9, 0.4, 0.25];
    pub const BAD_TILE: [f32; 4] = [1.0, 0.3, 0.25, 0.25];
}
