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

/// Colors for fixed (non day/night) scene elements
pub mod colors {
    pub const COLUMN_BODY: [f32; 4] = [0.925, 0.937, 0.945, 1.0]; // #eceff1
    pub const COLUMN_STRIPE: [f32; 4] = [1.0, 0.435, 0.0, 1.0]; // #ff6f00
    pub const COLUMN_ACCENT: [f32; 4] = [1.0, 0.671, 0.251, 0.35]; // #ffab40
    pub const COLUMN_ACCENT_MID: [f32; 4] = [1.0, 0.953, 0.878, 0.35]; // #fff3e0
    pub const COLUMN_CAP_TOP: [f32; 4] = [0.271, 0.353, 0.392, 1.0]; // #455a64
    pub const COLUMN_CAP_BOTTOM: [f32; 4] = [0.216, 0.278, 0.31, 1.0]; // #37474f
    pub const COLUMN_BASE: [f32; 4] = [0.149, 0.196, 0.22, 1.0]; // #263238
    pub const COLUMN_EDGE: [f32; 4] = [0.0, 0.0, 0.0, 0.25];
    pub const PICKUP_TOMAHAWK: [f32; 4] = [0.937, 0.325, 0.314, 1.0]; // #ef5350
    pub const PICKUP_BEER: [f32; 4] = [1.0, 0.922, 0.231, 1.0]; // #ffeb3b
    pub const PICKUP_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
    pub const HERO_BODY: [f32; 4] = [0.365, 0.251, 0.216, 1.0]; // #5d4037
    pub const HERO_WING: [f32; 4] = [0.553, 0.431, 0.388, 1.0]; // #8d6e63
    pub const HERO_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const APRON: [f32; 4] = [0.329, 0.38, 0.412, 1.0]; // #546169
    pub const RUNWAY: [f32; 4] = [0.184, 0.2, 0.224, 1.0]; // #2f3339
    pub const RUNWAY_LINE: [f32; 4] = [0.961, 0.961, 0.961, 1.0]; // #f5f5f5
    pub const TAXI_LINE: [f32; 4] = [1.0, 0.792, 0.157, 1.0]; // #ffca28
    pub const TOWER_LIGHT: [f32; 4] = [1.0, 0.671, 0.251, 1.0]; // #ffab40
    pub const IDLE_OVERLAY: [f32; 4] = [0.051, 0.067, 0.09, 0.6];
}
