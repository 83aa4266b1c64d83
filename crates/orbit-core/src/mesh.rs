//! CPU tessellation of the primitive shapes.

use crate::material::{Geometry, SphereDetail};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Vertex with position, normal and UV coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}

/// Mesh data before GPU upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

pub fn build(geometry: Geometry) -> MeshData {
    match geometry {
        Geometry::Sphere { detail } => match detail {
            SphereDetail::Low => sphere(12, 8),
            SphereDetail::High => sphere(48, 32),
        },
        Geometry::Cube => cube(),
        Geometry::Torus { tube_milli } => torus(tube_milli as f32 / 1000.0, 48, 12),
        Geometry::Quad => quad(),
    }
}

/// Unit-radius UV sphere.
pub fn sphere(segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for segment in 0..=segments {
            let theta = TAU * segment as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            let normal = Vec3::new(x, y, z).normalize_or_zero();
            let uv = [
                segment as f32 / segments as f32,
                ring as f32 / rings as f32,
            ];
            vertices.push(Vertex::new([x, y, z], normal.into(), uv));
        }
    }

    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Unit cube centred at the origin, one quad per face.
pub fn cube() -> MeshData {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let base = vertices.len() as u32;
        for (su, sv, uv) in [
            (-0.5, -0.5, [0.0, 1.0]),
            (0.5, -0.5, [1.0, 1.0]),
            (0.5, 0.5, [1.0, 0.0]),
            (-0.5, 0.5, [0.0, 0.0]),
        ] {
            let p = n * 0.5 + u * su + v * sv;
            vertices.push(Vertex::new(p.into(), n.into(), uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    MeshData { vertices, indices }
}

/// Torus in the XZ plane with major radius 1.
pub fn torus(tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for i in 0..=radial {
        let u = TAU * i as f32 / radial as f32;
        let center = Vec3::new(u.cos(), 0.0, u.sin());
        for j in 0..=tubular {
            let v = TAU * j as f32 / tubular as f32;
            let normal = (center * v.cos() + Vec3::Y * v.sin()).normalize_or_zero();
            let p = center + normal * tube;
            let uv = [i as f32 / radial as f32, j as f32 / tubular as f32];
            vertices.push(Vertex::new(p.into(), normal.into(), uv));
        }
    }
    for i in 0..radial {
        for j in 0..tubular {
            let a = i * (tubular + 1) + j;
            let b = a + tubular + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { vertices, indices }
}

/// Unit quad in the XY plane facing +Z.
pub fn quad() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            Vertex::new([-0.5, -0.5, 0.0], n, [0.0, 1.0]),
            Vertex::new([0.5, -0.5, 0.0], n, [1.0, 1.0]),
            Vertex::new([0.5, 0.5, 0.0], n, [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, 0.0], n, [0.0, 0.0]),
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}
