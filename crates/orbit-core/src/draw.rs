//! Flattening of the scene graph into renderer-ready draw items.

use crate::graph::SceneGraph;
use crate::material::{Geometry, Material, Shading, TextureSlot};
use glam::{Mat4, Vec3, Vec4};

/// Blend/depth treatment a draw needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pass {
    Opaque,
    Transparent,
    Additive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub geometry: Geometry,
    pub model: Mat4,
    pub color: Vec4,
    pub emissive: Vec3,
    pub shading: Shading,
    pub texture: Option<TextureSlot>,
    pub pass: Pass,
}

fn pass_for(m: &Material) -> Pass {
    if m.additive {
        return Pass::Additive;
    }
    match m.shading {
        Shading::Glow { .. } => Pass::Additive,
        Shading::Unlit => Pass::Transparent,
        Shading::Lit if m.color.w < 1.0 => Pass::Transparent,
        Shading::Lit => Pass::Opaque,
    }
}

/// Every renderable node with its world matrix, in traversal order.
pub fn collect_draws(graph: &SceneGraph) -> Vec<DrawItem> {
    let mut out = Vec::new();
    graph.visit_world(|_, node, world| {
        let Some(r) = node.renderable else { return };
        let m = r.material;
        out.push(DrawItem {
            geometry: r.geometry,
            model: *world,
            color: m.color,
            emissive: m.emissive,
            shading: m.shading,
            texture: m.texture,
            pass: pass_for(&m),
        });
    });
    out
}
