//! Per-node capability tags.
//!
//! The animation step and picking only look at nodes through these tags, so a
//! node's role in the scene is fully described by which ones are set.

use glam::Vec3;

/// Circular orbit around the parent origin in the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub angle: f32,
    /// Radians per frame.
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
}

/// Bounded periodic drift around a rest position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub rest: Vec3,
    pub phase: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tags {
    pub selectable: bool,
    pub orbit: Option<Orbit>,
    pub drift: Option<Drift>,
    /// Constant rotation applied every frame (radians per frame, per axis).
    pub spin: Option<Vec3>,
    /// Modal particles counter-rotate against the modal object.
    pub modal_particle: bool,
    /// Rays pass through this node's geometry.
    pub pick_through: bool,
}

impl Tags {
    pub fn selectable() -> Self {
        Self {
            selectable: true,
            ..Self::default()
        }
    }
}
