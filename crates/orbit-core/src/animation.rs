//! Per-frame procedural motion.
//!
//! Positions of orbiting and drifting nodes are pure functions of their tag
//! parameters, so repeated steps never accumulate error in position.

use crate::constants::{
    METEOR_BOB, METEOR_CUBE_SPIN, PARTICLE_DRIFT_AMPLITUDE, PLANET_SPIN_PER_FRAME,
};
use crate::scene::MainScene;
use crate::tags::{Drift, Orbit};
use glam::Vec3;

/// Position on the orbit circle with the vertical bob at twice the orbital rate.
#[inline]
pub fn orbit_position(orbit: &Orbit) -> Vec3 {
    Vec3::new(
        orbit.angle.cos() * orbit.radius,
        orbit.height + (orbit.angle * 2.0).sin() * METEOR_BOB,
        orbit.angle.sin() * orbit.radius,
    )
}

/// Offset from rest: a figure-eight in XY and a half-rate swing on Z.
///
/// Every component is bounded by the drift amplitude and all three return to
/// zero together whenever the phase is a multiple of 2π.
#[inline]
pub fn drift_offset(elapsed_sec: f32, phase: f32) -> Vec3 {
    let p = elapsed_sec + phase;
    Vec3::new(p.sin(), p.sin() * p.cos(), (p * 0.5).sin()) * PARTICLE_DRIFT_AMPLITUDE
}

#[inline]
pub fn drift_position(drift: &Drift, elapsed_sec: f32) -> Vec3 {
    drift.rest + drift_offset(elapsed_sec, drift.phase)
}

impl MainScene {
    /// Advance every animated node by one frame.
    ///
    /// `auto_rotate` is false while the user holds a selection.
    pub fn step(&mut self, elapsed_sec: f32, auto_rotate: bool) {
        if auto_rotate {
            if let Some(t) = self.graph.transform_mut(self.planet.planet) {
                t.rotation.y += PLANET_SPIN_PER_FRAME;
            }
        }

        let eye = self.camera.eye;
        for id in &self.glow_nodes {
            let view = eye - self.graph.world_position(*id);
            if let Some(r) = self
                .graph
                .get_mut(*id)
                .and_then(|n| n.renderable.as_mut())
            {
                r.material.set_glow_view(view);
            }
        }

        for m in &self.meteors {
            if let Some(node) = self.graph.get_mut(m.root) {
                if let Some(orbit) = node.tags.orbit.as_mut() {
                    orbit.angle += orbit.speed;
                    node.transform.position = orbit_position(orbit);
                }
            }
            if let Some(t) = self.graph.transform_mut(m.cube) {
                t.rotation += METEOR_CUBE_SPIN;
            }
            self.graph.look_at_world(m.label, eye);
        }

        for id in &self.particles {
            let Some(node) = self.graph.get_mut(*id) else {
                continue;
            };
            if let Some(spin) = node.tags.spin {
                node.transform.rotation += spin;
            }
            if let Some(drift) = node.tags.drift {
                node.transform.position = drift_position(&drift, elapsed_sec);
            }
        }
    }
}
