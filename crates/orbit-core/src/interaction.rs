//! Pointer, keyboard and wheel handling against the main scene.
//!
//! Handlers mutate the scene directly; the web layer only converts DOM events
//! into canvas pixel coordinates and key names.

use crate::camera::{Camera, Viewport};
use crate::constants::{
    DRAG_PITCH_PER_PX, DRAG_YAW_PER_PX, NUDGE_ROTATION_STEP, NUDGE_STEP, PARALLAX_PITCH_RANGE,
    PARALLAX_REST_PITCH, PARALLAX_REST_YAW, PARALLAX_SMOOTHING, PARALLAX_YAW_RANGE, PITCH_LIMIT,
};
use crate::graph::NodeId;
use crate::picking::{raycast, Pick};
use crate::scene::MainScene;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    Move(Vec3),
    Rotate(Vec3),
    Reset,
}

/// Map a `KeyboardEvent.key` value to a nudge/reset command.
///
/// Arrows and A/D move along x and y, W/S along z (W away from the camera),
/// Q/E turn yaw, R/F tilt pitch and Space resets.
#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    let s = NUDGE_STEP;
    let r = NUDGE_ROTATION_STEP;
    match key {
        "ArrowLeft" | "a" | "A" => Some(KeyCommand::Move(Vec3::new(-s, 0.0, 0.0))),
        "ArrowRight" | "d" | "D" => Some(KeyCommand::Move(Vec3::new(s, 0.0, 0.0))),
        "ArrowUp" => Some(KeyCommand::Move(Vec3::new(0.0, s, 0.0))),
        "ArrowDown" => Some(KeyCommand::Move(Vec3::new(0.0, -s, 0.0))),
        "w" | "W" => Some(KeyCommand::Move(Vec3::new(0.0, 0.0, -s))),
        "s" | "S" => Some(KeyCommand::Move(Vec3::new(0.0, 0.0, s))),
        "q" | "Q" => Some(KeyCommand::Rotate(Vec3::new(0.0, -r, 0.0))),
        "e" | "E" => Some(KeyCommand::Rotate(Vec3::new(0.0, r, 0.0))),
        "r" | "R" => Some(KeyCommand::Rotate(Vec3::new(-r, 0.0, 0.0))),
        "f" | "F" => Some(KeyCommand::Rotate(Vec3::new(r, 0.0, 0.0))),
        " " => Some(KeyCommand::Reset),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    pub dragging: bool,
    pub last_pointer: Option<Vec2>,
    /// Weak handle; resolves to nothing if the node is gone.
    pub selected: Option<NodeId>,
    pub auto_rotate: bool,
    /// Smoothed parallax (yaw, pitch) applied to the planet pivot.
    pub parallax: Vec2,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            dragging: false,
            last_pointer: None,
            selected: None,
            auto_rotate: true,
            parallax: Vec2::ZERO,
        }
    }
}

impl InteractionState {
    /// Ray-cast from the pointer and select the nearest selectable ancestor
    /// of whatever was hit. Auto-rotation stays off while a selection is held.
    pub fn pointer_down(
        &mut self,
        scene: &MainScene,
        viewport: Viewport,
        px: Vec2,
    ) -> Option<Pick> {
        self.last_pointer = Some(px);
        let (ro, rd) = scene.camera.screen_ray(viewport, px);
        let pick = raycast(&scene.graph, ro, rd)?;
        self.selected = Some(pick.selected);
        self.dragging = true;
        self.auto_rotate = false;
        log::info!(
            "[pick] selected {:?} (hit {:?} at {:.2})",
            scene.graph.get(pick.selected).and_then(|n| n.name),
            pick.hit,
            pick.distance
        );
        Some(pick)
    }

    pub fn pointer_move(&mut self, scene: &mut MainScene, viewport: Viewport, px: Vec2) {
        let prev = self.last_pointer.replace(px);
        match self.selected.filter(|_| self.dragging) {
            Some(sel) => {
                let Some(prev) = prev else { return };
                let d = px - prev;
                if let Some(t) = scene.graph.transform_mut(sel) {
                    t.rotation.y += d.x * DRAG_YAW_PER_PX;
                    t.rotation.x = (t.rotation.x + d.y * DRAG_PITCH_PER_PX)
                        .clamp(-PITCH_LIMIT, PITCH_LIMIT);
                }
            }
            None => {
                let ndc = viewport.centered_ndc(px);
                let target = Vec2::new(
                    PARALLAX_REST_YAW + ndc.x * PARALLAX_YAW_RANGE,
                    PARALLAX_REST_PITCH - ndc.y * PARALLAX_PITCH_RANGE,
                );
                self.parallax += (target - self.parallax) * PARALLAX_SMOOTHING;
                if let Some(t) = scene.graph.transform_mut(scene.planet.pivot) {
                    t.rotation.y = self.parallax.x;
                    t.rotation.x = self.parallax.y;
                }
            }
        }
    }

    /// Release any selection and resume auto-rotation.
    pub fn pointer_up(&mut self) {
        self.selected = None;
        self.dragging = false;
        self.auto_rotate = true;
    }

    /// Apply a nudge/reset key to the current selection. Returns whether the
    /// key was consumed.
    pub fn key_down(&mut self, scene: &mut MainScene, key: &str) -> bool {
        let Some(sel) = self.selected else {
            return false;
        };
        let Some(cmd) = command_for_key(key) else {
            return false;
        };
        let Some(t) = scene.graph.transform_mut(sel) else {
            return false;
        };
        match cmd {
            KeyCommand::Move(d) => t.position += d,
            KeyCommand::Rotate(d) => t.rotation += d,
            KeyCommand::Reset => {
                t.position = Vec3::ZERO;
                t.rotation = Vec3::ZERO;
                log::info!("[keys] reset selection");
            }
        }
        true
    }
}

/// Wheel zoom; distance stays inside the camera's allowed range.
#[inline]
pub fn wheel(camera: &mut Camera, delta_y: f32) {
    camera.zoom_by_wheel(delta_y);
}
