//! Secondary scene shown inside the contact modal.

use crate::builder;
use crate::camera::{Camera, Viewport};
use crate::constants::{
    MODAL_CAMERA_DISTANCE, MODAL_PARTICLE_COUNT, MODAL_PARTICLE_COUNTER_SPIN, MODAL_PULSE_AMPLITUDE,
    MODAL_PULSE_RATE, MODAL_SPIN_PER_FRAME,
};
use crate::graph::{NodeId, SceneGraph};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Whether a self-rescheduling loop should queue another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct ModalScene {
    pub graph: SceneGraph,
    pub camera: Camera,
    object: Option<NodeId>,
    active: bool,
    opened: u64,
    seed: u64,
}

impl ModalScene {
    pub fn new(seed: u64) -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: Camera::looking_at_origin(MODAL_CAMERA_DISTANCE, 1.0),
            object: None,
            active: false,
            opened: 0,
            seed,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of inactive→active transitions so far.
    pub fn open_count(&self) -> u64 {
        self.opened
    }

    pub fn object(&self) -> Option<NodeId> {
        self.object
    }

    /// Activate the modal and rebuild its scene from scratch.
    ///
    /// Returns `false` without touching anything if the modal is already
    /// active.
    pub fn open(&mut self, viewport: Viewport) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.opened += 1;
        self.graph.clear();
        let mut rng = StdRng::seed_from_u64(self.seed ^ self.opened);
        let root = self.graph.root();
        let object =
            builder::build_modal_object(&mut self.graph, root, MODAL_PARTICLE_COUNT, &mut rng);
        self.object = Some(object);
        self.camera = Camera::looking_at_origin(MODAL_CAMERA_DISTANCE, viewport.aspect());
        log::info!("[modal] opened #{} nodes={}", self.opened, self.graph.len());
        true
    }

    /// Mark the modal inactive. The running loop notices on its next step.
    pub fn close(&mut self) {
        if self.active {
            log::info!("[modal] closed");
        }
        self.active = false;
    }

    /// One modal frame. Checks the active flag first and asks the caller to
    /// stop rescheduling once the modal has been closed.
    pub fn step(&mut self, elapsed_sec: f32) -> LoopControl {
        if !self.active {
            return LoopControl::Stop;
        }
        let Some(object) = self.object else {
            return LoopControl::Stop;
        };
        let pulse = 1.0 + MODAL_PULSE_AMPLITUDE * (elapsed_sec * MODAL_PULSE_RATE).sin();
        let children = match self.graph.get_mut(object) {
            Some(node) => {
                node.transform.rotation += MODAL_SPIN_PER_FRAME;
                node.transform.scale = Vec3::splat(pulse);
                node.children().to_vec()
            }
            None => return LoopControl::Stop,
        };
        for id in children {
            if let Some(node) = self.graph.get_mut(id) {
                if node.tags.modal_particle {
                    node.transform.rotation -= MODAL_PARTICLE_COUNTER_SPIN;
                }
            }
        }
        let eye = self.camera.eye;
        let glow_view = eye - self.graph.world_position(object);
        for id in self.graph.descendants(object) {
            if let Some(r) = self.graph.get_mut(id).and_then(|n| n.renderable.as_mut()) {
                r.material.set_glow_view(glow_view);
            }
        }
        LoopControl::Continue
    }
}
