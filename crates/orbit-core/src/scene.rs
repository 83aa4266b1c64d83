//! The main landing scene: graph, camera and the ids the animation step needs.

use crate::builder::{self, MeteorIds, PlanetIds};
use crate::camera::{Camera, Viewport};
use crate::constants::CAMERA_START_DISTANCE;
use crate::graph::{NodeId, SceneGraph};
use crate::params::{SceneParams, Service};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct MainScene {
    pub graph: SceneGraph,
    pub camera: Camera,
    pub planet: PlanetIds,
    pub mech_sphere: NodeId,
    pub particles: Vec<NodeId>,
    pub meteors: Vec<MeteorIds>,
    /// Textured surface layer, present once the planet map has loaded.
    pub earth: Option<NodeId>,
    /// Planet descendants carrying a glow material.
    pub(crate) glow_nodes: Vec<NodeId>,
}

impl MainScene {
    /// Build the static part of the scene. The surface layer and meteors are
    /// added later by [`MainScene::add_earth_layer`] and
    /// [`MainScene::add_meteors`] once the planet map is available.
    pub fn build(params: &SceneParams, viewport: Viewport) -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let mut rng = StdRng::seed_from_u64(params.seed);

        let planet = builder::build_planet(&mut graph, root);
        let mech_sphere = builder::build_mechanical_sphere(&mut graph, root);
        let (_, particles) =
            builder::build_particle_field(&mut graph, root, params.particle_count, &mut rng);

        let glow_nodes = graph
            .descendants(planet.planet)
            .into_iter()
            .filter(|id| {
                graph
                    .get(*id)
                    .and_then(|n| n.renderable)
                    .map(|r| r.material.is_glow())
                    .unwrap_or(false)
            })
            .collect::<Vec<_>>();

        log::info!(
            "[scene] built nodes={} particles={} glow={}",
            graph.len(),
            particles.len(),
            glow_nodes.len()
        );

        Self {
            graph,
            camera: Camera::looking_at_origin(CAMERA_START_DISTANCE, viewport.aspect()),
            planet,
            mech_sphere,
            particles,
            meteors: Vec::new(),
            earth: None,
            glow_nodes,
        }
    }

    /// Wrap the textured surface around the planet. Only the first call has
    /// an effect.
    pub fn add_earth_layer(&mut self) -> bool {
        if self.earth.is_some() {
            return false;
        }
        self.earth = Some(builder::build_earth_layer(&mut self.graph, self.planet.planet));
        log::info!("[scene] earth layer added");
        true
    }

    pub fn has_meteors(&self) -> bool {
        !self.meteors.is_empty()
    }

    /// Add one orbiting meteor per service. Only the first call has an
    /// effect; later calls return `false`.
    pub fn add_meteors(&mut self, services: &[Service]) -> bool {
        if self.has_meteors() || services.is_empty() {
            return false;
        }
        let root = self.graph.root();
        let group = self
            .graph
            .add(root, crate::graph::Node::default().named("meteors"));
        self.meteors = services
            .iter()
            .enumerate()
            .map(|(i, s)| builder::build_meteor(&mut self.graph, group, i, services.len(), s))
            .collect();
        log::info!("[scene] added {} meteors", self.meteors.len());
        true
    }
}
