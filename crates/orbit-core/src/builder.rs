//! Construction of the scene hierarchies.
//!
//! Every builder takes the graph and a parent and returns the id of the group
//! it created; callers keep those ids for the animation step.

use crate::constants::*;
use crate::graph::{Node, NodeId, SceneGraph};
use crate::material::{Geometry, Material, Renderable, SphereDetail, TextureSlot};
use crate::params::Service;
use crate::tags::{Drift, Orbit, Tags};
use crate::transform::Transform;
use glam::{Quat, Vec3, Vec4};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

const SPHERE_HI: Geometry = Geometry::Sphere {
    detail: SphereDetail::High,
};
const SPHERE_LO: Geometry = Geometry::Sphere {
    detail: SphereDetail::Low,
};

fn shape(transform: Transform, geometry: Geometry, material: Material) -> Node {
    Node::new(transform).with_renderable(Renderable { geometry, material })
}

/// Ids of the planet hierarchy.
#[derive(Clone, Copy, Debug)]
pub struct PlanetIds {
    /// Parallax pivot; the planet hangs below it.
    pub pivot: NodeId,
    /// Selectable planet group that auto-rotates.
    pub planet: NodeId,
    pub ui_marker: NodeId,
}

pub fn build_planet(graph: &mut SceneGraph, parent: NodeId) -> PlanetIds {
    let pivot = graph.add(parent, Node::default().named("planet_pivot"));
    let planet = graph.add(pivot, Node::default().named("planet").with_tags(Tags::selectable()));

    graph.add(
        planet,
        shape(
            Transform::default().with_scale(Vec3::splat(PLANET_RADIUS)),
            SPHERE_HI,
            Material::lit(Vec4::new(0.0, 1.0, 1.0, 0.8)).with_emissive(Vec3::new(0.0, 0.08, 0.10)),
        ),
    );
    graph.add(
        planet,
        shape(
            Transform::default().with_scale(Vec3::splat(PLANET_RADIUS * GLOW_SCALE)),
            SPHERE_HI,
            Material::glow(Vec4::new(0.0, 1.0, 1.0, 1.0), GLOW_C, GLOW_P),
        ),
    );
    // Faint lat/long shell just above the surface.
    graph.add(
        planet,
        shape(
            Transform::default().with_scale(Vec3::splat(PLANET_RADIUS * GRID_SHELL_SCALE)),
            SPHERE_LO,
            Material::unlit(Vec4::new(0.0, 1.0, 1.0, GRID_SHELL_OPACITY)),
        ),
    );
    graph.add(
        planet,
        shape(
            Transform::default()
                .with_rotation(Vec3::new(0.45, 0.0, 0.15))
                .with_scale(Vec3::splat(PLANET_RADIUS * 1.55)),
            Geometry::Torus { tube_milli: 8 },
            Material::unlit(Vec4::new(0.45, 0.70, 1.0, 0.5)),
        ),
    );

    let ui_marker = build_ui_marker(graph, planet);
    PlanetIds {
        pivot,
        planet,
        ui_marker,
    }
}

/// Textured surface layer wrapped around the planet once its map has loaded.
pub fn build_earth_layer(graph: &mut SceneGraph, planet: NodeId) -> NodeId {
    graph.add(
        planet,
        shape(
            Transform::default().with_scale(Vec3::splat(PLANET_RADIUS)),
            SPHERE_HI,
            Material::lit(Vec4::new(1.0, 1.0, 1.0, EARTH_OPACITY)).with_texture(TextureSlot::Earth),
        )
        .named("earth"),
    )
}

/// "UI UX" caption plate with a trailing dot, riding a tilted elliptical
/// trail around the planet.
pub fn build_ui_marker(graph: &mut SceneGraph, planet: NodeId) -> NodeId {
    let tilt = graph.add(
        planet,
        Node::new(Transform::default().with_rotation(Vec3::new(UI_MARKER_TILT, 0.0, 0.0)))
            .named("ui_marker"),
    );
    // A hairline torus squashed into the trail ellipse.
    graph.add(
        tilt,
        shape(
            Transform::default().with_scale(Vec3::new(UI_TRAIL_RADII[0], 1.0, UI_TRAIL_RADII[1])),
            Geometry::Torus { tube_milli: 4 },
            Material::unlit(Vec4::new(1.0, 1.0, 1.0, UI_TRAIL_OPACITY)).with_additive(),
        )
        .named("ui_trail")
        .with_tags(Tags {
            pick_through: true,
            ..Tags::default()
        }),
    );
    graph.add(
        tilt,
        shape(
            Transform::from_position(Vec3::new(UI_MARKER_RADIUS, 0.0, 0.0)).with_scale(Vec3::new(
                UI_PLATE_SIZE[0],
                UI_PLATE_SIZE[1],
                1.0,
            )),
            Geometry::Quad,
            Material::lit(Vec4::new(1.0, 1.0, 1.0, 0.95)).with_texture(TextureSlot::UiPlate),
        )
        .named("ui_plate"),
    );
    graph.add(
        tilt,
        shape(
            Transform::from_position(Vec3::new(UI_MARKER_RADIUS + UI_DOT_OFFSET, 0.0, 0.0))
                .with_scale(Vec3::splat(0.08)),
            SPHERE_LO,
            Material::lit(Vec4::new(1.0, 1.0, 1.0, 0.9)),
        ),
    );
    tilt
}

pub fn build_mechanical_sphere(graph: &mut SceneGraph, parent: NodeId) -> NodeId {
    let group = graph.add(
        parent,
        Node::new(Transform::from_position(MECH_SPHERE_POSITION))
            .named("mech_sphere")
            .with_tags(Tags::selectable()),
    );
    graph.add(
        group,
        shape(
            Transform::default().with_scale(Vec3::splat(MECH_SPHERE_RADIUS)),
            SPHERE_LO,
            Material::lit(Vec4::new(0.0, 1.0, 1.0, 0.3)),
        ),
    );
    // One ring around the equator, one through the poles.
    for rot in [Vec3::ZERO, Vec3::new(0.0, 0.0, FRAC_PI_2)] {
        graph.add(
            group,
            shape(
                Transform::default()
                    .with_rotation(rot)
                    .with_scale(Vec3::splat(MECH_RING_RADIUS)),
                Geometry::Torus { tube_milli: 40 },
                Material::lit(Vec4::new(0.0, 1.0, 1.0, 0.5)),
            ),
        );
    }
    graph.add(
        group,
        shape(
            Transform::from_position(Vec3::new(0.0, MECH_RING_RADIUS, 0.0))
                .with_scale(Vec3::splat(0.04)),
            SPHERE_LO,
            Material::lit(Vec4::new(1.0, 0.0, 0.0, 1.0)).with_emissive(Vec3::new(0.5, 0.0, 0.0)),
        ),
    );
    group
}

/// Uniformly distributed direction.
fn random_direction(rng: &mut impl Rng) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

/// Particle field in a spherical shell around the origin.
pub fn build_particle_field(
    graph: &mut SceneGraph,
    parent: NodeId,
    count: usize,
    rng: &mut impl Rng,
) -> (NodeId, Vec<NodeId>) {
    let group = graph.add(parent, Node::default().named("particles"));
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let dist = rng.gen_range(PARTICLE_SHELL_INNER..PARTICLE_SHELL_OUTER);
        let rest = random_direction(rng) * dist;
        let spin = Vec3::new(
            rng.gen_range(-PARTICLE_SPIN_MAX..PARTICLE_SPIN_MAX),
            rng.gen_range(-PARTICLE_SPIN_MAX..PARTICLE_SPIN_MAX),
            rng.gen_range(-PARTICLE_SPIN_MAX..PARTICLE_SPIN_MAX),
        );
        let tint = rng.gen_range(0.6..1.0);
        let tags = Tags {
            drift: Some(Drift {
                rest,
                phase: rng.gen_range(0.0..TAU),
            }),
            spin: Some(spin),
            ..Tags::default()
        };
        let id = graph.add(
            group,
            shape(
                Transform::from_position(rest).with_scale(Vec3::splat(PARTICLE_SIZE)),
                Geometry::Cube,
                Material::unlit(Vec4::new(0.55 * tint, 0.8 * tint, 1.0, 0.85)),
            )
            .with_tags(tags),
        );
        ids.push(id);
    }
    (group, ids)
}

/// Ids of one service meteor.
#[derive(Clone, Copy, Debug)]
pub struct MeteorIds {
    pub root: NodeId,
    pub cube: NodeId,
    pub label: NodeId,
}

/// Orbit parameters for the meteor at `index` out of `count`: evenly spaced
/// start angles on a shared circle, alternating above and below the equator.
pub fn meteor_orbit(index: usize, count: usize) -> Orbit {
    Orbit {
        angle: TAU * index as f32 / count.max(1) as f32,
        speed: METEOR_SPEED,
        radius: METEOR_ORBIT_RADIUS,
        height: if index % 2 == 0 {
            METEOR_HEIGHT
        } else {
            -METEOR_HEIGHT
        },
    }
}

pub fn build_meteor(
    graph: &mut SceneGraph,
    parent: NodeId,
    index: usize,
    count: usize,
    service: &Service,
) -> MeteorIds {
    let orbit = meteor_orbit(index, count);
    let root = graph.add(
        parent,
        Node::new(Transform::from_position(crate::animation::orbit_position(&orbit)))
            .with_tags(Tags {
                selectable: true,
                orbit: Some(orbit),
                ..Tags::default()
            }),
    );
    let cube = graph.add(
        root,
        shape(
            Transform::default().with_scale(Vec3::splat(METEOR_CUBE_SIZE)),
            Geometry::Cube,
            Material::lit(service.color.truncate().extend(0.8))
                .with_emissive(service.color.truncate() * 0.25),
        ),
    );
    let label = graph.add(
        root,
        Node::new(Transform::from_position(METEOR_LABEL_OFFSET)),
    );
    graph.add(
        label,
        shape(
            Transform::default().with_scale(Vec3::new(
                METEOR_LABEL_SIZE[0],
                METEOR_LABEL_SIZE[1],
                1.0,
            )),
            Geometry::Quad,
            Material::unlit(Vec4::ONE).with_texture(TextureSlot::Label(index)),
        ),
    );
    MeteorIds { root, cube, label }
}

/// Modal centrepiece: a glowing core wrapped in rings, a cloud of
/// counter-rotating particles and a few beams reaching out from the core.
pub fn build_modal_object(
    graph: &mut SceneGraph,
    parent: NodeId,
    particle_count: usize,
    rng: &mut impl Rng,
) -> NodeId {
    let object = graph.add(parent, Node::default().named("modal_object"));
    graph.add(
        object,
        shape(
            Transform::default(),
            SPHERE_HI,
            Material::lit(Vec4::new(0.25, 0.45, 0.95, 1.0))
                .with_emissive(Vec3::new(0.05, 0.10, 0.30)),
        ),
    );
    graph.add(
        object,
        shape(
            Transform::default().with_scale(Vec3::splat(1.2)),
            SPHERE_HI,
            Material::glow(Vec4::new(0.4, 0.7, 1.0, 1.0), GLOW_C, GLOW_P),
        ),
    );
    for rot in [Vec3::new(0.4, 0.0, 0.0), Vec3::new(-0.6, 0.0, 0.9)] {
        graph.add(
            object,
            shape(
                Transform::default()
                    .with_rotation(rot)
                    .with_scale(Vec3::splat(1.6)),
                Geometry::Torus { tube_milli: 12 },
                Material::unlit(Vec4::new(0.6, 0.85, 1.0, 0.7)),
            ),
        );
    }
    for _ in 0..particle_count {
        let p = random_direction(rng) * rng.gen_range(1.8..2.4);
        graph.add(
            object,
            shape(
                Transform::from_position(p).with_scale(Vec3::splat(0.04)),
                Geometry::Cube,
                Material::unlit(Vec4::new(0.7, 0.9, 1.0, 0.9)),
            )
            .with_tags(Tags {
                modal_particle: true,
                ..Tags::default()
            }),
        );
    }
    // Beams from the core out to random points.
    for _ in 0..MODAL_CONNECTOR_COUNT {
        let end = Vec3::new(
            rng.gen_range(-MODAL_CONNECTOR_REACH..MODAL_CONNECTOR_REACH),
            rng.gen_range(-MODAL_CONNECTOR_REACH..MODAL_CONNECTOR_REACH),
            rng.gen_range(-MODAL_CONNECTOR_REACH..MODAL_CONNECTOR_REACH),
        );
        let Some(dir) = end.try_normalize() else {
            continue;
        };
        let mut transform = Transform::from_position(end * 0.5).with_scale(Vec3::new(
            0.01,
            0.01,
            end.length(),
        ));
        transform.set_quat(Quat::from_rotation_arc(Vec3::Z, dir));
        graph.add(
            object,
            shape(
                transform,
                Geometry::Cube,
                Material::unlit(Vec4::new(0.0, 1.0, 1.0, 0.3)),
            ),
        );
    }
    object
}
