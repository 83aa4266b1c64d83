// Host-side tests for the per-frame motion of the main scene.

use glam::{Vec2, Vec3};
use orbit_core::constants::{PARTICLE_DRIFT_AMPLITUDE, PLANET_SPIN_PER_FRAME};
use orbit_core::{
    drift_offset, orbit_position, MainScene, Orbit, SceneParams, Shading, Viewport,
    DEFAULT_SERVICES,
};
use std::f32::consts::TAU;

fn make_scene(particles: usize) -> MainScene {
    let params = SceneParams {
        particle_count: particles,
        ..SceneParams::default()
    };
    MainScene::build(&params, Viewport::new(800.0, 600.0))
}

#[test]
fn drift_offset_stays_within_amplitude() {
    for phase in [0.0_f32, 0.7, 2.5, 5.9] {
        let mut t = 0.0_f32;
        while t < 200.0 {
            let o = drift_offset(t, phase);
            for c in o.to_array() {
                assert!(
                    c.abs() <= PARTICLE_DRIFT_AMPLITUDE + 1e-6,
                    "offset {c} out of range at t={t} phase={phase}"
                );
            }
            t += 0.013;
        }
    }
}

#[test]
fn drift_offset_returns_to_rest_every_full_period() {
    let phase = 1.3_f32;
    for k in 1..6 {
        let t = TAU * 2.0 * k as f32 - phase;
        let o = drift_offset(t, phase);
        assert!(o.length() < 1e-3, "offset {o:?} at k={k}");
    }
}

#[test]
fn drift_does_not_accumulate() {
    let a = drift_offset(3.0, 0.5);
    let b = drift_offset(3.0 + 2.0 * TAU, 0.5);
    assert!((a - b).length() < 1e-3);
}

#[test]
fn orbit_path_keeps_horizontal_radius() {
    let mut orbit = Orbit {
        angle: 0.0,
        speed: 0.01,
        radius: 3.7,
        height: 0.4,
    };
    while orbit.angle < TAU * 2.0 {
        let p = orbit_position(&orbit);
        let horizontal = Vec2::new(p.x, p.z).length();
        assert!((horizontal - orbit.radius).abs() < 1e-4);
        orbit.angle += 0.05;
    }
}

#[test]
fn meteors_stay_on_their_circle_while_stepping() {
    let mut scene = make_scene(0);
    assert!(scene.add_meteors(DEFAULT_SERVICES));
    for frame in 0..500 {
        scene.step(frame as f32 / 60.0, true);
    }
    for m in &scene.meteors {
        let node = scene.graph.get(m.root).unwrap();
        let orbit = node.tags.orbit.unwrap();
        let p = node.transform.position;
        assert!((Vec2::new(p.x, p.z).length() - orbit.radius).abs() < 1e-4);
    }
}

#[test]
fn meteors_are_added_only_once() {
    let mut scene = make_scene(0);
    assert!(!scene.has_meteors());
    assert!(scene.add_meteors(DEFAULT_SERVICES));
    let n = scene.graph.len();
    assert!(!scene.add_meteors(DEFAULT_SERVICES));
    assert_eq!(scene.graph.len(), n);
    assert_eq!(scene.meteors.len(), DEFAULT_SERVICES.len());
}

#[test]
fn labels_face_the_camera_even_when_meteor_is_rotated() {
    let mut scene = make_scene(0);
    scene.add_meteors(DEFAULT_SERVICES);
    let first = scene.meteors[0];
    scene.graph.transform_mut(first.root).unwrap().rotation = Vec3::new(0.4, 1.2, -0.3);
    scene.step(0.0, true);
    for m in &scene.meteors {
        let world = scene.graph.world_matrix(m.label);
        let (_, rot, pos) = world.to_scale_rotation_translation();
        let want = (scene.camera.eye - pos).normalize();
        let got = rot * Vec3::Z;
        assert!((got - want).length() < 1e-3, "label {got:?} vs {want:?}");
    }
}

#[test]
fn auto_rotation_advances_planet_yaw_only_when_enabled() {
    let mut scene = make_scene(0);
    let planet = scene.planet.planet;
    scene.step(0.0, false);
    assert_eq!(scene.graph.get(planet).unwrap().transform.rotation.y, 0.0);
    scene.step(0.0, true);
    scene.step(0.0, true);
    let yaw = scene.graph.get(planet).unwrap().transform.rotation.y;
    assert!((yaw - 2.0 * PLANET_SPIN_PER_FRAME).abs() < 1e-6);
}

#[test]
fn glow_view_tracks_camera_position() {
    let mut scene = make_scene(0);
    scene.camera.eye = Vec3::new(0.0, 0.0, 12.0);
    scene.step(0.0, true);
    let mut glows = 0;
    for id in scene.graph.descendants(scene.planet.planet) {
        let node = scene.graph.get(id).unwrap();
        if let Some(Shading::Glow { view, .. }) = node.renderable.map(|r| r.material.shading) {
            let want = scene.camera.eye - scene.graph.world_position(id);
            assert!((view - want).length() < 1e-5);
            glows += 1;
        }
    }
    assert!(glows >= 1);
}

#[test]
fn particles_follow_rest_plus_drift() {
    let mut scene = make_scene(25);
    let t = 4.2;
    scene.step(t, true);
    for id in &scene.particles {
        let node = scene.graph.get(*id).unwrap();
        let drift = node.tags.drift.unwrap();
        let want = drift.rest + drift_offset(t, drift.phase);
        assert!((node.transform.position - want).length() < 1e-5);
        let off = node.transform.position - drift.rest;
        assert!(off.abs().max_element() <= PARTICLE_DRIFT_AMPLITUDE + 1e-5);
    }
}
