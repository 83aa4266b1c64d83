// Host-side tests for picking, drag rotation, keyboard nudges and zoom.

use glam::{Vec2, Vec3};
use orbit_core::constants::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, DRAG_PITCH_PER_PX, DRAG_YAW_PER_PX, NUDGE_STEP,
    PARALLAX_PITCH_RANGE, PARALLAX_REST_PITCH, PARALLAX_REST_YAW, PARALLAX_YAW_RANGE,
    PITCH_LIMIT,
};
use orbit_core::picking::raycast;
use orbit_core::{
    command_for_key, orbit_position, wheel, Geometry, InteractionState, KeyCommand, MainScene,
    Material, Node, Renderable, SceneGraph, SceneParams, SphereDetail, Transform, Viewport,
    DEFAULT_SERVICES,
};

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn make_scene() -> MainScene {
    let params = SceneParams {
        particle_count: 0,
        ..SceneParams::default()
    };
    MainScene::build(&params, VIEWPORT)
}

/// Pixel position of a world-space point on the test viewport.
fn project(scene: &MainScene, p: Vec3) -> Vec2 {
    let ndc = scene.camera.view_projection().project_point3(p);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.width,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.height,
    )
}

fn center() -> Vec2 {
    Vec2::new(VIEWPORT.width * 0.5, VIEWPORT.height * 0.5)
}

#[test]
fn pointer_down_selects_nearest_selectable_ancestor() {
    let scene = make_scene();
    let mut state = InteractionState::default();
    let px = project(&scene, scene.graph.world_position(scene.mech_sphere));
    let pick = state.pointer_down(&scene, VIEWPORT, px).expect("hit");
    assert_eq!(pick.selected, scene.mech_sphere);
    assert_ne!(pick.hit, scene.mech_sphere);
    assert_eq!(state.selected, Some(scene.mech_sphere));
    assert!(state.dragging);
    assert!(!state.auto_rotate);
}

#[test]
fn pointer_down_on_empty_space_selects_nothing() {
    let scene = make_scene();
    let mut state = InteractionState::default();
    assert!(state.pointer_down(&scene, VIEWPORT, Vec2::new(2.0, 2.0)).is_none());
    assert!(state.selected.is_none());
    assert!(state.auto_rotate);
}

#[test]
fn hit_without_selectable_ancestor_selects_hit_node() {
    let mut graph = SceneGraph::new();
    let group = graph.add(graph.root(), Node::default());
    let ball = graph.add(
        group,
        Node::new(Transform::default()).with_renderable(Renderable {
            geometry: Geometry::Sphere {
                detail: SphereDetail::Low,
            },
            material: Material::lit(glam::Vec4::ONE),
        }),
    );
    let pick = raycast(&graph, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
    assert_eq!(pick.hit, ball);
    assert_eq!(pick.selected, ball);
    assert!((pick.distance - 4.0).abs() < 1e-4);
}

#[test]
fn raycast_prefers_closest_hit() {
    let mut graph = SceneGraph::new();
    let cube = |z: f32| {
        Node::new(Transform::from_position(Vec3::new(0.0, 0.0, z))).with_renderable(Renderable {
            geometry: Geometry::Cube,
            material: Material::lit(glam::Vec4::ONE),
        })
    };
    let _far = graph.add(graph.root(), cube(-3.0));
    let near = graph.add(graph.root(), cube(1.0));
    let pick = raycast(&graph, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
    assert_eq!(pick.hit, near);
    assert!((pick.distance - 3.5).abs() < 1e-4);
}

#[test]
fn ring_hole_does_not_block_objects_behind_it() {
    let mut graph = SceneGraph::new();
    let ring = graph.add(
        graph.root(),
        Node::new(
            Transform::default()
                .with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0))
                .with_scale(Vec3::splat(3.0)),
        )
        .with_renderable(Renderable {
            geometry: Geometry::Torus { tube_milli: 10 },
            material: Material::unlit(glam::Vec4::ONE),
        }),
    );
    let ball = graph.add(
        graph.root(),
        Node::new(Transform::from_position(Vec3::new(0.0, 0.0, -2.0))).with_renderable(
            Renderable {
                geometry: Geometry::Sphere {
                    detail: SphereDetail::Low,
                },
                material: Material::lit(glam::Vec4::ONE),
            },
        ),
    );
    let eye = Vec3::new(0.0, 0.0, 6.0);
    let pick = raycast(&graph, eye, Vec3::NEG_Z).unwrap();
    assert_eq!(pick.hit, ball);
    assert!((pick.distance - 7.0).abs() < 1e-4);

    // Aimed at the tube itself the ring still wins.
    let on_tube = Vec3::new(3.0, 0.0, 0.0);
    let pick = raycast(&graph, eye, (on_tube - eye).normalize()).unwrap();
    assert_eq!(pick.hit, ring);
}

#[test]
fn far_side_meteor_is_picked_inside_the_planet_ring() {
    let mut scene = make_scene();
    scene.add_earth_layer();
    scene.add_meteors(DEFAULT_SERVICES);
    let meteor = scene.meteors[0];
    {
        let node = scene.graph.get_mut(meteor.root).unwrap();
        let orbit = node.tags.orbit.as_mut().unwrap();
        orbit.angle = 200.0_f32.to_radians();
        let p = orbit_position(orbit);
        node.transform.position = p;
    }
    let target = scene.graph.world_position(meteor.cube);
    // Behind the planet and inside the outer radius of its ring.
    assert!(target.z < 0.0 && target.length() < 3.1);

    let mut state = InteractionState::default();
    let px = project(&scene, target);
    let pick = state.pointer_down(&scene, VIEWPORT, px).expect("meteor hit");
    assert_eq!(pick.hit, meteor.cube);
    assert_eq!(pick.selected, meteor.root);
    assert_ne!(pick.selected, scene.planet.planet);
}

#[test]
fn drag_rotates_selection_by_pointer_delta() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    let start = center();
    let pick = state.pointer_down(&scene, VIEWPORT, start).expect("planet hit");
    assert_eq!(pick.selected, scene.planet.planet);

    let (dx, dy) = (50.0, -20.0);
    state.pointer_move(&mut scene, VIEWPORT, start + Vec2::new(dx, dy));
    state.pointer_up();

    let rot = scene.graph.get(scene.planet.planet).unwrap().transform.rotation;
    assert!((rot.y - dx * DRAG_YAW_PER_PX).abs() < 1e-6);
    assert!((rot.x - dy * DRAG_PITCH_PER_PX).abs() < 1e-6);
    assert!((rot.y - 0.25).abs() < 1e-6 && (rot.x + 0.1).abs() < 1e-6);
    assert!(state.selected.is_none());
    assert!(state.auto_rotate);

    // An unrelated move after release must leave the object alone.
    state.pointer_move(&mut scene, VIEWPORT, Vec2::new(10.0, 580.0));
    let after = scene.graph.get(scene.planet.planet).unwrap().transform.rotation;
    assert_eq!(after, rot);
}

#[test]
fn drag_pitch_is_clamped() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    let px = project(&scene, scene.graph.world_position(scene.mech_sphere));
    state.pointer_down(&scene, VIEWPORT, px).expect("hit");
    state.pointer_move(&mut scene, VIEWPORT, px + Vec2::new(0.0, 5000.0));
    let rot = scene.graph.get(scene.mech_sphere).unwrap().transform.rotation;
    assert!((rot.x - PITCH_LIMIT).abs() < 1e-6);
    state.pointer_move(&mut scene, VIEWPORT, px - Vec2::new(0.0, 20000.0));
    let rot = scene.graph.get(scene.mech_sphere).unwrap().transform.rotation;
    assert!((rot.x + PITCH_LIMIT).abs() < 1e-6);
}

#[test]
fn move_without_selection_eases_planet_pivot() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    let corner = Vec2::new(VIEWPORT.width, 0.0);
    state.pointer_move(&mut scene, VIEWPORT, corner);
    let first = scene.graph.get(scene.planet.pivot).unwrap().transform.rotation;
    for _ in 0..200 {
        state.pointer_move(&mut scene, VIEWPORT, corner);
    }
    let settled = scene.graph.get(scene.planet.pivot).unwrap().transform.rotation;
    assert!(first.y > 0.0 && first.y < settled.y);
    assert!((settled.y - (PARALLAX_REST_YAW + PARALLAX_YAW_RANGE)).abs() < 1e-3);
    assert!((settled.x - (PARALLAX_REST_PITCH - PARALLAX_PITCH_RANGE)).abs() < 1e-3);
}

#[test]
fn centred_pointer_settles_planet_at_rest_tilt() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    for _ in 0..300 {
        state.pointer_move(&mut scene, VIEWPORT, center());
    }
    let rot = scene.graph.get(scene.planet.pivot).unwrap().transform.rotation;
    let tenth_pi = std::f32::consts::PI * 0.1;
    assert!((rot.y + tenth_pi).abs() < 1e-3, "yaw {}", rot.y);
    assert!((rot.x - tenth_pi).abs() < 1e-3, "pitch {}", rot.x);
}

#[test]
fn selection_suspends_auto_rotation_until_release() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    let px = project(&scene, scene.graph.world_position(scene.mech_sphere));
    state.pointer_down(&scene, VIEWPORT, px);
    scene.step(0.0, state.auto_rotate);
    let yaw = scene.graph.get(scene.planet.planet).unwrap().transform.rotation.y;
    assert_eq!(yaw, 0.0);
    state.pointer_up();
    scene.step(0.0, state.auto_rotate);
    let yaw = scene.graph.get(scene.planet.planet).unwrap().transform.rotation.y;
    assert!(yaw > 0.0);
}

#[test]
fn keys_only_apply_with_a_selection() {
    let mut scene = make_scene();
    let mut state = InteractionState::default();
    assert!(!state.key_down(&mut scene, "ArrowRight"));

    let px = project(&scene, scene.graph.world_position(scene.mech_sphere));
    state.pointer_down(&scene, VIEWPORT, px).expect("hit");
    let before = scene.graph.get(scene.mech_sphere).unwrap().transform.position;
    assert!(state.key_down(&mut scene, "ArrowRight"));
    assert!(state.key_down(&mut scene, "w"));
    let after = scene.graph.get(scene.mech_sphere).unwrap().transform.position;
    assert!((after - before - Vec3::new(NUDGE_STEP, 0.0, -NUDGE_STEP)).length() < 1e-6);

    assert!(state.key_down(&mut scene, "e"));
    assert!(state.key_down(&mut scene, "r"));
    let rot = scene.graph.get(scene.mech_sphere).unwrap().transform.rotation;
    assert!((rot - Vec3::new(-0.1, 0.1, 0.0)).length() < 1e-6);
    assert!(!state.key_down(&mut scene, "x"));

    assert!(state.key_down(&mut scene, " "));
    let t = scene.graph.get(scene.mech_sphere).unwrap().transform;
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Vec3::ZERO);
}

#[test]
fn key_mapping_covers_arrows_and_letter_pairs() {
    for key in ["ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "a", "D", "w", "S"] {
        assert!(matches!(command_for_key(key), Some(KeyCommand::Move(_))), "{key}");
    }
    let r = 0.1;
    assert_eq!(command_for_key("q"), Some(KeyCommand::Rotate(Vec3::new(0.0, -r, 0.0))));
    assert_eq!(command_for_key("e"), Some(KeyCommand::Rotate(Vec3::new(0.0, r, 0.0))));
    assert_eq!(command_for_key("r"), Some(KeyCommand::Rotate(Vec3::new(-r, 0.0, 0.0))));
    assert_eq!(command_for_key("f"), Some(KeyCommand::Rotate(Vec3::new(r, 0.0, 0.0))));
    assert_eq!(command_for_key("w"), Some(KeyCommand::Move(Vec3::new(0.0, 0.0, -r))));
    assert_eq!(command_for_key(" "), Some(KeyCommand::Reset));
    for key in ["i", "k", "j", "l"] {
        assert_eq!(command_for_key(key), None, "{key}");
    }
}

#[test]
fn wheel_zoom_stays_within_bounds() {
    let mut scene = make_scene();
    let mut prev = scene.camera.distance();
    for _ in 0..1000 {
        wheel(&mut scene.camera, 120.0);
        let d = scene.camera.distance();
        assert!(d >= prev);
        assert!((CAMERA_MIN_DISTANCE..=CAMERA_MAX_DISTANCE).contains(&d));
        prev = d;
    }
    assert_eq!(prev, CAMERA_MAX_DISTANCE);
    for _ in 0..1000 {
        wheel(&mut scene.camera, -120.0);
        let d = scene.camera.distance();
        assert!(d <= prev);
        assert!((CAMERA_MIN_DISTANCE..=CAMERA_MAX_DISTANCE).contains(&d));
        prev = d;
    }
    assert_eq!(prev, CAMERA_MIN_DISTANCE);
}
