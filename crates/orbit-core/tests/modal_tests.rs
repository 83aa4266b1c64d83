// Host-side tests for the modal scene lifecycle and its frame step.

use glam::Vec3;
use orbit_core::constants::{
    MODAL_CONNECTOR_COUNT, MODAL_CONNECTOR_REACH, MODAL_PARTICLE_COUNTER_SPIN,
    MODAL_PULSE_AMPLITUDE,
};
use orbit_core::{Geometry, LoopControl, ModalScene, Viewport};

const VIEWPORT: Viewport = Viewport {
    width: 640.0,
    height: 480.0,
};

#[test]
fn opening_twice_does_not_duplicate_the_scene() {
    let mut modal = ModalScene::new(7);
    assert!(modal.open(VIEWPORT));
    let nodes = modal.graph.len();
    assert!(!modal.open(VIEWPORT));
    assert_eq!(modal.graph.len(), nodes);
    assert_eq!(modal.open_count(), 1);
}

#[test]
fn reopening_rebuilds_from_scratch() {
    let mut modal = ModalScene::new(7);
    modal.open(VIEWPORT);
    let nodes = modal.graph.len();
    let first = modal.object().unwrap();
    modal.close();
    assert!(modal.open(VIEWPORT));
    assert_eq!(modal.graph.len(), nodes);
    assert!(!modal.graph.contains(first));
    assert!(modal.graph.contains(modal.object().unwrap()));
    assert_eq!(modal.open_count(), 2);
}

#[test]
fn step_stops_once_closed() {
    let mut modal = ModalScene::new(1);
    assert_eq!(modal.step(0.0), LoopControl::Stop);
    modal.open(VIEWPORT);
    assert_eq!(modal.step(0.1), LoopControl::Continue);
    modal.close();
    assert_eq!(modal.step(0.2), LoopControl::Stop);
}

#[test]
fn object_spins_and_pulses() {
    let mut modal = ModalScene::new(3);
    modal.open(VIEWPORT);
    let object = modal.object().unwrap();
    let mut t = 0.0_f32;
    for _ in 0..300 {
        modal.step(t);
        let s = modal.graph.get(object).unwrap().transform.scale;
        assert!((s.x - s.y).abs() < 1e-6 && (s.y - s.z).abs() < 1e-6);
        assert!(s.x >= 1.0 - MODAL_PULSE_AMPLITUDE - 1e-6);
        assert!(s.x <= 1.0 + MODAL_PULSE_AMPLITUDE + 1e-6);
        t += 1.0 / 60.0;
    }
    let rot = modal.graph.get(object).unwrap().transform.rotation;
    assert!(rot.y > 0.0);
}

#[test]
fn particle_children_counter_rotate() {
    let mut modal = ModalScene::new(3);
    modal.open(VIEWPORT);
    let object = modal.object().unwrap();
    let children = modal.graph.get(object).unwrap().children().to_vec();
    let initial: Vec<Vec3> = children
        .iter()
        .map(|id| modal.graph.get(*id).unwrap().transform.rotation)
        .collect();
    for _ in 0..10 {
        modal.step(0.0);
    }
    let mut particles = 0;
    for (id, start) in children.iter().zip(initial) {
        let node = modal.graph.get(*id).unwrap();
        if node.tags.modal_particle {
            let want = start - 10.0 * MODAL_PARTICLE_COUNTER_SPIN;
            assert!((node.transform.rotation - want).length() < 1e-5);
            particles += 1;
        } else {
            assert_eq!(node.transform.rotation, start);
        }
    }
    assert!(particles > 0);
}

#[test]
fn connector_beams_start_at_the_core() {
    let mut modal = ModalScene::new(5);
    modal.open(VIEWPORT);
    let object = modal.object().unwrap();
    let beams: Vec<_> = modal
        .graph
        .get(object)
        .unwrap()
        .children()
        .iter()
        .filter_map(|id| modal.graph.get(*id))
        .filter(|n| {
            n.renderable.map(|r| r.geometry) == Some(Geometry::Cube) && !n.tags.modal_particle
        })
        .collect();
    assert_eq!(beams.len(), MODAL_CONNECTOR_COUNT);
    for beam in beams {
        let t = beam.transform;
        // Half a length back from the centre lands on the core.
        let near_end = t.position - t.quat() * Vec3::Z * (t.scale.z * 0.5);
        assert!(near_end.length() < 1e-4, "beam starts at {near_end:?}");
        assert!(t.scale.z <= MODAL_CONNECTOR_REACH * 3.0_f32.sqrt() + 1e-5);
    }
}
