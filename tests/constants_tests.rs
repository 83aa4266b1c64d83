// Host-side tests for front-end constants and their relationships with the
// scene tuning in orbit-core. The main crate is wasm-only, so we include the
// pure-Rust constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use orbit_core::constants as scene;

#[test]
fn dom_ids_are_distinct_and_non_empty() {
    let ids = [
        SCENE_CANVAS_ID,
        MODAL_ID,
        MODAL_CANVAS_CONTAINER_ID,
        OPEN_MODAL_ID,
        CLOSE_MODAL_ID,
        MODAL_BACKDROP_ID,
        CONTACT_FORM_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_MESSAGE_ID,
        NOTIFICATION_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(char::is_whitespace), "{a:?}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(EARTH_TEXTURE_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(NOTIFICATION_DURATION_MS > 0);
    assert!(MODAL_CLOSE_DELAY_MS > 0);
    // the toast is still visible when the modal goes away
    assert!(MODAL_CLOSE_DELAY_MS < NOTIFICATION_DURATION_MS);
    assert_eq!(MODAL_CLOSE_DELAY_MS, 1000);
    assert_eq!(NOTIFICATION_DURATION_MS, 3000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ui_plate_texture_matches_plate_quad_aspect_within_text_margin() {
    let tex_aspect = UI_PLATE_TEXTURE_WIDTH as f32 / UI_PLATE_TEXTURE_HEIGHT as f32;
    let quad_aspect = scene::UI_PLATE_SIZE[0] / scene::UI_PLATE_SIZE[1];
    // The canvas is squashed onto a wider plate; keep the stretch modest.
    assert!(quad_aspect / tex_aspect < 2.0);
    assert!(!UI_PLATE_TEXT.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn label_texture_matches_label_quad_aspect() {
    let tex_aspect = LABEL_TEXTURE_WIDTH as f32 / LABEL_TEXTURE_HEIGHT as f32;
    let quad_aspect = scene::METEOR_LABEL_SIZE[0] / scene::METEOR_LABEL_SIZE[1];
    assert!((tex_aspect - quad_aspect).abs() < 1e-3);
}

#[test]
fn light_and_clear_colours_are_sane() {
    let len = LIGHT_DIR.iter().map(|v| v * v).sum::<f32>().sqrt();
    assert!(len > 0.0);
    for c in MAIN_CLEAR.iter().chain(MODAL_CLEAR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_tuning_relationships() {
    assert!(scene::CAMERA_MIN_DISTANCE < scene::CAMERA_START_DISTANCE);
    assert!(scene::CAMERA_START_DISTANCE < scene::CAMERA_MAX_DISTANCE);
    assert!(scene::CAMERA_ZNEAR < scene::CAMERA_MIN_DISTANCE);
    // meteors orbit outside the planet and its glow
    assert!(scene::METEOR_ORBIT_RADIUS > scene::PLANET_RADIUS * scene::GLOW_SCALE);
    assert!(scene::GRID_SHELL_SCALE < scene::GLOW_SCALE);
    // the marker plate sits on its trail ellipse
    assert_eq!(scene::UI_MARKER_RADIUS, scene::UI_TRAIL_RADII[0]);
    assert!(scene::PARALLAX_SMOOTHING > 0.0 && scene::PARALLAX_SMOOTHING < 1.0);
    assert!(scene::MODAL_PULSE_AMPLITUDE < 1.0);
}
