use glam::Vec3;

// Shared scene/interaction tuning constants. Per-frame increments assume one
// step per display refresh.

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START_DISTANCE: f32 = 7.0;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 15.0;
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.1; // distance change per wheel delta unit

// Planet
pub const PLANET_RADIUS: f32 = 2.0;
pub const PLANET_SPIN_PER_FRAME: f32 = 0.0005; // yaw increment while auto-rotating
pub const GLOW_SCALE: f32 = 1.1;
pub const GLOW_C: f32 = 0.7;
pub const GLOW_P: f32 = 3.0;
pub const GRID_SHELL_SCALE: f32 = 1.005;
pub const GRID_SHELL_OPACITY: f32 = 0.1;
pub const EARTH_OPACITY: f32 = 0.9;

// Orbiting UI marker (child of the planet)
pub const UI_MARKER_RADIUS: f32 = 3.0;
pub const UI_MARKER_TILT: f32 = 0.35;
pub const UI_PLATE_SIZE: [f32; 2] = [1.2, 0.4];
pub const UI_DOT_OFFSET: f32 = 0.8; // dot sits this far along x from the plate centre
pub const UI_TRAIL_RADII: [f32; 2] = [3.0, 2.0]; // ellipse semi-axes (x, z)
pub const UI_TRAIL_OPACITY: f32 = 0.3;

// Mechanical sphere ornament
pub const MECH_SPHERE_POSITION: Vec3 = Vec3::new(3.0, -2.0, 0.0);
pub const MECH_SPHERE_RADIUS: f32 = 0.4;
pub const MECH_RING_RADIUS: f32 = 0.5;

// Meteors (service markers)
pub const METEOR_ORBIT_RADIUS: f32 = 3.0;
pub const METEOR_SPEED: f32 = 0.003; // radians per frame
pub const METEOR_HEIGHT: f32 = 0.5; // even indices ride above the equator, odd ones below
pub const METEOR_BOB: f32 = 0.1; // amplitude of the vertical secondary oscillation
pub const METEOR_CUBE_SIZE: f32 = 0.4;
pub const METEOR_CUBE_SPIN: Vec3 = Vec3::splat(0.0005);
pub const METEOR_LABEL_OFFSET: Vec3 = Vec3::new(1.2, 0.3, 0.0);
pub const METEOR_LABEL_SIZE: [f32; 2] = [2.0, 0.5];

// Particles
pub const PARTICLE_SHELL_INNER: f32 = 5.0;
pub const PARTICLE_SHELL_OUTER: f32 = 20.0;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_DRIFT_AMPLITUDE: f32 = 0.3; // max offset from rest on each axis
pub const PARTICLE_SPIN_MAX: f32 = 0.005; // radians per frame on each axis

// Interaction
pub const DRAG_YAW_PER_PX: f32 = 0.005; // k_y
pub const DRAG_PITCH_PER_PX: f32 = 0.005; // k_x
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
pub const NUDGE_STEP: f32 = 0.1;
pub const NUDGE_ROTATION_STEP: f32 = 0.1;
pub const PARALLAX_YAW_RANGE: f32 = 0.5; // radians at the screen edge
pub const PARALLAX_PITCH_RANGE: f32 = 0.25;
// Resting pose of the planet pivot with the pointer at screen centre
pub const PARALLAX_REST_YAW: f32 = -std::f32::consts::PI * 0.1;
pub const PARALLAX_REST_PITCH: f32 = std::f32::consts::PI * 0.1;
pub const PARALLAX_SMOOTHING: f32 = 0.05; // fraction of the remaining gap closed per move

// Modal scene
pub const MODAL_CAMERA_DISTANCE: f32 = 5.0;
pub const MODAL_SPIN_PER_FRAME: Vec3 = Vec3::new(0.005, 0.007, 0.0);
pub const MODAL_PULSE_AMPLITUDE: f32 = 0.1;
pub const MODAL_PULSE_RATE: f32 = 1.0; // radians per second
pub const MODAL_PARTICLE_COUNT: usize = 60;
pub const MODAL_PARTICLE_COUNTER_SPIN: Vec3 = Vec3::new(0.002, 0.003, 0.0);
pub const MODAL_CONNECTOR_COUNT: usize = 8;
pub const MODAL_CONNECTOR_REACH: f32 = 1.0; // endpoints fall inside a cube of this half-size
