/// Page wiring and front-end tuning constants.
///
/// Element ids must match the host page; timings are in milliseconds.
// Main scene canvas
pub const SCENE_CANVAS_ID: &str = "scene-canvas";
// Attribute on the main canvas that overrides the planet map URL
pub const EARTH_TEXTURE_ATTR: &str = "data-earth-texture";

// Modal dialog
pub const MODAL_ID: &str = "modal";
pub const MODAL_CANVAS_CONTAINER_ID: &str = "modal-canvas-container";
pub const OPEN_MODAL_ID: &str = "open-modal";
pub const CLOSE_MODAL_ID: &str = "close-modal";
pub const MODAL_BACKDROP_ID: &str = "modal-backdrop";
pub const MODAL_ACTIVE_CLASS: &str = "active";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const NOTIFICATION_ID: &str = "notification";
pub const NOTIFICATION_SHOW_CLASS: &str = "show";

// Toast visibility and the delay before the modal closes after a submit
pub const NOTIFICATION_DURATION_MS: i32 = 3000;
pub const MODAL_CLOSE_DELAY_MS: i32 = 1000;

// Label rasterisation (pixels)
pub const LABEL_TEXTURE_WIDTH: u32 = 512;
pub const LABEL_TEXTURE_HEIGHT: u32 = 128;
pub const LABEL_FONT: &str = "bold 72px Arial";

// Caption plate on the orbiting UI marker
pub const UI_PLATE_TEXT: &str = "UI UX";
pub const UI_PLATE_TEXTURE_WIDTH: u32 = 512;
pub const UI_PLATE_TEXTURE_HEIGHT: u32 = 256;
pub const UI_PLATE_FONT: &str = "bold 120px Arial";

// Lighting and clear colours (linear)
pub const LIGHT_DIR: [f32; 3] = [0.5, 0.8, 0.6];
pub const MAIN_CLEAR: [f64; 3] = [0.01, 0.01, 0.03];
pub const MODAL_CLEAR: [f64; 3] = [0.02, 0.02, 0.05];

// Seed for the modal scene's particle layout
pub const MODAL_SEED: u64 = 7;
