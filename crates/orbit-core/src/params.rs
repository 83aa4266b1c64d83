use glam::Vec4;

/// A service shown as an orbiting meteor with a text label.
#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub label: &'static str,
    pub color: Vec4,
}

pub const DEFAULT_SERVICES: &[Service] = &[
    Service {
        label: "Web Develop",
        color: Vec4::new(0.0, 1.0, 0.0, 1.0),
    },
    Service {
        label: "UI/UX Design",
        color: Vec4::new(1.0, 0.0, 1.0, 1.0),
    },
    Service {
        label: "AI Solutions",
        color: Vec4::new(0.0, 0.0, 1.0, 1.0),
    },
    Service {
        label: "Mobile Apps",
        color: Vec4::new(1.0, 1.0, 0.0, 1.0),
    },
    Service {
        label: "Marketing",
        color: Vec4::new(0.0, 1.0, 1.0, 1.0),
    },
];

/// Equirectangular planet map wrapped around the planet on load.
pub const EARTH_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/mrdoob/three.js/dev/examples/textures/planets/earth_atmos_2048.jpg";

/// Runtime parameters for building the main scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particle_count: usize,
    pub seed: u64,
    pub services: &'static [Service],
    pub earth_texture_url: String,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: 300,
            seed: 42,
            services: DEFAULT_SERVICES,
            earth_texture_url: EARTH_TEXTURE_URL.to_string(),
        }
    }
}
