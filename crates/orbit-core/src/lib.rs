pub mod animation;
pub mod builder;
pub mod camera;
pub mod constants;
pub mod contact;
pub mod draw;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod material;
pub mod mesh;
pub mod modal;
pub mod params;
pub mod picking;
pub mod scene;
pub mod tags;
pub mod texture;
pub mod transform;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use camera::*;
pub use contact::*;
pub use draw::*;
pub use error::*;
pub use graph::*;
pub use interaction::*;
pub use material::*;
pub use modal::*;
pub use params::*;
pub use scene::*;
pub use tags::*;
pub use transform::*;
