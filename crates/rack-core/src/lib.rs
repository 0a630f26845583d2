pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod lifecycle;
pub mod room;
pub mod scene;
pub mod thermal;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use hover::*;
pub use lifecycle::*;
pub use room::*;
