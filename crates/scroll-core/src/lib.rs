pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod damping;
pub mod geometry;
pub mod lifecycle;
pub mod scene;
pub mod section;
pub mod state;
pub mod tween;
pub mod viewport;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use damping::*;
pub use lifecycle::*;
pub use scene::*;
pub use section::*;
pub use state::*;
pub use tween::*;
pub use viewport::*;
