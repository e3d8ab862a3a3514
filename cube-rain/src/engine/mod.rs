pub mod camera;
pub mod core;
pub mod rain;
pub mod scene;
pub mod systems;
