/// Free-look camera resource and per-frame controller system.
pub mod free_camera;

pub use free_camera::{FreeCamera, camera_controller};
