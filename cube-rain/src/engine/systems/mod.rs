/// FPS text overlay spawn and per-frame update.
pub mod fps_tracking;

/// Escape-to-quit handling shared by every demo.
pub mod quit;
