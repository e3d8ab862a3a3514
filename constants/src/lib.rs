/// Falling-cube pool tunables shared across the demo binaries.
pub mod rain_settings;

/// Static scene layout used by the starter and freelook demos.
pub mod scene_layout;
