use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config(title: &str) -> Window {
    Window {
        title: title.into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
