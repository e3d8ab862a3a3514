use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::rain_settings::{MAX_CUBE_COUNT, MIN_CUBE_COUNT};

use super::state::*;
use crate::engine::rain::{RainPool, RequestedCubeCount};

// Pressing the track starts a drag, hover tints the track
pub fn slider_track_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<SliderTrack>)>,
    mut state: ResMut<CountPanelState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.dragging = true;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// While dragging, map the cursor to a cube count within the slider range
pub fn drag_slider(
    mut state: ResMut<CountPanelState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    track: Query<(&ComputedNode, &GlobalTransform), With<SliderTrack>>,
    mut requested: ResMut<RequestedCubeCount>,
) {
    if !state.dragging {
        return;
    }
    if !mouse_button.pressed(MouseButton::Left) {
        state.dragging = false;
        return;
    }

    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((node, transform)) = track.single() else {
        return;
    };

    // ComputedNode reports physical pixels, cursor position is logical
    let scale = node.inverse_scale_factor();
    let width = node.size().x * scale;
    if width <= f32::EPSILON {
        return;
    }
    let centre_x = transform.translation().x * scale;
    let ratio = ((cursor.x - (centre_x - width * 0.5)) / width).clamp(0.0, 1.0);

    let span = (MAX_CUBE_COUNT - MIN_CUBE_COUNT) as f32;
    requested.0 = MIN_CUBE_COUNT + (ratio * span).round() as usize;
}

// Handle follows the requested count along the track
pub fn reflect_slider_handle(
    requested: Res<RequestedCubeCount>,
    mut handle: Query<&mut Node, With<SliderHandle>>,
) {
    let Ok(mut node) = handle.single_mut() else {
        return;
    };
    let span = (MAX_CUBE_COUNT - MIN_CUBE_COUNT) as f32;
    let ratio = requested.0.saturating_sub(MIN_CUBE_COUNT) as f32 / span;
    node.left = Val::Percent(ratio.clamp(0.0, 1.0) * 95.0);
}

// Readout shows the live pool size, not the request
pub fn reflect_count_label(rain: Res<RainPool>, mut labels: Query<&mut Text, With<CountLabel>>) {
    for mut text in &mut labels {
        text.0 = format!("cubes: {}", rain.0.len());
    }
}
