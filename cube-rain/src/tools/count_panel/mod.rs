//! Debug overlay panel with the cube-count slider.
//!
//! Layout follows the usual panel pattern: a root node with marker
//! components, interaction systems keyed on `Changed<Interaction>`, and
//! reflect systems that push resource state back into the UI nodes.
//! Dragging the track writes a clamped count into `RequestedCubeCount`.

/// UI button/track interaction and reflect systems.
pub mod interactions;

/// Drag state resource and node marker components.
pub mod state;

/// Panel spawning.
pub mod ui;

use bevy::prelude::*;

pub use state::CountPanelState;

use interactions::{
    drag_slider, reflect_count_label, reflect_slider_handle, slider_track_interaction,
};
use ui::spawn_count_panel;

// Registers the overlay panel, its state and its systems.
pub struct CountPanelPlugin;

impl Plugin for CountPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CountPanelState>()
            .add_systems(Startup, spawn_count_panel)
            .add_systems(
                Update,
                (
                    slider_track_interaction,
                    drag_slider,
                    reflect_slider_handle,
                    reflect_count_label,
                ),
            );
    }
}
