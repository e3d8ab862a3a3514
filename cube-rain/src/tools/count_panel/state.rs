use bevy::prelude::*;

// Resources
#[derive(Resource, Default)]
pub struct CountPanelState {
    pub dragging: bool,
}

// Components
#[derive(Component)]
pub struct CountPanelRoot;
#[derive(Component)]
pub struct PanelTitle;
#[derive(Component)]
pub struct CountLabel;
#[derive(Component)]
pub struct SliderTrack;
#[derive(Component)]
pub struct SliderHandle;
