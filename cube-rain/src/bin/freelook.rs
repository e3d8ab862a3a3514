//! Survey scene with an interactive free-look camera and an FPS
//! overlay. The cursor is confined to the window; Esc quits.

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use cube_rain::engine::camera::{FreeCamera, camera_controller};
use cube_rain::engine::core::app_setup::{create_default_plugins, spawn_demo_camera};
use cube_rain::engine::scene::cubes::spawn_survey_cubes;
use cube_rain::engine::scene::lighting::spawn_lighting;
use cube_rain::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
use cube_rain::engine::systems::quit::exit_on_escape;

fn main() {
    App::new()
        .add_plugins(create_default_plugins("freelook"))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(FreeCamera::for_survey())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (camera_controller, fps_text_update_system, exit_on_escape),
        )
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    spawn_lighting(&mut commands);
    spawn_demo_camera(&mut commands);
    spawn_survey_cubes(&mut commands, &mut meshes, &mut materials);
    spawn_fps_overlay(&mut commands);

    println!("camera style: freelook");

    // Grab the mouse like the classic sample does
    if let Ok(mut window) = windows.single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Confined;
    }
}
