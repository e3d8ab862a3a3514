//! Static starter scene: ambient plus main light, a fixed camera and
//! three survey cubes. Esc quits.

use bevy::prelude::*;

use cube_rain::engine::core::app_setup::{create_default_plugins, spawn_demo_camera};
use cube_rain::engine::scene::cubes::spawn_survey_cubes;
use cube_rain::engine::scene::lighting::spawn_lighting;
use cube_rain::engine::systems::quit::exit_on_escape;

fn main() {
    App::new()
        .add_plugins(create_default_plugins("starter"))
        .add_systems(Startup, setup)
        .add_systems(Update, exit_on_escape)
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(&mut commands);
    spawn_demo_camera(&mut commands);
    spawn_survey_cubes(&mut commands, &mut meshes, &mut materials);
}
