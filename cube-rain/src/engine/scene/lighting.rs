use bevy::prelude::*;

use constants::scene_layout::MAIN_LIGHT_POSITION;

// Without a light we would just get a black screen.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.5, 0.5, 0.5),
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            shadows_enabled: false,
            range: 3000.0,
            intensity: 50_000_000.0,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(MAIN_LIGHT_POSITION)),
    ));
}
