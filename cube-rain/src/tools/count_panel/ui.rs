use bevy::prelude::*;

use super::state::*;

// Spawns the overlay panel with title, count readout and slider
pub fn spawn_count_panel(mut commands: Commands) {
    commands
        .spawn((
            CountPanelRoot,
            Name::new("CountPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(220.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                PanelTitle,
                Name::new("Title"),
                Text::new("Cube Rain"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));

            parent.spawn((
                CountLabel,
                Name::new("CountLabel"),
                Text::new("cubes: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.87, 0.90)),
            ));

            // Slider: full-width track with a draggable handle
            parent
                .spawn((
                    SliderTrack,
                    Name::new("SliderTrack"),
                    Button,
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(18.0),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|track| {
                    track.spawn((
                        SliderHandle,
                        Name::new("SliderHandle"),
                        BackgroundColor(Color::srgb(0.55, 0.60, 0.68)),
                        Node {
                            position_type: PositionType::Absolute,
                            width: Val::Px(10.0),
                            height: Val::Percent(100.0),
                            left: Val::Percent(0.0),
                            ..default()
                        },
                    ));
                });
        });
}
