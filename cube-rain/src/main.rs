//! Cube rain: falling cubes with a free-look camera and a debug overlay
//! slider for the cube count. Esc quits.

use cube_rain::engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
