pub mod trend;

use bevy::prelude::*;

pub use trend::trend_view;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
