use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use tilewalk_simulation::{Character, GameConfig, Ground, GroundConfig, SimulationPlugin};

mod camera;
mod character_visual;
mod ground_visual;
mod input;
mod labels;
mod logger;

use camera::{CameraPlugin, OrbitCamera};
use character_visual::CharacterVisualPlugin;
use ground_visual::GroundVisualPlugin;
use input::{ControlledCharacter, InputPlugin};

/// Необязательный config рядом с бинарником (иначе defaults)
const CONFIG_PATH: &str = "tilewalk.json";

fn main() {
    logger::install();
    let config = GameConfig::load_or_default(CONFIG_PATH);

    App::new()
        // Bevy defaults (rendering, input, assets, picking backend, ...)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "tilewalk".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            MeshPickingPlugin,
            RapierPhysicsPlugin::<NoUserData>::default(),
        ))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin::new(config))
        // Visuals + controls
        .add_plugins((
            CharacterVisualPlugin,
            GroundVisualPlugin,
            CameraPlugin,
            InputPlugin,
        ))
        .add_systems(Startup, setup_scene)
        .run();
}

/// Свет, камера, пол и персонаж
fn setup_scene(mut commands: Commands, ground_config: Res<GroundConfig>) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::default(),
        OrbitCamera::default(),
    ));

    commands.spawn((Name::new("ground"), Ground::from_config(&ground_config)));

    commands.spawn((
        Name::new("penguin"),
        Character::new("penguin", Vec3::new(0.0, 5.0, 0.0)),
        ControlledCharacter,
    ));
}
