//! Keyboard → MovementCommand (минимальная привязка для управления персонажем)

use bevy::prelude::*;
use tilewalk_simulation::{
    log_info, Character, Ground, IdleFlourish, MoveDirection, MovementCommand, RebuildGround,
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_movement, toggle_ground_debug));
    }
}

/// Персонаж, которым управляет клавиатура
#[derive(Component)]
pub struct ControlledCharacter;

const MOVE_BINDINGS: [(KeyCode, MoveDirection); 5] = [
    (KeyCode::KeyW, MoveDirection::Up),
    (KeyCode::KeyS, MoveDirection::Down),
    (KeyCode::KeyA, MoveDirection::Left),
    (KeyCode::KeyD, MoveDirection::Right),
    (KeyCode::Space, MoveDirection::Jump),
];

fn keyboard_movement(
    keys: Res<ButtonInput<KeyCode>>,
    characters: Query<Entity, (With<Character>, With<ControlledCharacter>)>,
    mut movement: EventWriter<MovementCommand>,
    mut flourish: EventWriter<IdleFlourish>,
) {
    let Ok(character) = characters.single() else {
        return;
    };

    for (key, direction) in MOVE_BINDINGS {
        if keys.just_pressed(key) {
            movement.write(MovementCommand::new(character, direction));
        }
    }

    if keys.just_pressed(KeyCode::KeyF) {
        flourish.write(IdleFlourish { character });
    }
}

/// F3: переключить debug labels и перестроить сетку
fn toggle_ground_debug(
    keys: Res<ButtonInput<KeyCode>>,
    mut grounds: Query<(Entity, &mut Ground)>,
    mut rebuilds: EventWriter<RebuildGround>,
) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    for (entity, mut ground) in grounds.iter_mut() {
        let debug = !ground.debug;
        ground.set_debug(debug);
        rebuilds.write(RebuildGround { ground: entity });
        log_info(&format!("Ground debug labels: {}", debug));
    }
}
