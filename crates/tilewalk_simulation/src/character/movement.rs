//! Дискретное движение персонажа: шаг по сетке + поворот к направлению
//!
//! Шаг = direction × step_distance, прибавляется к позиции hit-box.
//! После шага yaw выставляется на facing angle направления; если он
//! отличается от текущего, поверх применяется ещё и инкремент
//! (target - current). Обе операции нужны анимационной системе.

use bevy::prelude::*;

use crate::character::components::{Character, HitBox, Orientation};
use crate::character::events::MovementCommand;
use crate::config::CharacterConfig;
use crate::error::CharacterError;

impl Character {
    /// Переместить hit-box на `direction × step` и развернуть его
    ///
    /// No-op если hit-box ещё не создан.
    pub fn teleport(
        &self,
        transform: &mut Transform,
        orientation: &mut Orientation,
        direction: Vec3,
        step: f32,
    ) -> Result<(), CharacterError> {
        if self.hit_box.is_none() {
            return Ok(());
        }

        transform.translation += direction * step;

        let current = orientation.yaw();
        let target = self.facing_angle(direction)?;
        if current != target {
            orientation.set_yaw(target);
            orientation.add_rotation(Vec3::new(0.0, target - current, 0.0));
        }
        orientation.apply_to(transform);

        Ok(())
    }
}

/// Система: применить MovementCommand к hit-box персонажей
pub fn apply_movement_commands(
    mut movement_commands: EventReader<MovementCommand>,
    characters: Query<&Character>,
    mut hit_boxes: Query<(&mut Transform, &mut Orientation), With<HitBox>>,
    config: Res<CharacterConfig>,
) {
    for command in movement_commands.read() {
        let Ok(character) = characters.get(command.character) else {
            crate::log_warning(&format!(
                "MovementCommand for unknown character {:?}, dropped",
                command.character
            ));
            continue;
        };

        let Some(hit_box) = character.hit_box else {
            crate::log(&format!(
                "Character '{}' has no hit-box yet, {:?} dropped",
                character.name, command.direction
            ));
            continue;
        };

        let Ok((mut transform, mut orientation)) = hit_boxes.get_mut(hit_box) else {
            continue;
        };

        if let Err(err) = character.teleport(
            &mut transform,
            &mut orientation,
            command.direction.vector(),
            config.step_distance,
        ) {
            crate::log_error(&format!("Character '{}': {}", character.name, err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::events::MoveDirection;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn ready_character() -> Character {
        let mut character = Character::new("penguin", Vec3::ZERO);
        character.hit_box = Some(Entity::PLACEHOLDER);
        character
    }

    #[test]
    fn test_step_deltas() {
        let character = ready_character();

        for direction in [
            MoveDirection::Up,
            MoveDirection::Down,
            MoveDirection::Left,
            MoveDirection::Right,
            MoveDirection::Jump,
        ] {
            let start = Vec3::new(1.0, 2.0, 3.0);
            let mut transform = Transform::from_translation(start);
            let mut orientation = Orientation::default();

            character
                .teleport(&mut transform, &mut orientation, direction.vector(), 3.0)
                .unwrap();

            assert_eq!(
                transform.translation - start,
                direction.vector() * 3.0,
                "direction {:?}",
                direction
            );
        }
    }

    #[test]
    fn test_teleport_without_hit_box_is_noop() {
        let character = Character::new("penguin", Vec3::ZERO);
        let mut transform = Transform::default();
        let mut orientation = Orientation::default();

        character
            .teleport(&mut transform, &mut orientation, Vec3::X, 3.0)
            .unwrap();

        assert_eq!(transform, Transform::default());
        assert_eq!(orientation, Orientation::default());
    }

    #[test]
    fn test_same_facing_does_not_rotate() {
        let character = ready_character();
        let mut transform = Transform::default();
        let mut orientation = Orientation::default();

        // Forward = +Z, yaw уже 0
        character
            .teleport(&mut transform, &mut orientation, Vec3::Z, 3.0)
            .unwrap();

        assert_eq!(orientation.yaw(), 0.0);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_facing_applies_absolute_and_incremental_rotation() {
        let character = ready_character();
        let mut transform = Transform::default();
        let mut orientation = Orientation::default();

        // 0 → target π/2: set π/2, затем + (π/2 - 0)
        character
            .teleport(&mut transform, &mut orientation, Vec3::X, 3.0)
            .unwrap();
        assert!((orientation.yaw().abs() - PI).abs() < EPSILON, "yaw = {}", orientation.yaw());

        // current ±π → target π/2: set π/2, затем + (π/2 - current)
        let current = orientation.yaw();
        character
            .teleport(&mut transform, &mut orientation, Vec3::X, 3.0)
            .unwrap();
        let mut expected = Orientation(Vec3::new(0.0, FRAC_PI_2, 0.0));
        expected.add_rotation(Vec3::new(0.0, FRAC_PI_2 - current, 0.0));
        assert!(
            orientation.to_quat().angle_between(expected.to_quat()) < 1e-4,
            "yaw = {}",
            orientation.yaw()
        );

        // Transform.rotation синхронизирован с Orientation
        assert!(transform.rotation.angle_between(orientation.to_quat()) < 1e-4);
    }
}
