//! Character events

use bevy::prelude::*;

/// Дискретное направление движения (единичный вектор)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
    Jump,
}

impl MoveDirection {
    pub fn vector(&self) -> Vec3 {
        match self {
            MoveDirection::Up => Vec3::Z,
            MoveDirection::Down => Vec3::NEG_Z,
            MoveDirection::Right => Vec3::X,
            MoveDirection::Left => Vec3::NEG_X,
            MoveDirection::Jump => Vec3::Y,
        }
    }
}

/// Event: команда шага персонажа
///
/// Генерируется input системой клиента (или тестами).
/// Обрабатывается `apply_movement_commands`; до появления hit-box
/// команда просто теряется (без очереди).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MovementCommand {
    pub character: Entity,
    pub direction: MoveDirection,
}

impl MovementCommand {
    pub fn new(character: Entity, direction: MoveDirection) -> Self {
        Self {
            character,
            direction,
        }
    }

    pub fn walk_up(character: Entity) -> Self {
        Self::new(character, MoveDirection::Up)
    }

    pub fn walk_down(character: Entity) -> Self {
        Self::new(character, MoveDirection::Down)
    }

    pub fn walk_left(character: Entity) -> Self {
        Self::new(character, MoveDirection::Left)
    }

    pub fn walk_right(character: Entity) -> Self {
        Self::new(character, MoveDirection::Right)
    }

    pub fn jump(character: Entity) -> Self {
        Self::new(character, MoveDirection::Jump)
    }
}

/// Event: визуальная модель прикреплена к hit-box, анимации разложены по ролям
///
/// Отправляет клиент после загрузки model bundle. Симуляция в ответ
/// регистрирует idle rotation и объявляет персонажа готовым.
#[derive(Event, Debug, Clone)]
pub struct ModelAttached {
    pub character: Entity,
}

/// Event: инициализация персонажа завершена
#[derive(Event, Debug, Clone)]
pub struct CharacterReady {
    pub character: Entity,
    pub hit_box: Entity,
}

/// Event: model bundle не загрузился (ошибка движка как есть)
#[derive(Event, Debug, Clone)]
pub struct CharacterLoadFailed {
    pub character: Entity,
    pub error: String,
}

/// Event: запустить idle flourish (медленный поворот)
#[derive(Event, Debug, Clone)]
pub struct IdleFlourish {
    pub character: Entity,
}
