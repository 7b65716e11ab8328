//! Компоненты персонажа: Character, HitBox, Orientation

use bevy::prelude::*;

use crate::error::CharacterError;

/// Каноническое "вперёд" персонажа (модель смотрит в +Z)
pub const CHARACTER_FORWARD: Vec3 = Vec3::Z;

/// Персонаж (логическая entity)
///
/// Создание через [`Character::new`] ничего не аллоцирует в движке.
/// Hit-box появляется после `spawn_hit_boxes` — до этого все команды
/// движения молча игнорируются.
///
/// ```ignore
/// let character = commands.spawn(Character::new("penguin", Vec3::new(0.0, 5.0, 0.0))).id();
/// movement.write(MovementCommand::walk_up(character));
/// ```
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Character {
    pub name: String,
    pub spawn_position: Vec3,
    /// Physics hit-box (proxy collision volume, не визуальная модель)
    pub hit_box: Option<Entity>,
}

impl Character {
    pub fn new(name: impl Into<String>, spawn_position: Vec3) -> Self {
        Self {
            name: name.into(),
            spawn_position,
            hit_box: None,
        }
    }

    /// Имя hit-box entity (`hitbox-<name>`)
    pub fn hit_box_name(&self) -> String {
        format!("hitbox-{}", self.name)
    }

    /// Угол поворота к направлению движения (см. [`signed_facing_angle`])
    ///
    /// Ошибка если hit-box ещё не создан: вызывается только из `teleport`,
    /// который сам проверяет hit-box, так что снаружи это недостижимо.
    pub fn facing_angle(&self, force: Vec3) -> Result<f32, CharacterError> {
        if self.hit_box.is_none() {
            return Err(CharacterError::MissingHitBox {
                name: self.name.clone(),
            });
        }

        Ok(signed_facing_angle(force))
    }
}

/// Знаковый угол между [`CHARACTER_FORWARD`] и `force`, диапазон -π..π
///
/// acos даёт только 0..π. Отрицательная X-компонента направления
/// означает поворот в другую сторону → знак минус.
pub fn signed_facing_angle(force: Vec3) -> f32 {
    let direction = force.normalize_or_zero();
    let angle = direction.dot(CHARACTER_FORWARD).clamp(-1.0, 1.0).acos();

    if direction.x < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Маркер hit-box entity (обратная ссылка на логического персонажа)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HitBox {
    pub owner: Entity,
}

/// Euler rotation hit-box (x = pitch, y = yaw, z = roll)
///
/// Бухгалтерия поворота в Euler-углах: движение выставляет абсолютный yaw
/// и дополнительно применяет инкремент, idle rotation интерполирует вектор.
/// `Transform.rotation` всегда выводится из него.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Orientation(pub Vec3);

impl Orientation {
    pub fn yaw(&self) -> f32 {
        self.0.y
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.0.y = yaw;
    }

    /// Инкрементальный поворот: compose(current, delta) → обратно в Euler
    pub fn add_rotation(&mut self, delta: Vec3) {
        let rotation = self.to_quat() * Quat::from_euler(EulerRot::YXZ, delta.y, delta.x, delta.z);
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        self.0 = Vec3::new(pitch, yaw, roll);
    }

    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.0.y, self.0.x, self.0.z)
    }

    pub fn apply_to(&self, transform: &mut Transform) {
        transform.rotation = self.to_quat();
    }
}

/// Маркер: инициализация персонажа завершена (модель + анимации на месте)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CharacterInitialized;
