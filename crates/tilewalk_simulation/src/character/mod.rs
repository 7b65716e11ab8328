//! Character domain — персонаж с дискретным движением по сетке
//!
//! Содержит:
//! - Character / HitBox / Orientation (components)
//! - facing angle + teleport (movement)
//! - роли анимаций idle / walk / attack (animation)
//! - idle flourish (idle_rotation)
//! - инициализация hit-box → модель → ready (spawn)
//!
//! Визуальная модель и загрузка клипов — в клиенте.

use bevy::prelude::*;

pub mod animation;
pub mod components;
pub mod events;
pub mod idle_rotation;
pub mod movement;
pub mod spawn;

// Re-export основных типов
pub use animation::{classify_animations, AnimationControl, AnimationRole, CharacterAnimations};
pub use components::*;
pub use events::*;
pub use idle_rotation::IdleRotation;
pub use spawn::spawn_hit_box;

/// Character Plugin
///
/// Порядок выполнения (Update, chain):
/// 1. spawn_hit_boxes — hit-box для новых Character
/// 2. complete_initialization — ModelAttached → IdleRotation + CharacterReady
/// 3. apply_movement_commands — шаги и поворот
/// 4. start_idle_rotation / tick_idle_rotation — flourish
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::config::CharacterConfig>()
            .add_event::<MovementCommand>()
            .add_event::<ModelAttached>()
            .add_event::<CharacterReady>()
            .add_event::<CharacterLoadFailed>()
            .add_event::<IdleFlourish>()
            .register_type::<Character>()
            .register_type::<HitBox>()
            .register_type::<Orientation>()
            .register_type::<IdleRotation>();

        app.add_systems(
            Update,
            (
                spawn::spawn_hit_boxes,
                spawn::complete_initialization,
                movement::apply_movement_commands,
                spawn::start_idle_rotation,
                spawn::tick_idle_rotation,
            )
                .chain(),
        );
    }
}
