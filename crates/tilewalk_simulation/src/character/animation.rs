//! Анимации персонажа: роли idle / walk / attack
//!
//! Клипы приходят из model bundle вместе с мешем. Все клипы останавливаются
//! сразу (ничего не играет по умолчанию), затем раскладываются по ролям
//! точным совпадением имени. Остальные клипы игнорируются.

use bevy::prelude::*;

/// Роль анимации персонажа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AnimationRole {
    Idle,
    Walk,
    Attack,
}

impl AnimationRole {
    pub const ALL: [AnimationRole; 3] = [
        AnimationRole::Idle,
        AnimationRole::Walk,
        AnimationRole::Attack,
    ];

    /// Имя клипа в bundle (exact match)
    pub fn clip_name(&self) -> &'static str {
        match self {
            AnimationRole::Idle => "idle",
            AnimationRole::Walk => "walk",
            AnimationRole::Attack => "attack",
        }
    }

    pub fn from_clip_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.clip_name() == name)
    }
}

/// Роль → handle клипа (None если клипа с таким именем нет)
///
/// Generic по handle: симуляция не знает про `AnimationNodeIndex`,
/// клиент хранит здесь индексы узлов своего AnimationGraph.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CharacterAnimations<H: Send + Sync + 'static> {
    pub idle: Option<H>,
    pub walk: Option<H>,
    pub attack: Option<H>,
}

impl<H: Send + Sync + 'static> Default for CharacterAnimations<H> {
    fn default() -> Self {
        Self {
            idle: None,
            walk: None,
            attack: None,
        }
    }
}

impl<H: Send + Sync + 'static> CharacterAnimations<H> {
    pub fn get(&self, role: AnimationRole) -> Option<&H> {
        match role {
            AnimationRole::Idle => self.idle.as_ref(),
            AnimationRole::Walk => self.walk.as_ref(),
            AnimationRole::Attack => self.attack.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: AnimationRole) -> &mut Option<H> {
        match role {
            AnimationRole::Idle => &mut self.idle,
            AnimationRole::Walk => &mut self.walk,
            AnimationRole::Attack => &mut self.attack,
        }
    }

    pub fn bound_count(&self) -> usize {
        AnimationRole::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_some())
            .count()
    }
}

/// Управление воспроизведением клипов (stop)
///
/// Реализуется клиентом поверх `AnimationPlayer`. `()` — для моделей без
/// плеера (нечего останавливать).
pub trait AnimationControl<H> {
    fn stop(&mut self, clip: &H);
}

impl<H> AnimationControl<H> for () {
    fn stop(&mut self, _clip: &H) {}
}

/// Остановить все клипы и разложить их по ролям
///
/// `clips` — (имя, handle) в порядке bundle. При дубликатах имени
/// роль получает первый клип.
pub fn classify_animations<N, H, C>(control: &mut C, clips: &[(N, H)]) -> CharacterAnimations<H>
where
    N: AsRef<str>,
    H: Clone + Send + Sync + 'static,
    C: AnimationControl<H>,
{
    for (_, handle) in clips {
        control.stop(handle);
    }

    let mut animations = CharacterAnimations::default();
    for (name, handle) in clips {
        let Some(role) = AnimationRole::from_clip_name(name.as_ref()) else {
            continue;
        };

        let slot = animations.slot_mut(role);
        if slot.is_none() {
            *slot = Some(handle.clone());
        }
    }

    animations
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock плеер: записывает остановленные клипы
    #[derive(Default)]
    struct RecordingControl {
        stopped: Vec<u32>,
    }

    impl AnimationControl<u32> for RecordingControl {
        fn stop(&mut self, clip: &u32) {
            self.stopped.push(*clip);
        }
    }

    #[test]
    fn test_role_from_clip_name_is_exact() {
        assert_eq!(AnimationRole::from_clip_name("walk"), Some(AnimationRole::Walk));
        assert_eq!(AnimationRole::from_clip_name("Walk"), None);
        assert_eq!(AnimationRole::from_clip_name("walk_fast"), None);
        assert_eq!(AnimationRole::from_clip_name(""), None);
    }

    #[test]
    fn test_classify_binds_roles_and_stops_everything() {
        let clips = [
            ("dance", 0),
            ("walk", 1),
            ("idle", 2),
            ("attack", 3),
            ("jump", 4),
        ];
        let mut control = RecordingControl::default();

        let animations = classify_animations(&mut control, &clips);

        assert_eq!(animations.walk, Some(1));
        assert_eq!(animations.idle, Some(2));
        assert_eq!(animations.attack, Some(3));
        assert_eq!(control.stopped, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_classify_with_duplicates_and_missing() {
        let clips = [("walk", 10), ("walk", 11), ("Idle", 12)];
        let mut control = RecordingControl::default();

        let animations = classify_animations(&mut control, &clips);

        // Первый "walk" выигрывает, "Idle" не совпадает, "attack" нет
        assert_eq!(animations.walk, Some(10));
        assert_eq!(animations.idle, None);
        assert_eq!(animations.attack, None);
        assert_eq!(animations.bound_count(), 1);
        assert_eq!(control.stopped.len(), 3);
    }

    #[test]
    fn test_classify_empty_bundle() {
        let clips: [(&str, u32); 0] = [];
        let animations = classify_animations(&mut (), &clips);
        assert_eq!(animations, CharacterAnimations::default());
        assert_eq!(animations.get(AnimationRole::Idle), None);
    }
}
