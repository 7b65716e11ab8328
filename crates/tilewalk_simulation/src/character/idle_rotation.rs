//! Idle flourish: медленная интерполяция поворота hit-box
//!
//! Action регистрируется при инициализации, но сам по себе не срабатывает —
//! только по явному `IdleFlourish` событию.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::IdleRotationConfig;

/// Интерполяция Euler rotation к `target` за `duration`
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct IdleRotation {
    pub target: Vec3,
    pub duration: Duration,
    tween: Option<RotationTween>,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
struct RotationTween {
    from: Vec3,
    elapsed: Duration,
}

impl IdleRotation {
    pub fn new(target: Vec3, duration: Duration) -> Self {
        Self {
            target,
            duration,
            tween: None,
        }
    }

    pub fn from_config(config: &IdleRotationConfig) -> Self {
        Self::new(
            Vec3::from_array(config.target),
            Duration::from_millis(config.duration_millis),
        )
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    /// Запустить (или перезапустить) интерполяцию от текущего поворота
    pub fn trigger(&mut self, from: Vec3) {
        self.tween = Some(RotationTween {
            from,
            elapsed: Duration::ZERO,
        });
    }

    /// Продвинуть на `delta`, вернуть новый поворот (None если не запущена)
    pub fn advance(&mut self, delta: Duration) -> Option<Vec3> {
        let tween = self.tween.as_mut()?;
        tween.elapsed += delta;

        let t = if self.duration.is_zero() {
            1.0
        } else {
            (tween.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let rotation = tween.from.lerp(self.target, t);

        if t >= 1.0 {
            self.tween = None;
        }

        Some(rotation)
    }
}
