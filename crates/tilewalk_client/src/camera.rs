use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use tilewalk_simulation::Character;

use crate::input::ControlledCharacter;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (orbit_camera_controls, follow_character, update_camera_transform).chain(),
        );
    }
}

/// Орбитальная камера вокруг персонажа (focus = hit-box)
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    /// Скорость догоняния focus (1/сек); hit-box телепортируется шагами
    pub follow_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 25.0,
            yaw: FRAC_PI_4,
            pitch: FRAC_PI_4,
            sensitivity: 0.005,
            zoom_speed: 1.0,
            follow_speed: 6.0,
        }
    }
}

impl OrbitCamera {
    /// Позиция камеры из сферических координат вокруг focus
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.focus + offset * self.distance
    }
}

/// ПКМ: вращение, колесо: zoom
fn orbit_camera_controls(
    mut cameras: Query<&mut OrbitCamera>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) {
        for motion in mouse_motion.read() {
            camera.yaw -= motion.delta.x * camera.sensitivity;
            camera.pitch = (camera.pitch + motion.delta.y * camera.sensitivity)
                .clamp(0.1, FRAC_PI_2 - 0.1);
        }
    } else {
        mouse_motion.clear();
    }

    for wheel in mouse_wheel.read() {
        camera.distance = (camera.distance - wheel.y * camera.zoom_speed)
            .clamp(5.0, 80.0);
    }
}

fn follow_character(
    time: Res<Time>,
    characters: Query<&Character, With<ControlledCharacter>>,
    hit_boxes: Query<&GlobalTransform>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let Some(target) = characters
        .iter()
        .find_map(|character| character.hit_box)
        .and_then(|hit_box| hit_boxes.get(hit_box).ok())
        .map(GlobalTransform::translation)
    else {
        return;
    };

    for mut camera in cameras.iter_mut() {
        if camera.focus.distance_squared(target) < 1e-4 {
            continue;
        }
        let t = (camera.follow_speed * time.delta_secs()).min(1.0);
        camera.focus = camera.focus.lerp(target, t);
    }
}

fn update_camera_transform(
    mut cameras: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (camera, mut transform) in cameras.iter_mut() {
        *transform =
            Transform::from_translation(camera.eye()).looking_at(camera.focus, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_keeps_distance_from_focus() {
        let camera = OrbitCamera {
            focus: Vec3::new(3.0, 1.0, -6.0),
            ..default()
        };
        let eye = camera.eye();
        assert!((eye.distance(camera.focus) - camera.distance).abs() < 1e-4);
        assert!(eye.y > camera.focus.y);
    }
}
