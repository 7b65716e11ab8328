//! Bundles физических тел: hit-box персонажа и тайл пола

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::BodyConfig;

/// Параметры тела в терминах игры (mass 0 = неподвижное тело)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BodyParams {
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl BodyParams {
    /// Статическое тело (mass 0, без трения и отскока)
    pub const STATIC: Self = Self {
        mass: 0.0,
        friction: 0.0,
        restitution: 0.0,
    };

    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }
}

impl From<BodyConfig> for BodyParams {
    fn from(config: BodyConfig) -> Self {
        Self {
            mass: config.mass,
            friction: config.friction,
            restitution: config.restitution,
        }
    }
}

/// Box body: mass 0 → RigidBody::Fixed, иначе Dynamic с заданной массой
fn box_body(size: Vec3, params: BodyParams) -> impl Bundle {
    let half = size * 0.5;
    let rigid_body = if params.is_static() {
        RigidBody::Fixed
    } else {
        RigidBody::Dynamic
    };

    (
        rigid_body,
        Collider::cuboid(half.x, half.y, half.z),
        ColliderMassProperties::Mass(params.mass.max(0.0)),
        Friction::coefficient(params.friction),
        Restitution::coefficient(params.restitution),
        params,
    )
}

/// Hit-box персонажа: dynamic box, вращение залочено
///
/// Yaw выставляет движение персонажа, контакты с полом не должны его крутить.
pub fn hit_box_body(size: Vec3, body: BodyConfig) -> impl Bundle {
    (box_body(size, body.into()), LockedAxes::ROTATION_LOCKED)
}

/// Тайл пола: неподвижный куб со стороной `cube_size`
pub fn tile_body(cube_size: f32) -> impl Bundle {
    box_body(Vec3::splat(cube_size), BodyParams::STATIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_box_body_params() {
        let mut world = World::new();
        let body = BodyConfig {
            mass: 1.0,
            friction: 0.7,
            restitution: 0.7,
        };
        let entity = world
            .spawn(hit_box_body(Vec3::new(2.0, 4.0, 2.0), body))
            .id();

        let rigid_body = world.get::<RigidBody>(entity).unwrap();
        assert_eq!(*rigid_body, RigidBody::Dynamic);

        let friction = world.get::<Friction>(entity).unwrap();
        assert_eq!(friction.coefficient, 0.7);

        let restitution = world.get::<Restitution>(entity).unwrap();
        assert_eq!(restitution.coefficient, 0.7);

        match world.get::<ColliderMassProperties>(entity).unwrap() {
            ColliderMassProperties::Mass(mass) => assert_eq!(*mass, 1.0),
            other => panic!("unexpected mass properties: {:?}", other),
        }

        let cuboid = world.get::<Collider>(entity).unwrap().as_cuboid().unwrap();
        assert_eq!(cuboid.half_extents(), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_tile_body_is_static() {
        let mut world = World::new();
        let entity = world.spawn(tile_body(3.0)).id();

        assert_eq!(*world.get::<RigidBody>(entity).unwrap(), RigidBody::Fixed);
        assert!(world.get::<BodyParams>(entity).unwrap().is_static());
        assert_eq!(world.get::<Friction>(entity).unwrap().coefficient, 0.0);
    }
}
