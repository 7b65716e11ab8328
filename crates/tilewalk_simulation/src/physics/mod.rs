//! Physics bodies через Rapier
//!
//! Симуляция только описывает тела (RigidBody + Collider + материал);
//! шаг физики делает RapierPhysicsPlugin в клиенте.

pub mod bodies;

// Re-export основных типов
pub use bodies::{hit_box_body, tile_body, BodyParams};
