//! Headless симуляция tilewalk
//!
//! Прогон без рендера: сетка 3×3, персонаж делает несколько шагов,
//! по тайлам кликают. Модель "прикрепляется" сразу (загрузки нет).

use bevy::prelude::*;
use tilewalk_simulation::{
    create_headless_app, Character, Ground, HitBox, ModelAttached, MovementCommand,
    SimulationPlugin, TilePointer,
};

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin::default());

    let ground = app
        .world_mut()
        .spawn(Ground::new(3.0, 3).with_debug(true))
        .id();
    let character = app
        .world_mut()
        .spawn(Character::new("penguin", Vec3::new(0.0, 5.0, 0.0)))
        .id();

    app.update();
    app.world_mut().send_event(ModelAttached { character });

    let script = [
        MovementCommand::walk_up(character),
        MovementCommand::walk_right(character),
        MovementCommand::walk_down(character),
        MovementCommand::walk_left(character),
        MovementCommand::jump(character),
    ];
    for command in script {
        app.world_mut().send_event(command);
        app.update();

        let mut hit_boxes = app
            .world_mut()
            .query_filtered::<&Transform, With<HitBox>>();
        if let Ok(transform) = hit_boxes.single(app.world()) {
            println!("{:?}: position {:?}", command.direction, transform.translation);
        }
    }

    let tiles = app
        .world()
        .get::<Ground>(ground)
        .map(|g| g.tiles.clone())
        .unwrap_or_default();
    for tile in tiles.iter().take(2) {
        app.world_mut().send_event(TilePointer::over(*tile));
        app.world_mut().send_event(TilePointer::click(*tile));
        app.world_mut().send_event(TilePointer::out(*tile));
        app.update();
    }

    let selected = app.world().get::<Ground>(ground).and_then(|g| g.selected);
    println!("Selected tile: {:?}", selected);
    println!("Simulation complete!");
}
