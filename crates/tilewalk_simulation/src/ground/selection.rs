//! Pointer policy тайлов: hover highlight + click selection
//!
//! - hover-enter: включить highlight
//! - hover-exit: выключить, если тайл не выбран (выбранный держит highlight)
//! - click: снять highlight с предыдущего выбранного (если это другой тайл),
//!   затем выбрать кликнутый. Повторный клик по выбранному — no-op.

use bevy::prelude::*;

use crate::ground::components::{EdgeHighlight, Ground, GroundTile};

/// Тип pointer события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PointerAction {
    Over,
    Out,
    Click,
}

/// Event: pointer взаимодействие с тайлом
///
/// Генерируется picking observers клиента, обрабатывается `handle_tile_pointer`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TilePointer {
    pub tile: Entity,
    pub action: PointerAction,
}

impl TilePointer {
    pub fn over(tile: Entity) -> Self {
        Self {
            tile,
            action: PointerAction::Over,
        }
    }

    pub fn out(tile: Entity) -> Self {
        Self {
            tile,
            action: PointerAction::Out,
        }
    }

    pub fn click(tile: Entity) -> Self {
        Self {
            tile,
            action: PointerAction::Click,
        }
    }
}

/// Event: выбранный тайл сменился
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TileSelected {
    pub ground: Entity,
    pub tile: Entity,
    pub previous: Option<Entity>,
}

/// Изменение подсветки, которое надо применить к тайлам
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightChange {
    pub disable: Option<Entity>,
    pub enable: Option<Entity>,
}

impl Ground {
    pub fn hover_enter(&self, tile: Entity) -> HighlightChange {
        HighlightChange {
            disable: None,
            enable: Some(tile),
        }
    }

    pub fn hover_exit(&self, tile: Entity) -> HighlightChange {
        HighlightChange {
            disable: (!self.is_selected(tile)).then_some(tile),
            enable: None,
        }
    }

    pub fn pick(&mut self, tile: Entity) -> HighlightChange {
        let mut change = HighlightChange::default();

        if let Some(previous) = self.selected {
            if previous != tile {
                change.disable = Some(previous);
            }
        }

        if !self.is_selected(tile) {
            self.selected = Some(tile);
            change.enable = Some(tile);
        }

        change
    }
}

/// Применить изменение к EdgeHighlight (сначала disable, потом enable)
pub fn apply_highlight_change(change: HighlightChange, highlights: &mut Query<&mut EdgeHighlight>) {
    if let Some(tile) = change.disable {
        if let Ok(mut highlight) = highlights.get_mut(tile) {
            highlight.enabled = false;
        }
    }
    if let Some(tile) = change.enable {
        if let Ok(mut highlight) = highlights.get_mut(tile) {
            highlight.enabled = true;
        }
    }
}

/// Система: TilePointer → selection state + highlight
pub fn handle_tile_pointer(
    mut pointer_events: EventReader<TilePointer>,
    mut selected_events: EventWriter<TileSelected>,
    tiles: Query<&GroundTile>,
    mut grounds: Query<&mut Ground>,
    mut highlights: Query<&mut EdgeHighlight>,
) {
    for event in pointer_events.read() {
        let Ok(tile) = tiles.get(event.tile) else {
            continue;
        };
        let Ok(mut ground) = grounds.get_mut(tile.ground) else {
            crate::log_warning(&format!(
                "Tile {:?} points to missing ground {:?}",
                event.tile, tile.ground
            ));
            continue;
        };

        let change = match event.action {
            PointerAction::Over => ground.hover_enter(event.tile),
            PointerAction::Out => ground.hover_exit(event.tile),
            PointerAction::Click => {
                let previous = ground.selected;
                let change = ground.pick(event.tile);
                if change.enable.is_some() {
                    selected_events.write(TileSelected {
                        ground: tile.ground,
                        tile: event.tile,
                        previous,
                    });
                    crate::log(&format!(
                        "Tile #{} selected (previous: {:?})",
                        tile.index, previous
                    ));
                }
                change
            }
        };

        apply_highlight_change(change, &mut highlights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles() -> (Entity, Entity) {
        (Entity::from_raw(1), Entity::from_raw(2))
    }

    #[test]
    fn test_hover_enter_always_highlights() {
        let (a, _) = tiles();
        let ground = Ground::new(1.0, 3);
        assert_eq!(ground.hover_enter(a).enable, Some(a));
    }

    #[test]
    fn test_hover_exit_keeps_selected_highlight() {
        let (a, b) = tiles();
        let mut ground = Ground::new(1.0, 3);
        ground.pick(a);

        assert_eq!(ground.hover_exit(a), HighlightChange::default());
        assert_eq!(ground.hover_exit(b).disable, Some(b));
    }

    #[test]
    fn test_pick_switches_selection() {
        let (a, b) = tiles();
        let mut ground = Ground::new(1.0, 3);

        let first = ground.pick(a);
        assert_eq!(
            first,
            HighlightChange {
                disable: None,
                enable: Some(a)
            }
        );

        let second = ground.pick(b);
        assert_eq!(
            second,
            HighlightChange {
                disable: Some(a),
                enable: Some(b)
            }
        );
        assert_eq!(ground.selected, Some(b));
    }

    #[test]
    fn test_repeated_pick_is_noop() {
        let (a, _) = tiles();
        let mut ground = Ground::new(1.0, 3);
        ground.pick(a);

        assert_eq!(ground.pick(a), HighlightChange::default());
        assert_eq!(ground.selected, Some(a));
    }
}
