//! Раскладка сетки тайлов
//!
//! Тайл (x, y) центрирован в `((x - N/2) * size, 0, (y - N/2) * size)`,
//! где `N/2` — целочисленное деление. Для нечётного N центр сдвинут
//! (N = 3 → offset 1, тайлы в -1, 0, +1; N = 5 → offset 2).

use bevy::prelude::*;

/// Максимальная сторона сетки: N² индексов помещаются в u32
pub const MAX_GRID_SIZE: u32 = u16::MAX as u32;

/// Координаты всех тайлов в порядке создания (row-major: x, затем y)
pub fn grid_coords(grid_size: u32) -> impl Iterator<Item = UVec2> {
    (0..grid_size)
        .flat_map(move |x| (0..grid_size).map(move |y| UVec2::new(x, y)))
}

/// Линейный индекс тайла (= порядок создания), насыщается на `u32::MAX`
pub fn tile_index(coords: UVec2, grid_size: u32) -> u32 {
    let index = u64::from(coords.x) * u64::from(grid_size) + u64::from(coords.y);
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Мировая позиция центра тайла
pub fn tile_position(coords: UVec2, grid_size: u32, cube_size: f32) -> Vec3 {
    let offset = (grid_size / 2) as i64;
    let x = coords.x as i64 - offset;
    let z = coords.y as i64 - offset;

    Vec3::new(x as f32 * cube_size, 0.0, z as f32 * cube_size)
}

/// Имя тайла (`Grid-<index>`)
pub fn tile_name(index: u32) -> String {
    format!("Grid-{}", index)
}

/// Текст debug label тайла
pub fn tile_label(index: u32) -> String {
    index.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coords_row_major() {
        let coords: Vec<UVec2> = grid_coords(3).collect();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], UVec2::new(0, 0));
        assert_eq!(coords[1], UVec2::new(0, 1));
        assert_eq!(coords[3], UVec2::new(1, 0));
        assert_eq!(coords[8], UVec2::new(2, 2));

        for (i, c) in coords.iter().enumerate() {
            assert_eq!(tile_index(*c, 3), i as u32);
        }
    }

    #[test]
    fn test_odd_grid_truncates_offset() {
        // N = 3: N/2 = 1
        assert_eq!(tile_position(UVec2::new(0, 0), 3, 2.0), Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(tile_position(UVec2::new(1, 1), 3, 2.0), Vec3::ZERO);
        assert_eq!(tile_position(UVec2::new(2, 0), 3, 2.0), Vec3::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn test_even_grid_is_shifted_by_half() {
        // N = 4: N/2 = 2 → от -2 до +1
        assert_eq!(tile_position(UVec2::new(0, 0), 4, 1.0), Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(tile_position(UVec2::new(3, 3), 4, 1.0), Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_tile_index_at_size_limit() {
        let last = UVec2::splat(MAX_GRID_SIZE - 1);
        assert_eq!(
            tile_index(last, MAX_GRID_SIZE),
            MAX_GRID_SIZE * MAX_GRID_SIZE - 1
        );
        // За пределом: без overflow panic
        assert_eq!(tile_index(UVec2::new(70_000, 5), 70_000), u32::MAX);
    }

    #[test]
    fn test_names_and_labels() {
        assert_eq!(tile_name(7), "Grid-7");
        assert_eq!(tile_label(12), "12");
        assert_eq!(grid_coords(0).count(), 0);
    }
}
