//! Debug label textures: индекс тайла, отрисованный в собственную текстуру
//!
//! На каждый тайл: Image (render target) + Camera2d + Text2d в отдельном
//! RenderLayers слое, чтобы камеры не видели чужие надписи. Камера и текст —
//! children тайла (удаляются вместе с ним при rebuild). Текст статичен:
//! после нескольких кадров камера выключается, текстура остаётся.

use bevy::color::palettes::css::BLUE;
use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::render::view::RenderLayers;
use tilewalk_simulation::ground::DebugLabel;
use tilewalk_simulation::GroundConfig;

/// Слой 0 — основная сцена; label слои начинаются после него
const LABEL_LAYER_BASE: usize = 1;

/// Кадров рендера до выключения камеры (GPU image + text layout готовы)
const LABEL_RENDER_FRAMES: u8 = 3;

/// Камера debug label: рендерит текстуру ограниченное число кадров
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCamera {
    frames_left: u8,
}

impl Default for LabelCamera {
    fn default() -> Self {
        Self {
            frames_left: LABEL_RENDER_FRAMES,
        }
    }
}

impl LabelCamera {
    /// Отсчитать кадр; `true` — текстура готова, камеру можно выключить
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left == 0
    }
}

/// Система: выключить label камеры, которые уже отрисовали текстуру
pub fn retire_label_cameras(mut cameras: Query<(&mut Camera, &mut LabelCamera)>) {
    for (mut camera, mut label) in cameras.iter_mut() {
        if camera.is_active && label.tick() {
            camera.is_active = false;
        }
    }
}

pub fn label_layer(index: u32) -> RenderLayers {
    RenderLayers::layer(LABEL_LAYER_BASE + index as usize)
}

pub fn label_texture_name(index: u32) -> String {
    format!("text-{}", index)
}

/// Белый canvas `size × size`, пригодный как render target
pub fn label_canvas(size: u32) -> Image {
    let extent = Extent3d {
        width: size,
        height: size,
        ..default()
    };
    let mut image = Image::new_fill(
        extent,
        TextureDimension::D2,
        &[255, 255, 255, 255],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;
    image
}

/// Создать label текстуру тайла (камера + текст — children `tile`) и материал с ней
pub fn spawn_label_material(
    commands: &mut Commands,
    tile: Entity,
    images: &mut Assets<Image>,
    materials: &mut Assets<StandardMaterial>,
    label: &DebugLabel,
    index: u32,
    config: &GroundConfig,
) -> Handle<StandardMaterial> {
    let image = images.add(label_canvas(config.label_canvas));
    let layer = label_layer(index);

    commands.spawn((
        Name::new(label_texture_name(index)),
        Camera2d,
        Camera {
            target: RenderTarget::Image(image.clone().into()),
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            order: -1,
            ..default()
        },
        LabelCamera::default(),
        layer.clone(),
        ChildOf(tile),
    ));

    commands.spawn((
        Text2d::new(label.text.clone()),
        TextFont {
            font_size: config.label_font_size,
            ..default()
        },
        TextColor(BLUE.into()),
        layer,
        ChildOf(tile),
    ));

    materials.add(StandardMaterial {
        base_color_texture: Some(image),
        ..default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_layers_are_unique_and_skip_main_layer() {
        assert_eq!(label_layer(0), RenderLayers::layer(1));
        assert_ne!(label_layer(3), label_layer(4));
        assert!(!label_layer(0).intersects(&RenderLayers::default()));
    }

    #[test]
    fn test_label_canvas_is_white_render_target() {
        let image = label_canvas(500);
        assert_eq!(image.width(), 500);
        assert_eq!(image.height(), 500);
        assert!(image
            .texture_descriptor
            .usage
            .contains(TextureUsages::RENDER_ATTACHMENT));
        let data = image.data.as_ref().map(|d| d[..4].to_vec());
        assert_eq!(data, Some(vec![255, 255, 255, 255]));
    }

    #[test]
    fn test_label_camera_retires_after_render_frames() {
        let mut label = LabelCamera::default();
        for _ in 1..LABEL_RENDER_FRAMES {
            assert!(!label.tick());
        }
        assert!(label.tick());
        // Дальше остаётся выключенной
        assert!(label.tick());
    }

    #[test]
    fn test_retire_label_cameras_system() {
        let mut app = App::new();
        app.add_systems(Update, retire_label_cameras);
        let camera = app
            .world_mut()
            .spawn((Camera::default(), LabelCamera::default()))
            .id();
        let main_camera = app.world_mut().spawn(Camera::default()).id();

        for _ in 1..LABEL_RENDER_FRAMES {
            app.update();
        }
        assert!(app.world().get::<Camera>(camera).unwrap().is_active);

        app.update();
        assert!(!app.world().get::<Camera>(camera).unwrap().is_active);
        assert!(app.world().get::<Camera>(main_camera).unwrap().is_active);
    }

    #[test]
    fn test_label_texture_name() {
        assert_eq!(label_texture_name(7), "text-7");
    }
}
