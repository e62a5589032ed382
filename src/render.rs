//! Gizmo rendering of the hex grid.
//!
//! Reads [`TileGrid`](crate::tiles::TileGrid) every frame and draws a faint
//! reference grid, the bounding box, one disc per tile and the hovered cell.
//! Pixel space is y-down, Bevy's world is y-up; [`pixel_to_world`] and
//! [`world_to_pixel`] are the only places that flip.

mod systems;

use bevy::prelude::*;

use crate::GameState;

/// Colours and extents for the gizmo renderer.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct RenderConfig {
    /// Background clear color.
    pub clear_color: Color,
    /// Reference grid covers columns and rows in `-radius..=radius`.
    pub reference_radius: i32,
    /// Outline colour of the reference grid.
    pub reference_color: Color,
    /// Fill colour of the bounding box.
    pub bounds_color: Color,
    /// Disc colour for occupied cells.
    pub tile_color: Color,
    /// Marker colour for the origin cell.
    pub origin_color: Color,
    /// Outline colour of the hovered cell.
    pub hover_color: Color,
    /// Outline colour of the hovered cell's neighbours.
    pub neighbor_color: Color,
    /// Tile disc radius as a fraction of the hex width.
    pub tile_radius_factor: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb(0.392, 0.584, 0.929),
            reference_radius: 4,
            reference_color: Color::srgba(0.5, 0.5, 0.5, 0.8),
            bounds_color: Color::srgba(1.0, 0.0, 0.0, 0.9),
            tile_color: Color::WHITE,
            origin_color: Color::srgba(0.0, 1.0, 0.0, 0.6),
            hover_color: Color::srgb(1.0, 0.9, 0.2),
            neighbor_color: Color::srgba(1.0, 0.9, 0.2, 0.35),
            tile_radius_factor: 0.45,
        }
    }
}

/// Camera setup plus per-frame gizmo drawing.
pub struct RenderPlugin(pub RenderConfig);

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<RenderConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                (
                    systems::draw_reference_grid,
                    systems::draw_bounding_box,
                    systems::draw_tiles,
                    systems::draw_hovered_cell,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::draw_cell_labels.run_if(in_state(GameState::Debugging)),
            );
    }
}

/// Pixel-space point to Bevy world space.
pub fn pixel_to_world(pixel: Vec2) -> Vec2 {
    Vec2::new(pixel.x, -pixel.y)
}

/// Bevy world-space point to pixel space.
pub fn world_to_pixel(world: Vec2) -> Vec2 {
    Vec2::new(world.x, -world.y)
}
