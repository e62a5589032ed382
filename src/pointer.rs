//! Cursor-to-cell translation.
//!
//! Each frame the cursor is unprojected through the 2D camera, flipped into
//! y-down pixel space and classified with
//! [`HexGeometry::pixel_to_grid`](crate::geometry::HexGeometry::pixel_to_grid).

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::geometry::{GridPos, HexGeometry};
use crate::render::world_to_pixel;
use crate::tiles::TileGrid;

/// Cell under the cursor, `None` when the cursor is outside the window.
#[derive(Resource, Default, Debug, Reflect)]
pub struct HoveredCell {
    /// Current hovered cell.
    pub current: Option<GridPos>,
}

/// Keeps [`HoveredCell`] in sync with the cursor.
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HoveredCell>()
            .init_resource::<HoveredCell>()
            .add_systems(Update, track_hovered_cell);
    }
}

/// Cell under a world-space cursor position, if any.
pub fn cell_under_cursor(geometry: &HexGeometry, world: Option<Vec2>) -> Option<GridPos> {
    world.and_then(|w| geometry.pixel_to_grid(world_to_pixel(w)))
}

fn track_hovered_cell(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    grid: Res<TileGrid>,
    mut hovered: ResMut<HoveredCell>,
) {
    let world = match (windows.single(), camera_q.single()) {
        (Ok(window), Ok((camera, cam_gt))) => window
            .cursor_position()
            .and_then(|cursor| camera.viewport_to_world_2d(cam_gt, cursor).ok()),
        _ => None,
    };

    let cell = cell_under_cursor(grid.geometry(), world);
    if hovered.current != cell {
        if let Some(cell) = cell {
            debug!("Hovering {cell}");
        }
        hovered.current = cell;
    }
}
