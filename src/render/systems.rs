use bevy::prelude::*;
use bevy_egui::egui;

use super::{RenderConfig, pixel_to_world};
use crate::geometry::{GridPos, HexGeometry};
use crate::pointer::HoveredCell;
use crate::tiles::TileGrid;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Camera")));
}

fn outline(gizmos: &mut Gizmos, geometry: &HexGeometry, cell: GridPos, color: Color) {
    let corners = geometry.hex_corners(cell);
    gizmos.linestrip_2d(
        corners
            .into_iter()
            .chain(std::iter::once(corners[0]))
            .map(pixel_to_world),
        color,
    );
}

// ── Per-frame drawing ──────────────────────────────────────────────

/// Faint outline of every cell around the origin, plus the origin marker.
pub fn draw_reference_grid(mut gizmos: Gizmos, grid: Res<TileGrid>, cfg: Res<RenderConfig>) {
    let geometry = grid.geometry();
    let r = cfg.reference_radius;
    for y in -r..=r {
        for x in -r..=r {
            outline(&mut gizmos, geometry, GridPos::new(x, y), cfg.reference_color);
        }
    }
    gizmos.circle_2d(
        pixel_to_world(geometry.grid_to_pixel(GridPos::ZERO)),
        geometry.width() * cfg.tile_radius_factor,
        cfg.origin_color,
    );
}

/// Rectangle enclosing the current tile set.
pub fn draw_bounding_box(mut gizmos: Gizmos, grid: Res<TileGrid>, cfg: Res<RenderConfig>) {
    let bounds = grid.bounding_box();
    gizmos.rect_2d(
        pixel_to_world(bounds.center()),
        bounds.size,
        cfg.bounds_color,
    );
}

/// One disc per occupied cell.
pub fn draw_tiles(mut gizmos: Gizmos, grid: Res<TileGrid>, cfg: Res<RenderConfig>) {
    let geometry = grid.geometry();
    let radius = geometry.width() * cfg.tile_radius_factor;
    for cell in grid.cells() {
        let center = pixel_to_world(geometry.grid_to_pixel(cell));
        gizmos.circle_2d(center, radius, cfg.tile_color);
        outline(&mut gizmos, geometry, cell, cfg.tile_color);
    }
}

/// Highlights the hovered cell and dims its neighbours.
pub fn draw_hovered_cell(
    mut gizmos: Gizmos,
    grid: Res<TileGrid>,
    hovered: Res<HoveredCell>,
    cfg: Res<RenderConfig>,
) {
    let Some(cell) = hovered.current else { return };
    let geometry = grid.geometry();
    for neighbor in cell.neighbors() {
        outline(&mut gizmos, geometry, neighbor, cfg.neighbor_color);
    }
    outline(&mut gizmos, geometry, cell, cfg.hover_color);
}

// ── Debug labels ───────────────────────────────────────────────────

/// Coordinate label over every occupied cell (Debugging state only).
pub fn draw_cell_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    grid: Res<TileGrid>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    let geometry = grid.geometry();

    for cell in grid.cells() {
        let world = pixel_to_world(geometry.grid_to_pixel(cell)).extend(0.0);
        if let Ok(viewport) = camera.world_to_viewport(cam_gt, world) {
            painter.text(
                egui::pos2(viewport.x, viewport.y),
                egui::Align2::CENTER_CENTER,
                format!("{},{}", cell.x, cell.y),
                egui::FontId::proportional(11.0),
                egui::Color32::BLACK,
            );
        }
    }
}
