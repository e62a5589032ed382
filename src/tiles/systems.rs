use bevy::prelude::*;

use super::generator::random_tiles;
use super::{TileGrid, TileRng, TilesConfig};

/// Enter: replaces the tile set with a fresh random scatter.
pub fn regenerate_tiles(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<TilesConfig>,
    mut rng: ResMut<TileRng>,
    mut grid: ResMut<TileGrid>,
) {
    if !keys.just_pressed(KeyCode::Enter) {
        return;
    }
    let cells = random_tiles(&mut rng.0, cfg.tile_count, cfg.max_spread);
    match grid.replace(cells) {
        Ok(()) => {
            let b = grid.bounding_box();
            info!(
                "Regenerated {} tiles, bounds {:.1}x{:.1} at ({:.1}, {:.1})",
                grid.len(),
                b.size.x,
                b.size.y,
                b.origin.x,
                b.origin.y
            );
        }
        Err(err) => warn!("Keeping previous tiles: {err}"),
    }
}

/// `=` / `-`: grows or shrinks the hexagons within the configured range.
pub fn resize_hexes(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<TilesConfig>,
    mut grid: ResMut<TileGrid>,
) {
    let step = if keys.just_pressed(KeyCode::Equal) {
        cfg.resize_step
    } else if keys.just_pressed(KeyCode::Minus) {
        -cfg.resize_step
    } else {
        return;
    };
    let current = grid.geometry().height();
    let target = (current + step).clamp(cfg.min_hex_height, cfg.max_hex_height);
    if (target - current).abs() < f32::EPSILON {
        return;
    }
    match grid.set_hex_height(target) {
        Ok(()) => debug!("Hex height {current} -> {target}"),
        Err(err) => warn!("Keeping hex height {current}: {err}"),
    }
}
