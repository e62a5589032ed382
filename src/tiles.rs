//! Tile set ownership: the [`TileGrid`] resource and the keyboard systems that
//! regenerate or resize it.

mod generator;
mod systems;
mod tile_grid;

pub use generator::random_tiles;
pub use tile_grid::TileGrid;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::GameState;
use crate::geometry::{GeometryError, GridPos, HexGeometry};

/// Configuration for the tile set and its demo controls.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct TilesConfig {
    /// Hexagon height in pixels; every other dimension derives from it.
    pub hex_height: f32,
    /// Cells shown before the first regeneration.
    pub initial_tiles: Vec<GridPos>,
    /// Cells drawn per regeneration (duplicates collapse).
    pub tile_count: usize,
    /// Exclusive upper bound of the random spread around the origin.
    pub max_spread: i32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Height change per resize key press.
    pub resize_step: f32,
    /// Smallest height reachable with the resize keys.
    pub min_hex_height: f32,
    /// Largest height reachable with the resize keys.
    pub max_hex_height: f32,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            hex_height: 52.0,
            initial_tiles: vec![GridPos::new(1, 1), GridPos::new(4, 4)],
            tile_count: 15,
            max_spread: 6,
            seed: None,
            resize_step: 4.0,
            min_hex_height: 16.0,
            max_hex_height: 128.0,
        }
    }
}

impl TilesConfig {
    /// Builds the starting grid, validating the height and initial cells.
    pub fn build_grid(&self) -> Result<TileGrid, GeometryError> {
        let geometry = HexGeometry::new(self.hex_height)?;
        TileGrid::new(geometry, self.initial_tiles.iter().copied())
    }
}

/// Random source for regeneration.
#[derive(Resource)]
pub struct TileRng(pub StdRng);

impl TileRng {
    fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

/// Owns the [`TileGrid`] and the Enter / `=` / `-` controls.
pub struct TilesPlugin {
    config: TilesConfig,
    grid: TileGrid,
}

impl TilesPlugin {
    /// Validates `config` up front so a bad height fails before the app starts.
    pub fn new(config: TilesConfig) -> Result<Self, GeometryError> {
        let grid = config.build_grid()?;
        Ok(Self { config, grid })
    }
}

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TilesConfig>()
            .register_type::<GridPos>()
            .insert_resource(self.config.clone())
            .insert_resource(self.grid.clone())
            .insert_resource(TileRng::from_seed(self.config.seed))
            .add_systems(
                Update,
                (systems::regenerate_tiles, systems::resize_hexes)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_scenario_grid() {
        let grid = TilesConfig::default().build_grid().unwrap();
        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            vec![GridPos::new(1, 1), GridPos::new(4, 4)]
        );
    }

    #[test]
    fn plugin_rejects_bad_height() {
        let cfg = TilesConfig {
            hex_height: 0.0,
            ..default()
        };
        assert!(matches!(
            TilesPlugin::new(cfg),
            Err(GeometryError::InvalidHexHeight(_))
        ));
    }

    #[test]
    fn plugin_rejects_empty_initial_tiles() {
        let cfg = TilesConfig {
            initial_tiles: Vec::new(),
            ..default()
        };
        assert!(matches!(
            TilesPlugin::new(cfg),
            Err(GeometryError::EmptyTileSet)
        ));
    }
}
