//! Center Hexes viewer.
//!
//! Enter scatters a new tile set, `=` / `-` resize the hexagons, Tab toggles
//! the inspector and coordinate labels, Escape quits.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use center_hexes::GameState;
use center_hexes::geometry::GeometryError;
use center_hexes::pointer::PointerPlugin;
use center_hexes::render::{RenderConfig, RenderPlugin};
use center_hexes::tiles::{TilesConfig, TilesPlugin};

#[cfg(feature = "native")]
mod cli {
    use clap::Parser;

    use center_hexes::tiles::TilesConfig;

    /// Command-line overrides for the tile set.
    #[derive(Parser, Debug)]
    #[command(version, about = "Hex tile placement viewer")]
    pub struct Args {
        /// Hexagon height in pixels.
        #[arg(long)]
        pub hex_height: Option<f32>,
        /// Cells drawn per regeneration.
        #[arg(long)]
        pub tile_count: Option<usize>,
        /// Exclusive upper bound of the random spread.
        #[arg(long)]
        pub max_spread: Option<i32>,
        /// Seed for reproducible regeneration.
        #[arg(long)]
        pub seed: Option<u64>,
    }

    impl Args {
        pub fn apply(self, mut cfg: TilesConfig) -> TilesConfig {
            if let Some(h) = self.hex_height {
                cfg.hex_height = h;
            }
            if let Some(n) = self.tile_count {
                cfg.tile_count = n;
            }
            if let Some(s) = self.max_spread {
                cfg.max_spread = s;
            }
            cfg.seed = self.seed.or(cfg.seed);
            cfg
        }
    }
}

fn tiles_config() -> TilesConfig {
    #[cfg(feature = "native")]
    {
        use clap::Parser;
        cli::Args::parse().apply(TilesConfig::default())
    }
    #[cfg(not(feature = "native"))]
    {
        TilesConfig::default()
    }
}

fn main() -> Result<(), GeometryError> {
    let tiles = TilesPlugin::new(tiles_config())?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Center Hexes".into(),
            resolution: WindowResolution::new(1000, 650),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(tiles)
    .add_plugins(RenderPlugin(RenderConfig::default()))
    .add_plugins(PointerPlugin)
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    app.run();
    Ok(())
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        info!("Switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
