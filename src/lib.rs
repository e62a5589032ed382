#![warn(missing_docs)]
//! Hex tile placement with exact grid/pixel conversion.
//!
//! Tiles sit on a grid of pointy-topped hexagons whose odd rows are shifted
//! half a cell east. The [`geometry`] module converts between cells and pixel
//! positions and computes bounding boxes; [`tiles`] owns the current tile set;
//! [`render`] and [`pointer`] connect both to a Bevy window.

pub mod geometry;
pub mod pointer;
pub mod render;
pub mod tiles;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal interaction: regenerate, resize, hover.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}
