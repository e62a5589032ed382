//! Hex grid geometry: projection between grid cells and pixel space.
//!
//! Pure functions over a [`HexGeometry`]; nothing in this module touches the
//! Bevy ECS. Pixel space is y-down with cell `(0, 0)` at the origin, odd rows
//! shifted half a cell east.

mod bounds;
mod grid_pos;

pub use bounds::{BoundingBox, bounding_box};
pub use grid_pos::GridPos;

use bevy::prelude::{Reflect, Vec2};
use thiserror::Error;

/// Width-to-height ratio of a single hexagon in this tiling.
pub const WIDTH_RATIO: f32 = 0.8695;

/// Errors produced by the geometry core.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A bounding box was requested for zero cells.
    #[error("cannot compute a bounding box for an empty tile set")]
    EmptyTileSet,
    /// The hexagon height is NaN, infinite, zero or negative.
    #[error("hex height must be finite and positive, got {0}")]
    InvalidHexHeight(f32),
}

/// Derived hexagon constants for a single hex height `H`.
///
/// All fields are computed together by [`HexGeometry::new`]; there is no way to
/// set one without the others.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct HexGeometry {
    height: f32,
    width: f32,
    vertical_offset: f32,
    corner_drop: f32,
    slope: f32,
}

impl HexGeometry {
    /// Builds the constant set for a hexagon `height` pixels tall.
    pub fn new(height: f32) -> Result<Self, GeometryError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(GeometryError::InvalidHexHeight(height));
        }
        let width = height * WIDTH_RATIO;
        let vertical_offset = 0.75 * height;
        let corner_drop = height - vertical_offset;
        Ok(Self {
            height,
            width,
            vertical_offset,
            corner_drop,
            slope: corner_drop / (width / 2.0),
        })
    }

    /// Full hexagon height (tip to tip).
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Hexagon width (side edge to side edge), also the column pitch.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertical distance between the centres of adjacent rows.
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Vertical rise of a slanted edge.
    pub fn corner_drop(&self) -> f32 {
        self.corner_drop
    }

    /// Gradient of the slanted edges.
    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// Horizontal shift applied to every cell of row `y`.
    pub fn row_shift(&self, y: i32) -> f32 {
        if is_odd_row(y) { self.width / 2.0 } else { 0.0 }
    }

    /// Pixel-space centre of `cell`.
    pub fn grid_to_pixel(&self, cell: GridPos) -> Vec2 {
        Vec2::new(
            self.row_shift(cell.y) + cell.x as f32 * self.width,
            cell.y as f32 * self.vertical_offset,
        )
    }

    /// Cell containing `point`, or `None` if either coordinate is not finite.
    ///
    /// The first estimate picks the row band `[-C, 2C)` around a row centre and
    /// the nearest column in that row. Points below either lower slanted edge of
    /// the estimated cell belong to the row beneath and are moved there.
    ///
    /// Estimates round half away from zero, so a point exactly on the shared
    /// vertical edge of two cells lands in the one farther from column zero.
    pub fn pixel_to_grid(&self, point: Vec2) -> Option<GridPos> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let c = self.corner_drop;

        let mut row = ((point.y - c / 2.0) / self.vertical_offset).round() as i32;
        let mut col_estimate = point.x / self.width;
        if is_odd_row(row) {
            col_estimate -= 0.5;
        }
        let mut col = col_estimate.round() as i32;

        let rel_y = point.y - row as f32 * self.vertical_offset;
        let rel_x = point.x - col as f32 * self.width - self.row_shift(row);

        // Below the lower-left edge.
        if rel_y > self.slope * rel_x + 2.0 * c {
            row += 1;
            if is_odd_row(row) {
                col -= 1;
            }
        }

        // Below the lower-right edge.
        if rel_y > -self.slope * rel_x + 2.0 * c {
            row += 1;
            col += 1;
            if is_odd_row(row) {
                col -= 1;
            }
        }

        Some(GridPos::new(col, row))
    }

    /// The six corners of `cell` in pixel space, clockwise from the top tip.
    pub fn hex_corners(&self, cell: GridPos) -> [Vec2; 6] {
        let center = self.grid_to_pixel(cell);
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let side = half_h - self.corner_drop;
        [
            center + Vec2::new(0.0, -half_h),
            center + Vec2::new(half_w, -side),
            center + Vec2::new(half_w, side),
            center + Vec2::new(0.0, half_h),
            center + Vec2::new(-half_w, side),
            center + Vec2::new(-half_w, -side),
        ]
    }
}

/// Whether row `y` carries the half-width east shift. Holds for negative rows.
pub fn is_odd_row(y: i32) -> bool {
    y.rem_euclid(2) == 1
}
