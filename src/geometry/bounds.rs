use bevy::math::Rect;
use bevy::prelude::{Reflect, Vec2};

use super::{GeometryError, GridPos, HexGeometry, is_odd_row};

const CONTAINS_EPSILON: f32 = 1e-3;

/// Axis-aligned rectangle in pixel space. `origin` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct BoundingBox {
    /// Top-left corner (smallest x and y).
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl BoundingBox {
    /// Top-left corner.
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Whether `point` lies inside or on the border.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x - CONTAINS_EPSILON
            && point.y >= min.y - CONTAINS_EPSILON
            && point.x <= max.x + CONTAINS_EPSILON
            && point.y <= max.y + CONTAINS_EPSILON
    }

    /// Whether `other` fits entirely inside this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }

    /// Same rectangle as a Bevy [`Rect`].
    pub fn to_rect(&self) -> Rect {
        Rect::from_corners(self.min(), self.max())
    }
}

/// Westmost or eastmost column seen so far, with the extra half width its rows
/// contribute on that side.
struct ColumnExtent {
    column: i32,
    offset: f32,
}

/// Smallest rectangle holding the footprint of every cell in `cells`.
///
/// The east edge grows by half a cell when any cell in the eastmost column sits
/// on an odd row. The west edge shrinks by half a cell unless some cell in the
/// westmost column sits on an even row.
pub fn bounding_box(
    geometry: &HexGeometry,
    cells: impl IntoIterator<Item = GridPos>,
) -> Result<BoundingBox, GeometryError> {
    let half_width = geometry.width() / 2.0;
    let mut cells = cells.into_iter();
    let first = cells.next().ok_or(GeometryError::EmptyTileSet)?;

    let mut east = ColumnExtent {
        column: first.x,
        offset: if is_odd_row(first.y) { half_width } else { 0.0 },
    };
    let mut west = ColumnExtent {
        column: first.x,
        offset: if is_odd_row(first.y) { half_width } else { 0.0 },
    };
    let mut min_row = first.y;
    let mut max_row = first.y;

    for cell in cells {
        if cell.x > east.column {
            east = ColumnExtent {
                column: cell.x,
                offset: 0.0,
            };
        }
        if cell.x == east.column && is_odd_row(cell.y) {
            east.offset = half_width;
        }

        if cell.x < west.column {
            west = ColumnExtent {
                column: cell.x,
                offset: half_width,
            };
        }
        if cell.x == west.column && !is_odd_row(cell.y) {
            west.offset = 0.0;
        }

        min_row = min_row.min(cell.y);
        max_row = max_row.max(cell.y);
    }

    let width = geometry.width();
    let vertical_offset = geometry.vertical_offset();

    let size = Vec2::new(
        (east.column - west.column) as f32 * width + width + east.offset - west.offset,
        (max_row - min_row) as f32 * vertical_offset + vertical_offset + geometry.corner_drop(),
    );
    let origin = Vec2::new(
        west.column as f32 * width + west.offset - half_width,
        min_row as f32 * vertical_offset - geometry.height() / 2.0,
    );

    Ok(BoundingBox { origin, size })
}
