use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::geometry::{BoundingBox, GeometryError, GridPos, HexGeometry, bounding_box};

/// The occupied cells plus the bounding box computed from them.
///
/// Cells and box only change together: every mutation computes the new state
/// first and commits it whole, or returns an error and leaves the grid as it
/// was.
#[derive(Resource, Clone, Debug)]
pub struct TileGrid {
    geometry: HexGeometry,
    cells: BTreeSet<GridPos>,
    bounds: BoundingBox,
}

impl TileGrid {
    /// Creates a grid holding `cells`. Fails on an empty cell set.
    pub fn new(
        geometry: HexGeometry,
        cells: impl IntoIterator<Item = GridPos>,
    ) -> Result<Self, GeometryError> {
        let cells: BTreeSet<GridPos> = cells.into_iter().collect();
        let bounds = bounding_box(&geometry, cells.iter().copied())?;
        Ok(Self {
            geometry,
            cells,
            bounds,
        })
    }

    /// Swaps in a new cell set and its bounding box.
    pub fn replace(
        &mut self,
        cells: impl IntoIterator<Item = GridPos>,
    ) -> Result<(), GeometryError> {
        *self = Self::new(self.geometry, cells)?;
        Ok(())
    }

    /// Rebuilds the geometry for a new hex height and recomputes the box.
    pub fn set_hex_height(&mut self, height: f32) -> Result<(), GeometryError> {
        let geometry = HexGeometry::new(height)?;
        let bounds = bounding_box(&geometry, self.cells.iter().copied())?;
        self.geometry = geometry;
        self.bounds = bounds;
        Ok(())
    }

    /// Occupied cells in row-then-column order.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }

    /// Number of distinct occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid cannot be emptied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is occupied.
    pub fn contains(&self, cell: GridPos) -> bool {
        self.cells.contains(&cell)
    }

    /// Box computed at the last mutation.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Geometry the cells are projected with.
    pub fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TileGrid {
        TileGrid::new(
            HexGeometry::new(52.0).unwrap(),
            [GridPos::new(1, 1), GridPos::new(4, 4)],
        )
        .unwrap()
    }

    #[test]
    fn new_computes_box() {
        let g = grid();
        let expected = bounding_box(g.geometry(), g.cells()).unwrap();
        assert_eq!(g.bounding_box(), expected);
        assert_eq!(g.len(), 2);
        assert!(!g.is_empty());
    }

    #[test]
    fn new_rejects_empty_set() {
        let result = TileGrid::new(HexGeometry::new(52.0).unwrap(), []);
        assert!(matches!(result, Err(GeometryError::EmptyTileSet)));
    }

    #[test]
    fn duplicates_collapse() {
        let mut g = grid();
        g.replace([GridPos::new(2, 2), GridPos::new(2, 2), GridPos::new(0, 0)])
            .unwrap();
        assert_eq!(g.len(), 2);
        assert!(g.contains(GridPos::new(2, 2)));
    }

    #[test]
    fn cells_iterate_in_row_order() {
        let mut g = grid();
        g.replace([GridPos::new(3, 1), GridPos::new(-1, 2), GridPos::new(0, 1)])
            .unwrap();
        let order: Vec<_> = g.cells().collect();
        assert_eq!(
            order,
            vec![GridPos::new(0, 1), GridPos::new(3, 1), GridPos::new(-1, 2)]
        );
    }

    #[test]
    fn replace_recomputes_box() {
        let mut g = grid();
        let before = g.bounding_box();
        g.replace([GridPos::new(-5, -5)]).unwrap();
        assert_ne!(g.bounding_box(), before);
        assert!(g.contains(GridPos::new(-5, -5)));
        assert!(!g.contains(GridPos::new(1, 1)));
    }

    #[test]
    fn replace_twice_is_idempotent() {
        let mut g = grid();
        let cells = [GridPos::new(2, -3), GridPos::new(-1, 0), GridPos::new(4, 1)];
        g.replace(cells).unwrap();
        let first = g.bounding_box();
        g.replace(cells).unwrap();
        assert_eq!(g.bounding_box(), first);
    }

    #[test]
    fn failed_replace_leaves_grid_untouched() {
        let mut g = grid();
        let before = g.clone();
        assert_eq!(g.replace([]), Err(GeometryError::EmptyTileSet));
        assert_eq!(g.bounding_box(), before.bounding_box());
        assert_eq!(g.cells().collect::<Vec<_>>(), before.cells().collect::<Vec<_>>());
    }

    #[test]
    fn set_hex_height_rescales_box() {
        let mut g = grid();
        let before = g.bounding_box();
        g.set_hex_height(104.0).unwrap();
        let after = g.bounding_box();
        assert!((after.size - before.size * 2.0).length() < 1e-3);
        assert!((g.geometry().height() - 104.0).abs() < f32::EPSILON);
    }

    #[test]
    fn invalid_hex_height_leaves_grid_untouched() {
        let mut g = grid();
        let before = g.bounding_box();
        assert!(g.set_hex_height(-3.0).is_err());
        assert_eq!(g.bounding_box(), before);
        assert!((g.geometry().height() - 52.0).abs() < f32::EPSILON);
    }
}
