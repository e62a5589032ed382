use std::cmp::Ordering;
use std::fmt;

use bevy::prelude::Reflect;
use hexx::Hex;

/// Column/row address of a cell on the odd-row-shifted grid.
///
/// Ordered by row first, then column, so sorted collections iterate in reading
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct GridPos {
    /// Column.
    pub x: i32,
    /// Row. Odd rows sit half a cell east.
    pub y: i32,
}

impl GridPos {
    /// The origin cell, projected onto pixel `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Cell at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Equivalent axial [`Hex`].
    pub fn to_hex(self) -> Hex {
        Hex::new(self.x - (self.y - (self.y & 1)) / 2, self.y)
    }

    /// Inverse of [`GridPos::to_hex`].
    pub fn from_hex(hex: Hex) -> Self {
        Self::new(hex.x + (hex.y - (hex.y & 1)) / 2, hex.y)
    }

    /// The six cells sharing an edge with this one.
    pub fn neighbors(self) -> [GridPos; 6] {
        self.to_hex().all_neighbors().map(Self::from_hex)
    }

    /// Number of steps between two cells.
    pub fn distance_to(self, other: GridPos) -> i32 {
        self.to_hex().distance_to(other.to_hex())
    }
}

impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sorted(cells: [GridPos; 6]) -> Vec<GridPos> {
        cells.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
    }

    #[test]
    fn orders_by_row_then_column() {
        let mut cells = vec![
            GridPos::new(5, 0),
            GridPos::new(-3, 2),
            GridPos::new(0, -1),
            GridPos::new(-2, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                GridPos::new(0, -1),
                GridPos::new(-2, 0),
                GridPos::new(5, 0),
                GridPos::new(-3, 2),
            ]
        );
    }

    #[test]
    fn hex_conversion_roundtrip() {
        for y in -9..=9 {
            for x in -9..=9 {
                let cell = GridPos::new(x, y);
                assert_eq!(GridPos::from_hex(cell.to_hex()), cell);
            }
        }
    }

    #[test]
    fn neighbors_of_even_row() {
        let expected = sorted([
            GridPos::new(-1, -1),
            GridPos::new(0, -1),
            GridPos::new(-1, 0),
            GridPos::new(1, 0),
            GridPos::new(-1, 1),
            GridPos::new(0, 1),
        ]);
        assert_eq!(sorted(GridPos::ZERO.neighbors()), expected);
    }

    #[test]
    fn neighbors_of_negative_odd_row() {
        let expected = sorted([
            GridPos::new(2, -2),
            GridPos::new(3, -2),
            GridPos::new(1, -1),
            GridPos::new(3, -1),
            GridPos::new(2, 0),
            GridPos::new(3, 0),
        ]);
        assert_eq!(sorted(GridPos::new(2, -1).neighbors()), expected);
    }

    #[test]
    fn distance_counts_steps() {
        assert_eq!(GridPos::ZERO.distance_to(GridPos::ZERO), 0);
        for n in GridPos::new(4, 3).neighbors() {
            assert_eq!(GridPos::new(4, 3).distance_to(n), 1);
        }
        assert_eq!(GridPos::ZERO.distance_to(GridPos::new(3, 0)), 3);
        assert_eq!(GridPos::ZERO.distance_to(GridPos::new(0, 4)), 4);
    }
}
