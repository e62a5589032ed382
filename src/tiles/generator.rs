use rand::Rng;

use crate::geometry::GridPos;

/// Scatters `count` cells around the origin for the demo.
///
/// Picks a spread in `[1, max_spread)` and then draws each column and row
/// from `[-spread, spread)`. Returns no cells when `max_spread < 2` or
/// `count == 0`.
pub fn random_tiles<R: Rng>(rng: &mut R, count: usize, max_spread: i32) -> Vec<GridPos> {
    if max_spread < 2 {
        return Vec::new();
    }
    let spread = rng.random_range(1..max_spread);
    (0..count)
        .map(|_| {
            GridPos::new(
                rng.random_range(-spread..spread),
                rng.random_range(-spread..spread),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn produces_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_tiles(&mut rng, 15, 6).len(), 15);
    }

    #[test]
    fn stays_inside_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            for cell in random_tiles(&mut rng, 15, 6) {
                assert!((-5..5).contains(&cell.x), "{cell}");
                assert!((-5..5).contains(&cell.y), "{cell}");
            }
        }
    }

    #[test]
    fn same_seed_same_tiles() {
        let a = random_tiles(&mut StdRng::seed_from_u64(3), 15, 6);
        let b = random_tiles(&mut StdRng::seed_from_u64(3), 15, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_spread_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_tiles(&mut rng, 15, 1).is_empty());
        assert!(random_tiles(&mut rng, 0, 6).is_empty());
    }
}
