use crate::{
    core::{
        direction::Direction,
        grid::Grid,
        transform::{invert, transpose},
    },
    engine::spawn::{SpawnSequence, spawn},
    merged_tile,
};

/// Returns `true` if sliding `row` to the left would change it.
///
/// A row changes iff some adjacent pair `(i, i + 1)` either has an empty cell followed by a
/// tile (the tile moves) or two equal tiles that can merge (see [`merged_tile`]).
#[must_use]
pub fn is_row_left_movable(row: &[u32]) -> bool {
    row.windows(2).any(|pair| {
        (pair[0] == 0 && pair[1] != 0) || (pair[0] == pair[1] && merged_tile(pair[0]).is_some())
    })
}

/// Slides and merges `row` towards index 0 in place.
///
/// The row is tightened, merged in a single left-biased pass, then tightened again. Each
/// tile merges at most once per move and a merge result never merges again in the same
/// pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Row length is preserved.
///
/// Returns whether the row changed.
///
/// ```
/// use tilesearch_engine::slide_row_left;
///
/// let mut row = [0, 2, 0, 2];
/// assert!(slide_row_left(&mut row));
/// assert_eq!(row, [4, 0, 0, 0]);
/// ```
pub fn slide_row_left(row: &mut [u32]) -> bool {
    if !is_row_left_movable(row) {
        return false;
    }
    tighten(row);
    merge(row);
    tighten(row);
    true
}

fn tighten(row: &mut [u32]) {
    let mut packed = 0;
    for i in 0..row.len() {
        if row[i] != 0 {
            row[packed] = row[i];
            packed += 1;
        }
    }
    row[packed..].fill(0);
}

fn merge(row: &mut [u32]) {
    let mut i = 0;
    while i + 1 < row.len() {
        if row[i] == row[i + 1]
            && let Some(merged) = merged_tile(row[i])
        {
            row[i] = 0;
            row[i + 1] = merged;
            // The merged cell is consumed for this pass.
            i += 2;
        } else {
            i += 1;
        }
    }
}

fn slide_all_rows_left(mut grid: Grid) -> Grid {
    for row in grid.rows_mut() {
        slide_row_left(row);
    }
    grid
}

/// Returns `true` if moving in `direction` would change at least one cell.
///
/// The grid is not modified.
#[must_use]
pub fn is_movable(direction: Direction, grid: &Grid) -> bool {
    let any_row_movable = |g: &Grid| g.rows().any(is_row_left_movable);
    match direction {
        Direction::Left => any_row_movable(grid),
        Direction::Right => any_row_movable(&invert(grid)),
        Direction::Up => any_row_movable(&transpose(grid)),
        Direction::Down => any_row_movable(&invert(&transpose(grid))),
    }
}

/// Applies the slide/merge pipeline for `direction` without spawning.
///
/// Returns a new grid even if nothing moves; use [`is_movable`] to check legality first.
#[must_use]
pub fn slide(direction: Direction, grid: &Grid) -> Grid {
    match direction {
        Direction::Left => slide_all_rows_left(grid.clone()),
        Direction::Right => invert(&slide_all_rows_left(invert(grid))),
        Direction::Up => transpose(&slide_all_rows_left(transpose(grid))),
        Direction::Down => transpose(&invert(&slide_all_rows_left(invert(&transpose(grid))))),
    }
}

impl Grid {
    /// See [`is_movable`].
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        is_movable(direction, self)
    }

    /// Returns the slid grid (before any spawn), or `None` if the move is illegal.
    #[must_use]
    pub fn moved(&self, direction: Direction) -> Option<Grid> {
        self.can_move(direction).then(|| slide(direction, self))
    }

    /// Performs a full move: slide, merge, then spawn the next tile.
    ///
    /// If the move is illegal the grid is left untouched, nothing is spawned and `false` is
    /// returned. Otherwise `spawn_sequence.value_at(cursor)` is placed by [`spawn`]; the
    /// cursor wraps around the sequence length.
    pub fn apply_move(
        &mut self,
        direction: Direction,
        spawn_sequence: &SpawnSequence,
        cursor: usize,
    ) -> bool {
        let Some(moved) = self.moved(direction) else {
            return false;
        };
        *self = moved;
        spawn(self, spawn_sequence, cursor);
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;
    use crate::GridSize;

    fn grid<const W: usize, const H: usize>(rows: [[u32; W]; H]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn slid<const N: usize>(mut row: [u32; N]) -> [u32; N] {
        slide_row_left(&mut row);
        row
    }

    fn random_grid(rng: &mut Pcg32, size: GridSize) -> Grid {
        let mut g = Grid::empty(size);
        for y in 0..size.height {
            for x in 0..size.width {
                // Dense, low values so merges are common.
                let exp = rng.random_range(0..4);
                g.set(x, y, if exp == 0 { 0 } else { 1 << exp });
            }
        }
        g
    }

    #[test]
    fn test_no_merge_cascading() {
        assert_eq!(slid([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(slid([4, 4, 8, 0]), [8, 8, 0, 0]);
        assert_eq!(slid([2, 2, 4, 8]), [4, 4, 8, 0]);
    }

    #[test]
    fn test_merge_across_gaps() {
        assert_eq!(slid([0, 2, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(slid([2, 0, 0, 2]), [4, 0, 0, 0]);
    }

    #[test]
    fn test_left_biased_merge() {
        assert_eq!(slid([2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(slid([0, 4, 4, 4]), [8, 4, 0, 0]);
    }

    #[test]
    fn test_unchanged_row_reports_false() {
        let mut row = [2, 4, 8, 0];
        assert!(!slide_row_left(&mut row));
        assert_eq!(row, [2, 4, 8, 0]);
        let mut empty = [0; 4];
        assert!(!slide_row_left(&mut empty));
    }

    #[test]
    fn test_slide_idempotent_on_settled_rows() {
        for row in [[2, 4, 8, 16], [2, 4, 0, 0], [8, 2, 8, 0]] {
            let once = slid(row);
            assert_eq!(slid(once), once);
        }
    }

    #[test]
    fn test_single_cell_row() {
        assert_eq!(slid([2]), [2]);
        assert!(!is_row_left_movable(&[2]));
    }

    #[test]
    fn test_largest_tile_does_not_merge() {
        const TOP: u32 = 1 << 31;
        assert_eq!(slid([1 << 30, 1 << 30]), [TOP, 0]);
        assert!(!is_row_left_movable(&[TOP, TOP]));
        assert_eq!(slid([0, TOP, TOP]), [TOP, TOP, 0]);

        let spawns = SpawnSequence::new(vec![2]).unwrap();
        let mut g = grid([[TOP, TOP], [0, 0]]);
        let sum = g.tile_sum();
        assert!(!g.apply_move(Direction::Left, &spawns, 0));
        assert!(!g.apply_move(Direction::Right, &spawns, 0));
        assert_eq!(slide(Direction::Left, &g).tile_sum(), sum);
        assert!(g.apply_move(Direction::Down, &spawns, 0));
        assert_eq!(g, grid([[2, 0], [TOP, TOP]]));
    }

    #[test]
    fn test_preserves_tile_sum() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let g = random_grid(&mut rng, GridSize::CLASSIC);
            for d in Direction::ALL {
                assert_eq!(slide(d, &g).tile_sum(), g.tile_sum());
            }
        }
    }

    #[test]
    fn test_is_movable_iff_move_changes_grid() {
        let mut rng = Pcg32::seed_from_u64(42);
        for size in [GridSize::CLASSIC, GridSize::new(3, 5), GridSize::new(6, 2)] {
            for _ in 0..200 {
                let g = random_grid(&mut rng, size);
                for d in Direction::ALL {
                    assert_eq!(
                        is_movable(d, &g),
                        slide(d, &g) != g,
                        "direction {d} on\n{g}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_directions_reduce_to_left() {
        let mut rng = Pcg32::seed_from_u64(1234);
        for _ in 0..100 {
            let g = random_grid(&mut rng, GridSize::new(4, 3));
            let left = |g: &Grid| slide(Direction::Left, g);
            assert_eq!(slide(Direction::Right, &g), invert(&left(&invert(&g))));
            assert_eq!(
                slide(Direction::Up, &g),
                transpose(&left(&transpose(&g)))
            );
            assert_eq!(
                slide(Direction::Down, &g),
                transpose(&invert(&left(&invert(&transpose(&g)))))
            );
        }
    }

    #[test]
    fn test_each_direction() {
        let g = grid([[2, 0, 0, 2], [0, 4, 0, 0], [0, 4, 0, 8], [0, 0, 0, 8]]);
        assert_eq!(
            slide(Direction::Left, &g),
            grid([[4, 0, 0, 0], [4, 0, 0, 0], [4, 8, 0, 0], [8, 0, 0, 0]])
        );
        assert_eq!(
            slide(Direction::Right, &g),
            grid([[0, 0, 0, 4], [0, 0, 0, 4], [0, 0, 4, 8], [0, 0, 0, 8]])
        );
        assert_eq!(
            slide(Direction::Up, &g),
            grid([[2, 8, 0, 2], [0, 0, 0, 16], [0, 0, 0, 0], [0, 0, 0, 0]])
        );
        assert_eq!(
            slide(Direction::Down, &g),
            grid([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2], [2, 8, 0, 16]])
        );
    }

    #[test]
    fn test_moved_none_when_illegal() {
        let g = grid([[2, 4], [4, 2]]);
        for d in Direction::ALL {
            assert!(g.moved(d).is_none());
        }
    }

    #[test]
    fn test_apply_move_illegal_does_not_spawn() {
        let spawns = SpawnSequence::new(vec![2]).unwrap();
        let mut g = grid([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let before = g.clone();
        assert!(!g.apply_move(Direction::Left, &spawns, 0));
        assert!(!g.apply_move(Direction::Up, &spawns, 0));
        assert_eq!(g, before);
    }

    #[test]
    fn test_apply_move_slides_then_spawns() {
        let spawns = SpawnSequence::new(vec![2]).unwrap();
        let mut g = grid([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert!(g.apply_move(Direction::Right, &spawns, 0));
        assert_eq!(
            g,
            grid([[2, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
        );

        let mut g = grid([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert!(g.apply_move(Direction::Down, &spawns, 0));
        assert_eq!(
            g,
            grid([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]])
        );
    }

    #[test]
    fn test_apply_move_wraps_cursor() {
        let spawns = SpawnSequence::new(vec![2, 4]).unwrap();
        let mut g = grid([[0, 0], [0, 2]]);
        // cursor 3 wraps to index 1
        assert!(g.apply_move(Direction::Up, &spawns, 3));
        assert_eq!(g, grid([[4, 2], [0, 0]]));
    }
}
