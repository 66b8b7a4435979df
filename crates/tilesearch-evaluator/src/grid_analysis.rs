//! Lazily evaluated grid metrics.
//!
//! [`GridAnalysis`] wraps a borrowed [`Grid`] and computes each metric on first access. Row
//! and column metrics share a single cached transpose, so requesting several metrics costs
//! one transpose at most.
//!
//! | Metric               | Range  | Used by [`MergeLogHeuristic`] |
//! |----------------------|--------|-------------------------------|
//! | [`merge_factor`]     | `≤ 0`  | yes                           |
//! | [`smoothness`]       | `≥ 1`  | no                            |
//! | [`monotonicity`]     | `≤ -1` | no                            |
//!
//! [`MergeLogHeuristic`]: crate::heuristic::MergeLogHeuristic
//! [`merge_factor`]: GridAnalysis::merge_factor
//! [`smoothness`]: GridAnalysis::smoothness
//! [`monotonicity`]: GridAnalysis::monotonicity

use std::{cell::OnceCell, cmp::Ordering};

use tilesearch_engine::{Grid, transpose};

#[derive(Debug)]
pub struct GridAnalysis<'a> {
    grid: &'a Grid,
    transposed: OnceCell<Grid>,
    merge_count: OnceCell<usize>,
    smoothness: OnceCell<u64>,
    direction_switches: OnceCell<usize>,
}

impl<'a> GridAnalysis<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            transposed: OnceCell::new(),
            merge_count: OnceCell::new(),
            smoothness: OnceCell::new(),
            direction_switches: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    #[must_use]
    pub fn transposed(&self) -> &Grid {
        self.transposed.get_or_init(|| transpose(self.grid))
    }

    /// Every row followed by every column, each read top-to-bottom / left-to-right.
    fn lines(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.grid.rows().chain(self.transposed().rows())
    }

    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    #[must_use]
    pub fn num_empty_cells(&self) -> usize {
        self.grid.num_empty_cells()
    }

    /// Number of adjacent equal pairs over all tightened rows and columns.
    ///
    /// Each line is tightened the same way a slide does (tiles packed to the front, empty
    /// cells padded at the end) before pairs are counted. The padded empty cells are part of
    /// the line, so a run of `k` trailing empties contributes `k - 1` pairs.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        *self.merge_count.get_or_init(|| {
            let mut tightened = Vec::with_capacity(self.grid.width().max(self.grid.height()));
            self.lines()
                .map(|line| {
                    tightened.clear();
                    tightened.extend(line.iter().copied().filter(|&v| v != 0));
                    tightened.resize(line.len(), 0);
                    tightened.windows(2).filter(|w| w[0] == w[1]).count()
                })
                .sum()
        })
    }

    /// Negated [`merge_count`](Self::merge_count); always `≤ 0`.
    #[must_use]
    pub fn merge_factor(&self) -> i32 {
        -i32::try_from(self.merge_count()).expect("merge count exceeds i32 range")
    }

    /// Sum of absolute differences between horizontally and vertically adjacent cells,
    /// plus one so the value is never zero.
    #[must_use]
    pub fn smoothness(&self) -> u64 {
        *self.smoothness.get_or_init(|| {
            let diffs: u64 = self
                .lines()
                .flat_map(|line| line.windows(2))
                .map(|w| u64::from(w[0].abs_diff(w[1])))
                .sum();
            diffs + 1
        })
    }

    /// Number of times a row or column switches between increasing and decreasing.
    ///
    /// Equal neighbours keep the current trend.
    #[must_use]
    pub fn direction_switches(&self) -> usize {
        *self.direction_switches.get_or_init(|| {
            self.lines()
                .map(|line| {
                    let mut trend = None;
                    let mut switches = 0;
                    for w in line.windows(2) {
                        let next = w[1].cmp(&w[0]);
                        if next == Ordering::Equal {
                            continue;
                        }
                        if trend.is_some_and(|t| t != next) {
                            switches += 1;
                        }
                        trend = Some(next);
                    }
                    switches
                })
                .sum()
        })
    }

    /// `-(direction_switches + 1)`; always `≤ -1`, closer to zero is more monotonic.
    #[must_use]
    pub fn monotonicity(&self) -> i32 {
        -i32::try_from(self.direction_switches() + 1).expect("switch count exceeds i32 range")
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn grid<const W: usize, const H: usize>(rows: [[u32; W]; H]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_merge_count_full_grid() {
        let g = grid([[2, 2, 4, 8], [4, 8, 16, 32], [4, 16, 32, 64], [8, 4, 2, 2]]);
        let analysis = GridAnalysis::new(&g);
        // rows: (2,2) + (2,2); columns: (4,4) in column 0
        assert_eq!(analysis.merge_count(), 3);
        assert_eq!(analysis.merge_factor(), -3);
    }

    #[test]
    fn test_merge_count_ignores_gaps_between_tiles() {
        let g = grid([[2, 0, 2], [4, 8, 16], [32, 64, 128]]);
        let analysis = GridAnalysis::new(&g);
        // row 0 tightens to [2, 2, 0]: one tile pair; column 1 tightens to [8, 64, 0]
        assert_eq!(analysis.merge_count(), 1);
    }

    #[test]
    fn test_merge_count_counts_padded_empties() {
        let g = grid([[2, 0, 0, 0]]);
        let analysis = GridAnalysis::new(&g);
        // row [2, 0, 0, 0]: two empty pairs; each single-cell column has no pair
        assert_eq!(analysis.merge_count(), 2);
    }

    #[test]
    fn test_merge_factor_never_positive() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..200 {
            let rows: Vec<Vec<u32>> = (0..4)
                .map(|_| {
                    (0..4)
                        .map(|_| {
                            let exp = rng.random_range(0..6);
                            if exp == 0 { 0 } else { 1 << exp }
                        })
                        .collect()
                })
                .collect();
            let g = Grid::from_rows(&rows).unwrap();
            assert!(GridAnalysis::new(&g).merge_factor() <= 0);
        }
    }

    #[test]
    fn test_smoothness() {
        let g = grid([[2, 4], [8, 8]]);
        // rows: |2-4| + |8-8| = 2; columns: |2-8| + |4-8| = 10
        assert_eq!(GridAnalysis::new(&g).smoothness(), 13);
        let flat = grid([[0, 0], [0, 0]]);
        assert_eq!(GridAnalysis::new(&flat).smoothness(), 1);
    }

    #[test]
    fn test_monotonicity() {
        let sorted = grid([[2, 4, 8, 16]]);
        assert_eq!(GridAnalysis::new(&sorted).direction_switches(), 0);
        assert_eq!(GridAnalysis::new(&sorted).monotonicity(), -1);

        // up, down, up: two switches; the equal pair keeps the trend
        let zigzag = grid([[2, 8, 8, 4, 16]]);
        assert_eq!(GridAnalysis::new(&zigzag).direction_switches(), 2);
        assert_eq!(GridAnalysis::new(&zigzag).monotonicity(), -3);
    }

    #[test]
    fn test_transposed_is_cached() {
        let g = grid([[2, 4, 8]]);
        let analysis = GridAnalysis::new(&g);
        let first: *const Grid = analysis.transposed();
        let second: *const Grid = analysis.transposed();
        assert_eq!(first, second);
        assert_eq!(analysis.transposed().size().height, 3);
    }
}
