//! Heuristic evaluation of 2048 grids for best-first search.
//!
//! - [`grid_analysis`] - lazily computed grid metrics (merge potential, smoothness,
//!   monotonicity, max tile)
//! - [`heuristic`] - the [`Heuristic`](heuristic::Heuristic) trait and the admissible
//!   [`MergeLogHeuristic`](heuristic::MergeLogHeuristic) used to rank search nodes
//!
//! # Example
//!
//! ```
//! use tilesearch_engine::Grid;
//! use tilesearch_evaluator::heuristic::{Heuristic, MergeLogHeuristic};
//!
//! let grid = Grid::from_rows([[128, 4, 8, 16], [2, 32, 64, 2], [4, 8, 16, 4], [2, 4, 2, 8]])
//!     .unwrap();
//! let h = MergeLogHeuristic.estimate(&grid, 2048).unwrap();
//! assert_eq!(h, 4.0);
//! ```

pub mod grid_analysis;
pub mod heuristic;
