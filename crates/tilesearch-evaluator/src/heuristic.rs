//! Heuristic estimates of the remaining search cost.
//!
//! A* returns optimal paths only if its heuristic is *admissible*: it must never
//! overestimate the number of moves still needed to reach the goal tile. The
//! [`Heuristic`] trait is the seam for plugging in estimators; [`MergeLogHeuristic`] is the
//! default.
//!
//! # `MergeLogHeuristic`
//!
//! ```text
//! H = merge_factor + log2(goal / max_tile)
//! ```
//!
//! - `log2(goal / max_tile)` is the number of doublings the largest tile still needs. Each
//!   move doubles a tile at most once, so at least that many moves remain.
//! - `merge_factor` is the negated count of adjacent equal pairs (see
//!   [`GridAnalysis::merge_factor`]). It is never positive, so adding it can only lower the
//!   estimate.
//!
//! The sum therefore never exceeds the true remaining cost. Any change to the formula must
//! keep both properties.
//!
//! # Domain
//!
//! The logarithm is defined only for `1 ≤ max_tile < goal`. Grids outside that range yield
//! [`HeuristicDomainError`]; search code is expected to test for the goal first and never
//! ask for an estimate of a grid that already holds the goal tile.

use std::fmt;

use tilesearch_engine::Grid;

use crate::grid_analysis::GridAnalysis;

/// The grid is outside the heuristic's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HeuristicDomainError {
    /// `max_tile ≥ goal`: the goal is already reached, the estimate is undefined.
    #[display("max tile {max_tile} already reaches goal {goal}")]
    GoalReached { max_tile: u32, goal: u32 },
    /// The grid holds no tile, so `goal / max_tile` is undefined.
    #[display("grid has no tiles")]
    NoTiles,
}

/// Estimates the remaining cost (in moves) from a grid to the goal tile.
///
/// Lower is better. Implementations used with A* must be admissible.
pub trait Heuristic: fmt::Debug + Send + Sync {
    /// Returns the estimate for `grid`, or an error if `grid` is outside the domain.
    fn estimate(&self, grid: &Grid, goal: u32) -> Result<f64, HeuristicDomainError>;
}

/// `merge_factor + log2(goal / max_tile)`.
///
/// Smoothness and monotonicity are available from [`GridAnalysis`] but deliberately not part
/// of this estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeLogHeuristic;

impl MergeLogHeuristic {
    /// Computes the estimate from an existing analysis, reusing its cached metrics.
    pub fn estimate_analysis(
        analysis: &GridAnalysis<'_>,
        goal: u32,
    ) -> Result<f64, HeuristicDomainError> {
        let max_tile = analysis.max_tile();
        if max_tile == 0 {
            return Err(HeuristicDomainError::NoTiles);
        }
        if max_tile >= goal {
            return Err(HeuristicDomainError::GoalReached { max_tile, goal });
        }
        let doublings = (f64::from(goal) / f64::from(max_tile)).log2();
        Ok(f64::from(analysis.merge_factor()) + doublings)
    }
}

impl Heuristic for MergeLogHeuristic {
    #[inline]
    fn estimate(&self, grid: &Grid, goal: u32) -> Result<f64, HeuristicDomainError> {
        Self::estimate_analysis(&GridAnalysis::new(grid), goal)
    }
}
